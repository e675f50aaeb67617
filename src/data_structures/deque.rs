use crate::data_structures::Sequence;

/// Smallest slot buffer allocated on first growth
const MIN_CAPACITY: usize = 4;

/// A double-ended queue stored in a ring buffer
///
/// Elements live in an owned buffer of slots addressed by index; the logical
/// front sits at `head` and the sequence wraps around the end of the buffer.
/// Pushing and popping at either end is O(1) amortized. When the buffer is
/// full it is doubled and the elements are laid out again starting at slot 0.
#[derive(Debug, Clone)]
pub struct Deque<T> {
    /// Slot buffer; exactly `len` slots starting at `head` (wrapping) are occupied
    slots: Vec<Option<T>>,

    /// Physical index of the front element
    head: usize,

    /// Number of occupied slots
    len: usize,
}

impl<T> Deque<T> {
    /// Creates a new empty deque without allocating
    pub fn new() -> Self {
        Deque {
            slots: Vec::new(),
            head: 0,
            len: 0,
        }
    }

    /// Creates a new empty deque with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Deque {
            slots,
            head: 0,
            len: 0,
        }
    }

    /// Returns the number of elements the deque holds before it must grow
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Iterates over the elements from front to back
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |offset| self.slots[self.physical(offset)].as_ref())
    }

    fn physical(&self, offset: usize) -> usize {
        (self.head + offset) % self.slots.len()
    }

    fn grow(&mut self) {
        let old_capacity = self.slots.len();
        let new_capacity = (old_capacity * 2).max(MIN_CAPACITY);
        let mut slots = Vec::with_capacity(new_capacity);
        for offset in 0..self.len {
            slots.push(self.slots[(self.head + offset) % old_capacity].take());
        }
        slots.resize_with(new_capacity, || None);
        self.slots = slots;
        self.head = 0;
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence<T> for Deque<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        // Drop the stored values but keep the buffer for reuse
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.len = 0;
    }

    fn front(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.slots[self.head].as_ref()
    }

    fn back(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.slots[self.physical(self.len - 1)].as_ref()
    }

    fn push_front(&mut self, value: T) {
        if self.len == self.slots.len() {
            self.grow();
        }
        let capacity = self.slots.len();
        self.head = (self.head + capacity - 1) % capacity;
        self.slots[self.head] = Some(value);
        self.len += 1;
    }

    fn push_back(&mut self, value: T) {
        if self.len == self.slots.len() {
            self.grow();
        }
        let tail = self.physical(self.len);
        self.slots[tail] = Some(value);
        self.len += 1;
    }

    fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.slots[self.head].take();
        self.head = (self.head + 1) % self.slots.len();
        self.len -= 1;
        value
    }

    fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let tail = self.physical(self.len - 1);
        self.len -= 1;
        self.slots[tail].take()
    }
}
