use crate::data_structures::Sequence;

/// A growable contiguous sequence
///
/// Appending and removing at the back is O(1) amortized. Operations at the
/// front shift every element and are O(n); they exist so the slice can serve
/// as a baseline next to [`Deque`](crate::data_structures::Deque).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slice<T> {
    items: Vec<T>,
}

impl<T> Slice<T> {
    /// Creates a new empty slice
    pub fn new() -> Self {
        Slice { items: Vec::new() }
    }

    /// Creates a new empty slice with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Slice {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Exchanges the elements at positions `i` and `j`
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.items.swap(i, j);
    }

    /// Returns the element at `index`, if any
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Slice<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence<T> for Slice<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    fn front(&self) -> Option<&T> {
        self.items.first()
    }

    fn back(&self) -> Option<&T> {
        self.items.last()
    }

    fn push_front(&mut self, value: T) {
        self.items.insert(0, value);
    }

    fn push_back(&mut self, value: T) {
        self.items.push(value);
    }

    fn pop_front(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        Some(self.items.remove(0))
    }

    fn pop_back(&mut self) -> Option<T> {
        self.items.pop()
    }
}

impl<T> FromIterator<T> for Slice<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Slice {
            items: iter.into_iter().collect(),
        }
    }
}
