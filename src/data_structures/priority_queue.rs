use crate::data_structures::{Sequence, Slice};

/// A binary min-heap mapping ordered keys to arbitrary values
///
/// Entries are stored in a dense 0-indexed array: the children of position `i`
/// live at `2i + 1` and `2i + 2`, its parent at `(i - 1) / 2`. The entry at
/// position 0 always holds the smallest key.
///
/// There is no `decrease_key`. Callers that need to lower the key of a value
/// push a new entry and discard the stale one when it is popped later.
///
/// # Example
///
/// ```rust
/// use weighted_paths::PriorityQueue;
///
/// let mut queue = PriorityQueue::new();
/// queue.push(42, "foo");
/// queue.push(17, "bar");
/// assert_eq!(queue.pop(), Some((17, "bar")));
/// ```
#[derive(Debug, Clone)]
pub struct PriorityQueue<K, V>
where
    K: Ord,
{
    /// The underlying heap array
    items: Slice<Entry<K, V>>,
}

#[derive(Debug, Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> PriorityQueue<K, V>
where
    K: Ord,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        PriorityQueue { items: Slice::new() }
    }

    /// Creates a new empty priority queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        PriorityQueue {
            items: Slice::with_capacity(capacity),
        }
    }

    /// Returns the number of entries in the priority queue
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Inserts an entry
    ///
    /// # Time Complexity
    /// O(log n) amortized.
    pub fn push(&mut self, key: K, value: V) {
        self.items.push_back(Entry { key, value });
        self.sift_up(self.items.len() - 1);
    }

    /// Removes and returns the entry with the smallest key
    ///
    /// Entries with equal keys come out in an unspecified order.
    pub fn pop(&mut self) -> Option<(K, V)> {
        let n = self.items.len().checked_sub(1)?;
        self.items.swap(0, n);
        self.sift_down(0, n);
        self.items.pop_back().map(|entry| (entry.key, entry.value))
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            if !self.less(child, parent) {
                break;
            }
            self.items.swap(parent, child);
            child = parent;
        }
    }

    /// Restores the heap below `node`, looking only at the first `n` entries
    fn sift_down(&mut self, mut node: usize, n: usize) {
        loop {
            let left = 2 * node + 1;
            if left >= n {
                break;
            }
            let mut child = left;
            let right = left + 1;
            // Ties go to the left child
            if right < n && self.less(right, left) {
                child = right;
            }
            if !self.less(child, node) {
                break;
            }
            self.items.swap(node, child);
            node = child;
        }
    }

    fn less(&self, i: usize, j: usize) -> bool {
        let items = self.items.as_slice();
        items[i].key < items[j].key
    }
}

impl<K, V> Default for PriorityQueue<K, V>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
