/// Trait representing a sequence that can grow and shrink at both ends
///
/// Every lookup or removal on an empty sequence returns `None` instead of
/// panicking, so callers check the result before using it.
pub trait Sequence<T> {
    /// Returns the number of elements in the sequence
    fn len(&self) -> usize;

    /// Returns true if the sequence holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all elements
    fn clear(&mut self);

    /// Returns the first element, if any
    fn front(&self) -> Option<&T>;

    /// Returns the last element, if any
    fn back(&self) -> Option<&T>;

    /// Inserts an element at the beginning of the sequence
    fn push_front(&mut self, value: T);

    /// Appends an element to the end of the sequence
    fn push_back(&mut self, value: T);

    /// Removes and returns the first element, if any
    fn pop_front(&mut self) -> Option<T>;

    /// Removes and returns the last element, if any
    fn pop_back(&mut self) -> Option<T>;
}
