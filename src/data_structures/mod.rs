pub mod deque;
pub mod priority_queue;
pub mod slice;
pub mod traits;

pub use deque::Deque;
pub use priority_queue::PriorityQueue;
pub use slice::Slice;
pub use traits::Sequence;
