use weighted_paths::{Deque, Sequence, Slice};

fn check_sequence<S: Sequence<i32>>(sequence: &mut S) {
    // First run
    check_sequence_once(sequence);
    // Repeat
    check_sequence_once(sequence);
    // Add element, clear, repeat
    sequence.push_back(13);
    sequence.clear();
    assert!(sequence.is_empty());
    check_sequence_once(sequence);
}

fn check_sequence_once<S: Sequence<i32>>(sequence: &mut S) {
    // Empty sequence
    assert_eq!(sequence.front(), None);
    assert_eq!(sequence.back(), None);
    assert_eq!(sequence.pop_front(), None);
    assert_eq!(sequence.pop_back(), None);

    sequence.push_back(42);
    assert_eq!(sequence.len(), 1);
    assert_eq!(sequence.front(), Some(&42));
    assert_eq!(sequence.back(), Some(&42));

    sequence.push_front(17);
    sequence.push_front(4711);
    assert_eq!(sequence.len(), 3);
    assert_eq!(sequence.front(), Some(&4711));
    assert_eq!(sequence.back(), Some(&42));

    assert_eq!(sequence.pop_back(), Some(42));
    assert_eq!(sequence.len(), 2);
    assert_eq!(sequence.front(), Some(&4711));
    assert_eq!(sequence.back(), Some(&17));

    assert_eq!(sequence.pop_front(), Some(4711));
    assert_eq!(sequence.len(), 1);
    assert_eq!(sequence.front(), Some(&17));
    assert_eq!(sequence.back(), Some(&17));

    // Empty again
    assert_eq!(sequence.pop_back(), Some(17));
    assert_eq!(sequence.len(), 0);
    assert_eq!(sequence.front(), None);
    assert_eq!(sequence.back(), None);
    assert_eq!(sequence.pop_front(), None);
    assert_eq!(sequence.pop_back(), None);
}

#[test]
fn test_deque_sequence_contract() {
    let mut deque = Deque::new();
    check_sequence(&mut deque);
}

#[test]
fn test_slice_sequence_contract() {
    let mut slice = Slice::new();
    check_sequence(&mut slice);
}

#[test]
fn test_deque_wraps_and_grows() {
    let mut deque = Deque::with_capacity(4);

    // Move the head away from slot 0 so later pushes wrap around
    deque.push_back(0);
    deque.push_back(1);
    assert_eq!(deque.pop_front(), Some(0));
    deque.push_back(2);
    deque.push_back(3);
    deque.push_back(4);
    assert_eq!(deque.capacity(), 4);

    // Full: the next push doubles the buffer
    deque.push_front(-1);
    assert_eq!(deque.capacity(), 8);
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![-1, 1, 2, 3, 4]);

    for i in 5..20 {
        deque.push_back(i);
    }
    assert_eq!(deque.len(), 20);
    assert_eq!(deque.front(), Some(&-1));
    assert_eq!(deque.back(), Some(&19));

    let drained: Vec<i32> = std::iter::from_fn(|| deque.pop_front()).collect();
    let expected: Vec<i32> = std::iter::once(-1).chain(1..20).collect();
    assert_eq!(drained, expected);
}

#[test]
fn test_deque_clear_keeps_capacity() {
    let mut deque = Deque::new();
    for i in 0..10 {
        deque.push_front(i);
    }
    let capacity = deque.capacity();
    deque.clear();
    assert_eq!(deque.len(), 0);
    assert_eq!(deque.capacity(), capacity);
    deque.push_back(1);
    assert_eq!(deque.front(), Some(&1));
}

#[test]
fn test_deque_matches_slice_as_queue() {
    let mut deque = Deque::new();
    let mut slice = Slice::new();

    for i in 0..100 {
        if i % 3 == 0 {
            deque.push_front(i);
            slice.push_front(i);
        } else {
            deque.push_back(i);
            slice.push_back(i);
        }
        if i % 5 == 0 {
            assert_eq!(deque.pop_back(), slice.pop_back());
        }
        if i % 7 == 0 {
            assert_eq!(deque.pop_front(), slice.pop_front());
        }
        assert_eq!(deque.len(), slice.len());
        assert_eq!(deque.front(), slice.front());
        assert_eq!(deque.back(), slice.back());
    }

    let from_deque: Vec<i32> = deque.iter().copied().collect();
    let from_slice: Vec<i32> = slice.iter().copied().collect();
    assert_eq!(from_deque, from_slice);
}

#[test]
fn test_slice_swap_and_get() {
    let mut slice: Slice<char> = "abc".chars().collect();
    slice.swap(0, 2);
    assert_eq!(slice.as_slice(), &['c', 'b', 'a']);
    assert_eq!(slice.get(1), Some(&'b'));
    assert_eq!(slice.get(3), None);
}
