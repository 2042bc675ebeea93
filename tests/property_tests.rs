//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify
//! that the heap invariants are always maintained.

use proptest::prelude::*;
use min_heap_queue::{MinHeap, PriorityQueue, Queue};

/// Apply `(should_poll, value)` operations, checking the heap after each one
fn test_heap_property_invariant(ops: Vec<(bool, i32)>) -> Result<(), TestCaseError> {
    let mut heap = MinHeap::new();

    for (should_poll, value) in ops {
        if should_poll {
            heap.poll();
        } else {
            heap.add(value);
        }
        prop_assert!(heap.is_heap(), "heap property broken: {:?}", heap);
    }

    Ok(())
}

/// Test that min tracking agrees with a reference multiset
fn test_peek_is_minimum(ops: Vec<(bool, i32)>) -> Result<(), TestCaseError> {
    let mut heap = MinHeap::new();
    let mut inserted = Vec::new();

    for (should_poll, value) in ops {
        if should_poll && !heap.is_empty() {
            if let Some(popped) = heap.poll() {
                let pos = inserted.iter().position(|&v| v == popped);
                prop_assert!(pos.is_some(), "polled {} which was never added", popped);
                inserted.swap_remove(pos.unwrap());
            }
        } else {
            heap.add(value);
            inserted.push(value);
        }

        prop_assert_eq!(heap.peek().copied(), inserted.iter().min().copied());
    }

    Ok(())
}

/// Test that all polled elements come out sorted
fn test_sorted_extraction(values: Vec<i32>) -> Result<(), TestCaseError> {
    let mut heap = MinHeap::with_capacity(values.len());
    for val in &values {
        heap.add(*val);
    }

    let mut polled = Vec::with_capacity(values.len());
    while let Some(val) = heap.poll() {
        polled.push(val);
    }

    let mut expected = values;
    expected.sort();
    prop_assert_eq!(polled, expected);

    Ok(())
}

/// Test size accounting: adds minus successful polls
fn test_len_invariant(ops: Vec<(bool, i32)>) -> Result<(), TestCaseError> {
    let mut heap = MinHeap::new();
    let mut expected_len = 0usize;

    for (should_poll, value) in ops {
        if should_poll {
            if heap.poll().is_some() {
                expected_len -= 1;
            }
        } else {
            heap.add(value);
            expected_len += 1;
        }

        prop_assert_eq!(heap.len(), expected_len);
        prop_assert_eq!(heap.is_empty(), expected_len == 0);
    }

    Ok(())
}

proptest! {
    #[test]
    fn prop_heap_property_after_every_op(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..200)) {
        test_heap_property_invariant(ops)?;
    }

    #[test]
    fn prop_peek_is_minimum(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..200)) {
        test_peek_is_minimum(ops)?;
    }

    #[test]
    fn prop_sorted_extraction(values in prop::collection::vec(any::<i32>(), 0..300)) {
        test_sorted_extraction(values)?;
    }

    #[test]
    fn prop_len_invariant(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..200)) {
        test_len_invariant(ops)?;
    }

    #[test]
    fn prop_peek_poll_agreement(values in prop::collection::vec(-50i32..50, 1..100)) {
        let mut heap = MinHeap::from_vec(values);
        while !heap.is_empty() {
            let peeked = heap.peek().copied();
            let len = heap.len();
            prop_assert_eq!(heap.poll(), peeked);
            prop_assert_eq!(heap.len(), len - 1);
        }
    }

    #[test]
    fn prop_heapify_matches_incremental(values in prop::collection::vec(-1000i32..1000, 0..300)) {
        let built = MinHeap::from_vec(values.clone());
        prop_assert!(built.is_heap());

        let mut incremental = MinHeap::new();
        for val in values {
            incremental.add(val);
        }

        prop_assert_eq!(built.into_sorted_vec(), incremental.into_sorted_vec());
    }

    #[test]
    fn prop_max_first_comparator(values in prop::collection::vec(any::<i16>(), 0..200)) {
        let mut heap = MinHeap::with_comparator(|a: &i16, b: &i16| b.cmp(a));
        heap.extend(values.iter().copied());
        prop_assert!(heap.is_heap());

        let polled = heap.into_sorted_vec();
        prop_assert!(polled.windows(2).all(|w| w[0] >= w[1]));
        prop_assert_eq!(polled.len(), values.len());
    }

    #[test]
    fn prop_key_comparator_orders_by_key(pairs in prop::collection::vec((0u8..20, any::<u32>()), 0..150)) {
        let heap = MinHeap::from_vec_with_comparator(pairs, |a: &(u8, u32), b: &(u8, u32)| a.0.cmp(&b.0));
        prop_assert!(heap.is_heap());

        let keys: Vec<u8> = heap.into_sorted_vec().into_iter().map(|(k, _)| k).collect();
        prop_assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn prop_queue_matches_heap(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..200)) {
        let mut heap = MinHeap::new();
        let mut queue = PriorityQueue::new();

        for (should_poll, value) in ops {
            if should_poll {
                prop_assert_eq!(Queue::poll(&mut queue), heap.poll());
            } else {
                prop_assert!(Queue::offer(&mut queue, value));
                heap.add(value);
            }
            prop_assert_eq!(Queue::peek(&queue), heap.peek());
            prop_assert_eq!(Queue::size(&queue), heap.len());
        }
    }
}
