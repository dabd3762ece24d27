use std::collections::VecDeque;
use std::fmt::Debug;

use proptest::prelude::*;
use proptest_derive::Arbitrary;

use crate::{Deck, FavorCrowdedSide, Middle, OnlyChangeCrowdedSide, RebalanceBehavior};

// simple enum to allow pushes, pops and peeks in any order
#[derive(Debug, Clone, Copy, Arbitrary)]
enum DequeOps<T> {
    PushFront(T),
    PopFront,
    PushBack(T),
    PopBack,
    PeekFront,
    PeekBack,
}

// Replays `ops` on a deck and on a VecDeque, checking every result and the final order.
fn matches_model<T, R>(ops: &[DequeOps<T>]) -> Result<(), TestCaseError>
where
    T: Clone + PartialEq + Debug,
    R: RebalanceBehavior,
{
    let mut deck = Deck::new().with_rebalance_behavior::<R>();
    let mut model = VecDeque::new();
    for op in ops {
        match op {
            DequeOps::PushFront(item) => {
                deck.push_front(item.clone());
                model.push_front(item.clone());
            }
            DequeOps::PushBack(item) => {
                deck.push_back(item.clone());
                model.push_back(item.clone());
            }
            DequeOps::PopFront => prop_assert_eq!(deck.pop_front(), model.pop_front()),
            DequeOps::PopBack => prop_assert_eq!(deck.pop_back(), model.pop_back()),
            DequeOps::PeekFront => prop_assert_eq!(deck.peek_front(), model.front()),
            DequeOps::PeekBack => prop_assert_eq!(deck.peek_back(), model.back()),
        }
        prop_assert_eq!(deck.len(), model.len());
        prop_assert_eq!(deck.is_empty(), model.is_empty());
        if std::mem::size_of::<T>() != 0 {
            prop_assert_eq!(deck.len() + deck.space_front() + deck.space_back(), deck.capacity());
        }
    }
    prop_assert!(deck.iter().eq(model.iter()));
    Ok(())
}

proptest! {
    // Any mix of operations on i32 agrees with VecDeque, whatever the growth strategy
    #[test]
    fn ops_match_vecdeque(ref ops in proptest::collection::vec(any::<DequeOps<i32>>(), 0..200)) {
        matches_model::<_, Middle>(ops)?;
        matches_model::<_, FavorCrowdedSide>(ops)?;
        matches_model::<_, OnlyChangeCrowdedSide>(ops)?;
    }

    // Same for an element type that owns heap memory
    #[test]
    fn ops_match_vecdeque_string(ref ops in proptest::collection::vec(any::<DequeOps<String>>(), 0..100)) {
        matches_model::<_, Middle>(ops)?;
        matches_model::<_, OnlyChangeCrowdedSide>(ops)?;
    }

    // Zero-sized elements never allocate but still count
    #[test]
    fn ops_match_vecdeque_zst(ref ops in proptest::collection::vec(any::<DequeOps<()>>(), 0..100)) {
        matches_model::<_, Middle>(ops)?;
    }

    // push_back then pop_front hands items back in insertion order
    #[test]
    fn fifo_round_trip(ref items in proptest::collection::vec(any::<i32>(), 0..200)) {
        let mut deck = Deck::new();
        for &item in items {
            deck.push_back(item);
        }
        let popped: Vec<_> = std::iter::from_fn(|| deck.pop_front()).collect();
        prop_assert_eq!(&popped, items);
        prop_assert_eq!(deck.pop_front(), None);
    }

    // push_front then pop_front hands items back in reverse
    #[test]
    fn lifo_round_trip(ref items in proptest::collection::vec(any::<i32>(), 0..200)) {
        let mut deck = Deck::new();
        for &item in items {
            deck.push_front(item);
        }
        let popped: Vec<_> = std::iter::from_fn(|| deck.pop_front()).collect();
        let reversed: Vec<_> = items.iter().rev().copied().collect();
        prop_assert_eq!(popped, reversed);
        prop_assert!(deck.is_empty());
    }

    // The owning iterator drains from both ends like VecDeque's
    #[test]
    fn into_iter_both_ends(ref items in proptest::collection::vec(any::<i32>(), 0..50), from_back in any::<Vec<bool>>()) {
        let mut iter = items.iter().copied().collect::<Deck<_>>().into_iter();
        let mut model = items.iter().copied().collect::<VecDeque<_>>().into_iter();
        for back in from_back {
            if back {
                prop_assert_eq!(iter.next_back(), model.next_back());
            } else {
                prop_assert_eq!(iter.next(), model.next());
            }
            prop_assert_eq!(iter.len(), model.len());
        }
    }
}
