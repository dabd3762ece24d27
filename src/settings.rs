//! Type-level knobs for a [`Deck`](crate::Deck): the order its elements are dropped in and where its
//! contents land when the buffer grows.
//!
//! Both are zero-sized marker types selected through the deck's type parameters, so choosing one
//! costs nothing at runtime.

use std::fmt::Debug;

/// One end of a deck.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum End {
    Front,
    Back,
}

/// Drop remaining elements starting at the front, the same order as iteration.
#[derive(Copy, Clone, Debug, Default)]
pub struct FrontToBack;

/// Drop remaining elements starting at the back.
#[derive(Copy, Clone, Debug, Default)]
pub struct BackToFront;

pub trait DropBehavior: seal_drop_behavior::Sealed + Debug + Copy + Default {}

pub(crate) mod seal_drop_behavior {
    pub trait Sealed {
        const FIRST: super::End;
    }
}

impl seal_drop_behavior::Sealed for FrontToBack {
    const FIRST: End = End::Front;
}
impl DropBehavior for FrontToBack {}

impl seal_drop_behavior::Sealed for BackToFront {
    const FIRST: End = End::Back;
}
impl DropBehavior for BackToFront {}

/// The runtime view of a [`RebalanceBehavior`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RebalanceStrategy {
    Middle,
    FavorCrowdedSide,
    OnlyChangeCrowdedSide,
}

impl RebalanceStrategy {
    /// Offset of the first live element inside a grown buffer of `new_cap` slots.
    ///
    /// `crowded` is the side that ran out of room. The result always leaves at least one free slot
    /// on that side unless the new buffer is too small to do so, in which case the caller grows
    /// again.
    pub(crate) fn new_start(
        self,
        crowded: End,
        len: usize,
        space_front: usize,
        space_back: usize,
        new_cap: usize,
    ) -> usize {
        let spare = new_cap - len;
        match self {
            RebalanceStrategy::Middle => spare / 2,
            RebalanceStrategy::FavorCrowdedSide => match crowded {
                End::Front => spare - spare / 4,
                End::Back => spare / 4,
            },
            RebalanceStrategy::OnlyChangeCrowdedSide => match crowded {
                End::Front => spare - space_back,
                End::Back => space_front,
            },
        }
    }
}

pub(crate) mod seal_rebalance_behavior {
    pub trait Sealed {
        const STRATEGY: super::RebalanceStrategy;
    }
}

/// Centre the contents in the new buffer. Good when both ends see similar traffic.
#[derive(Copy, Clone, Debug, Default)]
pub struct Middle;

/// Give three quarters of the new room to the side that ran out.
#[derive(Copy, Clone, Debug, Default)]
pub struct FavorCrowdedSide;

/// Keep the other side's room as it is and give all new room to the side that ran out.
/// Best for stack-like use of a single end.
#[derive(Copy, Clone, Debug, Default)]
pub struct OnlyChangeCrowdedSide;

pub trait RebalanceBehavior: seal_rebalance_behavior::Sealed + Debug + Copy + Default {}

impl seal_rebalance_behavior::Sealed for Middle {
    const STRATEGY: RebalanceStrategy = RebalanceStrategy::Middle;
}
impl RebalanceBehavior for Middle {}

impl seal_rebalance_behavior::Sealed for FavorCrowdedSide {
    const STRATEGY: RebalanceStrategy = RebalanceStrategy::FavorCrowdedSide;
}
impl RebalanceBehavior for FavorCrowdedSide {}

impl seal_rebalance_behavior::Sealed for OnlyChangeCrowdedSide {
    const STRATEGY: RebalanceStrategy = RebalanceStrategy::OnlyChangeCrowdedSide;
}
impl RebalanceBehavior for OnlyChangeCrowdedSide {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_centres() {
        let s = RebalanceStrategy::Middle;
        assert_eq!(s.new_start(End::Back, 4, 0, 0, 8), 2);
        assert_eq!(s.new_start(End::Front, 4, 0, 0, 8), 2);
        assert_eq!(s.new_start(End::Back, 0, 0, 0, 4), 2);
    }

    #[test]
    fn favor_crowded_side() {
        let s = RebalanceStrategy::FavorCrowdedSide;
        // 8 spare slots, 6 of them go to the crowded side
        assert_eq!(s.new_start(End::Back, 8, 0, 0, 16), 2);
        assert_eq!(s.new_start(End::Front, 8, 0, 0, 16), 6);
    }

    #[test]
    fn only_change_crowded_side() {
        let s = RebalanceStrategy::OnlyChangeCrowdedSide;
        // front keeps its 3 slots when the back runs out
        assert_eq!(s.new_start(End::Back, 5, 3, 0, 16), 3);
        // back keeps its 3 slots when the front runs out
        assert_eq!(s.new_start(End::Front, 5, 0, 3, 16), 8);
    }
}
