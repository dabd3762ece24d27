//! A double-ended queue that keeps its elements in one contiguous buffer.
//!
//! [`Deck`] supports pushing, popping and peeking at both ends, so the same type serves as a stack
//! (work one end) or a queue (push at one end, pop at the other). Asking an empty deck for an
//! element gives [`None`]; nothing about an empty deck is an error.
//!
//! ```
//! use deck::Deck;
//!
//! // a queue: oldest page first
//! let mut history = Deck::new();
//! history.push_back("google.com");
//! history.push_back("youtube.com");
//! assert_eq!(history.pop_front(), Some("google.com"));
//!
//! // a stack: last plate on is the first one off
//! let mut plates = Deck::new();
//! plates.push_front("Blue plate");
//! plates.push_front("Red plate");
//! assert_eq!(plates.pop_front(), Some("Red plate"));
//! assert_eq!(plates.pop_front(), Some("Blue plate"));
//! assert_eq!(plates.pop_front(), None);
//! ```
//!
//! The [`tour`] module narrates these uses, and backs the `deck-tour` binary.

pub mod deck;
mod error;
pub mod settings;
pub mod tour;

#[cfg(test)]
mod property_tests;

pub use self::deck::{Deck, IntoIter, Iter, IterMut};
pub use self::error::{Error, Result};
pub use self::settings::{
    BackToFront, DropBehavior, End, FavorCrowdedSide, FrontToBack, Middle, OnlyChangeCrowdedSide,
    RebalanceBehavior, RebalanceStrategy,
};
