//! AI move selection for sidestacker.
//!
//! One [`Strategy`] implementation per difficulty tier, each unit-testable
//! against fixed board fixtures:
//!
//! - [`Easy`] — uniformly random over the legal (row, side) pairs
//! - [`Medium`] — one-ply lookahead: win if possible, block if necessary,
//!   otherwise random
//! - [`Hard`] — depth-bounded negamax with alpha-beta pruning and a
//!   node/wall-clock budget
mod budget;
mod easy;
mod hard;
mod medium;
mod strategy;

pub use budget::*;
pub use easy::*;
pub use hard::*;
pub use medium::*;
pub use strategy::*;
