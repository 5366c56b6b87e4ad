//! Session state machine for sidestacker.
//!
//! A [`Game`] is the authoritative record of one session: board, mover,
//! lifecycle status, winner, mode, and move history. It owns the transition
//! rules — every mutation flows through [`Game::apply`] or
//! [`Game::assign_player2`], both of which return fresh snapshots, so callers
//! never observe a partially-updated session.
mod error;
mod game;
mod status;

pub use error::*;
pub use game::*;
pub use status::*;
