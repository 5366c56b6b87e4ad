//! Per-session coordination for live sidestacker games.
//!
//! This crate owns everything between the transport boundary and the rules:
//! slot bindings, liveness, the exclusive move path, and state broadcast.
//!
//! ## Architecture
//!
//! - [`Room`] — Session coordinator: binds identities to player slots,
//!   serializes moves, triggers bot replies, writes through to the store
//! - [`Table`] — Per-slot outbound channels and liveness tracking
//! - [`Protocol`] — Conversion between wire messages and internal events
//!
//! ## Messages
//!
//! - [`Event`] — Internal events from room to connections
//! - [`ClientMessage`] — Inbound wire messages, tagged by `action`
//! - [`ServerMessage`] — Outbound wire messages, tagged by `type`
mod error;
mod event;
mod identity;
mod message;
mod protocol;
mod room;
mod table;

pub use error::*;
pub use event::*;
pub use identity::*;
pub use message::*;
pub use protocol::*;
pub use room::*;
pub use table::*;
