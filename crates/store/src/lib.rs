//! Session persistence boundary.
//!
//! The coordinator treats a [`SessionStore`] as the durable source of truth
//! between operations: sessions are read at start and written back after
//! every successful transition. The store is injected, never ambient — any
//! backend satisfying the trait will do. [`MemoryStore`] is the in-process
//! implementation used by the lobby and tests.
mod memory;
mod traits;

pub use memory::*;
pub use traits::*;
