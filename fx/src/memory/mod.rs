//! In-memory implementations of the engine's host seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! These stand in for the browser in unit tests and in any native embedding:
//! a document tree that records style writes and dispatches events, a
//! scheduler driven by a virtual clock, and a map-backed preference store.

mod document;
mod scheduler;
mod store;


pub use document::{MemoryDocument, MemoryElement};
pub use scheduler::{FRAME_INTERVAL, ManualScheduler};
pub use store::MemoryStore;
