//! Arbor App Library
//!
//! The client-side state-synchronization layer of the note workspace:
//! owns the snapshot store and the coordinators that keep it correct
//! while content engine calls resolve in arbitrary order.
//!
//! Single-threaded cooperative model: every gateway call is a
//! suspension point, the snapshot is only replaced through the store,
//! and handlers re-validate their originating context before applying
//! an asynchronous result.

mod controller;
mod gateway;
mod outline;
mod results;
mod session;
mod store;


pub use controller::WorkspaceController;
pub use gateway::{ContentEngine, EngineError, EngineResult, NOTE_EXTENSION};
pub use outline::{OutlineScheduler, QUIESCENCE_WINDOW};
pub use store::Store;
