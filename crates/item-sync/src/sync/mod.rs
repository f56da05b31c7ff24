//! Synchronization Layer
//!
//! The synchronizer, its observable state and operation outcomes.

mod state;
mod synchronizer;


pub use state::{LoadOutcome, Saved, SyncPhase, SyncSnapshot};
pub use synchronizer::{ChangeListener, Synchronizer};
