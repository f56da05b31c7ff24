//! Item Sync
//!
//! Client-side mirror of a remote inventory collection.
//!
//! Layered architecture:
//! - domain: items, the form draft and the editing target
//! - api: the HTTP contract of the collection and its implementations
//! - sync: the synchronizer that owns local state and reloads after every
//!   mutation
//!
//! ```no_run
//! use item_sync::{HttpItemsApi, SyncConfig, Synchronizer};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let api = HttpItemsApi::new(SyncConfig::new("http://localhost:8000"))?;
//! let sync = Synchronizer::new(api);
//! sync.load().await?;
//! println!("{} items", sync.item_count());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod sync;

pub use api::{HttpItemsApi, ItemsApi};
#[cfg(any(test, feature = "mock"))]
pub use api::{ApiCall, MockItemsApi};
pub use config::{SyncConfig, DEFAULT_BASE_URL, DEFAULT_COLLECTION};
pub use domain::{DraftField, EditingTarget, FormDraft, Item, ItemId, ItemPayload, NO_DESCRIPTION};
pub use error::{ApiError, ConfigError, Operation, SyncError, SyncResult, ValidationError, VALIDATION_MESSAGE};
pub use sync::{LoadOutcome, Saved, SyncPhase, SyncSnapshot, Synchronizer};
