//! Domain Layer
//!
//! Items as the remote collection owns them, and the local form state used
//! to create or edit them.

mod draft;
mod item;

pub use draft::{DraftField, EditingTarget, FormDraft};
pub use item::{Item, ItemId, ItemPayload, NO_DESCRIPTION};
