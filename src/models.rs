//! Frontend Models
//!
//! Data structures shared with the synchronizer core.

use item_sync::{HttpItemsApi, Synchronizer};

pub use item_sync::{DraftField, EditingTarget, FormDraft, Item, ItemId, SyncConfig};

/// Synchronizer talking to the real backend
pub type ItemSync = Synchronizer<HttpItemsApi>;

/// Configuration baked in at build time
///
/// `INVENTORY_API_BASE=https://api.example.com trunk build` points the app at
/// another backend.
pub fn build_config() -> SyncConfig {
    SyncConfig::new(option_env!("INVENTORY_API_BASE").unwrap_or(item_sync::DEFAULT_BASE_URL))
}

/// Price as rendered in the list, e.g. `$12.50`
pub fn price_display(item: &Item) -> String {
    format!("${}", item.price_label())
}
