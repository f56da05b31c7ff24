//! Collection synchronizer.
//!
//! Mirrors the remote item collection and owns the form state. Every
//! successful mutation is followed by a full reload; the local list is never
//! patched in place.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use super::state::{LoadOutcome, Saved, SyncSnapshot, SyncState};
use crate::api::ItemsApi;
use crate::domain::{DraftField, EditingTarget, FormDraft, Item, ItemId};
use crate::error::{Operation, SyncError, SyncResult};

/// Called with a fresh snapshot after every state change.
pub type ChangeListener = Box<dyn Fn(&SyncSnapshot) + Send + Sync>;

/// Owns the local mirror of the remote collection.
///
/// State sits behind a lock that is never held across an `.await`, so the
/// synchronizer can be shared between UI callbacks.
pub struct Synchronizer<A> {
    api: A,
    state: RwLock<SyncState>,
    /// Ticket of the most recently issued load.
    load_ticket: AtomicU64,
    listeners: RwLock<Vec<ChangeListener>>,
}

impl<A: ItemsApi> Synchronizer<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: RwLock::new(SyncState::default()),
            load_ticket: AtomicU64::new(0),
            listeners: RwLock::new(Vec::new()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Registers a listener for state changes.
    pub fn subscribe(&self, listener: impl Fn(&SyncSnapshot) + Send + Sync + 'static) {
        self.listeners.write().push(Box::new(listener));
    }

    pub fn snapshot(&self) -> SyncSnapshot {
        self.state.read().view.clone()
    }

    pub fn items(&self) -> Vec<Item> {
        self.state.read().view.items.clone()
    }

    pub fn item_count(&self) -> usize {
        self.state.read().view.items.len()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().view.loading
    }

    pub fn is_editing(&self) -> bool {
        self.state.read().view.is_editing()
    }

    pub fn error_message(&self) -> Option<String> {
        self.state.read().view.error_message.clone()
    }

    pub fn draft(&self) -> FormDraft {
        self.state.read().view.draft.clone()
    }

    pub fn editing_target(&self) -> EditingTarget {
        self.state.read().view.editing_target.clone()
    }

    // ========================
    // Remote operations
    // ========================

    /// Fetches the whole collection and replaces the local list.
    ///
    /// On failure the previous list stays available. A response that was
    /// overtaken by a newer load is dropped without touching state.
    pub async fn load(&self) -> SyncResult<LoadOutcome> {
        let ticket = self.load_ticket.fetch_add(1, Ordering::SeqCst) + 1;
        self.mutate(|state| {
            state.view.loading = true;
            state.view.error_message = None;
        });
        debug!(ticket, "loading items");

        let result = self.api.list().await;

        match result {
            Ok(items) => {
                let count = items.len();
                let applied = self.finish_load(ticket, |state| {
                    state.view.items = items;
                    state.view.loading = false;
                });
                if !applied {
                    debug!(ticket, "discarding superseded load");
                    return Ok(LoadOutcome::Superseded);
                }
                info!(ticket, count, "items reloaded");
                Ok(LoadOutcome::Applied { count })
            }
            Err(source) => {
                let err = SyncError::request(Operation::Load, source);
                let message = err.to_string();
                let applied = self.finish_load(ticket, |state| {
                    state.view.loading = false;
                    state.view.error_message = Some(message);
                });
                if !applied {
                    debug!(ticket, "discarding superseded load failure");
                    return Ok(LoadOutcome::Superseded);
                }
                warn!(ticket, error = ?err, "loading items failed");
                Err(err)
            }
        }
    }

    /// Validates the draft and creates or updates an item.
    ///
    /// Invalid drafts never reach the network. After a successful request the
    /// collection is reloaded, then the form returns to create mode. A failed
    /// request leaves the draft and editing target untouched.
    pub async fn submit(&self) -> SyncResult<Saved> {
        let prepared = self.mutate(|state| match state.view.draft.validate() {
            Ok(payload) => {
                state.view.error_message = None;
                Ok((payload, state.view.editing_target.clone(), state.draft_revision))
            }
            Err(err) => {
                state.view.error_message = Some(err.to_string());
                Err(err)
            }
        });
        let (payload, target, revision) = prepared.map_err(|err| {
            debug!(reason = ?err, "draft rejected");
            SyncError::from(err)
        })?;

        let (result, saved) = match &target {
            EditingTarget::Creating => (self.api.create(&payload).await, Saved::Created),
            EditingTarget::Editing(id) => (
                self.api.update(id, &payload).await,
                Saved::Updated(id.clone()),
            ),
        };

        if let Err(source) = result {
            let err = SyncError::request(Operation::Save, source);
            warn!(error = ?err, target = ?target, "saving item failed");
            let message = err.to_string();
            self.mutate(|state| state.view.error_message = Some(message));
            return Err(err);
        }
        info!(saved = ?saved, name = %payload.name, "item saved");

        // The save itself succeeded; a failed reload only shows up in the error message
        if let Err(err) = self.load().await {
            debug!(error = %err, "reload after save failed");
        }

        self.mutate(|state| {
            if state.draft_revision == revision {
                state.reset_draft();
            } else {
                debug!("draft edited while saving, keeping it");
            }
        });
        Ok(saved)
    }

    /// Deletes an item and reloads the collection.
    ///
    /// On failure the list is left as it was and no reload happens.
    pub async fn delete(&self, id: &ItemId) -> SyncResult<()> {
        self.mutate(|state| state.view.error_message = None);

        if let Err(source) = self.api.delete(id).await {
            let err = SyncError::request(Operation::Delete, source);
            warn!(%id, error = ?err, "deleting item failed");
            let message = err.to_string();
            self.mutate(|state| state.view.error_message = Some(message));
            return Err(err);
        }
        info!(%id, "item deleted");

        if let Err(err) = self.load().await {
            debug!(error = %err, "reload after delete failed");
        }
        Ok(())
    }

    // ========================
    // Form state
    // ========================

    /// Switches the form to update mode for `item`.
    pub fn begin_edit(&self, item: &Item) {
        self.mutate(|state| {
            state.view.draft = FormDraft::from_item(item);
            state.view.editing_target = EditingTarget::Editing(item.id.clone());
            state.draft_revision += 1;
        });
        debug!(id = %item.id, "editing item");
    }

    /// Clears the form and returns to create mode.
    pub fn cancel_edit(&self) {
        self.mutate(SyncState::reset_draft);
    }

    /// Replaces one field of the draft with raw input.
    pub fn edit_draft(&self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        self.mutate(|state| {
            state.view.draft.set(field, value);
            state.draft_revision += 1;
        });
    }

    // ========================
    // Internals
    // ========================

    fn mutate<R>(&self, f: impl FnOnce(&mut SyncState) -> R) -> R {
        let (result, snapshot) = {
            let mut state = self.state.write();
            let result = f(&mut state);
            (result, self.snapshot_for_listeners(&state))
        };
        if let Some(snapshot) = snapshot {
            self.notify(&snapshot);
        }
        result
    }

    /// Applies a load result only if `ticket` is still the latest one.
    fn finish_load(&self, ticket: u64, apply: impl FnOnce(&mut SyncState)) -> bool {
        let snapshot = {
            let mut state = self.state.write();
            if self.load_ticket.load(Ordering::SeqCst) != ticket {
                return false;
            }
            apply(&mut state);
            self.snapshot_for_listeners(&state)
        };
        if let Some(snapshot) = snapshot {
            self.notify(&snapshot);
        }
        true
    }

    fn snapshot_for_listeners(&self, state: &SyncState) -> Option<SyncSnapshot> {
        if self.listeners.read().is_empty() {
            None
        } else {
            Some(state.view.clone())
        }
    }

    fn notify(&self, snapshot: &SyncSnapshot) {
        for listener in self.listeners.read().iter() {
            listener(snapshot);
        }
    }
}
