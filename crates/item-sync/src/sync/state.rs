//! Synchronizer state.

use crate::domain::{EditingTarget, FormDraft, Item, ItemId};

/// Request lifecycle as seen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    /// Nothing in flight, last operation succeeded.
    Idle,
    /// A load is in flight.
    Loading,
    /// Last operation failed; see the error message.
    Error,
}

/// Consistent copy of everything the synchronizer holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncSnapshot {
    /// Items in server order, from the latest applied load.
    pub items: Vec<Item>,
    pub loading: bool,
    pub error_message: Option<String>,
    pub draft: FormDraft,
    pub editing_target: EditingTarget,
}

impl SyncSnapshot {
    pub fn phase(&self) -> SyncPhase {
        if self.loading {
            SyncPhase::Loading
        } else if self.error_message.is_some() {
            SyncPhase::Error
        } else {
            SyncPhase::Idle
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_target.is_editing()
    }
}

/// Result of a load that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The response replaced the item list.
    Applied { count: usize },
    /// A newer load was issued meanwhile; this response was dropped.
    Superseded,
}

/// What a successful submit did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Saved {
    Created,
    Updated(ItemId),
}

#[derive(Debug, Default)]
pub(crate) struct SyncState {
    pub(crate) view: SyncSnapshot,
    /// Bumped on every draft or editing-target change.
    pub(crate) draft_revision: u64,
}

impl SyncState {
    pub(crate) fn reset_draft(&mut self) {
        self.view.draft = FormDraft::default();
        self.view.editing_target = EditingTarget::Creating;
        self.draft_revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase() {
        let mut snapshot = SyncSnapshot::default();
        assert_eq!(snapshot.phase(), SyncPhase::Idle);

        snapshot.error_message = Some("Failed to load items".to_string());
        assert_eq!(snapshot.phase(), SyncPhase::Error);

        snapshot.loading = true;
        assert_eq!(snapshot.phase(), SyncPhase::Loading);
    }
}
