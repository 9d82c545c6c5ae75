//! Single-slot mailbox for pushed membership views

use super::view::ClusterView;

/// Owned, per-session slot that the notification sink writes into.
///
/// A delivery overwrites any view that has not been taken yet, so the
/// slot always holds the most recent one.
#[derive(Debug, Default)]
pub struct ViewMailbox {
    slot: Option<ClusterView>,
}

impl ViewMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a view, replacing whatever was there.
    pub fn deliver(&mut self, view: ClusterView) {
        self.slot = Some(view);
    }

    /// Take the recorded view, leaving the slot empty.
    pub fn take(&mut self) -> Option<ClusterView> {
        self.slot.take()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// Drop any stale view.
    pub fn clear(&mut self) {
        self.slot = None;
    }
}
