//! How each board mutation orders the local cache update against the
//! server round trip.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPolicy {
    /// Update the cache first; restore the snapshot if the request fails.
    Optimistic,
    /// Update the cache after success, with the record the server returned.
    AdoptServer,
    /// Update the cache after success only.
    Confirmed,
}

impl SyncPolicy {
    pub fn applies_before_send(self) -> bool {
        matches!(self, Self::Optimistic)
    }
}

/// Moving a card between columns.
pub const MOVE: SyncPolicy = SyncPolicy::Optimistic;
/// Adding a card.
pub const CREATE: SyncPolicy = SyncPolicy::AdoptServer;
/// Removing a card.
pub const DELETE: SyncPolicy = SyncPolicy::Confirmed;

/// Policy per board mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policies {
    pub move_card: SyncPolicy,
    pub add_card: SyncPolicy,
    pub delete_card: SyncPolicy,
}

impl Default for Policies {
    fn default() -> Self {
        Self {
            move_card: MOVE,
            add_card: CREATE,
            delete_card: DELETE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_only_move_optimistically_by_default() {
        let policies = Policies::default();
        assert!(policies.move_card.applies_before_send());
        assert_eq!(policies.add_card, SyncPolicy::AdoptServer);
        assert!(!policies.add_card.applies_before_send());
        assert!(!policies.delete_card.applies_before_send());
    }
}
