//! Lifetime of a mounted screen.
//!
//! Each mount gets a fresh [`ViewScope`]. Backend work carries the scope it
//! was issued under. Remounting cancels the old token so in-flight reads
//! stop. Writes run on, and the new [`ViewId`] lets the app drop any result
//! that still arrives for the old screen.

use tokio_util::sync::CancellationToken;

/// Identifies one mount of a screen. Never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(u64);

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "view-{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct ViewScope {
    id: ViewId,
    cancel: CancellationToken,
}

impl ViewScope {
    #[must_use]
    pub const fn id(&self) -> ViewId {
        self.id
    }

    #[must_use]
    pub const fn token(&self) -> &CancellationToken {
        &self.cancel
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

/// Hands out scopes, cancelling the previous one on every remount.
#[derive(Debug)]
pub struct ScopeTracker {
    next_id: u64,
    current: ViewScope,
}

impl ScopeTracker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 2,
            current: ViewScope {
                id: ViewId(1),
                cancel: CancellationToken::new(),
            },
        }
    }

    #[must_use]
    pub const fn current(&self) -> &ViewScope {
        &self.current
    }

    #[must_use]
    pub fn is_current(&self, id: ViewId) -> bool {
        self.current.id == id
    }

    /// Cancels the mounted scope and starts a new one.
    pub fn remount(&mut self) -> ViewScope {
        self.current.cancel.cancel();
        self.current = ViewScope {
            id: ViewId(self.next_id),
            cancel: CancellationToken::new(),
        };
        self.next_id += 1;
        self.current.clone()
    }
}

impl Default for ScopeTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remount_cancels_previous() {
        let mut tracker = ScopeTracker::new();
        let first = tracker.current().clone();

        let second = tracker.remount();

        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
        assert_ne!(first.id(), second.id());
        assert!(tracker.is_current(second.id()));
        assert!(!tracker.is_current(first.id()));
    }

    #[test]
    fn test_ids_increase() {
        let mut tracker = ScopeTracker::new();
        let ids: Vec<ViewId> = (0..3).map(|_| tracker.remount().id()).collect();

        assert_eq!(ids, vec![ViewId(2), ViewId(3), ViewId(4)]);
    }
}
