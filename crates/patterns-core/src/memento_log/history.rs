//! Ordered snapshot history that can never be emptied

use super::profile::Snapshot;

/// Snapshots in save order, seeded with an initial entry
///
/// The initial snapshot is held apart from later saves so the history is
/// non-empty by construction.
#[derive(Debug, Clone)]
pub struct History {
    initial: Snapshot,
    saves: Vec<Snapshot>,
}

impl History {
    pub fn new(initial: Snapshot) -> Self {
        Self {
            initial,
            saves: Vec::new(),
        }
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.saves.push(snapshot);
    }

    /// Most recent snapshot
    pub fn latest(&self) -> &Snapshot {
        self.saves.last().unwrap_or(&self.initial)
    }

    /// Snapshot the history was seeded with
    pub fn initial(&self) -> &Snapshot {
        &self.initial
    }

    /// Drop the most recent snapshot
    ///
    /// Returns `None` without changing anything when only the initial
    /// snapshot is left.
    pub fn pop_latest(&mut self) -> Option<Snapshot> {
        self.saves.pop()
    }

    /// Number of snapshots, always at least 1
    pub fn len(&self) -> usize {
        1 + self.saves.len()
    }

    /// Always false; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Snapshots oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        std::iter::once(&self.initial).chain(self.saves.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memento_log::profile::PlayerProfile;

    #[test]
    fn test_new_history_has_one_entry() {
        let history = History::new(PlayerProfile::new(100).snapshot());
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest().money(), 100);
    }

    #[test]
    fn test_pop_never_removes_initial() {
        let mut history = History::new(PlayerProfile::new(100).snapshot());
        history.push(PlayerProfile::new(115).snapshot());

        assert_eq!(history.pop_latest().map(|s| s.money()), Some(115));
        assert!(history.pop_latest().is_none());
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest().money(), 100);
    }

    #[test]
    fn test_iter_is_oldest_first() {
        let mut history = History::new(PlayerProfile::new(1).snapshot());
        history.push(PlayerProfile::new(2).snapshot());
        history.push(PlayerProfile::new(3).snapshot());

        let money: Vec<i64> = history.iter().map(|s| s.money()).collect();
        assert_eq!(money, vec![1, 2, 3]);
        assert_eq!(history.initial().money(), 1);
    }
}
