//! Ordered player ledgers for batting and bowling cards.
//!
//! Keys are player names matched exactly (case-sensitive). Iteration
//! follows entry order, which is the order players came to the crease
//! or were brought on to bowl.

use serde::{Deserialize, Serialize};

/// An insertion-ordered mapping from player name to stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger<T> {
    entries: Vec<(String, T)>,
}

impl<T> Ledger<T> {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of players recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no player has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the player has an entry.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Returns the player's stats.
    pub fn get(&self, name: &str) -> Option<&T> {
        self.position(name).map(|idx| &self.entries[idx].1)
    }

    /// Returns the player's stats mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        self.position(name).map(|idx| &mut self.entries[idx].1)
    }

    /// Iterates entries in entry order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(name, stats)| (name.as_str(), stats))
    }

    /// Player names in entry order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Sums `f` over every entry.
    pub fn sum_by(&self, f: impl Fn(&T) -> u32) -> u32 {
        self.entries.iter().map(|(_, stats)| f(stats)).sum()
    }

    /// Sums `f` over every entry except `name`.
    pub fn sum_by_except(&self, name: &str, f: impl Fn(&T) -> u32) -> u32 {
        self.entries
            .iter()
            .filter(|(other, _)| other != name)
            .map(|(_, stats)| f(stats))
            .sum()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(other, _)| other == name)
    }
}

impl<T: Default> Ledger<T> {
    /// Returns the player's stats, appending a zeroed entry first if absent.
    pub fn register(&mut self, name: &str) -> &mut T {
        let idx = match self.position(name) {
            Some(idx) => idx,
            None => {
                self.entries.push((name.to_string(), T::default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }
}

impl<T> Default for Ledger<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_preserves_entry_order() {
        let mut ledger: Ledger<u32> = Ledger::new();
        *ledger.register("Kohli") += 1;
        *ledger.register("Gill") += 2;
        *ledger.register("Kohli") += 3;

        let names: Vec<_> = ledger.names().collect();
        assert_eq!(names, vec!["Kohli", "Gill"]);
        assert_eq!(ledger.get("Kohli"), Some(&4));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let mut ledger: Ledger<u32> = Ledger::new();
        ledger.register("kohli");
        assert!(!ledger.contains("Kohli"));
        assert!(ledger.contains("kohli"));
    }

    #[test]
    fn test_sum_by_except() {
        let mut ledger: Ledger<u32> = Ledger::new();
        *ledger.register("a") = 5;
        *ledger.register("b") = 7;
        *ledger.register("c") = 11;
        assert_eq!(ledger.sum_by(|v| *v), 23);
        assert_eq!(ledger.sum_by_except("b", |v| *v), 16);
        assert_eq!(ledger.sum_by_except("zzz", |v| *v), 23);
    }
}
