//! Free key lookup per modifier combination
//!
//! Bindings are indexed by their exact [`ModifierSet`]. A keysym counts as
//! used for a combination only when a binding with exactly that modifier
//! set names it: `$mod+Ctrl+x` does not make `x` unavailable under `$mod`.
//!
//! Keysyms are compared case-insensitively, so a bound `a` blocks the
//! candidate `A` and vice versa.

use std::collections::{HashMap, HashSet};
use crate::core::types::{Binding, ModifierSet};

/// Index of used keysyms grouped by modifier combination.
///
/// Built once from a parse so several combinations can be checked without
/// rescanning the bindings.
#[derive(Clone, Debug, Default)]
pub struct AvailabilityIndex {
    /// Maps each combination to the lower-cased keysyms bound under it.
    used: HashMap<ModifierSet, HashSet<String>>,
}

impl AvailabilityIndex {
    /// Creates an empty index (nothing is used).
    pub fn new() -> Self {
        Self {
            used: HashMap::new(),
        }
    }

    /// Indexes every binding with a resolved keysym.
    ///
    /// Bindings without a keysym (unmapped `bindcode`) are skipped.
    pub fn from_bindings<'b>(bindings: impl IntoIterator<Item = &'b Binding>) -> Self {
        let mut index = Self::new();
        for binding in bindings {
            index.add_binding(binding);
        }
        index
    }

    pub fn add_binding(&mut self, binding: &Binding) {
        if let Some(keysym) = &binding.keysym {
            self.used
                .entry(binding.modifiers)
                .or_default()
                .insert(keysym.to_lowercase());
        }
    }

    /// Returns true if `keysym` is bound under exactly `target`.
    pub fn is_used(&self, keysym: &str, target: ModifierSet) -> bool {
        self.used
            .get(&target)
            .map(|keys| keys.contains(&keysym.to_lowercase()))
            .unwrap_or(false)
    }

    /// Filters `candidates` down to the keysyms free under `target`.
    ///
    /// The result is a subsequence of `candidates` in the original order.
    pub fn available<S: AsRef<str>>(&self, candidates: &[S], target: ModifierSet) -> Vec<String> {
        candidates
            .iter()
            .filter(|key| !self.is_used(key.as_ref(), target))
            .map(|key| key.as_ref().to_string())
            .collect()
    }

    /// Number of distinct keysyms bound under `target`.
    pub fn used_count(&self, target: ModifierSet) -> usize {
        self.used.get(&target).map(HashSet::len).unwrap_or(0)
    }
}

/// One-shot availability check without keeping an index around.
pub fn available<S: AsRef<str>>(
    candidates: &[S],
    target: ModifierSet,
    bindings: &[Binding],
) -> Vec<String> {
    AvailabilityIndex::from_bindings(bindings).available(candidates, target)
}
