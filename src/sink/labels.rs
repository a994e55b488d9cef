//! Label-set delta between node snapshots
//!
//! The delta doubles as a grouping key: two node merge events with the same
//! membership in `to_add`/`to_delete` batch into one statement. The sets are
//! `BTreeSet`s so equality and hashing are order-independent and statement
//! rendering is deterministic.

use crate::events::Label;
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;

/// Labels to add to and remove from a node to reach its `after` state
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LabelDelta {
    pub to_add: BTreeSet<Label>,
    pub to_delete: BTreeSet<Label>,
}

impl LabelDelta {
    /// Compute `after \ before` and `before \ after`
    ///
    /// Pure set difference: empty inputs yield empty outputs, duplicates
    /// collapse, input order is irrelevant.
    pub fn between(before: &[Label], after: &[Label]) -> Self {
        let before_set: FxHashSet<&Label> = before.iter().collect();
        let after_set: FxHashSet<&Label> = after.iter().collect();

        let to_add = after
            .iter()
            .filter(|label| !before_set.contains(*label))
            .cloned()
            .collect();
        let to_delete = before
            .iter()
            .filter(|label| !after_set.contains(*label))
            .cloned()
            .collect();

        LabelDelta { to_add, to_delete }
    }

    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_delete.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<Label> {
        names.iter().map(|n| Label::new(*n)).collect()
    }

    #[test]
    fn test_delta_between_snapshots() {
        let delta = LabelDelta::between(&labels(&["A", "B"]), &labels(&["B", "C"]));
        assert_eq!(delta.to_add, labels(&["C"]).into_iter().collect());
        assert_eq!(delta.to_delete, labels(&["A"]).into_iter().collect());
    }

    #[test]
    fn test_empty_inputs_yield_empty_delta() {
        let delta = LabelDelta::between(&[], &[]);
        assert!(delta.is_empty());

        let only_adds = LabelDelta::between(&[], &labels(&["Person"]));
        assert_eq!(only_adds.to_delete.len(), 0);
        assert_eq!(only_adds.to_add.len(), 1);
    }

    #[test]
    fn test_key_equality_is_order_independent() {
        let a = LabelDelta::between(&labels(&["A", "B"]), &labels(&["C", "D"]));
        let b = LabelDelta::between(&labels(&["B", "A"]), &labels(&["D", "C"]));
        assert_eq!(a, b);
    }

    #[test]
    fn test_duplicates_collapse() {
        let delta = LabelDelta::between(&[], &labels(&["A", "A", "B"]));
        assert_eq!(delta.to_add.len(), 2);
    }

    #[test]
    fn test_unchanged_labels_produce_empty_delta() {
        let delta = LabelDelta::between(&labels(&["A", "B"]), &labels(&["B", "A"]));
        assert!(delta.is_empty());
    }
}
