// textmend-core/src/summary.rs
//! Provides the data structure used for reporting which repair rules fired
//! against a given input within the `textmend-core` library.

use serde::{Deserialize, Serialize};

/// A summary of all hits for a single repair rule against one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RepairSummaryItem {
    /// The name of the rule that matched.
    pub rule_name: String,
    /// How many occurrences of the rule's pattern were replaced.
    pub occurrences: usize,
}
