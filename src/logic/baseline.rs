//! Behavioral Baseline - Parent/Child Frequency Table
//!
//! Counts how often each (parent, child) relationship appears in a log
//! batch. Built once per run, read-only afterwards. This is a pure
//! occurrence counter: it feeds the frequency signal of the risk score but
//! is never used to compute deviation on its own.

use std::collections::HashMap;

use super::telemetry::ProcessEvent;

/// Occurrence count per (parent, child) pair. Unseen pairs count as zero.
#[derive(Debug, Clone, Default)]
pub struct BaselineTable {
    counts: HashMap<(String, String), u64>,
}

impl BaselineTable {
    /// Build the table from a full log batch. Empty input yields an empty
    /// table, which is not an error.
    pub fn build(events: &[ProcessEvent]) -> Self {
        let mut counts: HashMap<(String, String), u64> = HashMap::new();
        for event in events {
            let pair = (event.parent_process.clone(), event.child_process.clone());
            *counts.entry(pair).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrence count for a pair; zero for pairs never observed
    pub fn count(&self, parent: &str, child: &str) -> u64 {
        self.counts
            .get(&(parent.to_string(), child.to_string()))
            .copied()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Pairs with counts, sorted by count descending then pair name so the
    /// rendered table is deterministic
    pub fn sorted_entries(&self) -> Vec<(&str, &str, u64)> {
        let mut entries: Vec<(&str, &str, u64)> = self
            .counts
            .iter()
            .map(|((parent, child), count)| (parent.as_str(), child.as_str(), *count))
            .collect();
        entries.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| (a.0, a.1).cmp(&(b.0, b.1))));
        entries
    }
}

/// Render the baseline as a fixed-width table
pub fn render(baseline: &BaselineTable) -> String {
    let mut out = String::new();
    out.push_str("\n--- BASELINE: Normal Process Relationships ---\n");
    out.push_str(&format!("{:<25} {:<25} {:<10}\n", "Parent", "Child", "Count"));
    out.push_str(&"-".repeat(60));
    out.push('\n');

    for (parent, child, count) in baseline.sorted_entries() {
        out.push_str(&format!("{:<25} {:<25} {:<10}\n", parent, child, count));
    }

    out
}
