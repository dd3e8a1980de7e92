//! Categorized size diff between two asset lists
//!
//! Matches assets between the base and PR builds by exact, case-sensitive
//! name and buckets each into added / removed / bigger / smaller /
//! same-size. The result is computed once per run and immutable thereafter.

use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::manifest::Asset;

/// One asset's before/after size comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffEntry {
    /// Asset name
    pub name: String,
    /// Size in the PR build (0 for removed assets)
    pub new_size: u64,
    /// Size in the base build (0 for added assets)
    pub old_size: u64,
    /// Signed delta: `new_size - old_size`
    pub diff: i64,
}

impl DiffEntry {
    fn new(name: &str, old_size: u64, new_size: u64) -> Self {
        Self {
            name: name.to_string(),
            new_size,
            old_size,
            diff: new_size as i64 - old_size as i64,
        }
    }
}

/// Categorized diff between the base and PR builds
#[derive(Debug, Serialize)]
pub struct StatsDiff {
    /// Present only in the PR build
    pub added: Vec<DiffEntry>,
    /// Present only in the base build; excluded from the rendered report
    pub removed: Vec<DiffEntry>,
    /// Present in both, grew
    pub bigger: Vec<DiffEntry>,
    /// Present in both, shrank
    pub smaller: Vec<DiffEntry>,
    /// Present in both, unchanged
    pub same_size: Vec<DiffEntry>,
    /// Aggregate over all assets on both sides; absent when there was
    /// nothing to aggregate, which signals unusable input
    pub total: Option<DiffEntry>,
}

impl StatsDiff {
    /// Number of entries that appear in the rendered report
    pub fn reported_len(&self) -> usize {
        self.added.len() + self.bigger.len() + self.smaller.len() + self.same_size.len()
    }
}

/// Compute the categorized size diff between two asset lists.
///
/// Entries keep input order within each category: PR order for
/// added/bigger/smaller/same-size, base order for removed.
pub fn diff_assets(base: &[Asset], pr: &[Asset]) -> StatsDiff {
    let base_sizes: HashMap<&str, u64> = base.iter().map(|a| (a.name.as_str(), a.size)).collect();
    let pr_names: HashSet<&str> = pr.iter().map(|a| a.name.as_str()).collect();

    let mut added = Vec::new();
    let mut bigger = Vec::new();
    let mut smaller = Vec::new();
    let mut same_size = Vec::new();

    for asset in pr {
        match base_sizes.get(asset.name.as_str()) {
            Some(&old_size) => {
                let entry = DiffEntry::new(&asset.name, old_size, asset.size);
                if entry.diff > 0 {
                    bigger.push(entry);
                } else if entry.diff < 0 {
                    smaller.push(entry);
                } else {
                    same_size.push(entry);
                }
            }
            None => added.push(DiffEntry::new(&asset.name, 0, asset.size)),
        }
    }

    let removed: Vec<DiffEntry> = base
        .iter()
        .filter(|a| !pr_names.contains(a.name.as_str()))
        .map(|a| DiffEntry::new(&a.name, a.size, 0))
        .collect();

    let total = if base.is_empty() && pr.is_empty() {
        None
    } else {
        let old_total: u64 = base.iter().map(|a| a.size).sum();
        let new_total: u64 = pr.iter().map(|a| a.size).sum();
        Some(DiffEntry::new("Total", old_total, new_total))
    };

    StatsDiff {
        added,
        removed,
        bigger,
        smaller,
        same_size,
        total,
    }
}
