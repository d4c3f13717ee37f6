use crate::vectors::OrderVector;
use serde::{Deserialize, Serialize};

/// A sequence instance tagged with its bin and source group
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SharedOrderEntry {
    pub bin: usize,
    pub group: String,
}

/// Order vector whose entries remember the group each sequence came from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedOrderVector {
    pub label: String,
    entries: Vec<SharedOrderEntry>,
}

impl SharedOrderVector {
    pub fn new(label: impl Into<String>, entries: Vec<SharedOrderEntry>) -> Self {
        Self {
            label: label.into(),
            entries,
        }
    }

    pub fn num_seqs(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries of `group`, in their current order
    pub fn for_group(&self, group: &str) -> OrderVector {
        let bins = self
            .entries
            .iter()
            .filter(|e| e.group == group)
            .map(|e| e.bin)
            .collect();
        OrderVector::from_bins(self.label.clone(), bins)
    }

    /// Drop the group tags
    pub fn to_order_vector(&self) -> OrderVector {
        OrderVector::from_bins(
            self.label.clone(),
            self.entries.iter().map(|e| e.bin).collect(),
        )
    }
}
