//! Community partition: sequences clustered into OTU bins at one threshold
//!
//! Each bin is stored as the raw comma separated identifier string it was read
//! with. Summary counters are maintained on every mutation rather than
//! recomputed, so `max_rank` only ever grows (see [`CommunityPartition::set`]).

mod derive;
pub mod reader;
mod shared;

pub use reader::PartitionReader;

use otuvec_core::{OtuError, OtuResult};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Identifiers of a bin, split on commas. An empty bin yields nothing.
pub fn members(bin: &str) -> impl Iterator<Item = &str> {
    let bin = if bin.is_empty() { None } else { Some(bin) };
    bin.into_iter().flat_map(|b| b.split(','))
}

/// Number of identifiers in a bin string
pub fn count_members(bin: &str) -> usize {
    if bin.is_empty() {
        0
    } else {
        bin.bytes().filter(|&b| b == b',').count() + 1
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommunityPartition {
    label: String,
    bins: Vec<String>,
    num_bins: usize,
    max_rank: usize,
    num_seqs: usize,
}

impl CommunityPartition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Partition with `n` empty bin slots
    pub fn with_slots(n: usize) -> Self {
        Self {
            bins: vec![String::new(); n],
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Parse `label n bin_1 ... bin_n` from a single record
    pub fn from_record(record: &str) -> OtuResult<Self> {
        let mut tokens = record.split_whitespace();

        let label = tokens
            .next()
            .ok_or_else(|| OtuError::MalformedPartitionRecord("empty record".to_string()))?;
        let count_token = tokens.next().ok_or_else(|| {
            OtuError::MalformedPartitionRecord(format!("record '{}' has no bin count", label))
        })?;
        let count: usize = count_token.parse().map_err(|_| {
            OtuError::MalformedPartitionRecord(format!(
                "record '{}': unreadable bin count '{}'",
                label, count_token
            ))
        })?;

        let mut partition = Self::with_slots(count).with_label(label);
        let mut found = 0;
        for token in tokens {
            if found == count {
                return Err(OtuError::MalformedPartitionRecord(format!(
                    "record '{}' declares {} bins but holds more",
                    label, count
                )));
            }
            partition.set(found, token)?;
            found += 1;
        }

        if found != count {
            return Err(OtuError::MalformedPartitionRecord(format!(
                "record '{}' declares {} bins but holds {}",
                label, count, found
            )));
        }

        Ok(partition)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Non-empty bins
    pub fn num_bins(&self) -> usize {
        self.num_bins
    }

    /// Largest bin seen since the last `clear`. Never lowered by `set`.
    pub fn max_rank(&self) -> usize {
        self.max_rank
    }

    pub fn num_seqs(&self) -> usize {
        self.num_seqs
    }

    /// Bin slots, empty ones included
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn bins(&self) -> &[String] {
        &self.bins
    }

    pub fn get(&self, index: usize) -> OtuResult<&str> {
        self.bins
            .get(index)
            .map(String::as_str)
            .ok_or(OtuError::InvalidBinIndex {
                index,
                len: self.bins.len(),
            })
    }

    /// Replace the identifiers of bin `index`, adjusting the counters by delta.
    ///
    /// `max_rank` is raised when the new bin is larger but is not recomputed
    /// when a bin shrinks, so it can overstate the largest bin afterwards.
    pub fn set(&mut self, index: usize, identifiers: impl Into<String>) -> OtuResult<()> {
        let len = self.bins.len();
        let slot = self
            .bins
            .get_mut(index)
            .ok_or(OtuError::InvalidBinIndex { index, len })?;

        let identifiers = identifiers.into();
        let old = count_members(slot);
        let new = count_members(&identifiers);
        *slot = identifiers;

        if old == 0 {
            self.num_bins += 1;
        }
        if new == 0 {
            self.num_bins = self.num_bins.saturating_sub(1);
        }
        if new > self.max_rank {
            self.max_rank = new;
        }
        self.num_seqs = self.num_seqs.saturating_sub(old) + new;

        Ok(())
    }

    /// Add a bin at the end
    pub fn append(&mut self, identifiers: impl Into<String>) {
        let identifiers = identifiers.into();
        let count = count_members(&identifiers);
        self.bins.push(identifiers);

        if count > 0 {
            self.num_bins += 1;
        }
        if count > self.max_rank {
            self.max_rank = count;
        }
        self.num_seqs += count;
    }

    /// Change the number of bin slots. Counters are left as they are.
    pub fn resize(&mut self, n: usize) {
        self.bins.resize(n, String::new());
    }

    pub fn clear(&mut self) {
        self.num_bins = 0;
        self.max_rank = 0;
        self.num_seqs = 0;
        self.bins.clear();
    }

    /// `label\tnum_bins\t` followed by every non-empty bin and a tab, then a newline
    pub fn write_to<W: Write>(&self, out: &mut W) -> OtuResult<()> {
        writeln!(out, "{}", self)?;
        Ok(())
    }
}

impl FromStr for CommunityPartition {
    type Err = OtuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_record(s)
    }
}

impl fmt::Display for CommunityPartition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t", self.label, self.num_bins)?;
        for bin in self.bins.iter().filter(|b| !b.is_empty()) {
            write!(f, "{}\t", bin)?;
        }
        Ok(())
    }
}
