use otuvec_core::OtuResult;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Write;

/// One bin index per sequence instance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderVector {
    pub label: String,
    data: Vec<usize>,
    num_bins: usize,
}

impl OrderVector {
    pub fn from_bins(label: impl Into<String>, data: Vec<usize>) -> Self {
        let num_bins = data.iter().collect::<HashSet<_>>().len();
        Self {
            label: label.into(),
            data,
            num_bins,
        }
    }

    /// Number of distinct bins present
    pub fn num_bins(&self) -> usize {
        self.num_bins
    }

    pub fn num_seqs(&self) -> usize {
        self.data.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<usize> {
        self.data.get(position).copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.data.iter().copied()
    }

    /// Occurrences of `bin`
    pub fn count_of(&self, bin: usize) -> usize {
        self.data.iter().filter(|&&b| b == bin).count()
    }

    /// `label\tnum_bins\tb_0\t...`
    pub fn write_to<W: Write>(&self, out: &mut W) -> OtuResult<()> {
        write!(out, "{}\t{}", self.label, self.num_bins)?;
        for bin in &self.data {
            write!(out, "\t{}", bin)?;
        }
        writeln!(out)?;
        Ok(())
    }
}
