use crate::vectors::SpeciesAbundanceVector;
use otuvec_core::OtuResult;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Per-bin member counts, aligned with the bin order of the source partition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankAbundanceVector {
    pub label: String,
    /// Set when the counts were restricted to a single group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    data: Vec<usize>,
}

impl RankAbundanceVector {
    /// Zeroed vector with one counter per bin slot
    pub fn with_len(len: usize) -> Self {
        Self {
            label: String::new(),
            group: None,
            data: vec![0; len],
        }
    }

    pub fn from_counts(label: impl Into<String>, data: Vec<usize>) -> Self {
        Self {
            label: label.into(),
            group: None,
            data,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, bin: usize) -> Option<usize> {
        self.data.get(bin).copied()
    }

    /// Add one member to `bin`. Panics if `bin` is outside the vector.
    pub(crate) fn increment(&mut self, bin: usize) {
        self.data[bin] += 1;
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.data.iter().copied()
    }

    /// Total members across all bins
    pub fn num_seqs(&self) -> usize {
        self.data.iter().sum()
    }

    /// Number of bins with at least one member
    pub fn num_bins(&self) -> usize {
        self.data.iter().filter(|&&c| c > 0).count()
    }

    pub fn max_rank(&self) -> usize {
        self.data.iter().copied().max().unwrap_or(0)
    }

    /// Histogram of this vector's counts, sized by its own largest count
    pub fn to_species_abundance(&self) -> SpeciesAbundanceVector {
        let mut sav = SpeciesAbundanceVector::histogram(self.max_rank(), self.iter())
            .with_label(self.label.clone());
        sav.group = self.group.clone();
        sav
    }

    /// `label\tnum_bins\tc_0\t...\tc_n`
    pub fn write_to<W: Write>(&self, out: &mut W) -> OtuResult<()> {
        write!(out, "{}\t{}", self.label, self.num_bins())?;
        for count in &self.data {
            write!(out, "\t{}", count)?;
        }
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_summary_counts() {
        let rav = RankAbundanceVector::from_counts("0.03", vec![2, 0, 5, 1]);

        assert_eq!(rav.len(), 4);
        assert_eq!(rav.num_seqs(), 8);
        assert_eq!(rav.num_bins(), 3);
        assert_eq!(rav.max_rank(), 5);
        assert_eq!(rav.get(2), Some(5));
        assert_eq!(rav.get(4), None);
    }

    #[test]
    fn test_species_abundance_carries_group() {
        let rav = RankAbundanceVector::from_counts("unique", vec![1, 1, 3, 0])
            .with_group("forest");
        let sav = rav.to_species_abundance();

        assert_eq!(sav.as_slice(), &[0, 2, 0, 1]);
        assert_eq!(sav.label, "unique");
        assert_eq!(sav.group.as_deref(), Some("forest"));
    }

    #[test]
    fn test_empty_vector_species_abundance() {
        let sav = RankAbundanceVector::with_len(3).to_species_abundance();
        assert_eq!(sav.as_slice(), &[0]);
    }

    #[test]
    fn test_write_line() {
        let rav = RankAbundanceVector::from_counts("0.10", vec![3, 0, 1]);
        let mut out = Vec::new();
        rav.write_to(&mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "0.10\t2\t3\t0\t1\n");
    }

    #[test]
    fn test_json_omits_missing_group() {
        let rav = RankAbundanceVector::from_counts("0.03", vec![1]);
        let json = serde_json::to_string(&rav).unwrap();

        assert!(!json.contains("group"));
        let back: RankAbundanceVector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rav);
    }
}
