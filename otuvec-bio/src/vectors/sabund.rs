use otuvec_core::OtuResult;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Number of bins holding exactly `r` members, indexed by `r`
///
/// Index 0 is always zero; it carries no meaning and is kept only so that the
/// rank can be used as the index directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesAbundanceVector {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    data: Vec<usize>,
}

impl SpeciesAbundanceVector {
    /// Build a histogram of `counts` with `max_rank + 1` slots.
    ///
    /// A count above `max_rank` grows the histogram instead of being dropped.
    pub fn histogram<I>(max_rank: usize, counts: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut data = vec![0; max_rank + 1];
        for count in counts {
            if count >= data.len() {
                data.resize(count + 1, 0);
            }
            data[count] += 1;
        }
        data[0] = 0;

        Self {
            label: String::new(),
            group: None,
            data,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn get(&self, rank: usize) -> usize {
        self.data.get(rank).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.data
    }

    pub fn max_rank(&self) -> usize {
        self.data.len().saturating_sub(1)
    }

    /// Σ s[r]
    pub fn num_bins(&self) -> usize {
        self.data.iter().skip(1).sum()
    }

    /// Σ r * s[r]
    pub fn num_seqs(&self) -> usize {
        self.data
            .iter()
            .enumerate()
            .map(|(rank, &bins)| rank * bins)
            .sum()
    }

    /// `label\tmax_rank\ts_1\t...\ts_max`
    pub fn write_to<W: Write>(&self, out: &mut W) -> OtuResult<()> {
        write!(out, "{}\t{}", self.label, self.max_rank())?;
        for bins in self.data.iter().skip(1) {
            write!(out, "\t{}", bins)?;
        }
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_forces_zero_slot() {
        let sav = SpeciesAbundanceVector::histogram(3, vec![2, 3, 0, 0]);

        assert_eq!(sav.as_slice(), &[0, 0, 1, 1]);
        assert_eq!(sav.num_bins(), 2);
        assert_eq!(sav.num_seqs(), 5);
        assert_eq!(sav.max_rank(), 3);
    }

    #[test]
    fn test_histogram_keeps_declared_size() {
        // A stale max rank leaves trailing empty slots
        let sav = SpeciesAbundanceVector::histogram(5, vec![1, 1]);
        assert_eq!(sav.len(), 6);
        assert_eq!(sav.get(1), 2);
        assert_eq!(sav.get(9), 0);
    }

    #[test]
    fn test_histogram_grows_for_larger_counts() {
        let sav = SpeciesAbundanceVector::histogram(1, vec![4]);
        assert_eq!(sav.as_slice(), &[0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_write_line() {
        let sav = SpeciesAbundanceVector::histogram(3, vec![2, 3]).with_label("0.03");
        let mut out = Vec::new();
        sav.write_to(&mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "0.03\t3\t0\t1\t1\n");
    }
}
