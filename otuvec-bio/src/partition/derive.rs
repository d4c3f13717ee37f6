//! Derivations that need nothing beyond the partition itself

use crate::partition::{count_members, members, CommunityPartition};
use crate::vectors::{OrderVector, RankAbundanceVector, SpeciesAbundanceVector};
use otuvec_core::{OtuError, OtuResult};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use tracing::debug;

impl CommunityPartition {
    /// Member count of every bin slot, in bin order.
    ///
    /// Counts are neither sorted nor trimmed: position `i` always describes bin
    /// `i`, which later name-mapping steps rely on.
    pub fn to_rank_abundance(&self) -> RankAbundanceVector {
        let counts = self.bins.iter().map(|b| count_members(b)).collect();
        RankAbundanceVector::from_counts(self.label.clone(), counts)
    }

    /// How many bins hold exactly `r` members, sized by `max_rank + 1`
    pub fn to_species_abundance(&self) -> SpeciesAbundanceVector {
        SpeciesAbundanceVector::histogram(
            self.max_rank,
            self.bins.iter().map(|b| count_members(b)),
        )
        .with_label(self.label.clone())
    }

    /// Bin index of every sequence.
    ///
    /// Without an identity map the indices are shuffled with the thread RNG.
    /// With one, each identifier's bin index is written at the position the map
    /// assigns to it, and every identifier must be present in the map.
    pub fn to_order_vector(
        &self,
        identity_map: Option<&HashMap<String, usize>>,
    ) -> OtuResult<OrderVector> {
        self.to_order_vector_with_rng(identity_map, &mut rand::thread_rng())
    }

    pub fn to_order_vector_with_rng<R: Rng + ?Sized>(
        &self,
        identity_map: Option<&HashMap<String, usize>>,
        rng: &mut R,
    ) -> OtuResult<OrderVector> {
        let ov = match identity_map {
            None => {
                let mut order = Vec::with_capacity(self.num_seqs);
                for (bin, ids) in self.bins.iter().enumerate() {
                    order.extend(std::iter::repeat(bin).take(count_members(ids)));
                }
                order.shuffle(rng);
                OrderVector::from_bins(self.label.clone(), order)
            }
            Some(map) => {
                let mut order = vec![0; self.num_seqs];
                for (bin, ids) in self.bins.iter().enumerate() {
                    for id in members(ids) {
                        let position = *map.get(id).ok_or_else(|| {
                            OtuError::UnresolvedGroupTarget {
                                identifier: id.to_string(),
                            }
                        })?;
                        let slot = order.get_mut(position).ok_or_else(|| {
                            OtuError::OrderPositionOutOfRange {
                                identifier: id.to_string(),
                                position,
                                len: self.num_seqs,
                            }
                        })?;
                        *slot = bin;
                    }
                }
                OrderVector::from_bins(self.label.clone(), order)
            }
        };

        debug!(
            label = %self.label,
            seqs = ov.num_seqs(),
            bins = ov.num_bins(),
            mapped = identity_map.is_some(),
            "Derived order vector"
        );
        Ok(ov)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn example() -> CommunityPartition {
        let mut p = CommunityPartition::with_slots(3).with_label("0.03");
        p.set(0, "a,b").unwrap();
        p.set(1, "c,d,e").unwrap();
        p
    }

    fn identity_map(names: &[&str]) -> HashMap<String, usize> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.to_string(), i))
            .collect()
    }

    #[test]
    fn test_rank_abundance_keeps_empty_bins() {
        let rav = example().to_rank_abundance();

        assert_eq!(rav.as_slice(), &[2, 3, 0]);
        assert_eq!(rav.label, "0.03");
        assert_eq!(rav.group, None);
    }

    #[test]
    fn test_species_abundance() {
        let sav = example().to_species_abundance();

        assert_eq!(sav.as_slice(), &[0, 0, 1, 1]);
        assert_eq!(sav.label, "0.03");
    }

    #[test]
    fn test_species_abundance_uses_stale_max_rank() {
        let mut p = example();
        p.set(1, "c").unwrap();

        // max_rank stays 3, so the histogram keeps four slots
        assert_eq!(p.to_species_abundance().as_slice(), &[0, 1, 1, 0]);
    }

    #[test]
    fn test_random_order_preserves_counts() {
        let p = example();
        let mut rng = StdRng::seed_from_u64(7);
        let ov = p.to_order_vector_with_rng(None, &mut rng).unwrap();

        assert_eq!(ov.num_seqs(), 5);
        assert_eq!(ov.count_of(0), 2);
        assert_eq!(ov.count_of(1), 3);
        assert_eq!(ov.count_of(2), 0);
        assert_eq!(ov.num_bins(), 2);
        assert_eq!(ov.label, "0.03");
    }

    #[test]
    fn test_mapped_order() {
        let p = example();
        let map = identity_map(&["e", "a", "c", "b", "d"]);
        let ov = p.to_order_vector(Some(&map)).unwrap();

        assert_eq!(ov.as_slice(), &[1, 0, 1, 0, 1]);
        assert_eq!(ov.num_bins(), 2);
    }

    #[test]
    fn test_mapped_order_missing_identifier() {
        let p = example();
        let map = identity_map(&["a", "b", "c", "d"]);

        match p.to_order_vector(Some(&map)) {
            Err(OtuError::UnresolvedGroupTarget { identifier }) => assert_eq!(identifier, "e"),
            other => panic!("expected UnresolvedGroupTarget, got {:?}", other),
        }
    }

    #[test]
    fn test_mapped_order_position_out_of_range() {
        let p = example();
        let mut map = identity_map(&["a", "b", "c", "d", "e"]);
        map.insert("d".to_string(), 12);

        assert!(matches!(
            p.to_order_vector(Some(&map)),
            Err(OtuError::OrderPositionOutOfRange { position: 12, len: 5, .. })
        ));
    }

    #[test]
    fn test_empty_partition() {
        let p = CommunityPartition::new();

        assert!(p.to_rank_abundance().is_empty());
        assert_eq!(p.to_species_abundance().as_slice(), &[0]);
        assert!(p.to_order_vector(None).unwrap().is_empty());
    }
}
