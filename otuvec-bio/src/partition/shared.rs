//! Derivations split by the group each sequence belongs to
//!
//! Every identifier of every bin is resolved, whether or not its group is
//! wanted, so a sequence missing from the group file always aborts the
//! derivation instead of silently dropping out of the counts.

use crate::groups::{select_groups, GroupMembership};
use crate::partition::{members, CommunityPartition};
use crate::vectors::{
    OrderVector, RankAbundanceVector, SharedOrderEntry, SharedOrderVector, SpeciesAbundanceVector,
};
use otuvec_core::OtuResult;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use tracing::debug;

/// Resolve the group of every member of `bin`
fn resolved_members<'a, G>(
    bin: &'a str,
    membership: &'a G,
) -> impl Iterator<Item = OtuResult<&'a str>> + 'a
where
    G: GroupMembership + ?Sized + 'a,
{
    members(bin).map(move |id| membership.resolve_or_err(id))
}

impl CommunityPartition {
    /// Visit `(bin index, group)` for every sequence, stopping at the first unresolved one
    fn for_each_resolved<G, F>(&self, membership: &G, mut visit: F) -> OtuResult<()>
    where
        G: GroupMembership + ?Sized,
        F: FnMut(usize, &str),
    {
        for (bin, ids) in self.bins.iter().enumerate() {
            for group in resolved_members(ids, membership) {
                visit(bin, group?);
            }
        }
        Ok(())
    }

    /// Per-bin counts of the members belonging to `group`
    pub fn to_group_rank_abundance<G>(
        &self,
        membership: &G,
        group: &str,
    ) -> OtuResult<RankAbundanceVector>
    where
        G: GroupMembership + ?Sized,
    {
        let mut rav = RankAbundanceVector::with_len(self.bins.len())
            .with_label(self.label.clone())
            .with_group(group);

        self.for_each_resolved(membership, |bin, resolved| {
            if resolved == group {
                rav.increment(bin);
            }
        })?;

        debug!(label = %self.label, group, seqs = rav.num_seqs(), "Derived group rank abundance");
        Ok(rav)
    }

    /// Per-bin counts for every selected group, filled in a single pass.
    ///
    /// Only the groups that survive [`select_groups`] get a vector, returned in
    /// membership order. Members of other groups are still resolved.
    pub fn to_all_groups_rank_abundance<G>(
        &self,
        membership: &G,
        selected: &[String],
    ) -> OtuResult<Vec<RankAbundanceVector>>
    where
        G: GroupMembership + ?Sized,
    {
        let known = membership.group_names();
        let selection = select_groups(selected, &known);

        let mut by_group: HashMap<String, RankAbundanceVector> = selection
            .iter()
            .map(|g| {
                let rav = RankAbundanceVector::with_len(self.bins.len())
                    .with_label(self.label.clone())
                    .with_group(g.clone());
                (g.clone(), rav)
            })
            .collect();

        self.for_each_resolved(membership, |bin, group| {
            if let Some(rav) = by_group.get_mut(group) {
                rav.increment(bin);
            }
        })?;

        debug!(
            label = %self.label,
            known = known.len(),
            selected = selection.len(),
            "Derived rank abundance for all groups"
        );

        Ok(selection
            .iter()
            .filter_map(|g| by_group.remove(g))
            .collect())
    }

    /// Species abundance of the members belonging to `group`
    pub fn to_group_species_abundance<G>(
        &self,
        membership: &G,
        group: &str,
    ) -> OtuResult<SpeciesAbundanceVector>
    where
        G: GroupMembership + ?Sized,
    {
        Ok(self.to_group_rank_abundance(membership, group)?.to_species_abundance())
    }

    /// Every sequence as a `(bin, group)` entry, shuffled with the thread RNG
    pub fn to_shared_order_vector<G>(&self, membership: &G) -> OtuResult<SharedOrderVector>
    where
        G: GroupMembership + ?Sized,
    {
        self.to_shared_order_vector_with_rng(membership, &mut rand::thread_rng())
    }

    pub fn to_shared_order_vector_with_rng<G, R>(
        &self,
        membership: &G,
        rng: &mut R,
    ) -> OtuResult<SharedOrderVector>
    where
        G: GroupMembership + ?Sized,
        R: Rng + ?Sized,
    {
        let mut entries = Vec::with_capacity(self.num_seqs);
        self.for_each_resolved(membership, |bin, group| {
            entries.push(SharedOrderEntry {
                bin,
                group: group.to_string(),
            });
        })?;
        entries.shuffle(rng);

        debug!(label = %self.label, seqs = entries.len(), "Derived shared order vector");
        Ok(SharedOrderVector::new(self.label.clone(), entries))
    }

    /// Shuffled bin indices of the members belonging to `group`
    pub fn to_group_order_vector<G>(&self, membership: &G, group: &str) -> OtuResult<OrderVector>
    where
        G: GroupMembership + ?Sized,
    {
        self.to_group_order_vector_with_rng(membership, group, &mut rand::thread_rng())
    }

    pub fn to_group_order_vector_with_rng<G, R>(
        &self,
        membership: &G,
        group: &str,
        rng: &mut R,
    ) -> OtuResult<OrderVector>
    where
        G: GroupMembership + ?Sized,
        R: Rng + ?Sized,
    {
        Ok(self
            .to_shared_order_vector_with_rng(membership, rng)?
            .for_group(group))
    }
}
