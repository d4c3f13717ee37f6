//! Custom assertions for testing
//!
//! Invariant checks shared by the unit and property tests.

use otuvec_bio::{count_members, CommunityPartition, OrderVector};

/// Assert that the incremental counters agree with the bin contents.
///
/// `max_rank` may overstate the largest bin after a shrinking `set`, so only
/// the lower bound is checked.
pub fn assert_counters_consistent(partition: &CommunityPartition) {
    let counts: Vec<usize> = partition.bins().iter().map(|b| count_members(b)).collect();

    assert_eq!(
        partition.num_seqs(),
        counts.iter().sum::<usize>(),
        "num_seqs disagrees with bin contents"
    );
    assert_eq!(
        partition.num_bins(),
        counts.iter().filter(|&&c| c > 0).count(),
        "num_bins disagrees with bin contents"
    );
    assert!(
        partition.max_rank() >= counts.iter().copied().max().unwrap_or(0),
        "max_rank {} is below the largest bin",
        partition.max_rank()
    );
}

/// Assert that `order` holds each bin index exactly as often as the bin has members
pub fn assert_order_matches_partition(order: &OrderVector, partition: &CommunityPartition) {
    assert_eq!(order.num_seqs(), partition.num_seqs(), "order vector length");

    let mut seen = vec![0usize; partition.len()];
    for bin in order.iter() {
        assert!(bin < seen.len(), "bin index {} outside partition", bin);
        seen[bin] += 1;
    }

    for (bin, ids) in partition.bins().iter().enumerate() {
        assert_eq!(
            seen[bin],
            count_members(ids),
            "bin {} occurs {} times, expected {}",
            bin,
            seen[bin],
            count_members(ids)
        );
    }
}
