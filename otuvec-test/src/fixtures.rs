//! Test fixtures and data generators
//!
//! Common partitions and group files for use across the otuvec workspace.

use otuvec_bio::{CommunityPartition, GroupMap};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Three labels of the same six sequences, as a list file
pub const EXAMPLE_LIST_FILE: &str = "\
unique\t6\ta\tb\tc\td\te\tf
0.03\t4\ta,b\tc,d,e\tf\tg
0.10\t2\ta,b,c,d,e,f\tg
";

/// Group file covering every identifier of [`EXAMPLE_LIST_FILE`]
pub const EXAMPLE_GROUP_FILE: &str = "\
a\tforest
b\tsoil
c\tforest
d\tforest
e\tsoil
f\tlake
g\tlake
";

/// `["a,b", "c,d,e", ""]` labelled `0.03`
pub fn example_partition() -> CommunityPartition {
    let mut partition = CommunityPartition::with_slots(3).with_label("0.03");
    partition.set(0, "a,b").expect("slot 0 exists");
    partition.set(1, "c,d,e").expect("slot 1 exists");
    partition
}

/// Group map parsed from [`EXAMPLE_GROUP_FILE`]
pub fn example_groups() -> GroupMap {
    GroupMap::from_reader(EXAMPLE_GROUP_FILE.as_bytes()).expect("fixture group file is valid")
}

/// A generated partition together with a group map covering all its sequences
#[derive(Debug, Clone)]
pub struct RandomCommunity {
    pub partition: CommunityPartition,
    pub groups: GroupMap,
    /// Identifier count of each group, by group name
    pub group_sizes: Vec<(String, usize)>,
}

/// Generate a partition of up to `max_bins` bins, each with up to `max_rank`
/// members, spread over `num_groups` groups. Deterministic for a given seed.
pub fn random_community(
    seed: u64,
    max_bins: usize,
    max_rank: usize,
    num_groups: usize,
) -> RandomCommunity {
    let mut rng = StdRng::seed_from_u64(seed);
    let num_groups = num_groups.max(1);
    let group_names: Vec<String> = (0..num_groups).map(|g| format!("group{}", g)).collect();
    let mut group_sizes = vec![0usize; num_groups];

    let mut partition = CommunityPartition::new().with_label(format!("seed{}", seed));
    let mut groups = GroupMap::new();
    let mut next_id = 0usize;

    let num_bins = rng.gen_range(0..=max_bins);
    for _ in 0..num_bins {
        let size = rng.gen_range(0..=max_rank);
        let ids: Vec<String> = (0..size)
            .map(|_| {
                let id = format!("seq{}", next_id);
                next_id += 1;
                let g = rng.gen_range(0..num_groups);
                group_sizes[g] += 1;
                groups
                    .insert(id.clone(), group_names[g].clone())
                    .expect("generated identifiers are unique");
                id
            })
            .collect();
        partition.append(ids.join(","));
    }

    RandomCommunity {
        partition,
        groups,
        group_sizes: group_names.into_iter().zip(group_sizes).collect(),
    }
}
