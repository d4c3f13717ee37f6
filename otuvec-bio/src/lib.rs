//! Community partitions and the abundance vectors derived from them

pub mod groups;
pub mod partition;
pub mod vectors;

// Re-export commonly used types
pub use groups::{select_groups, GroupMap, GroupMembership};
pub use partition::{count_members, members, CommunityPartition, PartitionReader};
pub use vectors::{
    write_json_line, OrderVector, RankAbundanceVector, SharedOrderEntry, SharedOrderVector,
    SpeciesAbundanceVector,
};
