//! otuvec: abundance and order vectors derived from OTU community partitions
//!
//! The partition model and derivations live in `otuvec-bio`; errors,
//! configuration and logging in `otuvec-core`. This crate re-exports both and
//! adds the multi-label batch over list files.

pub mod batch;

pub use batch::{run_shared_files, write_shared_line, BatchSummary, SharedBatch};
pub use otuvec_bio::{
    count_members, members, select_groups, write_json_line, CommunityPartition, GroupMap,
    GroupMembership, OrderVector, PartitionReader, RankAbundanceVector, SharedOrderEntry,
    SharedOrderVector, SpeciesAbundanceVector,
};
pub use otuvec_core::{
    init_logging, load_config, save_config, Config, GroupsConfig, LogFormat, LoggingConfig,
    OtuError, OtuResult, OutputConfig, OutputFormat,
};
