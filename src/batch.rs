//! Multi-label batch over a list file
//!
//! Reads every partition of a list file and writes one line per selected group
//! and label, either as `label\tgroup\tnum_bins\tc_0\t...\tc_n` or as a JSON
//! rank abundance object.

use anyhow::{Context, Result};
use otuvec_bio::{
    write_json_line, GroupMap, GroupMembership, PartitionReader, RankAbundanceVector,
};
use otuvec_core::{Config, GroupsConfig, OtuResult, OutputFormat};
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::info;

/// Totals of one batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub labels: Vec<String>,
    pub lines_written: usize,
}

/// Derives per-group rank abundance for every label of a list file
pub struct SharedBatch<'g, G: GroupMembership + ?Sized> {
    membership: &'g G,
    selected: Vec<String>,
    format: OutputFormat,
}

impl<'g, G: GroupMembership + ?Sized> SharedBatch<'g, G> {
    pub fn new(membership: &'g G, groups: &GroupsConfig) -> Self {
        Self {
            membership,
            selected: groups.selected.clone(),
            format: OutputFormat::Shared,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Process every partition from `reader`, stopping at the first error
    pub fn run<R: BufRead, W: Write>(
        &self,
        reader: PartitionReader<R>,
        out: &mut W,
    ) -> OtuResult<BatchSummary> {
        let mut summary = BatchSummary::default();

        for partition in reader {
            let partition = partition?;
            let vectors = partition.to_all_groups_rank_abundance(self.membership, &self.selected)?;
            for rav in &vectors {
                match self.format {
                    OutputFormat::Shared => write_shared_line(rav, out)?,
                    OutputFormat::Json => write_json_line(rav, out)?,
                }
                summary.lines_written += 1;
            }
            summary.labels.push(partition.label().to_string());
        }

        info!(
            labels = summary.labels.len(),
            lines = summary.lines_written,
            format = ?self.format,
            "Finished shared batch"
        );
        Ok(summary)
    }
}

/// `label\tgroup\tnum_bins\tc_0\t...\tc_n`, with `num_bins` counting every slot
pub fn write_shared_line<W: Write>(rav: &RankAbundanceVector, out: &mut W) -> OtuResult<()> {
    write!(
        out,
        "{}\t{}\t{}",
        rav.label,
        rav.group.as_deref().unwrap_or(""),
        rav.len()
    )?;
    for count in rav.iter() {
        write!(out, "\t{}", count)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Load a group file and a list file from disk and run the batch into `out`
pub fn run_shared_files<W: Write>(
    list_path: &Path,
    group_path: &Path,
    config: &Config,
    out: &mut W,
) -> Result<BatchSummary> {
    let groups = GroupMap::from_path(group_path)
        .with_context(|| format!("Failed to load group file {}", group_path.display()))?;
    let reader = PartitionReader::from_path(list_path)
        .with_context(|| format!("Failed to open list file {}", list_path.display()))?;

    let summary = SharedBatch::new(&groups, &config.groups)
        .with_format(config.output.format)
        .run(reader, out)
        .with_context(|| format!("Failed to process {}", list_path.display()))?;
    Ok(summary)
}
