use crate::partition::CommunityPartition;
use otuvec_core::OtuResult;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use tracing::{debug, info};

/// Reads one partition per non-blank line of a list file
///
/// A list file typically holds the same sequences clustered at several
/// thresholds, one label per line. Iteration stops at the first error.
pub struct PartitionReader<R> {
    lines: Lines<R>,
    line_no: usize,
    failed: bool,
}

impl<R: BufRead> PartitionReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            failed: false,
        }
    }
}

impl PartitionReader<BufReader<File>> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> OtuResult<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "Reading list file");
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> Iterator for PartitionReader<R> {
    type Item = OtuResult<CommunityPartition>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e.into()));
                }
            };
            self.line_no += 1;

            if line.trim().is_empty() {
                continue;
            }

            let result = CommunityPartition::from_record(&line);
            match &result {
                Ok(partition) => debug!(
                    line = self.line_no,
                    label = partition.label(),
                    bins = partition.num_bins(),
                    seqs = partition.num_seqs(),
                    "Loaded partition"
                ),
                Err(_) => self.failed = true,
            }
            return Some(result);
        }
    }
}
