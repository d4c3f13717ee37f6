use crate::groups::GroupMembership;
use otuvec_core::{OtuError, OtuResult};
use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

/// In-memory group file: one `identifier group` pair per sequence
#[derive(Debug, Clone, Default)]
pub struct GroupMap {
    groups_by_id: HashMap<String, String>,
    group_names: BTreeSet<String>,
}

impl GroupMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `identifier` as a member of `group`. Each identifier may appear once.
    pub fn insert(
        &mut self,
        identifier: impl Into<String>,
        group: impl Into<String>,
    ) -> OtuResult<()> {
        let identifier = identifier.into();
        let group = group.into();

        if self.groups_by_id.contains_key(&identifier) {
            return Err(OtuError::MalformedGroupRecord(format!(
                "{} is already in the group file, sequence names must be unique",
                identifier
            )));
        }

        self.group_names.insert(group.clone());
        self.groups_by_id.insert(identifier, group);
        Ok(())
    }

    /// Parse whitespace separated `identifier group` lines, skipping blank lines
    pub fn from_reader<R: BufRead>(reader: R) -> OtuResult<Self> {
        let mut map = Self::new();

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let fields: Vec<&str> = line.split_whitespace().collect();
            match fields.as_slice() {
                [] => continue,
                [identifier, group] => map.insert(*identifier, *group)?,
                _ => {
                    return Err(OtuError::MalformedGroupRecord(format!(
                        "line {}: expected 2 columns, found {}",
                        line_no + 1,
                        fields.len()
                    )))
                }
            }
        }

        Ok(map)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> OtuResult<Self> {
        let path = path.as_ref();
        let map = Self::from_reader(BufReader::new(File::open(path)?))?;
        info!(
            path = %path.display(),
            sequences = map.len(),
            groups = map.num_groups(),
            "Loaded group file"
        );
        Ok(map)
    }

    /// Number of identifiers
    pub fn len(&self) -> usize {
        self.groups_by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups_by_id.is_empty()
    }

    pub fn num_groups(&self) -> usize {
        self.group_names.len()
    }
}

impl GroupMembership for GroupMap {
    fn resolve(&self, identifier: &str) -> Option<&str> {
        self.groups_by_id.get(identifier).map(String::as_str)
    }

    fn group_names(&self) -> Vec<String> {
        self.group_names.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_two_columns() {
        let input = "seq1\tsoil\nseq2 forest\n\n  seq3   soil  \n";
        let map = GroupMap::from_reader(Cursor::new(input)).unwrap();

        assert_eq!(map.len(), 3);
        assert_eq!(map.resolve("seq2"), Some("forest"));
        assert_eq!(map.resolve("seq3"), Some("soil"));
        assert_eq!(map.resolve("seq4"), None);
        // Sorted, deduplicated
        assert_eq!(map.group_names(), vec!["forest", "soil"]);
    }

    #[test]
    fn test_wrong_column_count() {
        let err = GroupMap::from_reader(Cursor::new("seq1 soil\nseq2\n")).unwrap_err();
        match err {
            OtuError::MalformedGroupRecord(msg) => assert!(msg.contains("line 2")),
            other => panic!("expected MalformedGroupRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_identifier() {
        let err = GroupMap::from_reader(Cursor::new("seq1 soil\nseq1 forest\n")).unwrap_err();
        assert!(matches!(err, OtuError::MalformedGroupRecord(_)));
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "a\tA").unwrap();
        writeln!(file, "b\tB").unwrap();
        file.flush().unwrap();

        let map = GroupMap::from_path(file.path()).unwrap();
        assert_eq!(map.num_groups(), 2);
        assert!(GroupMap::from_path("/nonexistent/groups.txt").is_err());
    }
}
