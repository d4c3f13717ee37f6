//! Sequence-to-group membership
//!
//! Group-partitioned derivations only ever borrow a [`GroupMembership`]; the
//! caller builds it, fills it completely and keeps it alive for the batch.

pub mod map;

pub use map::GroupMap;

use otuvec_core::{OtuError, OtuResult};
use tracing::warn;

/// Lookup from sequence identifier to the group (sample) it was drawn from
pub trait GroupMembership {
    /// Group of `identifier`, or `None` when the identifier is unknown
    fn resolve(&self, identifier: &str) -> Option<&str>;

    /// Every known group, in a stable order
    fn group_names(&self) -> Vec<String>;

    /// Like [`resolve`](Self::resolve), but an unknown identifier is an error
    fn resolve_or_err(&self, identifier: &str) -> OtuResult<&str> {
        self.resolve(identifier)
            .ok_or_else(|| OtuError::UnresolvedIdentifier {
                identifier: identifier.to_string(),
            })
    }
}

impl<G: GroupMembership + ?Sized> GroupMembership for &G {
    fn resolve(&self, identifier: &str) -> Option<&str> {
        (**self).resolve(identifier)
    }

    fn group_names(&self) -> Vec<String> {
        (**self).group_names()
    }
}

/// Validate a requested group selection against the known groups.
///
/// An empty request, or one naming `"all"`, selects every known group. Unknown
/// names are dropped with a warning, and if none of the requested names are
/// valid every known group is used instead. The result follows `known` order.
pub fn select_groups(requested: &[String], known: &[String]) -> Vec<String> {
    if requested.is_empty() || requested.iter().any(|g| g == "all") {
        return known.to_vec();
    }

    for group in requested {
        if !known.contains(group) {
            warn!(group = %group, "not a valid group, and will be disregarded");
        }
    }

    let selected: Vec<String> = known
        .iter()
        .filter(|g| requested.contains(g))
        .cloned()
        .collect();

    if selected.is_empty() {
        warn!("none of the requested groups are valid, using all groups");
        return known.to_vec();
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[rstest]
    #[case::empty_selects_all(&[], &["A", "B", "C"])]
    #[case::all_keyword(&["all"], &["A", "B", "C"])]
    #[case::all_mixed_in(&["B", "all"], &["A", "B", "C"])]
    #[case::subset_in_known_order(&["C", "A"], &["A", "C"])]
    #[case::unknown_dropped(&["B", "Z"], &["B"])]
    #[case::duplicates_collapse(&["B", "B"], &["B"])]
    #[case::nothing_valid_falls_back(&["X", "Y"], &["A", "B", "C"])]
    fn test_select_groups(#[case] requested: &[&str], #[case] expected: &[&str]) {
        let known = strings(&["A", "B", "C"]);
        assert_eq!(select_groups(&strings(requested), &known), strings(expected));
    }

    #[test]
    fn test_resolve_or_err_names_identifier() {
        let mut map = GroupMap::new();
        map.insert("seq1", "A").unwrap();

        assert_eq!(map.resolve_or_err("seq1").unwrap(), "A");
        match map.resolve_or_err("seq9") {
            Err(OtuError::UnresolvedIdentifier { identifier }) => assert_eq!(identifier, "seq9"),
            other => panic!("expected UnresolvedIdentifier, got {:?}", other),
        }
    }

    #[test]
    fn test_blanket_reference_impl() {
        let mut map = GroupMap::new();
        map.insert("seq1", "A").unwrap();
        let by_ref: &GroupMap = &map;

        assert_eq!(GroupMembership::resolve(&by_ref, "seq1"), Some("A"));
        assert_eq!(GroupMembership::group_names(&by_ref), vec!["A".to_string()]);
    }
}
