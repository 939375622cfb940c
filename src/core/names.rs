//! Purpose: Column-name helpers for the join step of a table diff.
//! Exports: `NameSet`, `resolve_merged_columns`, `temp_column_name`.
//! Role: Map pre-join names to post-join names; pick scratch names that collide with nothing.
//! Invariants: Pure functions over caller-supplied name sets; nothing is cached.
use crate::core::error::Error;
use std::collections::BTreeSet;

const TEMP_PREFIX: &str = "_temp_";

/// Column names live in one table.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NameSet(BTreeSet<String>);

impl NameSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for NameSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Finds each original column in a merged table, preferring the unsuffixed
/// name, then `name + suffix`.
pub fn resolve_merged_columns<S: AsRef<str>>(
    original: &[S],
    merged: &NameSet,
    suffix: &str,
) -> Result<Vec<String>, Error> {
    original
        .iter()
        .map(|name| {
            let name = name.as_ref();
            if merged.contains(name) {
                return Ok(name.to_string());
            }
            let suffixed = format!("{name}{suffix}");
            if merged.contains(&suffixed) {
                return Ok(suffixed);
            }
            Err(Error::column_not_found(name))
        })
        .collect()
}

/// First `_temp_<n>` absent from every table. Any collision moves to the next
/// `n` and rescans all tables from the first.
pub fn temp_column_name(tables: &[&NameSet]) -> String {
    let mut index = 0u64;
    loop {
        let candidate = format!("{TEMP_PREFIX}{index}");
        if tables.iter().all(|table| !table.contains(&candidate)) {
            return candidate;
        }
        index += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::{NameSet, resolve_merged_columns, temp_column_name};
    use crate::core::error::ErrorKind;

    #[test]
    fn resolves_plain_then_suffixed_names() {
        let merged: NameSet = ["a", "b_x"].into_iter().collect();
        let resolved = resolve_merged_columns(&["a", "b"], &merged, "_x").expect("resolved");
        assert_eq!(resolved, vec!["a".to_string(), "b_x".to_string()]);
    }

    #[test]
    fn unsuffixed_name_wins_when_both_exist() {
        let merged: NameSet = ["a", "a_x"].into_iter().collect();
        let resolved = resolve_merged_columns(&["a"], &merged, "_x").expect("resolved");
        assert_eq!(resolved, vec!["a".to_string()]);
    }

    #[test]
    fn missing_column_is_not_found() {
        let merged: NameSet = ["a", "b_y"].into_iter().collect();
        let err = resolve_merged_columns(&["a", "b"], &merged, "_x").expect_err("should fail");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.column(), Some("b"));
    }

    #[test]
    fn temp_name_skips_taken_candidates() {
        let empty = NameSet::new();
        assert_eq!(temp_column_name(&[]), "_temp_0");
        assert_eq!(temp_column_name(&[&empty]), "_temp_0");

        let first: NameSet = ["_temp_0", "b"].into_iter().collect();
        let plain: NameSet = ["a", "b"].into_iter().collect();
        assert_eq!(temp_column_name(&[&first, &plain]), "_temp_1");
        assert_eq!(temp_column_name(&[&plain, &first]), "_temp_1");
    }

    #[test]
    fn temp_name_rescans_every_table_after_a_collision() {
        let first: NameSet = ["_temp_0", "b"].into_iter().collect();
        let second: NameSet = ["_temp_1", "b"].into_iter().collect();
        assert_eq!(temp_column_name(&[&first, &second]), "_temp_2");
        assert_eq!(temp_column_name(&[&second, &first]), "_temp_2");

        let both: NameSet = ["_temp_0"].into_iter().collect();
        assert_eq!(temp_column_name(&[&first, &both]), "_temp_1");
    }

    #[test]
    fn name_set_tracks_inserted_names() {
        let mut names = NameSet::new();
        assert!(names.is_empty());
        assert!(names.insert("b"));
        assert!(names.insert(String::from("a")));
        assert!(!names.insert("a"));
        assert_eq!(names.len(), 2);
        assert_eq!(names.iter().collect::<Vec<_>>(), vec!["a", "b"]);

        names.insert("_temp_0");
        assert_eq!(temp_column_name(&[&names]), "_temp_1");
    }

    #[test]
    fn temp_name_reuses_low_gaps() {
        let taken: NameSet = ["_temp_1"].into_iter().collect();
        assert_eq!(temp_column_name(&[&taken, &taken]), "_temp_0");
    }
}
