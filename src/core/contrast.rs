use std::collections::HashSet;
use std::hash::BuildHasher;

use indexmap::IndexSet;
use serde::Serialize;

use crate::core::sheet::PeakCallSheet;
use crate::core::types::GroupName;

/// A planned comparison of one group against another.
///
/// Order is meaningful: `ContrastPair(G2, G1)` and `ContrastPair(G1, G2)` are
/// different comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ContrastPair(pub GroupName, pub GroupName);

impl ContrastPair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self(GroupName::new(first), GroupName::new(second))
    }

    #[must_use]
    pub fn first(&self) -> &GroupName {
        &self.0
    }

    #[must_use]
    pub fn second(&self) -> &GroupName {
        &self.1
    }
}

impl std::fmt::Display for ContrastPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} vs {}", self.0, self.1)
    }
}

/// Distinct contrast pairs in the order they were authored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Contrasts {
    pairs: Vec<ContrastPair>,
}

impl Contrasts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `pair` unless an identical ordered pair is already present.
    /// Returns whether the pair was added.
    pub fn push_unique(&mut self, pair: ContrastPair) -> bool {
        if self.pairs.contains(&pair) {
            return false;
        }
        self.pairs.push(pair);
        true
    }

    #[must_use]
    pub fn contains(&self, pair: &ContrastPair) -> bool {
        self.pairs.contains(pair)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContrastPair> {
        self.pairs.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ContrastPair] {
        &self.pairs
    }

    /// Distinct group names used by any contrast, in first-seen order
    #[must_use]
    pub fn referenced_groups(&self) -> IndexSet<&GroupName> {
        self.pairs
            .iter()
            .flat_map(|pair| [&pair.0, &pair.1])
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<'a> IntoIterator for &'a Contrasts {
    type Item = &'a ContrastPair;
    type IntoIter = std::slice::Iter<'a, ContrastPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// A set of group names that contrast files are validated against
pub trait KnownGroups {
    fn contains_group(&self, name: &str) -> bool;
}

impl KnownGroups for PeakCallSheet {
    fn contains_group(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }
}

impl<S: BuildHasher> KnownGroups for HashSet<GroupName, S> {
    fn contains_group(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl<S: BuildHasher> KnownGroups for HashSet<String, S> {
    fn contains_group(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl<S: BuildHasher> KnownGroups for HashSet<&str, S> {
    fn contains_group(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl<S: BuildHasher> KnownGroups for IndexSet<GroupName, S> {
    fn contains_group(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl<T: AsRef<str>> KnownGroups for [T] {
    fn contains_group(&self, name: &str) -> bool {
        self.iter().any(|g| g.as_ref() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SampleId;

    #[test]
    fn test_push_unique_is_order_sensitive() {
        let mut contrasts = Contrasts::new();
        assert!(contrasts.push_unique(ContrastPair::new("G2", "G1")));
        assert!(!contrasts.push_unique(ContrastPair::new("G2", "G1")));
        assert!(contrasts.push_unique(ContrastPair::new("G1", "G2")));

        assert_eq!(contrasts.len(), 2);
        assert_eq!(contrasts.as_slice()[0], ContrastPair::new("G2", "G1"));
        assert_eq!(contrasts.as_slice()[1], ContrastPair::new("G1", "G2"));
    }

    #[test]
    fn test_serializes_as_nested_arrays() {
        let mut contrasts = Contrasts::new();
        contrasts.push_unique(ContrastPair::new("G2", "G1"));
        contrasts.push_unique(ContrastPair::new("G4", "G3"));

        let json = serde_json::to_string(&contrasts).unwrap();
        assert_eq!(json, r#"[["G2","G1"],["G4","G3"]]"#);
    }

    #[test]
    fn test_referenced_groups() {
        let mut contrasts = Contrasts::new();
        contrasts.push_unique(ContrastPair::new("G2", "G1"));
        contrasts.push_unique(ContrastPair::new("G5", "G1"));

        let names: Vec<&str> = contrasts
            .referenced_groups()
            .into_iter()
            .map(GroupName::as_str)
            .collect();
        assert_eq!(names, vec!["G2", "G1", "G5"]);
    }

    #[test]
    fn test_known_groups_impls() {
        let mut sheet = PeakCallSheet::new();
        sheet.add_row(SampleId::new("s1"), None, [GroupName::new("G1")]);
        assert!(sheet.contains_group("G1"));
        assert!(!sheet.contains_group("G2"));

        let names: HashSet<String> = ["G1".to_string()].into_iter().collect();
        assert!(names.contains_group("G1"));

        let slice: &[&str] = &["G1", "G3"];
        assert!(slice.contains_group("G3"));
        assert!(!slice.contains_group("g3"));
    }
}
