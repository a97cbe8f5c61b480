use std::borrow::Borrow;

use serde::Serialize;

/// Identifier of a ChIP or input sample, as written in the sample sheet
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SampleId(pub String);

impl SampleId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SampleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for SampleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Name of a cohort of ChIP samples
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct GroupName(pub String);

impl GroupName {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GroupName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for GroupName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lookup_by_str() {
        let groups: HashSet<GroupName> = [GroupName::new("G1")].into_iter().collect();
        assert!(groups.contains("G1"));
        assert!(!groups.contains("g1"));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = SampleId::new("cfChIP_001");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"cfChIP_001\"");
        assert_eq!(id.to_string(), "cfChIP_001");
    }
}
