//! Copy scope: which parts of an index configuration get copied.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One category of index configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeTag {
    Settings,
    Synonyms,
    Rules,
}

impl ScopeTag {
    /// Wire name of the tag
    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeTag::Settings => "settings",
            ScopeTag::Synonyms => "synonyms",
            ScopeTag::Rules => "rules",
        }
    }
}

impl fmt::Display for ScopeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered set of scope tags
///
/// Tags always appear in check order (settings, synonyms, rules) and
/// never repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScopeSet(Vec<ScopeTag>);

impl ScopeSet {
    /// Build a scope set from the three command flags
    pub fn from_flags(settings: bool, synonyms: bool, rules: bool) -> Self {
        let mut tags = Vec::with_capacity(3);
        if settings {
            tags.push(ScopeTag::Settings);
        }
        if synonyms {
            tags.push(ScopeTag::Synonyms);
        }
        if rules {
            tags.push(ScopeTag::Rules);
        }
        Self(tags)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn tags(&self) -> &[ScopeTag] {
        &self.0
    }
}

/// Comma-joined tag list, e.g. `synonyms, rules`
impl fmt::Display for ScopeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(ScopeTag::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        f.write_str(&joined)
    }
}
