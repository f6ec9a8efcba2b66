//! Core domain types: the collected profile, tool identifiers, and the icon catalog.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ProfileGenError, Result};

// ---------------------------------------------------------------------------
// ToolId
// ---------------------------------------------------------------------------

/// A normalized tool/language identifier (trimmed, lower-cased, non-empty).
///
/// Catalog membership is checked at the input boundary, not here: a `ToolId`
/// that is absent from the catalog still renders, via the text fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolId(String);

impl ToolId {
    /// Normalize a raw identifier. Fails only when nothing is left after trimming.
    pub fn new(raw: &str) -> Result<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(ProfileGenError::validation("tool identifier is empty"));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ToolId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ToolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ToolId {
    type Err = ProfileGenError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ---------------------------------------------------------------------------
// ToolCatalog
// ---------------------------------------------------------------------------

/// Lookup table from tool identifier to a relative icon asset path
/// (e.g. `rust` → `rust/rust-original.svg`).
///
/// Persisted as a flat JSON object. Backed by a `BTreeMap` so the file
/// is written with sorted keys and diffs stay stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolCatalog(BTreeMap<String, String>);

impl ToolCatalog {
    /// Icon path fragment for `id`, if the catalog knows it.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(identifier, path)` pairs in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ToolCatalog {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

// ---------------------------------------------------------------------------
// ProfileRecord
// ---------------------------------------------------------------------------

/// The validated answers collected from the user.
///
/// Built once per interview and consumed by the assembler; nothing mutates
/// it after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRecord {
    /// Display name used in the greeting.
    pub name: String,
    /// GitHub username used by the stats cards.
    pub username: String,
    /// Six hex digits, without a leading `#`.
    pub color_hex: String,
    /// Lines shown by the typing banner, in order.
    pub typing_lines: Vec<String>,
    pub job_title: String,
    pub skills: String,
    pub about: String,
    pub journey: String,
    /// Tools in the order the user listed them, without duplicates.
    pub tools: Vec<ToolId>,
}
