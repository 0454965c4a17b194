//! Agents and venues: a display name plus scheme-qualified identifiers.

use std::fmt;

use serde::Serialize;

/// Identifier schemes recognized inside author, editor and publisher entries.
pub const AGENT_SCHEMES: &[&str] = &["crossref", "orcid", "viaf", "wikidata", "ror", "omid"];

/// Identifier schemes recognized inside venue entries.
pub const VENUE_SCHEMES: &[&str] = &[
    "doi",
    "issn",
    "isbn",
    "url",
    "wikidata",
    "wikipedia",
    "openalex",
    "omid",
    "jid",
    "arxiv",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompositeKind {
    Agent,
    Venue,
}

impl CompositeKind {
    pub fn schemes(self) -> &'static [&'static str] {
        match self {
            Self::Agent => AGENT_SCHEMES,
            Self::Venue => VENUE_SCHEMES,
        }
    }
}

/// A parsed `"<name> [<scheme:value> ...]"` entry.
///
/// Serializes as `{ "name": ..., "ids": [...] }`; `Display` yields the raw
/// source string so flattened rows keep the original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompositeItem {
    #[serde(skip)]
    kind: CompositeKind,
    #[serde(skip)]
    raw: String,
    pub name: String,
    #[serde(rename = "ids")]
    pub identifiers: Vec<String>,
}

impl CompositeItem {
    pub fn new(
        kind: CompositeKind,
        raw: impl Into<String>,
        name: impl Into<String>,
        identifiers: Vec<String>,
    ) -> Self {
        Self {
            kind,
            raw: raw.into(),
            name: name.into(),
            identifiers,
        }
    }

    pub fn kind(&self) -> CompositeKind {
        self.kind
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for CompositeItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
