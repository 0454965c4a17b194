//! Item extraction: split a composite value into a name and identifiers.

use std::sync::LazyLock;

use regex::Regex;

use cite_model::{AGENT_SCHEMES, CompositeItem, CompositeKind, VENUE_SCHEMES};

static AGENT_MATCHER: LazyLock<SchemeMatcher> =
    LazyLock::new(|| SchemeMatcher::new(AGENT_SCHEMES).expect("Invalid agent scheme regex"));

static VENUE_MATCHER: LazyLock<SchemeMatcher> =
    LazyLock::new(|| SchemeMatcher::new(VENUE_SCHEMES).expect("Invalid venue scheme regex"));

/// Finds `scheme:value` identifiers for a fixed set of allowed schemes.
///
/// An identifier is a non-whitespace run that starts with an allowed scheme
/// and is followed by whitespace or a closing bracket. A run that reaches the
/// end of the input is cut back to its last `]`; without one it is not an
/// identifier.
#[derive(Debug, Clone)]
pub struct SchemeMatcher {
    pattern: Regex,
}

impl SchemeMatcher {
    pub fn new<S: AsRef<str>>(schemes: &[S]) -> Result<Self, regex::Error> {
        let alternatives: Vec<String> = schemes
            .iter()
            .map(|scheme| regex::escape(scheme.as_ref()))
            .collect();
        let pattern = Regex::new(&format!(r"(?:{}):\S+", alternatives.join("|")))?;
        Ok(Self { pattern })
    }

    pub fn for_kind(kind: CompositeKind) -> &'static Self {
        match kind {
            CompositeKind::Agent => &AGENT_MATCHER,
            CompositeKind::Venue => &VENUE_MATCHER,
        }
    }

    pub fn identifiers(&self, raw: &str) -> Vec<String> {
        let mut identifiers = Vec::new();
        let mut start = 0;
        while let Some(found) = self.pattern.find_at(raw, start) {
            if found.end() < raw.len() {
                // \S+ is greedy, so the next char is whitespace.
                identifiers.push(found.as_str().to_string());
                start = found.end();
                continue;
            }
            let candidate = found.as_str();
            let value_start = candidate.find(':').map_or(0, |idx| idx + 1);
            match candidate[value_start..].rfind(']') {
                Some(offset) if offset > 0 => {
                    let end = found.start() + value_start + offset;
                    identifiers.push(raw[found.start()..end].to_string());
                    start = end;
                }
                _ => {
                    let step = candidate.chars().next().map_or(1, char::len_utf8);
                    start = found.start() + step;
                }
            }
        }
        identifiers
    }
}

/// Display name of a composite value: everything before the first `[`, trimmed.
pub fn item_name(raw: &str) -> &str {
    raw.split_once('[').map_or(raw, |(head, _)| head).trim()
}

/// Parse `raw` as an agent or venue entry. Never fails; malformed input just
/// yields fewer identifiers or an empty name.
pub fn extract(raw: &str, kind: CompositeKind) -> CompositeItem {
    let identifiers = SchemeMatcher::for_kind(kind).identifiers(raw);
    CompositeItem::new(kind, raw, item_name(raw), identifiers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_name_and_bracketed_ids() {
        let item = extract("Smith, J. [orcid:0000-0001 viaf:123]", CompositeKind::Agent);
        assert_eq!(item.name, "Smith, J.");
        assert_eq!(item.identifiers, vec!["orcid:0000-0001", "viaf:123"]);
        assert_eq!(item.raw(), "Smith, J. [orcid:0000-0001 viaf:123]");
    }

    #[test]
    fn ignores_schemes_outside_the_allowed_set() {
        let item = extract("Doe, J. [doi:10.1/x orcid:1]", CompositeKind::Agent);
        assert_eq!(item.identifiers, vec!["orcid:1"]);

        let venue = extract("Journal [doi:10.1/x orcid:1]", CompositeKind::Venue);
        assert_eq!(venue.identifiers, vec!["doi:10.1/x"]);
    }

    #[test]
    fn name_without_brackets_is_whole_trimmed_string() {
        let item = extract("  Doe, Jane  ", CompositeKind::Agent);
        assert_eq!(item.name, "Doe, Jane");
        assert!(item.identifiers.is_empty());
    }

    #[test]
    fn ids_only_entry_has_empty_name() {
        let item = extract("[omid:ra/0601 crossref:297]", CompositeKind::Agent);
        assert_eq!(item.name, "");
        assert_eq!(item.identifiers, vec!["omid:ra/0601", "crossref:297"]);
    }

    #[test]
    fn unterminated_trailing_id_is_dropped() {
        let item = extract("Doe [orcid:1 viaf:2", CompositeKind::Agent);
        assert_eq!(item.identifiers, vec!["orcid:1"]);
    }

    #[test]
    fn value_may_contain_brackets_before_whitespace() {
        let item = extract("Doe [viaf:a]b orcid:2]", CompositeKind::Agent);
        assert_eq!(item.identifiers, vec!["viaf:a]b", "orcid:2"]);
    }

    #[test]
    fn trailing_run_is_cut_at_last_bracket() {
        let item = extract("Venue [issn:1]x]", CompositeKind::Venue);
        assert_eq!(item.identifiers, vec!["issn:1]x"]);
    }

    #[test]
    fn empty_input_yields_empty_item() {
        let item = extract("", CompositeKind::Venue);
        assert_eq!(item.name, "");
        assert!(item.identifiers.is_empty());
    }

    #[test]
    fn custom_scheme_set() {
        let matcher = SchemeMatcher::new(&["pmid"]).expect("valid pattern");
        assert_eq!(matcher.identifiers("[pmid:42 doi:1]"), vec!["pmid:42"]);
    }
}
