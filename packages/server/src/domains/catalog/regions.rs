//! Canadian province and territory name table.
//!
//! Location search accepts regions in either notation ("ON" or "Ontario"),
//! so the table is consulted in both directions. Everything is stored
//! lowercase; callers are expected to lowercase their input.

/// Two-letter abbreviation and full name pairs.
const REGIONS: [(&str, &str); 13] = [
    ("on", "ontario"),
    ("qc", "quebec"),
    ("bc", "british columbia"),
    ("ab", "alberta"),
    ("mb", "manitoba"),
    ("sk", "saskatchewan"),
    ("ns", "nova scotia"),
    ("nb", "new brunswick"),
    ("nl", "newfoundland and labrador"),
    ("pe", "prince edward island"),
    ("yt", "yukon"),
    ("nt", "northwest territories"),
    ("nu", "nunavut"),
];

/// Full name for a two-letter abbreviation ("on" -> "ontario").
pub fn expand_abbreviation(region: &str) -> Option<&'static str> {
    let region = region.trim().to_lowercase();
    REGIONS
        .iter()
        .find(|(abbr, _)| *abbr == region)
        .map(|(_, full)| *full)
}

/// Two-letter abbreviation for a full name ("Ontario" -> "on").
pub fn abbreviate(region: &str) -> Option<&'static str> {
    let region = region.trim().to_lowercase();
    REGIONS
        .iter()
        .find(|(_, full)| *full == region)
        .map(|(abbr, _)| *abbr)
}

/// Canonical (full, lowercase) form of a region given in either notation.
/// Unknown regions pass through lowercased so comparisons stay consistent.
pub fn canonical(region: &str) -> String {
    let lowered = region.trim().to_lowercase();
    match expand_abbreviation(&lowered) {
        Some(full) => full.to_string(),
        None => lowered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_abbreviation() {
        assert_eq!(expand_abbreviation("on"), Some("ontario"));
        assert_eq!(expand_abbreviation("ON"), Some("ontario"));
        assert_eq!(expand_abbreviation("ontario"), None);
        assert_eq!(expand_abbreviation("zz"), None);
    }

    #[test]
    fn test_abbreviate() {
        assert_eq!(abbreviate("Ontario"), Some("on"));
        assert_eq!(abbreviate("british columbia"), Some("bc"));
        assert_eq!(abbreviate("on"), None);
    }

    #[test]
    fn test_canonical_both_notations() {
        assert_eq!(canonical("ON"), "ontario");
        assert_eq!(canonical("Ontario"), "ontario");
        // Unknown regions pass through lowercased
        assert_eq!(canonical("Texas"), "texas");
    }
}
