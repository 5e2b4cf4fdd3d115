use once_cell::sync::Lazy;
use regex::Regex;
use userdeck_types::UserRecord;

use crate::ValidationError;

static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]").expect("static pattern compiles"));

/// Validated name search.
///
/// Only ASCII letters and digits are accepted; anything else rejects the
/// whole input rather than being stripped. Matching is a case-insensitive
/// substring test against the first and the last name separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    needle: String,
}

impl SearchQuery {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if let Some(found) = DISALLOWED.find(input) {
            let offending = found.as_str().chars().next().unwrap_or_default();
            return Err(ValidationError {
                query: input.to_string(),
                offending,
            });
        }

        Ok(Self {
            raw: input.to_string(),
            needle: input.to_lowercase(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn matches(&self, user: &UserRecord) -> bool {
        user.name.first.to_lowercase().contains(&self.needle)
            || user.name.last.to_lowercase().contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use userdeck_testing::fixtures::user;

    #[rstest]
    #[case::letters("ann")]
    #[case::mixed_case("AnN")]
    #[case::digits("42")]
    #[case::empty("")]
    fn test_accepts_alphanumeric(#[case] input: &str) {
        assert!(SearchQuery::parse(input).is_ok());
    }

    #[rstest]
    #[case::space("ann lee", ' ')]
    #[case::hyphen("smith-jones", '-')]
    #[case::markup("<b>", '<')]
    #[case::accented("zoé", 'é')]
    #[case::wildcard("a*", '*')]
    fn test_rejects_anything_else(#[case] input: &str, #[case] offending: char) {
        let err = SearchQuery::parse(input).unwrap_err();
        assert_eq!(err.offending, offending);
        assert_eq!(err.query, input);
    }

    #[test]
    fn test_matches_first_or_last_name_case_insensitively() {
        let query = SearchQuery::parse("SMI").unwrap();

        assert!(query.matches(&user("Alice", "Smith")));
        assert!(query.matches(&user("Smilla", "Berg")));
        assert!(!query.matches(&user("Bob", "Jones")));
    }

    #[test]
    fn test_does_not_match_across_first_and_last_name() {
        // "ceSm" only exists in the joined "AliceSmith"
        let query = SearchQuery::parse("ceSm").unwrap();
        assert!(!query.matches(&user("Alice", "Smith")));
    }
}
