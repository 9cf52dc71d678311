use std::fmt;
use std::str::FromStr;

use crate::error::TermsError;

/// The algorithm Solr uses to evaluate a terms query.
///
/// Parsed from its Solr literal with [`FromStr`]; anything outside the four
/// known literals is rejected with [`TermsError::InvalidOption`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", try_from = "String"))]
pub enum TermsMethod {
    /// `termsFilter`, Solr's default.
    TermsFilter,

    /// `booleanQuery`, expands to a boolean OR of term queries.
    BooleanQuery,

    /// `automaton`
    Automaton,

    /// `docValuesTermsFilter`, evaluated against docValues.
    DocValuesTermsFilter,
}

impl TermsMethod {
    /// Every method, in the order Solr documents them.
    pub const ALL: [TermsMethod; 4] = [
        TermsMethod::TermsFilter,
        TermsMethod::BooleanQuery,
        TermsMethod::Automaton,
        TermsMethod::DocValuesTermsFilter,
    ];

    /// The literal written after `method=` in the header.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TermsFilter          => "termsFilter",
            Self::BooleanQuery         => "booleanQuery",
            Self::Automaton            => "automaton",
            Self::DocValuesTermsFilter => "docValuesTermsFilter",
        }
    }
}

impl fmt::Display for TermsMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TermsMethod {
    type Err = TermsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| {
                tracing::debug!(given = s, "rejecting unknown terms method");
                TermsError::InvalidOption {
                    given: s.to_owned(),
                }
            })
    }
}

impl TryFrom<String> for TermsMethod {
    type Error = TermsError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_literal() {
        for m in TermsMethod::ALL {
            assert_eq!(m.as_str().parse::<TermsMethod>(), Ok(m));
            assert_eq!(m.to_string(), m.as_str());
        }
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("TermsFilter".parse::<TermsMethod>().is_err());
        assert!("termsfilter".parse::<TermsMethod>().is_err());
        assert!(" termsFilter".parse::<TermsMethod>().is_err());
    }

    #[test]
    fn rejects_unknown_method() {
        let err = "method".parse::<TermsMethod>().unwrap_err();
        assert_eq!(err.given(), "method");
        assert!(err.to_string().contains("docValuesTermsFilter"));
    }

    #[test]
    fn rejects_empty_string() {
        assert!("".parse::<TermsMethod>().is_err());
    }
}
