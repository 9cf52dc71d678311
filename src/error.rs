use thiserror::Error;

use crate::method::TermsMethod;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TermsError {
    // Options
    #[error("invalid method `{given}`; available methods: {}", available_methods())]
    InvalidOption { given: String },
}

impl TermsError {
    /// The rejected input, as the caller passed it.
    pub fn given(&self) -> &str {
        match self {
            Self::InvalidOption { given, .. } => given,
        }
    }
}

fn available_methods() -> String {
    TermsMethod::ALL
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_lists_every_method() {
        let err = TermsError::InvalidOption {
            given: "method".into(),
        };

        assert_eq!(
            err.to_string(),
            "invalid method `method`; available methods: \
             termsFilter,booleanQuery,automaton,docValuesTermsFilter"
        );
        assert_eq!(err.given(), "method");
    }
}
