//! # solr-terms
//!
//! Immutable builder for Solr terms query-parser fragments.
//!
//! solr-terms renders local-params strings such as
//! `{!terms f=id method=termsFilter separator=" " cache=false}v1 v2` for a
//! search client to embed in a larger query. It does **not** send queries,
//! validate field names, or know about any other Solr parser.
//!
//! # Quick Start
//!
//! ```rust
//! let fq = solr_terms::terms("id", ["doc1", "doc2", "doc3"]);
//! assert_eq!(fq.to_string(), "{!terms f=id}doc1,doc2,doc3");
//!
//! let piped = fq.with_separator("|").with_cache(true);
//! assert_eq!(piped.to_string(), r#"{!terms f=id separator="|" cache=true}doc1|doc2|doc3"#);
//!
//! // The original is untouched.
//! assert_eq!(fq.to_string(), "{!terms f=id}doc1,doc2,doc3");
//! ```
//!
//! # Methods
//!
//! The `method` option is a closed set. Strings are checked when the option
//! is set, never at render time:
//!
//! ```rust
//! use solr_terms::{Terms, TermsMethod};
//!
//! let base = Terms::create("id", [1, 2]);
//! assert!(base.with_method("bogus").is_err());
//!
//! let typed = base.with_terms_method(TermsMethod::DocValuesTermsFilter);
//! assert_eq!(typed.to_string(), "{!terms f=id method=docValuesTermsFilter}1,2");
//! ```
//!
//! # Feature flags
//!
//! - `serde` (off by default): `Serialize`/`Deserialize` for [`TermsMethod`]
//!   using the Solr literals. Its tests only build with the feature enabled:
//!   `cargo test --all-features`.

#![forbid(unsafe_code)]

mod builder;
mod error;
mod header;
mod method;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::{Terms, DEFAULT_SEPARATOR};
pub use error::TermsError;
pub use header::escape_separator;
pub use method::TermsMethod;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`Terms`] fragment for `field` and `values`.
///
/// Shorthand for [`Terms::create`].
///
/// # Example
///
/// ```rust
/// let fq = solr_terms::terms("id", Vec::<String>::new());
/// assert_eq!(fq.to_string(), "{!terms f=id}");
/// ```
pub fn terms<I>(field: impl Into<String>, values: I) -> Terms
where
    I: IntoIterator,
    I::Item: ToString,
{
    Terms::create(field, values)
}
