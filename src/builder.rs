use std::fmt;

use crate::error::TermsError;
use crate::header::Header;
use crate::method::TermsMethod;

/// Join string used when no separator was set.
pub const DEFAULT_SEPARATOR: &str = ",";

// ---------------------------------------------------------------------------
// Terms
// ---------------------------------------------------------------------------

/// A Solr terms query fragment: `{!terms f=<field> ...}v1,v2,v3`.
///
/// Created via [`Terms::create`] or [`solr_terms::terms()`](crate::terms).
/// Every `with_*` method returns a new `Terms` and leaves the receiver as it
/// was, so a base fragment can be shared and specialised freely. Render with
/// [`Display`](fmt::Display) (`to_string()` or `format!`).
///
/// # Example
///
/// ```rust
/// use solr_terms::Terms;
///
/// let base = Terms::create("id", [1, 2, 3]);
/// let spaced = base
///     .with_method("termsFilter")?
///     .with_separator(" ")
///     .with_cache(false);
///
/// assert_eq!(base.to_string(), "{!terms f=id}1,2,3");
/// assert_eq!(
///     spaced.to_string(),
///     r#"{!terms f=id method=termsFilter separator=" " cache=false}1 2 3"#
/// );
/// # Ok::<(), solr_terms::TermsError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Terms {
    field:     String,
    values:    Vec<String>,
    method:    Option<TermsMethod>,
    separator: Option<String>,
    cache:     Option<bool>,
}

impl Terms {
    // ── Construction ──────────────────────────────────────────────────────

    /// Start a fragment matching `field` against `values`.
    ///
    /// Values are converted with [`ToString`] and kept in the order given.
    /// Neither argument is validated; an empty `values` renders nothing
    /// after the closing brace.
    pub fn create<I>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        Self {
            field:     field.into(),
            values:    values.into_iter().map(|v| v.to_string()).collect(),
            method:    None,
            separator: None,
            cache:     None,
        }
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Join values with `separator` instead of `,`.
    ///
    /// Any string is accepted, including the empty string. The header shows
    /// it quoted and backslash-escaped; the values are joined with it as-is.
    pub fn with_separator(&self, separator: impl Into<String>) -> Self {
        Self {
            separator: Some(separator.into()),
            ..self.clone()
        }
    }

    /// Set the evaluation method from its Solr literal.
    ///
    /// # Errors
    ///
    /// Returns [`TermsError::InvalidOption`] unless `method` is exactly one
    /// of `termsFilter`, `booleanQuery`, `automaton` or `docValuesTermsFilter`.
    pub fn with_method(&self, method: &str) -> Result<Self, TermsError> {
        let method = method.parse::<TermsMethod>()?;
        Ok(self.with_terms_method(method))
    }

    /// Set the evaluation method from an already-parsed [`TermsMethod`].
    pub fn with_terms_method(&self, method: TermsMethod) -> Self {
        Self {
            method: Some(method),
            ..self.clone()
        }
    }

    /// Enable or disable Solr's filter cache for this query.
    pub fn with_cache(&self, cache: bool) -> Self {
        Self {
            cache: Some(cache),
            ..self.clone()
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn method(&self) -> Option<TermsMethod> {
        self.method
    }

    /// The separator exactly as set, or `None` when left at the default.
    pub fn separator(&self) -> Option<&str> {
        self.separator.as_deref()
    }

    pub fn cache(&self) -> Option<bool> {
        self.cache
    }

    /// The string values are joined with: the separator if set, `,` otherwise.
    pub fn effective_separator(&self) -> &str {
        self.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR)
    }

    fn header(&self) -> Header<'_> {
        Header {
            field:     &self.field,
            method:    self.method,
            separator: self.separator.as_deref(),
            cache:     self.cache,
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

impl fmt::Display for Terms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        tracing::trace!(
            field = %self.field,
            values = self.values.len(),
            "rendering terms fragment"
        );

        let mut header = String::new();
        self.header().write_into(&mut header);

        write!(f, "{{!terms {header}}}")?;
        f.write_str(&self.values.join(self.effective_separator()))
    }
}
