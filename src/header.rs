use crate::method::TermsMethod;

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

/// The options written between `{!terms ` and `}`.
///
/// Borrowed from a [`Terms`](crate::Terms) at render time. Keys are always
/// emitted in the order `f`, `method`, `separator`, `cache`; unset options
/// are left out entirely.
pub(crate) struct Header<'a> {
    pub field:     &'a str,
    pub method:    Option<TermsMethod>,
    pub separator: Option<&'a str>,
    pub cache:     Option<bool>,
}

impl Header<'_> {
    /// Write the space-separated `key=value` list into `out`.
    pub(crate) fn write_into(&self, out: &mut String) {
        out.push_str("f=");
        out.push_str(self.field);

        if let Some(method) = self.method {
            out.push_str(" method=");
            out.push_str(method.as_str());
        }

        if let Some(sep) = self.separator {
            out.push_str(" separator=");
            out.push_str(&escape_separator(sep));
        }

        if let Some(cache) = self.cache {
            out.push_str(if cache { " cache=true" } else { " cache=false" });
        }
    }
}

// ---------------------------------------------------------------------------
// Escaping
// ---------------------------------------------------------------------------

/// Quote a separator for the header: wrap it in `"` and backslash-escape
/// any `\`, `"` or `'` inside. NUL is written as `\0`.
///
/// Only the header uses this form. Values are always joined with the raw
/// separator.
pub fn escape_separator(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 2);
    out.push('"');
    for ch in raw.chars() {
        match ch {
            '\\' | '"' | '\'' => {
                out.push('\\');
                out.push(ch);
            }
            '\0' => out.push_str("\\0"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(header: Header<'_>) -> String {
        let mut out = String::new();
        header.write_into(&mut out);
        out
    }

    #[test]
    fn escapes_quotes_and_backslashes() {
        assert_eq!(escape_separator(","), r#"",""#);
        assert_eq!(escape_separator(" "), r#"" ""#);
        assert_eq!(escape_separator(r#"""#), r#""\"""#);
        assert_eq!(escape_separator(r"\"), r#""\\""#);
        assert_eq!(escape_separator(r#"a\"b"#), r#""a\\\"b""#);
    }

    #[test]
    fn empty_separator_is_an_empty_quoted_literal() {
        assert_eq!(escape_separator(""), r#""""#);
    }

    #[test]
    fn escapes_single_quote() {
        assert_eq!(escape_separator("'"), r#""\'""#);
        assert_eq!(escape_separator("a'b"), r#""a\'b""#);
    }

    #[test]
    fn nul_is_written_as_backslash_zero() {
        assert_eq!(escape_separator("\0"), r#""\0""#);
        assert_eq!(escape_separator("a\0b"), r#""a\0b""#);
    }

    #[test]
    fn field_only() {
        let h = Header {
            field:     "id",
            method:    None,
            separator: None,
            cache:     None,
        };
        assert_eq!(render(h), "f=id");
    }

    #[test]
    fn keys_follow_fixed_order() {
        let h = Header {
            field:     "id",
            method:    Some(TermsMethod::Automaton),
            separator: Some("|"),
            cache:     Some(true),
        };
        assert_eq!(render(h), r#"f=id method=automaton separator="|" cache=true"#);
    }

    #[test]
    fn field_is_written_verbatim() {
        let h = Header {
            field:     "my field+x",
            method:    None,
            separator: None,
            cache:     Some(false),
        };
        assert_eq!(render(h), "f=my field+x cache=false");
    }
}
