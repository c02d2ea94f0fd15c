//! Whitespace normalization for tolerant text comparison.
//!
//! Assertions against authored CSS fragments should not fail because of
//! indentation or line-wrapping differences between the authored source and
//! a generated/extracted fragment. Normalizing both sides first makes
//! equality and substring checks resilient to formatting.

/// Collapse every maximal run of whitespace to a single space and trim.
///
/// Whitespace is anything `char::is_whitespace` accepts (spaces, tabs,
/// newlines). Case and all non-whitespace characters are preserved.
///
/// This is a total function: it never fails, and an empty input yields an
/// empty output. It is also idempotent: `normalize(normalize(x))` equals
/// `normalize(x)` for every `x`.
///
/// # Example
/// ```
/// use wombat_css::normalize;
///
/// assert_eq!(normalize(" a \n\t b "), "a b");
/// ```
#[must_use]
pub fn normalize(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_interior_runs_and_trims() {
        assert_eq!(normalize(" a \n\t b "), "a b");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn whitespace_only_input_yields_empty_output() {
        assert_eq!(normalize(" \t\r\n "), "");
    }

    #[test]
    fn preserves_case_and_punctuation() {
        assert_eq!(
            normalize(".Card   {\n  color:  Red;\n}"),
            ".Card { color: Red; }"
        );
    }
}
