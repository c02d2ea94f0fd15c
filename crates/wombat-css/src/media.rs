//! `@media` block extraction from raw CSS text.
//!
//! [CSS Conditional Rules § 7.1](https://www.w3.org/TR/css-conditional-3/#at-media)
//! "The `@media` rule is a conditional group rule whose condition is a
//! media query."
//!
//! The extractor treats the stylesheet as opaque text: it scans for
//! `@media <condition> { ... }` blocks and returns their full text, header
//! condition, and inner rule body. Matching balances braces with an explicit
//! depth counter so that selector blocks nested inside the media body (each
//! with their own braces) close at the *outer* brace of the `@media` block,
//! not at the first `}` encountered.
//!
//! Absence is never an error: input with no `@media` occurrence yields an
//! empty result, and a malformed (unbalanced) block is skipped rather than
//! reported.

use serde::Serialize;

use crate::text::normalize;

/// The at-keyword that opens a conditional media group.
///
/// [CSS Syntax § 4.3.1](https://www.w3.org/TR/css-syntax-3/#consume-token)
/// At-keywords are ASCII case-insensitive.
const AT_MEDIA: &[u8] = b"@media";

/// One extracted `@media` block.
///
/// [CSS Conditional Rules § 7.1](https://www.w3.org/TR/css-conditional-3/#at-media)
///
/// Constructed transiently per extraction call; purely a view of the input
/// text materialized into owned strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaQueryBlock {
    /// The full matched text, from `@media` through the balanced closing brace.
    pub text: String,
    /// The raw header between `@media` and the opening brace
    /// (e.g. ` screen and (min-width: 1024px) `). Not normalized.
    pub condition: String,
    /// The body strictly between the block's outer braces, whitespace intact.
    pub inner: String,
}

impl MediaQueryBlock {
    /// Whether this block's condition matches a condition phrase.
    ///
    /// Both sides are whitespace-normalized and ASCII-lowercased, then the
    /// phrase is matched by substring containment, so `print` matches
    /// `@media print` and `@media   PRINT` but not
    /// `@media screen and (min-width: 1024px)`.
    #[must_use]
    pub fn matches_condition(&self, phrase: &str) -> bool {
        normalize(&self.condition)
            .to_ascii_lowercase()
            .contains(&normalize(phrase).to_ascii_lowercase())
    }
}

/// Extract every `@media` block from raw CSS text, in document order.
///
/// A block qualifies only if its body contains at least one nested
/// brace-delimited rule; a media group with an empty body is not reported.
/// Zero `@media` occurrences yield an empty vec. An unbalanced block is
/// skipped; scanning resumes past its opening brace so that any balanced
/// block nested inside it is still found.
///
/// # Example
/// ```
/// use wombat_css::extract_media_queries;
///
/// let css = "@media print { .a { color: red; } }";
/// let blocks = extract_media_queries(css);
/// assert_eq!(blocks.len(), 1);
/// assert_eq!(blocks[0].inner, " .a { color: red; } ");
/// ```
#[must_use]
pub fn extract_media_queries(css: &str) -> Vec<MediaQueryBlock> {
    let mut blocks = Vec::new();
    let mut from = 0;

    while let Some(start) = find_at_media(css, from) {
        let header_start = start + AT_MEDIA.len();

        // The condition clause runs up to the first opening brace and must
        // be non-empty (`@media{` is not a media rule).
        let Some(open) = css[header_start..].find('{').map(|i| header_start + i) else {
            break;
        };
        if open == header_start {
            from = open + 1;
            continue;
        }

        match consume_block(css, open) {
            BlockEnd::Balanced { close, has_nested } => {
                if has_nested {
                    blocks.push(MediaQueryBlock {
                        text: css[start..=close].to_string(),
                        condition: css[header_start..open].to_string(),
                        inner: css[open + 1..close].to_string(),
                    });
                }
                from = close + 1;
            }
            // Unbalanced to end of input. A balanced `@media` may still sit
            // inside the broken body, so only skip the opening brace.
            BlockEnd::Unbalanced => from = open + 1,
        }
    }

    blocks
}

/// Extract the full text of every `@media` block, in document order.
///
/// Convenience over [`extract_media_queries`] for callers that assert on
/// block text only.
#[must_use]
pub fn extract_all_media_queries(css: &str) -> Vec<String> {
    extract_media_queries(css)
        .into_iter()
        .map(|block| block.text)
        .collect()
}

/// Extract the inner rule text of the first `@media` block.
///
/// The inner text is the content strictly between the block's outer `{` and
/// its matching `}`, with the `@media (...)` header and the outermost braces
/// removed and interior whitespace preserved. Returns an empty string when
/// the input contains no media block.
#[must_use]
pub fn extract_first_media_query_inner(css: &str) -> String {
    extract_media_queries(css)
        .into_iter()
        .next()
        .map_or_else(String::new, |block| block.inner)
}

/// Keep only the blocks whose `@media` header matches a condition phrase.
///
/// `blocks` holds full block strings as returned by
/// [`extract_all_media_queries`]. Matching is whitespace-insensitive and
/// ASCII-case-insensitive on both sides (see
/// [`MediaQueryBlock::matches_condition`]). A block string with no
/// recognizable `@media ... {` header never matches.
#[must_use]
pub fn filter_by_condition(blocks: &[String], condition: &str) -> Vec<String> {
    let wanted = normalize(condition).to_ascii_lowercase();
    blocks
        .iter()
        .filter(|block| {
            header_of(block).is_some_and(|header| {
                normalize(header).to_ascii_lowercase().contains(&wanted)
            })
        })
        .cloned()
        .collect()
}

/// Where scanning a brace-delimited block ended.
enum BlockEnd {
    /// The opening brace was balanced by the `}` at byte offset `close`.
    Balanced {
        /// Byte offset of the balancing `}`.
        close: usize,
        /// Whether the body contained at least one nested `{`.
        has_nested: bool,
    },
    /// The input ended before the opening brace was balanced.
    Unbalanced,
}

/// Consume the block opened by the `{` at byte offset `open`.
///
/// [CSS Syntax § 5.4.8](https://www.w3.org/TR/css-syntax-3/#consume-simple-block)
/// "Repeatedly consume the next input token and process it as follows ...
/// ending token: return the block."
///
/// Counts brace depth character by character so arbitrarily nested rule
/// blocks inside the body are handled.
fn consume_block(css: &str, open: usize) -> BlockEnd {
    let mut depth = 0usize;
    let mut has_nested = false;

    for (offset, c) in css[open..].char_indices() {
        match c {
            '{' => {
                depth += 1;
                if depth > 1 {
                    has_nested = true;
                }
            }
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return BlockEnd::Balanced {
                        close: open + offset,
                        has_nested,
                    };
                }
            }
            _ => {}
        }
    }

    BlockEnd::Unbalanced
}

/// Find the next `@media` at-keyword at or after byte offset `from`.
///
/// ASCII case-insensitive, matching the tolerance of at-keyword tokens.
fn find_at_media(css: &str, from: usize) -> Option<usize> {
    css.as_bytes()
        .windows(AT_MEDIA.len())
        .enumerate()
        .skip(from)
        .find(|(_, window)| window.eq_ignore_ascii_case(AT_MEDIA))
        .map(|(position, _)| position)
}

/// The header text between `@media` and the opening brace of a block string.
fn header_of(block: &str) -> Option<&str> {
    let start = find_at_media(block, 0)?;
    let header_start = start + AT_MEDIA.len();
    let open = block[header_start..].find('{').map(|i| header_start + i)?;
    if open > header_start {
        Some(&block[header_start..open])
    } else {
        None
    }
}
