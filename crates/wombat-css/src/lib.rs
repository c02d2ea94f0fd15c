//! CSS fragment extraction, declaration lookup, and text normalization for
//! the Wombat test toolkit.
//!
//! # Scope
//!
//! This crate implements the pure core that test suites assert with:
//! - **Text normalization**
//!   - Collapse whitespace runs for tolerant comparison of authored vs.
//!     generated CSS text
//! - **Media query extraction** ([CSS Conditional Rules § 7.1](https://www.w3.org/TR/css-conditional-3/#at-media))
//!   - All `@media` blocks of a stylesheet in document order
//!   - Inner rule text of the first block
//!   - Filtering blocks by condition phrase (whitespace- and
//!     case-insensitive)
//! - **Declaration resolution** ([CSS Cascade § 6.1](https://www.w3.org/TR/css-cascade-4/#cascade-sort))
//!   - Effective property→value mapping for an exact selector string across
//!     an ordered stylesheet sequence, last match winning per property
//!
//! Everything here is a total, synchronous, stateless function: no I/O, no
//! shared state, no error type. Absence ("no media block", "no matching
//! selector") is encoded as an empty result, never as a failure.
//!
//! # Deliberately Not Implemented
//!
//! - Parsing markup or CSS into rule objects (an external style engine
//!   owns the [`Stylesheet`] values this crate reads)
//! - Computed styles, specificity, and real cascade semantics — selector
//!   matching is exact-string by contract
//! - Media query *evaluation* (conditions are matched as text, never
//!   evaluated against a viewport)
//! - Preprocessor compilation and markup validation

/// `@media` block extraction per [CSS Conditional Rules § 7.1](https://www.w3.org/TR/css-conditional-3/#at-media).
pub mod media;
/// Declaration lookup per [CSS Cascade § 6.1](https://www.w3.org/TR/css-cascade-4/#cascade-sort).
pub mod resolve;
/// Style-rule value types per [CSSOM § 6.4](https://www.w3.org/TR/cssom-1/#css-style-rules).
pub mod stylesheet;
/// Whitespace normalization for tolerant text comparison.
pub mod text;

// Re-exports for convenience
pub use media::{
    MediaQueryBlock, extract_all_media_queries, extract_first_media_query_inner,
    extract_media_queries, filter_by_condition,
};
pub use resolve::{DeclarationBlock, resolve_declaration_for_selector};
pub use stylesheet::{Declaration, StyleRule, Stylesheet};
pub use text::normalize;
