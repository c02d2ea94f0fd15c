//! The parsed style-rule model read by the declaration resolver.
//!
//! [CSSOM § 6.4](https://www.w3.org/TR/cssom-1/#css-style-rules)
//! "The `CSSStyleRule` interface represents a style rule." Rules expose
//! their selector as authored text (`selectorText`) and an ordered
//! declaration list.
//!
//! These are plain value types populated by an external style engine (the
//! component that actually parses documents and stylesheets). The toolkit
//! never parses CSS into them and never mutates them; it only reads.

use serde::Serialize;

/// A single property declaration (e.g. `color: red`).
///
/// [CSS Syntax § 5.4.6](https://www.w3.org/TR/css-syntax-3/#consume-declaration)
///
/// Property names are kept exactly as authored; the resolver compares and
/// merges them case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    /// The property name as authored (e.g. `background-color`, `--accent`).
    pub name: String,
    /// The property value as authored.
    pub value: String,
}

impl Declaration {
    /// Create a declaration from a property name and value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A style rule: one selector string plus its ordered declarations.
///
/// [CSSOM § 6.4.1](https://www.w3.org/TR/cssom-1/#the-cssstylerule-interface)
///
/// The selector is a single opaque string, exactly as the owning engine
/// exposes it. At-rule selectors (`@page`) and pseudo selectors
/// (`a::after`, `.x:hover`) receive no special treatment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleRule {
    /// The authored selector text.
    pub selector: String,
    /// The declarations of this rule, in source order.
    pub declarations: Vec<Declaration>,
}

impl StyleRule {
    /// Create a rule from a selector and its declarations.
    #[must_use]
    pub fn new(selector: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            selector: selector.into(),
            declarations,
        }
    }
}

/// An ordered sequence of style rules, as parsed by an external engine.
///
/// [CSS Cascade § 6.1](https://www.w3.org/TR/css-cascade-4/#cascade-sort)
/// "Declarations from style sheets independently linked by the originating
/// document are treated as if they were concatenated in linking order."
///
/// Rule order is source order; the resolver depends on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stylesheet {
    /// The rules of the stylesheet, in source order.
    pub rules: Vec<StyleRule>,
}

impl Stylesheet {
    /// Create a stylesheet from an ordered rule list.
    #[must_use]
    pub fn new(rules: Vec<StyleRule>) -> Self {
        Self { rules }
    }
}
