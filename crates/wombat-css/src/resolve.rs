//! Effective declaration lookup for an exact selector string.
//!
//! [CSS Cascade § 6.1](https://www.w3.org/TR/css-cascade-4/#cascade-sort)
//! "The last declaration in document order wins."
//!
//! The resolver deliberately implements order-only merging, not the real
//! cascade: rules match by byte-for-byte selector equality, and later
//! matches overwrite earlier ones per property. Specificity, combinators,
//! and selector normalization are all out of contract — a rule for `.card`
//! never answers a lookup for `.card.active`. Test suites that assert on
//! authored stylesheets depend on this exact-string behavior.

use std::collections::HashMap;

use serde::Serialize;

use crate::stylesheet::Stylesheet;

/// The effective property→value mapping for one selector string.
///
/// [CSSOM § 6.6](https://www.w3.org/TR/cssom-1/#css-declaration-blocks)
///
/// "No match anywhere" is an empty block, not an error; looking up any
/// property on an empty block returns `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeclarationBlock {
    properties: HashMap<String, String>,
}

impl DeclarationBlock {
    /// The value of a property, or `None` when the property is absent.
    ///
    /// Property names compare as authored (case-sensitively).
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties.get(property).map(String::as_str)
    }

    /// Whether a property is present in the block.
    #[must_use]
    pub fn contains(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    /// Number of distinct properties in the block.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the block holds no properties at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate over the `(property, value)` pairs, in no particular order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// Resolve the effective declarations for `selector` across `sheets`.
///
/// [CSS Cascade § 6.1](https://www.w3.org/TR/css-cascade-4/#cascade-sort)
/// "The last declaration in document order wins."
///
/// Iterates stylesheets in the given order and rules within each sheet in
/// source order. Every rule whose selector text equals `selector` exactly
/// merges its declarations into the result, later matches overwriting
/// earlier ones per property; properties a later rule does not touch
/// persist. Duplicate selectors within a single sheet merge the same way:
/// later in source wins.
///
/// Neither side is normalized; callers pass the exact authored selector
/// text. An empty sheet slice yields an empty block.
///
/// # Example
/// ```
/// use wombat_css::{Declaration, StyleRule, Stylesheet, resolve_declaration_for_selector};
///
/// let sheet = Stylesheet::new(vec![StyleRule::new(
///     ".x",
///     vec![Declaration::new("color", "red")],
/// )]);
/// let block = resolve_declaration_for_selector(".x", &[sheet]);
/// assert_eq!(block.get("color"), Some("red"));
/// ```
#[must_use]
pub fn resolve_declaration_for_selector(selector: &str, sheets: &[Stylesheet]) -> DeclarationBlock {
    let mut properties = HashMap::new();

    for sheet in sheets {
        for rule in &sheet.rules {
            if rule.selector == selector {
                for declaration in &rule.declarations {
                    let _ = properties.insert(declaration.name.clone(), declaration.value.clone());
                }
            }
        }
    }

    DeclarationBlock { properties }
}
