//! Integration tests for exact-selector declaration resolution.

use wombat_css::{Declaration, StyleRule, Stylesheet, resolve_declaration_for_selector};

/// Helper to build a rule from `(property, value)` pairs.
fn rule(selector: &str, pairs: &[(&str, &str)]) -> StyleRule {
    StyleRule::new(
        selector,
        pairs
            .iter()
            .map(|(name, value)| Declaration::new(*name, *value))
            .collect(),
    )
}

/// Helper to build a single-rule stylesheet.
fn sheet(rules: Vec<StyleRule>) -> Stylesheet {
    Stylesheet::new(rules)
}

#[test]
fn later_sheet_overwrites_and_extends_earlier_one() {
    let first = sheet(vec![rule(".x", &[("color", "red")])]);
    let second = sheet(vec![rule(".x", &[("color", "blue"), ("background", "white")])]);

    let block = resolve_declaration_for_selector(".x", &[first, second]);
    assert_eq!(block.get("color"), Some("blue"));
    assert_eq!(block.get("background"), Some("white"));
    assert_eq!(block.len(), 2);
}

#[test]
fn properties_not_overwritten_by_later_rules_persist() {
    let first = sheet(vec![rule(".x", &[("color", "red"), ("margin", "4px")])]);
    let second = sheet(vec![rule(".x", &[("color", "blue")])]);

    let block = resolve_declaration_for_selector(".x", &[first, second]);
    assert_eq!(block.get("color"), Some("blue"));
    assert_eq!(block.get("margin"), Some("4px"));
}

#[test]
fn unmatched_selector_yields_empty_block() {
    let only = sheet(vec![rule(".x", &[("color", "red")])]);

    let block = resolve_declaration_for_selector(".nonexistent", &[only]);
    assert!(block.is_empty());
    assert_eq!(block.get("color"), None);
}

#[test]
fn selector_matching_is_exact_string_both_ways() {
    let sheets = [sheet(vec![
        rule(".card", &[("padding", "8px")]),
        rule(".card.active", &[("border", "1px solid")]),
    ])];

    let card = resolve_declaration_for_selector(".card", &sheets);
    assert_eq!(card.get("padding"), Some("8px"));
    assert_eq!(card.get("border"), None);

    let active = resolve_declaration_for_selector(".card.active", &sheets);
    assert_eq!(active.get("border"), Some("1px solid"));
    assert_eq!(active.get("padding"), None);
}

#[test]
fn selectors_are_not_whitespace_normalized() {
    let sheets = [sheet(vec![rule(".x ", &[("color", "red")])])];

    assert!(resolve_declaration_for_selector(".x", &sheets).is_empty());
    assert_eq!(
        resolve_declaration_for_selector(".x ", &sheets).get("color"),
        Some("red")
    );
}

#[test]
fn duplicate_selector_in_one_sheet_later_wins() {
    let sheets = [sheet(vec![
        rule(".x", &[("color", "red"), ("margin", "4px")]),
        rule(".x", &[("color", "blue")]),
    ])];

    let block = resolve_declaration_for_selector(".x", &sheets);
    assert_eq!(block.get("color"), Some("blue"));
    assert_eq!(block.get("margin"), Some("4px"));
}

#[test]
fn at_rule_selectors_are_opaque_strings() {
    let sheets = [sheet(vec![rule("@page", &[("margin", "2cm")])])];

    let block = resolve_declaration_for_selector("@page", &sheets);
    assert_eq!(block.get("margin"), Some("2cm"));
}

#[test]
fn pseudo_selectors_are_opaque_strings() {
    let sheets = [sheet(vec![
        rule("a::after", &[("content", "'\\2192'")]),
        rule(".x:hover", &[("color", "teal")]),
    ])];

    assert_eq!(
        resolve_declaration_for_selector("a::after", &sheets).get("content"),
        Some("'\\2192'")
    );
    assert_eq!(
        resolve_declaration_for_selector(".x:hover", &sheets).get("color"),
        Some("teal")
    );
    // The bare element never inherits the pseudo rule's declarations.
    assert!(resolve_declaration_for_selector("a", &sheets).is_empty());
}

#[test]
fn rules_across_three_sheets_merge_in_given_order() {
    let sheets = [
        sheet(vec![rule("body", &[("color", "#111"), ("margin", "0")])]),
        sheet(vec![rule("body", &[("color", "#222")])]),
        sheet(vec![rule("body", &[("color", "#333"), ("padding", "1rem")])]),
    ];

    let block = resolve_declaration_for_selector("body", &sheets);
    assert_eq!(block.get("color"), Some("#333"));
    assert_eq!(block.get("margin"), Some("0"));
    assert_eq!(block.get("padding"), Some("1rem"));
    assert_eq!(block.len(), 3);
}
