//! Bracket and auto-closing pair configuration.
//!
//! Pure static data consumed by the host editor for bracket matching,
//! auto-insert-on-type, and surround-selection affordances. No state, no
//! failure modes.

use serde::Serialize;

/// A matching open/close delimiter pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BracketPair {
    pub open: &'static str,
    pub close: &'static str,
}

const fn pair(open: &'static str, close: &'static str) -> BracketPair {
    BracketPair { open, close }
}

/// Delimiter pairs the editor treats as matching brackets.
pub const BRACKET_PAIRS: &[BracketPair] = &[pair("{", "}"), pair("[", "]"), pair("(", ")")];

/// Pairs the editor auto-closes when the opening character is typed:
/// the bracket pairs plus both string-quote flavors.
pub const AUTO_CLOSING_PAIRS: &[BracketPair] = &[
    pair("{", "}"),
    pair("[", "]"),
    pair("(", ")"),
    pair("\"", "\""),
    pair("'", "'"),
];

/// Pairs the editor wraps around a selection when the opening character is
/// typed. Same table as auto-close.
pub const SURROUNDING_PAIRS: &[BracketPair] = AUTO_CLOSING_PAIRS;
