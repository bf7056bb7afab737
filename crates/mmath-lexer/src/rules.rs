//! Declarative state machine definition.
//!
//! Each [`LexState`] owns an ordered rule list; the tokenizer tries the
//! active state's rules in declaration order and the first rule matching a
//! non-empty prefix wins. Overlapping patterns make this order observable,
//! so it is preserved exactly: variables, whitespace, numbers, assignment,
//! keywords, operators, built-in functions, delimiters, brackets, string
//! openers.

use once_cell::sync::Lazy;
use regex::Regex;

use mmath_common::TokenKind;

use crate::state::LexState;
use crate::tables;

/// How a rule recognizes input at the cursor.
#[derive(Clone, Copy)]
pub(crate) enum Matcher {
    /// Fixed text prefix.
    Literal(&'static str),
    /// Anchored pattern tried against the remaining text.
    Regex(&'static Lazy<Regex>),
    /// Hand-rolled check returning the matched byte length, for the cases
    /// an anchored pattern cannot express (one-character lookahead, content
    /// fallbacks).
    Predicate(fn(&str) -> Option<usize>),
}

impl Matcher {
    /// Byte length of the prefix this matcher accepts, if any. Never zero.
    pub(crate) fn match_len(&self, rest: &str) -> Option<usize> {
        match self {
            Matcher::Literal(text) => rest.starts_with(text).then(|| text.len()),
            Matcher::Regex(re) => re.find(rest).map(|m| m.end()).filter(|&len| len > 0),
            Matcher::Predicate(f) => f(rest),
        }
    }
}

/// State transition applied after a rule matches.
#[derive(Clone, Copy)]
pub(crate) enum Action {
    None,
    Push(LexState),
    Pop,
}

/// One entry of a state's ordered rule list.
#[derive(Clone, Copy)]
pub(crate) struct Rule {
    pub(crate) matcher: Matcher,
    pub(crate) kind: TokenKind,
    pub(crate) action: Action,
}

const fn rule(matcher: Matcher, kind: TokenKind) -> Rule {
    Rule {
        matcher,
        kind,
        action: Action::None,
    }
}

const fn push_rule(matcher: Matcher, kind: TokenKind, to: LexState) -> Rule {
    Rule {
        matcher,
        kind,
        action: Action::Push(to),
    }
}

const fn pop_rule(matcher: Matcher, kind: TokenKind) -> Rule {
    Rule {
        matcher,
        kind,
        action: Action::Pop,
    }
}

// ── Character-class patterns ─────────────────────────────────────────────

/// `$` followed by letters, digits, `-` or `_`: a template variable.
static VARIABLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\$[A-Za-z0-9_-]+").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s+").unwrap());
static HEX_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0[xX][0-9a-fA-F]*").unwrap());
/// `$` with optional signs and digits -- a `$` that failed the variable rule.
static DOLLAR_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\$[+-]*\d*(?:\.\d*)?").unwrap());
static DECIMAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").unwrap());
static DELIMITER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[;,.]").unwrap());
static BRACKET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[(){}\[\]]").unwrap());

// ── Predicates ───────────────────────────────────────────────────────────

/// A bare `=` is an assignment tag; `==` must fall through to the operator
/// table and lex as one two-byte token.
fn match_assignment(rest: &str) -> Option<usize> {
    let mut bytes = rest.bytes();
    if bytes.next() != Some(b'=') {
        return None;
    }
    match bytes.next() {
        Some(b'=') => None,
        _ => Some(1),
    }
}

/// Any single character other than `'`: single-quoted string content.
fn match_single_quoted_content(rest: &str) -> Option<usize> {
    let c = rest.chars().next()?;
    (c != '\'').then(|| c.len_utf8())
}

/// Any single character other than `"`: double-quoted string content.
fn match_double_quoted_content(rest: &str) -> Option<usize> {
    let c = rest.chars().next()?;
    (c != '"').then(|| c.len_utf8())
}

// ── Rule lists ───────────────────────────────────────────────────────────

/// The rules shared by the root state and single-quoted strings: everything
/// that cannot open a nested context. Declaration order is load-bearing.
static NON_NESTING_RULES: &[Rule] = &[
    rule(Matcher::Regex(&VARIABLE_RE), TokenKind::Variable),
    rule(Matcher::Regex(&WHITESPACE_RE), TokenKind::Whitespace),
    rule(Matcher::Regex(&HEX_NUMBER_RE), TokenKind::Number),
    rule(Matcher::Regex(&DOLLAR_NUMBER_RE), TokenKind::Number),
    rule(Matcher::Regex(&DECIMAL_RE), TokenKind::Number),
    rule(Matcher::Predicate(match_assignment), TokenKind::Assignment),
    rule(Matcher::Regex(&tables::KEYWORDS_RE), TokenKind::Keyword),
    rule(Matcher::Regex(&tables::OPERATORS_RE), TokenKind::Operator),
    rule(Matcher::Regex(&tables::FUNCTIONS_RE), TokenKind::Function),
    rule(Matcher::Regex(&DELIMITER_RE), TokenKind::Delimiter),
    rule(Matcher::Regex(&BRACKET_RE), TokenKind::Bracket),
];

/// Quote rules that leave the root state.
static STRING_OPENERS: &[Rule] = &[
    push_rule(Matcher::Literal("'"), TokenKind::String, LexState::StringSingle),
    push_rule(Matcher::Literal("\""), TokenKind::TypeString, LexState::StringDouble),
];

static ROOT_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    let mut rules = NON_NESTING_RULES.to_vec();
    rules.extend_from_slice(STRING_OPENERS);
    rules
});

/// Single-quoted strings: nesting escapes first, then close, then the full
/// non-nesting rule set re-tried, then anything else as string content.
static STRING_SINGLE_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    let mut rules = vec![
        push_rule(Matcher::Literal("{"), TokenKind::Bracket, LexState::NestedCurly),
        push_rule(Matcher::Literal("("), TokenKind::Bracket, LexState::NestedParens),
        push_rule(Matcher::Literal("\""), TokenKind::TypeString, LexState::StringDouble),
        pop_rule(Matcher::Literal("'"), TokenKind::String),
    ];
    rules.extend_from_slice(NON_NESTING_RULES);
    rules.push(rule(
        Matcher::Predicate(match_single_quoted_content),
        TokenKind::String,
    ));
    rules
});

/// Double-quoted strings are opaque: no nested-expression escape.
static STRING_DOUBLE_RULES: &[Rule] = &[
    rule(Matcher::Predicate(match_double_quoted_content), TokenKind::TypeString),
    pop_rule(Matcher::Literal("\""), TokenKind::TypeString),
];

/// Inside `{ ... }` opened from a string. Only the close and fresh string
/// openers are recognized; everything else takes the invalid fallback.
static NESTED_CURLY_RULES: &[Rule] = &[
    pop_rule(Matcher::Literal("}"), TokenKind::Bracket),
    push_rule(Matcher::Literal("'"), TokenKind::String, LexState::StringSingle),
    push_rule(Matcher::Literal("\""), TokenKind::TypeString, LexState::StringDouble),
];

/// Inside `( ... )` opened from a string.
static NESTED_PARENS_RULES: &[Rule] = &[
    pop_rule(Matcher::Literal(")"), TokenKind::Bracket),
    push_rule(Matcher::Literal("'"), TokenKind::String, LexState::StringSingle),
    push_rule(Matcher::Literal("\""), TokenKind::TypeString, LexState::StringDouble),
];

/// The ordered rule list for a state.
pub(crate) fn rules_for(state: LexState) -> &'static [Rule] {
    match state {
        LexState::Root => ROOT_RULES.as_slice(),
        LexState::StringSingle => STRING_SINGLE_RULES.as_slice(),
        LexState::StringDouble => STRING_DOUBLE_RULES,
        LexState::NestedCurly => NESTED_CURLY_RULES,
        LexState::NestedParens => NESTED_PARENS_RULES,
    }
}
