use serde::Serialize;

use crate::span::Span;

/// A classified span of input text produced by the Metric Math tokenizer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Create a new token from a kind and byte offsets.
    pub fn new(kind: TokenKind, start: u32, end: u32) -> Self {
        Self {
            kind,
            span: Span::new(start, end),
        }
    }
}

/// Every token class in the Metric Math expression language.
///
/// Tokens partition each lexed line: spans are contiguous, non-overlapping,
/// and cover the whole input including whitespace. The host editor maps each
/// class to a display style via [`TokenKind::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Runs of whitespace.
    Whitespace,
    /// Numeric literal: decimal, scientific, hex (`0xFF`), or a `$`-prefixed
    /// number fragment.
    Number,
    /// Single-quoted string flavor, quotes included.
    String,
    /// Double-quoted string flavor ("type" strings), quotes included.
    TypeString,
    /// `$name` template variable.
    Variable,
    /// Reserved standalone magic argument (`REPEAT`, `LINEAR`, `ASC`, `DSC`).
    Keyword,
    /// Arithmetic, comparison, or logical operator, including the word
    /// operators `AND` and `OR`.
    Operator,
    /// Built-in function name from the Metric Math standard library.
    Function,
    /// `;`, `,`, or `.`.
    Delimiter,
    /// `(` `)` `[` `]` `{` `}`, at any nesting level.
    Bracket,
    /// A bare `=` binding an expression to an id.
    Assignment,
    /// Input no rule matched. Lexing never fails; unmatched characters
    /// degrade to this class and the cursor moves on.
    Invalid,
}

impl TokenKind {
    /// Stable lowercase scope name for this class, as consumed by the host
    /// editor's styling layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Whitespace => "white",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::TypeString => "type",
            TokenKind::Variable => "variable",
            TokenKind::Keyword => "keyword",
            TokenKind::Operator => "operator",
            TokenKind::Function => "predefined",
            TokenKind::Delimiter => "delimiter",
            TokenKind::Bracket => "bracket",
            TokenKind::Assignment => "tag",
            TokenKind::Invalid => "invalid",
        }
    }
}
