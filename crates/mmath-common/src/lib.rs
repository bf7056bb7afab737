// Shared types for the Metric Math tooling: byte-offset spans and
// classified tokens. Kept free of lexer logic so hosts embedding the
// tokenizer can depend on the vocabulary without the engine.

pub mod span;
pub mod token;

pub use span::{LineIndex, Span};
pub use token::{Token, TokenKind};
