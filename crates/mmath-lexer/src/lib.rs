// Metric Math lexer -- line-oriented tokenizer for the Metric Math
// expression language used by monitoring query editors.
//
// The tokenizer is a small explicit state machine: each lexical context
// owns an ordered rule list (see `rules`), and a state stack lets nested
// contexts -- a brace expression opened inside a single-quoted string, say
// -- return to exactly the context that opened them. Lexing is total:
// every line produces tokens whose spans partition it, and malformed input
// degrades to `Invalid` spans instead of failing.

mod rules;

pub mod pairs;
pub mod state;
pub mod tables;

pub use mmath_common::{Span, Token, TokenKind};
pub use state::{LexState, StateStack};

use rules::Action;

/// The result of tokenizing one line: its tokens (line-local byte offsets)
/// and the state stack at end of line, which seeds the next line so
/// multi-line constructs carry over.
#[derive(Debug, Clone, PartialEq)]
pub struct LineTokens {
    pub tokens: Vec<Token>,
    pub end_stack: StateStack,
}

/// Tokenize a single line given the lexical context it starts in.
///
/// A pure function of its inputs: lines can be re-lexed independently and
/// incrementally by threading each line's `end_stack` into the next call.
/// Pass a fresh [`StateStack`] for the first line or a standalone re-lex.
///
/// The cursor always advances: if no rule of the active state matches, one
/// character is emitted as [`TokenKind::Invalid`] and lexing continues.
/// Adjacent tokens of the same kind are merged, so per-character content
/// rules surface as single runs.
pub fn tokenize_line(line: &str, entry: &StateStack) -> LineTokens {
    let mut stack = entry.clone();
    let mut tokens: Vec<Token> = Vec::new();
    let mut pos = 0usize;

    while pos < line.len() {
        let rest = &line[pos..];
        let matched = rules::rules_for(stack.top())
            .iter()
            .find_map(|r| r.matcher.match_len(rest).map(|len| (len, r.kind, r.action)));

        let (len, kind) = match matched {
            Some((len, kind, action)) => {
                match action {
                    Action::Push(state) => stack.push(state),
                    Action::Pop => stack.pop(),
                    Action::None => {}
                }
                (len, kind)
            }
            // No rule matched: degrade one character and keep going.
            None => {
                let len = rest.chars().next().map_or(1, char::len_utf8);
                (len, TokenKind::Invalid)
            }
        };

        push_merged(&mut tokens, kind, pos as u32, (pos + len) as u32);
        pos += len;
    }

    LineTokens {
        tokens,
        end_stack: stack,
    }
}

/// Tokenize a whole buffer, threading the state stack across newlines.
///
/// Returns one [`LineTokens`] per line (offsets local to each line). An
/// unterminated string or nesting construct on one line resumes on the
/// next, exactly as the host editor would re-lex incrementally.
pub fn tokenize(source: &str) -> Vec<LineTokens> {
    let mut stack = StateStack::new();
    source
        .split('\n')
        .map(|line| {
            let lexed = tokenize_line(line, &stack);
            stack = lexed.end_stack.clone();
            lexed
        })
        .collect()
}

/// Append a token, extending the previous one when it has the same kind and
/// is adjacent. The engine only reports class boundaries, so content
/// matched character by character becomes one span.
fn push_merged(tokens: &mut Vec<Token>, kind: TokenKind, start: u32, end: u32) {
    if let Some(last) = tokens.last_mut() {
        if last.kind == kind && last.span.end == start {
            last.span.end = end;
            return;
        }
    }
    tokens.push(Token::new(kind, start, end));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(line: &str) -> Vec<TokenKind> {
        tokenize_line(line, &StateStack::new())
            .tokens
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn empty_line_yields_no_tokens() {
        let lexed = tokenize_line("", &StateStack::new());
        assert!(lexed.tokens.is_empty());
        assert_eq!(lexed.end_stack, StateStack::new());
    }

    #[test]
    fn simple_expression() {
        assert_eq!(
            kinds("e1 = SUM(METRICS())"),
            vec![
                TokenKind::Invalid, // bare lowercase id: no rule matches 'e'
                TokenKind::Number,  // ...but '1' is a number
                TokenKind::Whitespace,
                TokenKind::Assignment,
                TokenKind::Whitespace,
                TokenKind::Function,
                TokenKind::Bracket,
                TokenKind::Function,
                TokenKind::Bracket, // ()) merged into one bracket run
            ]
        );
    }

    #[test]
    fn spans_partition_the_line() {
        let line = "AVG(m1) + 2.5";
        let lexed = tokenize_line(line, &StateStack::new());
        let mut expected_start = 0;
        for token in &lexed.tokens {
            assert_eq!(token.span.start, expected_start, "no gaps or overlaps");
            assert!(token.span.end > token.span.start, "no empty tokens");
            expected_start = token.span.end;
        }
        assert_eq!(expected_start as usize, line.len(), "full coverage");
    }

    #[test]
    fn tokens_and_stack_serialize_for_the_host() {
        let lexed = tokenize_line("'a", &StateStack::new());
        let tokens = serde_json::to_value(&lexed.tokens).unwrap();
        assert_eq!(tokens[0]["kind"], "string");
        assert_eq!(tokens[0]["span"]["start"], 0);
        assert_eq!(tokens[0]["span"]["end"], 2);

        let stack = serde_json::to_value(lexed.end_stack.states()).unwrap();
        assert_eq!(stack[0], "root");
        assert_eq!(stack[1], "string_single");
    }

    #[test]
    fn buffer_tokenize_carries_stack_between_lines() {
        let lines = tokenize("'abc\ndef'");
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0].end_stack.states(),
            &[LexState::Root, LexState::StringSingle]
        );
        assert_eq!(lines[1].end_stack.states(), &[LexState::Root]);
    }
}
