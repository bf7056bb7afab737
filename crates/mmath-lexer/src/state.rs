use serde::Serialize;

/// A lexical context. The active state determines which rule set the
/// tokenizer tries at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LexState {
    /// Top-level expression context.
    Root,
    /// Inside a single-quoted string. Single-quoted strings can embed
    /// brace- or paren-delimited sub-expressions, so this state can nest.
    StringSingle,
    /// Inside a double-quoted string. Opaque: no nested escapes.
    StringDouble,
    /// Inside a `{ ... }` opened from a single-quoted string.
    NestedCurly,
    /// Inside a `( ... )` opened from a single-quoted string.
    NestedParens,
}

/// Ordered record of currently nested lexical contexts, innermost last.
///
/// The stack is never empty: [`LexState::Root`] is always its base and is
/// never popped. A stack is created fresh per lexing pass and carried across
/// line boundaries so multi-line constructs (an unterminated string, say)
/// resume in the context that opened them. It is plain data -- cheap to
/// clone and serializable for incremental re-lexing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateStack(Vec<LexState>);

impl StateStack {
    /// A fresh stack containing only the root state.
    pub fn new() -> Self {
        Self(vec![LexState::Root])
    }

    /// The innermost (active) state.
    pub fn top(&self) -> LexState {
        self.0.last().copied().unwrap_or(LexState::Root)
    }

    /// Enter a nested context.
    pub fn push(&mut self, state: LexState) {
        self.0.push(state);
    }

    /// Leave the innermost context. Popping the root is a no-op: an
    /// unbalanced closing delimiter in user-typed text is expected input,
    /// not an error.
    pub fn pop(&mut self) {
        if self.0.len() > 1 {
            self.0.pop();
        }
    }

    /// Current nesting depth, counting the root.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// The states from outermost to innermost.
    pub fn states(&self) -> &[LexState] {
        &self.0
    }
}

impl Default for StateStack {
    fn default() -> Self {
        Self::new()
    }
}
