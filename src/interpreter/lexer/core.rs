use std::{
    io::{self, Read},
    mem,
};

use crate::interpreter::lexer::{
    chars::classify,
    rules::{transition, State},
    token::{Token, TokenKind},
};

/// The table-driven lexer.
///
/// The tokenizer holds the automaton's current state, the token currently
/// being accumulated, and the stream of completed tokens. Bytes are fed in
/// one at a time with [`digest`](Self::digest); [`finish`](Self::finish)
/// flushes the last open token and yields the stream.
///
/// A completed stream never contains a `Skip` token: filler states map to
/// `Skip`, and a `Skip` token is reused in place rather than emitted.
pub struct Tokenizer {
    state:  State,
    token:  Token,
    output: Vec<Token>,
}

#[allow(clippy::new_without_default)]
impl Tokenizer {
    /// Creates a tokenizer at `Init` with an empty open token.
    #[must_use]
    pub const fn new() -> Self {
        Self { state:  State::Init,
               token:  Token::new(),
               output: Vec::new(), }
    }

    /// Advances the automaton by one byte.
    ///
    /// The rule for `(current state, byte class)` is looked up; if it asks
    /// for a split and the open token is real, that token is closed and a
    /// fresh one opened. Only then is the new state installed and the open
    /// token retagged with the new state's kind. This ordering matters: a
    /// byte that ends one token and begins another is excluded from the
    /// token it closes and included in the one it opens. Bytes digested
    /// while the open token is `Skip` are not accumulated.
    pub fn digest(&mut self, byte: u8) {
        let rule = transition(self.state, classify(byte));

        if rule.split && self.token.kind != TokenKind::Skip {
            self.output.push(mem::replace(&mut self.token, Token::new()));
        }

        self.state = rule.next;
        self.token.kind = self.state.token_kind();

        if self.token.kind != TokenKind::Skip {
            self.token.text.push(char::from(byte));
        }
    }

    /// Ends the input, closing a still-open token, and returns the stream.
    #[must_use]
    pub fn finish(mut self) -> Vec<Token> {
        if self.token.kind != TokenKind::Skip {
            self.output.push(self.token);
        }

        self.output
    }
}

/// Tokenizes a whole byte stream.
///
/// ## Errors
/// Returns any I/O error raised while reading the input.
///
/// # Example
/// ```
/// use rpcalc::interpreter::lexer::{core::tokenize, token::TokenKind};
///
/// let tokens = tokenize("3 4 +".as_bytes()).unwrap();
///
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            vec![TokenKind::Number, TokenKind::Number, TokenKind::Add]);
/// assert_eq!(tokens[0].text, "3");
/// ```
pub fn tokenize<R: Read>(input: R) -> io::Result<Vec<Token>> {
    let mut tokenizer = Tokenizer::new();

    for byte in input.bytes() {
        tokenizer.digest(byte?);
    }

    Ok(tokenizer.finish())
}
