use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::MK_TOKEN;

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP, SYMBOL_LOOKUP};

lazy_static! {
    static ref SYMBOL_PATTERN: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+").unwrap();
    static ref STRING_PATTERN: Regex = Regex::new("^\"[^\"]*\"").unwrap();
    static ref WHITESPACE_PATTERN: Regex = Regex::new("^[ \t\n\r\x0B\x0C]+").unwrap();
}

/// Produces tokens from a source string one at a time.
///
/// The tokenizer never fails. Characters it does not recognise become
/// `Illegal` tokens and are left for the parser to report.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    source: String,
    pos: usize,
}

impl Tokenizer {
    pub fn new(source: String) -> Tokenizer {
        Tokenizer { source, pos: 0 }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn peek(&self) -> Option<char> {
        self.remainder().chars().nth(1)
    }

    /// Returns the next token, or `EOF` forever once the input is exhausted.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = if let Some(matched) = SYMBOL_PATTERN.find(self.remainder()) {
            symbol_handler(self, matched.end())
        } else if let Some(matched) = NUMBER_PATTERN.find(self.remainder()) {
            number_handler(self, matched.end())
        } else if self.at() == Some('"') {
            string_handler(self)
        } else {
            match self.at() {
                None => MK_TOKEN!(TokenKind::EOF, ""),
                Some('=') => self.two_char_token(TokenKind::Assignment, TokenKind::Equals),
                Some('!') => self.two_char_token(TokenKind::Not, TokenKind::NotEquals),
                Some(ch) => {
                    self.advance_n(ch.len_utf8());
                    match SYMBOL_LOOKUP.get(&ch) {
                        Some(kind) => MK_TOKEN!(*kind, ch.to_string()),
                        None => MK_TOKEN!(TokenKind::Illegal, ch.to_string()),
                    }
                }
            }
        };

        trace!("{}", token.debug());
        token
    }

    fn skip_whitespace(&mut self) {
        if let Some(matched) = WHITESPACE_PATTERN.find(self.remainder()) {
            self.advance_n(matched.end());
        }
    }

    /// Handles `=`/`==` and `!`/`!=`, the only symbols that need a second character.
    fn two_char_token(&mut self, single: TokenKind, double: TokenKind) -> Token {
        if self.peek() == Some('=') {
            let value = self.remainder()[..2].to_string();
            self.advance_n(2);
            MK_TOKEN!(double, value)
        } else {
            let value = self.remainder()[..1].to_string();
            self.advance_n(1);
            MK_TOKEN!(single, value)
        }
    }
}

fn symbol_handler(tokenizer: &mut Tokenizer, len: usize) -> Token {
    let value = tokenizer.remainder()[..len].to_string();
    tokenizer.advance_n(len);

    match RESERVED_LOOKUP.get(value.as_str()) {
        Some(kind) => MK_TOKEN!(*kind, value),
        None => MK_TOKEN!(TokenKind::Identifier, value),
    }
}

fn number_handler(tokenizer: &mut Tokenizer, len: usize) -> Token {
    let value = tokenizer.remainder()[..len].to_string();
    tokenizer.advance_n(len);

    MK_TOKEN!(TokenKind::Number, value)
}

fn string_handler(tokenizer: &mut Tokenizer) -> Token {
    let Some(matched) = STRING_PATTERN.find(tokenizer.remainder()) else {
        // Unterminated: give up on the quote alone and carry on after it.
        tokenizer.advance_n(1);
        return MK_TOKEN!(TokenKind::Illegal, "\"");
    };

    let len = matched.end();
    let value = tokenizer.remainder()[1..len - 1].to_string();
    tokenizer.advance_n(len);

    MK_TOKEN!(TokenKind::String, value)
}

/// Drains a fresh tokenizer over `source`, including the trailing `EOF` token.
pub fn tokenize(source: String) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(source);
    let mut tokens = vec![];

    loop {
        let token = tokenizer.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            break;
        }
    }

    tokens
}
