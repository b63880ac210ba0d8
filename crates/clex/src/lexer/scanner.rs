//! Hand-written scanner for C-like source text
//!
//! One left-to-right pass over the buffer. Whitespace and comments are
//! skipped, everything else ends up in exactly one token. Malformed input
//! never fails: unterminated literals and comments run to the end of the
//! buffer and stray characters become `Unknown` tokens.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use super::tables::{is_alpha, is_alphanumeric, is_digit, is_keyword, is_number_part, is_operator, is_type, is_whitespace};
use super::token::{Token, TokenKind};
use crate::common::Span;

/// Where `+` and `-` may appear inside a numeric literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberSigns {
    /// Anywhere in the run, so `1+2` is a single `Integer` token
    #[default]
    Greedy,
    /// Only directly after an `e`/`E` that is already part of the literal
    ExponentOnly,
}

/// Scanner options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LexerConfig {
    pub number_signs: NumberSigns,
}

/// Lexer for C-like source code
pub struct Lexer<'a> {
    source: &'a str,
    config: LexerConfig,
    /// Byte offset of the next unread character
    pos: usize,
    line: u32,
    column: u32,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    pub fn with_config(source: &'a str, config: LexerConfig) -> Self {
        Self {
            source,
            config,
            pos: 0,
            line: 1,
            column: 1,
            finished: false,
        }
    }

    /// Get the source being lexed
    pub fn source(&self) -> &'a str {
        self.source
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Consume one character, keeping line and column in step
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn advance_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while self.peek().is_some_and(&mut pred) {
            self.advance();
        }
    }

    /// Get the next token; yields the end-of-input token once the buffer is exhausted
    pub fn next_token(&mut self) -> Token {
        loop {
            let Some(c) = self.peek() else {
                self.finished = true;
                return Token::eof(self.pos, self.line, self.column);
            };

            if is_whitespace(c) {
                self.advance();
                continue;
            }

            let start = (self.pos, self.line, self.column);
            let next = self.peek_next();

            let kind = match c {
                '#' => {
                    self.advance_while(|c| c != '\n');
                    TokenKind::Preprocessor
                }
                '/' if next == Some('/') => {
                    self.advance_while(|c| c != '\n');
                    continue;
                }
                '/' if next == Some('*') => {
                    self.skip_block_comment();
                    continue;
                }
                '"' => {
                    self.scan_quoted('"');
                    TokenKind::String
                }
                '\'' => {
                    self.scan_quoted('\'');
                    TokenKind::Char
                }
                c if is_digit(c) || (c == '.' && next.is_some_and(is_digit)) => self.scan_number(),
                c if is_alpha(c) => self.scan_word(),
                c => self.scan_symbol(c, next),
            };

            return self.make_token(kind, start);
        }
    }

    /// Skip `/* ... */`; an unterminated comment swallows the rest of the input
    fn skip_block_comment(&mut self) {
        self.advance();
        self.advance();
        while let Some(c) = self.peek() {
            if c == '*' && self.peek_next() == Some('/') {
                self.advance();
                self.advance();
                return;
            }
            self.advance();
        }
    }

    /// Scan a string or char literal delimited by `quote`, escapes included verbatim
    fn scan_quoted(&mut self, quote: char) {
        self.advance();
        while let Some(c) = self.peek() {
            if c == quote {
                self.advance();
                return;
            }
            if c == '\\' && self.peek_next().is_some() {
                self.advance();
            }
            self.advance();
        }
    }

    /// Scan an integer or float literal
    ///
    /// Only the first `.` belongs to the literal; a second one starts the
    /// next token.
    fn scan_number(&mut self) -> TokenKind {
        let mut has_dot = false;
        let mut prev = None;

        while let Some(c) = self.peek() {
            if !is_number_part(c) {
                break;
            }
            match c {
                '.' if has_dot => break,
                '.' => has_dot = true,
                '+' | '-'
                    if self.config.number_signs == NumberSigns::ExponentOnly
                        && !matches!(prev, Some('e' | 'E')) =>
                {
                    break;
                }
                _ => {}
            }
            self.advance();
            prev = Some(c);
        }

        if has_dot { TokenKind::Float } else { TokenKind::Integer }
    }

    /// Scan an identifier, keyword or type name
    fn scan_word(&mut self) -> TokenKind {
        let start = self.pos;
        self.advance_while(is_alphanumeric);
        let word = &self.source[start..self.pos];

        if is_keyword(word) {
            TokenKind::Keyword
        } else if is_type(word) {
            TokenKind::Type
        } else {
            TokenKind::Identifier
        }
    }

    /// Operators (longest match first), punctuation, or a single unknown character
    fn scan_symbol(&mut self, c: char, next: Option<char>) -> TokenKind {
        if let Some(next) = next {
            let pair = &self.source[self.pos..self.pos + c.len_utf8() + next.len_utf8()];
            if is_operator(pair) {
                self.advance();
                self.advance();
                return TokenKind::Operator;
            }
        }

        let single = &self.source[self.pos..self.pos + c.len_utf8()];
        let kind = if is_operator(single) {
            TokenKind::Operator
        } else {
            TokenKind::punctuation(c).unwrap_or(TokenKind::Unknown)
        };
        self.advance();
        kind
    }

    fn make_token(&self, kind: TokenKind, (start, line, column): (usize, u32, u32)) -> Token {
        let lexeme = &self.source[start..self.pos];
        trace!(%kind, lexeme, line, column, "token");
        Token::new(kind, lexeme, Span::new(start, self.pos), line, column)
    }

    /// Tokenize the entire source and return all tokens, end-of-input last
    pub fn tokenize_all(mut self) -> Vec<Token> {
        let tokens: Vec<Token> = self.by_ref().collect();
        debug!(
            bytes = self.source.len(),
            tokens = tokens.len(),
            lines = self.line,
            "tokenized source"
        );
        tokens
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            None
        } else {
            Some(self.next_token())
        }
    }
}

impl FusedIterator for Lexer<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source).map(|t| t.kind).collect()
    }

    fn lexemes(source: &str) -> Vec<String> {
        Lexer::new(source).map(|t| t.lexeme).collect()
    }

    fn positions(source: &str) -> Vec<(u32, u32)> {
        Lexer::new(source).map(|t| (t.line, t.column)).collect()
    }

    #[test]
    fn test_empty_input() {
        let tokens = Lexer::new("").tokenize_all();
        assert_eq!(tokens, vec![Token::eof(0, 1, 1)]);
    }

    #[test]
    fn test_whitespace_only() {
        let tokens = Lexer::new(" \t\r\n  ").tokenize_all();
        assert_eq!(tokens, vec![Token::eof(6, 2, 3)]);
    }

    #[test]
    fn test_keywords_types_identifiers() {
        let source = "if else while for return break continue switch case default do";
        assert!(kinds(source)[..11].iter().all(|k| *k == TokenKind::Keyword));

        let source = "int float double char void bool short long signed unsigned";
        assert!(kinds(source)[..10].iter().all(|k| *k == TokenKind::Type));

        assert_eq!(
            kinds("return returnValue _tmp x1 Int"),
            vec![
                TokenKind::Keyword,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_longest_match_operators() {
        assert_eq!(lexemes("=="), vec!["==", "EOF"]);
        assert_eq!(lexemes("a+++b"), vec!["a", "++", "+", "b", "EOF"]);
        assert_eq!(lexemes("x<<=1"), vec!["x", "<<", "=", "1", "EOF"]);
        assert_eq!(lexemes("p->q"), vec!["p", "-", ">", "q", "EOF"]);
        assert_eq!(lexemes("a/=b"), vec!["a", "/=", "b", "EOF"]);
        assert_eq!(
            kinds("!a&&b||~c"),
            vec![
                TokenKind::Operator,
                TokenKind::Identifier,
                TokenKind::Operator,
                TokenKind::Identifier,
                TokenKind::Operator,
                TokenKind::Operator,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            kinds("(){}[];,."),
            vec![
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::Semicolon,
                TokenKind::Comma,
                TokenKind::Dot,
                TokenKind::Eof,
            ]
        );
        assert_eq!(lexemes("s.field"), vec!["s", ".", "field", "EOF"]);
    }

    #[test]
    fn test_numbers() {
        let tokens = Lexer::new("42 3.14 .5 7.").tokenize_all();
        let got: Vec<_> = tokens.iter().map(|t| (t.kind, t.lexeme.as_str())).collect();
        assert_eq!(
            got,
            vec![
                (TokenKind::Integer, "42"),
                (TokenKind::Float, "3.14"),
                (TokenKind::Float, ".5"),
                (TokenKind::Float, "7."),
                (TokenKind::Eof, "EOF"),
            ]
        );
    }

    #[test]
    fn test_second_dot_starts_next_token() {
        let tokens = Lexer::new("1.2.3").tokenize_all();
        let got: Vec<_> = tokens.iter().map(|t| (t.kind, t.lexeme.as_str(), t.column)).collect();
        assert_eq!(
            got,
            vec![
                (TokenKind::Float, "1.2", 1),
                (TokenKind::Float, ".3", 4),
                (TokenKind::Eof, "EOF", 6),
            ]
        );
        assert_eq!(lexemes("1..x"), vec!["1.", ".", "x", "EOF"]);
    }

    #[test]
    fn test_exponents() {
        assert_eq!(lexemes("1.5e-3"), vec!["1.5e-3", "EOF"]);
        assert_eq!(kinds("1e10"), vec![TokenKind::Integer, TokenKind::Eof]);
        assert_eq!(kinds("2.0E+8"), vec![TokenKind::Float, TokenKind::Eof]);
    }

    #[test]
    fn test_greedy_signs_absorb_arithmetic() {
        assert_eq!(lexemes("1+2"), vec!["1+2", "EOF"]);
        assert_eq!(lexemes("n - 1"), vec!["n", "-", "1", "EOF"]);
        assert_eq!(lexemes("10-x"), vec!["10-", "x", "EOF"]);
    }

    #[test]
    fn test_exponent_only_signs() {
        let config = LexerConfig {
            number_signs: NumberSigns::ExponentOnly,
        };
        let scan = |source: &str| -> Vec<String> {
            Lexer::with_config(source, config).map(|t| t.lexeme).collect()
        };

        assert_eq!(scan("1+2"), vec!["1", "+", "2", "EOF"]);
        assert_eq!(scan("10-x"), vec!["10", "-", "x", "EOF"]);
        assert_eq!(scan("1.5e-3+x"), vec!["1.5e-3", "+", "x", "EOF"]);
        assert_eq!(scan("6E+2"), vec!["6E+2", "EOF"]);
        assert_eq!(scan("1e+-2"), vec!["1e+", "-", "2", "EOF"]);
    }

    #[test]
    fn test_strings_and_chars() {
        let source = r#""hello world" 'a' '\n' '\''"#;
        let tokens = Lexer::new(source).tokenize_all();
        let got: Vec<_> = tokens.iter().map(|t| (t.kind, t.lexeme.as_str())).collect();
        assert_eq!(
            got,
            vec![
                (TokenKind::String, "\"hello world\""),
                (TokenKind::Char, "'a'"),
                (TokenKind::Char, r"'\n'"),
                (TokenKind::Char, r"'\''"),
                (TokenKind::Eof, "EOF"),
            ]
        );
    }

    #[test]
    fn test_string_with_escaped_quote() {
        let source = "\"a\\\"b\"";
        let tokens = Lexer::new(source).tokenize_all();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, source);
        assert_eq!(tokens[0].span, Span::new(0, 6));
    }

    #[test]
    fn test_unterminated_literals_run_to_end() {
        assert_eq!(lexemes("x = \"abc"), vec!["x", "=", "\"abc", "EOF"]);
        assert_eq!(kinds("'a"), vec![TokenKind::Char, TokenKind::Eof]);
        // trailing backslash is consumed on its own
        assert_eq!(lexemes("\"ab\\"), vec!["\"ab\\", "EOF"]);
    }

    #[test]
    fn test_multiline_string_tracks_lines() {
        let source = "\"a\nb\" c";
        let tokens = Lexer::new(source).tokenize_all();
        assert_eq!(tokens[0].lexeme, "\"a\nb\"");
        assert_eq!((tokens[1].lexeme.as_str(), tokens[1].line, tokens[1].column), ("c", 2, 4));
    }

    #[test]
    fn test_comments() {
        let source = "int // line comment\nx /* block */ y";
        let tokens = Lexer::new(source).tokenize_all();
        let got: Vec<_> = tokens
            .iter()
            .map(|t| (t.lexeme.as_str(), t.line, t.column))
            .collect();
        assert_eq!(got, vec![("int", 1, 1), ("x", 2, 1), ("y", 2, 15), ("EOF", 2, 16)]);
    }

    #[test]
    fn test_block_comment_spanning_lines() {
        assert_eq!(positions("/* a\n b */x"), vec![(2, 6), (2, 7)]);
        assert_eq!(lexemes("a/**/b"), vec!["a", "b", "EOF"]);
        assert_eq!(lexemes("/*/ still open */z"), vec!["z", "EOF"]);
    }

    #[test]
    fn test_unterminated_block_comment() {
        let tokens = Lexer::new("/* never closes").tokenize_all();
        assert_eq!(tokens, vec![Token::eof(15, 1, 16)]);
    }

    #[test]
    fn test_preprocessor_lines() {
        let source = "#include <stdio.h>\n#define MAX 10\nint";
        let tokens = Lexer::new(source).tokenize_all();
        let got: Vec<_> = tokens
            .iter()
            .map(|t| (t.kind, t.lexeme.as_str(), t.line))
            .collect();
        assert_eq!(
            got,
            vec![
                (TokenKind::Preprocessor, "#include <stdio.h>", 1),
                (TokenKind::Preprocessor, "#define MAX 10", 2),
                (TokenKind::Type, "int", 3),
                (TokenKind::Eof, "EOF", 3),
            ]
        );
        assert_eq!(lexemes("  #pragma once"), vec!["#pragma once", "EOF"]);
    }

    #[test]
    fn test_unknown_characters() {
        let tokens = Lexer::new("a @ $ \\ ?").tokenize_all();
        let unknown: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Unknown)
            .map(|t| t.lexeme.as_str())
            .collect();
        assert_eq!(unknown, vec!["@", "$", "\\", "?"]);
    }

    #[test]
    fn test_non_ascii_is_one_unknown_per_char() {
        let tokens = Lexer::new("é=1").tokenize_all();
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
        assert_eq!(tokens[0].span, Span::new(0, 2));
        assert_eq!((tokens[1].lexeme.as_str(), tokens[1].column), ("=", 2));
        assert_eq!(tokens[3], Token::eof(4, 1, 4));
    }

    #[test]
    fn test_line_and_column_tracking() {
        assert_eq!(lexemes("a\nb"), vec!["a", "b", "EOF"]);
        assert_eq!(positions("a\nb"), vec![(1, 1), (2, 1), (2, 2)]);
        assert_eq!(positions("\tx  y\r\n z"), vec![(1, 2), (1, 5), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_simple_function() {
        let source = "int main() { return 0; }";
        let tokens = Lexer::new(source).tokenize_all();

        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::Type,
                TokenKind::Identifier,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::Keyword,
                TokenKind::Integer,
                TokenKind::Semicolon,
                TokenKind::RBrace,
                TokenKind::Eof,
            ]
        );
        assert_eq!(tokens[1].span, Span::new(4, 8));
        assert_eq!(tokens[9], Token::eof(source.len(), 1, 25));
    }

    #[test]
    fn test_iterator_is_fused() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Identifier));
        assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Eof));
        assert_eq!(lexer.next(), None);
        assert_eq!(lexer.next(), None);
    }
}
