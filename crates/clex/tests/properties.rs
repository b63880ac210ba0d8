//! Property tests: the scanner is total and accounts for every character

use c_lexer::{LexerConfig, NumberSigns, Token, TokenKind, tokenize, tokenize_with};
use proptest::prelude::*;

/// Characters that exercise every branch of the scan loop
const C_LIKE: &str = r#"[a-zA-Z0-9_ \t\r\n+\-*/%=<>!&|^~(){}\[\];,.#"'\\@$eE]{0,80}"#;

/// 1-based (line, column) of byte `offset`, counting characters
fn position_of(source: &str, offset: usize) -> (u32, u32) {
    let before = &source[..offset];
    let line = before.matches('\n').count() as u32 + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() as u32 + 1;
    (line, column)
}

fn check_invariants(source: &str, tokens: &[Token]) -> Result<(), TestCaseError> {
    // exactly one end-of-input token, last, at the end of the buffer
    let (last, body) = tokens.split_last().expect("token list is never empty");
    prop_assert_eq!(last.kind, TokenKind::Eof);
    prop_assert!(body.iter().all(|t| t.kind != TokenKind::Eof));
    prop_assert_eq!(last.span.start, source.len());
    prop_assert_eq!((last.line, last.column), position_of(source, source.len()));

    let mut cursor = 0;
    let mut prev = (1, 1);
    for token in body {
        // spans are ordered, disjoint and carry the exact source text
        prop_assert!(token.span.start >= cursor);
        prop_assert!(!token.span.is_empty());
        prop_assert_eq!(&source[token.span.range()], token.lexeme.as_str());

        // what lies between tokens is only whitespace and comments
        let gap = &source[cursor..token.span.start];
        prop_assert_eq!(tokenize(gap).len(), 1, "gap {:?} produced tokens", gap);

        // positions agree with the span and never move backwards
        let here = (token.line, token.column);
        prop_assert_eq!(here, position_of(source, token.span.start));
        prop_assert!(here >= prev);

        prev = here;
        cursor = token.span.end;
    }

    let tail = &source[cursor..];
    prop_assert_eq!(tokenize(tail).len(), 1, "tail {:?} produced tokens", tail);
    Ok(())
}

proptest! {
    #[test]
    fn total_over_arbitrary_text(source in "\\PC*") {
        let tokens = tokenize(&source);
        check_invariants(&source, &tokens)?;
    }

    #[test]
    fn total_over_c_like_text(source in C_LIKE) {
        let tokens = tokenize(&source);
        check_invariants(&source, &tokens)?;
    }

    #[test]
    fn exponent_only_signs_keep_invariants(source in C_LIKE) {
        let config = LexerConfig { number_signs: NumberSigns::ExponentOnly };
        let tokens = tokenize_with(&source, &config);
        check_invariants(&source, &tokens)?;
    }

    #[test]
    fn tokenize_is_deterministic(source in C_LIKE) {
        prop_assert_eq!(tokenize(&source), tokenize(&source));
    }

    #[test]
    fn identifiers_round_trip(word in "[a-zA-Z_][a-zA-Z0-9_]{0,12}") {
        let tokens = tokenize(&word);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(&tokens[0].lexeme, &word);
        prop_assert!(matches!(
            tokens[0].kind,
            TokenKind::Keyword | TokenKind::Type | TokenKind::Identifier
        ));
    }

    #[test]
    fn decimal_numbers_classify_by_dot(int in "[0-9]{1,8}", frac in proptest::option::of("[0-9]{1,6}")) {
        let source = match &frac {
            Some(frac) => format!("{int}.{frac}"),
            None => int.clone(),
        };
        let tokens = tokenize(&source);
        let expected = if frac.is_some() { TokenKind::Float } else { TokenKind::Integer };
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, expected);
        prop_assert_eq!(&tokens[0].lexeme, &source);
    }
}

#[test]
fn empty_input_is_only_eof() {
    let tokens = tokenize("");
    assert_eq!(tokens.len(), 1);
    assert_eq!((tokens[0].kind, tokens[0].line, tokens[0].column), (TokenKind::Eof, 1, 1));
}
