//! Classification tables and character predicates

/// Control-flow keywords
pub const KEYWORDS: [&str; 11] = [
    "if", "else", "while", "for", "return", "break", "continue", "switch", "case", "default", "do",
];

/// Built-in type names
pub const TYPES: [&str; 10] = [
    "int", "float", "double", "char", "void", "bool", "short", "long", "signed", "unsigned",
];

/// Every operator lexeme, one and two characters long
pub const OPERATORS: [&str; 28] = [
    "+", "-", "*", "/", "%", "++", "--", "==", "!=", "<", ">", "<=", ">=", "&&", "||", "!", "&",
    "|", "^", "~", "<<", ">>", "=", "+=", "-=", "*=", "/=", "%=",
];

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

pub fn is_type(word: &str) -> bool {
    TYPES.contains(&word)
}

pub fn is_operator(lexeme: &str) -> bool {
    OPERATORS.contains(&lexeme)
}

pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Identifier start: ASCII letter or underscore
pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn is_alphanumeric(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}

/// Characters that may continue a numeric literal
pub fn is_number_part(c: char) -> bool {
    is_digit(c) || matches!(c, '.' | 'e' | 'E' | '+' | '-')
}
