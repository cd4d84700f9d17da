use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A numeric literal, such as `2` or `3.14`.
    Value,

    /// A variable or function name, such as `x` or `sin`.
    Identifier,

    /// One of the operator characters declared by the registry.
    Operator,

    /// `(`
    OpenBracket,

    /// `)`
    CloseBracket,

    /// `,`
    Comma,
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The region of the original input that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The text of the token.
    pub text: String,
}

impl Token {
    /// If the token is an operator, returns its character.
    pub fn as_operator(&self) -> Option<char> {
        match self.kind {
            TokenKind::Operator => self.text.chars().next(),
            _ => None,
        }
    }
}
