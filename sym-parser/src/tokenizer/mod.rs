//! Turns the input text into a sequence of [`Token`]s.
//!
//! Tokenizing happens in three steps:
//!
//! 1. Spaces are removed. They carry no meaning at all, so `1 2` is the number `12`.
//! 2. The [`Lexeme`] lexer splits the remaining text into numbers, names, brackets, commas and
//!    single-character symbols. Symbols that the caller declares as operators become
//!    [`TokenKind::Operator`] tokens; any other symbol is an error.
//! 3. The tokens are validated in one left-to-right pass, looking only at the previous token
//!    and the current bracket depth. This catches every malformed sequence (two operators in a
//!    row, implicit multiplication, misplaced commas, unbalanced brackets, ...) before the
//!    compiler sees the tokens.
//!
//! Token spans always refer to the original input, including its spaces.

pub mod lexeme;
pub mod token;

pub use lexeme::Lexeme;
pub use token::{Token, TokenKind};

use crate::error::{kind, Error};
use logos::Logos;
use std::ops::Range;

/// The operators of arithmetic expressions.
pub const ARITHMETIC_OPERATORS: [char; 5] = ['+', '-', '*', '/', '^'];

/// The input with its spaces removed, remembering where each remaining byte came from.
struct Stripped {
    /// The text without spaces.
    text: String,

    /// The byte offset in the original input of each byte of `text`.
    offsets: Vec<usize>,

    /// The length of the original input.
    original_len: usize,
}

impl Stripped {
    fn new(input: &str) -> Self {
        let mut text = String::with_capacity(input.len());
        let mut offsets = Vec::with_capacity(input.len());
        for (index, c) in input.char_indices() {
            if c == ' ' {
                continue;
            }
            text.push(c);
            offsets.extend(index..index + c.len_utf8());
        }

        Self { text, offsets, original_len: input.len() }
    }

    /// Maps a span of the stripped text back to the original input.
    fn original(&self, span: Range<usize>) -> Range<usize> {
        let start = self.offsets.get(span.start).copied().unwrap_or(self.original_len);
        if span.end <= span.start {
            return start..start;
        }
        let end = self.offsets.get(span.end - 1).map_or(self.original_len, |last| last + 1);
        start..end
    }
}

/// Splits the stripped text into tokens, without checking how they are arranged.
fn lex(stripped: &Stripped, operators: &[char]) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexeme::lexer(&stripped.text);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = stripped.original(lexer.span());
        let text = lexer.slice();

        let kind = match result {
            Ok(Lexeme::Number) => {
                if text.matches('.').count() > 1 || text.ends_with('.') {
                    return Err(Error::new(vec![span], kind::MalformedNumber {
                        text: text.to_string(),
                    }));
                }
                TokenKind::Value
            },
            Ok(Lexeme::Name) => TokenKind::Identifier,
            Ok(Lexeme::OpenParen) => TokenKind::OpenBracket,
            Ok(Lexeme::CloseParen) => TokenKind::CloseBracket,
            Ok(Lexeme::Comma) => TokenKind::Comma,
            Ok(Lexeme::Symbol) | Err(_) => {
                let character = text.chars().next().unwrap_or_default();
                if operators.contains(&character) {
                    TokenKind::Operator
                } else if character == '.' {
                    return Err(Error::new(vec![span], kind::MalformedNumber {
                        text: text.to_string(),
                    }));
                } else {
                    return Err(Error::new(vec![span], kind::InvalidCharacter {
                        character,
                        operators: operators.to_vec(),
                    }));
                }
            },
        };

        tokens.push(Token { span, kind, text: text.to_string() });
    }

    Ok(tokens)
}

/// Checks that every token is allowed to follow the one before it, and that brackets are
/// balanced.
fn validate(tokens: &[Token], input_len: usize) -> Result<(), Error> {
    let mut open_brackets: Vec<&Token> = Vec::new();
    let mut prev: Option<&Token> = None;

    for token in tokens {
        let prev_kind = prev.map(|prev| prev.kind);
        let pair = |prev: Option<&Token>| match prev {
            Some(prev) => vec![prev.span.clone(), token.span.clone()],
            None => vec![token.span.clone()],
        };

        match token.kind {
            TokenKind::Value => {
                if prev_kind == Some(TokenKind::CloseBracket) {
                    return Err(Error::new(pair(prev), kind::MissingOperator));
                }
            },
            TokenKind::Identifier => match prev_kind {
                Some(TokenKind::Value) => {
                    return Err(Error::new(pair(prev), kind::NumberFollowedByLetter));
                },
                Some(TokenKind::CloseBracket) => {
                    return Err(Error::new(pair(prev), kind::MissingOperator));
                },
                _ => (),
            },
            TokenKind::Operator => {
                let op = token.as_operator().unwrap_or_default();
                match prev_kind {
                    None => {
                        return Err(Error::new(vec![token.span.clone()], kind::LeadingOperator { op }));
                    },
                    Some(TokenKind::OpenBracket | TokenKind::Operator | TokenKind::Comma) => {
                        let spans = vec![token.span.clone(), prev.map_or(0..0, |prev| prev.span.clone())];
                        return Err(Error::new(spans, kind::MissingLeftOperand { op }));
                    },
                    _ => (),
                }
            },
            TokenKind::OpenBracket => {
                if matches!(prev_kind, Some(TokenKind::Value | TokenKind::CloseBracket)) {
                    return Err(Error::new(pair(prev), kind::ImplicitMultiplication));
                }
                open_brackets.push(token);
            },
            TokenKind::CloseBracket => {
                let Some(prev) = prev else {
                    return Err(Error::new(vec![token.span.clone()], kind::LeadingCloseBracket));
                };
                if open_brackets.is_empty() {
                    return Err(Error::new(vec![token.span.clone()], kind::UnbalancedCloseBracket));
                }
                match prev.kind {
                    TokenKind::Operator => {
                        let op = prev.as_operator().unwrap_or_default();
                        return Err(Error::new(vec![prev.span.clone()], kind::MissingRightOperand { op }));
                    },
                    TokenKind::OpenBracket => {
                        return Err(Error::new(
                            vec![prev.span.start..token.span.end],
                            kind::EmptyBrackets,
                        ));
                    },
                    TokenKind::Comma => {
                        return Err(Error::new(vec![prev.span.clone()], kind::MisplacedComma));
                    },
                    _ => (),
                }
                open_brackets.pop();
            },
            TokenKind::Comma => {
                if open_brackets.is_empty() {
                    return Err(Error::new(vec![token.span.clone()], kind::MisplacedComma));
                }
                match prev {
                    Some(prev) if prev.kind == TokenKind::Operator => {
                        let op = prev.as_operator().unwrap_or_default();
                        return Err(Error::new(vec![prev.span.clone()], kind::MissingRightOperand { op }));
                    },
                    Some(prev) if matches!(prev.kind, TokenKind::OpenBracket | TokenKind::Comma) => {
                        return Err(Error::new(vec![token.span.clone()], kind::MisplacedComma));
                    },
                    _ => (),
                }
            },
        }

        prev = Some(token);
    }

    match prev {
        None => return Err(Error::new(vec![0..input_len], kind::EmptyExpression)),
        Some(prev) if prev.kind == TokenKind::Operator => {
            let op = prev.as_operator().unwrap_or_default();
            return Err(Error::new(vec![prev.span.clone()], kind::MissingRightOperand { op }));
        },
        Some(prev) if prev.kind == TokenKind::Comma => {
            return Err(Error::new(vec![prev.span.clone()], kind::MisplacedComma));
        },
        _ => (),
    }

    if let Some(bracket) = open_brackets.last() {
        return Err(Error::new(vec![bracket.span.clone()], kind::UnclosedBracket));
    }

    Ok(())
}

/// Tokenizes an arithmetic expression, accepting the operators in [`ARITHMETIC_OPERATORS`].
pub fn tokenize(input: &str) -> Result<Vec<Token>, Error> {
    tokenize_with(input, &ARITHMETIC_OPERATORS)
}

/// Tokenizes an expression, accepting the given operator characters.
pub fn tokenize_with(input: &str, operators: &[char]) -> Result<Vec<Token>, Error> {
    let stripped = Stripped::new(input);
    let tokens = lex(&stripped, operators)?;
    validate(&tokens, input.len())?;
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Compares the tokens produced by the tokenizer to the expected kinds and texts.
    fn compare_tokens<const N: usize>(input: &str, expected: [(TokenKind, &str); N]) {
        let tokens = tokenize(input).unwrap();
        let tokens = tokens.iter()
            .map(|token| (token.kind, token.text.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(tokens, expected.to_vec());
    }

    /// Asserts that tokenizing fails with the given error kind.
    fn assert_fails<K: sym_error::ErrorKind + 'static>(input: &str) {
        let err = tokenize(input).unwrap_err();
        assert!(err.is::<K>(), "`{}` failed with the wrong error: {:?}", input, err);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "2 + 3.5 * x1",
            [
                (TokenKind::Value, "2"),
                (TokenKind::Operator, "+"),
                (TokenKind::Value, "3.5"),
                (TokenKind::Operator, "*"),
                (TokenKind::Identifier, "x1"),
            ],
        );
    }

    #[test]
    fn function_call() {
        compare_tokens(
            "binom(n, 2)",
            [
                (TokenKind::Identifier, "binom"),
                (TokenKind::OpenBracket, "("),
                (TokenKind::Identifier, "n"),
                (TokenKind::Comma, ","),
                (TokenKind::Value, "2"),
                (TokenKind::CloseBracket, ")"),
            ],
        );
    }

    #[test]
    fn spaces_do_not_separate() {
        compare_tokens("1 2 + s in(x)", [
            (TokenKind::Value, "12"),
            (TokenKind::Operator, "+"),
            (TokenKind::Identifier, "sin"),
            (TokenKind::OpenBracket, "("),
            (TokenKind::Identifier, "x"),
            (TokenKind::CloseBracket, ")"),
        ]);
    }

    #[test]
    fn spans_point_into_original_input() {
        let tokens = tokenize("  12 +  x y").unwrap();
        let spans = tokens.iter().map(|token| token.span.clone()).collect::<Vec<_>>();
        assert_eq!(spans, vec![2..4, 5..6, 8..11]);
    }

    #[test]
    fn custom_operators() {
        let tokens = tokenize_with("a & b | c", &['|', '&']).unwrap();
        assert_eq!(tokens[1].kind, TokenKind::Operator);
        assert!(tokenize_with("a + b", &['|', '&']).unwrap_err().is::<kind::InvalidCharacter>());
    }

    #[test]
    fn invalid_characters() {
        assert_fails::<kind::InvalidCharacter>("2 % 3");
        assert_fails::<kind::InvalidCharacter>("x\ty");
        assert_fails::<kind::InvalidCharacter>("é");
    }

    #[test]
    fn malformed_numbers() {
        assert_fails::<kind::MalformedNumber>("1.2.3");
        assert_fails::<kind::MalformedNumber>("4. + 1");
        assert_fails::<kind::MalformedNumber>(".5");
    }

    #[test]
    fn number_followed_by_letter() {
        assert_fails::<kind::NumberFollowedByLetter>("2x");
    }

    #[test]
    fn leading_tokens() {
        assert_fails::<kind::LeadingOperator>("-2");
        assert_fails::<kind::LeadingCloseBracket>(")2+2");
        assert_fails::<kind::MisplacedComma>(",2");
    }

    #[test]
    fn operators_need_operands() {
        assert_fails::<kind::MissingLeftOperand>("2++3");
        assert_fails::<kind::MissingLeftOperand>("(*3)");
        assert_fails::<kind::MissingLeftOperand>("binom(1,-2)");
        assert_fails::<kind::MissingRightOperand>("(2+)");
        assert_fails::<kind::MissingRightOperand>("2*");
        assert_fails::<kind::MissingRightOperand>("binom(1+,2)");
    }

    #[test]
    fn brackets() {
        assert_fails::<kind::UnbalancedCloseBracket>("2)");
        assert_fails::<kind::UnclosedBracket>("(2");
        assert_fails::<kind::UnclosedBracket>("sin((x)");
        assert_fails::<kind::EmptyBrackets>("sin()");
        assert_fails::<kind::ImplicitMultiplication>("2(3+4)");
        assert_fails::<kind::ImplicitMultiplication>("(1)(2)");
        assert_fails::<kind::MissingOperator>("(x)y");
        assert_fails::<kind::MissingOperator>("(x)2");
    }

    #[test]
    fn commas() {
        assert_fails::<kind::MisplacedComma>("2,3");
        assert_fails::<kind::MisplacedComma>("f(,2)");
        assert_fails::<kind::MisplacedComma>("f(1,,2)");
        assert_fails::<kind::MisplacedComma>("f(1,)");
    }

    #[test]
    fn empty() {
        assert_fails::<kind::EmptyExpression>("");
        assert_fails::<kind::EmptyExpression>("   ");
    }
}
