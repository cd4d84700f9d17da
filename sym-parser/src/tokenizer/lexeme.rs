use logos::Logos;

/// The raw pieces of text recognized by the lexer, before they are validated and turned into
/// [`Token`](super::Token)s.
///
/// The lexer runs on the input with spaces already removed.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub enum Lexeme {
    /// Digits with any number of decimal points. Numbers with more than one decimal point or with
    /// a trailing decimal point are matched too, so that they can be reported as malformed
    /// numbers instead of as unexpected characters.
    #[regex(r"[0-9]+(\.[0-9]*)*")]
    Number,

    #[regex(r"[a-zA-Z][a-zA-Z0-9]*")]
    Name,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token(",")]
    Comma,

    /// Any other single character. It becomes an operator if the registry declares it as one.
    #[regex(r".", priority = 0)]
    Symbol,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Compares the lexemes produced by the lexer to the raw expected lexemes.
    fn compare_lexemes<'source, const N: usize>(input: &'source str, expected: [(Lexeme, &'source str); N]) {
        let mut lexer = Lexeme::lexer(input);

        for (expected_kind, expected_text) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_text);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_expr() {
        compare_lexemes(
            "sin(x2)+3.5",
            [
                (Lexeme::Name, "sin"),
                (Lexeme::OpenParen, "("),
                (Lexeme::Name, "x2"),
                (Lexeme::CloseParen, ")"),
                (Lexeme::Symbol, "+"),
                (Lexeme::Number, "3.5"),
            ],
        );
    }

    #[test]
    fn malformed_numbers_stay_whole() {
        compare_lexemes(
            "1.2.3*4.",
            [
                (Lexeme::Number, "1.2.3"),
                (Lexeme::Symbol, "*"),
                (Lexeme::Number, "4."),
            ],
        );
    }

    #[test]
    fn number_then_name() {
        compare_lexemes(
            "2x",
            [
                (Lexeme::Number, "2"),
                (Lexeme::Name, "x"),
            ],
        );
    }
}
