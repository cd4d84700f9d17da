//! Builds a tree from a validated token sequence.
//!
//! Compilation works on a range of tokens and a precedence level. For each level, starting at the
//! given one, the range is scanned from right to left for an operator of that level outside of
//! any brackets. The first one found (the rightmost) splits the range in two; both halves are
//! compiled at the same level and combined with the operator's constructor. Splitting at the
//! rightmost operator makes every operator left-associative: `8 - 3 - 2` splits into `8 - 3` and
//! `2`.
//!
//! A range with no such operator at any level is an atom: a bracketed group, a variable, a
//! function call, or a literal.

use crate::error::{kind, Error};
use crate::registry::Registry;
use crate::tokenizer::{Token, TokenKind};
use levenshtein::levenshtein;
use log::{debug, trace};
use std::ops::Range;

/// Compiles the tokens into a single node, using the operators and functions of the registry.
///
/// The tokens are expected to have passed the validation done by
/// [`tokenize_with`](crate::tokenizer::tokenize_with); malformed sequences that slip through
/// are still reported as errors rather than panicking.
pub fn compile<R: Registry>(tokens: &[Token], registry: &R) -> Result<R::Node, Error> {
    Compiler { tokens, registry }.compile(0..tokens.len(), 0)
}

struct Compiler<'a, R> {
    tokens: &'a [Token],
    registry: &'a R,
}

impl<R: Registry> Compiler<'_, R> {
    /// Returns the span of the source code covered by the range of tokens. An empty range gives
    /// an empty span at the position where the range would start.
    fn span(&self, range: Range<usize>) -> Range<usize> {
        if range.start < range.end {
            if let (Some(first), Some(last)) = (self.tokens.get(range.start), self.tokens.get(range.end - 1)) {
                return first.span.start..last.span.end;
            }
        }

        let at = match self.tokens.get(range.start) {
            Some(token) => token.span.start,
            None => self.tokens.last().map_or(0, |token| token.span.end),
        };
        at..at
    }

    /// Returns the index of the bracket closing the one at `open`, looking no further than
    /// `end`.
    fn matching_bracket(&self, open: usize, end: usize) -> Option<usize> {
        let mut depth = 0usize;
        for index in open..end {
            match self.tokens[index].kind {
                TokenKind::OpenBracket => depth += 1,
                TokenKind::CloseBracket => {
                    depth = depth.checked_sub(1)?;
                    if depth == 0 {
                        return Some(index);
                    }
                },
                _ => (),
            }
        }
        None
    }

    /// Finds the rightmost operator in `ops` that is outside of any brackets.
    fn split_point(&self, range: Range<usize>, ops: &[char]) -> Result<Option<usize>, Error> {
        let mut depth = 0usize;
        for index in range.clone().rev() {
            let token = &self.tokens[index];
            match token.kind {
                TokenKind::CloseBracket => depth += 1,
                TokenKind::OpenBracket => {
                    depth = depth.checked_sub(1)
                        .ok_or_else(|| Error::new(vec![self.span(range.clone())], kind::UnbalancedRange))?;
                },
                TokenKind::Operator if depth == 0 => {
                    if token.as_operator().is_some_and(|op| ops.contains(&op)) {
                        return Ok(Some(index));
                    }
                },
                _ => (),
            }
        }

        if depth != 0 {
            return Err(Error::new(vec![self.span(range)], kind::UnbalancedRange));
        }
        Ok(None)
    }

    fn compile(&self, range: Range<usize>, level: usize) -> Result<R::Node, Error> {
        if range.is_empty() {
            return Err(Error::new(vec![self.span(range)], kind::EmptyRange));
        }

        let first = &self.tokens[range.start];
        if first.kind == TokenKind::OpenBracket {
            let close = self.matching_bracket(range.start, range.end)
                .ok_or_else(|| Error::new(vec![self.span(range.clone())], kind::UnbalancedRange))?;
            if close == range.end - 1 {
                return self.compile(range.start + 1..close, 0);
            }
        }

        for (index, ops) in self.registry.levels().iter().enumerate().skip(level) {
            let Some(split) = self.split_point(range.clone(), ops)? else {
                continue;
            };

            let token = &self.tokens[split];
            let op = token.as_operator().unwrap_or_default();
            let build = self.registry.operator(op)
                .ok_or_else(|| Error::new(vec![token.span.clone()], kind::UnknownOperator { op }))?;
            trace!("split at `{}` (level {}): {:?}", op, index, self.span(range.clone()));

            let lhs = self.compile(range.start..split, index)?;
            let rhs = self.compile(split + 1..range.end, index)?;
            return Ok(build(lhs, rhs));
        }

        self.compile_atom(range)
    }

    /// Compiles a range with no operators outside of brackets.
    fn compile_atom(&self, range: Range<usize>) -> Result<R::Node, Error> {
        let first = &self.tokens[range.start];
        match first.kind {
            TokenKind::Identifier if range.len() == 1 => {
                return Ok(self.registry.variable(&first.text));
            },
            TokenKind::Identifier if self.tokens[range.start + 1].kind == TokenKind::OpenBracket => {
                let open = range.start + 1;
                if self.matching_bracket(open, range.end) == Some(range.end - 1) {
                    return self.compile_call(range.start, open, range.end - 1);
                }
            },
            TokenKind::Value if range.len() == 1 => {
                return self.registry.value(&first.text)
                    .ok_or_else(|| Error::new(vec![first.span.clone()], kind::InvalidValue {
                        text: first.text.clone(),
                    }));
            },
            _ => (),
        }

        // a comma outside of any call
        let mut depth = 0usize;
        for token in &self.tokens[range.clone()] {
            match token.kind {
                TokenKind::OpenBracket => depth += 1,
                TokenKind::CloseBracket => depth = depth.saturating_sub(1),
                TokenKind::Comma if depth == 0 => {
                    return Err(Error::new(vec![token.span.clone()], kind::MisplacedComma));
                },
                _ => (),
            }
        }

        Err(Error::new(vec![self.span(range)], kind::Unrecognized))
    }

    /// Compiles the call of the function named by the token at `name`, whose arguments are
    /// between the brackets at `open` and `close`.
    fn compile_call(&self, name: usize, open: usize, close: usize) -> Result<R::Node, Error> {
        let name = &self.tokens[name];
        let call_span = name.span.start..self.tokens[close].span.end;

        let Some(function) = self.registry.function(&name.text) else {
            let suggestions = self.registry.function_names()
                .into_iter()
                .filter(|candidate| levenshtein(candidate, &name.text) < 2)
                .map(String::from)
                .collect();
            return Err(Error::new(vec![name.span.clone()], kind::UnknownFunction {
                name: name.text.clone(),
                suggestions,
            }));
        };

        let mut arg_ranges = Vec::new();
        let mut depth = 0usize;
        let mut start = open + 1;
        for index in open + 1..close {
            match self.tokens[index].kind {
                TokenKind::OpenBracket => depth += 1,
                TokenKind::CloseBracket => depth = depth.saturating_sub(1),
                TokenKind::Comma if depth == 0 => {
                    arg_ranges.push(start..index);
                    start = index + 1;
                },
                _ => (),
            }
        }
        arg_ranges.push(start..close);

        if arg_ranges.len() != function.arity {
            return Err(Error::new(vec![call_span], kind::WrongArgumentCount {
                name: name.text.clone(),
                expected: function.arity,
                given: arg_ranges.len(),
            }));
        }

        let args = arg_ranges.iter()
            .map(|range| self.compile(range.clone(), 0))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("call `{}` with {} argument(s)", name.text, args.len());

        (function.build)(args).map_err(|err| {
            let span = arg_ranges.get(err.index)
                .map_or_else(|| call_span.clone(), |range| self.span(range.clone()));
            Error::new(vec![span], kind::InvalidArgument {
                name: name.text.clone(),
                reason: err.reason,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sym_expr::{Expr, Func};
    use super::*;
    use crate::registry::Arithmetic;
    use crate::tokenizer::tokenize;

    fn compile_str(input: &str) -> Result<Expr, Error> {
        compile(&tokenize(input)?, &Arithmetic)
    }

    #[test]
    fn precedence_levels() {
        let expr = compile_str("2 + 3 * x").unwrap();
        assert_eq!(expr, Expr::Value(2.0) + Expr::Value(3.0) * Expr::var("x"));
    }

    #[test]
    fn left_associative() {
        let expr = compile_str("8 - 3 - 2").unwrap();
        assert_eq!(expr, (Expr::Value(8.0) - Expr::Value(3.0)) - Expr::Value(2.0));

        let expr = compile_str("x ^ y ^ 2").unwrap();
        assert_eq!(expr, Expr::var("x").pow(Expr::var("y")).pow(Expr::Value(2.0)));
    }

    #[test]
    fn brackets_restart_levels() {
        let expr = compile_str("(2 + 3) * 4").unwrap();
        assert_eq!(expr, (Expr::Value(2.0) + Expr::Value(3.0)) * Expr::Value(4.0));

        let expr = compile_str("((x))").unwrap();
        assert_eq!(expr, Expr::var("x"));
    }

    #[test]
    fn nested_calls() {
        let expr = compile_str("sin(cos(x) + 1)").unwrap();
        assert_eq!(
            expr,
            Expr::call(Func::Sin, Expr::call(Func::Cos, Expr::var("x")) + Expr::ONE),
        );
    }

    #[test]
    fn multi_argument_calls() {
        let expr = compile_str("sum(binom(n, i), i, 0, n)").unwrap();
        assert_eq!(
            expr,
            Expr::sum(
                Expr::binom(Expr::var("n"), Expr::var("i")),
                "i",
                Expr::ZERO,
                Expr::var("n"),
            ),
        );
    }

    #[test]
    fn unknown_function_suggestions() {
        let err = compile_str("sinn(x)").unwrap_err();
        let kind = err.downcast_ref::<kind::UnknownFunction>().unwrap();
        assert_eq!(kind.name, "sinn");
        assert!(kind.suggestions.contains(&"sin".to_string()));
        assert_eq!(err.spans, vec![0..4]);
    }

    #[test]
    fn wrong_argument_count() {
        let err = compile_str("binom(5)").unwrap_err();
        let kind = err.downcast_ref::<kind::WrongArgumentCount>().unwrap();
        assert_eq!((kind.expected, kind.given), (2, 1));
        assert_eq!(err.spans, vec![0..8]);
    }

    #[test]
    fn invalid_argument_span() {
        let err = compile_str("derivative(x^2, 2*x)").unwrap_err();
        assert!(err.is::<kind::InvalidArgument>());
        assert_eq!(err.spans, vec![16..19]);
    }
}
