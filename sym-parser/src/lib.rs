//! Parser for infix expressions.
//!
//! Parsing happens in two passes:
//!
//! 1. The [`tokenizer`] splits the input into [`Token`](tokenizer::Token)s and rejects every
//!    malformed token sequence, such as `2 ++ 3` or `2(x)`, with a precise [`Error`].
//! 2. The [`compile`] pass builds the tree by repeatedly splitting token ranges at their loosest
//!    operator, as described in the [`compile`](mod@compile) module.
//!
//! The operators, functions, and literals of the language come from a [`Registry`]. [`parse`]
//! uses the [`Arithmetic`] registry and produces [`sym_expr::Expr`] trees; [`parse_with`] accepts
//! any registry.
//!
//! ```
//! use sym_expr::Ctxt;
//! use sym_parser::parse;
//!
//! let expr = parse("2 + 3 * 4 ^ 2").unwrap();
//! assert_eq!(expr.eval(&Ctxt::new()).unwrap(), 50.0);
//!
//! let err = parse("2 ++ 3").unwrap_err();
//! assert_eq!(err.spans, vec![3..4, 2..3]);
//! ```
//!
//! # Error reporting
//!
//! Errors carry the spans of the offending tokens in the original input, and can be rendered
//! with [`ariadne`]:
//!
//! ```no_run
//! use ariadne::Source;
//! use sym_parser::parse;
//!
//! let input = "sin(x";
//! if let Err(err) = parse(input) {
//!     err.build_report("input").eprint(("input", Source::from(input))).unwrap();
//! }
//! ```

pub mod compile;
pub mod error;
pub mod registry;
pub mod tokenizer;

pub use compile::compile;
pub use error::Error;
pub use registry::{Arithmetic, Registry};

use sym_expr::Expr;

/// Parses an arithmetic expression.
pub fn parse(input: &str) -> Result<Expr, Error> {
    parse_with(input, &Arithmetic)
}

/// Parses an expression in the language described by the given registry.
pub fn parse_with<R: Registry>(input: &str, registry: &R) -> Result<R::Node, Error> {
    let tokens = tokenizer::tokenize_with(input, &registry.operators())?;
    compile(&tokens, registry)
}
