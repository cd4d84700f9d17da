//! Immutable arithmetic expression trees.
//!
//! # Expression representation
//!
//! Expressions are represented as a tree of [`Expr`] nodes. Unlike a flattened representation,
//! every operator node has exactly two children, so `x + (y + z)` and `(x + y) + z` are
//! different trees that happen to evaluate to the same value.
//!
//! Trees are never mutated after construction. Every transformation ([`Expr::differentiate`],
//! [`Expr::reduce`]) returns a brand new tree, leaving the original untouched.
//!
//! ```
//! use sym_expr::{Ctxt, Expr, Func};
//!
//! // sin(x) * 2
//! let expr = Expr::call(Func::Sin, Expr::var("x")) * Expr::Value(2.0);
//!
//! let mut ctxt = Ctxt::new();
//! ctxt.add_var("x", 0.0);
//! assert_eq!(expr.eval(&ctxt).unwrap(), 0.0);
//!
//! // d/dx sin(x) * 2 = cos(x) * 2
//! let derivative = expr.differentiate("x").unwrap();
//! assert_eq!(derivative.eval(&ctxt).unwrap(), 2.0);
//! ```
//!
//! # Reduction
//!
//! [`Expr::reduce`] applies a fixed set of simplification rules (folding literals, additive and
//! multiplicative identities, nested powers, and a few inverse cancellations), optionally
//! substituting the variables bound in a [`Ctxt`]. Reduction is best-effort: it never changes
//! the value of an expression, but it does not try to find a canonical form either.
//!
//! # Equality
//!
//! Two kinds of equality are available. The [`PartialEq`] implementation is plain structural
//! equality. [`Expr::is_equal`] is a conservative semantic check that also understands
//! commutativity and a few equivalent spellings (`sqrt(x)` and `x^0.5`); it never reports two
//! different expressions as equal, but may miss some equal ones.

pub mod ctxt;
pub mod derivative;
pub mod equality;
pub mod error;
pub mod eval;
pub mod expr;
pub mod fmt;
pub mod funcs;
pub mod reduce;

pub use ctxt::Ctxt;
pub use error::Error;
pub use expr::{Expr, Func, Precedence, Sum};
pub use fmt::Latex;
