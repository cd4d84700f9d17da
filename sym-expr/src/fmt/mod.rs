//! Plain-text and LaTeX rendering of expressions.
//!
//! The plain rendering is the [`Display`] implementation of [`Expr`], and uses the same syntax
//! the parser accepts. Parentheses are inserted by comparing the [`Precedence`] of each child
//! with that of its parent, so a tree without negative literals renders to text that parses back
//! into an equal tree.

mod latex;

pub use latex::{Latex, LatexFormatter};

use crate::expr::{Expr, Precedence};
use std::fmt::{self, Display, Formatter};

/// Which operand of a binary operator a child expression is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// Returns true if `child` must be wrapped in parentheses when written as the given operand of
/// `parent`.
///
/// All binary operators parse left-associatively, so a right operand needs parentheses when its
/// precedence is equal to the parent's, while a left operand only needs them when it is lower.
/// Negative literals are always wrapped, since `-` never starts an operand.
pub(crate) fn needs_parens(parent: Precedence, child: &Expr, side: Side) -> bool {
    if child.precedence() == Precedence::Neg {
        return true;
    }

    match side {
        Side::Left => child.precedence() < parent,
        Side::Right => child.precedence() <= parent,
    }
}

/// Writes the operand of a binary operator, adding parentheses if needed.
fn fmt_operand(f: &mut Formatter, parent: Precedence, child: &Expr, side: Side) -> fmt::Result {
    if needs_parens(parent, child, side) {
        write!(f, "({})", child)
    } else {
        write!(f, "{}", child)
    }
}

/// Writes a binary operator node.
fn fmt_binary(
    f: &mut Formatter,
    parent: Precedence,
    lhs: &Expr,
    op: &str,
    rhs: &Expr,
) -> fmt::Result {
    fmt_operand(f, parent, lhs, Side::Left)?;
    write!(f, " {} ", op)?;
    fmt_operand(f, parent, rhs, Side::Right)
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precedence = self.precedence();
        match self {
            Self::Value(value) => write!(f, "{}", value),
            Self::Variable(name) => write!(f, "{}", name),
            Self::Add(lhs, rhs) => fmt_binary(f, precedence, lhs, "+", rhs),
            Self::Sub(lhs, rhs) => fmt_binary(f, precedence, lhs, "-", rhs),
            Self::Mul(lhs, rhs) => fmt_binary(f, precedence, lhs, "*", rhs),
            Self::Div(lhs, rhs) => fmt_binary(f, precedence, lhs, "/", rhs),
            Self::Pow(lhs, rhs) => {
                fmt_operand(f, precedence, lhs, Side::Left)?;
                write!(f, "^")?;
                fmt_operand(f, precedence, rhs, Side::Right)
            },
            Self::Call(func, arg) => write!(f, "{}({})", func.name(), arg),
            Self::Binom(n, r) => write!(f, "binom({}, {})", n, r),
            Self::Derivative(expr, var) => write!(f, "derivative({}, {})", expr, var),
            Self::Sum(sum) => write!(f, "sum({}, {}, {}, {})", sum.body, sum.iter, sum.min, sum.max),
        }
    }
}
