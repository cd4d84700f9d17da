//! Implementation of the reduction rules.
//!
//! Each rule in this module is a function that takes the expression to reduce as an argument, and
//! returns `Some(expr)` with the rewritten expression if the rule applies, or `None` if the rule
//! does not apply. Rules only look at the top node and assume its children are already reduced.

pub mod add;
pub mod function;
pub mod multiply;
pub mod power;

use crate::{ctxt::Ctxt, expr::{Expr, Func}};
use log::trace;

/// If the expression is an add expression, calls the given transformation function with the
/// terms.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_add(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Add(lhs, rhs) = expr {
        f(lhs, rhs)
    } else {
        None
    }
}

/// If the expression is a subtract expression, calls the given transformation function with the
/// minuend and subtrahend.
pub(crate) fn do_sub(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Sub(lhs, rhs) = expr {
        f(lhs, rhs)
    } else {
        None
    }
}

/// If the expression is a multiplication expression, calls the given transformation function
/// with the factors.
pub(crate) fn do_multiply(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Mul(lhs, rhs) = expr {
        f(lhs, rhs)
    } else {
        None
    }
}

/// If the expression is a division expression, calls the given transformation function with the
/// numerator and denominator.
pub(crate) fn do_divide(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Div(lhs, rhs) = expr {
        f(lhs, rhs)
    } else {
        None
    }
}

/// If the expression is a power expression, calls the given transformation function with the
/// base and exponent.
pub(crate) fn do_power(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Pow(lhs, rhs) = expr {
        f(lhs, rhs)
    } else {
        None
    }
}

/// If the expression is a call to the given function, calls the given transformation function
/// with the argument.
pub(crate) fn do_call(expr: &Expr, func: Func, f: impl Fn(&Expr) -> Option<Expr>) -> Option<Expr> {
    match expr {
        Expr::Call(target, arg) if *target == func => f(arg),
        _ => None,
    }
}

/// Evaluates an operator or function node whose children are all literals.
///
/// `2 + 3 = 5`
/// `cos(0) = 1`
///
/// Nodes that fail to evaluate, such as `factorial(-1)`, are left alone.
pub fn fold_literals(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::Add(..)
            | Expr::Sub(..)
            | Expr::Mul(..)
            | Expr::Div(..)
            | Expr::Pow(..)
            | Expr::Call(..)
            | Expr::Binom(..) => (),
        _ => return None,
    }

    if !expr.children().iter().all(|child| child.as_value().is_some()) {
        return None;
    }

    let value = expr.eval(&Ctxt::new()).ok()?;
    trace!("fold_literals: {} = {}", expr, value);
    Some(Expr::Value(value))
}

/// Applies all rules.
pub fn all(expr: &Expr) -> Option<Expr> {
    fold_literals(expr)
        .or_else(|| add::all(expr))
        .or_else(|| multiply::all(expr))
        .or_else(|| power::all(expr))
        .or_else(|| function::all(expr))
}
