//! Reduction rules for function calls that cancel each other out.

use crate::expr::{Expr, Func};
use log::trace;
use super::do_call;

/// `sqrt(a^2) = a`
pub fn sqrt_square(expr: &Expr) -> Option<Expr> {
    let opt = do_call(expr, Func::Sqrt, |arg| match arg {
        Expr::Pow(base, exponent) if exponent.is_value(2.0) => Some(base.as_ref().clone()),
        _ => None,
    })?;

    trace!("sqrt_square: {} -> {}", expr, opt);
    Some(opt)
}

/// `ln(exp(a)) = a`
pub fn ln_exp(expr: &Expr) -> Option<Expr> {
    let opt = do_call(expr, Func::Ln, |arg| match arg {
        Expr::Call(Func::Exp, inner) => Some(inner.as_ref().clone()),
        _ => None,
    })?;

    trace!("ln_exp: {} -> {}", expr, opt);
    Some(opt)
}

/// Applies all function rules.
pub fn all(expr: &Expr) -> Option<Expr> {
    sqrt_square(expr)
        .or_else(|| ln_exp(expr))
}
