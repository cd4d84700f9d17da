//! Reduction rules for multiplication and division.

use crate::expr::Expr;
use log::trace;
use super::{do_divide, do_multiply};

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(expr: &Expr) -> Option<Expr> {
    let opt = do_multiply(expr, |lhs, rhs| {
        (lhs.is_value(0.0) || rhs.is_value(0.0)).then_some(Expr::ZERO)
    })?;

    trace!("multiply_zero: {} -> {}", expr, opt);
    Some(opt)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(expr: &Expr) -> Option<Expr> {
    let opt = do_multiply(expr, |lhs, rhs| {
        if lhs.is_value(1.0) {
            Some(rhs.clone())
        } else if rhs.is_value(1.0) {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    trace!("multiply_one: {} -> {}", expr, opt);
    Some(opt)
}

/// `a*a = a^2`
pub fn multiply_self(expr: &Expr) -> Option<Expr> {
    let opt = do_multiply(expr, |lhs, rhs| {
        lhs.is_equal(rhs).then(|| lhs.clone().pow(Expr::Value(2.0)))
    })?;

    trace!("multiply_self: {} -> {}", expr, opt);
    Some(opt)
}

/// `a/1 = a`
///
/// `1/a` is left as is.
pub fn divide_one(expr: &Expr) -> Option<Expr> {
    let opt = do_divide(expr, |lhs, rhs| {
        rhs.is_value(1.0).then(|| lhs.clone())
    })?;

    trace!("divide_one: {} -> {}", expr, opt);
    Some(opt)
}

/// Applies all multiplication rules.
pub fn all(expr: &Expr) -> Option<Expr> {
    multiply_zero(expr)
        .or_else(|| multiply_one(expr))
        .or_else(|| multiply_self(expr))
        .or_else(|| divide_one(expr))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn self_product_uses_equality() {
        // (x + y) * (y + x) = (x + y)^2
        let sum = Expr::var("x") + Expr::var("y");
        let swapped = Expr::var("y") + Expr::var("x");
        assert_eq!(
            multiply_self(&(sum.clone() * swapped)),
            Some(sum.pow(Expr::Value(2.0))),
        );
    }

    #[test]
    fn distinct_factors_are_kept() {
        let e = Expr::var("x") * Expr::var("y");
        assert_eq!(all(&e), None);
    }
}
