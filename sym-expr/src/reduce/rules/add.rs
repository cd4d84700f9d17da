//! Reduction rules for addition and subtraction.

use crate::expr::Expr;
use log::trace;
use super::{do_add, do_sub};

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(expr: &Expr) -> Option<Expr> {
    let opt = do_add(expr, |lhs, rhs| {
        if lhs.is_value(0.0) {
            Some(rhs.clone())
        } else if rhs.is_value(0.0) {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    trace!("add_zero: {} -> {}", expr, opt);
    Some(opt)
}

/// `a-0 = a`
pub fn subtract_zero(expr: &Expr) -> Option<Expr> {
    let opt = do_sub(expr, |lhs, rhs| {
        rhs.is_value(0.0).then(|| lhs.clone())
    })?;

    trace!("subtract_zero: {} -> {}", expr, opt);
    Some(opt)
}

/// Applies all addition rules.
pub fn all(expr: &Expr) -> Option<Expr> {
    add_zero(expr)
        .or_else(|| subtract_zero(expr))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn zero_on_either_side() {
        let x = Expr::var("x");
        assert_eq!(add_zero(&(Expr::ZERO + x.clone())), Some(x.clone()));
        assert_eq!(add_zero(&(x.clone() + Expr::ZERO)), Some(x.clone()));
        assert_eq!(add_zero(&(x.clone() + Expr::ONE)), None);
    }

    #[test]
    fn only_subtracting_zero() {
        let x = Expr::var("x");
        assert_eq!(subtract_zero(&(x.clone() - Expr::ZERO)), Some(x.clone()));
        assert_eq!(subtract_zero(&(Expr::ZERO - x)), None);
    }
}
