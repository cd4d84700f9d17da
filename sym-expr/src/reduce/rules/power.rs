//! Reduction rules for exponentiation.

use crate::expr::Expr;
use log::trace;
use super::do_power;

/// `a^0 = 1`
pub fn power_zero(expr: &Expr) -> Option<Expr> {
    let opt = do_power(expr, |_, rhs| {
        rhs.is_value(0.0).then_some(Expr::ONE)
    })?;

    trace!("power_zero: {} -> {}", expr, opt);
    Some(opt)
}

/// `a^1 = a`
pub fn power_one(expr: &Expr) -> Option<Expr> {
    let opt = do_power(expr, |lhs, rhs| {
        rhs.is_value(1.0).then(|| lhs.clone())
    })?;

    trace!("power_one: {} -> {}", expr, opt);
    Some(opt)
}

/// `(a^b)^c = a^(b*c)`
pub fn power_power(expr: &Expr) -> Option<Expr> {
    let opt = do_power(expr, |lhs, rhs| {
        if let Expr::Pow(base, exponent) = lhs {
            Some(base.as_ref().clone().pow(exponent.as_ref().clone() * rhs.clone()))
        } else {
            None
        }
    })?;

    trace!("power_power: {} -> {}", expr, opt);
    Some(opt)
}

/// Applies all power rules.
pub fn all(expr: &Expr) -> Option<Expr> {
    power_zero(expr)
        .or_else(|| power_one(expr))
        .or_else(|| power_power(expr))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn nested_exponents_multiply() {
        let x = Expr::var("x");
        let e = x.clone().pow(Expr::var("n")).pow(Expr::Value(2.0));
        assert_eq!(power_power(&e), Some(x.pow(Expr::var("n") * Expr::Value(2.0))));
    }
}
