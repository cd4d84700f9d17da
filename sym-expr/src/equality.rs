//! Conservative semantic equality between expressions.

use crate::expr::{Expr, Func};
use std::borrow::Cow;
use std::f64::consts::E;

impl Expr {
    /// If the expression is a power, or a function that is a power in disguise, returns its base
    /// and exponent.
    ///
    /// `sqrt(a) = a^0.5`
    /// `exp(a) = e^a`
    fn power_form(&self) -> Option<(Cow<'_, Expr>, Cow<'_, Expr>)> {
        match self {
            Self::Pow(base, exponent) => Some((Cow::Borrowed(&**base), Cow::Borrowed(&**exponent))),
            Self::Call(Func::Sqrt, arg) => Some((Cow::Borrowed(&**arg), Cow::Owned(Expr::Value(0.5)))),
            Self::Call(Func::Exp, arg) => Some((Cow::Owned(Expr::Value(E)), Cow::Borrowed(&**arg))),
            _ => None,
        }
    }

    /// If the expression is the natural logarithm of a power of `e`, returns the exponent.
    ///
    /// `ln(exp(a)) = a`
    /// `ln(e^a) = a`
    fn log_form(&self) -> Option<Cow<'_, Expr>> {
        let Self::Call(Func::Ln, arg) = self else {
            return None;
        };
        match arg.power_form()? {
            (base, exponent) if base.is_value(E) => Some(exponent),
            _ => None,
        }
    }

    /// Returns true if the two expressions are known to be equal.
    ///
    /// This check is conservative: it never returns `true` for two expressions that are not
    /// equal, but it may return `false` for some that are. It understands that addition and
    /// multiplication are commutative, and that `sqrt`, `exp` and `ln` can also be written with
    /// powers. It does not reduce either expression, so `x + 0` is not equal to `x`; call
    /// [`Expr::reduce`] on both sides first for a stronger check.
    pub fn is_equal(&self, other: &Expr) -> bool {
        if let Some(inner) = self.log_form() {
            return inner.is_equal(other);
        }
        if let Some(inner) = other.log_form() {
            return self.is_equal(&inner);
        }

        if let (Some((base_a, exp_a)), Some((base_b, exp_b))) = (self.power_form(), other.power_form()) {
            return base_a.is_equal(&base_b) && exp_a.is_equal(&exp_b);
        }

        match (self, other) {
            (Self::Value(a), Self::Value(b)) => a == b,
            (Self::Variable(a), Self::Variable(b)) => a == b,
            (Self::Add(a1, a2), Self::Add(b1, b2)) | (Self::Mul(a1, a2), Self::Mul(b1, b2)) => {
                (a1.is_equal(b1) && a2.is_equal(b2)) || (a1.is_equal(b2) && a2.is_equal(b1))
            },
            (Self::Sub(a1, a2), Self::Sub(b1, b2))
                | (Self::Div(a1, a2), Self::Div(b1, b2))
                | (Self::Binom(a1, a2), Self::Binom(b1, b2)) => a1.is_equal(b1) && a2.is_equal(b2),
            (Self::Call(f, a), Self::Call(g, b)) => f == g && a.is_equal(b),
            (Self::Derivative(a, var_a), Self::Derivative(b, var_b)) => var_a == var_b && a.is_equal(b),
            (Self::Sum(a), Self::Sum(b)) => a.iter == b.iter
                && a.body.is_equal(&b.body)
                && a.min.is_equal(&b.min)
                && a.max.is_equal(&b.max),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Expr {
        Expr::var("x")
    }

    fn y() -> Expr {
        Expr::var("y")
    }

    #[test]
    fn commutative() {
        assert!((x() + y()).is_equal(&(y() + x())));
        assert!((x() * y()).is_equal(&(y() * x())));
    }

    #[test]
    fn not_commutative() {
        assert!(!(x() - y()).is_equal(&(y() - x())));
        assert!(!(x() / y()).is_equal(&(y() / x())));
        assert!(!x().pow(y()).is_equal(&y().pow(x())));
    }

    #[test]
    fn nested_commutative() {
        // (x + 1) * y = y * (1 + x)
        let a = (x() + Expr::ONE) * y();
        let b = y() * (Expr::ONE + x());
        assert!(a.is_equal(&b));
    }

    #[test]
    fn sqrt_is_half_power() {
        let sqrt = Expr::call(Func::Sqrt, x());
        let power = x().pow(Expr::Value(0.5));
        assert!(sqrt.is_equal(&power));
        assert!(power.is_equal(&sqrt));
        assert!(!sqrt.is_equal(&x().pow(Expr::Value(2.0))));
    }

    #[test]
    fn exp_is_power_of_e() {
        let exp = Expr::call(Func::Exp, x());
        assert!(exp.is_equal(&Expr::Value(E).pow(x())));
        assert!(!exp.is_equal(&Expr::Value(2.0).pow(x())));
    }

    #[test]
    fn ln_cancels_exp() {
        assert!(Expr::call(Func::Ln, Expr::call(Func::Exp, x())).is_equal(&x()));
        assert!(x().is_equal(&Expr::call(Func::Ln, Expr::Value(E).pow(x()))));
        assert!(!Expr::call(Func::Ln, x()).is_equal(&x()));
    }

    #[test]
    fn different_functions() {
        assert!(!Expr::call(Func::Sin, x()).is_equal(&Expr::call(Func::Cos, x())));
    }

    #[test]
    fn sums_compare_iterators() {
        let a = Expr::sum(Expr::var("i"), "i", Expr::ONE, Expr::var("n"));
        let b = Expr::sum(Expr::var("j"), "j", Expr::ONE, Expr::var("n"));
        assert!(a.is_equal(&a.clone()));
        assert!(!a.is_equal(&b));
    }
}
