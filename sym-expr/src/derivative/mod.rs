//! Symbolic differentiation.

use crate::{error::Error, expr::{Expr, Func, Sum}};

mod function;

/// Returns `true` if the given [`Expr`] is "clearly" zero. This is intended to clean up the
/// trees built by differentiation and is not mathematically rigorous.
pub(crate) fn is_trivially_zero(e: &Expr) -> bool {
    match e {
        Expr::Value(value) => *value == 0.0,
        Expr::Add(lhs, rhs) | Expr::Sub(lhs, rhs) => is_trivially_zero(lhs) && is_trivially_zero(rhs),
        Expr::Mul(lhs, rhs) => is_trivially_zero(lhs) || is_trivially_zero(rhs),
        Expr::Div(num, _) => is_trivially_zero(num),
        Expr::Pow(base, exponent) => is_trivially_zero(base) && !is_trivially_zero(exponent),
        _ => false,
    }
}

/// Returns `true` if the given [`Expr`] is "clearly" one. This is intended to clean up the trees
/// built by differentiation and is not mathematically rigorous.
pub(crate) fn is_trivially_unity(e: &Expr) -> bool {
    match e {
        Expr::Value(value) => *value == 1.0,
        Expr::Mul(lhs, rhs) => is_trivially_unity(lhs) && is_trivially_unity(rhs),
        Expr::Div(num, den) => is_trivially_unity(num) && is_trivially_unity(den),
        Expr::Pow(base, exponent) => is_trivially_zero(exponent) || is_trivially_unity(base),
        _ => false,
    }
}

/// Helper struct to build a product of expressions while applying basic simplification rules. If
/// any of the expressions are zero, the product is reduced to zero. Factors equal to one are
/// dropped.
#[derive(Default)]
pub(crate) struct MultBuilder {
    factors: Vec<Expr>,
    zero: bool,
}

impl From<MultBuilder> for Expr {
    fn from(value: MultBuilder) -> Self {
        if value.zero {
            return Expr::ZERO;
        }
        value.factors
            .into_iter()
            .reduce(|acc, factor| acc * factor)
            .unwrap_or(Expr::ONE)
    }
}

impl MultBuilder {
    pub(crate) fn mult(&mut self, e: Expr) {
        if self.zero {
            return;
        }

        if is_trivially_zero(&e) {
            self.zero = true;
            self.factors.clear();
            return;
        }

        if !is_trivially_unity(&e) {
            self.factors.push(e);
        }
    }
}

/// Helper struct to build a sum of expressions while applying basic simplification rules. Only
/// non-zero terms are kept.
#[derive(Default)]
pub(crate) struct SumBuilder {
    /// Each term, and whether it is subtracted.
    terms: Vec<(bool, Expr)>,
}

impl From<SumBuilder> for Expr {
    fn from(value: SumBuilder) -> Self {
        let mut terms = value.terms.into_iter();
        let Some((negated, first)) = terms.next() else {
            return Expr::ZERO;
        };

        let first = if negated { -first } else { first };
        terms.fold(first, |acc, (negated, term)| {
            if negated {
                acc - term
            } else {
                acc + term
            }
        })
    }
}

impl SumBuilder {
    pub(crate) fn add(&mut self, e: Expr) {
        if !is_trivially_zero(&e) {
            self.terms.push((false, e));
        }
    }

    pub(crate) fn sub(&mut self, e: Expr) {
        if !is_trivially_zero(&e) {
            self.terms.push((true, e));
        }
    }
}

/// Builds `base ^ exponent`, collapsing the exponents zero and one.
pub(crate) fn power(base: Expr, exponent: Expr) -> Expr {
    if is_trivially_zero(&exponent) {
        Expr::ONE
    } else if is_trivially_unity(&exponent) {
        base
    } else {
        base.pow(exponent)
    }
}

/// `(f * g)' = f' * g + f * g'`
fn product_rule(lhs: &Expr, rhs: &Expr, var: &str) -> Result<Expr, Error> {
    let mut sum = SumBuilder::default();

    let mut left = MultBuilder::default();
    left.mult(lhs.differentiate(var)?);
    left.mult(rhs.clone());
    sum.add(left.into());

    let mut right = MultBuilder::default();
    right.mult(lhs.clone());
    right.mult(rhs.differentiate(var)?);
    sum.add(right.into());

    Ok(sum.into())
}

/// `(f / g)' = (f' * g - f * g') / g^2`, or `f' / g` if `g` does not depend on the variable.
fn quotient_rule(num: &Expr, den: &Expr, var: &str) -> Result<Expr, Error> {
    let num_prime = num.differentiate(var)?;
    if !den.contains_variable(var) {
        return Ok(if is_trivially_zero(&num_prime) {
            Expr::ZERO
        } else {
            num_prime / den.clone()
        });
    }

    let mut numerator = SumBuilder::default();

    let mut left = MultBuilder::default();
    left.mult(num_prime);
    left.mult(den.clone());
    numerator.add(left.into());

    let mut right = MultBuilder::default();
    right.mult(num.clone());
    right.mult(den.differentiate(var)?);
    numerator.sub(right.into());

    let numerator = Expr::from(numerator);
    if is_trivially_zero(&numerator) {
        return Ok(Expr::ZERO);
    }
    Ok(numerator / den.clone().pow(Expr::Value(2.0)))
}

/// Differentiates `base ^ exponent`.
///
/// With an exponent that does not depend on the variable, this is the power rule
/// `(f^n)' = n * f^(n - 1) * f'`. Otherwise, the exponential form
/// `(f^g)' = f^g * (g' * ln(f) + g * f' / f)` is used.
fn power_rule(base: &Expr, exponent: &Expr, var: &str) -> Result<Expr, Error> {
    if !exponent.contains_variable(var) {
        let reduced = match exponent {
            Expr::Value(n) => Expr::Value(n - 1.0),
            exponent => exponent.clone() - Expr::ONE,
        };

        let mut mult = MultBuilder::default();
        mult.mult(exponent.clone());
        mult.mult(power(base.clone(), reduced));
        mult.mult(base.differentiate(var)?);
        return Ok(mult.into());
    }

    let mut inner = SumBuilder::default();

    let mut log_term = MultBuilder::default();
    log_term.mult(exponent.differentiate(var)?);
    log_term.mult(Expr::call(Func::Ln, base.clone()));
    inner.add(log_term.into());

    let mut ratio = MultBuilder::default();
    ratio.mult(exponent.clone());
    ratio.mult(base.differentiate(var)?);
    let ratio = Expr::from(ratio);
    if !is_trivially_zero(&ratio) {
        inner.add(ratio / base.clone());
    }

    let mut mult = MultBuilder::default();
    mult.mult(base.clone().pow(exponent.clone()));
    mult.mult(inner.into());
    Ok(mult.into())
}

impl Sum {
    /// Differentiates the summation term by term. The bounds must not depend on the variable.
    pub fn differentiate(&self, var: &str) -> Result<Expr, Error> {
        if self.min.contains_variable(var) || self.max.contains_variable(var) {
            return Err(Error::BoundDependsOnVariable {
                iter: self.iter.clone(),
                var: var.to_string(),
            });
        }

        // the iterator is bound inside the body, so it is constant from the outside
        if self.iter == var {
            return Ok(Expr::ZERO);
        }

        let body = self.body.differentiate(var)?;
        if is_trivially_zero(&body) {
            return Ok(Expr::ZERO);
        }
        Ok(Expr::sum(body, self.iter.clone(), self.min.clone(), self.max.clone()))
    }
}

impl Expr {
    /// Computes the derivative of the expression with respect to the given variable.
    ///
    /// The result is cleaned up as it is built (terms that are trivially zero and factors that
    /// are trivially one are left out), but is otherwise not simplified; see [`Expr::reduce`].
    ///
    /// Returns [`Error::NotDifferentiable`] if the expression contains a function with no
    /// derivative, such as `factorial`.
    pub fn differentiate(&self, var: &str) -> Result<Expr, Error> {
        if is_trivially_zero(self) {
            return Ok(Expr::ZERO);
        }

        let expr = match self {
            Self::Value(_) => Expr::ZERO,
            Self::Variable(name) => if name == var {
                Expr::ONE
            } else {
                Expr::ZERO
            },
            Self::Add(lhs, rhs) => {
                let mut sum = SumBuilder::default();
                sum.add(lhs.differentiate(var)?);
                sum.add(rhs.differentiate(var)?);
                sum.into()
            },
            Self::Sub(lhs, rhs) => {
                let mut sum = SumBuilder::default();
                sum.add(lhs.differentiate(var)?);
                sum.sub(rhs.differentiate(var)?);
                sum.into()
            },
            Self::Mul(lhs, rhs) => product_rule(lhs, rhs, var)?,
            Self::Div(num, den) => quotient_rule(num, den, var)?,
            Self::Pow(base, exponent) => power_rule(base, exponent, var)?,
            Self::Call(func, arg) => function::function_derivative(*func, arg, var)?,
            Self::Binom(..) => return Err(Error::NotDifferentiable { func: "binom" }),
            Self::Derivative(inner, inner_var) => inner.differentiate(inner_var)?.differentiate(var)?,
            Self::Sum(sum) => sum.differentiate(var)?,
        };

        if is_trivially_zero(&expr) {
            Ok(Expr::ZERO)
        } else {
            Ok(expr)
        }
    }
}
