//! Best-effort algebraic reduction.
//!
//! [`Expr::reduce`] works bottom-up: the children of a node are reduced first, then the rules in
//! [`rules`] are tried on the rebuilt node. When a rule rewrites the node, the result is reduced
//! again, until no rule applies. Every rule preserves the value of the expression; none of them
//! try to reach a canonical form.

pub mod rules;

use crate::{ctxt::Ctxt, error::Error, expr::{Expr, Sum}, funcs};

/// Tries the rules on a node whose children are already reduced.
fn simplify(expr: Expr, ctxt: &Ctxt) -> Result<Expr, Error> {
    match rules::all(&expr) {
        // rewritten nodes can expose new opportunities in their children
        Some(rewritten) => rewritten.reduce(ctxt),
        None => Ok(expr),
    }
}

impl Sum {
    /// Reduces the bounds and body of the summation. If the bounds reduce to literals and the body
    /// does not depend on anything but the iterator, the summation is evaluated. It is kept
    /// symbolic if that evaluation fails.
    pub fn reduce(&self, ctxt: &Ctxt) -> Result<Expr, Error> {
        if ctxt.contains_var(&self.iter) {
            return Err(Error::ShadowedIterator { name: self.iter.clone() });
        }

        let min = self.min.reduce(ctxt)?;
        let max = self.max.reduce(ctxt)?;
        let body = self.body.reduce(ctxt)?;

        let closed = body.contained_variables()
            .iter()
            .all(|name| *name == self.iter);
        let sum = Sum { body, iter: self.iter.clone(), min, max };
        if let (Some(min), Some(max)) = (sum.min.as_value(), sum.max.as_value()) {
            funcs::require_integer("sum", min)?;
            funcs::require_integer("sum", max)?;
            if closed {
                if let Ok(value) = sum.eval(&Ctxt::new()) {
                    return Ok(Expr::Value(value));
                }
            }
        }

        Ok(Expr::Sum(Box::new(sum)))
    }
}

impl Expr {
    /// Simplifies the expression, substituting the variables bound in `ctxt`.
    ///
    /// Every rule is an algebraic identity, so the result describes the same function as the
    /// original expression. Reduction is best-effort and does not produce a canonical form, so
    /// two equal expressions can reduce to different trees.
    ///
    /// Errors are only returned for problems reduction cannot work around: a derivative node
    /// that cannot be differentiated, a summation whose iterator is bound in `ctxt`, or a
    /// summation with literal, non-integer bounds.
    pub fn reduce(&self, ctxt: &Ctxt) -> Result<Expr, Error> {
        let expr = match self {
            Self::Value(_) => return Ok(self.clone()),
            Self::Variable(name) => {
                return Ok(ctxt.get_var(name).map(Expr::Value).unwrap_or_else(|| self.clone()));
            },
            Self::Add(lhs, rhs) => lhs.reduce(ctxt)? + rhs.reduce(ctxt)?,
            Self::Sub(lhs, rhs) => lhs.reduce(ctxt)? - rhs.reduce(ctxt)?,
            Self::Mul(lhs, rhs) => lhs.reduce(ctxt)? * rhs.reduce(ctxt)?,
            Self::Div(lhs, rhs) => lhs.reduce(ctxt)? / rhs.reduce(ctxt)?,
            Self::Pow(lhs, rhs) => lhs.reduce(ctxt)?.pow(rhs.reduce(ctxt)?),
            Self::Call(func, arg) => Expr::call(*func, arg.reduce(ctxt)?),
            Self::Binom(n, r) => Expr::binom(n.reduce(ctxt)?, r.reduce(ctxt)?),
            Self::Derivative(inner, var) => return inner.differentiate(var)?.reduce(ctxt),
            Self::Sum(sum) => return sum.reduce(ctxt),
        };

        simplify(expr, ctxt)
    }
}
