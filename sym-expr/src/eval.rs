//! Numerical evaluation of expressions.

use crate::{
    ctxt::Ctxt,
    error::Error,
    expr::{Expr, Func, Sum},
    funcs,
};

impl Func {
    /// Applies the function to a number.
    pub fn eval(self, arg: f64) -> Result<f64, Error> {
        Ok(match self {
            Self::Sin => arg.sin(),
            Self::Cos => arg.cos(),
            Self::Sinh => arg.sinh(),
            Self::Cosh => arg.cosh(),
            Self::Ln => arg.ln(),
            Self::Exp => arg.exp(),
            Self::Sqrt => arg.sqrt(),
            Self::Factorial => funcs::factorial(arg)?,
            // real numbers are their own conjugate
            Self::Conj => arg,
        })
    }
}

impl Sum {
    /// Evaluates the summation, binding the iterator to every integer in `[min, max]` in turn.
    pub fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        if ctxt.contains_var(&self.iter) {
            return Err(Error::ShadowedIterator { name: self.iter.clone() });
        }

        let min = self.min.eval(ctxt)?;
        let max = self.max.eval(ctxt)?;
        let min = funcs::to_index("sum", min)?;
        let max = funcs::to_index("sum", max)?;

        let mut inner = ctxt.clone();
        let mut total = 0.0;
        for i in min..=max {
            inner.add_var(&self.iter, i as f64);
            total += self.body.eval(&inner)?;
        }
        Ok(total)
    }
}

impl Expr {
    /// Evaluates the expression to a number.
    ///
    /// Every variable in the expression must be bound in `ctxt`, otherwise
    /// [`Error::UnboundVariable`] is returned. Use [`Ctxt::new`] for an evaluation without
    /// bindings.
    pub fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        match self {
            Self::Value(value) => Ok(*value),
            Self::Variable(name) => ctxt.get_var(name)
                .ok_or_else(|| Error::UnboundVariable { name: name.clone() }),
            Self::Add(lhs, rhs) => Ok(lhs.eval(ctxt)? + rhs.eval(ctxt)?),
            Self::Sub(lhs, rhs) => Ok(lhs.eval(ctxt)? - rhs.eval(ctxt)?),
            Self::Mul(lhs, rhs) => Ok(lhs.eval(ctxt)? * rhs.eval(ctxt)?),
            Self::Div(lhs, rhs) => Ok(lhs.eval(ctxt)? / rhs.eval(ctxt)?),
            Self::Pow(lhs, rhs) => Ok(lhs.eval(ctxt)?.powf(rhs.eval(ctxt)?)),
            Self::Call(func, arg) => func.eval(arg.eval(ctxt)?),
            Self::Binom(n, r) => funcs::binom(n.eval(ctxt)?, r.eval(ctxt)?),
            Self::Derivative(expr, var) => expr.differentiate(var)?.eval(ctxt),
            Self::Sum(sum) => sum.eval(ctxt),
        }
    }
}
