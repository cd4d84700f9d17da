//! Symbolic derivatives of the functions in [`Func`].

use crate::{error::Error, expr::{Expr, Func}};

use super::{is_trivially_zero, MultBuilder};

/// Computes the derivative of a function call and applies the chain rule.
pub(super) fn function_derivative(func: Func, arg: &Expr, var: &str) -> Result<Expr, Error> {
    let mut mult_group = MultBuilder::default();

    match func {
        Func::Sin => {
            mult_group.mult(Expr::call(Func::Cos, arg.clone()));
        },
        Func::Cos => {
            mult_group.mult(Expr::Value(-1.0));
            mult_group.mult(Expr::call(Func::Sin, arg.clone()));
        },
        Func::Sinh => {
            mult_group.mult(Expr::call(Func::Cosh, arg.clone()));
        },
        Func::Cosh => {
            mult_group.mult(Expr::call(Func::Sinh, arg.clone()));
        },
        Func::Exp => {
            mult_group.mult(Expr::call(Func::Exp, arg.clone()));
        },
        Func::Ln => {
            // u' / u
            let inner = arg.differentiate(var)?;
            if is_trivially_zero(&inner) {
                return Ok(Expr::ZERO);
            }
            return Ok(inner / arg.clone());
        },
        Func::Sqrt => {
            return arg.clone().pow(Expr::Value(0.5)).differentiate(var);
        },
        Func::Factorial | Func::Conj => {
            return Err(Error::NotDifferentiable { func: func.name() });
        },
    };

    mult_group.mult(arg.differentiate(var)?);
    Ok(mult_group.into())
}
