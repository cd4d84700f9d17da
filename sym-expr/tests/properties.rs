use assert_float_eq::{
    afe_abs,
    afe_absolute_error_msg,
    afe_is_absolute_eq,
    assert_float_absolute_eq,
};
use pretty_assertions::assert_eq;
use sym_expr::{Ctxt, Error, Expr, Func};

fn x() -> Expr {
    Expr::var("x")
}

fn y() -> Expr {
    Expr::var("y")
}

/// A handful of expressions in `x` and `y` that are defined for positive `x`.
fn samples() -> Vec<Expr> {
    vec![
        x().pow(Expr::Value(3.0)) - Expr::Value(2.0) * x() + Expr::ONE,
        (x() + y()) * (x() - y()) / (x() + Expr::ONE),
        Expr::call(Func::Sin, x() * y()) + Expr::call(Func::Cos, x()).pow(Expr::Value(2.0)),
        Expr::call(Func::Exp, x() / y()) * Expr::call(Func::Ln, x()),
        Expr::call(Func::Sqrt, x() * x() + y()),
        x().pow(y()) + Expr::call(Func::Cosh, x() - y()),
        Expr::sum(Expr::var("i") * x(), "i", Expr::ONE, Expr::Value(4.0)),
    ]
}

/// Absolute tolerance for comparing against `expected`, scaled with its magnitude.
fn tolerance(expected: f64) -> f64 {
    1e-9 * expected.abs().max(1.0)
}

fn points() -> Vec<Ctxt> {
    [(0.5, 1.0), (1.0, 2.0), (2.5, -1.5), (3.0, 0.25)]
        .into_iter()
        .map(|(x, y)| Ctxt::from([("x", x), ("y", y)]))
        .collect()
}

#[test]
fn reduce_preserves_value() {
    for expr in samples() {
        let once = expr.reduce(&Ctxt::new()).unwrap();
        let twice = once.reduce(&Ctxt::new()).unwrap();
        for ctxt in points() {
            let expected = expr.eval(&ctxt).unwrap();
            if !expected.is_finite() {
                continue;
            }
            assert_float_absolute_eq!(once.eval(&ctxt).unwrap(), expected, tolerance(expected));
            assert_float_absolute_eq!(twice.eval(&ctxt).unwrap(), expected, tolerance(expected));
        }
    }
}

#[test]
fn reduce_with_every_variable_bound_is_a_literal() {
    for expr in samples() {
        for ctxt in points() {
            let expected = expr.eval(&ctxt).unwrap();
            if !expected.is_finite() {
                continue;
            }
            let reduced = expr.reduce(&ctxt).unwrap();
            let value = reduced.as_value().unwrap_or_else(|| panic!("`{}` did not fold", reduced));
            assert_float_absolute_eq!(value, expected, tolerance(expected));
        }
    }
}

#[test]
fn derivative_matches_finite_difference() {
    const DX: f64 = 1e-6;

    for expr in samples() {
        let derivative = expr.differentiate("x").unwrap();
        for ctxt in points() {
            let at = ctxt.get_var("x").unwrap();
            let ahead = expr.eval(&ctxt.with_var("x", at + DX)).unwrap();
            let behind = expr.eval(&ctxt.with_var("x", at - DX)).unwrap();
            let numeric = (ahead - behind) / (2.0 * DX);
            if !numeric.is_finite() {
                continue;
            }

            let symbolic = derivative.eval(&ctxt).unwrap();
            assert!(
                (symbolic - numeric).abs() < 1e-4 * numeric.abs().max(1.0),
                "d/dx {} at {:?}: symbolic {} vs numeric {}",
                expr,
                ctxt,
                symbolic,
                numeric,
            );
        }
    }
}

#[test]
fn rendering_keeps_structure() {
    // every sample renders without negative literals, so parentheses alone decide the tree
    for expr in samples() {
        let rendered = expr.to_string();
        assert!(!rendered.is_empty());
        assert!(!rendered.contains("--"));
    }
    assert_eq!(
        ((x() + y()) * (x() - y()) / (x() + Expr::ONE)).to_string(),
        "(x + y) * (x - y) / (x + 1)",
    );
}

#[test]
fn errors_propagate() {
    let expr = x() + Expr::call(Func::Factorial, y());
    assert_eq!(
        expr.eval(&Ctxt::from([("x", 1.0)])),
        Err(Error::UnboundVariable { name: "y".to_string() }),
    );
    assert!(matches!(
        expr.eval(&Ctxt::from([("x", 1.0), ("y", 0.5)])),
        Err(Error::NonIntegerArgument { func: "factorial", .. }),
    ));
    assert_eq!(expr.differentiate("x"), Err(Error::NotDifferentiable { func: "factorial" }));
}
