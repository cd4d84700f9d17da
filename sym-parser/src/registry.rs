//! Describes the language a parser accepts: its operators grouped into precedence levels, its
//! functions, and how identifiers and literals become nodes.
//!
//! The tokenizer and compiler know nothing about arithmetic. Everything language specific goes
//! through a [`Registry`], so the same machinery can build trees of any node type. [`Arithmetic`]
//! is the registry for [`sym_expr::Expr`].

use once_cell::sync::Lazy;
use std::collections::HashMap;
use sym_expr::{Expr, Func};

/// Explains why a function rejected one of its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentError {
    /// The index of the rejected argument.
    pub index: usize,

    /// A short description of what the argument should have been.
    pub reason: &'static str,
}

/// A function that builds a node from its compiled arguments.
pub struct Function<N> {
    /// The number of arguments the function takes.
    pub arity: usize,

    /// Builds the node. The argument vector always has exactly `arity` elements.
    pub build: Box<dyn Fn(Vec<N>) -> Result<N, ArgumentError> + Send + Sync>,
}

impl<N> Function<N> {
    /// Creates a new function with the given arity.
    pub fn new(
        arity: usize,
        build: impl Fn(Vec<N>) -> Result<N, ArgumentError> + Send + Sync + 'static,
    ) -> Self {
        Self { arity, build: Box::new(build) }
    }
}

impl<N> std::fmt::Debug for Function<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function").field("arity", &self.arity).finish_non_exhaustive()
    }
}

/// The operators, functions, and literals of an expression language.
pub trait Registry {
    /// The type of node the compiler builds.
    type Node;

    /// The operator characters, grouped into precedence levels from loosest to tightest.
    ///
    /// Every operator is left-associative.
    fn levels(&self) -> &[&[char]];

    /// Returns the constructor for the given binary operator.
    fn operator(&self, op: char) -> Option<fn(Self::Node, Self::Node) -> Self::Node>;

    /// Returns the function with the given name.
    fn function(&self, name: &str) -> Option<&Function<Self::Node>>;

    /// The names of every function, used to suggest alternatives for misspelled names.
    fn function_names(&self) -> Vec<&str>;

    /// Builds the node for an identifier that is not called like a function.
    fn variable(&self, name: &str) -> Self::Node;

    /// Builds the node for a numeric literal, or returns [`None`] if the literal has no meaning
    /// in this language.
    fn value(&self, text: &str) -> Option<Self::Node>;

    /// Every operator character, regardless of level.
    fn operators(&self) -> Vec<char> {
        self.levels().iter().flat_map(|level| level.iter().copied()).collect()
    }
}

/// Operator levels of arithmetic: terms, then factors, then powers.
const ARITHMETIC_LEVELS: &[&[char]] = &[&['+', '-'], &['*', '/'], &['^']];

/// Unpacks an argument vector whose length has already been checked by the compiler.
fn unpack<const N: usize>(args: Vec<Expr>) -> Result<[Expr; N], ArgumentError> {
    args.try_into().map_err(|_| ArgumentError {
        index: 0,
        reason: "wrong number of arguments",
    })
}

/// Requires the argument at `index` to be a plain variable, and returns its name.
fn require_variable(arg: Expr, index: usize) -> Result<String, ArgumentError> {
    match arg {
        Expr::Variable(name) => Ok(name),
        _ => Err(ArgumentError { index, reason: "expected a variable name here" }),
    }
}

/// The functions of arithmetic expressions.
static ARITHMETIC_FUNCTIONS: Lazy<HashMap<&'static str, Function<Expr>>> = Lazy::new(|| {
    let mut funcs = HashMap::new();

    for func in Func::ALL {
        funcs.insert(func.name(), Function::new(1, move |args| {
            let [arg] = unpack(args)?;
            Ok(Expr::call(func, arg))
        }));
    }

    funcs.insert("binom", Function::new(2, |args| {
        let [n, r] = unpack(args)?;
        Ok(Expr::binom(n, r))
    }));

    funcs.insert("derivative", Function::new(2, |args| {
        let [expr, var] = unpack(args)?;
        let var = require_variable(var, 1)?;
        Ok(Expr::derivative(expr, var))
    }));

    funcs.insert("sum", Function::new(4, |args| {
        let [body, iter, min, max] = unpack(args)?;
        let iter = require_variable(iter, 1)?;
        Ok(Expr::sum(body, iter, min, max))
    }));

    funcs
});

/// The registry of arithmetic expressions, producing [`Expr`] trees.
///
/// - Operators: `+ -` (loosest), then `* /`, then `^` (tightest).
/// - Functions: `sin cos sinh cosh ln exp sqrt factorial conj` (one argument), `binom(n, r)`,
///   `derivative(expr, var)`, and `sum(body, iter, min, max)`.
/// - Literals: decimal numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Arithmetic;

impl Registry for Arithmetic {
    type Node = Expr;

    fn levels(&self) -> &[&[char]] {
        ARITHMETIC_LEVELS
    }

    fn operator(&self, op: char) -> Option<fn(Expr, Expr) -> Expr> {
        let build: fn(Expr, Expr) -> Expr = match op {
            '+' => |lhs, rhs| lhs + rhs,
            '-' => |lhs, rhs| lhs - rhs,
            '*' => |lhs, rhs| lhs * rhs,
            '/' => |lhs, rhs| lhs / rhs,
            '^' => |lhs, rhs| lhs.pow(rhs),
            _ => return None,
        };
        Some(build)
    }

    fn function(&self, name: &str) -> Option<&Function<Expr>> {
        ARITHMETIC_FUNCTIONS.get(name)
    }

    fn function_names(&self) -> Vec<&str> {
        let mut names = ARITHMETIC_FUNCTIONS.keys().copied().collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    fn variable(&self, name: &str) -> Expr {
        Expr::var(name)
    }

    fn value(&self, text: &str) -> Option<Expr> {
        text.parse::<f64>().ok().filter(|value| value.is_finite()).map(Expr::Value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn operators_flatten_levels() {
        assert_eq!(Arithmetic.operators(), vec!['+', '-', '*', '/', '^']);
    }

    #[test]
    fn every_operator_has_a_constructor() {
        for op in Arithmetic.operators() {
            assert!(Arithmetic.operator(op).is_some(), "no constructor for `{}`", op);
        }
        assert!(Arithmetic.operator('%').is_none());
    }

    #[test]
    fn function_arities() {
        assert_eq!(Arithmetic.function("sin").unwrap().arity, 1);
        assert_eq!(Arithmetic.function("binom").unwrap().arity, 2);
        assert_eq!(Arithmetic.function("derivative").unwrap().arity, 2);
        assert_eq!(Arithmetic.function("sum").unwrap().arity, 4);
        assert!(Arithmetic.function("tan").is_none());
    }

    #[test]
    fn derivative_requires_variable() {
        let derivative = Arithmetic.function("derivative").unwrap();
        let err = (derivative.build)(vec![Expr::var("x"), Expr::Value(2.0)]).unwrap_err();
        assert_eq!(err.index, 1);

        let ok = (derivative.build)(vec![Expr::var("x"), Expr::var("x")]).unwrap();
        assert_eq!(ok, Expr::derivative(Expr::var("x"), "x"));
    }

    #[test]
    fn literals() {
        assert_eq!(Arithmetic.value("3.25"), Some(Expr::Value(3.25)));
        assert_eq!(Arithmetic.value("007"), Some(Expr::Value(7.0)));
    }
}
