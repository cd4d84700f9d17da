//! The expression tree and its node kinds.
//!
//! Every node kind is a variant of [`Expr`]. The set is closed: operations such as
//! [`Expr::eval`] and [`Expr::differentiate`] match on it exhaustively, so adding a node kind
//! means the compiler points at every operation that needs to learn about it.

mod iter;

pub use iter::ExprIter;

use std::collections::BTreeSet;
use std::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named function of one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Func {
    Sin,
    Cos,
    Sinh,
    Cosh,
    Ln,
    Exp,
    Sqrt,
    Factorial,
    Conj,
}

impl Func {
    /// All functions, in the order they are documented.
    pub const ALL: [Func; 9] = [
        Func::Sin,
        Func::Cos,
        Func::Sinh,
        Func::Cosh,
        Func::Ln,
        Func::Exp,
        Func::Sqrt,
        Func::Factorial,
        Func::Conj,
    ];

    /// The name of the function, as it is written in source code.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Ln => "ln",
            Self::Exp => "exp",
            Self::Sqrt => "sqrt",
            Self::Factorial => "factorial",
            Self::Conj => "conj",
        }
    }

    /// Returns the function with the given name, if there is one.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|func| func.name() == name)
    }
}

/// The precedence of a node, in order from lowest precedence (binds loosest) to highest
/// precedence (binds tightest).
///
/// Precedence only decides where parentheses are needed when printing. Parsing does not consult
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor,

    /// Precedence of a negative literal, such as `-2`.
    Neg,

    /// Precedence of exponentiation (`^`).
    Exp,

    /// Literals, variables, and function calls.
    Atom,
}

/// A bounded discrete summation, `sum(body, iter, min, max)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sum {
    /// The expression to sum.
    pub body: Expr,

    /// The name of the iterator variable, bound in `body` only.
    pub iter: String,

    /// The inclusive lower bound.
    pub min: Expr,

    /// The inclusive upper bound.
    pub max: Expr,
}

/// A node of an arithmetic expression tree.
///
/// Trees are immutable once built. The [`PartialEq`] implementation is structural; see
/// [`Expr::is_equal`] for a semantic comparison.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A literal number, such as `2` or `3.14`.
    Value(f64),

    /// A variable, such as `x`.
    Variable(String),

    /// `lhs + rhs`
    Add(Box<Expr>, Box<Expr>),

    /// `lhs - rhs`
    Sub(Box<Expr>, Box<Expr>),

    /// `lhs * rhs`
    Mul(Box<Expr>, Box<Expr>),

    /// `lhs / rhs`
    Div(Box<Expr>, Box<Expr>),

    /// `base ^ exponent`
    Pow(Box<Expr>, Box<Expr>),

    /// A function of one argument, such as `sin(x)`.
    Call(Func, Box<Expr>),

    /// The binomial coefficient `binom(n, r)`.
    Binom(Box<Expr>, Box<Expr>),

    /// The derivative of the expression with respect to the named variable.
    Derivative(Box<Expr>, String),

    /// A bounded summation.
    Sum(Box<Sum>),
}

impl Expr {
    /// The literal `0`.
    pub const ZERO: Expr = Expr::Value(0.0);

    /// The literal `1`.
    pub const ONE: Expr = Expr::Value(1.0);

    /// Creates a variable node.
    pub fn var(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Creates `base ^ exponent`. No simplification is done.
    pub fn pow(self, exponent: Self) -> Self {
        Self::Pow(Box::new(self), Box::new(exponent))
    }

    /// Creates a function call node.
    pub fn call(func: Func, arg: Self) -> Self {
        Self::Call(func, Box::new(arg))
    }

    /// Creates a binomial coefficient node.
    pub fn binom(n: Self, r: Self) -> Self {
        Self::Binom(Box::new(n), Box::new(r))
    }

    /// Creates a node representing the derivative of `expr` with respect to `var`.
    pub fn derivative(expr: Self, var: impl Into<String>) -> Self {
        Self::Derivative(Box::new(expr), var.into())
    }

    /// Creates a summation node.
    pub fn sum(body: Self, iter: impl Into<String>, min: Self, max: Self) -> Self {
        Self::Sum(Box::new(Sum { body, iter: iter.into(), min, max }))
    }

    /// Returns the precedence of the expression.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Value(value) if value.is_sign_negative() && *value != 0.0 => Precedence::Neg,
            Self::Add(..) | Self::Sub(..) => Precedence::Term,
            Self::Mul(..) | Self::Div(..) => Precedence::Factor,
            Self::Pow(..) => Precedence::Exp,
            Self::Value(_)
                | Self::Variable(_)
                | Self::Call(..)
                | Self::Binom(..)
                | Self::Derivative(..)
                | Self::Sum(_) => Precedence::Atom,
        }
    }

    /// If the expression is a [`Expr::Value`], returns the contained number.
    pub fn as_value(&self) -> Option<f64> {
        match self {
            Self::Value(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if the expression is the literal `value`.
    pub fn is_value(&self, value: f64) -> bool {
        self.as_value() == Some(value)
    }

    /// If the expression is a [`Expr::Variable`], returns its name.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the direct children of this node, from left to right.
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Self::Value(_) | Self::Variable(_) => Vec::new(),
            Self::Add(lhs, rhs)
                | Self::Sub(lhs, rhs)
                | Self::Mul(lhs, rhs)
                | Self::Div(lhs, rhs)
                | Self::Pow(lhs, rhs)
                | Self::Binom(lhs, rhs) => vec![lhs, rhs],
            Self::Call(_, arg) => vec![arg],
            Self::Derivative(expr, _) => vec![expr],
            Self::Sum(sum) => vec![&sum.body, &sum.min, &sum.max],
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Returns the names this expression refers to.
    ///
    /// Besides free variables, this includes the iterator of every summation and the variable of
    /// every derivative node, even though those are bound names.
    pub fn contained_variables(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        for expr in self.post_order_iter() {
            match expr {
                Self::Variable(name) | Self::Derivative(_, name) => {
                    names.insert(name.clone());
                },
                Self::Sum(sum) => {
                    names.insert(sum.iter.clone());
                },
                _ => (),
            }
        }
        names
    }

    /// Returns true if the expression refers to the given name. See
    /// [`Expr::contained_variables`] for what counts as a reference.
    pub fn contains_variable(&self, name: &str) -> bool {
        self.post_order_iter().any(|expr| match expr {
            Self::Variable(var) | Self::Derivative(_, var) => var == name,
            Self::Sum(sum) => sum.iter == name,
            _ => false,
        })
    }
}

/// Adds two [`Expr`]s together. No simplification is done.
impl Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::Add(Box::new(self), Box::new(rhs))
    }
}

/// Subtracts two [`Expr`]s. No simplification is done.
impl Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::Sub(Box::new(self), Box::new(rhs))
    }
}

/// Multiplies two [`Expr`]s together. No simplification is done.
impl Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::Mul(Box::new(self), Box::new(rhs))
    }
}

/// Divides two [`Expr`]s. No simplification is done.
impl Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self::Div(Box::new(self), Box::new(rhs))
    }
}

/// Multiplies this expression by -1. No simplification is done, except for the case where the
/// expression is a literal, in which case the number is negated.
impl Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Value(value) => Self::Value(-value),
            expr => Self::Value(-1.0) * expr,
        }
    }
}
