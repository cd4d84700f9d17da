use crate::expr::{Expr, Func, Precedence};
use std::fmt::{Display, Formatter, Result};
use super::{needs_parens, Side};

/// Values with a LaTeX rendering.
///
/// Implementors write themselves with [`Latex::fmt_latex`]. [`Latex::as_display`] adapts the
/// value to any API expecting [`Display`].
pub trait Latex {
    fn fmt_latex(&self, f: &mut Formatter) -> Result;

    fn as_display(&self) -> LatexFormatter<'_, Self> {
        LatexFormatter(self)
    }
}

/// Displays the LaTeX rendering of the wrapped value.
pub struct LatexFormatter<'a, T: ?Sized>(&'a T);

impl<T: Latex + ?Sized> Display for LatexFormatter<'_, T> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.0.fmt_latex(f)
    }
}

/// Writes an expression wrapped in `\left(` and `\right)`.
fn fmt_paren(f: &mut Formatter, expr: &Expr) -> Result {
    write!(f, "\\left(")?;
    expr.fmt_latex(f)?;
    write!(f, "\\right)")
}

/// Writes the operand of a binary operator, adding parentheses if needed.
fn fmt_operand(f: &mut Formatter, parent: Precedence, child: &Expr, side: Side) -> Result {
    if needs_parens(parent, child, side) {
        fmt_paren(f, child)
    } else {
        child.fmt_latex(f)
    }
}

/// Helper to format powers. The exponent is grouped with braces, so it never needs parentheses.
fn fmt_pow(f: &mut Formatter, base: &Expr, exponent: &Expr) -> Result {
    if base.precedence() <= Precedence::Exp {
        fmt_paren(f, base)?;
    } else {
        base.fmt_latex(f)?;
    }
    write!(f, "^{{")?;
    exponent.fmt_latex(f)?;
    write!(f, "}}")
}

/// Writes a call to a function of one argument.
fn fmt_call(f: &mut Formatter, func: Func, arg: &Expr) -> Result {
    match func {
        Func::Sqrt => {
            write!(f, "\\sqrt{{")?;
            arg.fmt_latex(f)?;
            write!(f, "}}")
        },
        Func::Conj => {
            write!(f, "\\overline{{")?;
            arg.fmt_latex(f)?;
            write!(f, "}}")
        },
        Func::Factorial => {
            if arg.precedence() < Precedence::Atom {
                fmt_paren(f, arg)?;
            } else {
                arg.fmt_latex(f)?;
            }
            write!(f, "!")
        },
        Func::Sin | Func::Cos | Func::Sinh | Func::Cosh | Func::Ln | Func::Exp => {
            write!(f, "\\{}", func.name())?;
            fmt_paren(f, arg)
        },
    }
}

impl Latex for Expr {
    fn fmt_latex(&self, f: &mut Formatter) -> Result {
        let precedence = self.precedence();
        match self {
            Self::Value(value) => write!(f, "{}", value),
            Self::Variable(name) if name.chars().count() > 1 => write!(f, "\\mathrm{{{}}}", name),
            Self::Variable(name) => write!(f, "{}", name),
            Self::Add(lhs, rhs) => {
                fmt_operand(f, precedence, lhs, Side::Left)?;
                write!(f, " + ")?;
                fmt_operand(f, precedence, rhs, Side::Right)
            },
            Self::Sub(lhs, rhs) => {
                fmt_operand(f, precedence, lhs, Side::Left)?;
                write!(f, " - ")?;
                fmt_operand(f, precedence, rhs, Side::Right)
            },
            Self::Mul(lhs, rhs) => {
                fmt_operand(f, precedence, lhs, Side::Left)?;
                write!(f, " \\cdot ")?;
                fmt_operand(f, precedence, rhs, Side::Right)
            },
            Self::Div(lhs, rhs) => {
                write!(f, "\\frac{{")?;
                lhs.fmt_latex(f)?;
                write!(f, "}}{{")?;
                rhs.fmt_latex(f)?;
                write!(f, "}}")
            },
            Self::Pow(lhs, rhs) => fmt_pow(f, lhs, rhs),
            Self::Call(func, arg) => fmt_call(f, *func, arg),
            Self::Binom(n, r) => {
                write!(f, "\\binom{{")?;
                n.fmt_latex(f)?;
                write!(f, "}}{{")?;
                r.fmt_latex(f)?;
                write!(f, "}}")
            },
            Self::Derivative(expr, var) => {
                write!(f, "\\frac{{d}}{{d{}}}", var)?;
                fmt_paren(f, expr)
            },
            Self::Sum(sum) => {
                write!(f, "\\sum_{{{}=", sum.iter)?;
                sum.min.fmt_latex(f)?;
                write!(f, "}}^{{")?;
                sum.max.fmt_latex(f)?;
                write!(f, "}} ")?;
                if sum.body.precedence() <= Precedence::Term {
                    fmt_paren(f, &sum.body)
                } else {
                    sum.body.fmt_latex(f)
                }
            },
        }
    }
}

impl Expr {
    /// Renders the expression as LaTeX.
    pub fn to_latex(&self) -> String {
        self.as_display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::var("x")
    }

    #[test]
    fn fraction_and_power() {
        // 1 / x + 5 / x^2
        let e = Expr::ONE / x() + Expr::Value(5.0) / x().pow(Expr::Value(2.0));
        assert_eq!(e.to_latex(), "\\frac{1}{x} + \\frac{5}{x^{2}}");
    }

    #[test]
    fn nested_power_base() {
        let e = x().pow(Expr::Value(2.0)).pow(Expr::Value(3.0));
        assert_eq!(e.to_latex(), "\\left(x^{2}\\right)^{3}");
    }

    #[test]
    fn functions() {
        assert_eq!(Expr::call(Func::Sqrt, Expr::Value(3.0) * x()).to_latex(), "\\sqrt{3 \\cdot x}");
        assert_eq!(Expr::call(Func::Sin, x()).to_latex(), "\\sin\\left(x\\right)");
        assert_eq!(Expr::call(Func::Factorial, Expr::var("n")).to_latex(), "n!");
        assert_eq!(Expr::call(Func::Factorial, Expr::var("n") + Expr::ONE).to_latex(), "\\left(n + 1\\right)!");
        assert_eq!(Expr::binom(Expr::var("n"), Expr::Value(2.0)).to_latex(), "\\binom{n}{2}");
    }

    #[test]
    fn sum_and_derivative() {
        let e = Expr::sum(Expr::var("i") + Expr::ONE, "i", Expr::ONE, Expr::var("n"));
        assert_eq!(e.to_latex(), "\\sum_{i=1}^{n} \\left(i + 1\\right)");

        let e = Expr::derivative(x().pow(Expr::Value(2.0)), "x");
        assert_eq!(e.to_latex(), "\\frac{d}{dx}\\left(x^{2}\\right)");
    }

    #[test]
    fn long_variable_names() {
        assert_eq!((Expr::var("rate") * x()).to_latex(), "\\mathrm{rate} \\cdot x");
    }
}
