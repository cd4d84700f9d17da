use crate::node::{Node, Precedence};
use std::fmt::{self, Display, Formatter};
use sym_expr::Latex;

/// Which operand of a binary operator is being written.
#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// Returns true if `child` needs parentheses as the operand of an operator with precedence
/// `parent`. Every operator is left-associative, so a right operand of the same precedence
/// needs them.
fn needs_parens(parent: Precedence, child: &Node, side: Side) -> bool {
    match side {
        Side::Left => child.precedence() < parent,
        Side::Right => child.precedence() <= parent,
    }
}

/// The plain and LaTeX symbols of an infix operator.
fn symbol(node: &Node) -> Option<(&'static str, &'static str)> {
    match node {
        Node::And(..) => Some(("&", "\\land")),
        Node::Or(..) => Some(("|", "\\lor")),
        Node::Xor(..) => Some(("^", "\\oplus")),
        Node::Implies(..) => Some((">", "\\rightarrow")),
        Node::Iff(..) => Some(("=", "\\leftrightarrow")),
        _ => None,
    }
}

fn fmt_operand(f: &mut Formatter, parent: Precedence, child: &Node, side: Side) -> fmt::Result {
    if needs_parens(parent, child, side) {
        write!(f, "({})", child)
    } else {
        write!(f, "{}", child)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Const(value) => write!(f, "{}", u8::from(*value)),
            Self::Var(name) => write!(f, "{}", name),
            Self::Not(inner) => write!(f, "not({})", inner),
            Self::Nand(lhs, rhs) => write!(f, "nand({}, {})", lhs, rhs),
            Self::Nor(lhs, rhs) => write!(f, "nor({}, {})", lhs, rhs),
            Self::And(lhs, rhs)
            | Self::Or(lhs, rhs)
            | Self::Xor(lhs, rhs)
            | Self::Implies(lhs, rhs)
            | Self::Iff(lhs, rhs) => {
                let (op, _) = symbol(self).unwrap_or_default();
                fmt_operand(f, self.precedence(), lhs, Side::Left)?;
                write!(f, " {} ", op)?;
                fmt_operand(f, self.precedence(), rhs, Side::Right)
            },
        }
    }
}

/// Writes a node wrapped in `\left(` and `\right)` if `wrap` is true.
fn fmt_latex_group(f: &mut Formatter, node: &Node, wrap: bool) -> fmt::Result {
    if wrap {
        write!(f, "\\left(")?;
        node.fmt_latex(f)?;
        write!(f, "\\right)")
    } else {
        node.fmt_latex(f)
    }
}

/// Writes a binary operator and its operands.
fn fmt_latex_binary(
    f: &mut Formatter,
    precedence: Precedence,
    op: &str,
    lhs: &Node,
    rhs: &Node,
) -> fmt::Result {
    fmt_latex_group(f, lhs, needs_parens(precedence, lhs, Side::Left))?;
    write!(f, " {} ", op)?;
    fmt_latex_group(f, rhs, needs_parens(precedence, rhs, Side::Right))
}

impl Latex for Node {
    fn fmt_latex(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Const(true) => write!(f, "\\top"),
            Self::Const(false) => write!(f, "\\bot"),
            Self::Var(name) if name.chars().count() > 1 => write!(f, "\\mathrm{{{}}}", name),
            Self::Var(name) => write!(f, "{}", name),
            Self::Not(inner) => {
                write!(f, "\\lnot ")?;
                fmt_latex_group(f, inner, inner.precedence() < Precedence::Atom)
            },
            Self::Nand(lhs, rhs) => {
                write!(f, "\\overline{{")?;
                fmt_latex_binary(f, Precedence::And, "\\land", lhs, rhs)?;
                write!(f, "}}")
            },
            Self::Nor(lhs, rhs) => {
                write!(f, "\\overline{{")?;
                fmt_latex_binary(f, Precedence::Or, "\\lor", lhs, rhs)?;
                write!(f, "}}")
            },
            Self::And(lhs, rhs)
            | Self::Or(lhs, rhs)
            | Self::Xor(lhs, rhs)
            | Self::Implies(lhs, rhs)
            | Self::Iff(lhs, rhs) => {
                let (_, op) = symbol(self).unwrap_or_default();
                fmt_latex_binary(f, self.precedence(), op, lhs, rhs)
            },
        }
    }
}

impl Node {
    /// Renders the expression as LaTeX.
    pub fn to_latex(&self) -> String {
        self.as_display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn a() -> Node {
        Node::var("a")
    }

    fn b() -> Node {
        Node::var("b")
    }

    fn c() -> Node {
        Node::var("c")
    }

    #[test]
    fn plain() {
        assert_eq!((a() & b() | c()).to_string(), "a & b | c");
        assert_eq!((a() & (b() | c())).to_string(), "a & (b | c)");
        assert_eq!(Node::implies(a(), Node::implies(b(), c())).to_string(), "a > (b > c)");
        assert_eq!(Node::implies(Node::implies(a(), b()), c()).to_string(), "a > b > c");
        assert_eq!((a() | (b() ^ c())).to_string(), "a | (b ^ c)");
        assert_eq!(Node::iff(!a(), Node::nand(b(), Node::Const(true))).to_string(), "not(a) = nand(b, 1)");
    }

    #[test]
    fn latex() {
        assert_eq!((a() & (b() | c())).to_latex(), "a \\land \\left(b \\lor c\\right)");
        assert_eq!((!(a() ^ b())).to_latex(), "\\lnot \\left(a \\oplus b\\right)");
        assert_eq!(Node::nor(a(), Node::var("rain")).to_latex(), "\\overline{a \\lor \\mathrm{rain}}");
        assert_eq!(Node::implies(Node::Const(false), Node::Const(true)).to_latex(), "\\bot \\rightarrow \\top");
    }
}
