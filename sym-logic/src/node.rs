use std::collections::BTreeSet;
use std::ops::{BitAnd, BitOr, BitXor, Not};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The precedence of a node, from loosest to tightest. Only used when printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// `a = b`
    Iff,

    /// `a > b`
    Implies,

    /// `a | b` and `a ^ b`
    Or,

    /// `a & b`
    And,

    /// Constants, variables, and anything written like a function call.
    Atom,
}

/// A node of a boolean expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node {
    /// `true` or `false`, written `1` or `0`.
    Const(bool),

    /// A variable, such as `a`.
    Var(String),

    /// `not(a)`
    Not(Box<Node>),

    /// `a & b`
    And(Box<Node>, Box<Node>),

    /// `a | b`
    Or(Box<Node>, Box<Node>),

    /// `a ^ b`
    Xor(Box<Node>, Box<Node>),

    /// `a > b`
    Implies(Box<Node>, Box<Node>),

    /// `a = b`
    Iff(Box<Node>, Box<Node>),

    /// `nand(a, b)`
    Nand(Box<Node>, Box<Node>),

    /// `nor(a, b)`
    Nor(Box<Node>, Box<Node>),
}

impl Node {
    /// Creates a variable.
    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    /// `lhs > rhs`
    pub fn implies(lhs: Self, rhs: Self) -> Self {
        Self::Implies(Box::new(lhs), Box::new(rhs))
    }

    /// `lhs = rhs`
    pub fn iff(lhs: Self, rhs: Self) -> Self {
        Self::Iff(Box::new(lhs), Box::new(rhs))
    }

    /// `nand(lhs, rhs)`
    pub fn nand(lhs: Self, rhs: Self) -> Self {
        Self::Nand(Box::new(lhs), Box::new(rhs))
    }

    /// `nor(lhs, rhs)`
    pub fn nor(lhs: Self, rhs: Self) -> Self {
        Self::Nor(Box::new(lhs), Box::new(rhs))
    }

    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Iff(..) => Precedence::Iff,
            Self::Implies(..) => Precedence::Implies,
            Self::Or(..) | Self::Xor(..) => Precedence::Or,
            Self::And(..) => Precedence::And,
            Self::Const(_) | Self::Var(_) | Self::Not(_) | Self::Nand(..) | Self::Nor(..) => {
                Precedence::Atom
            },
        }
    }

    /// Returns the value of the node if it is a constant.
    pub fn as_const(&self) -> Option<bool> {
        match self {
            Self::Const(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the direct children of this node.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Self::Const(_) | Self::Var(_) => Vec::new(),
            Self::Not(inner) => vec![&**inner],
            Self::And(lhs, rhs)
            | Self::Or(lhs, rhs)
            | Self::Xor(lhs, rhs)
            | Self::Implies(lhs, rhs)
            | Self::Iff(lhs, rhs)
            | Self::Nand(lhs, rhs)
            | Self::Nor(lhs, rhs) => vec![&**lhs, &**rhs],
        }
    }

    /// Returns the names of every variable in the expression, in sorted order.
    pub fn contained_variables(&self) -> BTreeSet<String> {
        let mut vars = BTreeSet::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if let Self::Var(name) = node {
                vars.insert(name.clone());
            }
            stack.extend(node.children());
        }
        vars
    }
}

impl Not for Node {
    type Output = Node;

    fn not(self) -> Node {
        Node::Not(Box::new(self))
    }
}

impl BitAnd for Node {
    type Output = Node;

    fn bitand(self, rhs: Node) -> Node {
        Node::And(Box::new(self), Box::new(rhs))
    }
}

impl BitOr for Node {
    type Output = Node;

    fn bitor(self, rhs: Node) -> Node {
        Node::Or(Box::new(self), Box::new(rhs))
    }
}

impl BitXor for Node {
    type Output = Node;

    fn bitxor(self, rhs: Node) -> Node {
        Node::Xor(Box::new(self), Box::new(rhs))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn operators_build_nodes() {
        let node = Node::var("a") & !Node::var("b");
        assert_eq!(
            node,
            Node::And(
                Box::new(Node::var("a")),
                Box::new(Node::Not(Box::new(Node::var("b")))),
            ),
        );
    }

    #[test]
    fn contained_variables() {
        let node = Node::implies(Node::var("p") | Node::var("q"), Node::nand(Node::var("r"), Node::var("p")));
        assert_eq!(
            node.contained_variables().into_iter().collect::<Vec<_>>(),
            vec!["p", "q", "r"],
        );
        assert!(Node::Const(true).contained_variables().is_empty());
    }
}
