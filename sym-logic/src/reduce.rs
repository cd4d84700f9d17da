//! Simplification of boolean expressions.
//!
//! Children are reduced first, then a handful of rules are tried on the node itself: constant
//! folding, identity and annihilator constants, double negation, and operators applied to two
//! equal operands. Every rule preserves the truth table of the expression.

use crate::{assignment::Assignment, node::Node};
use log::trace;

/// Logs a rule that rewrote a node, and returns the rewritten node.
fn fired(rule: &str, result: Node) -> Node {
    trace!("{}: -> {}", rule, result);
    result
}

/// `not(node)`, folding constants and double negations.
fn negate(node: Node) -> Node {
    match node {
        Node::Const(value) => fired("not_const", Node::Const(!value)),
        Node::Not(inner) => fired("double_negation", *inner),
        node => !node,
    }
}

fn and(lhs: Node, rhs: Node) -> Node {
    match (lhs, rhs) {
        (Node::Const(false), _) | (_, Node::Const(false)) => fired("and_false", Node::Const(false)),
        (Node::Const(true), other) | (other, Node::Const(true)) => fired("and_true", other),
        (lhs, rhs) if lhs.is_equal(&rhs) => fired("and_self", lhs),
        (lhs, rhs) => lhs & rhs,
    }
}

fn or(lhs: Node, rhs: Node) -> Node {
    match (lhs, rhs) {
        (Node::Const(true), _) | (_, Node::Const(true)) => fired("or_true", Node::Const(true)),
        (Node::Const(false), other) | (other, Node::Const(false)) => fired("or_false", other),
        (lhs, rhs) if lhs.is_equal(&rhs) => fired("or_self", lhs),
        (lhs, rhs) => lhs | rhs,
    }
}

fn xor(lhs: Node, rhs: Node) -> Node {
    match (lhs, rhs) {
        (Node::Const(false), other) | (other, Node::Const(false)) => fired("xor_false", other),
        (Node::Const(true), other) | (other, Node::Const(true)) => {
            let result = negate(other);
            fired("xor_true", result)
        },
        (lhs, rhs) if lhs.is_equal(&rhs) => fired("xor_self", Node::Const(false)),
        (lhs, rhs) => lhs ^ rhs,
    }
}

fn implies(lhs: Node, rhs: Node) -> Node {
    match (lhs, rhs) {
        (Node::Const(false), _) | (_, Node::Const(true)) => fired("implies_vacuous", Node::Const(true)),
        (Node::Const(true), rhs) => fired("implies_true", rhs),
        (lhs, Node::Const(false)) => {
            let result = negate(lhs);
            fired("implies_false", result)
        },
        (lhs, rhs) if lhs.is_equal(&rhs) => fired("implies_self", Node::Const(true)),
        (lhs, rhs) => Node::implies(lhs, rhs),
    }
}

fn iff(lhs: Node, rhs: Node) -> Node {
    match (lhs, rhs) {
        (Node::Const(true), other) | (other, Node::Const(true)) => fired("iff_true", other),
        (Node::Const(false), other) | (other, Node::Const(false)) => {
            let result = negate(other);
            fired("iff_false", result)
        },
        (lhs, rhs) if lhs.is_equal(&rhs) => fired("iff_self", Node::Const(true)),
        (lhs, rhs) => Node::iff(lhs, rhs),
    }
}

impl Node {
    /// Simplifies the expression, replacing the variables bound in the assignment with their
    /// values.
    ///
    /// Variables without a value are left in place, so reduction never fails. The result has
    /// the same truth table as `self` under every assignment that extends the given one.
    pub fn reduce(&self, assignment: &Assignment) -> Node {
        match self {
            Self::Const(value) => Self::Const(*value),
            Self::Var(name) => assignment.get(name).map_or_else(|| self.clone(), Self::Const),
            Self::Not(inner) => negate(inner.reduce(assignment)),
            Self::And(lhs, rhs) => and(lhs.reduce(assignment), rhs.reduce(assignment)),
            Self::Or(lhs, rhs) => or(lhs.reduce(assignment), rhs.reduce(assignment)),
            Self::Xor(lhs, rhs) => xor(lhs.reduce(assignment), rhs.reduce(assignment)),
            Self::Implies(lhs, rhs) => implies(lhs.reduce(assignment), rhs.reduce(assignment)),
            Self::Iff(lhs, rhs) => iff(lhs.reduce(assignment), rhs.reduce(assignment)),
            Self::Nand(lhs, rhs) => match and(lhs.reduce(assignment), rhs.reduce(assignment)) {
                Self::And(lhs, rhs) => Self::Nand(lhs, rhs),
                other => negate(other),
            },
            Self::Nor(lhs, rhs) => match or(lhs.reduce(assignment), rhs.reduce(assignment)) {
                Self::Or(lhs, rhs) => Self::Nor(lhs, rhs),
                other => negate(other),
            },
        }
    }
}
