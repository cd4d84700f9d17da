use crate::node::Node;

/// Compares the operands of a commutative operator in both orders.
fn commutative(lhs: (&Node, &Node), rhs: (&Node, &Node)) -> bool {
    lhs.0.is_equal(rhs.0) && lhs.1.is_equal(rhs.1)
        || lhs.0.is_equal(rhs.1) && lhs.1.is_equal(rhs.0)
}

impl Node {
    /// Returns true if the two expressions are the same, up to the order of the operands of
    /// commutative operators (everything except `>`).
    ///
    /// This never reports two different expressions as equal, but it does not detect every
    /// pair of equivalent expressions either. Use [`Node::equivalent`] to compare truth tables.
    pub fn is_equal(&self, other: &Node) -> bool {
        match (self, other) {
            (Self::Const(lhs), Self::Const(rhs)) => lhs == rhs,
            (Self::Var(lhs), Self::Var(rhs)) => lhs == rhs,
            (Self::Not(lhs), Self::Not(rhs)) => lhs.is_equal(rhs),
            (Self::Implies(lhs_a, lhs_b), Self::Implies(rhs_a, rhs_b)) => {
                lhs_a.is_equal(rhs_a) && lhs_b.is_equal(rhs_b)
            },
            (Self::And(lhs_a, lhs_b), Self::And(rhs_a, rhs_b))
            | (Self::Or(lhs_a, lhs_b), Self::Or(rhs_a, rhs_b))
            | (Self::Xor(lhs_a, lhs_b), Self::Xor(rhs_a, rhs_b))
            | (Self::Iff(lhs_a, lhs_b), Self::Iff(rhs_a, rhs_b))
            | (Self::Nand(lhs_a, lhs_b), Self::Nand(rhs_a, rhs_b))
            | (Self::Nor(lhs_a, lhs_b), Self::Nor(rhs_a, rhs_b)) => {
                commutative((&**lhs_a, &**lhs_b), (&**rhs_a, &**rhs_b))
            },
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a() -> Node {
        Node::var("a")
    }

    fn b() -> Node {
        Node::var("b")
    }

    #[test]
    fn commutative_operators() {
        assert!((a() & b()).is_equal(&(b() & a())));
        assert!((a() ^ (b() | a())).is_equal(&((a() | b()) ^ a())));
        assert!(Node::nor(a(), b()).is_equal(&Node::nor(b(), a())));
    }

    #[test]
    fn implication_is_ordered() {
        assert!(Node::implies(a(), b()).is_equal(&Node::implies(a(), b())));
        assert!(!Node::implies(a(), b()).is_equal(&Node::implies(b(), a())));
    }

    #[test]
    fn different_operators() {
        assert!(!(a() & b()).is_equal(&(a() | b())));
        assert!(!Node::nand(a(), b()).is_equal(&!(a() & b())));
    }
}
