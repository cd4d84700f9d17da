use crate::{assignment::Assignment, error::Error, node::Node};

impl Node {
    /// Evaluates the expression, looking up variables in the assignment.
    ///
    /// Both operands of every operator are evaluated, so an unbound variable is always reported,
    /// even where the other operand alone would decide the result.
    pub fn eval(&self, assignment: &Assignment) -> Result<bool, Error> {
        Ok(match self {
            Self::Const(value) => *value,
            Self::Var(name) => assignment.get(name)
                .ok_or_else(|| Error::UnboundVariable { name: name.clone() })?,
            Self::Not(inner) => !inner.eval(assignment)?,
            Self::And(lhs, rhs) => {
                let (lhs, rhs) = (lhs.eval(assignment)?, rhs.eval(assignment)?);
                lhs && rhs
            },
            Self::Or(lhs, rhs) => {
                let (lhs, rhs) = (lhs.eval(assignment)?, rhs.eval(assignment)?);
                lhs || rhs
            },
            Self::Xor(lhs, rhs) => lhs.eval(assignment)? != rhs.eval(assignment)?,
            Self::Implies(lhs, rhs) => {
                let (lhs, rhs) = (lhs.eval(assignment)?, rhs.eval(assignment)?);
                !lhs || rhs
            },
            Self::Iff(lhs, rhs) => lhs.eval(assignment)? == rhs.eval(assignment)?,
            Self::Nand(lhs, rhs) => {
                let (lhs, rhs) = (lhs.eval(assignment)?, rhs.eval(assignment)?);
                !(lhs && rhs)
            },
            Self::Nor(lhs, rhs) => {
                let (lhs, rhs) = (lhs.eval(assignment)?, rhs.eval(assignment)?);
                !(lhs || rhs)
            },
        })
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

    /// Evaluates the node for every assignment of `a` and `b`, in the order 00, 01, 10, 11.
    fn column(node: Node) -> [bool; 4] {
        [(false, false), (false, true), (true, false), (true, true)]
            .map(|(x, y)| node.eval(&Assignment::from([("a", x), ("b", y)])).unwrap())
    }

    #[test]
    fn operators() {
        assert_eq!(column(a() & b()), [false, false, false, true]);
        assert_eq!(column(a() | b()), [false, true, true, true]);
        assert_eq!(column(a() ^ b()), [false, true, true, false]);
        assert_eq!(column(Node::implies(a(), b())), [true, true, false, true]);
        assert_eq!(column(Node::iff(a(), b())), [true, false, false, true]);
        assert_eq!(column(Node::nand(a(), b())), [true, true, true, false]);
        assert_eq!(column(Node::nor(a(), b())), [true, false, false, false]);
        assert_eq!(column(!a()), [true, true, false, false]);
    }

    #[test]
    fn unbound_variable() {
        let err = (Node::Const(false) & b()).eval(&Assignment::new()).unwrap_err();
        assert_eq!(err, Error::UnboundVariable { name: "b".to_string() });
    }
}
