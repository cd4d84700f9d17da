//! The [`Registry`] of boolean expressions.

use crate::node::Node;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use sym_parser::registry::{ArgumentError, Function, Registry};

/// Operator levels of boolean expressions, loosest first.
const LOGIC_LEVELS: &[&[char]] = &[&['='], &['>'], &['|', '^'], &['&']];

fn unpack<const N: usize>(args: Vec<Node>) -> Result<[Node; N], ArgumentError> {
    args.try_into().map_err(|_| ArgumentError {
        index: 0,
        reason: "wrong number of arguments",
    })
}

static LOGIC_FUNCTIONS: Lazy<HashMap<&'static str, Function<Node>>> = Lazy::new(|| {
    let mut funcs = HashMap::new();

    funcs.insert("not", Function::new(1, |args| {
        let [arg] = unpack(args)?;
        Ok(!arg)
    }));

    funcs.insert("nand", Function::new(2, |args| {
        let [lhs, rhs] = unpack(args)?;
        Ok(Node::nand(lhs, rhs))
    }));

    funcs.insert("nor", Function::new(2, |args| {
        let [lhs, rhs] = unpack(args)?;
        Ok(Node::nor(lhs, rhs))
    }));

    funcs
});

/// The registry of boolean expressions, producing [`Node`] trees.
///
/// - Operators: `=` (if and only if, loosest), then `>` (implies), then `|` (or) and `^`
///   (exclusive or), then `&` (and, tightest).
/// - Functions: `not(a)`, `nand(a, b)`, `nor(a, b)`.
/// - Literals: `0` and `1`, or the names `false` and `true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Logic;

impl Registry for Logic {
    type Node = Node;

    fn levels(&self) -> &[&[char]] {
        LOGIC_LEVELS
    }

    fn operator(&self, op: char) -> Option<fn(Node, Node) -> Node> {
        let build: fn(Node, Node) -> Node = match op {
            '=' => Node::iff,
            '>' => Node::implies,
            '|' => |lhs, rhs| lhs | rhs,
            '^' => |lhs, rhs| lhs ^ rhs,
            '&' => |lhs, rhs| lhs & rhs,
            _ => return None,
        };
        Some(build)
    }

    fn function(&self, name: &str) -> Option<&Function<Node>> {
        LOGIC_FUNCTIONS.get(name)
    }

    fn function_names(&self) -> Vec<&str> {
        let mut names = LOGIC_FUNCTIONS.keys().copied().collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    fn variable(&self, name: &str) -> Node {
        match name {
            "true" => Node::Const(true),
            "false" => Node::Const(false),
            _ => Node::var(name),
        }
    }

    fn value(&self, text: &str) -> Option<Node> {
        match text {
            "0" => Some(Node::Const(false)),
            "1" => Some(Node::Const(true)),
            _ => None,
        }
    }
}
