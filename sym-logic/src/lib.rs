//! Boolean logic expressions.
//!
//! This crate is the boolean counterpart of `sym-expr`: expressions are parsed with the same
//! `sym-parser` machinery, using the [`Logic`] registry, into immutable [`Node`] trees.
//!
//! | Syntax       | Meaning          |
//! | ------------ | ---------------- |
//! | `a = b`      | `a` if and only if `b` |
//! | `a > b`      | `a` implies `b`  |
//! | `a \| b`     | `a` or `b`       |
//! | `a ^ b`      | `a` xor `b`      |
//! | `a & b`      | `a` and `b`      |
//! | `not(a)`     | not `a`          |
//! | `nand(a, b)` | not (`a` and `b`) |
//! | `nor(a, b)`  | not (`a` or `b`) |
//! | `0`, `1`, `false`, `true` | constants |
//!
//! Operators are listed from loosest to tightest; `|` and `^` share a level. Every operator is
//! left-associative.
//!
//! ```
//! use sym_logic::{parse, Assignment};
//!
//! let node = parse("a & b > a").unwrap();
//! assert!(node.is_tautology().unwrap());
//! assert_eq!(node.eval(&Assignment::from([("a", false), ("b", true)])), Ok(true));
//! ```

pub mod assignment;
pub mod equality;
pub mod error;
pub mod eval;
pub mod fmt;
pub mod node;
pub mod reduce;
pub mod registry;
pub mod table;

pub use assignment::Assignment;
pub use error::Error;
pub use node::{Node, Precedence};
pub use registry::Logic;
pub use table::{Row, TruthTable, MAX_TABLE_VARIABLES};

/// Parses a boolean expression.
pub fn parse(input: &str) -> Result<Node, sym_parser::Error> {
    sym_parser::parse_with(input, &Logic)
}
