//! Truth tables, and the questions that can be answered by enumerating every assignment.

use crate::{assignment::Assignment, error::Error, node::Node};
use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};

/// The largest number of variables for which every assignment is enumerated.
pub const MAX_TABLE_VARIABLES: usize = 20;

/// One row of a [`TruthTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// The value of each variable, in the order of [`TruthTable::variables`].
    pub values: Vec<bool>,

    /// The value of the expression.
    pub result: bool,
}

/// The value of an expression under every assignment of its variables.
///
/// Rows are ordered by counting in binary, with the first variable as the most significant bit:
/// the first row assigns `false` to every variable and the last assigns `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    /// The variables of the expression, sorted by name.
    pub variables: Vec<String>,

    /// One row per assignment.
    pub rows: Vec<Row>,
}

impl Display for TruthTable {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for name in &self.variables {
            write!(f, "{} ", name)?;
        }
        writeln!(f, "| result")?;

        for row in &self.rows {
            for (name, value) in self.variables.iter().zip(&row.values) {
                write!(f, "{:<width$} ", u8::from(*value), width = name.len())?;
            }
            writeln!(f, "| {}", u8::from(row.result))?;
        }
        Ok(())
    }
}

/// Iterates over every assignment of the given variables, in truth table order.
fn assignments(variables: &[String]) -> Result<impl Iterator<Item = Assignment> + '_, Error> {
    if variables.len() > MAX_TABLE_VARIABLES {
        return Err(Error::TooManyVariables {
            count: variables.len(),
            max: MAX_TABLE_VARIABLES,
        });
    }

    let count = variables.len();
    Ok((0..1u32 << count).map(move |bits| {
        variables.iter()
            .enumerate()
            .map(|(index, name)| (name.as_str(), bits >> (count - 1 - index) & 1 == 1))
            .collect()
    }))
}

impl Node {
    /// Returns the sorted variables of the expression.
    fn variable_list(&self) -> Vec<String> {
        self.contained_variables().into_iter().collect()
    }

    /// Evaluates the expression under every assignment of its variables.
    ///
    /// Fails if the expression has more than [`MAX_TABLE_VARIABLES`] variables.
    pub fn truth_table(&self) -> Result<TruthTable, Error> {
        let variables = self.variable_list();
        let rows = assignments(&variables)?
            .map(|assignment| {
                let values = variables.iter()
                    .map(|name| assignment.get(name).unwrap_or_default())
                    .collect();
                Ok(Row { values, result: self.eval(&assignment)? })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(TruthTable { variables, rows })
    }

    /// Returns true if the expression is true under every assignment.
    pub fn is_tautology(&self) -> Result<bool, Error> {
        for assignment in assignments(&self.variable_list())? {
            if !self.eval(&assignment)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns true if the expression is false under every assignment.
    pub fn is_contradiction(&self) -> Result<bool, Error> {
        Ok(!self.is_satisfiable()?)
    }

    /// Returns true if the expression is true under at least one assignment.
    pub fn is_satisfiable(&self) -> Result<bool, Error> {
        for assignment in assignments(&self.variable_list())? {
            if self.eval(&assignment)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Returns true if the two expressions have the same value under every assignment of the
    /// variables of both.
    pub fn equivalent(&self, other: &Node) -> Result<bool, Error> {
        let variables = self.contained_variables()
            .into_iter()
            .chain(other.contained_variables())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect::<Vec<_>>();

        for assignment in assignments(&variables)? {
            if self.eval(&assignment)? != other.eval(&assignment)? {
                return Ok(false);
            }
        }
        Ok(true)
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

    #[test]
    fn table_order() {
        let table = Node::implies(a(), b()).truth_table().unwrap();
        assert_eq!(table.variables, vec!["a", "b"]);
        assert_eq!(
            table.rows.iter().map(|row| (row.values.clone(), row.result)).collect::<Vec<_>>(),
            vec![
                (vec![false, false], true),
                (vec![false, true], true),
                (vec![true, false], false),
                (vec![true, true], true),
            ],
        );
    }

    #[test]
    fn constant_table() {
        let table = Node::Const(true).truth_table().unwrap();
        assert!(table.variables.is_empty());
        assert_eq!(table.rows, vec![Row { values: vec![], result: true }]);
    }

    #[test]
    fn display() {
        let table = (Node::var("ab") & b()).truth_table().unwrap();
        assert_eq!(
            table.to_string(),
            "ab b | result\n0  0 | 0\n0  1 | 0\n1  0 | 0\n1  1 | 1\n",
        );
    }

    #[test]
    fn classification() {
        assert!((a() | !a()).is_tautology().unwrap());
        assert!((a() & !a()).is_contradiction().unwrap());
        assert!((a() & b()).is_satisfiable().unwrap());
        assert!(!(a() & b()).is_tautology().unwrap());
        assert!(!(a() ^ b()).is_contradiction().unwrap());
    }

    #[test]
    fn de_morgan() {
        assert!(Node::nand(a(), b()).equivalent(&(!a() | !b())).unwrap());
        assert!(Node::nor(a(), b()).equivalent(&(!a() & !b())).unwrap());
        assert!(!Node::implies(a(), b()).equivalent(&Node::implies(b(), a())).unwrap());
    }

    #[test]
    fn too_many_variables() {
        let node = (0..=MAX_TABLE_VARIABLES)
            .map(|index| Node::var(format!("x{}", index)))
            .reduce(|lhs, rhs| lhs | rhs)
            .unwrap();
        assert_eq!(
            node.is_tautology().unwrap_err(),
            Error::TooManyVariables { count: MAX_TABLE_VARIABLES + 1, max: MAX_TABLE_VARIABLES },
        );
    }
}
