use std::fmt::{self, Display, Formatter};

/// An error that can occur while evaluating a boolean expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A variable was referenced that has no value in the assignment.
    UnboundVariable {
        /// The name of the variable.
        name: String,
    },

    /// The expression has too many variables to enumerate every assignment.
    TooManyVariables {
        /// The number of variables in the expression.
        count: usize,

        /// The largest number of variables allowed.
        max: usize,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundVariable { name } => write!(f, "`{}` has no value", name),
            Self::TooManyVariables { count, max } => write!(
                f,
                "the expression has {} variables, but truth tables are limited to {}",
                count,
                max,
            ),
        }
    }
}

impl std::error::Error for Error {}
