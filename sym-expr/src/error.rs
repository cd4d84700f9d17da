use std::fmt::{self, Display, Formatter};

/// An error that can occur while evaluating, differentiating, or reducing an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A variable was referenced that is not bound in the evaluation context.
    UnboundVariable {
        /// The name of the variable.
        name: String,
    },

    /// The function has no symbolic derivative.
    NotDifferentiable {
        /// The name of the function.
        func: &'static str,
    },

    /// A function that only accepts integers was given a value with a fractional part.
    NonIntegerArgument {
        /// The name of the function.
        func: &'static str,

        /// The offending value.
        value: f64,
    },

    /// A function was given an integer outside of its domain.
    Domain {
        /// The name of the function.
        func: &'static str,

        /// Why the value is outside of the domain.
        reason: String,
    },

    /// A summation iterator has the same name as a variable already bound in the context.
    ShadowedIterator {
        /// The name of the iterator.
        name: String,
    },

    /// A summation was differentiated with respect to a variable its bounds depend on.
    BoundDependsOnVariable {
        /// The name of the summation iterator.
        iter: String,

        /// The variable of differentiation.
        var: String,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundVariable { name } => write!(f, "`{}` is not defined", name),
            Self::NotDifferentiable { func } => {
                write!(f, "the `{}` function cannot be differentiated", func)
            },
            Self::NonIntegerArgument { func, value } => {
                write!(f, "the `{}` function requires integer arguments, but was given `{}`", func, value)
            },
            Self::Domain { func, reason } => write!(f, "invalid argument to `{}`: {}", func, reason),
            Self::ShadowedIterator { name } => {
                write!(f, "the summation iterator `{}` shadows a variable that is already defined", name)
            },
            Self::BoundDependsOnVariable { iter, var } => write!(
                f,
                "cannot differentiate with respect to `{}`: the bounds of the summation over `{}` depend on it",
                var,
                iter,
            ),
        }
    }
}

impl std::error::Error for Error {}
