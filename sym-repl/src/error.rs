use ariadne::Source;
use std::fmt::{self, Display, Formatter};
use sym_parser::Error as ParseError;

/// Utility enum to package errors that can occur while running a line of input.
#[derive(Debug)]
pub enum Error {
    /// Errors that occurred while parsing. The spans of the error point into `src`, which is the
    /// part of the line that was parsed.
    Parse {
        err: ParseError,
        src: String,
    },

    /// An error that occurred while evaluating, differentiating, or reducing an expression.
    Eval(sym_expr::Error),

    /// An error that occurred while evaluating a boolean expression.
    Logic(sym_logic::Error),

    /// A malformed REPL command.
    Command(String),
}

impl Error {
    /// Creates a parse error for the given source.
    pub fn parse(err: ParseError, src: &str) -> Self {
        Self::Parse { err, src: src.to_string() }
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`](ariadne::Report) type does not have a `Display`
    /// implementation, so parse errors are printed with its `eprint` method.
    pub fn report_to_stderr(&self) {
        match self {
            Self::Parse { err, src } => {
                let report = err.build_report("input");
                if let Err(io_err) = report.eprint(("input", Source::from(src))) {
                    eprintln!("error: {} ({})", err, io_err);
                }
            },
            err => eprintln!("error: {}", err),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { err, .. } => write!(f, "{}", err),
            Self::Eval(err) => write!(f, "{}", err),
            Self::Logic(err) => write!(f, "{}", err),
            Self::Command(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<sym_expr::Error> for Error {
    fn from(err: sym_expr::Error) -> Self {
        Self::Eval(err)
    }
}

impl From<sym_logic::Error> for Error {
    fn from(err: sym_logic::Error) -> Self {
        Self::Logic(err)
    }
}
