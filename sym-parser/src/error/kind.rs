use ariadne::Fmt;
use sym_attrs::ErrorKind;
use sym_error::EXPR;

/// A character that is not part of the expression language.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid character `{}`", character.escape_default()),
    labels = ["this character"],
    help = format!(
        "expressions may only contain letters, digits, `.`, `(`, `)`, `,`, and the operators {}",
        operators.iter().map(|op| format!("`{}`", op)).collect::<Vec<_>>().join(" ").fg(EXPR),
    ),
)]
pub struct InvalidCharacter {
    /// The offending character.
    pub character: char,

    /// The operator characters that are accepted.
    pub operators: Vec<char>,
}

/// A number with more than one decimal point, or one that starts or ends with a decimal point.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("malformed number `{}`", text),
    labels = ["this number"],
    help = format!("numbers are written as digits with at most one {} between them", "`.`".fg(EXPR)),
)]
pub struct MalformedNumber {
    /// The text of the number.
    pub text: String,
}

/// A number immediately followed by a name, such as `2x`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "a number cannot be followed by a letter",
    labels = ["this number", "is followed by this name"],
    help = format!("implicit multiplication is not supported; add a {} between them", "`*`".fg(EXPR)),
)]
pub struct NumberFollowedByLetter;

/// The expression starts with an operator.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the expression cannot start with the `{}` operator", op),
    labels = ["this operator has no left operand"],
    help = "negative numbers are written by subtracting from something, such as `0 - 2`",
)]
pub struct LeadingOperator {
    /// The operator.
    pub op: char,
}

/// The expression starts with a closing bracket.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "the expression cannot start with a closing bracket",
    labels = ["this bracket"],
)]
pub struct LeadingCloseBracket;

/// An operator that directly follows an opening bracket, a comma, or another operator.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("missing left operand for the `{}` operator", op),
    labels = ["this operator", "is preceded by this"],
    help = format!("add an {} before the operator", "expression".fg(EXPR)),
)]
pub struct MissingLeftOperand {
    /// The operator.
    pub op: char,
}

/// An operator that is directly followed by a closing bracket, a comma, or the end of the
/// expression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("missing right operand for the `{}` operator", op),
    labels = ["this operator"],
    help = format!("add an {} after the operator", "expression".fg(EXPR)),
)]
pub struct MissingRightOperand {
    /// The operator.
    pub op: char,
}

/// A closing bracket without a matching opening bracket.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unbalanced closing bracket",
    labels = ["this bracket does not close anything"],
    help = "add an opening bracket `(` somewhere before this",
)]
pub struct UnbalancedCloseBracket;

/// An opening bracket that is never closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed bracket",
    labels = ["this bracket is not closed"],
    help = "add a closing bracket `)` somewhere after this",
)]
pub struct UnclosedBracket;

/// A comma outside of a function call, or one that does not separate two arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "misplaced comma",
    labels = ["this comma"],
    help = "commas may only separate the arguments of a function call, such as `binom(5, 2)`",
)]
pub struct MisplacedComma;

/// A number or a closing bracket directly followed by an opening bracket, such as `2(x + 1)`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing operator before opening bracket",
    labels = ["this", "is followed by this bracket"],
    help = format!("implicit multiplication is not supported; add a {} between them", "`*`".fg(EXPR)),
)]
pub struct ImplicitMultiplication;

/// A closing bracket directly followed by a name or number, such as `(x + 1)y`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing operator after closing bracket",
    labels = ["this bracket", "is followed by this"],
    help = format!("add an operator such as {} between them", "`*`".fg(EXPR)),
)]
pub struct MissingOperator;

/// A pair of brackets with nothing inside.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside brackets",
    labels = ["add an expression here"],
)]
pub struct EmptyBrackets;

/// The input contains no tokens at all.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "the expression is empty",
    labels = [""],
)]
pub struct EmptyExpression;

/// An operator that is accepted by the tokenizer, but has no constructor in the registry.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown operator `{}`", op),
    labels = ["this operator"],
)]
pub struct UnknownOperator {
    /// The operator.
    pub op: char,
}

/// A call to a function that does not exist.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the `{}` function does not exist", name),
    labels = ["this function"],
    help = if suggestions.is_empty() {
        "see the documentation for a list of available functions".to_string()
    } else if suggestions.len() == 1 {
        format!("did you mean the `{}` function?", (&*suggestions[0]).fg(EXPR))
    } else {
        format!(
            "did you mean one of these functions? {}",
            suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    },
)]
pub struct UnknownFunction {
    /// The name of the function.
    pub name: String,

    /// A list of similarly named functions, if any.
    pub suggestions: Vec<String>,
}

/// A function call with the wrong number of arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("wrong number of arguments given to the `{}` function", name),
    labels = ["this function call"],
    help = format!(
        "the `{}` function takes {} argument(s); there are {} argument(s) provided here",
        name.fg(EXPR),
        expected,
        given,
    ),
)]
pub struct WrongArgumentCount {
    /// The name of the function.
    pub name: String,

    /// The number of arguments the function takes.
    pub expected: usize,

    /// The number of arguments given.
    pub given: usize,
}

/// A function rejected one of its arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid argument to the `{}` function", name),
    labels = [reason.to_string()],
)]
pub struct InvalidArgument {
    /// The name of the function.
    pub name: String,

    /// Why the argument was rejected.
    pub reason: &'static str,
}

/// A literal that the registry cannot represent.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid literal `{}`", text),
    labels = ["this literal"],
)]
pub struct InvalidValue {
    /// The text of the literal.
    pub text: String,
}

/// A bracket inside a range of tokens has no partner inside the same range.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unbalanced brackets",
    labels = ["in this part of the expression"],
)]
pub struct UnbalancedRange;

/// A part of the expression that should contain tokens is empty.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression",
    labels = ["add an expression here"],
)]
pub struct EmptyRange;

/// The tokens do not form any known kind of expression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "could not understand this expression",
    labels = ["here"],
    help = "you should never see this error; please report this as a bug",
)]
pub struct Unrecognized;
