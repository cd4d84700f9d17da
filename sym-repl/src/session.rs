use crate::error::Error;
use log::{debug, info};
use sym_expr::{Ctxt, Expr};
use sym_parser::parse;

/// Help text printed by `:help`.
pub const HELP: &str = "\
<expr>               evaluate an expression using the variables defined so far
:let <name> = <expr> evaluate an expression and store the result in a variable
:diff <var> <expr>   differentiate an expression and reduce the result
:reduce <expr>       simplify an expression, substituting defined variables
:latex <expr>        render an expression as LaTeX
:vars                list the defined variables
:logic <expr>        print the truth table of a boolean expression
:help                show this message

operators:  + - * / ^
functions:  sin cos sinh cosh ln exp sqrt factorial conj
            binom(n, r) derivative(expr, var) sum(body, iter, min, max)
logic:      = > | ^ & not(a) nand(a, b) nor(a, b) 0 1 true false";

/// The state of a REPL session: the variables defined with `:let`.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// The variables defined so far.
    ctxt: Ctxt,

    /// Print the LaTeX rendering of every resulting expression as well.
    latex: bool,
}

/// Returns true if the name can be used as a variable.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// Parses an arithmetic expression, attaching the source to any error.
fn parse_expr(src: &str) -> Result<Expr, Error> {
    parse(src).map_err(|err| Error::parse(err, src))
}

impl Session {
    /// Creates a session with no variables.
    pub fn new(latex: bool) -> Self {
        Self { ctxt: Ctxt::new(), latex }
    }

    /// Formats an expression, adding its LaTeX rendering if enabled.
    fn show(&self, expr: &Expr) -> String {
        if self.latex {
            format!("{}\n{}", expr, expr.to_latex())
        } else {
            expr.to_string()
        }
    }

    /// Runs one line of input, returning the text to print, if any.
    pub fn execute(&mut self, line: &str) -> Result<Option<String>, Error> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let Some(command) = line.strip_prefix(':') else {
            let value = parse_expr(line)?.eval(&self.ctxt)?;
            return Ok(Some(value.to_string()));
        };

        let (name, rest) = command.split_once(' ').unwrap_or((command, ""));
        let rest = rest.trim();
        debug!("command `{}` with argument `{}`", name, rest);

        match name {
            "let" => self.define(rest),
            "diff" => {
                let (var, src) = rest.split_once(' ')
                    .ok_or_else(|| Error::Command("usage: :diff <var> <expr>".to_string()))?;
                if !is_identifier(var) {
                    return Err(Error::Command(format!("`{}` is not a variable name", var)));
                }
                let derivative = parse_expr(src.trim())?
                    .differentiate(var)?
                    .reduce(&Ctxt::new())?;
                Ok(Some(self.show(&derivative)))
            },
            "reduce" => {
                let reduced = parse_expr(rest)?.reduce(&self.ctxt)?;
                Ok(Some(self.show(&reduced)))
            },
            "latex" => Ok(Some(parse_expr(rest)?.to_latex())),
            "vars" => {
                let mut vars = self.ctxt.vars().collect::<Vec<_>>();
                vars.sort_by(|(a, _), (b, _)| a.cmp(b));
                let lines = vars.into_iter()
                    .map(|(name, value)| format!("{} = {}", name, value))
                    .collect::<Vec<_>>();
                Ok((!lines.is_empty()).then(|| lines.join("\n")))
            },
            "logic" => self.logic(rest),
            "help" => Ok(Some(HELP.to_string())),
            _ => Err(Error::Command(format!("unknown command `:{}`; type :help for a list of commands", name))),
        }
    }

    /// `:let <name> = <expr>`
    fn define(&mut self, rest: &str) -> Result<Option<String>, Error> {
        let (name, src) = rest.split_once('=')
            .ok_or_else(|| Error::Command("usage: :let <name> = <expr>".to_string()))?;
        let name = name.trim();
        if !is_identifier(name) {
            return Err(Error::Command(format!("`{}` is not a variable name", name)));
        }

        let value = parse_expr(src.trim())?.eval(&self.ctxt)?;
        self.ctxt.add_var(name, value);
        info!("defined `{}` = {}", name, value);
        Ok(Some(format!("{} = {}", name, value)))
    }

    /// `:logic <expr>`
    fn logic(&self, src: &str) -> Result<Option<String>, Error> {
        let node = sym_logic::parse(src).map_err(|err| Error::parse(err, src))?;
        let table = node.truth_table()?;

        let classification = if node.is_tautology()? {
            "tautology"
        } else if node.is_contradiction()? {
            "contradiction"
        } else {
            "satisfiable"
        };

        let mut out = format!("{}{}", table, classification);
        if self.latex {
            out.push('\n');
            out.push_str(&node.to_latex());
        }
        Ok(Some(out))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn run(session: &mut Session, line: &str) -> Option<String> {
        session.execute(line).unwrap()
    }

    #[test]
    fn evaluate_with_variables() {
        let mut session = Session::default();
        assert_eq!(run(&mut session, ":let x = 4"), Some("x = 4".to_string()));
        assert_eq!(run(&mut session, ":let y = x ^ 2 + 1"), Some("y = 17".to_string()));
        assert_eq!(run(&mut session, "x + y"), Some("21".to_string()));
        assert_eq!(run(&mut session, ":vars"), Some("x = 4\ny = 17".to_string()));
    }

    #[test]
    fn blank_lines_print_nothing() {
        let mut session = Session::default();
        assert_eq!(run(&mut session, "   "), None);
        assert_eq!(run(&mut session, ":vars"), None);
    }

    #[test]
    fn differentiate() {
        let mut session = Session::default();
        assert_eq!(run(&mut session, ":diff x x^2"), Some("2 * x".to_string()));
        assert_eq!(run(&mut session, ":diff x sin(x)"), Some("cos(x)".to_string()));
    }

    #[test]
    fn reduce_substitutes_variables() {
        let mut session = Session::default();
        run(&mut session, ":let a = 3");
        assert_eq!(run(&mut session, ":reduce a * x + 0"), Some("3 * x".to_string()));
    }

    #[test]
    fn latex() {
        let mut session = Session::new(true);
        assert_eq!(run(&mut session, ":latex x / 2"), Some("\\frac{x}{2}".to_string()));
        assert_eq!(run(&mut session, ":reduce x * 1"), Some("x\nx".to_string()));
    }

    #[test]
    fn logic() {
        let mut session = Session::default();
        let out = run(&mut session, ":logic a | not(a)").unwrap();
        assert_eq!(out, "a | result\n0 | 1\n1 | 1\ntautology");
    }

    #[test]
    fn errors() {
        let mut session = Session::default();
        assert!(matches!(session.execute("x + 1"), Err(Error::Eval(_))));
        assert!(matches!(session.execute("2 +"), Err(Error::Parse { .. })));
        assert!(matches!(session.execute(":let 2x = 1"), Err(Error::Command(_))));
        assert!(matches!(session.execute(":frobnicate"), Err(Error::Command(_))));
        assert!(matches!(session.execute(":logic a + b"), Err(Error::Parse { .. })));
    }
}
