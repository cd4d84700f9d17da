use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A context to use when evaluating or reducing an expression, containing the values of the
/// variables that can be used within the expression.
///
/// The empty context ([`Ctxt::new`] / [`Default`]) binds nothing.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, f64>,
}

impl Ctxt {
    /// Creates a new context with no variables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a variable in the context, replacing any previous value.
    pub fn add_var(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_string(), value);
    }

    /// Returns a copy of this context with the given variable bound as well.
    pub fn with_var(&self, name: &str, value: f64) -> Self {
        let mut ctxt = self.clone();
        ctxt.add_var(name, value);
        ctxt
    }

    /// Returns the value of the given variable, if it is bound.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Returns true if the given variable is bound.
    pub fn contains_var(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Removes a variable from the context, returning its value if it was bound.
    pub fn remove_var(&mut self, name: &str) -> Option<f64> {
        self.vars.remove(name)
    }

    /// Returns an iterator over the bound variables, in arbitrary order.
    pub fn vars(&self) -> impl Iterator<Item = (&str, f64)> {
        self.vars.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Returns true if no variables are bound.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Ctxt {
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        Self {
            vars: iter.into_iter().map(|(name, value)| (name.into(), value)).collect(),
        }
    }
}

impl<const N: usize> From<[(&str, f64); N]> for Ctxt {
    fn from(vars: [(&str, f64); N]) -> Self {
        vars.into_iter().collect()
    }
}
