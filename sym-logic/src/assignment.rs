use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The truth values of the variables of a boolean expression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Assignment {
    vars: HashMap<String, bool>,
}

impl Assignment {
    /// Creates an assignment with no variables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a value to a variable, replacing any previous value.
    pub fn set(&mut self, name: &str, value: bool) {
        self.vars.insert(name.to_string(), value);
    }

    /// Returns the value of the given variable, if it is assigned.
    pub fn get(&self, name: &str) -> Option<bool> {
        self.vars.get(name).copied()
    }

    /// Returns an iterator over the assigned variables, in arbitrary order.
    pub fn vars(&self) -> impl Iterator<Item = (&str, bool)> {
        self.vars.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (S, bool)>>(iter: T) -> Self {
        Self {
            vars: iter.into_iter().map(|(name, value)| (name.into(), value)).collect(),
        }
    }
}

impl<const N: usize> From<[(&str, bool); N]> for Assignment {
    fn from(vars: [(&str, bool); N]) -> Self {
        vars.into_iter().collect()
    }
}
