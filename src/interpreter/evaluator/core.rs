use std::collections::HashMap;

use crate::{error::ConfigSyntaxError, interpreter::value::core::Value};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `ConfigSyntaxError` describing the failure.
pub type EvalResult<T> = Result<T, ConfigSyntaxError>;

/// Flat, global mapping from declared names to evaluated values.
///
/// One environment is created per parse and threaded through every parsing
/// operation. Bindings are only ever added or replaced; a lookup hands out a
/// copy of the value, so later redefinitions never reach back into values
/// that were computed earlier.
#[derive(Debug, Default, Clone)]
pub struct Environment {
    bindings: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, returning the previous binding if the name
    /// was already declared. Redefinition is allowed: the last write wins.
    pub fn define(&mut self, name: &str, value: Value) -> Option<Value> {
        self.bindings.insert(name.to_string(), value)
    }

    /// Returns the current binding of `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Resolves a variable reference.
    ///
    /// # Errors
    /// `UndefinedVariable` naming the identifier if it has no binding.
    ///
    /// # Example
    /// ```
    /// use confjson::{Value, interpreter::evaluator::core::Environment};
    ///
    /// let mut env = Environment::new();
    /// env.define("A", Value::Integer(5));
    ///
    /// assert_eq!(env.lookup("A", 0).unwrap(), Value::Integer(5));
    /// assert!(env.lookup("B", 0).is_err());
    /// ```
    pub fn lookup(&self, name: &str, offset: usize) -> EvalResult<Value> {
        self.get(name)
            .cloned()
            .ok_or_else(|| ConfigSyntaxError::UndefinedVariable { name: name.to_string(),
                                                                  offset })
    }

    /// Number of declared names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if nothing has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
