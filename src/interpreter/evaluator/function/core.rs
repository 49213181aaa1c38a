use tracing::trace;

use crate::{
    error::ConfigSyntaxError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            function::{concat, min},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the byte offset
/// of the call for error reporting.
type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry maps a string name to a function pointer implementing the
/// builtin. The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, func: $func },
            )*
        ];
        /// Names of every builtin function.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

/// A builtin function: its name and implementation.
#[derive(Debug)]
pub struct BuiltinDef {
    name: &'static str,
    func: BuiltinFn,
}

builtin_functions! {
    "min"    => min::min,
    "concat" => concat::concat,
}

impl BuiltinDef {
    /// The name the function is called by.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Applies the builtin to already evaluated arguments.
    pub fn call(&self, args: &[Value], offset: usize) -> EvalResult<Value> {
        trace!(function = self.name, arguments = args.len(), "calling builtin");
        (self.func)(args, offset)
    }
}

/// Finds the builtin called `name`.
///
/// # Errors
/// `UnknownFunction` if no builtin has that name.
///
/// # Example
/// ```
/// use confjson::interpreter::evaluator::function::core::lookup_builtin;
///
/// assert_eq!(lookup_builtin("min", 0).unwrap().name(), "min");
/// assert!(lookup_builtin("max", 0).is_err());
/// ```
pub fn lookup_builtin(name: &str, offset: usize) -> EvalResult<&'static BuiltinDef> {
    BUILTIN_TABLE.iter()
                 .find(|builtin| builtin.name == name)
                 .ok_or_else(|| ConfigSyntaxError::UnknownFunction { name: name.to_string(),
                                                                     offset })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn every_listed_name_resolves() {
        for name in BUILTIN_FUNCTIONS {
            assert_eq!(lookup_builtin(name, 0).unwrap().name(), *name);
        }
    }

    #[test]
    fn names_are_case_sensitive() {
        let err = lookup_builtin("MIN", 5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownFunction);
        assert_eq!(err.offset(), 5);
    }

    #[test]
    fn call_dispatches_to_implementation() {
        let concat = lookup_builtin("concat", 0).unwrap();
        assert_eq!(concat.call(&[Value::Integer(1)], 0).unwrap(),
                   Value::from(vec![Value::Integer(1)]));
    }
}
