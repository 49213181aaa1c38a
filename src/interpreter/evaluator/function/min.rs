use crate::{
    error::ConfigSyntaxError,
    interpreter::{
        evaluator::{core::EvalResult, utils::flatten_arguments},
        value::core::Value,
    },
};

/// Returns the smallest of the flattened arguments.
///
/// Array arguments contribute their elements, scalars contribute themselves.
/// Integers and floats compare by value and the winning candidate keeps its
/// own type; among equal candidates the first one wins.
///
/// # Errors
/// - `EmptyArguments` if flattening leaves no candidates.
/// - `TypeMismatch` if a candidate is still an array after flattening.
///
/// # Example
/// ```
/// use confjson::{Value, interpreter::evaluator::function::min::min};
///
/// let args = [Value::Integer(4), Value::from(vec![Value::Float(2.5), Value::Integer(3)])];
/// assert_eq!(min(&args, 0).unwrap(), Value::Float(2.5));
/// ```
pub fn min(args: &[Value], offset: usize) -> EvalResult<Value> {
    let mut best: Option<&Value> = None;

    for candidate in flatten_arguments(args) {
        if !candidate.is_number() {
            return Err(ConfigSyntaxError::TypeMismatch { details: format!("min expects numbers, found {}",
                                                                          candidate.type_name()),
                                                         offset });
        }
        let smaller = best.is_none_or(|current| {
                              candidate.numeric_cmp(current)
                                       .is_some_and(std::cmp::Ordering::is_lt)
                          });
        if smaller {
            best = Some(candidate);
        }
    }

    best.cloned()
        .ok_or_else(|| ConfigSyntaxError::EmptyArguments { name: "min".to_string(),
                                                           offset })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn ints(values: &[i64]) -> Value {
        Value::from(values.iter().copied().map(Value::from).collect::<Vec<_>>())
    }

    #[test]
    fn scalars() {
        let args = [Value::Integer(1), Value::Integer(2), Value::Integer(3)];
        assert_eq!(min(&args, 0).unwrap(), Value::Integer(1));
    }

    #[test]
    fn array_argument_is_flattened() {
        assert_eq!(min(&[ints(&[3, 1, 2])], 0).unwrap(), Value::Integer(1));
    }

    #[test]
    fn mixed_numbers_compare_by_value() {
        let args = [Value::Float(1.5), Value::Integer(1), Value::Float(-0.5)];
        assert_eq!(min(&args, 0).unwrap(), Value::Float(-0.5));
    }

    #[test]
    fn first_of_equal_candidates_wins() {
        let args = [Value::Float(2.0), Value::Integer(2)];
        assert_eq!(min(&args, 0).unwrap(), Value::Float(2.0));
    }

    #[test]
    fn no_candidates() {
        let err = min(&[], 4).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyArguments);
        assert_eq!(err.offset(), 4);

        let err = min(&[ints(&[])], 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyArguments);
    }

    #[test]
    fn nested_arrays_are_not_numbers() {
        let nested = Value::from(vec![ints(&[1])]);
        let err = min(&[nested], 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }
}
