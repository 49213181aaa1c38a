use crate::{
    error::ConfigSyntaxError,
    interpreter::{
        evaluator::{
            binary::{array::concat_arrays, scalar::add_numbers},
            core::EvalResult,
        },
        value::core::Value,
    },
};

/// Evaluates `left + right`.
///
/// - number + number is an arithmetic sum, see [`add_numbers`].
/// - array + array is a concatenation, see [`concat_arrays`].
/// - any other pairing fails with `TypeMismatch`.
///
/// # Parameters
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `offset`: Byte offset of the `+` for error reporting.
///
/// # Example
/// ```
/// use confjson::{Value, interpreter::evaluator::binary::core::eval_add};
///
/// let sum = eval_add(&Value::Integer(3), &Value::Float(0.5), 0).unwrap();
/// assert_eq!(sum, Value::Float(3.5));
///
/// let joined = eval_add(&Value::from(vec![Value::Integer(1)]),
///                       &Value::from(vec![Value::Integer(2)]),
///                       0).unwrap();
/// assert_eq!(joined, Value::from(vec![Value::Integer(1), Value::Integer(2)]));
///
/// assert!(eval_add(&Value::Integer(1), &Value::from(Vec::<Value>::new()), 0).is_err());
/// ```
pub fn eval_add(left: &Value, right: &Value, offset: usize) -> EvalResult<Value> {
    match (left, right) {
        (Value::Array(l), Value::Array(r)) => Ok(concat_arrays(l, r)),
        (l, r) if l.is_number() && r.is_number() => add_numbers(l, r, offset),
        _ => Err(ConfigSyntaxError::TypeMismatch { details: format!("cannot add {} and {}",
                                                                    left.type_name(),
                                                                    right.type_name()),
                                                   offset }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn mixed_types_are_rejected() {
        let array = Value::from(vec![Value::Integer(1)]);
        let err = eval_add(&array, &Value::Float(1.0), 7).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(err.offset(), 7);
        assert_eq!(err.to_string(), "Type mismatch: cannot add array and float.");

        let err = eval_add(&Value::Integer(1), &array, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }
}
