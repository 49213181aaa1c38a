use crate::interpreter::{
    evaluator::{core::EvalResult, utils::flatten_arguments},
    value::core::Value,
};

/// Joins the flattened arguments into a new array, in argument order.
///
/// Zero arguments produce an empty array.
///
/// # Example
/// ```
/// use confjson::{Value, interpreter::evaluator::function::concat::concat};
///
/// let args = [Value::from(vec![Value::Integer(1), Value::Integer(2)]),
///             Value::Integer(3),
///             Value::from(vec![Value::Integer(4)])];
/// assert_eq!(concat(&args, 0).unwrap().to_string(), "[1, 2, 3, 4]");
/// ```
pub fn concat(args: &[Value], _offset: usize) -> EvalResult<Value> {
    Ok(Value::from(flatten_arguments(args).cloned().collect::<Vec<_>>()))
}
