use crate::{
    error::ConfigSyntaxError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Adds two numbers.
///
/// The result is an integer only when both operands are integers; otherwise
/// both sides are widened to `f64`. Leaving the range of the result type is
/// an error rather than a silent wrap: integers must stay within `i64` and
/// floats must stay finite.
///
/// Non-numeric operands produce a `TypeMismatch` error.
#[allow(clippy::cast_precision_loss)]
pub fn add_numbers(left: &Value, right: &Value, offset: usize) -> EvalResult<Value> {
    use Value::{Float, Integer};

    let sum = match (left, right) {
        (Integer(a), Integer(b)) => a.checked_add(*b).map(Integer),
        (Integer(a), Float(b)) => finite(*a as f64 + b),
        (Float(a), Integer(b)) => finite(a + *b as f64),
        (Float(a), Float(b)) => finite(a + b),
        _ => {
            let details = format!("expected numbers, found {} and {}",
                                  left.type_name(),
                                  right.type_name());
            return Err(ConfigSyntaxError::TypeMismatch { details, offset });
        },
    };

    sum.ok_or_else(|| ConfigSyntaxError::Overflow { left:  left.to_string(),
                                                    right: right.to_string(),
                                                    offset, })
}

fn finite(x: f64) -> Option<Value> {
    x.is_finite().then_some(Value::Float(x))
}
