use crate::interpreter::value::core::Value;

/// Expands array arguments one level.
///
/// Every array argument contributes its elements in order; every scalar
/// contributes itself. Arrays nested inside array arguments are yielded as
/// they are.
pub fn flatten_arguments(args: &[Value]) -> impl Iterator<Item = &Value> {
    args.iter().flat_map(|arg| match arg.as_array() {
                   Some(items) => items.iter(),
                   None => std::slice::from_ref(arg).iter(),
               })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_and_arrays() {
        let args = [Value::Integer(1),
                    Value::from(vec![Value::Integer(2), Value::Integer(3)]),
                    Value::from(Vec::<Value>::new()),
                    Value::Float(4.0)];
        let flat: Vec<_> = flatten_arguments(&args).cloned().collect();
        assert_eq!(flat,
                   vec![Value::Integer(1), Value::Integer(2), Value::Integer(3), Value::Float(4.0)]);
    }
}
