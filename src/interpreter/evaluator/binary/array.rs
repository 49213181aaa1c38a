use crate::interpreter::value::core::Value;

/// Concatenates two arrays into a new one, left elements first.
///
/// Neither input is modified; nested arrays are shared, not copied.
#[must_use]
pub fn concat_arrays(left: &[Value], right: &[Value]) -> Value {
    let mut items = Vec::with_capacity(left.len() + right.len());
    items.extend_from_slice(left);
    items.extend_from_slice(right);
    Value::from(items)
}
