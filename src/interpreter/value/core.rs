use std::{cmp::Ordering, fmt, rc::Rc};

use ordered_float::OrderedFloat;
use serde::{Serialize, Serializer};

/// Represents a value produced by the configuration language.
///
/// Arrays are shared immutable vectors: cloning a value never aliases mutable
/// state, and every combining operation builds a fresh vector.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A whole number written without `.` or exponent.
    Integer(i64),
    /// A number written with `.` or an exponent, or the result of arithmetic
    /// involving one.
    Float(f64),
    /// An ordered, possibly empty, possibly mixed sequence of values.
    Array(Rc<Vec<Self>>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl Value {
    /// Returns a short name of the value's type for diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Array(_) => "array",
        }
    }

    /// Returns `true` for integers and floats.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    /// Returns the elements of an array value.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Compares two numbers by value.
    ///
    /// Integers compare exactly with each other; any comparison involving a
    /// float is carried out in `f64` with a total order, so `NaN` sorts above
    /// every other number instead of being unordered.
    ///
    /// Returns `None` if either side is an array.
    ///
    /// # Example
    /// ```
    /// use std::cmp::Ordering;
    ///
    /// use confjson::Value;
    ///
    /// assert_eq!(Value::Integer(2).numeric_cmp(&Value::Float(2.5)), Some(Ordering::Less));
    /// assert_eq!(Value::Float(3.0).numeric_cmp(&Value::Integer(3)), Some(Ordering::Equal));
    /// assert_eq!(Value::from(Vec::<Value>::new()).numeric_cmp(&Value::Integer(1)), None);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn numeric_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Some(a.cmp(b)),
            (Self::Integer(a), Self::Float(b)) => Some(OrderedFloat(*a as f64).cmp(&OrderedFloat(*b))),
            (Self::Float(a), Self::Integer(b)) => Some(OrderedFloat(*a).cmp(&OrderedFloat(*b as f64))),
            (Self::Float(a), Self::Float(b)) => Some(OrderedFloat(*a).cmp(&OrderedFloat(*b))),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            },
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        match self {
            Self::Integer(n) => serializer.serialize_i64(*n),
            Self::Float(x) => serializer.serialize_f64(*x),
            Self::Array(items) => serializer.collect_seq(items.iter()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_keeps_float_marker() {
        let v = Value::from(vec![Value::Integer(1), Value::Float(2.0), Value::from(Vec::<Value>::new())]);
        assert_eq!(v.to_string(), "[1, 2.0, []]");
    }

    #[test]
    fn serializes_as_plain_json() {
        let v = Value::from(vec![Value::Integer(1),
                                 Value::Float(-2.5),
                                 Value::from(vec![Value::Integer(3)])]);
        assert_eq!(serde_json::to_string(&v).unwrap(), "[1,-2.5,[3]]");
    }

    #[test]
    fn integers_compare_exactly() {
        let a = Value::Integer(i64::MAX - 1);
        let b = Value::Integer(i64::MAX);
        assert_eq!(a.numeric_cmp(&b), Some(Ordering::Less));
    }

    #[test]
    fn nan_sorts_last() {
        let nan = Value::Float(f64::NAN);
        assert_eq!(nan.numeric_cmp(&Value::Float(f64::INFINITY)), Some(Ordering::Greater));
        assert_eq!(Value::Integer(0).numeric_cmp(&nan), Some(Ordering::Less));
    }

    #[test]
    fn type_names() {
        assert_eq!(Value::Integer(1).type_name(), "integer");
        assert_eq!(Value::Float(1.0).type_name(), "float");
        assert_eq!(Value::from(Vec::<Value>::new()).type_name(), "array");
        assert!(Value::Float(1.0).is_number());
        assert!(Value::from(Vec::<Value>::new()).as_array().is_some_and(<[Value]>::is_empty));
    }
}
