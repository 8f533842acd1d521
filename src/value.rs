//! Heterogeneous set members.
//!
//! Sets are generic over a single element type. When one set has to hold
//! mixed scalars, such as members decoded from an untyped JSON array, use
//! [`Value`] as the element type and recover typed views with
//! [`TypedSlices`].
//!
//! Equality is strict: no numeric coercion takes place, so `Int(2)` and
//! `Float(2.0)` are different members, and `Nil` only equals `Nil`. Floats
//! compare by bit pattern, which gives them a lawful `Eq` and `Hash`
//! (`NaN` equals itself, `0.0` and `-0.0` differ).
//!
//! Arrays and objects have no usable equality and are rejected with
//! [`SetError::Uncomparable`](crate::SetError::Uncomparable) instead of
//! being stored.
//!
//! # Examples
//!
//! ```rust
//! use syncset::set::UnorderedSet;
//! use syncset::value::{TypedSlices, Value};
//!
//! let set: UnorderedSet<Value> = [Value::from(1), Value::from("2"), Value::from(3.4)]
//!     .into_iter()
//!     .collect();
//!
//! assert!(set.contains(&Value::Int(1)));
//! assert!(!set.contains(&Value::Float(1.0)));
//! assert_eq!(set.string_slice(), vec!["2".to_string()]);
//! assert_eq!(set.int_slice(), vec![1]);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use crate::error::SetError;
use crate::set::Set;

/// A comparable scalar that can be stored in any set.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absence of a value (`null` in JSON).
    Nil,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number, compared by bit pattern.
    Float(f64),
    /// A string.
    Str(String),
}

impl Value {
    /// Returns the name of this value's variant.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
        }
    }

    /// Returns `true` for [`Value::Nil`].
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns the boolean payload, if this is a `Bool`.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the integer payload, if this is an `Int`.
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the float payload, if this is a `Float`.
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the string payload, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Int(left), Self::Int(right)) => left == right,
            (Self::Float(left), Self::Float(right)) => left.to_bits() == right.to_bits(),
            (Self::Str(left), Self::Str(right)) => left == right,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Nil => {}
            Self::Bool(value) => value.hash(state),
            Self::Int(value) => value.hash(state),
            Self::Float(value) => value.to_bits().hash(state),
            Self::Str(value) => value.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => formatter.write_str("nil"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Int(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value:?}"),
            Self::Str(value) => write!(formatter, "{value:?}"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Nil
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_integer {
    ($($integer:ty),*) => {
        $(
            impl From<$integer> for Value {
                fn from(value: $integer) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl<V: Into<Self>> From<Option<V>> for Value {
    fn from(value: Option<V>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}

#[cfg(feature = "serde")]
impl TryFrom<serde_json::Value> for Value {
    type Error = SetError;

    #[allow(clippy::cast_precision_loss)]
    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Null => Ok(Self::Nil),
            serde_json::Value::Bool(value) => Ok(Self::Bool(value)),
            serde_json::Value::Number(number) => Ok(match (number.as_i64(), number.as_u64()) {
                (Some(value), _) => Self::Int(value),
                (None, Some(value)) => Self::Float(value as f64),
                (None, None) => Self::Float(number.as_f64().unwrap_or(f64::NAN)),
            }),
            serde_json::Value::String(value) => Ok(Self::Str(value)),
            serde_json::Value::Array(_) => Err(SetError::Uncomparable { kind: "array" }),
            serde_json::Value::Object(_) => Err(SetError::Uncomparable { kind: "object" }),
        }
    }
}

// =============================================================================
// Typed Extraction
// =============================================================================

/// Typed views over a set of [`Value`]s.
///
/// Each method keeps only the members of exactly the requested variant and
/// never coerces between variants. Members come back in the order the set's
/// `slice` reports them, which is insertion order for ordered sets.
///
/// # Examples
///
/// ```rust
/// use syncset::set::OrderedSet;
/// use syncset::value::{TypedSlices, Value};
///
/// let set = OrderedSet::from_items([
///     Value::from("b"),
///     Value::from(1),
///     Value::from("a"),
///     Value::from(true),
///     Value::Nil,
/// ]);
///
/// assert_eq!(set.string_slice(), vec!["b".to_string(), "a".to_string()]);
/// assert_eq!(set.int_slice(), vec![1]);
/// assert_eq!(set.bool_slice(), vec![true]);
/// assert!(set.float_slice().is_empty());
/// ```
pub trait TypedSlices {
    /// Returns the `Str` members.
    fn string_slice(&self) -> Vec<String>;

    /// Returns the `Int` members.
    fn int_slice(&self) -> Vec<i64>;

    /// Returns the `Float` members.
    fn float_slice(&self) -> Vec<f64>;

    /// Returns the `Bool` members.
    fn bool_slice(&self) -> Vec<bool>;
}

impl<X: Set<Value> + ?Sized> TypedSlices for X {
    fn string_slice(&self) -> Vec<String> {
        self.slice()
            .into_iter()
            .filter_map(|member| match member {
                Value::Str(value) => Some(value),
                _ => None,
            })
            .collect()
    }

    fn int_slice(&self) -> Vec<i64> {
        self.slice().iter().filter_map(Value::as_int).collect()
    }

    fn float_slice(&self) -> Vec<f64> {
        self.slice().iter().filter_map(Value::as_float).collect()
    }

    fn bool_slice(&self) -> Vec<bool> {
        self.slice().iter().filter_map(Value::as_bool).collect()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<Z>(&self, serializer: Z) -> Result<Z::Ok, Z::Error>
    where
        Z: serde::Serializer,
    {
        match self {
            Self::Nil => serializer.serialize_unit(),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Int(value) => serializer.serialize_i64(*value),
            // JSON has no spelling for NaN or infinity; serde_json would write
            // `null` and the member would come back as `Nil`.
            Self::Float(value) if !value.is_finite() => Err(serde::ser::Error::custom(
                format_args!("non-finite float {value} has no JSON representation"),
            )),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::Str(value) => serializer.serialize_str(value),
        }
    }
}

#[cfg(feature = "serde")]
struct ValueVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a null, boolean, number or string")
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E> {
        Ok(Value::Nil)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E> {
        Ok(Value::Nil)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        serde::Deserialize::deserialize(deserializer)
    }

    fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
        Ok(Value::Bool(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
        Ok(Value::Int(value))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
        Ok(i64::try_from(value).map_or(Value::Float(value as f64), Value::Int))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
        Ok(Value::Float(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
        Ok(Value::Str(value.to_owned()))
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
        Ok(Value::Str(value))
    }

    fn visit_seq<A>(self, _sequence: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        Err(serde::de::Error::custom(SetError::Uncomparable {
            kind: "array",
        }))
    }

    fn visit_map<A>(self, _map: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        Err(serde::de::Error::custom(SetError::Uncomparable {
            kind: "object",
        }))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    #[case(Value::Int(2), Value::Float(2.0))]
    #[case(Value::Nil, Value::Int(0))]
    #[case(Value::Nil, Value::Bool(false))]
    #[case(Value::Str("1".into()), Value::Int(1))]
    #[case(Value::Float(0.0), Value::Float(-0.0))]
    fn test_no_cross_variant_equality(#[case] left: Value, #[case] right: Value) {
        assert_ne!(left, right);
        let set: HashSet<Value> = [left, right].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[rstest]
    fn test_nan_equals_itself() {
        let nan = Value::Float(f64::NAN);
        assert_eq!(nan, nan.clone());
    }

    #[rstest]
    #[case(Value::from(()), "nil")]
    #[case(Value::from(true), "bool")]
    #[case(Value::from(7_u8), "int")]
    #[case(Value::from(1.5_f32), "float")]
    #[case(Value::from("x"), "string")]
    #[case(Value::from(None::<i32>), "nil")]
    #[case(Value::from(Some(3)), "int")]
    fn test_conversions_pick_variant(#[case] value: Value, #[case] kind: &str) {
        assert_eq!(value.kind(), kind);
    }

    #[rstest]
    #[case(Value::Nil, "nil")]
    #[case(Value::Int(-4), "-4")]
    #[case(Value::Float(2.0), "2.0")]
    #[case(Value::Str("hi".into()), "\"hi\"")]
    fn test_display(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn test_deserialize_keeps_integers_apart_from_floats() {
        let values: Vec<Value> = serde_json::from_str("[1, 1.0, \"1\", true, null]").unwrap();
        assert_eq!(
            values,
            vec![
                Value::Int(1),
                Value::Float(1.0),
                Value::Str("1".into()),
                Value::Bool(true),
                Value::Nil,
            ]
        );
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case("[[1, 2]]", "array")]
    #[case("[{\"a\": 1}]", "object")]
    fn test_deserialize_rejects_uncomparable(#[case] input: &str, #[case] kind: &str) {
        let error = serde_json::from_str::<Vec<Value>>(input).unwrap_err();
        assert!(error.to_string().contains(kind));
        assert!(error.to_string().contains("uncomparable"));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn test_try_from_json_value() {
        let json = serde_json::json!([1, u64::MAX, 2.5, "s", null, false]);
        let serde_json::Value::Array(elements) = json else {
            unreachable!()
        };
        let values: Vec<Value> = elements
            .into_iter()
            .map(Value::try_from)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(values[0], Value::Int(1));
        assert_eq!(values[1].kind(), "float");
        assert_eq!(values[2], Value::Float(2.5));
        assert_eq!(values[3], Value::Str("s".into()));
        assert!(values[4].is_nil());
        assert_eq!(values[5].as_bool(), Some(false));

        let rejected = Value::try_from(serde_json::json!({"k": 1}));
        assert!(matches!(
            rejected,
            Err(SetError::Uncomparable { kind: "object" })
        ));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn test_serialize_round_trip() {
        let values = vec![
            Value::Nil,
            Value::Bool(true),
            Value::Int(3),
            Value::Float(0.5),
            Value::Str("x".into()),
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[null,true,3,0.5,"x"]"#);
        let restored: Vec<Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, values);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    fn test_serialize_rejects_non_finite_float(#[case] value: f64) {
        let error = serde_json::to_string(&Value::Float(value)).unwrap_err();
        assert!(error.to_string().contains("non-finite float"));
    }
}
