// Copyright 2026 the Execution Graph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runtime value model for the graph execution engine.
//!
//! This is the representation that flows across data paths. It is intentionally small: it only
//! needs to support the node kinds the core understands (arithmetic, map manipulation, branch/
//! select keys) plus whatever an embedder-supplied node implementation chooses to stash in a
//! [`Value::Str`] or [`Value::Map`].

use std::fmt;
use std::sync::Arc;

/// A runtime value produced by a data path.
#[derive(Clone, Debug)]
pub enum Value {
    /// `()`.
    Unit,
    /// Boolean.
    Bool(bool),
    /// Signed 8-bit integer.
    Byte(i8),
    /// Signed 16-bit integer.
    Short(i16),
    /// Signed 32-bit integer.
    Int(i32),
    /// Signed 64-bit integer.
    Long(i64),
    /// 32-bit float.
    Float(f32),
    /// 64-bit float.
    Double(f64),
    /// UTF-8 string.
    Str(String),
    /// Map, keyed by value equality rather than identity.
    Map(MapValue),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Unit, Self::Unit) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Byte(a), Self::Byte(b)) => a == b,
            (Self::Short(a), Self::Short(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Long(a), Self::Long(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Double(a), Self::Double(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    /// Returns this value's runtime kind name, used in type-mismatch diagnostics.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Unit => "Unit",
            Self::Bool(_) => "Bool",
            Self::Byte(_) => "Byte",
            Self::Short(_) => "Short",
            Self::Int(_) => "Int",
            Self::Long(_) => "Long",
            Self::Float(_) => "Float",
            Self::Double(_) => "Double",
            Self::Str(_) => "Str",
            Self::Map(_) => "Map",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => write!(f, "()"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Byte(n) => write!(f, "{n}"),
            Self::Short(n) => write!(f, "{n}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Long(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Double(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Map(m) => write!(f, "{m:?}"),
        }
    }
}

/// An immutable map value with structural sharing.
///
/// Backed by an ordered list of key/value pairs rather than a hash map, since [`Value`] is not
/// `Hash` (floats aren't, and we don't want to make every embedder-defined key type pay for it).
/// Equality and lookup use [`Value`]'s value equality, never identity.
#[derive(Clone, Debug, Default)]
pub struct MapValue(Arc<Vec<(Value, Value)>>);

impl MapValue {
    /// Creates a map from an owned list of pairs.
    ///
    /// Later entries with a duplicate key shadow earlier ones during lookup, but both remain in
    /// the backing storage; callers that build maps programmatically should avoid duplicate keys.
    #[must_use]
    pub fn from_pairs(pairs: Vec<(Value, Value)>) -> Self {
        Self(Arc::new(pairs))
    }

    /// Returns the value for `key`, if present (last-writer-wins on duplicate keys).
    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.0.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &Value) -> bool {
        self.get(key).is_some()
    }

    /// Returns the number of entries, including shadowed duplicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the map's pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.0.iter().map(|(k, v)| (k, v))
    }

    /// Returns a new map equal to `self` with `key` absent.
    ///
    /// The receiver is not mutated: this is a structural copy that shares no longer has the
    /// removed key, matching `Map.Remove`'s contract of "return the map without the key" rather
    /// than mutating in place.
    #[must_use]
    pub fn without(&self, key: &Value) -> Self {
        let pairs: Vec<_> = self
            .0
            .iter()
            .filter(|(k, _)| k != key)
            .cloned()
            .collect();
        Self::from_pairs(pairs)
    }
}

impl PartialEq for MapValue {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter()
            .all(|(k, v)| other.get(k).is_some_and(|ov| ov == v))
    }
}

impl From<MapValue> for Value {
    fn from(m: MapValue) -> Self {
        Self::Map(m)
    }
}

impl FromIterator<(Value, Value)> for MapValue {
    fn from_iter<T: IntoIterator<Item = (Value, Value)>>(iter: T) -> Self {
        Self::from_pairs(iter.into_iter().collect())
    }
}

/// Numeric widening class, ordered per the widening ladder
/// `Byte < Short < Int < Long < Float < Double`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum NumericClass {
    /// `i8`.
    Byte,
    /// `i16`.
    Short,
    /// `i32`.
    Int,
    /// `i64`.
    Long,
    /// `f32`.
    Float,
    /// `f64`.
    Double,
}

impl NumericClass {
    /// Returns the widest of `self` and `other`.
    ///
    /// This is associative: `widen(widen(a, b), c) == widen(a, widen(b, c))`, since it is simply
    /// `max` over a total order.
    #[must_use]
    pub fn widen(self, other: Self) -> Self {
        self.max(other)
    }
}

/// A numeric value widened to a common [`NumericClass`], paired with its operand.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Widened {
    /// Both operands as `i8`.
    Byte(i8, i8),
    /// Both operands as `i16`.
    Short(i16, i16),
    /// Both operands as `i32`.
    Int(i32, i32),
    /// Both operands as `i64`.
    Long(i64, i64),
    /// Both operands as `f32`.
    Float(f32, f32),
    /// Both operands as `f64`.
    Double(f64, f64),
}

/// A value that is not numeric, where a numeric operand was required.
#[derive(Clone, Debug, PartialEq)]
pub struct NotNumeric(pub Value);

impl Value {
    /// Returns this value's numeric class, if it is a numeric variant.
    #[must_use]
    pub fn numeric_class(&self) -> Option<NumericClass> {
        match self {
            Self::Byte(_) => Some(NumericClass::Byte),
            Self::Short(_) => Some(NumericClass::Short),
            Self::Int(_) => Some(NumericClass::Int),
            Self::Long(_) => Some(NumericClass::Long),
            Self::Float(_) => Some(NumericClass::Float),
            Self::Double(_) => Some(NumericClass::Double),
            Self::Unit | Self::Bool(_) | Self::Str(_) | Self::Map(_) => None,
        }
    }

    fn to_i64(&self) -> i64 {
        match self {
            Self::Byte(n) => i64::from(*n),
            Self::Short(n) => i64::from(*n),
            Self::Int(n) => i64::from(*n),
            Self::Long(n) => *n,
            _ => unreachable!("caller verified numeric_class widens no higher than Long"),
        }
    }

    fn to_f64(&self) -> f64 {
        match self {
            Self::Byte(n) => f64::from(*n),
            Self::Short(n) => f64::from(*n),
            Self::Int(n) => f64::from(*n),
            Self::Long(n) => *n as f64,
            Self::Float(n) => f64::from(*n),
            Self::Double(n) => *n,
            _ => unreachable!("caller verified numeric_class is Float or Double"),
        }
    }

    /// Widens `self` and `other` to their common [`NumericClass`].
    ///
    /// # Errors
    ///
    /// Returns [`NotNumeric`] naming whichever operand isn't numeric.
    pub fn widen_with(&self, other: &Self) -> Result<Widened, NotNumeric> {
        let a = self.numeric_class().ok_or_else(|| NotNumeric(self.clone()))?;
        let b = other
            .numeric_class()
            .ok_or_else(|| NotNumeric(other.clone()))?;

        Ok(match a.widen(b) {
            NumericClass::Byte => Widened::Byte(self.to_i64() as i8, other.to_i64() as i8),
            NumericClass::Short => Widened::Short(self.to_i64() as i16, other.to_i64() as i16),
            NumericClass::Int => Widened::Int(self.to_i64() as i32, other.to_i64() as i32),
            NumericClass::Long => Widened::Long(self.to_i64(), other.to_i64()),
            NumericClass::Float => Widened::Float(self.to_f64() as f32, other.to_f64() as f32),
            NumericClass::Double => Widened::Double(self.to_f64(), other.to_f64()),
        })
    }
}

/// Narrows a [`Value`] to a concrete Rust type, for `DataPath::get_of_type`-style call sites.
pub trait FromValue: Sized {
    /// The runtime kind name this type narrows from, used in type-mismatch diagnostics.
    const KIND: &'static str;

    /// Attempts the narrowing conversion, returning `None` on a kind mismatch.
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! impl_from_value {
    ($ty:ty, $variant:ident, $kind:literal) => {
        impl FromValue for $ty {
            const KIND: &'static str = $kind;

            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::$variant(v) => Some(*v),
                    _ => None,
                }
            }
        }
    };
}

impl_from_value!(bool, Bool, "Bool");
impl_from_value!(i8, Byte, "Byte");
impl_from_value!(i16, Short, "Short");
impl_from_value!(i32, Int, "Int");
impl_from_value!(i64, Long, "Long");
impl_from_value!(f32, Float, "Float");
impl_from_value!(f64, Double, "Double");

impl FromValue for String {
    const KIND: &'static str = "Str";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Str(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl FromValue for MapValue {
    const KIND: &'static str = "Map";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Map(m) => Some(m.clone()),
            _ => None,
        }
    }
}

impl From<Widened> for Value {
    fn from(w: Widened) -> Self {
        match w {
            Widened::Byte(a, _) => Self::Byte(a),
            Widened::Short(a, _) => Self::Short(a),
            Widened::Int(a, _) => Self::Int(a),
            Widened::Long(a, _) => Self::Long(a),
            Widened::Float(a, _) => Self::Float(a),
            Widened::Double(a, _) => Self::Double(a),
        }
    }
}
