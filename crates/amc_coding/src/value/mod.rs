//! The plain value tree: the property-list shaped output of encoding
//! and the input of decoding.
//!
//! - [`Value`]: one node of the tree.
//! - [`Dictionary`]: a string-keyed map of values.
//! - [`Integer`], [`Date`], [`Data`]: scalars without a direct primitive equivalent.
//!
//! A dictionary that represents an object carries its class name under
//! [`CLASS_KEY`]. `Value` implements `serde` traits, so a tree can be written
//! with any `serde` data format.

// -----------------------------------------------------------------------------
// Modules

mod date;
mod dictionary;
mod integer;
mod serde;

// -----------------------------------------------------------------------------
// Exports

pub use date::{Data, Date};
pub use dictionary::{Dictionary, Iter};
pub use integer::Integer;

use alloc::string::String;
use alloc::vec::Vec;

/// The reserved dictionary key that names the class of an encoded object.
pub const CLASS_KEY: &str = "class";

// -----------------------------------------------------------------------------
// Value

/// A plain, property-list compatible value.
///
/// ```
/// use amc_coding::value::Value;
///
/// let v = Value::from("hello");
/// assert_eq!(v.as_str(), Some("hello"));
/// assert_eq!(v.kind_name(), "String");
///
/// let n = Value::from(42_u8);
/// assert_eq!(n.as_integer().and_then(|i| i.as_signed()), Some(42));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(Integer),
    Real(f64),
    Boolean(bool),
    Date(Date),
    Data(Data),
    Array(Vec<Value>),
    Dictionary(Dictionary),
}

impl Value {
    /// A short name of the variant, used in error messages.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Value::String(_) => "String",
            Value::Integer(_) => "Integer",
            Value::Real(_) => "Real",
            Value::Boolean(_) => "Boolean",
            Value::Date(_) => "Date",
            Value::Data(_) => "Data",
            Value::Array(_) => "Array",
            Value::Dictionary(_) => "Dictionary",
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_integer(&self) -> Option<Integer> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as `f64`. Integers are widened.
    #[inline]
    pub const fn as_real(&self) -> Option<f64> {
        match self {
            Value::Real(r) => Some(*r),
            Value::Integer(i) => Some(i.to_f64()),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_date(&self) -> Option<Date> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_data(&self) -> Option<&Data> {
        match self {
            Value::Data(d) => Some(d),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_dictionary(&self) -> Option<&Dictionary> {
        match self {
            Value::Dictionary(d) => Some(d),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// Conversions

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Value::Integer(Integer::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<Integer> for Value {
    #[inline]
    fn from(value: Integer) -> Self {
        Value::Integer(value)
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(value: f32) -> Self {
        Value::Real(value as f64)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Value::Real(value)
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Value::String(value.into())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Date> for Value {
    #[inline]
    fn from(value: Date) -> Self {
        Value::Date(value)
    }
}

impl From<Data> for Value {
    #[inline]
    fn from(value: Data) -> Self {
        Value::Data(value)
    }
}

impl From<Vec<Value>> for Value {
    #[inline]
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Dictionary> for Value {
    #[inline]
    fn from(value: Dictionary) -> Self {
        Value::Dictionary(value)
    }
}
