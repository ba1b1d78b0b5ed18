use crate::Reflect;
use crate::value::Value;

/// A value that is passed through the codec as a plain scalar.
///
/// ```
/// use amc_coding::{ops::Scalar, value::Value};
///
/// assert_eq!(3_u16.to_value(), Value::from(3_u16));
/// assert_eq!(String::from("x").to_value(), Value::from("x"));
/// ```
pub trait Scalar: Reflect {
    /// Converts the value to its plain form.
    fn to_value(&self) -> Value;
}
