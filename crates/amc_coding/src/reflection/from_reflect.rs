use alloc::boxed::Box;

use crate::Reflect;

/// A trait that enables types to be constructed from reflected data.
///
/// This is how a decoded value, which may be a [`Value`](crate::value::Value)
/// scalar or a dynamic collection, is turned into the concrete type of the
/// field it is assigned to.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect) and by the
/// built-in scalar and collection implementations.
///
/// # Examples
///
/// ```
/// use amc_coding::{FromReflect, Reflect, value::Value, ops::DynamicList};
///
/// // scalars convert from plain values with range checks
/// assert_eq!(u8::from_reflect(&Value::from(7_i64)), Some(7));
/// assert_eq!(u8::from_reflect(&Value::from(-7_i64)), None);
///
/// // collections convert element by element
/// let list: DynamicList = [Value::from(1_i32), Value::from(2_i32)]
///     .into_iter()
///     .map(Reflect::into_boxed_reflect)
///     .collect();
/// assert_eq!(Vec::<u64>::from_reflect(&list), Some(vec![1, 2]));
/// ```
pub trait FromReflect: Reflect + Sized {
    /// Constructs a concrete instance of `Self` from a reflected value.
    fn from_reflect(reflect: &dyn Reflect) -> Option<Self>;

    /// Attempts to downcast the given value to `Self`, falling back to
    /// [`FromReflect::from_reflect`] when it is not already a `Self`.
    ///
    /// The input is handed back on failure.
    fn take_from_reflect(reflect: Box<dyn Reflect>) -> Result<Self, Box<dyn Reflect>> {
        match reflect.take::<Self>() {
            Ok(value) => Ok(value),
            Err(reflect) => match Self::from_reflect(&*reflect) {
                Some(value) => Ok(value),
                None => Err(reflect),
            },
        }
    }
}
