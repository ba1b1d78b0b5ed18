use alloc::boxed::Box;

use crate::{FromReflect, Reflect};

// -----------------------------------------------------------------------------
// FieldValue

/// How a declared field of an object is read and written.
///
/// Plain fields are always present. `Option<T>` fields are absent when
/// `None`, and an absent field is omitted from the encoded dictionary.
///
/// Used by code generated with [`#[derive(Reflect)]`](crate::derive::Reflect).
///
/// ```
/// use amc_coding::{FieldValue, Reflect, value::Value};
///
/// let mut nick: Option<String> = None;
/// assert!(nick.field_ref().is_none());
///
/// nick.assign(Box::new(Value::from("bo"))).unwrap();
/// assert_eq!(nick.as_deref(), Some("bo"));
///
/// let mut age = 0_u32;
/// assert!(age.assign(Box::new(Value::from("old"))).is_err());
/// ```
pub trait FieldValue: Send + Sync + 'static {
    /// The current value of the field, `None` if absent.
    fn field_ref(&self) -> Option<&dyn Reflect>;

    /// Stores a decoded value, handing it back if it cannot be converted.
    fn assign(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Rebuilds a field from the value of another instance.
    fn from_field(field: Option<&dyn Reflect>) -> Option<Self>
    where
        Self: Sized;
}

impl<T: FromReflect> FieldValue for T {
    #[inline]
    fn field_ref(&self) -> Option<&dyn Reflect> {
        Some(self)
    }

    fn assign(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = T::take_from_reflect(value)?;
        Ok(())
    }

    #[inline]
    fn from_field(field: Option<&dyn Reflect>) -> Option<Self> {
        T::from_reflect(field?)
    }
}

impl<T: FromReflect> FieldValue for Option<T> {
    #[inline]
    fn field_ref(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(|value| value as &dyn Reflect)
    }

    fn assign(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = Some(T::take_from_reflect(value)?);
        Ok(())
    }

    /// An absent field rebuilds as `None`.
    #[inline]
    fn from_field(field: Option<&dyn Reflect>) -> Option<Self> {
        match field {
            Some(field) => T::from_reflect(field).map(Some),
            None => Some(None),
        }
    }
}
