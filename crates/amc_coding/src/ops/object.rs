use alloc::boxed::Box;

use crate::Reflect;
use crate::info::{ClassInfo, FieldDescriptor, FieldType};

/// A registered class with named fields, read and written by key.
///
/// This is the key-value protocol the codec works through: fields are
/// enumerated from [`ClassInfo`], read with [`field`](Object::field) and
/// written with [`set_field`](Object::set_field).
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect).
///
/// # Examples
///
/// ```
/// use amc_coding::{derive::Reflect, ops::Object, value::Value};
///
/// #[derive(Reflect, Default)]
/// struct Person {
///     name: String,
///     nick: Option<String>,
/// }
///
/// let mut p = Person::default();
/// p.set_field("name", Box::new(Value::from("Ada"))).unwrap();
///
/// assert_eq!(p.name, "Ada");
/// assert!(p.field("name").is_some());
/// assert!(p.field("nick").is_none());
/// assert!(p.set_field("unknown", Box::new(1_u8)).is_err());
/// ```
pub trait Object: Reflect {
    /// The static description of the class.
    fn class_info(&self) -> &'static ClassInfo;

    /// Reads a field by name.
    ///
    /// Returns `None` for unknown names and for absent optional fields.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Writes a field by name.
    ///
    /// The value is handed back if the name is unknown or the value cannot
    /// be converted to the field type.
    fn set_field(&mut self, name: &str, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// The category a key is coded under.
    ///
    /// Defaults to the declared category of the field. Keys without a
    /// category are not decoded.
    fn field_type_for_key(&self, key: &str) -> Option<FieldType> {
        self.class_info().field(key).map(FieldDescriptor::field_type)
    }

    /// The keys written when the object is encoded, in order.
    ///
    /// Defaults to every declared field.
    fn keys_for_representation(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.class_info().field_names().map(|name| -> &str { name }))
    }
}
