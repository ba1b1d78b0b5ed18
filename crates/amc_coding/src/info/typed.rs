use crate::info::{Capabilities, FieldType};

// -----------------------------------------------------------------------------
// Typed

/// Static coding information of a type, available without an instance.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect) and by the
/// built-in scalar and collection implementations.
///
/// # Examples
///
/// ```
/// use amc_coding::{derive::Reflect, info::{FieldType, Typed}};
///
/// #[derive(Reflect)]
/// #[reflect(class_name = "Vehicle")]
/// struct Car {
///     wheels: u8,
/// }
///
/// assert_eq!(Car::CLASS_NAME, "Vehicle");
/// assert_eq!(Car::FIELD_TYPE, FieldType::CustomObject);
/// assert_eq!(<Vec<Car> as Typed>::FIELD_TYPE, FieldType::CollectionArrayMutable);
/// assert_eq!(<Option<u8> as Typed>::FIELD_TYPE, FieldType::Scalar);
/// ```
pub trait Typed: 'static {
    /// The category a field of this type is coded under.
    const FIELD_TYPE: FieldType;

    /// The class name used in encoded dictionaries and registry lookups.
    const CLASS_NAME: &'static str;

    /// The collection operations the type supports.
    const CAPABILITIES: Capabilities = Capabilities::empty();
}
