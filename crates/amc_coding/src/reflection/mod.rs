mod field_value;
mod from_reflect;
mod reflect;

pub use field_value::FieldValue;
pub use from_reflect::FromReflect;
pub use reflect::{Reflect, ReflectKind, ReflectMut, ReflectRef};
