use alloc::boxed::Box;

use crate::info::Typed;
use crate::registry::FromType;
use crate::{FromReflect, Reflect};

// -----------------------------------------------------------------------------
// TypeTraitDefault

/// Creates a default instance of a class.
///
/// This is the factory the decoder uses to instantiate a class by name.
/// Added by `#[reflect(default)]`.
///
/// ```
/// use amc_coding::registry::{FromType, TypeTraitDefault};
///
/// let ctor = <TypeTraitDefault as FromType<String>>::from_type();
/// let value = ctor.default();
/// assert_eq!(value.downcast_ref::<String>(), Some(&String::new()));
/// ```
#[derive(Clone, Copy)]
pub struct TypeTraitDefault {
    func: fn() -> Box<dyn Reflect>,
}

impl TypeTraitDefault {
    #[inline]
    pub fn default(&self) -> Box<dyn Reflect> {
        (self.func)()
    }
}

impl<T: Typed + Reflect + Default> FromType<T> for TypeTraitDefault {
    fn from_type() -> Self {
        Self {
            func: || -> Box<dyn Reflect> { Box::new(T::default()) },
        }
    }
}

// -----------------------------------------------------------------------------
// TypeTraitFromReflect

/// Builds an instance of a class from any value of the same shape.
///
/// This is the bulk constructor of a collection class: it accepts any
/// other list or map and converts every element.
#[derive(Clone, Copy)]
pub struct TypeTraitFromReflect {
    func: fn(Box<dyn Reflect>) -> Result<Box<dyn Reflect>, Box<dyn Reflect>>,
}

impl TypeTraitFromReflect {
    /// Converts `value`, handing it back on failure.
    #[inline]
    pub fn from_reflect(&self, value: Box<dyn Reflect>) -> Result<Box<dyn Reflect>, Box<dyn Reflect>> {
        (self.func)(value)
    }
}

impl<T: Typed + FromReflect> FromType<T> for TypeTraitFromReflect {
    fn from_type() -> Self {
        Self {
            func: |value| T::take_from_reflect(value).map(Reflect::into_boxed_reflect),
        }
    }
}
