use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::Capabilities;
use crate::ops::{List, Map, Object, Scalar, Structure};

// -----------------------------------------------------------------------------
// Reflect

/// The runtime view of a live value that can be encoded and decoded.
///
/// A value is always seen as exactly one of the shapes in [`ReflectRef`]:
/// a scalar, an object with named fields, a structure, an ordered
/// collection or a keyed collection.
///
/// Usually implemented by [`#[derive(Reflect)]`](crate::derive::Reflect).
/// Scalars and standard collections are implemented by this crate.
///
/// # Examples
///
/// ```
/// use amc_coding::{Reflect, ReflectRef};
///
/// let v: Box<dyn Reflect> = Box::new(vec![1_i32, 2]);
/// assert_eq!(v.class_name(), "Vec");
/// assert!(matches!(v.reflect_ref(), ReflectRef::List(_)));
///
/// let v = v.take::<Vec<i32>>().unwrap();
/// assert_eq!(v, [1, 2]);
/// ```
pub trait Reflect: Any + Send + Sync {
    /// The class name of the value.
    ///
    /// Equal to [`Typed::CLASS_NAME`](crate::info::Typed::CLASS_NAME) of the type.
    fn class_name(&self) -> &'static str;

    /// The collection operations the value supports.
    #[inline]
    fn capabilities(&self) -> Capabilities {
        Capabilities::empty()
    }

    fn reflect_ref(&self) -> ReflectRef<'_>;

    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Clones the value through reflection.
    ///
    /// Returns `None` if the value or one of its parts cannot be rebuilt.
    fn reflect_clone(&self) -> Option<Box<dyn Reflect>>;

    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        self.reflect_ref().kind()
    }

    #[inline]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    #[inline]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    #[inline]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        let any: &dyn Any = self;
        any.type_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// ```
    /// # use amc_coding::Reflect;
    /// let x: Box<dyn Reflect> = Box::new(10_u8);
    /// assert_eq!(x.downcast_ref::<u8>(), Some(&10));
    /// assert_eq!(x.downcast_ref::<i8>(), None);
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if !self.is::<T>() {
            return Err(self);
        }
        let any: Box<dyn Any> = self;
        match any.downcast::<T>() {
            Ok(value) => Ok(value),
            Err(_) => unreachable!("type is already checked"),
        }
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reflect({})", self.class_name())
    }
}

// -----------------------------------------------------------------------------
// ReflectKind

/// The shape of a reflected value, without the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Scalar,
    Object,
    Structure,
    List,
    Map,
}

impl ReflectKind {
    pub const fn name(self) -> &'static str {
        match self {
            ReflectKind::Scalar => "Scalar",
            ReflectKind::Object => "Object",
            ReflectKind::Structure => "Structure",
            ReflectKind::List => "List",
            ReflectKind::Map => "Map",
        }
    }
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// -----------------------------------------------------------------------------
// ReflectRef / ReflectMut

/// An immutable view of a reflected value, by shape.
pub enum ReflectRef<'a> {
    Scalar(&'a dyn Scalar),
    Object(&'a dyn Object),
    Structure(&'a dyn Structure),
    List(&'a dyn List),
    Map(&'a dyn Map),
}

/// A mutable view of a reflected value, by shape.
pub enum ReflectMut<'a> {
    Scalar(&'a mut dyn Scalar),
    Object(&'a mut dyn Object),
    Structure(&'a mut dyn Structure),
    List(&'a mut dyn List),
    Map(&'a mut dyn Map),
}

macro_rules! impl_kind {
    ($ty:ident) => {
        impl $ty<'_> {
            pub const fn kind(&self) -> ReflectKind {
                match self {
                    $ty::Scalar(_) => ReflectKind::Scalar,
                    $ty::Object(_) => ReflectKind::Object,
                    $ty::Structure(_) => ReflectKind::Structure,
                    $ty::List(_) => ReflectKind::List,
                    $ty::Map(_) => ReflectKind::Map,
                }
            }
        }
    };
}

impl_kind!(ReflectRef);
impl_kind!(ReflectMut);
