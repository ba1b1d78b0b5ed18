//! Items used by code generated with `#[derive(Reflect)]`. Not public API.

pub use alloc::boxed::Box;

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::info::{FieldType, Typed};
    use crate::registry::{ClassMeta, ClassRegistry, GetClassMeta};

    /// A registration function submitted by a type with `#[reflect(auto_register)]`.
    pub struct __AutoRegisterFunc(pub fn(&mut ClassRegistry));

    inventory::collect!(__AutoRegisterFunc);

    pub trait __RegisterType {
        fn __register(registry: &mut ClassRegistry);
    }

    impl<T: GetClassMeta> __RegisterType for T {
        #[inline]
        fn __register(registry: &mut ClassRegistry) {
            registry.register::<T>();
        }
    }

    /// Registered through `inventory` like user types, to tell whether
    /// static registration works on the platform.
    pub struct __AvailFlag;

    impl Typed for __AvailFlag {
        const FIELD_TYPE: FieldType = FieldType::Scalar;
        const CLASS_NAME: &'static str = "__AvailFlag";
    }

    impl GetClassMeta for __AvailFlag {
        fn get_class_meta() -> Option<ClassMeta> {
            Some(ClassMeta::of::<Self>())
        }
    }

    inventory::submit! {
        __AutoRegisterFunc(<__AvailFlag as __RegisterType>::__register)
    }

    pub(crate) fn __register_types(registry: &mut ClassRegistry) {
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(registry);
        }
    }
}
