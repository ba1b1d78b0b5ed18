use crate::info::{FieldType, Typed};

// -----------------------------------------------------------------------------
// FieldDescriptor

/// Static description of one declared field of a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: &'static str,
    field_type: FieldType,
    class_name: &'static str,
}

impl FieldDescriptor {
    /// Describes a field named `name` holding a `T`.
    ///
    /// `Option<T>` fields are described by `T`.
    ///
    /// ```
    /// use amc_coding::info::{FieldDescriptor, FieldType};
    ///
    /// let field = FieldDescriptor::new::<Option<Vec<u32>>>("ids");
    /// assert_eq!(field.name(), "ids");
    /// assert_eq!(field.field_type(), FieldType::CollectionArrayMutable);
    /// assert_eq!(field.class_name(), "Vec");
    /// ```
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            field_type: T::FIELD_TYPE,
            class_name: T::CLASS_NAME,
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// The class name of the declared field type.
    ///
    /// For collection fields this is the class the decoder tries to build.
    #[inline]
    pub const fn class_name(&self) -> &'static str {
        self.class_name
    }
}

// -----------------------------------------------------------------------------
// ClassInfo

/// Static description of a class: its name and declared fields in order.
#[derive(Debug, Clone, Copy)]
pub struct ClassInfo {
    class_name: &'static str,
    fields: &'static [FieldDescriptor],
}

impl ClassInfo {
    #[inline]
    pub const fn new(class_name: &'static str, fields: &'static [FieldDescriptor]) -> Self {
        Self { class_name, fields }
    }

    #[inline]
    pub const fn class_name(&self) -> &'static str {
        self.class_name
    }

    #[inline]
    pub const fn fields(&self) -> &'static [FieldDescriptor] {
        self.fields
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'static, FieldDescriptor> {
        self.fields.iter()
    }

    #[inline]
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[inline]
    pub fn field_names(&self) -> impl ExactSizeIterator<Item = &'static str> {
        self.fields.iter().map(FieldDescriptor::name)
    }

    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{ClassInfo, FieldDescriptor};
    use crate::info::FieldType;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;

    static FIELDS: [FieldDescriptor; 3] = [
        FieldDescriptor::new::<String>("name"),
        FieldDescriptor::new::<BTreeMap<String, u8>>("scores"),
        FieldDescriptor::new::<Option<i64>>("age"),
    ];

    #[test]
    fn lookup() {
        let info = ClassInfo::new("Person", &FIELDS);
        assert_eq!(info.field_len(), 3);
        assert_eq!(info.field_names().collect::<Vec<_>>(), ["name", "scores", "age"]);
        assert_eq!(
            info.field("scores").map(|f| f.field_type()),
            Some(FieldType::CollectionHashMutable)
        );
        assert_eq!(info.field("age").map(|f| f.field_type()), Some(FieldType::Scalar));
        assert!(info.field("missing").is_none());
    }
}
