use core::fmt;

use bitflags::bitflags;

// -----------------------------------------------------------------------------
// FieldType

/// The coding category of a field or value.
///
/// Every field is coded under exactly one category. The category of a
/// declared field comes from its descriptor, the category of a loose value
/// (a collection element) is inferred from the value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// A value that is passed through as a plain scalar.
    Scalar,
    /// A registered class, coded as a dictionary with a class key.
    CustomObject,
    /// A plain record of numbers, coded as a `{a, b}` string.
    Structure,
    /// An ordered collection that is built in one step.
    CollectionArray,
    /// An ordered collection that is built by pushing elements.
    CollectionArrayMutable,
    /// A keyed collection that is built in one step.
    CollectionHash,
    /// A keyed collection that is built by inserting entries.
    CollectionHashMutable,
}

/// The collection family of a [`FieldType`], ignoring mutability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldFamily {
    Scalar,
    CustomObject,
    Structure,
    Ordered,
    Keyed,
}

impl FieldType {
    #[inline]
    pub const fn is_collection(self) -> bool {
        matches!(
            self,
            FieldType::CollectionArray
                | FieldType::CollectionArrayMutable
                | FieldType::CollectionHash
                | FieldType::CollectionHashMutable
        )
    }

    /// Returns `true` for the categories whose values are built incrementally.
    #[inline]
    pub const fn is_mutable(self) -> bool {
        matches!(
            self,
            FieldType::CollectionArrayMutable | FieldType::CollectionHashMutable
        )
    }

    #[inline]
    pub const fn family(self) -> FieldFamily {
        match self {
            FieldType::Scalar => FieldFamily::Scalar,
            FieldType::CustomObject => FieldFamily::CustomObject,
            FieldType::Structure => FieldFamily::Structure,
            FieldType::CollectionArray | FieldType::CollectionArrayMutable => FieldFamily::Ordered,
            FieldType::CollectionHash | FieldType::CollectionHashMutable => FieldFamily::Keyed,
        }
    }

    /// The capabilities a class must offer to be built under this category.
    ///
    /// ```
    /// use amc_coding::info::{Capabilities, FieldType};
    ///
    /// assert_eq!(FieldType::CollectionArray.required_capabilities(), Capabilities::LIST);
    /// assert_eq!(
    ///     FieldType::CollectionHashMutable.required_capabilities(),
    ///     Capabilities::MAP | Capabilities::MAP_MUT,
    /// );
    /// assert!(FieldType::Scalar.required_capabilities().is_empty());
    /// ```
    pub const fn required_capabilities(self) -> Capabilities {
        match self {
            FieldType::CollectionArray => Capabilities::LIST,
            FieldType::CollectionArrayMutable => Capabilities::LIST.union(Capabilities::LIST_MUT),
            FieldType::CollectionHash => Capabilities::MAP,
            FieldType::CollectionHashMutable => Capabilities::MAP.union(Capabilities::MAP_MUT),
            FieldType::Scalar | FieldType::CustomObject | FieldType::Structure => {
                Capabilities::empty()
            }
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// -----------------------------------------------------------------------------
// Capabilities

bitflags! {
    /// The collection operations a class supports.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// Ordered, can be built from a complete list of elements.
        const LIST      = 1 << 0;
        /// Ordered, accepts elements one by one.
        const LIST_MUT  = 1 << 1;
        /// Keyed, can be built from a complete set of entries.
        const MAP       = 1 << 2;
        /// Keyed, accepts entries one by one.
        const MAP_MUT   = 1 << 3;
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("(none)");
        }
        let mut names = self.iter_names().map(|(name, _)| name);
        if let Some(first) = names.next() {
            f.write_str(first)?;
        }
        for name in names {
            write!(f, " | {name}")?;
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Tests
