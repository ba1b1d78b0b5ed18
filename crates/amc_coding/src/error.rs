use alloc::string::String;

use thiserror::Error;

use crate::info::{Capabilities, FieldType};

/// An error that occurs while encoding or decoding an object graph.
///
/// A failure anywhere in the graph aborts the whole operation. No partial
/// result is returned.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CodingError {
    /// Decoding was asked to build an object from no dictionary.
    #[error("no dictionary to decode an object from")]
    NilInput,
    /// An object dictionary has no string under the `class` key.
    #[error("object dictionary has no `class` key")]
    MissingClassKey,
    /// The class named by a dictionary is not registered.
    #[error("class `{class_name}` is not registered or its name is ambiguous")]
    UnknownClass { class_name: String },
    /// A decoded value could not be stored in the field of its object.
    #[error("field `{field}` of class `{class_name}` cannot hold the decoded value")]
    TargetFieldNotAssignable { class_name: String, field: String },
    /// A structure field is not a valid `{a, b}` string.
    #[error("`{input}` is not a structure encoding")]
    MalformedStructureEncoding { input: String },
    /// A value or class does not offer the collection operations its category needs.
    #[error("class `{class_name}` does not support {required}")]
    UnsupportedCollectionCapability {
        class_name: String,
        required: Capabilities,
    },
    /// A value has a different shape than the category it is coded under.
    #[error("expected a value of category {field_type}, found {found}")]
    MismatchedFieldType {
        field_type: FieldType,
        found: &'static str,
    },
    /// The class has no way to create an instance.
    #[error("class `{class_name}` cannot be instantiated")]
    NotConstructible { class_name: String },
    /// The graph is nested deeper than the configured limit.
    #[error("object graph is nested deeper than {limit} levels")]
    DepthLimitExceeded { limit: usize },
}
