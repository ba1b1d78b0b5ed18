use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use thiserror::Error;

use crate::info::{FieldType, Typed};
use crate::registry::{ClassMeta, FromType, GetClassMeta, TypeTraitDefault, TypeTraitFromReflect};
use crate::{FromReflect, Reflect, ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Structure

/// A fixed-layout record of numbers, coded as a `{a, b}` string.
///
/// Usually implemented with `#[derive(Reflect)]` and `#[reflect(structure)]`.
///
/// ```
/// use amc_coding::{derive::Reflect, ops::Structure};
///
/// #[derive(Reflect, Debug, PartialEq)]
/// #[reflect(structure)]
/// struct Point {
///     x: f64,
///     y: f64,
/// }
///
/// let s = Point { x: 1.0, y: -2.5 }.to_dynamic_structure();
/// assert_eq!(s.to_string(), "{1, -2.5}");
/// assert_eq!(Point::from_dynamic_structure(&s), Some(Point { x: 1.0, y: -2.5 }));
/// ```
pub trait Structure: Reflect {
    /// Converts the record to its component tree.
    fn to_dynamic_structure(&self) -> DynamicStructure;

    /// Rebuilds the record, `None` if the layout does not match.
    fn from_dynamic_structure(structure: &DynamicStructure) -> Option<Self>
    where
        Self: Sized;
}

// -----------------------------------------------------------------------------
// StructComponent

/// A type that can be one component of a [`Structure`].
///
/// Implemented for the numbers that `f64` holds exactly and for structures
/// themselves, which nest.
pub trait StructComponent: Sized {
    fn to_struct_field(&self) -> StructField;

    fn from_struct_field(field: &StructField) -> Option<Self>;
}

impl StructComponent for f64 {
    #[inline]
    fn to_struct_field(&self) -> StructField {
        StructField::Number(*self)
    }

    #[inline]
    fn from_struct_field(field: &StructField) -> Option<Self> {
        field.as_number()
    }
}

impl StructComponent for f32 {
    #[inline]
    fn to_struct_field(&self) -> StructField {
        StructField::Number(f64::from(*self))
    }

    #[inline]
    fn from_struct_field(field: &StructField) -> Option<Self> {
        field.as_number().map(|n| n as f32)
    }
}

macro_rules! impl_integer_component {
    ($($ty:ty),*) => {
        $(
            impl StructComponent for $ty {
                #[inline]
                fn to_struct_field(&self) -> StructField {
                    StructField::Number(f64::from(*self))
                }

                fn from_struct_field(field: &StructField) -> Option<Self> {
                    let n = field.as_number()?;
                    if n.fract() != 0.0 || n < <$ty>::MIN as f64 || n > <$ty>::MAX as f64 {
                        return None;
                    }
                    Some(n as $ty)
                }
            }
        )*
    };
}

impl_integer_component!(i8, i16, i32, u8, u16, u32);

// -----------------------------------------------------------------------------
// StructField

/// One component of a [`DynamicStructure`].
#[derive(Debug, Clone, PartialEq)]
pub enum StructField {
    Number(f64),
    Nested(DynamicStructure),
}

impl StructField {
    #[inline]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            StructField::Number(n) => Some(*n),
            StructField::Nested(_) => None,
        }
    }

    #[inline]
    pub const fn as_nested(&self) -> Option<&DynamicStructure> {
        match self {
            StructField::Nested(s) => Some(s),
            StructField::Number(_) => None,
        }
    }
}

impl fmt::Display for StructField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructField::Number(n) => fmt::Display::fmt(n, f),
            StructField::Nested(s) => fmt::Display::fmt(s, f),
        }
    }
}

// -----------------------------------------------------------------------------
// DynamicStructure

/// The parsed form of a structure string.
///
/// The grammar is
///
/// ```text
/// structure := '{' item (', ' item)* '}'
/// item      := number | structure
/// ```
///
/// Numbers are printed in their shortest round-trip form. Parsing accepts
/// any whitespace around items, but only the canonical rendering is
/// recognised as a structure when the category of a string is guessed.
///
/// ```
/// use amc_coding::ops::{DynamicStructure, StructField};
///
/// let rect: DynamicStructure = "{{0,0}, {10.5, 4}}".parse().unwrap();
/// assert_eq!(rect.len(), 2);
/// assert_eq!(rect.to_string(), "{{0, 0}, {10.5, 4}}");
///
/// assert!(DynamicStructure::is_canonical("{{0, 0}, {10.5, 4}}"));
/// assert!(!DynamicStructure::is_canonical("{{0,0}, {10.5, 4}}"));
/// assert!(!DynamicStructure::is_canonical("{hello}"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DynamicStructure {
    fields: Vec<StructField>,
}

/// The error returned when a string is not a structure encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid structure encoding at byte {position}")]
pub struct ParseStructureError {
    position: usize,
}

impl ParseStructureError {
    /// The byte offset at which parsing failed.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl DynamicStructure {
    /// Nesting deeper than this fails to parse.
    pub const MAX_NESTING: usize = 32;

    #[inline]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn from_fields(fields: impl IntoIterator<Item = StructField>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
        }
    }

    #[inline]
    pub fn fields(&self) -> &[StructField] {
        &self.fields
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[inline]
    pub fn push(&mut self, field: StructField) {
        self.fields.push(field);
    }

    /// Returns `true` if `s` parses and renders back to exactly `s`.
    pub fn is_canonical(s: &str) -> bool {
        // Cheap rejection before parsing.
        if !s.starts_with('{') || !s.ends_with('}') {
            return false;
        }
        match s.parse::<Self>() {
            Ok(parsed) => parsed.to_string() == s,
            Err(_) => false,
        }
    }
}

impl fmt::Display for DynamicStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        let mut iter = self.fields.iter();
        if let Some(first) = iter.next() {
            fmt::Display::fmt(first, f)?;
        }
        for field in iter {
            f.write_str(", ")?;
            fmt::Display::fmt(field, f)?;
        }
        f.write_str("}")
    }
}

impl FromStr for DynamicStructure {
    type Err = ParseStructureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser { input: s, pos: 0 };
        let structure = parser.structure(0)?;
        parser.skip_whitespace();
        if parser.pos != s.len() {
            return Err(parser.error());
        }
        Ok(structure)
    }
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl Parser<'_> {
    #[inline]
    fn error(&self) -> ParseStructureError {
        ParseStructureError { position: self.pos }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, byte: u8) -> Result<(), ParseStructureError> {
        if self.peek() == Some(byte) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.error())
        }
    }

    fn structure(&mut self, depth: usize) -> Result<DynamicStructure, ParseStructureError> {
        if depth >= DynamicStructure::MAX_NESTING {
            return Err(self.error());
        }
        self.skip_whitespace();
        self.expect(b'{')?;
        let mut structure = DynamicStructure::new();
        loop {
            self.skip_whitespace();
            let field = if self.peek() == Some(b'{') {
                StructField::Nested(self.structure(depth + 1)?)
            } else {
                StructField::Number(self.number()?)
            };
            structure.push(field);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b'}') => {
                    self.pos += 1;
                    return Ok(structure);
                }
                _ => return Err(self.error()),
            }
        }
    }

    fn number(&mut self) -> Result<f64, ParseStructureError> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|b| !matches!(b, b',' | b'}' | b'{') && !b.is_ascii_whitespace())
        {
            self.pos += 1;
        }
        let token = &self.input[start..self.pos];
        token
            .parse::<f64>()
            .map_err(|_| ParseStructureError { position: start })
    }
}

// -----------------------------------------------------------------------------
// Reflect

impl Typed for DynamicStructure {
    const FIELD_TYPE: FieldType = FieldType::Structure;
    const CLASS_NAME: &'static str = "DynamicStructure";
}

impl Reflect for DynamicStructure {
    #[inline]
    fn class_name(&self) -> &'static str {
        Self::CLASS_NAME
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Structure(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Structure(self)
    }

    #[inline]
    fn reflect_clone(&self) -> Option<Box<dyn Reflect>> {
        Some(Box::new(self.clone()))
    }
}

impl Structure for DynamicStructure {
    #[inline]
    fn to_dynamic_structure(&self) -> DynamicStructure {
        self.clone()
    }

    #[inline]
    fn from_dynamic_structure(structure: &DynamicStructure) -> Option<Self> {
        Some(structure.clone())
    }
}

impl StructComponent for DynamicStructure {
    #[inline]
    fn to_struct_field(&self) -> StructField {
        StructField::Nested(self.clone())
    }

    #[inline]
    fn from_struct_field(field: &StructField) -> Option<Self> {
        field.as_nested().cloned()
    }
}

impl FromReflect for DynamicStructure {
    fn from_reflect(reflect: &dyn Reflect) -> Option<Self> {
        match reflect.reflect_ref() {
            ReflectRef::Structure(s) => Some(s.to_dynamic_structure()),
            ReflectRef::Scalar(s) => s.to_value().as_str()?.parse().ok(),
            _ => None,
        }
    }
}

impl GetClassMeta for DynamicStructure {
    fn get_class_meta() -> Option<ClassMeta> {
        let mut meta = ClassMeta::of::<Self>();
        meta.insert_trait(<TypeTraitDefault as FromType<Self>>::from_type());
        meta.insert_trait(<TypeTraitFromReflect as FromType<Self>>::from_type());
        Some(meta)
    }
}

impl From<DynamicStructure> for String {
    #[inline]
    fn from(value: DynamicStructure) -> Self {
        value.to_string()
    }
}

// -----------------------------------------------------------------------------
// Tests
