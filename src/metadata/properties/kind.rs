//! Property kinds and scalar value types.
//!
//! The kind of a property is declared by the owning export's class, not by a
//! tag inside the record; it decides which trailing fields the record carries
//! and, for the numeric kinds, the fixed width used whenever an instance
//! value of the property is read from object data.

use strum::{Display, EnumCount, EnumIter};

use crate::{file::parser::Parser, Error, Result};

/// The declared kind of a property.
///
/// Covers the full kind set a package can declare. The kind is known to the
/// caller before a record is decoded (from the owning export's class
/// descriptor) and selects the trailing layout in
/// [`PropertyDescriptor::read`](crate::metadata::properties::PropertyDescriptor::read).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumCount, EnumIter)]
pub enum PropertyKind {
    /// Unsigned byte values, optionally backed by an enumeration definition
    Byte,
    /// 32-bit signed integer values
    Int,
    /// Boolean values
    Bool,
    /// 32-bit float values
    Float,
    /// References to objects of a required class
    Object,
    /// Name table entries
    Name,
    /// Narrow character string values
    Str,
    /// Class references constrained by a metaclass
    Class,
    /// Dynamic arrays of an inner property type
    Array,
    /// Nested struct values
    Struct,
    /// Function delegate values
    Delegate,
}

impl PropertyKind {
    /// Map the class name of a property export to its kind.
    ///
    /// Property exports are instances of engine classes named
    /// `ByteProperty`, `ObjectProperty` and so on; this is how the caller
    /// turns the owning export's class into the kind passed to the decoder.
    /// Returns `None` for class names that are not property classes.
    #[must_use]
    pub fn from_class_name(name: &str) -> Option<PropertyKind> {
        match name {
            "ByteProperty" => Some(PropertyKind::Byte),
            "IntProperty" => Some(PropertyKind::Int),
            "BoolProperty" => Some(PropertyKind::Bool),
            "FloatProperty" => Some(PropertyKind::Float),
            "ObjectProperty" => Some(PropertyKind::Object),
            "NameProperty" => Some(PropertyKind::Name),
            "StrProperty" => Some(PropertyKind::Str),
            "ClassProperty" => Some(PropertyKind::Class),
            "ArrayProperty" => Some(PropertyKind::Array),
            "StructProperty" => Some(PropertyKind::Struct),
            "DelegateProperty" => Some(PropertyKind::Delegate),
            _ => None,
        }
    }

    /// Whether instance values of this kind are fixed-width scalars.
    #[must_use]
    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            PropertyKind::Float | PropertyKind::Int | PropertyKind::Str
        )
    }

    /// The scalar value type used when instance values of this kind are read.
    ///
    /// # Errors
    /// Returns [`crate::Error::NotScalar`] for every kind other than `Float`,
    /// `Int` and `Str`; those kinds have no fixed-width scalar value type and
    /// asking for one is a configuration error.
    pub fn scalar_type(self) -> Result<ScalarType> {
        match self {
            PropertyKind::Float => Ok(ScalarType::Float32),
            PropertyKind::Int => Ok(ScalarType::Int32),
            PropertyKind::Str => Ok(ScalarType::Char),
            other => Err(Error::NotScalar(other)),
        }
    }
}

/// Fixed binary width and type of instance values for the scalar kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalarType {
    /// 32-bit IEEE 754 float
    Float32,
    /// 32-bit signed integer
    Int32,
    /// Narrow (single byte) character
    Char,
}

/// One decoded instance value of a scalar property.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScalarValue {
    /// Value of a `Float` property
    Float(f32),
    /// Value of an `Int` property
    Int(i32),
    /// Value of a `Str` property
    Char(u8),
}

impl ScalarType {
    /// Number of bytes one instance value of this type occupies.
    #[must_use]
    pub fn size(self) -> usize {
        match self {
            ScalarType::Float32 | ScalarType::Int32 => 4,
            ScalarType::Char => 1,
        }
    }

    /// Read one instance value of this type from the cursor.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer bytes remain than the
    /// type requires.
    pub fn read(self, parser: &mut Parser) -> Result<ScalarValue> {
        Ok(match self {
            ScalarType::Float32 => ScalarValue::Float(parser.read_le::<f32>()?),
            ScalarType::Int32 => ScalarValue::Int(parser.read_le::<i32>()?),
            ScalarType::Char => ScalarValue::Char(parser.read_le::<u8>()?),
        })
    }
}
