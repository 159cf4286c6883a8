//! Property descriptor record decoding.
//!
//! Every property record starts with the same base layout: array dimensions,
//! the flags word, the category name index and, only when the `NET` flag bit
//! is set, a replication offset. What follows depends on the declared kind:
//! the reference-bearing kinds store one compact object index (`Class` a
//! second one for its metaclass), the rest store nothing.
//!
//! Fields are read in strict order because the presence and position of
//! later fields depend on earlier values; a record either decodes completely
//! or fails as a whole.

use crate::{
    file::parser::Parser,
    metadata::{
        names::NameTable,
        objects::{ObjectIndex, ObjectRef},
        properties::{PropertyFlags, PropertyKind},
    },
    Error, Result,
};

/// Wraps a read so a short read reports which record field was hit.
fn field<T>(result: Result<T>, field: &'static str) -> Result<T> {
    result.map_err(|err| match err {
        Error::OutOfBounds => Error::ShortRead { field },
        other => other,
    })
}

/// The kind-specific trailing fields of a property descriptor record.
///
/// Read after the base layout and any `NET`-conditional field, dispatched
/// over the declared [`PropertyKind`]. The reference-bearing variants hold
/// unresolved [`ObjectRef`] cells; resolving them is a separate, later pass.
#[derive(Debug)]
pub enum PropertyLayout {
    /// 32-bit float instance values, no trailing descriptor fields
    Float,
    /// 32-bit signed integer instance values, no trailing descriptor fields
    Int,
    /// Narrow character instance values, no trailing descriptor fields
    Str,
    /// No trailing descriptor fields
    Bool,
    /// No trailing descriptor fields
    Name,
    /// No trailing descriptor fields
    Delegate,
    /// Reference to the class the property's object values must be instances of
    Object {
        /// The required class of value objects
        value: ObjectRef,
    },
    /// Reference to the struct type of the property's values
    Struct {
        /// The struct definition values conform to
        value: ObjectRef,
    },
    /// Reference to the inner property describing the element type
    Array {
        /// The element property descriptor
        inner: ObjectRef,
    },
    /// Reference to the enumeration definition backing the byte values
    Byte {
        /// The enumeration definition, or null for plain bytes
        enumeration: ObjectRef,
    },
    /// Class value reference plus the permitted metaclass
    Class {
        /// The required class of values
        value: ObjectRef,
        /// The metaclass values must be assignable to
        meta_class: ObjectRef,
    },
}

impl PropertyLayout {
    /// Read the trailing fields for `kind`, continuing at the cursor.
    pub(crate) fn read(parser: &mut Parser, kind: PropertyKind) -> Result<PropertyLayout> {
        Ok(match kind {
            PropertyKind::Float => PropertyLayout::Float,
            PropertyKind::Int => PropertyLayout::Int,
            PropertyKind::Str => PropertyLayout::Str,
            PropertyKind::Bool => PropertyLayout::Bool,
            PropertyKind::Name => PropertyLayout::Name,
            PropertyKind::Delegate => PropertyLayout::Delegate,
            PropertyKind::Object => PropertyLayout::Object {
                value: Self::read_reference(parser, "object class index")?,
            },
            PropertyKind::Struct => PropertyLayout::Struct {
                value: Self::read_reference(parser, "struct type index")?,
            },
            PropertyKind::Array => PropertyLayout::Array {
                inner: Self::read_reference(parser, "inner property index")?,
            },
            PropertyKind::Byte => PropertyLayout::Byte {
                enumeration: Self::read_reference(parser, "enumeration index")?,
            },
            PropertyKind::Class => PropertyLayout::Class {
                value: Self::read_reference(parser, "class value index")?,
                meta_class: Self::read_reference(parser, "metaclass index")?,
            },
        })
    }

    fn read_reference(parser: &mut Parser, field_name: &'static str) -> Result<ObjectRef> {
        let index = field(parser.read_compact_index(), field_name)?;
        Ok(ObjectRef::new(ObjectIndex::new(index)))
    }

    /// The declared kind this layout was decoded for.
    #[must_use]
    pub fn kind(&self) -> PropertyKind {
        match self {
            PropertyLayout::Float => PropertyKind::Float,
            PropertyLayout::Int => PropertyKind::Int,
            PropertyLayout::Str => PropertyKind::Str,
            PropertyLayout::Bool => PropertyKind::Bool,
            PropertyLayout::Name => PropertyKind::Name,
            PropertyLayout::Delegate => PropertyKind::Delegate,
            PropertyLayout::Object { .. } => PropertyKind::Object,
            PropertyLayout::Struct { .. } => PropertyKind::Struct,
            PropertyLayout::Array { .. } => PropertyKind::Array,
            PropertyLayout::Byte { .. } => PropertyKind::Byte,
            PropertyLayout::Class { .. } => PropertyKind::Class,
        }
    }
}

/// One decoded property descriptor.
///
/// Describes a typed field attached to an exported object: its name, flag
/// set, editor category, optional replication offset and the kind-specific
/// trailing data. Constructed once by [`PropertyDescriptor::read`]; the
/// object references inside [`PropertyDescriptor::layout`] stay unresolved
/// until a later resolution pass dereferences them.
#[derive(Debug)]
pub struct PropertyDescriptor {
    /// Symbolic name of the property, taken from the owning export
    pub name: String,
    /// Element count for fixed-size array fields, 1 for scalars
    pub array_dimensions: u32,
    /// Decoded flag set, the raw word is retained inside
    pub flags: PropertyFlags,
    /// Editor category, resolved through the name table during decode
    pub category: String,
    /// Replication offset, present iff the `NET` flag bit is set
    pub replication_offset: Option<u16>,
    /// Kind-specific trailing fields
    pub layout: PropertyLayout,
    /// Offset of the first byte of the record
    pub offset: usize,
    /// Cursor position one past the last byte consumed
    pub read_head: usize,
}

impl PropertyDescriptor {
    /// Decode one property descriptor record at the cursor.
    ///
    /// Reads the base layout in strict order - `array_dimensions` (u32),
    /// the flags word (u32), the compact category name index, then the
    /// replication offset (u16) only when the decoded flags contain `NET` -
    /// and continues with the trailing fields selected by `kind`. The cursor
    /// is advanced exactly past the bytes consumed.
    ///
    /// # Arguments
    /// * `parser` - Cursor positioned at the start of the record
    /// * `names` - The package name table for the category lookup
    /// * `kind` - Declared kind from the owning export's class descriptor
    /// * `name` - Symbolic name of the owning export
    ///
    /// # Errors
    /// Returns [`crate::Error::ShortRead`] naming the field that ran out of
    /// bytes, [`crate::Error::NameNotFound`] for an invalid category index,
    /// or [`crate::Error::Malformed`] for a corrupt compact index encoding.
    /// On any error no descriptor is produced; partial records are never
    /// accepted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unscope::{Parser, metadata::{names::NameTable, properties::{PropertyDescriptor, PropertyKind}}};
    ///
    /// let names = NameTable::new(vec!["None".into()]);
    /// let record = [
    ///     0x01, 0x00, 0x00, 0x00, // arrayDimensions
    ///     0x00, 0x10, 0x00, 0x00, // flags (NATIVE)
    ///     0x00,                   // categoryNameId
    /// ];
    ///
    /// let mut parser = Parser::new(&record);
    /// let descriptor = PropertyDescriptor::read(&mut parser, &names, PropertyKind::Int, "Health")?;
    /// assert_eq!(descriptor.name, "Health");
    /// assert_eq!(descriptor.read_head, 9);
    /// # Ok::<(), unscope::Error>(())
    /// ```
    pub fn read(
        parser: &mut Parser,
        names: &NameTable,
        kind: PropertyKind,
        name: &str,
    ) -> Result<PropertyDescriptor> {
        let offset = parser.pos();

        let array_dimensions = field(parser.read_le::<u32>(), "array dimensions")?;

        let flags = PropertyFlags::from_word(field(parser.read_le::<u32>(), "property flags")?);

        let category_id = field(parser.read_compact_index(), "category name index")?;
        let category = names.get(category_id)?.to_string();

        // Present iff NET is set; no bytes are consumed otherwise.
        let replication_offset = if flags.contains(PropertyFlags::NET) {
            Some(field(parser.read_le::<u16>(), "replication offset")?)
        } else {
            None
        };

        let layout = PropertyLayout::read(parser, kind)?;

        Ok(PropertyDescriptor {
            name: name.to_string(),
            array_dimensions,
            flags,
            category,
            replication_offset,
            layout,
            offset,
            read_head: parser.pos(),
        })
    }

    /// The declared kind of this property.
    #[must_use]
    pub fn kind(&self) -> PropertyKind {
        self.layout.kind()
    }

    /// The scalar value type for `Float`, `Int` and `Str` properties.
    ///
    /// # Errors
    /// Returns [`crate::Error::NotScalar`] for every other kind.
    pub fn scalar_type(&self) -> Result<crate::metadata::properties::ScalarType> {
        self.kind().scalar_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> NameTable {
        NameTable::new(vec![
            "None".to_string(),
            "Core".to_string(),
            "Engine".to_string(),
            "Default".to_string(),
        ])
    }

    #[test]
    fn base_layout_without_net() {
        let data = [
            0x01, 0x00, 0x00, 0x00, // arrayDimensions = 1
            0x00, 0x20, 0x00, 0x00, // flags = TRANSIENT
            0x02, // categoryNameId = 2
        ];
        let mut parser = Parser::new(&data);

        let descriptor =
            PropertyDescriptor::read(&mut parser, &names(), PropertyKind::Bool, "bNoDelete")
                .unwrap();

        assert_eq!(descriptor.name, "bNoDelete");
        assert_eq!(descriptor.array_dimensions, 1);
        assert!(descriptor.flags.contains(PropertyFlags::TRANSIENT));
        assert_eq!(descriptor.category, "Engine");
        assert_eq!(descriptor.replication_offset, None);
        assert_eq!(descriptor.kind(), PropertyKind::Bool);
        assert_eq!(descriptor.offset, 0);
        assert_eq!(descriptor.read_head, 9);
        assert!(!parser.has_more_data());
    }

    #[test]
    fn net_flag_consumes_exactly_two_more_bytes() {
        let without_net = [
            0x01, 0x00, 0x00, 0x00, //
            0x00, 0x00, 0x00, 0x00, //
            0x00, //
        ];
        let with_net = [
            0x01, 0x00, 0x00, 0x00, //
            0x20, 0x00, 0x00, 0x00, // flags = NET
            0x00, //
            0x34, 0x12, // replicationOffset = 0x1234
        ];

        let mut parser = Parser::new(&without_net);
        let plain =
            PropertyDescriptor::read(&mut parser, &names(), PropertyKind::Name, "Tag").unwrap();

        let mut parser = Parser::new(&with_net);
        let replicated =
            PropertyDescriptor::read(&mut parser, &names(), PropertyKind::Name, "Tag").unwrap();

        assert_eq!(plain.replication_offset, None);
        assert_eq!(replicated.replication_offset, Some(0x1234));
        assert_eq!(replicated.read_head, plain.read_head + 2);
    }

    #[test]
    fn reference_kinds_read_one_trailing_index() {
        for kind in [
            PropertyKind::Object,
            PropertyKind::Struct,
            PropertyKind::Array,
            PropertyKind::Byte,
        ] {
            let data = [
                0x01, 0x00, 0x00, 0x00, //
                0x00, 0x00, 0x00, 0x00, //
                0x00, //
                0x07, // valueId = 7
            ];
            let mut parser = Parser::new(&data);

            let descriptor =
                PropertyDescriptor::read(&mut parser, &names(), kind, "Value").unwrap();

            let reference = match &descriptor.layout {
                PropertyLayout::Object { value } => value,
                PropertyLayout::Struct { value } => value,
                PropertyLayout::Array { inner } => inner,
                PropertyLayout::Byte { enumeration } => enumeration,
                other => panic!("unexpected layout {other:?}"),
            };

            assert_eq!(reference.index(), ObjectIndex::new(7));
            assert!(!reference.is_resolved());
            assert_eq!(descriptor.read_head, 10);
        }
    }

    #[test]
    fn class_reads_value_then_metaclass() {
        let data = [
            0x01, 0x00, 0x00, 0x00, //
            0x00, 0x00, 0x00, 0x00, //
            0x00, //
            0x07, // valueId = 7
            0x09, // metaClassId = 9
        ];
        let mut parser = Parser::new(&data);

        let descriptor =
            PropertyDescriptor::read(&mut parser, &names(), PropertyKind::Class, "CameraClass")
                .unwrap();

        match &descriptor.layout {
            PropertyLayout::Class { value, meta_class } => {
                assert_eq!(value.index(), ObjectIndex::new(7));
                assert_eq!(meta_class.index(), ObjectIndex::new(9));
            }
            other => panic!("unexpected layout {other:?}"),
        }
        assert_eq!(descriptor.read_head, 11);
    }

    #[test]
    fn scalar_kinds_read_no_trailing_bytes() {
        for kind in [PropertyKind::Float, PropertyKind::Int, PropertyKind::Str] {
            let data = [
                0x01, 0x00, 0x00, 0x00, //
                0x00, 0x00, 0x00, 0x00, //
                0x00, //
            ];
            let mut parser = Parser::new(&data);

            let descriptor =
                PropertyDescriptor::read(&mut parser, &names(), kind, "Scalar").unwrap();

            assert_eq!(descriptor.read_head, 9);
            assert!(descriptor.scalar_type().is_ok());
        }
    }

    #[test]
    fn short_read_names_the_field() {
        // Ends after the flags word, before the category index.
        let data = [
            0x01, 0x00, 0x00, 0x00, //
            0x00, 0x00, 0x00, 0x00, //
        ];
        let mut parser = Parser::new(&data);
        let result = PropertyDescriptor::read(&mut parser, &names(), PropertyKind::Int, "Health");

        assert!(matches!(
            result,
            Err(Error::ShortRead {
                field: "category name index"
            })
        ));
    }

    #[test]
    fn truncated_multibyte_category_index() {
        // The category index has its continuation bit set but the data ends
        // one byte early.
        let data = [
            0x01, 0x00, 0x00, 0x00, //
            0x00, 0x00, 0x00, 0x00, //
            0x6C, // continuation set, second byte missing
        ];
        let mut parser = Parser::new(&data);
        let result = PropertyDescriptor::read(&mut parser, &names(), PropertyKind::Int, "Health");

        assert!(matches!(
            result,
            Err(Error::ShortRead {
                field: "category name index"
            })
        ));
    }

    #[test]
    fn truncated_replication_offset() {
        let data = [
            0x01, 0x00, 0x00, 0x00, //
            0x20, 0x00, 0x00, 0x00, // flags = NET
            0x00, //
            0x34, // only one byte of the offset
        ];
        let mut parser = Parser::new(&data);
        let result = PropertyDescriptor::read(&mut parser, &names(), PropertyKind::Int, "Health");

        assert!(matches!(
            result,
            Err(Error::ShortRead {
                field: "replication offset"
            })
        ));
    }

    #[test]
    fn missing_trailing_index() {
        let data = [
            0x01, 0x00, 0x00, 0x00, //
            0x00, 0x00, 0x00, 0x00, //
            0x00, //
        ];
        let mut parser = Parser::new(&data);
        let result = PropertyDescriptor::read(&mut parser, &names(), PropertyKind::Object, "Mesh");

        assert!(matches!(
            result,
            Err(Error::ShortRead {
                field: "object class index"
            })
        ));
    }

    #[test]
    fn invalid_category_index_is_fatal() {
        let data = [
            0x01, 0x00, 0x00, 0x00, //
            0x00, 0x00, 0x00, 0x00, //
            0x2A, // categoryNameId = 42, out of range
        ];
        let mut parser = Parser::new(&data);
        let result = PropertyDescriptor::read(&mut parser, &names(), PropertyKind::Int, "Health");

        assert!(matches!(result, Err(Error::NameNotFound(42))));
    }

    #[test]
    fn fixed_size_array_dimensions_survive() {
        let data = [
            0x20, 0x00, 0x00, 0x00, // arrayDimensions = 32
            0x00, 0x00, 0x00, 0x00, //
            0x00, //
        ];
        let mut parser = Parser::new(&data);
        let descriptor =
            PropertyDescriptor::read(&mut parser, &names(), PropertyKind::Int, "Pad").unwrap();

        assert_eq!(descriptor.array_dimensions, 32);
    }
}
