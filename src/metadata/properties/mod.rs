//! Property descriptor records.
//!
//! Exported objects in a package carry typed fields described by property
//! descriptor records. Every record shares a common base layout whose shape
//! depends on bits decoded earlier in the same record, followed by trailing
//! fields that depend on the property's declared kind. This module contains:
//!
//! - [`PropertyFlags`] - the fixed table of flag bit meanings
//! - [`PropertyKind`] - the declared kind set, with the scalar value types
//!   of the numeric kinds
//! - [`PropertyDescriptor`] / [`PropertyLayout`] - the decoded record, base
//!   fields plus the kind-specific tail
//!
//! The kind is not self-described inside the record: the caller knows it from
//! the owning export's class descriptor and passes it into
//! [`PropertyDescriptor::read`], which dispatches the trailing decode over it.

mod descriptor;
mod flags;
mod kind;

pub use descriptor::{PropertyDescriptor, PropertyLayout};
pub use flags::PropertyFlags;
pub use kind::{PropertyKind, ScalarType, ScalarValue};
