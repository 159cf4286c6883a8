//! Package metadata model: names, objects, and property descriptors.
//!
//! This module holds everything above the raw byte layer. Decoding a property
//! descriptor record consumes the [`names::NameTable`] for symbolic lookups
//! and produces [`objects::ObjectRef`] cells that resolve lazily against an
//! [`objects::ObjectStore`].
//!
//! # Key Components
//!
//! - [`names`] - The ordered package name table with fallible indexed lookup
//! - [`objects`] - Export/import table indices, entity handles, the fetch
//!   seam, a caching store wrapper, and deferred reference resolution
//! - [`properties`] - Property flag bits, property kinds with their scalar
//!   value types, and the descriptor record decoders

pub mod names;
pub mod objects;
pub mod properties;
