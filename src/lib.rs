// Copyright 2025 The unscope contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![allow(dead_code)]

//! # unscope
//!
//! A cross-platform framework for analyzing the metadata of Unreal Engine
//! package files. Built in pure Rust, `unscope` decodes the property
//! descriptor records that package archives attach to their exported objects,
//! without requiring the engine or any platform-specific tooling.
//!
//! ## Features
//!
//! - **Property descriptor decoding** - The full flag-conditional,
//!   variable-length record layout, dispatched over all eleven property kinds
//! - **Compact index codec** - The engine's variable-width signed integer
//!   encoding used for name and object table indices
//! - **Deferred reference resolution** - Object references resolve lazily
//!   against the export/import table, cached and cycle-guarded
//! - **Memory safe** - Bounds-checked reads with comprehensive error handling
//!
//! ## Quick Start
//!
//! ```rust
//! use unscope::{Parser, metadata::{names::NameTable, properties::{PropertyDescriptor, PropertyKind}}};
//!
//! let names = NameTable::new(vec!["None".into(), "Default".into()]);
//!
//! // arrayDimensions=1, flags=0, categoryNameId=1
//! let record = [
//!     0x01, 0x00, 0x00, 0x00,
//!     0x00, 0x00, 0x00, 0x00,
//!     0x01,
//! ];
//!
//! let mut parser = Parser::new(&record);
//! let descriptor = PropertyDescriptor::read(&mut parser, &names, PropertyKind::Bool, "bHidden")?;
//!
//! assert_eq!(descriptor.category, "Default");
//! assert!(descriptor.replication_offset.is_none());
//! # Ok::<(), unscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `unscope` is organized into a small set of layers:
//!
//! - [`Parser`] and the `file` I/O helpers - cursor-based, bounds-checked
//!   little-endian reads over a byte buffer, including the compact index codec
//! - [`metadata::names`] - the package name table consumed during decoding
//! - [`metadata::objects`] - export/import table indices, the on-demand
//!   fetch seam, and deferred reference resolution
//! - [`metadata::properties`] - the property flag table and the per-kind
//!   descriptor record decoders
//!
//! Decoding is strictly sequential over a single shared cursor: every field
//! of a record is read in the order it appears, because the presence and
//! position of later fields depend on earlier ones. Resolution of object
//! references is a separate, later pass that may be invoked at any time.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`](Result). A record either
//! decodes completely or fails as a whole; short reads, invalid table
//! indices, and misuse of the scalar value-type accessor are all distinct,
//! fatal error variants.

#[macro_use]
pub(crate) mod macros;

#[macro_use]
pub(crate) mod error;
pub(crate) mod file;

/// Definitions, parsing and resolution of package metadata.
///
/// This module implements the package metadata model:
///
/// - [`metadata::names`] - the ordered name table, looked up by index during
///   record decoding
/// - [`metadata::objects`] - export/import table indices, entity handles,
///   the [`metadata::objects::ObjectStore`] fetch seam, and the deferred
///   [`metadata::objects::ObjectRef`] resolution cell
/// - [`metadata::properties`] - property flags, kinds, and the descriptor
///   record decoders
pub mod metadata;

/// `unscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is
/// always [`Error`]. Used consistently throughout the crate for all fallible
/// operations.
pub type Result<T> = std::result::Result<T, Error>;

/// `unscope` Error type
///
/// The main error type for all operations in this crate. Provides detailed
/// error information for byte-level parsing, table lookups, and property
/// record decoding.
pub use error::Error;

/// Provides access to low-level byte parsing utilities.
///
/// The [`Parser`] type is the cursor every record decoder consumes, and
/// [`PackIO`] is the trait behind its typed little-endian reads.
///
/// # Example
///
/// ```rust
/// use unscope::Parser;
/// let data = [0x2A, 0x00, 0x00, 0x00];
/// let mut parser = Parser::new(&data);
/// assert_eq!(parser.read_le::<u32>()?, 42);
/// # Ok::<(), unscope::Error>(())
/// ```
pub use file::{io::PackIO, parser::Parser};
