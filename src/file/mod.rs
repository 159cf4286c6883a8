//! Byte-level parsing for package data.
//!
//! This module provides the low-level reading layer every record decoder is
//! built on. It abstracts over a borrowed byte buffer and provides safe,
//! bounds-checked access to the primitive encodings the package format uses.
//!
//! # Key Components
//!
//! - [`crate::file::io`] - The [`crate::file::io::PackIO`] trait and the
//!   little-endian read helpers behind it
//! - [`crate::file::parser::Parser`] - A cursor over a byte buffer with
//!   typed fixed-width reads and the compact index codec
//!
//! The package format is little-endian throughout. Name and object table
//! indices use a variable-width signed "compact index" encoding; everything
//! else is fixed-width.

pub mod io;
pub mod parser;
