use thiserror::Error;

use crate::metadata::{objects::ObjectIndex, properties::PropertyKind};

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! out_of_bounds_error {
    () => {
        crate::Error::OutOfBounds
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// This enum covers all possible error conditions that can occur while decoding package
/// metadata. Each variant provides specific context about the failure mode to enable
/// appropriate error handling.
///
/// # Error Categories
///
/// ## Byte-level Errors
/// - [`Error::OutOfBounds`] - Attempted to read beyond the buffer
/// - [`Error::ShortRead`] - A record field needed more bytes than remained
/// - [`Error::Malformed`] - Corrupted or invalid structure (bad encodings)
///
/// ## Table Lookup Errors
/// - [`Error::NameNotFound`] - A name table index was out of range
/// - [`Error::ObjectNotFound`] - An export/import table index was out of range
///
/// ## Usage Errors
/// - [`Error::NotScalar`] - The scalar value type was requested for a
///   property kind that has none
///
/// All record-decoding errors are fatal for the record being decoded: there is no
/// partial-success state, and nothing is retried at this layer.
#[derive(Error, Debug)]
pub enum Error {
    /// An out of bound access was attempted while parsing.
    ///
    /// This error occurs when trying to read data beyond the end of the
    /// buffer. It's a safety check to prevent buffer overruns during parsing.
    #[error("Out of bound read would have occurred!")]
    OutOfBounds,

    /// A record field could not be read because the data ended first.
    ///
    /// Raised by the record decoders when an underlying read runs out of
    /// bytes, carrying the name of the field that was being read so corrupt
    /// archives can be diagnosed precisely.
    #[error("Unexpected end of data while reading {field}")]
    ShortRead {
        /// The record field that was being read when the data ran out
        field: &'static str,
    },

    /// The data is damaged and could not be parsed.
    ///
    /// This error indicates that a structure does not conform to the package
    /// format, for example an over-long compact index encoding. The error
    /// includes the source location where the malformation was detected.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// Failed to find an entry in the name table.
    ///
    /// This error occurs when a decoded name index is negative or beyond the
    /// end of the package's name table. Per the format contract this is a
    /// corrupt-archive condition, never silently defaulted.
    #[error("Name table has no entry for index - {0}")]
    NameNotFound(i32),

    /// Failed to find an entry in the export/import table.
    ///
    /// The associated [`ObjectIndex`] identifies which reference could not be
    /// fetched.
    #[error("Object table has no entry for index - {0}")]
    ObjectNotFound(ObjectIndex),

    /// The scalar value type was requested for a kind that has none.
    ///
    /// Only `Float`, `Int` and `Str` properties carry a fixed-width scalar
    /// value type; asking any other kind is a caller-side configuration
    /// error.
    #[error("{0} properties have no scalar value type")]
    NotScalar(PropertyKind),
}
