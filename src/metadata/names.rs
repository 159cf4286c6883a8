//! Package name table.
//!
//! Package archives store every symbolic identifier once, in an ordered name
//! table; records then refer to names by index. This module exposes the
//! [`NameTable`] struct for safe lookup of those indices while records are
//! being decoded.

use crate::{Error, Result};

/// The ordered name table of a package.
///
/// Holds the symbolic names referenced from other package structures, e.g.
/// object names, property categories and class names. Indices come straight
/// from decoded records and are untrusted: lookups are bounds-checked and an
/// invalid index is a corrupt-archive error.
///
/// # Examples
///
/// ```rust
/// use unscope::metadata::names::NameTable;
/// let names = NameTable::new(vec!["None".into(), "Engine".into()]);
/// assert_eq!(names.get(1).unwrap(), "Engine");
/// assert!(names.get(2).is_err());
/// ```
pub struct NameTable {
    entries: Vec<String>,
}

impl NameTable {
    /// Create a `NameTable` from the package's names, in table order.
    ///
    /// # Arguments
    /// * `entries` - The decoded names, index position matching the archive
    #[must_use]
    pub fn new(entries: Vec<String>) -> Self {
        NameTable { entries }
    }

    /// Number of names in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table holds no names.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the name stored at the provided index.
    ///
    /// The index is signed because it arrives via the compact index encoding;
    /// valid name indices are never negative.
    ///
    /// # Arguments
    /// * `index` - The table index to be accessed (comes from decoded records)
    ///
    /// # Errors
    /// Returns [`crate::Error::NameNotFound`] if the index is negative or out
    /// of range.
    pub fn get(&self, index: i32) -> Result<&str> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.entries.get(index))
            .map(String::as_str)
            .ok_or(Error::NameNotFound(index))
    }
}
