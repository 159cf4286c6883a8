//! Export/import table indices and deferred object references.
//!
//! Reference-bearing property descriptors do not resolve their targets while
//! the record is decoded; they store an [`ObjectIndex`] and resolve it later,
//! on demand, against whatever implements [`ObjectStore`]. This module
//! provides:
//!
//! - [`ObjectIndex`] - the signed table index, with 0 reserved as "no reference"
//! - [`ObjectEntity`] / [`ObjectRc`] - the minimal entity handle a fetch yields
//! - [`ObjectStore`] - the fetch seam into the surrounding loader
//! - [`CachedObjects`] - a store wrapper that memoizes fetches per slot
//! - [`ObjectRef`] - the per-descriptor deferred resolution cell
//!
//! # Resolution Semantics
//!
//! Resolution is idempotent and cycle-guarded. An [`ObjectRef`] moves through
//! an explicit three-state lifecycle (unresolved, resolving, resolved); the
//! resolved handle is cached so repeated calls never fetch twice, and a fetch
//! that recursively reaches the same cell returns the partial result instead
//! of re-entering.

use std::{
    fmt,
    sync::{Arc, Mutex, OnceLock},
};

use dashmap::DashMap;

use crate::Result;

/// Signed index into a package's export and import tables.
///
/// Positive values address the export table, negative values the import
/// table, and 0 is reserved to mean "no reference". Indices are stored in
/// records with the compact index encoding.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectIndex(pub i32);

impl ObjectIndex {
    /// Creates a new index from a decoded compact index value
    #[must_use]
    pub fn new(value: i32) -> Self {
        ObjectIndex(value)
    }

    /// Returns the raw signed index value
    #[must_use]
    pub fn value(&self) -> i32 {
        self.0
    }

    /// Returns true if this is the reserved "no reference" index (value 0)
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if the index addresses the export table
    #[must_use]
    pub fn is_export(&self) -> bool {
        self.0 > 0
    }

    /// Returns true if the index addresses the import table
    #[must_use]
    pub fn is_import(&self) -> bool {
        self.0 < 0
    }
}

impl From<i32> for ObjectIndex {
    fn from(value: i32) -> Self {
        ObjectIndex(value)
    }
}

impl fmt::Debug for ObjectIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = if self.is_export() {
            "export"
        } else if self.is_import() {
            "import"
        } else {
            "null"
        };
        write!(f, "ObjectIndex({}, {})", self.0, side)
    }
}

impl fmt::Display for ObjectIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Minimal handle to an entity fetched from the export/import table.
///
/// The full object-graph (class hierarchy, field inheritance) is the
/// surrounding loader's concern; descriptors only need a stable, shareable
/// handle to the entity their reference points at.
#[derive(Debug)]
pub struct ObjectEntity {
    /// The table index this entity was fetched from
    pub index: ObjectIndex,
    /// Symbolic name of the entity
    pub name: String,
}

/// A shared reference to a fetched [`ObjectEntity`]
pub type ObjectRc = Arc<ObjectEntity>;

/// The export/import table fetch seam.
///
/// Implemented by the surrounding archive loader. A fetch may trigger a
/// nested on-demand load of the referenced entity; implementations fail with
/// [`crate::Error::ObjectNotFound`] for indices outside the table range.
pub trait ObjectStore {
    /// Fetch the entity at `index`, loading it on demand if necessary.
    ///
    /// Index 0 never reaches this method; [`ObjectRef::resolve`] short-circuits
    /// it to an empty reference.
    ///
    /// # Errors
    /// Returns [`crate::Error::ObjectNotFound`] if the index is outside the
    /// valid export/import range, or any error raised by the nested load.
    fn fetch(&self, index: ObjectIndex) -> Result<ObjectRc>;
}

#[derive(Default)]
struct Slot {
    cell: OnceLock<ObjectRc>,
    population: Mutex<()>,
}

/// An [`ObjectStore`] wrapper that memoizes fetches per table slot.
///
/// The table is read-mostly: once a slot is populated every further fetch is
/// a cache hit. First-time population of a given slot is serialized through a
/// per-slot lock, while distinct slots populate independently.
///
/// # Examples
///
/// ```rust,ignore
/// let objects = CachedObjects::new(loader);
/// let entity = objects.fetch(ObjectIndex::new(7))?;
/// ```
pub struct CachedObjects<S> {
    inner: S,
    slots: DashMap<ObjectIndex, Arc<Slot>>,
}

impl<S: ObjectStore> CachedObjects<S> {
    /// Wrap a store, memoizing its fetches.
    pub fn new(inner: S) -> Self {
        CachedObjects {
            inner,
            slots: DashMap::new(),
        }
    }

    /// Access the wrapped store.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: ObjectStore> ObjectStore for CachedObjects<S> {
    fn fetch(&self, index: ObjectIndex) -> Result<ObjectRc> {
        let slot = match self.slots.get(&index) {
            Some(slot) => Arc::clone(&slot),
            None => self.slots.entry(index).or_default().value().clone(),
        };

        if let Some(cached) = slot.cell.get() {
            return Ok(cached.clone());
        }

        let _population = lock!(slot.population);
        if let Some(cached) = slot.cell.get() {
            return Ok(cached.clone());
        }

        let entity = self.inner.fetch(index)?;
        let _ = slot.cell.set(entity.clone());
        Ok(entity)
    }
}

/// Resolution lifecycle of an [`ObjectRef`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RefState {
    Unresolved,
    Resolving,
    Resolved,
}

/// A deferred reference from a property descriptor to another package entity.
///
/// Holds the [`ObjectIndex`] decoded from the record and, once
/// [`resolve`](ObjectRef::resolve) has run, a cached handle to the target.
/// The cell is safe to share between threads; resolution of one cell is
/// serialized internally while different cells resolve independently.
pub struct ObjectRef {
    index: ObjectIndex,
    state: Mutex<RefState>,
    target: OnceLock<Option<ObjectRc>>,
}

impl ObjectRef {
    /// Create an unresolved reference to `index`.
    #[must_use]
    pub fn new(index: ObjectIndex) -> Self {
        ObjectRef {
            index,
            state: Mutex::new(RefState::Unresolved),
            target: OnceLock::new(),
        }
    }

    /// The table index this reference points at.
    #[must_use]
    pub fn index(&self) -> ObjectIndex {
        self.index
    }

    /// Returns `true` once a resolution pass has completed for this cell.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.target.get().is_some()
    }

    /// The resolved handle, if resolution has completed and found a target.
    ///
    /// Returns `None` both for unresolved cells and for resolved null
    /// references; use [`is_resolved`](ObjectRef::is_resolved) to tell the
    /// two apart.
    #[must_use]
    pub fn get(&self) -> Option<ObjectRc> {
        self.target.get().cloned().flatten()
    }

    /// Resolve the reference against the export/import table.
    ///
    /// - If a prior resolution already populated the cell, this is a no-op
    ///   returning the cached handle: no fetch is performed.
    /// - A null index (0) resolves to `Ok(None)`, the explicit empty
    ///   reference, without touching the store.
    /// - Otherwise exactly one [`ObjectStore::fetch`] runs; the fetch may
    ///   recursively load further entities. If that recursion reaches this
    ///   same cell again, the re-entrant call returns the partial result
    ///   (the cache as it stands) instead of fetching twice or deadlocking.
    ///
    /// # Errors
    /// Propagates the store's error for indices outside the valid table
    /// range or failed nested loads. A failed resolution leaves the cell
    /// unresolved so a later call may retry.
    pub fn resolve(&self, store: &dyn ObjectStore) -> Result<Option<ObjectRc>> {
        if let Some(target) = self.target.get() {
            return Ok(target.clone());
        }

        {
            let mut state = lock!(self.state);
            match *state {
                // Re-entered while a resolution is in flight, hand back the
                // partial result rather than recursing.
                RefState::Resolving => return Ok(self.get()),
                RefState::Resolved => return Ok(self.get()),
                RefState::Unresolved => *state = RefState::Resolving,
            }
        }

        let resolved = if self.index.is_null() {
            None
        } else {
            match store.fetch(self.index) {
                Ok(entity) => Some(entity),
                Err(err) => {
                    *lock!(self.state) = RefState::Unresolved;
                    return Err(err);
                }
            }
        };

        let _ = self.target.set(resolved.clone());
        *lock!(self.state) = RefState::Resolved;
        Ok(resolved)
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectRef")
            .field("index", &self.index)
            .field("resolved", &self.is_resolved())
            .finish()
    }
}
