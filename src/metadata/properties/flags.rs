//! Property flag bits.
//!
//! Every property descriptor record stores a 32-bit flags word right after
//! its array dimensions. The bit meanings are a fixed table; decoding is
//! total for any input word, and bits without a named meaning are retained in
//! the stored word rather than dropped.

use bitflags::bitflags;

bitflags! {
    /// The flag bits of a property descriptor.
    ///
    /// Decoded from the record's 32-bit flags word via
    /// [`PropertyFlags::from_word`]. Some bits change the record layout
    /// itself: [`PropertyFlags::NET`] makes the replication offset field
    /// present.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PropertyFlags: u32 {
        /// Property is user-settable in the editor
        const EDIT = 0x0000_0001;
        /// Actor's property always matches class's default actor property
        const CONST = 0x0000_0002;
        /// Variable is writable by the input system
        const INPUT = 0x0000_0004;
        /// Object can be exported with actor
        const EXPORT_OBJECT = 0x0000_0008;
        /// Optional parameter, only meaningful with `PARM`
        const OPTIONAL_PARM = 0x0000_0010;
        /// Property is relevant to network replication
        const NET = 0x0000_0020;
        /// Reference to a constant object
        const CONST_REF = 0x0000_0040;
        /// Function call parameter
        const PARM = 0x0000_0080;
        /// Value is copied out after function call
        const OUT_PARM = 0x0000_0100;
        /// Property is a short-circuitable evaluation function parm
        const SKIP_PARM = 0x0000_0200;
        /// Return value
        const RETURN_PARM = 0x0000_0400;
        /// Coerce args into this function parameter
        const COERCE_PARM = 0x0000_0800;
        /// Property is native, engine code is responsible for serializing it
        const NATIVE = 0x0000_1000;
        /// Property is transient, not saved and zero-filled at load time
        const TRANSIENT = 0x0000_2000;
        /// Property should be loaded/saved as permanent profile
        const CONFIG = 0x0000_4000;
        /// Property should be loaded as localizable text
        const LOCALIZED = 0x0000_8000;
        /// Property travels across levels/servers
        const TRAVEL = 0x0001_0000;
        /// Property is uneditable in the editor
        const EDIT_CONST = 0x0002_0000;
        /// Load config from base class, not subclass
        const GLOBAL_CONFIG = 0x0004_0000;
        /// Object or dynamic array loaded on demand only
        const ON_DEMAND = 0x0010_0000;
        /// Automatically create inner object
        const NEW = 0x0020_0000;
        /// Fields need construction/destruction
        const NEED_CTOR_LINK = 0x0040_0000;
    }
}

impl PropertyFlags {
    /// Decode a raw 32-bit flags word.
    ///
    /// Total for any input: bits with a named meaning become set flags, bits
    /// without one stay in the stored word and can be recovered through
    /// [`PropertyFlags::word`].
    #[must_use]
    pub fn from_word(word: u32) -> Self {
        Self::from_bits_retain(word)
    }

    /// The raw 32-bit word as stored in the record, including unnamed bits.
    #[must_use]
    pub fn word(&self) -> u32 {
        self.bits()
    }
}
