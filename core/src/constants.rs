//! Fixed dimensions of the gadgetviewer selection file.
//!
//! Every size used by both the encoder and the decoder lives here, so the two
//! directions cannot drift apart.

/// Number of selections stored in every file.
pub const NUM_SELECTIONS: usize = 6;

/// Number of particle-type categories per selection.
pub const NUM_PTYPES: usize = 6;

/// Size in bytes of one particle ID (`i32`).
pub const ID_SIZE: usize = std::mem::size_of::<i32>();

/// Fixed storage width of a selection name, in bytes.
pub const NAME_LENGTH: usize = 500;

/// Byte length of the concatenated name table record.
pub const NAME_TABLE_LEN: usize = NUM_SELECTIONS * NAME_LENGTH;

/// Size in bytes of the leading and trailing record length fields.
pub const LENGTH_FIELD_SIZE: usize = 4;

/// Padding byte appended to names shorter than `NAME_LENGTH`.
pub const NAME_PAD: u8 = b' ';

/// Prefix of the names given to freshly created selections ("Selection 01" ..).
pub const DEFAULT_NAME_PREFIX: &str = "Selection";

/// Values of the first integer of a per-selection header record.
pub mod selection_flags {
    /// Selection carries at least one non-empty category.
    pub const HAS_IDS: i32 = 0;
    /// Every category of the selection is empty.
    pub const ALL_EMPTY: i32 = 1;
}
