//! headers/types.rs
//! File-level and per-selection header records.
//!
//! Notes:
//! - Both headers are ordinary framed integer records.
//! - The reader never relies on them; they are parsed for diagnostics only.

use thiserror::Error;

use crate::constants::{selection_flags, ID_SIZE, NUM_PTYPES, NUM_SELECTIONS};
use crate::selection::Selection;

/// Record opening a file, holding the number of selections.
///
/// On disk: `[4][num_selections][4]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub num_selections: i32,
}

impl FileHeader {
    /// Payload length in bytes.
    pub const LEN: usize = ID_SIZE;

    pub fn to_ints(&self) -> [i32; 1] {
        [self.num_selections]
    }

    pub fn from_ints(ints: &[i32]) -> Result<Self, HeaderError> {
        match ints {
            [num_selections] => Ok(Self { num_selections: *num_selections }),
            _ => Err(HeaderError::WrongSize {
                header: "file",
                have: ints.len() * ID_SIZE,
                need: Self::LEN,
            }),
        }
    }
}

impl Default for FileHeader {
    fn default() -> Self {
        Self { num_selections: NUM_SELECTIONS as i32 }
    }
}

/// Record opening each selection block.
///
/// On disk: `[8][empty_flag][num_categories][8]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionHeader {
    /// `selection_flags::ALL_EMPTY` or `selection_flags::HAS_IDS`.
    pub empty_flag: i32,
    pub num_categories: i32,
}

impl SelectionHeader {
    /// Payload length in bytes.
    pub const LEN: usize = 2 * ID_SIZE;

    pub fn for_selection(selection: &Selection) -> Self {
        let empty_flag = if selection.is_empty() {
            selection_flags::ALL_EMPTY
        } else {
            selection_flags::HAS_IDS
        };
        Self { empty_flag, num_categories: NUM_PTYPES as i32 }
    }

    pub fn is_all_empty(&self) -> bool {
        self.empty_flag == selection_flags::ALL_EMPTY
    }

    pub fn to_ints(&self) -> [i32; 2] {
        [self.empty_flag, self.num_categories]
    }

    pub fn from_ints(ints: &[i32]) -> Result<Self, HeaderError> {
        match ints {
            [empty_flag, num_categories] => Ok(Self {
                empty_flag: *empty_flag,
                num_categories: *num_categories,
            }),
            _ => Err(HeaderError::WrongSize {
                header: "selection",
                have: ints.len() * ID_SIZE,
                need: Self::LEN,
            }),
        }
    }
}

#[derive(Debug, Error)]
pub enum HeaderError {
    /// Payload does not have the size of the header it should hold.
    #[error("{header} header payload is {have} bytes, expected {need}")]
    WrongSize { header: &'static str, have: usize, need: usize },

    /// Payload could not be split into integers.
    #[error("{header} header payload of {len} bytes is not integer aligned")]
    Unaligned { header: &'static str, len: usize },
}
