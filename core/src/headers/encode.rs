//! headers/encode.rs
//!
//! Writes header records through a `RecordWriter`, so their framing always
//! matches the rest of the file.

use std::io::Write;

use crate::framing::{FramingError, RecordWriter};
use crate::headers::types::{FileHeader, SelectionHeader};

/// Emit `[4][num_selections][4]`.
pub fn encode_file_header<W: Write>(
    w: &mut RecordWriter<W>,
    h: &FileHeader,
) -> Result<(), FramingError> {
    w.write_ints(&h.to_ints())
}

/// Emit `[8][empty_flag][num_categories][8]`.
pub fn encode_selection_header<W: Write>(
    w: &mut RecordWriter<W>,
    h: &SelectionHeader,
) -> Result<(), FramingError> {
    w.write_ints(&h.to_ints())
}
