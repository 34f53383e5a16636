use std::io::Write;

use log::trace;

use crate::constants::{ID_SIZE, NAME_TABLE_LEN};
use crate::framing::{FramingError, RecordWriter};
use crate::headers::{encode_file_header, encode_selection_header, FileHeader, SelectionHeader};
use crate::selection::file::SelectionFile;
use crate::selection::types::Selection;
use crate::types::Result;

/// Encode a whole selection file.
///
/// Layout (4-byte integers unless noted):
///
/// ```text
/// [ 4 ][ 6 ][ 4 ]                       file header
/// [ 3000 ][ names (3000 bytes) ][ 3000 ]
/// 6 x selection block
/// ```
pub fn encode_selections<W: Write>(w: &mut RecordWriter<W>, file: &SelectionFile) -> Result<()> {
    encode_file_header(w, &FileHeader::default())?;

    let mut names = Vec::with_capacity(NAME_TABLE_LEN);
    for selection in file.iter() {
        names.extend_from_slice(selection.name().as_bytes());
    }
    w.write_record(&names)?;

    for selection in file.iter() {
        encode_selection(w, selection)?;
    }
    Ok(())
}

/// Encode one selection block.
///
/// ```text
/// all empty:  [8][1][6][8]  6 x [4][0][4]
/// otherwise:  [8][0][6][8]  per type: [4][0][4]
///                                  or [4][n][4] [4n][ids..][4n]
/// ```
pub fn encode_selection<W: Write>(w: &mut RecordWriter<W>, selection: &Selection) -> Result<()> {
    let header = SelectionHeader::for_selection(selection);
    encode_selection_header(w, &header)?;

    for (ptype, ids) in selection.all_ids().iter().enumerate() {
        let count = i32::try_from(ids.len())
            .map_err(|_| FramingError::TooLarge { len: ids.len() * ID_SIZE })?;
        w.write_ints(&[count])?;
        if !ids.is_empty() {
            w.write_ints(ids)?;
        }
        trace!("type {}: {} ids", ptype, ids.len());
    }
    Ok(())
}
