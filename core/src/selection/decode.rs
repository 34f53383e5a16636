use std::array;
use std::io::Read;

use log::{debug, trace, warn};

use crate::constants::{NAME_LENGTH, NAME_TABLE_LEN, NUM_PTYPES, NUM_SELECTIONS};
use crate::framing::{FramingError, RecordReader};
use crate::headers::{decode_file_header, decode_selection_header};
use crate::selection::file::SelectionFile;
use crate::selection::types::{Selection, SelectionName};
use crate::types::{Result, SelectError};
use crate::utils::fmt_bytes;

/// Decode a whole selection file from a reader positioned at its start.
///
/// Record sequence:
///
/// ```text
/// [ file header ]                      opaque
/// [ name table (6 x 500 bytes) ]
/// 6 x {
///     [ selection header ]             opaque
///     6 x { [ count ] ( [ ids ] if count != 0 ) }
/// }
/// ```
pub fn decode_selections<R: Read>(reader: &mut RecordReader<R>) -> Result<SelectionFile> {
    let endian = reader.endian();

    let raw = reader.read_record()?;
    match decode_file_header(&raw, endian) {
        Ok(h) if h.num_selections as usize == NUM_SELECTIONS => {
            trace!("file header: {} selections", h.num_selections)
        }
        Ok(h) => debug!(
            "file header announces {} selections, reading {} regardless",
            h.num_selections, NUM_SELECTIONS
        ),
        Err(e) => debug!("opaque file header {}: {}", fmt_bytes(&raw), e),
    }

    let names = reader.read_record()?;
    if names.len() != NAME_TABLE_LEN {
        return Err(SelectError::MalformedFile(format!(
            "name table is {} bytes, expected {}",
            names.len(),
            NAME_TABLE_LEN
        )));
    }

    let mut selections: [Selection; NUM_SELECTIONS] = array::from_fn(|i| {
        let mut raw = [0u8; NAME_LENGTH];
        raw.copy_from_slice(&names[i * NAME_LENGTH..(i + 1) * NAME_LENGTH]);
        Selection::with_name(SelectionName::from_raw(raw))
    });

    for (index, selection) in selections.iter_mut().enumerate() {
        decode_selection(reader, index, selection)?;
        debug!("decoded {} ({} ids)", selection, selection.len());
    }

    if !reader.is_exhausted()? {
        warn!(
            "ignoring trailing data after {} records",
            reader.records_read()
        );
    }

    Ok(SelectionFile::from_selections(selections))
}

/// Decode one selection block into `selection`, whose name is already set.
pub fn decode_selection<R: Read>(
    reader: &mut RecordReader<R>,
    index: usize,
    selection: &mut Selection,
) -> Result<()> {
    let raw = match reader.read_record() {
        Ok(raw) => raw,
        Err(FramingError::EndOfStream { .. }) => {
            return Err(SelectError::MalformedFile(format!(
                "only {} of {} selections present",
                index, NUM_SELECTIONS
            )))
        }
        Err(e) => return Err(e.into()),
    };
    match decode_selection_header(&raw, reader.endian()) {
        Ok(h) => trace!(
            "selection {} header: empty_flag={} categories={}",
            index, h.empty_flag, h.num_categories
        ),
        Err(e) => debug!("selection {}: opaque header {}: {}", index, fmt_bytes(&raw), e),
    }

    for ptype in 0..NUM_PTYPES {
        let count = reader.read_ints()?;

        // A zero count cannot be told apart from an absent category, and the
        // count is not required to match the length of the id record.
        match count.first() {
            Some(&n) if n != 0 => {
                let ids = reader.read_ints()?;
                if count.len() != 1 || usize::try_from(n).ok() != Some(ids.len()) {
                    warn!(
                        "selection {} type {}: count record {:?} but {} ids",
                        index, ptype, count, ids.len()
                    );
                }
                selection.set_ids(ptype, ids)?;
            }
            _ => trace!("selection {} type {}: empty", index, ptype),
        }
    }

    Ok(())
}
