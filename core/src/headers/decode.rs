//! headers/decode.rs
//!
//! Parses raw header payloads. Callers treat a failure as "opaque header",
//! not as a broken file.

use crate::framing::Endian;
use crate::headers::types::{FileHeader, HeaderError, SelectionHeader};

pub fn decode_file_header(payload: &[u8], endian: Endian) -> Result<FileHeader, HeaderError> {
    let ints = endian
        .ints_from_bytes(payload)
        .map_err(|_| HeaderError::Unaligned { header: "file", len: payload.len() })?;
    FileHeader::from_ints(&ints)
}

pub fn decode_selection_header(
    payload: &[u8],
    endian: Endian,
) -> Result<SelectionHeader, HeaderError> {
    let ints = endian
        .ints_from_bytes(payload)
        .map_err(|_| HeaderError::Unaligned { header: "selection", len: payload.len() })?;
    SelectionHeader::from_ints(&ints)
}
