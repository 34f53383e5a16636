use crate::constants::NAME_PAD;
use crate::types::{Result, SelectError};

/// Printable form of a byte string: quoted when it is plain ASCII, hex otherwise.
pub fn fmt_bytes(b: &[u8]) -> String {
    if b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(b))
    } else {
        format!("0x{}", hex::encode(b))
    }
}

/// Strip the trailing pad bytes of a fixed-width name.
pub fn trim_padding(b: &[u8]) -> &[u8] {
    let end = b.iter().rposition(|&c| c != NAME_PAD).map_or(0, |i| i + 1);
    &b[..end]
}

/// Bounds check shared by every indexed accessor.
#[inline]
pub fn check_index(what: &'static str, index: usize, max: usize) -> Result<usize> {
    if index < max {
        Ok(index)
    } else {
        Err(SelectError::IndexOutOfRange { what, index, max })
    }
}
