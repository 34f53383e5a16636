use std::io;

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use thiserror::Error;

use crate::constants::ID_SIZE;

/// Byte order shared by every length field, marker and ID of one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endian {
    #[default]
    Little,
    Big,
}

impl Endian {
    /// Byte order of the host that is running this code.
    #[inline]
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Endian::Big
        } else {
            Endian::Little
        }
    }

    #[inline]
    pub fn i32_from_bytes(self, buf: [u8; 4]) -> i32 {
        match self {
            Endian::Little => LittleEndian::read_i32(&buf),
            Endian::Big => BigEndian::read_i32(&buf),
        }
    }

    #[inline]
    pub fn i32_to_bytes(self, v: i32) -> [u8; 4] {
        let mut buf = [0u8; 4];
        match self {
            Endian::Little => LittleEndian::write_i32(&mut buf, v),
            Endian::Big => BigEndian::write_i32(&mut buf, v),
        }
        buf
    }

    /// Reinterpret a payload as consecutive 4-byte signed integers.
    pub fn ints_from_bytes(self, payload: &[u8]) -> Result<Vec<i32>, FramingError> {
        if payload.len() % ID_SIZE != 0 {
            return Err(FramingError::Unaligned { len: payload.len(), width: ID_SIZE });
        }
        let mut out = vec![0i32; payload.len() / ID_SIZE];
        match self {
            Endian::Little => LittleEndian::read_i32_into(payload, &mut out),
            Endian::Big => BigEndian::read_i32_into(payload, &mut out),
        }
        Ok(out)
    }

    pub fn ints_to_bytes(self, ints: &[i32]) -> Vec<u8> {
        let mut out = vec![0u8; ints.len() * ID_SIZE];
        match self {
            Endian::Little => LittleEndian::write_i32_into(ints, &mut out),
            Endian::Big => BigEndian::write_i32_into(ints, &mut out),
        }
        out
    }
}

impl std::fmt::Display for Endian {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endian::Little => write!(f, "little-endian"),
            Endian::Big => write!(f, "big-endian"),
        }
    }
}

/// Errors raised while reading or writing length-delimited records.
#[derive(Debug, Error)]
pub enum FramingError {
    /// Leading and trailing length fields of a record disagree.
    #[error("record {record}: leading length {leading} does not match trailing length {trailing}")]
    LengthMismatch { record: usize, leading: i32, trailing: i32 },

    /// A length field holds a negative value.
    #[error("record {record}: negative record length {len}")]
    NegativeLength { record: usize, len: i32 },

    /// A payload cannot be split into whole 4-byte integers.
    #[error("payload of {len} bytes is not a multiple of {width}")]
    Unaligned { len: usize, width: usize },

    /// A payload is too large for a 4-byte length field.
    #[error("payload of {len} bytes does not fit a 4-byte record length")]
    TooLarge { len: usize },

    /// Input ended cleanly before the start of a record.
    #[error("end of input before record {record}")]
    EndOfStream { record: usize },

    /// Input ended inside a record.
    #[error("record {record}: input ended while reading {context} ({needed} bytes needed, {available} available)")]
    UnexpectedEof {
        record: usize,
        context: &'static str,
        needed: usize,
        available: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl FramingError {
    /// True for both flavours of premature end of input.
    pub fn is_eof(&self) -> bool {
        matches!(self, FramingError::EndOfStream { .. } | FramingError::UnexpectedEof { .. })
    }
}
