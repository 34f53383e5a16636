use std::io::{self, Read};

use log::trace;

use crate::constants::LENGTH_FIELD_SIZE;
use crate::framing::types::{Endian, FramingError};

/// Sequential reader over `[len][payload][len]` records.
///
/// Layout of one record:
///
/// ```text
/// [ len (4, i32) ]
/// [ payload (len) ]
/// [ len (4, i32) ]
/// ```
#[derive(Debug)]
pub struct RecordReader<R: Read> {
    inner: R,
    endian: Endian,
    records_read: usize,
}

impl<R: Read> RecordReader<R> {
    pub fn new(inner: R, endian: Endian) -> Self {
        Self { inner, endian, records_read: 0 }
    }

    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Number of complete records consumed so far.
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Read one record and return its payload.
    pub fn read_record(&mut self) -> Result<Vec<u8>, FramingError> {
        let record = self.records_read;

        let leading = match self.read_len(record, "leading length")? {
            Some(len) => len,
            None => return Err(FramingError::EndOfStream { record }),
        };
        if leading < 0 {
            return Err(FramingError::NegativeLength { record, len: leading });
        }

        // Grow the buffer only as far as the input actually goes, a corrupt
        // length must not trigger a huge allocation.
        let len = leading as usize;
        let mut payload = Vec::new();
        (&mut self.inner).take(len as u64).read_to_end(&mut payload)?;
        if payload.len() < len {
            return Err(FramingError::UnexpectedEof {
                record,
                context: "payload",
                needed: len,
                available: payload.len(),
            });
        }

        let trailing = self
            .read_len(record, "trailing length")?
            .ok_or(FramingError::UnexpectedEof {
                record,
                context: "trailing length",
                needed: LENGTH_FIELD_SIZE,
                available: 0,
            })?;
        if trailing != leading {
            return Err(FramingError::LengthMismatch { record, leading, trailing });
        }

        trace!("record {}: {} bytes", record, len);
        self.records_read += 1;
        Ok(payload)
    }

    /// Read one record and reinterpret it as 4-byte signed integers.
    pub fn read_ints(&mut self) -> Result<Vec<i32>, FramingError> {
        let payload = self.read_record()?;
        self.endian.ints_from_bytes(&payload)
    }

    /// Read one record and drop its payload. Returns the payload length.
    pub fn skip_record(&mut self) -> Result<usize, FramingError> {
        self.read_record().map(|payload| payload.len())
    }

    /// True when no byte is left after the last record.
    ///
    /// Consumes a byte if one is available, so only call it once decoding is done.
    pub fn is_exhausted(&mut self) -> Result<bool, FramingError> {
        let mut probe = [0u8; 1];
        loop {
            match self.inner.read(&mut probe) {
                Ok(n) => return Ok(n == 0),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Read a 4-byte length field.
    ///
    /// `Ok(None)` means the input ended exactly before the field.
    fn read_len(&mut self, record: usize, context: &'static str) -> Result<Option<i32>, FramingError> {
        let mut buf = [0u8; LENGTH_FIELD_SIZE];
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        match filled {
            0 => Ok(None),
            LENGTH_FIELD_SIZE => Ok(Some(self.endian.i32_from_bytes(buf))),
            available => Err(FramingError::UnexpectedEof {
                record,
                context,
                needed: LENGTH_FIELD_SIZE,
                available,
            }),
        }
    }
}
