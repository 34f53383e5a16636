use std::io::Write;

use log::trace;

use crate::framing::types::{Endian, FramingError};

/// Sequential writer producing `[len][payload][len]` records.
#[derive(Debug)]
pub struct RecordWriter<W: Write> {
    inner: W,
    endian: Endian,
    records_written: usize,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(inner: W, endian: Endian) -> Self {
        Self { inner, endian, records_written: 0 }
    }

    pub fn endian(&self) -> Endian {
        self.endian
    }

    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Frame `payload` with its byte length on both sides.
    pub fn write_record(&mut self, payload: &[u8]) -> Result<(), FramingError> {
        let len = i32::try_from(payload.len())
            .map_err(|_| FramingError::TooLarge { len: payload.len() })?;
        let len_bytes = self.endian.i32_to_bytes(len);

        self.inner.write_all(&len_bytes)?;
        self.inner.write_all(payload)?;
        self.inner.write_all(&len_bytes)?;

        trace!("record {}: wrote {} bytes", self.records_written, payload.len());
        self.records_written += 1;
        Ok(())
    }

    /// Frame a sequence of 4-byte signed integers as one record.
    pub fn write_ints(&mut self, ints: &[i32]) -> Result<(), FramingError> {
        let payload = self.endian.ints_to_bytes(ints);
        self.write_record(&payload)
    }

    pub fn flush(&mut self) -> Result<(), FramingError> {
        self.inner.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
