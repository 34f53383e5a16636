//! Byte sources and sinks for the selection codec.
//!
//! Files are opened here, buffered, and closed by drop on every exit path,
//! including decode and encode failures.

use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Read, Write};
use std::path::PathBuf;

use log::debug;

use crate::config::CodecConfig;
use crate::framing::{RecordReader, RecordWriter};
use crate::selection::{decode_selections, encode_selections, SelectionFile};
use crate::types::Result;

/// Canonical input abstraction
pub enum InputSource {
    Reader(Box<dyn Read + Send>),
    File(PathBuf),
    Memory(Vec<u8>),
}

/// Canonical output abstraction
pub enum OutputSink {
    Writer(Box<dyn Write + Send>),
    File(PathBuf),
}

/// Normalize input source into a boxed reader
pub fn open_input(src: InputSource) -> Result<Box<dyn Read + Send>> {
    let reader: Box<dyn Read + Send> = match src {
        InputSource::Reader(r) => r,
        InputSource::File(p) => {
            debug!("opening selection file {}", p.display());
            Box::new(BufReader::new(File::open(p)?))
        }
        InputSource::Memory(b) => Box::new(Cursor::new(b)),
    };
    Ok(reader)
}

/// Normalize output sink into a boxed writer
pub fn open_output(sink: OutputSink) -> Result<Box<dyn Write + Send>> {
    let writer: Box<dyn Write + Send> = match sink {
        OutputSink::Writer(w) => w,
        OutputSink::File(p) => {
            debug!("writing selection file {}", p.display());
            Box::new(BufWriter::new(File::create(p)?))
        }
    };
    Ok(writer)
}

/// Decode a complete selection file from `src`.
pub fn read_selection_file(src: InputSource, config: &CodecConfig) -> Result<SelectionFile> {
    let input = open_input(src)?;
    let mut reader = RecordReader::new(input, config.endian);
    let file = decode_selections(&mut reader)?;
    debug!(
        "read {} records ({})",
        reader.records_read(),
        config.endian
    );
    Ok(file)
}

/// Encode `file` into `sink` and flush it.
pub fn write_selection_file(
    file: &SelectionFile,
    sink: OutputSink,
    config: &CodecConfig,
) -> Result<()> {
    let output = open_output(sink)?;
    let mut writer = RecordWriter::new(output, config.endian);
    encode_selections(&mut writer, file)?;
    writer.flush()?;
    debug!(
        "wrote {} records ({})",
        writer.records_written(),
        config.endian
    );
    Ok(())
}
