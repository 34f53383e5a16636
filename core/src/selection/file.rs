use std::array;
use std::io::{Read, Write};
use std::path::Path;

use crate::config::CodecConfig;
use crate::constants::{NUM_PTYPES, NUM_SELECTIONS};
use crate::framing::{RecordReader, RecordWriter};
use crate::io::{read_selection_file, write_selection_file, InputSource, OutputSink};
use crate::selection::decode::decode_selections;
use crate::selection::encode::encode_selections;
use crate::selection::types::{Selection, SelectionName};
use crate::types::Result;
use crate::utils::check_index;

/// Full content of one selection file: always exactly `NUM_SELECTIONS` selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionFile {
    selections: [Selection; NUM_SELECTIONS],
}

impl Default for SelectionFile {
    /// Six empty selections named "Selection 01" to "Selection 06".
    fn default() -> Self {
        Self {
            selections: array::from_fn(|i| Selection::with_name(SelectionName::default_for(i))),
        }
    }
}

impl SelectionFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_selections(selections: [Selection; NUM_SELECTIONS]) -> Self {
        Self { selections }
    }

    /// Read a little-endian file from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, &CodecConfig::default())
    }

    pub fn open_with(path: impl AsRef<Path>, config: &CodecConfig) -> Result<Self> {
        read_selection_file(InputSource::File(path.as_ref().to_path_buf()), config)
    }

    pub fn from_reader<R: Read>(reader: R, config: &CodecConfig) -> Result<Self> {
        let mut records = RecordReader::new(reader, config.endian);
        decode_selections(&mut records)
    }

    pub fn from_bytes(bytes: &[u8], config: &CodecConfig) -> Result<Self> {
        Self::from_reader(bytes, config)
    }

    /// Write the file to disk in little-endian order, replacing any existing file.
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<()> {
        self.write_file_with(path, &CodecConfig::default())
    }

    pub fn write_file_with(&self, path: impl AsRef<Path>, config: &CodecConfig) -> Result<()> {
        write_selection_file(self, OutputSink::File(path.as_ref().to_path_buf()), config)
    }

    pub fn write_to<W: Write>(&self, writer: W, config: &CodecConfig) -> Result<()> {
        let mut records = RecordWriter::new(writer, config.endian);
        encode_selections(&mut records, self)?;
        records.flush()?;
        Ok(())
    }

    pub fn to_bytes(&self, config: &CodecConfig) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.write_to(&mut out, config)?;
        Ok(out)
    }

    pub fn selections(&self) -> &[Selection; NUM_SELECTIONS] {
        &self.selections
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Selection> {
        self.selections.iter()
    }

    pub fn selection(&self, selection_id: usize) -> Result<&Selection> {
        let i = check_index("selection", selection_id, NUM_SELECTIONS)?;
        Ok(&self.selections[i])
    }

    pub fn selection_mut(&mut self, selection_id: usize) -> Result<&mut Selection> {
        let i = check_index("selection", selection_id, NUM_SELECTIONS)?;
        Ok(&mut self.selections[i])
    }

    /// IDs of one particle type in one selection.
    pub fn get_ids(&self, selection_id: usize, ptype: usize) -> Result<&[i32]> {
        self.selection(selection_id)?.get_ids(ptype)
    }

    /// Replace the IDs of one particle type in one selection.
    pub fn set_ids(
        &mut self,
        selection_id: usize,
        ptype: usize,
        ids: impl Into<Vec<i32>>,
    ) -> Result<()> {
        // Validate both indices before touching anything.
        check_index("particle type", ptype, NUM_PTYPES)?;
        self.selection_mut(selection_id)?.set_ids(ptype, ids)
    }

    pub fn name(&self, selection_id: usize) -> Result<&SelectionName> {
        Ok(self.selection(selection_id)?.name())
    }

    pub fn set_name(&mut self, selection_id: usize, name: &str) -> Result<()> {
        self.selection_mut(selection_id)?.set_name(name)
    }
}

impl<'a> IntoIterator for &'a SelectionFile {
    type Item = &'a Selection;
    type IntoIter = std::slice::Iter<'a, Selection>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
