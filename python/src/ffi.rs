//! Python-facing classes.
//!
//! Thin delegation to `gvselect_core`; every index is bounds-checked there.

use std::path::PathBuf;

use pyo3::exceptions::{PyIOError, PyIndexError, PyValueError};
use pyo3::prelude::*;

use gvselect_core::constants::{NAME_LENGTH, NUM_PTYPES, NUM_SELECTIONS};
use gvselect_core::{CodecConfig, SelectError, Selection, SelectionFile};

pub fn register(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySelectFile>()?;
    m.add_class::<PySelection>()?;
    m.add("NUM_SELECTIONS", NUM_SELECTIONS)?;
    m.add("NUM_PTYPES", NUM_PTYPES)?;
    m.add("NAME_LENGTH", NAME_LENGTH)?;
    Ok(())
}

fn to_py_err(e: SelectError) -> PyErr {
    match e {
        SelectError::IndexOutOfRange { .. } => PyIndexError::new_err(e.to_string()),
        SelectError::Io(_) => PyIOError::new_err(e.to_string()),
        _ => PyValueError::new_err(e.to_string()),
    }
}

fn config_for(big_endian: bool) -> CodecConfig {
    if big_endian {
        CodecConfig::big_endian()
    } else {
        CodecConfig::little_endian()
    }
}

/// A gadgetviewer selection file reader and writer.
#[pyclass(name = "GVSelectFile", module = "gvselect")]
pub struct PySelectFile {
    inner: SelectionFile,
    config: CodecConfig,
}

#[pymethods]
impl PySelectFile {
    /// Read `fname` if given, otherwise start from six empty default selections.
    #[new]
    #[pyo3(signature = (fname=None, big_endian=false))]
    fn new(fname: Option<PathBuf>, big_endian: bool) -> PyResult<Self> {
        let config = config_for(big_endian);
        let inner = match fname {
            Some(path) => SelectionFile::open_with(path, &config).map_err(to_py_err)?,
            None => SelectionFile::new(),
        };
        Ok(Self { inner, config })
    }

    fn get_ids(&self, selection_id: usize, p_type: usize) -> PyResult<Vec<i32>> {
        self.inner
            .get_ids(selection_id, p_type)
            .map(<[i32]>::to_vec)
            .map_err(to_py_err)
    }

    fn set_ids(&mut self, selection_id: usize, p_type: usize, ids: Vec<i32>) -> PyResult<()> {
        self.inner.set_ids(selection_id, p_type, ids).map_err(to_py_err)
    }

    /// Name without its trailing padding.
    fn get_name(&self, selection_id: usize) -> PyResult<String> {
        self.inner
            .name(selection_id)
            .map(|n| n.trimmed())
            .map_err(to_py_err)
    }

    fn set_name(&mut self, selection_id: usize, name: &str) -> PyResult<()> {
        self.inner.set_name(selection_id, name).map_err(to_py_err)
    }

    /// Copy of one selection.
    fn selection(&self, selection_id: usize) -> PyResult<PySelection> {
        self.inner
            .selection(selection_id)
            .map(|s| PySelection { inner: s.clone() })
            .map_err(to_py_err)
    }

    fn write_file(&self, filename: PathBuf) -> PyResult<()> {
        self.inner
            .write_file_with(filename, &self.config)
            .map_err(to_py_err)
    }

    fn __len__(&self) -> usize {
        NUM_SELECTIONS
    }

    fn __repr__(&self) -> String {
        let names: Vec<String> = self.inner.iter().map(|s| s.name().trimmed()).collect();
        format!("GVSelectFile({})", names.join(", "))
    }
}

/// Snapshot of a single selection.
#[pyclass(name = "GVSelection", module = "gvselect")]
pub struct PySelection {
    inner: Selection,
}

#[pymethods]
impl PySelection {
    #[new]
    #[pyo3(signature = (name=""))]
    fn new(name: &str) -> PyResult<Self> {
        Selection::new(name)
            .map(|inner| Self { inner })
            .map_err(to_py_err)
    }

    /// Full 500-character padded name, as stored in the file.
    #[getter]
    fn name(&self) -> String {
        self.inner.name().to_padded_string()
    }

    #[setter]
    fn set_name(&mut self, name: &str) -> PyResult<()> {
        self.inner.set_name(name).map_err(to_py_err)
    }

    fn get_ids(&self, ptype: usize) -> PyResult<Vec<i32>> {
        self.inner
            .get_ids(ptype)
            .map(<[i32]>::to_vec)
            .map_err(to_py_err)
    }

    fn set_ids(&mut self, ptype: usize, ids: Vec<i32>) -> PyResult<()> {
        self.inner.set_ids(ptype, ids).map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}
