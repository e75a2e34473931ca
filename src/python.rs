//! Python bindings for the UserAssist decoder using PyO3.
//!
//! This module provides Python-friendly wrappers around the core Rust types.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::engine::{decode_entry as rust_decode_entry, DecodeOptions, Diagnostic as RustDiagnostic};
use crate::format::classify as rust_classify;
use crate::keyname::decode;
use crate::record::UsageRecord as RustUsageRecord;
use crate::source::RawEntry;
use crate::DecodeError;

/// Convert Rust DecodeError to Python exception
fn decode_error_to_py(err: &DecodeError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for UsageRecord
#[pyclass(name = "UsageRecord")]
#[derive(Clone)]
pub struct PyUsageRecord {
    inner: RustUsageRecord,
}

#[pymethods]
impl PyUsageRecord {
    /// Profile owning the hive
    #[getter]
    fn username(&self) -> &str {
        &self.inner.username
    }

    /// Decoded name without the GUID token
    #[getter]
    fn name(&self) -> &str {
        &self.inner.name
    }

    /// Last execution as `YYYY-MM-DD HH:MM:SS UTC`, or None
    #[getter]
    fn last_execution(&self) -> Option<String> {
        self.inner.last_execution_display()
    }

    /// Leading GUID token, or an empty string
    #[getter]
    fn guid(&self) -> &str {
        &self.inner.guid
    }

    /// Run count
    #[getter]
    fn count(&self) -> u32 {
        self.inner.count
    }

    /// Focus time as `YYYY-MM-DD HH:MM:SS UTC`, or None
    #[getter]
    fn focus_time(&self) -> Option<String> {
        self.inner.focus_time_display()
    }

    /// Hive path the entry came from
    #[getter]
    fn source_file(&self) -> &str {
        &self.inner.source_file
    }

    /// Layout name ("legacy" or "extended")
    #[getter]
    fn version(&self) -> &'static str {
        self.inner.version.name()
    }

    /// Known-folder path, when resolution was requested
    #[getter]
    fn folder_path(&self) -> Option<String> {
        self.inner.folder_path.clone()
    }

    /// UserAssist container key GUID, if known
    #[getter]
    fn container_guid(&self) -> Option<String> {
        self.inner.container_guid.clone()
    }

    /// Description of the container key, if well known
    #[getter]
    fn container(&self) -> Option<&'static str> {
        self.inner.container
    }

    fn __repr__(&self) -> String {
        format!(
            "UsageRecord(name='{}', guid='{}', count={})",
            self.inner.name, self.inner.guid, self.inner.count
        )
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }
}

/// Python wrapper for Diagnostic
#[pyclass(name = "Diagnostic")]
#[derive(Clone)]
pub struct PyDiagnostic {
    inner: RustDiagnostic,
}

#[pymethods]
impl PyDiagnostic {
    /// Error kind (e.g. "unrecognized_format")
    #[getter]
    fn kind(&self) -> &'static str {
        self.inner.error.kind()
    }

    /// Error message
    #[getter]
    fn message(&self) -> String {
        self.inner.error.to_string()
    }

    /// Encoded value name
    #[getter]
    fn encoded_name(&self) -> &str {
        &self.inner.encoded_name
    }

    /// True if the entry produced no record
    #[getter]
    fn skipped_entry(&self) -> bool {
        self.inner.skipped_entry()
    }

    /// Raise the diagnostic as a ValueError
    fn raise_error(&self) -> PyResult<()> {
        Err(decode_error_to_py(&self.inner.error))
    }

    fn __repr__(&self) -> String {
        format!("Diagnostic({})", self.inner)
    }
}

/// Decode a ROT13-encoded UserAssist value name
#[pyfunction]
fn decode_name(encoded: &str) -> String {
    decode(encoded)
}

/// Classify value data by length ("legacy", "extended" or "unrecognized")
#[pyfunction]
fn classify(data: &PyBytes) -> &'static str {
    rust_classify(data.as_bytes()).name()
}

/// Decode one UserAssist value
///
/// Returns a tuple of (record or None, list of diagnostics).
#[pyfunction]
#[pyo3(signature = (
    encoded_name,
    data,
    source_hive_path,
    profile_name=None,
    container_guid=None,
    resolve_known_folders=false
))]
fn decode_entry(
    py: Python,
    encoded_name: &str,
    data: &PyBytes,
    source_hive_path: &str,
    profile_name: Option<&str>,
    container_guid: Option<&str>,
    resolve_known_folders: bool,
) -> (Option<PyUsageRecord>, Vec<PyDiagnostic>) {
    let mut entry = match profile_name {
        Some(profile) => RawEntry::new(encoded_name, data.as_bytes(), source_hive_path, profile),
        None => RawEntry::from_hive_path(encoded_name, data.as_bytes(), source_hive_path),
    };
    if let Some(container) = container_guid {
        entry = entry.with_container(container);
    }
    let options = DecodeOptions {
        resolve_known_folders,
    };

    // Release GIL while decoding
    let outcome = py.allow_threads(|| rust_decode_entry(&entry, &options));

    (
        outcome.record.map(|inner| PyUsageRecord { inner }),
        outcome
            .diagnostics
            .into_iter()
            .map(|inner| PyDiagnostic { inner })
            .collect(),
    )
}

/// Python module definition
#[pymodule]
fn userassist_decoder(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyUsageRecord>()?;
    m.add_class::<PyDiagnostic>()?;
    m.add_function(wrap_pyfunction!(decode_name, m)?)?;
    m.add_function(wrap_pyfunction!(classify, m)?)?;
    m.add_function(wrap_pyfunction!(decode_entry, m)?)?;

    // Add version constant
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
