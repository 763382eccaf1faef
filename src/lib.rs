//! Check-and-repair engine for an in-memory genealogical database.
//!
//! The `store` module holds people, families and media objects in id-addressed
//! arenas; `integrity` validates and repairs the references between them;
//! `filter` provides Soundex surname matching. With the `python` feature the
//! crate also builds the `_core` extension module.

pub mod config;
pub mod display;
pub mod error;
pub mod filter;
pub mod integrity;
pub mod store;

#[cfg(feature = "python")]
pub mod bindings;

pub use config::CheckOptions;
pub use error::CheckError;
pub use integrity::{CheckReport, ConsistencyChecker};
pub use store::Database;

#[cfg(feature = "python")]
use pyo3::prelude::*;

// --- Module Definition ---
/// This function defines the `_core` Python module.
/// The name `_core` is chosen to indicate it's an internal, compiled component.
#[cfg(feature = "python")]
#[pymodule]
fn _core(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<bindings::python::PyDatabase>()?;
    m.add_function(wrap_pyfunction!(bindings::python::soundex, m)?)?;
    Ok(())
}
