//! Manifest format version `"2"`.
//!
//! [`read`] builds a [`Package`] from a parsed wire document and
//! [`write`] builds the minimal wire document back from a package,
//! omitting fields that equal their inherited defaults. [`from_str`]
//! and [`to_string`] compose these with JSON parsing and canonical
//! rendering.

pub mod bytecode;
pub mod fields;
pub mod read;
pub mod wire;
pub mod write;

pub use read::{read, ReadError};
pub use write::{write, WriteError};

use ethpm_types::Package;

/// The manifest format version this module implements.
///
/// Written into every output document; never read from the model.
pub const VERSION: &str = "2";

/// Read a package from manifest JSON text.
pub fn from_str(json: &str) -> Result<Package, ReadError> {
    let manifest: wire::Manifest = serde_json::from_str(json)?;
    read(&manifest)
}

/// Read a package from an already-parsed JSON value.
pub fn from_value(json: serde_json::Value) -> Result<Package, ReadError> {
    let manifest: wire::Manifest = serde_json::from_value(json)?;
    read(&manifest)
}

/// Write a package to canonical manifest JSON text.
pub fn to_string(package: &Package) -> Result<String, WriteError> {
    Ok(crate::canon::to_string(&write(package))?)
}
