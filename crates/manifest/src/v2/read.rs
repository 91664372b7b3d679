//! Building a package model from a parsed wire document.

use ethpm_types::{uri::InvalidUri, Package};
use thiserror::Error;

use super::{fields, wire};

/// Errors produced while reading a manifest.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The manifest text was not parseable as JSON.
    #[error("failed to parse manifest: {0}")]
    Format(#[from] serde_json::Error),
    /// A deployment was keyed by an invalid chain URI.
    #[error("invalid chain URI `{uri}`: {source}")]
    ChainUri {
        /// The offending deployment key.
        uri: String,
        /// The underlying parse failure.
        source: InvalidUri,
    },
    /// A build dependency's value was not a valid content URI.
    #[error("invalid content URI for build dependency `{name}`: {source}")]
    BuildDependency {
        /// The dependency's package name.
        name: String,
        /// The underlying parse failure.
        source: InvalidUri,
    },
}

/// Build a package from a parsed wire document.
///
/// Sections are read in dependency order: contract types first (no
/// forward references), then deployments resolved against the built
/// contract-types table, then sources, build dependencies and meta,
/// which have no cross-references. The input is never mutated, and no
/// partial model is produced on failure.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, fields(package = %manifest.package_name), err)
)]
pub fn read(manifest: &wire::Manifest) -> Result<Package, ReadError> {
    let contract_types = fields::read_contract_types(&manifest.contract_types);
    let deployments = fields::read_deployments(&manifest.deployments, &contract_types)?;
    Ok(Package {
        package_name: manifest.package_name.clone(),
        version: manifest.version.clone(),
        meta: fields::read_meta(manifest.meta.as_ref()),
        sources: fields::read_sources(&manifest.sources),
        contract_types,
        deployments,
        build_dependencies: fields::read_build_dependencies(&manifest.build_dependencies)?,
    })
}
