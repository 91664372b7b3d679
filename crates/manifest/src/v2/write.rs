//! Building a wire document from a package model.

use ethpm_types::Package;
use thiserror::Error;

use super::{fields, wire, VERSION};

/// Errors produced while writing a manifest.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The wire document could not be rendered as JSON.
    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Build a wire document from a package.
///
/// Mirrors [`super::read`]'s ordering: contract types are transcoded
/// before deployments, whose instance bytecode is diffed against the
/// model-level templates. Empty sections are omitted entirely so
/// minimal manifests stay minimal, and `manifest_version` is fixed to
/// [`VERSION`] rather than read from the model.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, fields(package = %package.package_name))
)]
pub fn write(package: &Package) -> wire::Manifest {
    let contract_types = fields::write_contract_types(&package.contract_types);
    let deployments = fields::write_deployments(&package.deployments, &package.contract_types);
    wire::Manifest {
        manifest_version: Some(VERSION.to_string()),
        package_name: package.package_name.clone(),
        version: package.version.clone(),
        meta: fields::write_meta(&package.meta),
        sources: fields::write_sources(&package.sources),
        contract_types,
        deployments,
        build_dependencies: fields::write_build_dependencies(&package.build_dependencies),
    }
}
