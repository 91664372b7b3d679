//! # Package
//!
//! The root aggregate of a resolved manifest.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    contract::{ContractType, Deployment},
    uri::{ChainUri, ContentUri, Source},
    ContractAlias, SourcePath,
};

/// A resolved package manifest. Owns all nested entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// The package's name.
    pub package_name: String,
    /// The package's version string.
    pub version: String,
    /// Descriptive metadata.
    pub meta: Meta,
    /// Source entries by path: retrievable URIs or inlined text.
    pub sources: BTreeMap<SourcePath, Source>,
    /// Compiled-contract templates, keyed by alias. Aliases are unique
    /// within a package.
    pub contract_types: BTreeMap<ContractAlias, ContractType>,
    /// Deployed instances, grouped by chain.
    pub deployments: BTreeMap<ChainUri, Deployment>,
    /// Dependency manifests by package name.
    pub build_dependencies: BTreeMap<String, ContentUri>,
}

/// Descriptive package metadata.
///
/// Purely descriptive; no invariants beyond field types.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Meta {
    /// The package's authors, in order.
    pub authors: Vec<String>,
    /// The package's license.
    pub license: Option<String>,
    /// A description of the package.
    pub description: Option<String>,
    /// Keywords describing the package, in insertion order.
    pub keywords: Vec<String>,
    /// Named links to related resources, in insertion order.
    ///
    /// The wire format stores links as a map, so original key order is
    /// not restored on read; order here is whatever order entries were
    /// inserted in.
    pub links: Vec<Link>,
}

/// A named link to a related resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// What the link points at, e.g. `documentation`.
    pub resource: String,
    /// Where the resource lives.
    pub uri: String,
}

impl Meta {
    /// `true` when every field is unset or empty.
    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
            && self.license.is_none()
            && self.description.is_none()
            && self.keywords.is_empty()
            && self.links.is_empty()
    }
}
