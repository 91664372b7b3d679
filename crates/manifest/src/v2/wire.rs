//! Serde representations of the v2 wire document.
//!
//! Field names and shapes here are fixed by the format. Absence of a
//! field is meaningful in several places (inherit from the template,
//! omit the section), so such fields are `Option` rather than defaulted
//! collections: `None` and `Some(vec![])` are different wire documents.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use ethpm_types::{Bytecode, LinkReference, LinkTarget, Offset};

/// A v2 package manifest document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Manifest {
    /// The manifest format version. Fixed to `"2"` on write.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_version: Option<String>,
    /// The package's name.
    pub package_name: String,
    /// The package's version string.
    pub version: String,
    /// Descriptive metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    /// Source entries by path: a content URI or inline source text.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub sources: BTreeMap<String, String>,
    /// Contract-type templates keyed by alias.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub contract_types: BTreeMap<String, ContractType>,
    /// Deployed instances, grouped by chain URI then instance name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub deployments: BTreeMap<String, BTreeMap<String, ContractInstance>>,
    /// Dependency manifest URIs by package name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub build_dependencies: BTreeMap<String, String>,
}

/// Wire form of package metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Meta {
    /// The package's authors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,
    /// The package's license.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    /// A description of the package.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Keywords describing the package.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    /// Links to related resources, keyed by resource name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub links: BTreeMap<String, String>,
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

/// Wire form of a contract-type template.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContractType {
    /// The contract's source-level name; omitted when equal to the
    /// alias the template is keyed under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_name: Option<String>,
    /// Bytecode as produced by the compiler, before deployment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_bytecode: Option<UnlinkedBytecode>,
    /// Bytecode as it exists on chain after deployment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_bytecode: Option<UnlinkedBytecode>,
    /// The contract's ABI, opaque to this crate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abi: Option<serde_json::Value>,
    /// Natspec documentation, opaque to this crate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub natspec: Option<serde_json::Value>,
    /// Provenance of the compiler that produced the bytecode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler: Option<Compiler>,
}

/// Wire form of compiler provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compiler {
    /// The compiler's name, e.g. `solc`.
    pub name: String,
    /// The compiler's version string.
    pub version: String,
    /// Compiler settings, opaque to this crate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Wire form of a contract type's unlinked bytecode.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnlinkedBytecode {
    /// The bytecode as a `0x`-prefixed hex string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytecode: Option<Bytecode>,
    /// Placeholder locations awaiting link values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_references: Option<Vec<LinkReference>>,
}

/// Wire form of an instance's linked bytecode.
///
/// Fields equal to the contract type's template are omitted and
/// re-inherited on read; see [`super::bytecode`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LinkedBytecode {
    /// The bytecode as a `0x`-prefixed hex string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytecode: Option<Bytecode>,
    /// Placeholder locations awaiting link values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_references: Option<Vec<LinkReference>>,
    /// Resolved link values for this deployment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_dependencies: Option<Vec<LinkValue>>,
}

/// Wire form of a link dependency: `{offsets, type, value}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkValue {
    /// Byte positions the value applies to.
    pub offsets: Vec<Offset>,
    /// The `type`/`value` tag pair.
    #[serde(flatten)]
    pub value: LinkTarget,
}

/// Wire form of one deployed contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractInstance {
    /// The alias of the contract type this instance was deployed from.
    pub contract_type: String,
    /// The address the instance is deployed at.
    pub address: String,
    /// The transaction that created the instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction: Option<String>,
    /// The block containing the creating transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<String>,
    /// Deployment bytecode, diffed against the contract type's
    /// template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_bytecode: Option<LinkedBytecode>,
    /// Runtime bytecode, diffed against the contract type's template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_bytecode: Option<LinkedBytecode>,
    /// Compiler provenance override for this instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler: Option<Compiler>,
}
