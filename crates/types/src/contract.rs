//! # Contract
//!
//! Contract-type templates and the deployed instances that reference
//! them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    bytecode::{LinkedBytecode, UnlinkedBytecode},
    Address, BlockHash, ContractAlias, InstanceName, TransactionHash,
};

/// A compiled-contract template, independent of any particular
/// deployment.
///
/// Keyed by alias within a package; acts as the default source for
/// instances referencing that alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractType {
    /// The contract's source-level name.
    ///
    /// Defaults to the alias the template is keyed under when the
    /// manifest does not set it explicitly.
    pub contract_name: String,
    /// Bytecode as produced by the compiler, before deployment.
    pub deployment_bytecode: Option<UnlinkedBytecode>,
    /// Bytecode as it exists on chain after deployment.
    pub runtime_bytecode: Option<UnlinkedBytecode>,
    /// The contract's ABI, opaque to this crate.
    pub abi: Option<serde_json::Value>,
    /// Natspec documentation, opaque to this crate.
    pub natspec: Option<serde_json::Value>,
    /// Provenance of the compiler that produced the bytecode.
    pub compiler: Option<Compiler>,
}

/// Compiler provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compiler {
    /// The compiler's name, e.g. `solc`.
    pub name: String,
    /// The compiler's version string.
    pub version: String,
    /// Compiler settings, opaque to this crate.
    pub settings: serde_json::Map<String, serde_json::Value>,
}

/// One chain's set of deployed instances, keyed by instance name.
pub type Deployment = BTreeMap<InstanceName, ContractInstance>;

/// One deployed contract on one chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractInstance {
    /// The alias of the contract type this instance was deployed from.
    ///
    /// A non-owning lookup key: when no template with this alias exists
    /// in the package, default inheritance resolves against an empty
    /// template.
    pub contract_type: ContractAlias,
    /// The address the instance is deployed at.
    pub address: Address,
    /// The transaction that created the instance.
    pub transaction: Option<TransactionHash>,
    /// The block containing the creating transaction.
    pub block: Option<BlockHash>,
    /// Deployment bytecode, fully resolved against the contract type's
    /// template.
    pub deployment_bytecode: Option<LinkedBytecode>,
    /// Runtime bytecode, fully resolved against the contract type's
    /// template.
    pub runtime_bytecode: Option<LinkedBytecode>,
    /// Compiler provenance override for this instance.
    pub compiler: Option<Compiler>,
}
