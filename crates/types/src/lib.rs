//! # EthPM package model
//!
//! The canonical in-memory representation of an EthPM package, as
//! produced and consumed by manifest transcoders, resolvers, installers
//! and content-addressed stores.
//!
//! All types here are immutable value objects: a transcoding pass
//! constructs them once and discards them after use. Wire-format
//! concerns (field names, defaulting, canonical rendering) live
//! downstream in the `ethpm-manifest` crate.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod bytecode;
pub mod contract;
pub mod fmt;
pub mod package;
pub mod serde;
pub mod uri;

pub use bytecode::{LinkReference, LinkTarget, LinkValue, LinkedBytecode, UnlinkedBytecode};
pub use contract::{Compiler, ContractInstance, ContractType, Deployment};
pub use package::{Link, Meta, Package};
pub use uri::{ChainUri, ContentUri, Source};

/// A contract type's key within a package's contract types map.
pub type ContractAlias = String;

/// A deployed instance's key within one chain's deployment.
pub type InstanceName = String;

/// A source file's path key within a package's sources map.
pub type SourcePath = String;

/// A `0x`-prefixed hex encoding of EVM bytecode.
pub type Bytecode = String;

/// A `0x`-prefixed account address.
pub type Address = String;

/// A `0x`-prefixed transaction hash.
pub type TransactionHash = String;

/// A `0x`-prefixed block hash.
pub type BlockHash = String;

/// A byte position within bytecode.
pub type Offset = u64;
