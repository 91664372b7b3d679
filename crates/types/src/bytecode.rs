//! # Bytecode
//!
//! Unlinked and linked bytecode representations and the link values
//! connecting them.
//!
//! Link references and link dependencies are ordered sequences: offsets
//! apply positionally within the bytecode, so order must be preserved
//! across round trips.

use serde::{Deserialize, Serialize};

use crate::{Bytecode, InstanceName, Offset};

/// Bytecode before address linking, owned by a contract type.
///
/// A template may carry link references without a bytecode string; such
/// a template still supplies link-reference defaults to instances that
/// bring their own bytecode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlinkedBytecode {
    /// The bytecode as a `0x`-prefixed hex string, when known.
    pub bytecode: Option<Bytecode>,
    /// Placeholder locations awaiting link values.
    pub link_references: Vec<LinkReference>,
}

/// Bytecode after linking, as deployed.
///
/// A linked bytecode value always carries a bytecode string; when none
/// is resolvable the field holding it is absent, never a record with
/// empty bytecode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedBytecode {
    /// The bytecode as a `0x`-prefixed hex string.
    pub bytecode: Bytecode,
    /// Placeholder locations awaiting link values.
    pub link_references: Vec<LinkReference>,
    /// Resolved link values for this deployment.
    pub link_dependencies: Vec<LinkValue>,
}

/// A named placeholder location within bytecode awaiting a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkReference {
    /// Byte positions the placeholder occupies.
    pub offsets: Vec<Offset>,
    /// The placeholder's name.
    pub name: String,
}

/// A resolved value filling one or more link reference offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkValue {
    /// Byte positions the value applies to.
    pub offsets: Vec<Offset>,
    /// The value itself.
    pub value: LinkTarget,
}

/// The value side of a link dependency.
///
/// The tag is mutually exclusive and always present when the value is;
/// consumers match exhaustively rather than inspecting field presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum LinkTarget {
    /// An inline value, e.g. a library address.
    Literal(Bytecode),
    /// The name of another instance in the same deployment whose
    /// address fills the placeholder.
    Reference(InstanceName),
}

/// Decode a `0x`-prefixed hex bytecode string into raw bytes.
pub fn bytes(bytecode: &str) -> Result<Vec<u8>, hex::FromHexError> {
    hex::decode(bytecode.strip_prefix("0x").unwrap_or(bytecode))
}
