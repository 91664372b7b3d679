//! Field transcoders: pure function pairs converting one semantic
//! field family between its wire and model representations.
//!
//! Every transcoder is total over well-formed wire input; malformed
//! shapes are the external schema validator's concern. The only
//! fallible steps are the chain and build-dependency URI parses, which
//! the format requires to be valid URIs.

use std::collections::BTreeMap;

use ethpm_types::{
    uri::{ChainUri, ContentUri},
    Compiler, ContractAlias, ContractInstance, ContractType, Deployment, Link, Meta, Source,
    SourcePath, UnlinkedBytecode,
};

use super::{bytecode, read::ReadError, wire};

/// Contract-type templates, wire to model. The alias is handed to the
/// per-entry transcoder so it can default `contract_name`.
pub fn read_contract_types(
    contract_types: &BTreeMap<String, wire::ContractType>,
) -> BTreeMap<ContractAlias, ContractType> {
    contract_types
        .iter()
        .map(|(alias, contract_type)| (alias.clone(), read_contract_type(contract_type, alias)))
        .collect()
}

/// One contract-type template, wire to model.
pub fn read_contract_type(contract_type: &wire::ContractType, alias: &str) -> ContractType {
    ContractType {
        contract_name: contract_type
            .contract_name
            .clone()
            .unwrap_or_else(|| alias.to_string()),
        deployment_bytecode: contract_type
            .deployment_bytecode
            .as_ref()
            .map(read_unlinked_bytecode),
        runtime_bytecode: contract_type
            .runtime_bytecode
            .as_ref()
            .map(read_unlinked_bytecode),
        abi: contract_type.abi.clone(),
        natspec: contract_type.natspec.clone(),
        compiler: contract_type.compiler.as_ref().map(read_compiler),
    }
}

/// One unlinked bytecode record, wire to model.
///
/// A record without a bytecode string is retained: its link references
/// still serve as defaults for instances that carry their own bytecode.
pub fn read_unlinked_bytecode(bytecode: &wire::UnlinkedBytecode) -> UnlinkedBytecode {
    UnlinkedBytecode {
        bytecode: bytecode.bytecode.clone(),
        link_references: bytecode.link_references.clone().unwrap_or_default(),
    }
}

/// Compiler provenance, wire to model. Missing settings read as an
/// empty map.
pub fn read_compiler(compiler: &wire::Compiler) -> Compiler {
    Compiler {
        name: compiler.name.clone(),
        version: compiler.version.clone(),
        settings: compiler.settings.clone().unwrap_or_default(),
    }
}

/// Deployments, wire to model, resolved against the already-built
/// contract-types table.
pub fn read_deployments(
    deployments: &BTreeMap<String, BTreeMap<String, wire::ContractInstance>>,
    types: &BTreeMap<ContractAlias, ContractType>,
) -> Result<BTreeMap<ChainUri, Deployment>, ReadError> {
    deployments
        .iter()
        .map(|(chain_uri, deployment)| {
            let chain = chain_uri
                .parse::<ChainUri>()
                .map_err(|source| ReadError::ChainUri {
                    uri: chain_uri.clone(),
                    source,
                })?;
            Ok((chain, read_deployment(deployment, types)))
        })
        .collect()
}

/// One chain's deployment, wire to model.
pub fn read_deployment(
    deployment: &BTreeMap<String, wire::ContractInstance>,
    types: &BTreeMap<ContractAlias, ContractType>,
) -> Deployment {
    deployment
        .iter()
        .map(|(name, instance)| (name.clone(), read_instance(instance, types)))
        .collect()
}

/// One deployed instance, wire to model.
///
/// The contract-types table is passed in explicitly; instances hold no
/// back-reference to their container. An alias with no matching
/// template resolves bytecode without defaults.
pub fn read_instance(
    instance: &wire::ContractInstance,
    types: &BTreeMap<ContractAlias, ContractType>,
) -> ContractInstance {
    let parent = types.get(&instance.contract_type);
    #[cfg(feature = "tracing")]
    if parent.is_none() {
        tracing::debug!(
            contract_type = %instance.contract_type,
            "instance references an unknown contract type; resolving without defaults"
        );
    }
    ContractInstance {
        contract_type: instance.contract_type.clone(),
        address: instance.address.clone(),
        transaction: instance.transaction.clone(),
        block: instance.block.clone(),
        deployment_bytecode: bytecode::resolve(
            instance.deployment_bytecode.as_ref(),
            parent.and_then(|parent| parent.deployment_bytecode.as_ref()),
        ),
        runtime_bytecode: bytecode::resolve(
            instance.runtime_bytecode.as_ref(),
            parent.and_then(|parent| parent.runtime_bytecode.as_ref()),
        ),
        compiler: instance.compiler.as_ref().map(read_compiler),
    }
}

/// Package metadata, wire to model. The wire links map becomes an
/// ordered list; a missing meta section reads as empty metadata.
pub fn read_meta(meta: Option<&wire::Meta>) -> Meta {
    let Some(meta) = meta else {
        return Meta::default();
    };
    Meta {
        authors: meta.authors.clone(),
        license: meta.license.clone(),
        description: meta.description.clone(),
        keywords: meta.keywords.clone(),
        links: meta
            .links
            .iter()
            .map(|(resource, uri)| Link {
                resource: resource.clone(),
                uri: uri.clone(),
            })
            .collect(),
    }
}

/// Source entries, wire to model, classified as URIs or inline text.
pub fn read_sources(sources: &BTreeMap<String, String>) -> BTreeMap<SourcePath, Source> {
    sources
        .iter()
        .map(|(path, source)| (path.clone(), Source::classify(source.clone())))
        .collect()
}

/// Build dependencies, wire to model. Unlike sources, these require a
/// valid content URI.
pub fn read_build_dependencies(
    build_dependencies: &BTreeMap<String, String>,
) -> Result<BTreeMap<String, ContentUri>, ReadError> {
    build_dependencies
        .iter()
        .map(|(name, uri)| {
            let uri = uri
                .parse::<ContentUri>()
                .map_err(|source| ReadError::BuildDependency {
                    name: name.clone(),
                    source,
                })?;
            Ok((name.clone(), uri))
        })
        .collect()
}

/// Contract-type templates, model to wire.
pub fn write_contract_types(
    contract_types: &BTreeMap<ContractAlias, ContractType>,
) -> BTreeMap<String, wire::ContractType> {
    contract_types
        .iter()
        .map(|(alias, contract_type)| (alias.clone(), write_contract_type(contract_type, alias)))
        .collect()
}

/// One contract-type template, model to wire. `contract_name` is
/// omitted when it equals the alias.
pub fn write_contract_type(contract_type: &ContractType, alias: &str) -> wire::ContractType {
    wire::ContractType {
        contract_name: (contract_type.contract_name != alias)
            .then(|| contract_type.contract_name.clone()),
        deployment_bytecode: contract_type
            .deployment_bytecode
            .as_ref()
            .map(write_unlinked_bytecode),
        runtime_bytecode: contract_type
            .runtime_bytecode
            .as_ref()
            .map(write_unlinked_bytecode),
        abi: contract_type.abi.clone(),
        natspec: contract_type.natspec.clone(),
        compiler: contract_type.compiler.as_ref().map(write_compiler),
    }
}

/// One unlinked bytecode record, model to wire.
pub fn write_unlinked_bytecode(bytecode: &UnlinkedBytecode) -> wire::UnlinkedBytecode {
    wire::UnlinkedBytecode {
        bytecode: bytecode.bytecode.clone(),
        link_references: Some(bytecode.link_references.clone()),
    }
}

/// Compiler provenance, model to wire.
pub fn write_compiler(compiler: &Compiler) -> wire::Compiler {
    wire::Compiler {
        name: compiler.name.clone(),
        version: compiler.version.clone(),
        settings: Some(compiler.settings.clone()),
    }
}

/// Deployments, model to wire, diffed against the model-level
/// contract-types table.
pub fn write_deployments(
    deployments: &BTreeMap<ChainUri, Deployment>,
    types: &BTreeMap<ContractAlias, ContractType>,
) -> BTreeMap<String, BTreeMap<String, wire::ContractInstance>> {
    deployments
        .iter()
        .map(|(chain, deployment)| (chain.as_str().to_string(), write_deployment(deployment, types)))
        .collect()
}

/// One chain's deployment, model to wire.
pub fn write_deployment(
    deployment: &Deployment,
    types: &BTreeMap<ContractAlias, ContractType>,
) -> BTreeMap<String, wire::ContractInstance> {
    deployment
        .iter()
        .map(|(name, instance)| (name.clone(), write_instance(instance, types)))
        .collect()
}

/// One deployed instance, model to wire, with bytecode diffed against
/// its contract type's template.
pub fn write_instance(
    instance: &ContractInstance,
    types: &BTreeMap<ContractAlias, ContractType>,
) -> wire::ContractInstance {
    let parent = types.get(&instance.contract_type);
    wire::ContractInstance {
        contract_type: instance.contract_type.clone(),
        address: instance.address.clone(),
        transaction: instance.transaction.clone(),
        block: instance.block.clone(),
        deployment_bytecode: instance.deployment_bytecode.as_ref().map(|resolved| {
            bytecode::diff(
                resolved,
                parent.and_then(|parent| parent.deployment_bytecode.as_ref()),
            )
        }),
        runtime_bytecode: instance.runtime_bytecode.as_ref().map(|resolved| {
            bytecode::diff(
                resolved,
                parent.and_then(|parent| parent.runtime_bytecode.as_ref()),
            )
        }),
        compiler: instance.compiler.as_ref().map(write_compiler),
    }
}

/// Package metadata, model to wire. Returns `None` when the section
/// would be empty.
pub fn write_meta(meta: &Meta) -> Option<wire::Meta> {
    let meta = wire::Meta {
        authors: meta.authors.clone(),
        license: meta.license.clone(),
        description: meta.description.clone(),
        keywords: meta.keywords.clone(),
        links: meta
            .links
            .iter()
            .map(|link| (link.resource.clone(), link.uri.clone()))
            .collect(),
    };
    (!meta.is_empty()).then_some(meta)
}

/// Source entries, model to wire: both variants render as their raw
/// string.
pub fn write_sources(sources: &BTreeMap<SourcePath, Source>) -> BTreeMap<String, String> {
    sources
        .iter()
        .map(|(path, source)| (path.clone(), source.as_str().to_string()))
        .collect()
}

/// Build dependencies, model to wire.
pub fn write_build_dependencies(
    build_dependencies: &BTreeMap<String, ContentUri>,
) -> BTreeMap<String, String> {
    build_dependencies
        .iter()
        .map(|(name, uri)| (name.clone(), uri.as_str().to_string()))
        .collect()
}
