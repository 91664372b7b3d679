//! Default inheritance between an instance's linked bytecode and its
//! contract type's unlinked template.
//!
//! Deployments frequently reuse unmodified bytecode across many
//! instances of one contract type. Diffing instance records against the
//! template keeps manifests compact and keeps content-addressed hashes
//! stable when only link dependencies change.

use ethpm_types::{LinkValue, LinkedBytecode, UnlinkedBytecode};

use super::wire;

/// Resolve a wire linked-bytecode record against its template.
///
/// An absent record stays absent: bytecode is never synthesized from a
/// template alone. The bytecode string is the record's own when set,
/// otherwise the template's; if neither exists the result is `None`
/// regardless of other fields. Link references fall back to the
/// template's when the record carries none. Link dependencies are
/// always the record's own, since they belong to a concrete deployment
/// rather than a template.
pub fn resolve(
    record: Option<&wire::LinkedBytecode>,
    parent: Option<&UnlinkedBytecode>,
) -> Option<LinkedBytecode> {
    let record = record?;
    let bytecode = record
        .bytecode
        .clone()
        .or_else(|| parent.and_then(|parent| parent.bytecode.clone()))?;
    let link_references = record
        .link_references
        .clone()
        .or_else(|| parent.map(|parent| parent.link_references.clone()))
        .unwrap_or_default();
    Some(LinkedBytecode {
        bytecode,
        link_references,
        link_dependencies: read_link_dependencies(record.link_dependencies.as_deref()),
    })
}

/// Compute the minimal wire record that [`resolve`]s back to `resolved`
/// against the same template.
///
/// Link dependencies are always emitted. Bytecode and link references
/// are emitted only when there is no template or the resolved value
/// differs from the template's.
pub fn diff(resolved: &LinkedBytecode, parent: Option<&UnlinkedBytecode>) -> wire::LinkedBytecode {
    wire::LinkedBytecode {
        bytecode: match parent {
            Some(parent) if parent.bytecode.as_deref() == Some(resolved.bytecode.as_str()) => None,
            _ => Some(resolved.bytecode.clone()),
        },
        link_references: match parent {
            Some(parent) if parent.link_references == resolved.link_references => None,
            _ => Some(resolved.link_references.clone()),
        },
        link_dependencies: Some(write_link_dependencies(&resolved.link_dependencies)),
    }
}

/// Wire link dependencies to model link values.
///
/// An absent list reads the same as an empty one.
pub fn read_link_dependencies(link_dependencies: Option<&[wire::LinkValue]>) -> Vec<LinkValue> {
    link_dependencies
        .unwrap_or_default()
        .iter()
        .map(|dependency| LinkValue {
            offsets: dependency.offsets.clone(),
            value: dependency.value.clone(),
        })
        .collect()
}

/// Model link values to wire link dependencies.
pub fn write_link_dependencies(link_dependencies: &[LinkValue]) -> Vec<wire::LinkValue> {
    link_dependencies
        .iter()
        .map(|dependency| wire::LinkValue {
            offsets: dependency.offsets.clone(),
            value: dependency.value.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethpm_types::{LinkReference, LinkTarget};

    fn template() -> UnlinkedBytecode {
        UnlinkedBytecode {
            bytecode: Some("0x6001".to_string()),
            link_references: vec![LinkReference {
                offsets: vec![1],
                name: "SafeMath".to_string(),
            }],
        }
    }

    fn dependency() -> wire::LinkValue {
        wire::LinkValue {
            offsets: vec![5],
            value: LinkTarget::Literal("0x01".to_string()),
        }
    }

    #[test]
    fn absent_record_resolves_to_absent() {
        assert_eq!(resolve(None, Some(&template())), None);
    }

    #[test]
    fn record_without_any_bytecode_resolves_to_absent() {
        let record = wire::LinkedBytecode {
            link_dependencies: Some(vec![dependency()]),
            ..Default::default()
        };
        assert_eq!(resolve(Some(&record), None), None);
    }

    #[test]
    fn empty_record_inherits_from_template() {
        let resolved = resolve(Some(&wire::LinkedBytecode::default()), Some(&template())).unwrap();
        assert_eq!(resolved.bytecode, "0x6001");
        assert_eq!(resolved.link_references, template().link_references);
        assert_eq!(resolved.link_dependencies, vec![]);
    }

    #[test]
    fn own_fields_override_the_template() {
        let record = wire::LinkedBytecode {
            bytecode: Some("0x6002".to_string()),
            link_references: Some(vec![]),
            link_dependencies: None,
        };
        let resolved = resolve(Some(&record), Some(&template())).unwrap();
        assert_eq!(resolved.bytecode, "0x6002");
        assert_eq!(resolved.link_references, vec![]);
    }

    #[test]
    fn dependencies_come_only_from_the_record() {
        let record = wire::LinkedBytecode {
            link_dependencies: Some(vec![dependency()]),
            ..Default::default()
        };
        let resolved = resolve(Some(&record), Some(&template())).unwrap();
        assert_eq!(resolved.link_dependencies.len(), 1);
        assert_eq!(resolved.link_dependencies[0].offsets, vec![5]);
    }

    #[test]
    fn bytecodeless_template_still_supplies_link_references() {
        let parent = UnlinkedBytecode {
            bytecode: None,
            link_references: template().link_references,
        };
        let record = wire::LinkedBytecode {
            bytecode: Some("0x6001".to_string()),
            ..Default::default()
        };
        let resolved = resolve(Some(&record), Some(&parent)).unwrap();
        assert_eq!(resolved.bytecode, "0x6001");
        assert_eq!(resolved.link_references, parent.link_references);

        // Re-diffing emits the bytecode (the template has none) but
        // omits the inherited link references.
        let rediffed = diff(&resolved, Some(&parent));
        assert_eq!(rediffed.bytecode, Some("0x6001".to_string()));
        assert_eq!(rediffed.link_references, None);
        assert_eq!(resolve(Some(&rediffed), Some(&parent)), Some(resolved));
    }

    #[test]
    fn bytecodeless_template_provides_no_bytecode() {
        let parent = UnlinkedBytecode {
            bytecode: None,
            link_references: template().link_references,
        };
        let record = wire::LinkedBytecode {
            link_dependencies: Some(vec![dependency()]),
            ..Default::default()
        };
        assert_eq!(resolve(Some(&record), Some(&parent)), None);
    }

    #[test]
    fn diff_omits_fields_equal_to_the_template() {
        let resolved = LinkedBytecode {
            bytecode: "0x6001".to_string(),
            link_references: template().link_references,
            link_dependencies: vec![],
        };
        let record = diff(&resolved, Some(&template()));
        assert_eq!(record.bytecode, None);
        assert_eq!(record.link_references, None);
        assert_eq!(record.link_dependencies, Some(vec![]));
    }

    #[test]
    fn diff_emits_everything_without_a_template() {
        let resolved = LinkedBytecode {
            bytecode: "0x6001".to_string(),
            link_references: vec![],
            link_dependencies: vec![],
        };
        let record = diff(&resolved, None);
        assert_eq!(record.bytecode, Some("0x6001".to_string()));
        assert_eq!(record.link_references, Some(vec![]));
    }

    #[test]
    fn diff_then_resolve_reproduces_the_resolved_value() {
        let cases = [
            LinkedBytecode {
                bytecode: "0x6001".to_string(),
                link_references: template().link_references,
                link_dependencies: read_link_dependencies(Some(&[dependency()])),
            },
            LinkedBytecode {
                bytecode: "0x6002".to_string(),
                link_references: vec![],
                link_dependencies: vec![],
            },
        ];
        for resolved in cases {
            for parent in [Some(template()), None] {
                let record = diff(&resolved, parent.as_ref());
                assert_eq!(resolve(Some(&record), parent.as_ref()), Some(resolved.clone()));
            }
        }
    }
}
