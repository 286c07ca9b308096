//! Hydration-time structural validation.
//!
//! A template arriving from the hydration source must conform exactly to the
//! document schema; nothing here repairs a malformed document. Validation
//! failure means the caller must supply a valid document or an explicit
//! empty-document fallback.

use crate::model::Template;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("empty node id (owner: {owner})")]
    EmptyId { owner: String },

    #[error("invalid node id {id:?}: ids may not contain '-'")]
    InvalidId { id: String },

    #[error("duplicate section id {0:?}")]
    DuplicateSectionId(String),

    #[error("duplicate component id {component_id:?} in section {section_id:?}")]
    DuplicateComponentId {
        section_id: String,
        component_id: String,
    },

    #[error("duplicate element id {element_id:?} in component {component_id:?}")]
    DuplicateElementId {
        component_id: String,
        element_id: String,
    },

    #[error("component kind {kind:?} not allowed in section {section_id:?}")]
    KindNotAllowed { section_id: String, kind: String },
}

/// Validate a template for adoption by the editor.
///
/// Checks: non-empty ids, ids free of the reserved `-` separator, unique ids
/// within each sibling collection, and component kinds against each
/// section's allowed set.
pub fn validate_template(template: &Template) -> Result<(), ValidationError> {
    check_id(&template.id, "template")?;

    let mut section_ids = HashSet::new();
    for section in &template.sections {
        check_id(&section.id, "section")?;
        if !section_ids.insert(section.id.as_str()) {
            return Err(ValidationError::DuplicateSectionId(section.id.clone()));
        }

        let mut component_ids = HashSet::new();
        for component in &section.components {
            check_id(&component.id, "component")?;
            if !component_ids.insert(component.id.as_str()) {
                return Err(ValidationError::DuplicateComponentId {
                    section_id: section.id.clone(),
                    component_id: component.id.clone(),
                });
            }

            if !section.permits_kind(&component.kind) {
                return Err(ValidationError::KindNotAllowed {
                    section_id: section.id.clone(),
                    kind: component.kind.clone(),
                });
            }

            let mut element_ids = HashSet::new();
            for element in &component.elements {
                check_id(&element.id, "element")?;
                if !element_ids.insert(element.id.as_str()) {
                    return Err(ValidationError::DuplicateElementId {
                        component_id: component.id.clone(),
                        element_id: element.id.clone(),
                    });
                }
            }
        }
    }

    Ok(())
}

fn check_id(id: &str, owner: &str) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::EmptyId {
            owner: owner.to_string(),
        });
    }
    if id.contains('-') {
        return Err(ValidationError::InvalidId { id: id.to_string() });
    }
    Ok(())
}
