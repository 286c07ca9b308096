//! # Document Handle
//!
//! Owns the current template for one editing session and routes every
//! mutation through the lock policy.
//!
//! ## Lifecycle
//!
//! ```text
//! Hydrate → Edit → Save acknowledgment
//!    ↓        ↓            ↓
//! validate  apply      dirty cleared
//! ```
//!
//! The template is only ever replaced wholesale: `apply` computes a new
//! template from the current one and swaps it in on success, so a denied or
//! failed mutation leaves the document byte-for-byte unchanged.

use crate::mutations::MutationError;
use crate::{EditorError, Mutation};
use pagecraft_catalog::Definitions;
use pagecraft_document::{
    get_template_seed, validate_template, Component, IdGenerator, Section, SectionLock,
    SectionProperties, Template,
};

/// Result of applying a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationResult {
    /// Version after the apply
    pub version: u64,

    /// False when the mutation was a successful no-op (e.g. a boundary
    /// move); the version does not advance in that case
    pub changed: bool,
}

/// An open template plus its editing bookkeeping
#[derive(Debug, Clone)]
pub struct Document {
    template: Template,
    definitions: Definitions,
    ids: IdGenerator,
    version: u64,
    dirty: bool,
}

impl Document {
    /// Adopt a template from the hydration source.
    ///
    /// The template is validated first; a structurally invalid document is
    /// refused outright rather than partially adopted.
    pub fn hydrate(template: Template, definitions: Definitions) -> Result<Self, EditorError> {
        validate_template(&template)?;

        let seed = get_template_seed(&template.name);
        let ids = IdGenerator::resume(seed.clone(), max_issued_count(&template, &seed));

        Ok(Self {
            template,
            definitions,
            ids,
            version: 0,
            dirty: false,
        })
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn definitions(&self) -> &Definitions {
        &self.definitions
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Whether there are changes the persistence collaborator has not
    /// acknowledged yet
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Record the persistence collaborator's save acknowledgment
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Apply a mutation, swapping in the new template on success.
    ///
    /// On `Err` the current template is untouched; denial is a no-op plus
    /// the error value, never an exception path that loses state.
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, EditorError> {
        let next = mutation
            .apply(&self.template, &self.definitions, &mut self.ids)
            .map_err(|e| {
                tracing::warn!("mutation denied: {}", e);
                e
            })?;

        let changed = next != self.template;
        if changed {
            self.template = next;
            self.version += 1;
            self.dirty = true;
            tracing::debug!("mutation applied, version {}", self.version);
        }

        Ok(MutationResult {
            version: self.version,
            changed,
        })
    }

    /// Probe whether the lock policy would allow a mutation
    pub fn can_apply(&self, mutation: &Mutation) -> bool {
        mutation.permitted(&self.template)
    }

    /// Instantiate a fresh component of `kind` from the definition registry
    pub fn new_component(&mut self, kind: &str) -> Result<Component, EditorError> {
        let definition = self
            .definitions
            .get(kind)
            .ok_or_else(|| MutationError::UnknownComponentKind(kind.to_string()))?;
        Ok(definition.instantiate(&mut self.ids))
    }

    /// Build an empty section with a fresh id
    pub fn new_section(&mut self, name: &str) -> Section {
        Section {
            id: self.ids.new_id(),
            name: name.to_string(),
            title: None,
            subtitle: None,
            properties: SectionProperties::default(),
            allowed_component_kinds: Default::default(),
            components: Vec::new(),
            editable: SectionLock::Editable,
        }
    }
}

/// Highest counter already issued under `seed`, so resumed generators never
/// collide with ids present in the hydrated document
fn max_issued_count(template: &Template, seed: &str) -> u32 {
    let prefix = format!("{seed}_");
    let mut max = 0;

    let mut note = |id: &str| {
        if let Some(rest) = id.strip_prefix(&prefix) {
            if let Ok(n) = rest.parse::<u32>() {
                max = max.max(n);
            }
        }
    };

    note(&template.id);
    for section in &template.sections {
        note(&section.id);
        for component in &section.components {
            note(&component.id);
            for element in &component.elements {
                note(&element.id);
            }
        }
    }

    max
}
