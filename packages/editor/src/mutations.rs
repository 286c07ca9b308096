//! # Document Mutations
//!
//! Semantic operations on page templates.
//!
//! ## Design Principles
//!
//! 1. **Pure**: `apply` is a function of (template, mutation, definitions);
//!    the input template is never touched and a fresh template comes back
//! 2. **Gated**: every operation consults the lock policy before changing
//!    anything; a denial returns the error value and the caller keeps the
//!    unchanged template
//! 3. **Non-destructive merges**: partial content patches merge one level
//!    deep, so updating one field never wipes out its siblings
//! 4. **Identity-stable**: replacing a component's kind reuses its id and
//!    position, keeping selection and DOM identity intact

use crate::locks::{element_permits, LockPolicy, OperationKind};
use pagecraft_catalog::Definitions;
use pagecraft_common::{merge_map, MergeDepth};
use pagecraft_document::{
    BackgroundStyle, Component, ComponentLock, IdGenerator, PropertyMap, Section, SectionLock,
    Template,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("section not found: {0}")]
    SectionNotFound(String),

    #[error("component not found: {component_id} (section {section_id})")]
    ComponentNotFound {
        section_id: String,
        component_id: String,
    },

    #[error("element not found: {element_id} (component {component_id})")]
    ElementNotFound {
        component_id: String,
        element_id: String,
    },

    #[error("operation {operation:?} denied by lock state")]
    PermissionDenied { operation: OperationKind },

    #[error("unknown component kind: {0}")]
    UnknownComponentKind(String),

    #[error("component kind {kind:?} not allowed in section {section_id}")]
    KindNotAllowed { section_id: String, kind: String },

    #[error("id already present among siblings: {0}")]
    DuplicateId(String),

    #[error("invalid node id {0:?}")]
    InvalidId(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoveDirection {
    Up,
    Down,
}

/// Partial update of the template's global settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub meta_description: Option<String>,
    pub logo: Option<String>,
    pub color_scheme: Option<ColorSchemePatch>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSchemePatch {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
}

/// Partial update of a section.
///
/// `properties` and `properties.padding` merge one level deep; everything
/// else overwrites the existing value. Lock state is deliberately absent:
/// only the set-lock mutations may change it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionPatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub properties: Option<SectionPropertiesPatch>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionPropertiesPatch {
    pub background_style: Option<BackgroundStyle>,
    pub background_color: Option<String>,
    pub background_image: Option<String>,
    pub gradient_start: Option<String>,
    pub gradient_end: Option<String>,
    pub gradient_direction: Option<String>,
    pub padding: Option<PaddingPatch>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddingPatch {
    pub vertical: Option<u32>,
    pub horizontal: Option<u32>,
}

/// Semantic mutations over a template
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Merge a patch into the template's global settings
    UpdateSettings { settings: SettingsPatch },

    /// Insert a section; appended when `index` is absent
    AddSection {
        section: Section,
        index: Option<usize>,
    },

    /// Merge a patch into a section's own fields
    UpdateSection {
        section_id: String,
        patch: SectionPatch,
    },

    DeleteSection {
        section_id: String,
    },

    /// Adjacent swap; a no-op at the first/last boundary
    MoveSection {
        section_id: String,
        direction: MoveDirection,
    },

    /// Remove-then-insert at index (drag to position)
    MoveSectionTo {
        section_id: String,
        index: usize,
    },

    /// Insert a component into a section; appended when `index` is absent
    AddComponent {
        section_id: String,
        component: Component,
        index: Option<usize>,
    },

    /// Merge a parameter patch into a component, one level deep
    UpdateComponent {
        section_id: String,
        component_id: String,
        parameters: PropertyMap,
    },

    /// Swap a component's kind for definition defaults, keeping its id and
    /// position
    ReplaceComponent {
        section_id: String,
        component_id: String,
        new_kind: String,
    },

    DeleteComponent {
        section_id: String,
        component_id: String,
    },

    MoveComponent {
        section_id: String,
        component_id: String,
        direction: MoveDirection,
    },

    MoveComponentTo {
        section_id: String,
        component_id: String,
        index: usize,
    },

    /// Merge property/style patches into an element, one level deep
    UpdateElement {
        section_id: String,
        component_id: String,
        element_id: String,
        #[serde(default)]
        properties: PropertyMap,
        #[serde(default)]
        style: PropertyMap,
    },

    SetSectionLock {
        section_id: String,
        lock: SectionLock,
    },

    SetComponentLock {
        section_id: String,
        component_id: String,
        lock: ComponentLock,
    },
}

impl Mutation {
    /// Apply to a template, producing a new template.
    ///
    /// The input is untouched; on `Err` the caller's template is the
    /// unchanged document, making every denial a no-op by construction.
    pub fn apply(
        &self,
        template: &Template,
        definitions: &Definitions,
        ids: &mut IdGenerator,
    ) -> Result<Template, MutationError> {
        let mut next = template.clone();

        match self {
            Mutation::UpdateSettings { settings } => {
                apply_settings(&mut next, settings);
            }

            Mutation::AddSection { section, index } => {
                check_new_id(&section.id)?;
                if next.section(&section.id).is_some() {
                    return Err(MutationError::DuplicateId(section.id.clone()));
                }
                let at = index.unwrap_or(next.sections.len()).min(next.sections.len());
                next.sections.insert(at, section.clone());
            }

            Mutation::UpdateSection { section_id, patch } => {
                let section = find_section_mut(&mut next, section_id)?;
                gate(section.editable, OperationKind::UpdateContent)?;
                apply_section_patch(section, patch);
            }

            Mutation::DeleteSection { section_id } => {
                let section = find_section(&next, section_id)?;
                gate(section.editable, OperationKind::Delete)?;
                let at = next.section_index(section_id).ok_or_else(|| {
                    MutationError::SectionNotFound(section_id.clone())
                })?;
                next.sections.remove(at);
            }

            Mutation::MoveSection {
                section_id,
                direction,
            } => {
                let at = next
                    .section_index(section_id)
                    .ok_or_else(|| MutationError::SectionNotFound(section_id.clone()))?;
                if let Some(to) = swap_target(at, *direction, next.sections.len()) {
                    next.sections.swap(at, to);
                }
            }

            Mutation::MoveSectionTo { section_id, index } => {
                let at = next
                    .section_index(section_id)
                    .ok_or_else(|| MutationError::SectionNotFound(section_id.clone()))?;
                let section = next.sections.remove(at);
                let to = (*index).min(next.sections.len());
                next.sections.insert(to, section);
            }

            Mutation::AddComponent {
                section_id,
                component,
                index,
            } => {
                check_new_id(&component.id)?;
                let section = find_section_mut(&mut next, section_id)?;
                gate(section.editable, OperationKind::AddChild)?;
                if !section.permits_kind(&component.kind) {
                    return Err(MutationError::KindNotAllowed {
                        section_id: section_id.clone(),
                        kind: component.kind.clone(),
                    });
                }
                if section.component(&component.id).is_some() {
                    return Err(MutationError::DuplicateId(component.id.clone()));
                }
                let at = index
                    .unwrap_or(section.components.len())
                    .min(section.components.len());
                section.components.insert(at, component.clone());
            }

            Mutation::UpdateComponent {
                section_id,
                component_id,
                parameters,
            } => {
                let component = find_component_mut(&mut next, section_id, component_id)?;
                gate(component.editable, OperationKind::UpdateContent)?;
                merge_map(&mut component.parameters, parameters, MergeDepth::OneLevel);
            }

            Mutation::ReplaceComponent {
                section_id,
                component_id,
                new_kind,
            } => {
                let definition = definitions
                    .get(new_kind)
                    .ok_or_else(|| MutationError::UnknownComponentKind(new_kind.clone()))?;

                let section = find_section_mut(&mut next, section_id)?;
                if !section.permits_kind(new_kind) {
                    return Err(MutationError::KindNotAllowed {
                        section_id: section_id.clone(),
                        kind: new_kind.clone(),
                    });
                }

                let at = section.component_index(component_id).ok_or_else(|| {
                    MutationError::ComponentNotFound {
                        section_id: section_id.clone(),
                        component_id: component_id.clone(),
                    }
                })?;
                gate(section.components[at].editable, OperationKind::ReplaceKind)?;

                // Fresh defaults under the old id; old content is not merged
                section.components[at] = definition.instantiate_as(component_id.clone(), ids);
            }

            Mutation::DeleteComponent {
                section_id,
                component_id,
            } => {
                let section = find_section_mut(&mut next, section_id)?;
                gate(section.editable, OperationKind::Delete)?;
                let at = section.component_index(component_id).ok_or_else(|| {
                    MutationError::ComponentNotFound {
                        section_id: section_id.clone(),
                        component_id: component_id.clone(),
                    }
                })?;
                gate(section.components[at].editable, OperationKind::Delete)?;
                section.components.remove(at);
            }

            Mutation::MoveComponent {
                section_id,
                component_id,
                direction,
            } => {
                let section = find_section_mut(&mut next, section_id)?;
                gate(section.editable, OperationKind::Move)?;
                let at = section.component_index(component_id).ok_or_else(|| {
                    MutationError::ComponentNotFound {
                        section_id: section_id.clone(),
                        component_id: component_id.clone(),
                    }
                })?;
                if let Some(to) = swap_target(at, *direction, section.components.len()) {
                    section.components.swap(at, to);
                }
            }

            Mutation::MoveComponentTo {
                section_id,
                component_id,
                index,
            } => {
                let section = find_section_mut(&mut next, section_id)?;
                gate(section.editable, OperationKind::Move)?;
                let at = section.component_index(component_id).ok_or_else(|| {
                    MutationError::ComponentNotFound {
                        section_id: section_id.clone(),
                        component_id: component_id.clone(),
                    }
                })?;
                let component = section.components.remove(at);
                let to = (*index).min(section.components.len());
                section.components.insert(to, component);
            }

            Mutation::UpdateElement {
                section_id,
                component_id,
                element_id,
                properties,
                style,
            } => {
                let component = find_component_mut(&mut next, section_id, component_id)?;
                gate(component.editable, OperationKind::UpdateContent)?;
                let element = component.element_mut(element_id).ok_or_else(|| {
                    MutationError::ElementNotFound {
                        component_id: component_id.clone(),
                        element_id: element_id.clone(),
                    }
                })?;

                if !properties.is_empty() {
                    if !element_permits(element, OperationKind::UpdateContent) {
                        return Err(MutationError::PermissionDenied {
                            operation: OperationKind::UpdateContent,
                        });
                    }
                    merge_map(&mut element.properties, properties, MergeDepth::OneLevel);
                }
                if !style.is_empty() {
                    if !element_permits(element, OperationKind::UpdateStyle) {
                        return Err(MutationError::PermissionDenied {
                            operation: OperationKind::UpdateStyle,
                        });
                    }
                    merge_map(&mut element.style, style, MergeDepth::OneLevel);
                }
            }

            Mutation::SetSectionLock { section_id, lock } => {
                let section = find_section_mut(&mut next, section_id)?;
                section.editable = *lock;
            }

            Mutation::SetComponentLock {
                section_id,
                component_id,
                lock,
            } => {
                let component = find_component_mut(&mut next, section_id, component_id)?;
                component.editable = *lock;
            }
        }

        Ok(next)
    }

    /// Probe the lock policy for this mutation without applying it.
    ///
    /// A target that does not resolve counts as not permitted; the UI uses
    /// this to decide which affordances to render.
    pub fn permitted(&self, template: &Template) -> bool {
        match self {
            Mutation::UpdateSettings { .. } | Mutation::AddSection { .. } => true,

            Mutation::UpdateSection { section_id, .. } => template
                .section(section_id)
                .is_some_and(|s| s.editable.permits(OperationKind::UpdateContent)),

            Mutation::DeleteSection { section_id } => template
                .section(section_id)
                .is_some_and(|s| s.editable.permits(OperationKind::Delete)),

            Mutation::MoveSection { section_id, .. }
            | Mutation::MoveSectionTo { section_id, .. } => {
                template.section(section_id).is_some()
            }

            Mutation::AddComponent { section_id, component, .. } => template
                .section(section_id)
                .is_some_and(|s| {
                    s.editable.permits(OperationKind::AddChild) && s.permits_kind(&component.kind)
                }),

            Mutation::UpdateComponent {
                section_id,
                component_id,
                ..
            } => component_of(template, section_id, component_id)
                .is_some_and(|c| c.editable.permits(OperationKind::UpdateContent)),

            Mutation::ReplaceComponent {
                section_id,
                component_id,
                ..
            } => component_of(template, section_id, component_id)
                .is_some_and(|c| c.editable.permits(OperationKind::ReplaceKind)),

            Mutation::DeleteComponent {
                section_id,
                component_id,
            } => template.section(section_id).is_some_and(|s| {
                s.editable.permits(OperationKind::Delete)
                    && s.component(component_id)
                        .is_some_and(|c| c.editable.permits(OperationKind::Delete))
            }),

            Mutation::MoveComponent {
                section_id,
                component_id,
                ..
            }
            | Mutation::MoveComponentTo {
                section_id,
                component_id,
                ..
            } => template.section(section_id).is_some_and(|s| {
                s.editable.permits(OperationKind::Move) && s.component(component_id).is_some()
            }),

            Mutation::UpdateElement {
                section_id,
                component_id,
                element_id,
                properties,
                style,
            } => template.section(section_id).is_some_and(|s| {
                s.component(component_id).is_some_and(|c| {
                    c.editable.permits(OperationKind::UpdateContent)
                        && c.element(element_id).is_some_and(|e| {
                            (properties.is_empty()
                                || element_permits(e, OperationKind::UpdateContent))
                                && (style.is_empty()
                                    || element_permits(e, OperationKind::UpdateStyle))
                        })
                })
            }),

            Mutation::SetSectionLock { section_id, .. } => {
                template.section(section_id).is_some()
            }

            Mutation::SetComponentLock {
                section_id,
                component_id,
                ..
            } => component_of(template, section_id, component_id).is_some(),
        }
    }
}

// `-` is the selection key separator; ids carrying it could never be
// addressed again.
fn check_new_id(id: &str) -> Result<(), MutationError> {
    if id.is_empty() || id.contains('-') {
        return Err(MutationError::InvalidId(id.to_string()));
    }
    Ok(())
}

fn gate(lock: impl LockPolicy, op: OperationKind) -> Result<(), MutationError> {
    if lock.permits(op) {
        Ok(())
    } else {
        Err(MutationError::PermissionDenied { operation: op })
    }
}

fn find_section<'a>(template: &'a Template, section_id: &str) -> Result<&'a Section, MutationError> {
    template
        .section(section_id)
        .ok_or_else(|| MutationError::SectionNotFound(section_id.to_string()))
}

fn find_section_mut<'a>(
    template: &'a mut Template,
    section_id: &str,
) -> Result<&'a mut Section, MutationError> {
    template
        .section_mut(section_id)
        .ok_or_else(|| MutationError::SectionNotFound(section_id.to_string()))
}

fn find_component_mut<'a>(
    template: &'a mut Template,
    section_id: &str,
    component_id: &str,
) -> Result<&'a mut Component, MutationError> {
    find_section_mut(template, section_id)?
        .component_mut(component_id)
        .ok_or_else(|| MutationError::ComponentNotFound {
            section_id: section_id.to_string(),
            component_id: component_id.to_string(),
        })
}

fn component_of<'a>(
    template: &'a Template,
    section_id: &str,
    component_id: &str,
) -> Option<&'a Component> {
    template.section(section_id)?.component(component_id)
}

/// Swap partner for an adjacent move, or `None` at a boundary
fn swap_target(at: usize, direction: MoveDirection, len: usize) -> Option<usize> {
    match direction {
        MoveDirection::Up => at.checked_sub(1),
        MoveDirection::Down => {
            let to = at + 1;
            (to < len).then_some(to)
        }
    }
}

fn apply_settings(template: &mut Template, patch: &SettingsPatch) {
    let settings = &mut template.global_settings;
    if let Some(title) = &patch.title {
        settings.title = title.clone();
    }
    if let Some(subtitle) = &patch.subtitle {
        settings.subtitle = subtitle.clone();
    }
    if let Some(meta_description) = &patch.meta_description {
        settings.meta_description = meta_description.clone();
    }
    if let Some(logo) = &patch.logo {
        settings.logo = Some(logo.clone());
    }
    if let Some(scheme) = &patch.color_scheme {
        if let Some(primary) = &scheme.primary {
            settings.color_scheme.primary = primary.clone();
        }
        if let Some(secondary) = &scheme.secondary {
            settings.color_scheme.secondary = secondary.clone();
        }
        if let Some(accent) = &scheme.accent {
            settings.color_scheme.accent = accent.clone();
        }
    }
}

fn apply_section_patch(section: &mut Section, patch: &SectionPatch) {
    if let Some(name) = &patch.name {
        section.name = name.clone();
    }
    if let Some(title) = &patch.title {
        section.title = Some(title.clone());
    }
    if let Some(subtitle) = &patch.subtitle {
        section.subtitle = Some(subtitle.clone());
    }
    if let Some(properties) = &patch.properties {
        let target = &mut section.properties;
        if let Some(background_style) = properties.background_style {
            target.background_style = background_style;
        }
        if let Some(background_color) = &properties.background_color {
            target.background_color = Some(background_color.clone());
        }
        if let Some(background_image) = &properties.background_image {
            target.background_image = Some(background_image.clone());
        }
        if let Some(gradient_start) = &properties.gradient_start {
            target.gradient_start = Some(gradient_start.clone());
        }
        if let Some(gradient_end) = &properties.gradient_end {
            target.gradient_end = Some(gradient_end.clone());
        }
        if let Some(gradient_direction) = &properties.gradient_direction {
            target.gradient_direction = Some(gradient_direction.clone());
        }
        if let Some(padding) = &properties.padding {
            if let Some(vertical) = padding.vertical {
                target.padding.vertical = vertical;
            }
            if let Some(horizontal) = padding.horizontal {
                target.padding.horizontal = horizontal;
            }
        }
    }
}
