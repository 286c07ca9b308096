//! # Address Resolver
//!
//! Bridges the UI's flat selection strings and the hierarchical document.
//!
//! A selection key has one of four wire shapes:
//!
//! ```text
//! ""                                     template level
//! "section-{sectionId}"
//! "component-{sectionId}-{componentId}"
//! "element-{sectionId}-{componentId}-{elementId}"
//! ```
//!
//! Keys are constructed and parsed here and nowhere else; call sites never
//! hand-split the strings. `-` is the reserved segment separator, which is
//! why node ids may not contain it (enforced at hydration). A malformed key
//! parses to `None` rather than panicking; callers treat `None` as deselect.

use pagecraft_document::{Component, Element, Section, Template};
use std::fmt;

/// Typed form of a selection key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SelectionKey {
    Template,
    Section {
        section_id: String,
    },
    Component {
        section_id: String,
        component_id: String,
    },
    Element {
        section_id: String,
        component_id: String,
        element_id: String,
    },
}

/// Depth of a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionLevel {
    Template,
    Section,
    Component,
    Element,
}

impl SelectionKey {
    pub fn section(section_id: impl Into<String>) -> Self {
        SelectionKey::Section {
            section_id: section_id.into(),
        }
    }

    pub fn component(section_id: impl Into<String>, component_id: impl Into<String>) -> Self {
        SelectionKey::Component {
            section_id: section_id.into(),
            component_id: component_id.into(),
        }
    }

    pub fn element(
        section_id: impl Into<String>,
        component_id: impl Into<String>,
        element_id: impl Into<String>,
    ) -> Self {
        SelectionKey::Element {
            section_id: section_id.into(),
            component_id: component_id.into(),
            element_id: element_id.into(),
        }
    }

    /// Parse a wire string. Malformed input yields `None`.
    pub fn parse(key: &str) -> Option<SelectionKey> {
        if key.is_empty() {
            return Some(SelectionKey::Template);
        }

        if let Some(rest) = key.strip_prefix("section-") {
            let [section_id] = split_segments::<1>(rest)?;
            return Some(SelectionKey::section(section_id));
        }

        if let Some(rest) = key.strip_prefix("component-") {
            let [section_id, component_id] = split_segments::<2>(rest)?;
            return Some(SelectionKey::component(section_id, component_id));
        }

        if let Some(rest) = key.strip_prefix("element-") {
            let [section_id, component_id, element_id] = split_segments::<3>(rest)?;
            return Some(SelectionKey::element(section_id, component_id, element_id));
        }

        None
    }

    pub fn level(&self) -> SelectionLevel {
        match self {
            SelectionKey::Template => SelectionLevel::Template,
            SelectionKey::Section { .. } => SelectionLevel::Section,
            SelectionKey::Component { .. } => SelectionLevel::Component,
            SelectionKey::Element { .. } => SelectionLevel::Element,
        }
    }

    pub fn section_id(&self) -> Option<&str> {
        match self {
            SelectionKey::Template => None,
            SelectionKey::Section { section_id }
            | SelectionKey::Component { section_id, .. }
            | SelectionKey::Element { section_id, .. } => Some(section_id),
        }
    }

    pub fn component_id(&self) -> Option<&str> {
        match self {
            SelectionKey::Component { component_id, .. }
            | SelectionKey::Element { component_id, .. } => Some(component_id),
            _ => None,
        }
    }

    /// The key one level up; `Template` has no parent
    pub fn parent(&self) -> Option<SelectionKey> {
        match self {
            SelectionKey::Template => None,
            SelectionKey::Section { .. } => Some(SelectionKey::Template),
            SelectionKey::Component { section_id, .. } => {
                Some(SelectionKey::section(section_id.clone()))
            }
            SelectionKey::Element {
                section_id,
                component_id,
                ..
            } => Some(SelectionKey::component(
                section_id.clone(),
                component_id.clone(),
            )),
        }
    }

    /// Walk the document top-down and return the addressed node.
    ///
    /// Any id that fails to match at its level yields `None`.
    pub fn resolve<'a>(&self, template: &'a Template) -> Option<Resolved<'a>> {
        match self {
            SelectionKey::Template => Some(Resolved::Template(template)),

            SelectionKey::Section { section_id } => {
                template.section(section_id).map(Resolved::Section)
            }

            SelectionKey::Component {
                section_id,
                component_id,
            } => {
                let section = template.section(section_id)?;
                let component = section.component(component_id)?;
                Some(Resolved::Component { section, component })
            }

            SelectionKey::Element {
                section_id,
                component_id,
                element_id,
            } => {
                let section = template.section(section_id)?;
                let component = section.component(component_id)?;
                let element = component.element(element_id)?;
                Some(Resolved::Element {
                    section,
                    component,
                    element,
                })
            }
        }
    }
}

impl fmt::Display for SelectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionKey::Template => Ok(()),
            SelectionKey::Section { section_id } => write!(f, "section-{section_id}"),
            SelectionKey::Component {
                section_id,
                component_id,
            } => write!(f, "component-{section_id}-{component_id}"),
            SelectionKey::Element {
                section_id,
                component_id,
                element_id,
            } => write!(f, "element-{section_id}-{component_id}-{element_id}"),
        }
    }
}

/// A resolved selection: the node plus its containing chain
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<'a> {
    Template(&'a Template),
    Section(&'a Section),
    Component {
        section: &'a Section,
        component: &'a Component,
    },
    Element {
        section: &'a Section,
        component: &'a Component,
        element: &'a Element,
    },
}

impl<'a> Resolved<'a> {
    /// Id of the addressed node itself
    pub fn node_id(&self) -> &'a str {
        match self {
            Resolved::Template(t) => &t.id,
            Resolved::Section(s) => &s.id,
            Resolved::Component { component, .. } => &component.id,
            Resolved::Element { element, .. } => &element.id,
        }
    }
}

fn split_segments<const N: usize>(rest: &str) -> Option<[&str; N]> {
    let mut out = [""; N];
    let mut parts = rest.split('-');
    for slot in &mut out {
        let part = parts.next()?;
        if part.is_empty() {
            return None;
        }
        *slot = part;
    }
    // Trailing segments mean the wrong key shape was used
    if parts.next().is_some() {
        return None;
    }
    Some(out)
}
