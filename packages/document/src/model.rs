use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Open content map for type-specific fields (text, src, href, level, …).
///
/// The document core stays type-agnostic: shape validation against a node's
/// kind happens at the rendering boundary, not here.
pub type PropertyMap = HashMap<String, serde_json::Value>;

/// Closed vocabulary of leaf UI primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    Heading,
    Paragraph,
    Image,
    Button,
    FormField,
    RichText,
    Group,
    Video,
    Divider,
}

/// Leaf node of the document tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: String,
    pub kind: ElementKind,
    #[serde(default)]
    pub properties: PropertyMap,
    #[serde(default)]
    pub style: PropertyMap,
    #[serde(default = "default_true")]
    pub editable: bool,
    #[serde(default)]
    pub locked: bool,
}

fn default_true() -> bool {
    true
}

/// Lock state of a component.
///
/// `LockedEditing` denies content mutations but leaves structural operations
/// on the parent permitted. `LockedReplacing` is the inverse: content stays
/// mutable, kind replacement and deletion are denied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentLock {
    #[default]
    Editable,
    LockedEditing,
    LockedReplacing,
}

/// Lock state of a section.
///
/// `LockedComponents` freezes the section's component collection (add,
/// delete, reorder) while content updates on existing components stay
/// permitted. `LockedEditing` denies updates to the section's own fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionLock {
    #[default]
    Editable,
    LockedComponents,
    LockedEditing,
}

/// Typed content block (hero image, product card, …) owning its elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: String,
    pub kind: String,
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default)]
    pub parameters: PropertyMap,
    #[serde(default)]
    pub editable: ComponentLock,
}

impl Component {
    pub fn element(&self, element_id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == element_id)
    }

    pub fn element_mut(&mut self, element_id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == element_id)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundStyle {
    #[default]
    None,
    Color,
    Gradient,
    Image,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Padding {
    pub vertical: u32,
    pub horizontal: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionProperties {
    #[serde(default)]
    pub background_style: BackgroundStyle,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub gradient_start: Option<String>,
    #[serde(default)]
    pub gradient_end: Option<String>,
    #[serde(default)]
    pub gradient_direction: Option<String>,
    #[serde(default)]
    pub padding: Padding,
}

/// Major horizontal page region (hero, footer, …) owning its components.
///
/// Rendering order is array order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub properties: SectionProperties,
    /// Component kinds permitted in this section. Empty set means any kind.
    #[serde(default)]
    pub allowed_component_kinds: BTreeSet<String>,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub editable: SectionLock,
}

impl Section {
    pub fn component(&self, component_id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id == component_id)
    }

    pub fn component_mut(&mut self, component_id: &str) -> Option<&mut Component> {
        self.components.iter_mut().find(|c| c.id == component_id)
    }

    pub fn component_index(&self, component_id: &str) -> Option<usize> {
        self.components.iter().position(|c| c.id == component_id)
    }

    /// Whether `kind` may be placed in this section
    pub fn permits_kind(&self, kind: &str) -> bool {
        self.allowed_component_kinds.is_empty() || self.allowed_component_kinds.contains(kind)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    #[serde(default)]
    pub primary: String,
    #[serde(default)]
    pub secondary: String,
    #[serde(default)]
    pub accent: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSettings {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub color_scheme: ColorScheme,
}

/// Root document describing one page being edited.
///
/// All fields are plain comparable data: no parent back-references and no
/// embedded behavior, so any node can be deep-compared, cloned, or
/// serialized without cycle handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub global_settings: GlobalSettings,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Template {
    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    pub fn section_mut(&mut self, section_id: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id == section_id)
    }

    pub fn section_index(&self, section_id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == section_id)
    }
}
