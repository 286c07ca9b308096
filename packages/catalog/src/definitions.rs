use pagecraft_document::{Component, ComponentLock, Element, ElementKind, IdGenerator, PropertyMap};
use serde_json::Value;
use std::collections::HashMap;

/// Convert a `json!` object literal into a property map.
///
/// Non-object values yield an empty map; definitions are authored as object
/// literals so this never discards data in practice.
pub(crate) fn object(value: Value) -> PropertyMap {
    match value {
        Value::Object(map) => map.into_iter().collect(),
        _ => PropertyMap::new(),
    }
}

/// Blueprint for one element of a component definition.
///
/// Seeds carry no ids; ids are assigned at instantiation time so every
/// instantiated component gets fresh, sibling-unique element ids.
#[derive(Debug, Clone)]
pub struct ElementSeed {
    pub kind: ElementKind,
    pub properties: PropertyMap,
    pub editable: bool,
}

impl ElementSeed {
    pub fn new(kind: ElementKind, properties: Value) -> Self {
        Self {
            kind,
            properties: object(properties),
            editable: true,
        }
    }

    /// Mark the seeded element as not inline-editable
    pub fn fixed(mut self) -> Self {
        self.editable = false;
        self
    }

    fn instantiate(&self, ids: &mut IdGenerator) -> Element {
        Element {
            id: ids.new_id(),
            kind: self.kind,
            properties: self.properties.clone(),
            style: PropertyMap::new(),
            editable: self.editable,
            locked: false,
        }
    }
}

/// Default shape for one component kind
#[derive(Debug, Clone)]
pub struct ComponentDefinition {
    pub kind: String,
    pub label: String,
    pub parameters: PropertyMap,
    pub elements: Vec<ElementSeed>,
}

impl ComponentDefinition {
    pub fn new(kind: &str, label: &str, parameters: Value) -> Self {
        Self {
            kind: kind.to_string(),
            label: label.to_string(),
            parameters: object(parameters),
            elements: Vec::new(),
        }
    }

    pub fn with_element(mut self, seed: ElementSeed) -> Self {
        self.elements.push(seed);
        self
    }

    /// Instantiate a fresh component with a generated id
    pub fn instantiate(&self, ids: &mut IdGenerator) -> Component {
        let id = ids.new_id();
        self.instantiate_as(id, ids)
    }

    /// Instantiate with a caller-supplied id.
    ///
    /// Used by kind replacement, which must reuse the old component's id so
    /// selection and DOM identity stay stable.
    pub fn instantiate_as(&self, id: impl Into<String>, ids: &mut IdGenerator) -> Component {
        Component {
            id: id.into(),
            kind: self.kind.clone(),
            elements: self.elements.iter().map(|seed| seed.instantiate(ids)).collect(),
            parameters: self.parameters.clone(),
            editable: ComponentLock::Editable,
        }
    }
}

/// Registry of component definitions, keyed by kind
#[derive(Debug, Clone, Default)]
pub struct Definitions {
    map: HashMap<String, ComponentDefinition>,
}

impl Definitions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, definition: ComponentDefinition) {
        self.map.insert(definition.kind.clone(), definition);
    }

    pub fn get(&self, kind: &str) -> Option<&ComponentDefinition> {
        self.map.get(kind)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.map.contains_key(kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture() -> Definitions {
        let mut defs = Definitions::new();
        defs.register(
            ComponentDefinition::new("hero-image", "Hero image", json!({"content": {"title": "Welcome"}}))
                .with_element(ElementSeed::new(ElementKind::Heading, json!({"text": "Welcome", "level": 1})))
                .with_element(ElementSeed::new(ElementKind::Image, json!({"src": "", "alt": ""}))),
        );
        defs
    }

    #[test]
    fn test_instantiate_assigns_fresh_ids() {
        let defs = fixture();
        let mut ids = IdGenerator::new("test");

        let a = defs.get("hero-image").unwrap().instantiate(&mut ids);
        let b = defs.get("hero-image").unwrap().instantiate(&mut ids);

        assert_ne!(a.id, b.id);
        assert_eq!(a.elements.len(), 2);
        assert_ne!(a.elements[0].id, a.elements[1].id);
        assert_ne!(a.elements[0].id, b.elements[0].id);
    }

    #[test]
    fn test_instantiate_as_reuses_id() {
        let defs = fixture();
        let mut ids = IdGenerator::new("test");

        let component = defs.get("hero-image").unwrap().instantiate_as("c1", &mut ids);

        assert_eq!(component.id, "c1");
        assert_eq!(component.kind, "hero-image");
        assert_eq!(component.parameters["content"], json!({"title": "Welcome"}));
    }

    #[test]
    fn test_unknown_kind_lookup() {
        let defs = fixture();
        assert!(defs.get("video-hero").is_none());
        assert!(!defs.contains("video-hero"));
    }

    #[test]
    fn test_fixed_seed_is_not_editable() {
        let seed = ElementSeed::new(ElementKind::Divider, json!({})).fixed();
        let mut ids = IdGenerator::new("test");
        let element = seed.instantiate(&mut ids);
        assert!(!element.editable);
    }
}
