//! Integration tests for the editor crate: catalog hydration, full editing
//! flows, and the resolver round-trip guarantee.

use pagecraft_catalog::builtin;
use pagecraft_document::PropertyMap;
use pagecraft_editor::{
    Document, EditSession, MoveDirection, Mutation, MutationError, PreviewDevice, SelectionKey,
    Template,
};
use serde_json::json;

fn props(value: serde_json::Value) -> PropertyMap {
    serde_json::from_value(value).unwrap()
}

fn open(name: &str) -> Document {
    let defs = builtin::definitions();
    let template = builtin::starter_templates(&defs)
        .into_iter()
        .find(|t| t.name == name)
        .unwrap();
    Document::hydrate(template, defs).unwrap()
}

#[test]
fn test_full_editing_flow() {
    let mut session = EditSession::new(open("Landing"));

    // Select the hero component through its wire key
    let (section_id, component_id) = {
        let template = session.document().template();
        let section = &template.sections[0];
        (section.id.clone(), section.components[0].id.clone())
    };
    assert!(session.select_key(&format!("component-{section_id}-{component_id}")));

    // Inspector edit: patch one content field
    session
        .apply(Mutation::UpdateComponent {
            section_id: section_id.clone(),
            component_id: component_id.clone(),
            parameters: props(json!({"content": {"title": "Launch day"}})),
        })
        .unwrap();

    let template = session.document().template();
    let content = &template.sections[0].components[0].parameters["content"];
    assert_eq!(content["title"], json!("Launch day"));
    // Sibling default from the definition survives the patch
    assert_eq!(content["subtitle"], json!("Start building"));
    assert!(session.is_dirty());

    // Swap the hero for a video hero; selection stays valid because the id
    // is preserved
    session
        .apply(Mutation::ReplaceComponent {
            section_id: section_id.clone(),
            component_id: component_id.clone(),
            new_kind: "video-hero".to_string(),
        })
        .unwrap();
    assert_eq!(
        session.selected(),
        Some(&SelectionKey::component(section_id, component_id.clone()))
    );
    let replaced = &session.document().template().sections[0].components[0];
    assert_eq!(replaced.id, component_id);
    assert_eq!(replaced.kind, "video-hero");

    // Persistence collaborator acknowledges the save
    session.acknowledge_save();
    assert!(!session.is_dirty());
}

#[test]
fn test_resolver_round_trip_over_every_node() {
    let document = open("Landing");
    let template: &Template = document.template();

    let mut keys: Vec<(String, String)> = Vec::new();
    for section in &template.sections {
        keys.push((format!("section-{}", section.id), section.id.clone()));
        for component in &section.components {
            keys.push((
                format!("component-{}-{}", section.id, component.id),
                component.id.clone(),
            ));
            for element in &component.elements {
                keys.push((
                    format!("element-{}-{}-{}", section.id, component.id, element.id),
                    element.id.clone(),
                ));
            }
        }
    }
    assert!(keys.len() > 10);

    for (wire, expected_id) in keys {
        let key = SelectionKey::parse(&wire).unwrap();
        // Building the wire string back is deterministic
        assert_eq!(key.to_string(), wire);

        let resolved = key.resolve(template).unwrap();
        assert_eq!(resolved.node_id(), expected_id);
    }
}

#[test]
fn test_version_advances_only_on_real_changes() {
    let mut document = open("Storefront");
    assert_eq!(document.version(), 0);

    let section_id = document.template().sections[0].id.clone();

    // Boundary move: successful no-op, version stays put
    let result = document
        .apply(Mutation::MoveSection {
            section_id: section_id.clone(),
            direction: MoveDirection::Up,
        })
        .unwrap();
    assert!(!result.changed);
    assert_eq!(document.version(), 0);
    assert!(!document.is_dirty());

    // Real move advances the version and dirties the document
    let result = document
        .apply(Mutation::MoveSection {
            section_id,
            direction: MoveDirection::Down,
        })
        .unwrap();
    assert!(result.changed);
    assert_eq!(document.version(), 1);
    assert!(document.is_dirty());
}

#[test]
fn test_locked_footer_in_starter_template() {
    let mut document = open("Landing");
    let footer = document.template().sections.last().unwrap();
    let footer_id = footer.id.clone();
    let component_id = footer.components[0].id.clone();

    let delete = Mutation::DeleteComponent {
        section_id: footer_id.clone(),
        component_id: component_id.clone(),
    };
    assert!(!document.can_apply(&delete));

    let snapshot = document.template().clone();
    assert!(matches!(
        document.apply(delete),
        Err(pagecraft_editor::EditorError::Mutation(
            MutationError::PermissionDenied { .. }
        ))
    ));
    assert_eq!(document.template(), &snapshot);
    assert!(!document.is_dirty());

    // Content updates on the locked footer's components still work
    document
        .apply(Mutation::UpdateComponent {
            section_id: footer_id,
            component_id,
            parameters: props(json!({"content": {"copyright": "© Acme"}})),
        })
        .unwrap();
    assert!(document.is_dirty());
}

#[test]
fn test_palette_add_and_reorder() {
    let mut document = open("Storefront");
    let products_id = document.template().sections[1].id.clone();

    // Products section only allows product cards
    let card = document.new_component("product-card").unwrap();
    let card_id = card.id.clone();
    let hero = document.new_component("hero-image").unwrap();

    assert!(matches!(
        document.apply(Mutation::AddComponent {
            section_id: products_id.clone(),
            component: hero,
            index: None,
        }),
        Err(pagecraft_editor::EditorError::Mutation(
            MutationError::KindNotAllowed { .. }
        ))
    ));

    document
        .apply(Mutation::AddComponent {
            section_id: products_id.clone(),
            component: card,
            index: Some(0),
        })
        .unwrap();
    assert_eq!(
        document.template().section(&products_id).unwrap().component_index(&card_id),
        Some(0)
    );

    // Drag it to the end
    document
        .apply(Mutation::MoveComponentTo {
            section_id: products_id.clone(),
            component_id: card_id.clone(),
            index: 3,
        })
        .unwrap();
    assert_eq!(
        document.template().section(&products_id).unwrap().component_index(&card_id),
        Some(3)
    );
}

#[test]
fn test_preview_device_and_mode() {
    let mut session = EditSession::new(open("Landing"));

    assert_eq!(session.preview_device(), PreviewDevice::Desktop);
    session.set_preview_device(PreviewDevice::Mobile);
    assert_eq!(session.preview_device(), PreviewDevice::Mobile);

    session.set_preview_mode(true);
    let section_id = session.document().template().sections[0].id.clone();
    let result = session.apply(Mutation::DeleteSection { section_id });
    assert_eq!(result, Err(pagecraft_editor::EditorError::PreviewMode));

    // Leaving preview makes the same mutation applicable again
    session.set_preview_mode(false);
    let section_id = session.document().template().sections[0].id.clone();
    session.apply(Mutation::DeleteSection { section_id }).unwrap();
}

#[test]
fn test_add_section_flow() {
    let mut document = open("Landing");
    let before = document.template().sections.len();

    let mut section = document.new_section("Testimonials");
    section.title = Some("What people say".to_string());
    let section_id = section.id.clone();

    document
        .apply(Mutation::AddSection {
            section,
            index: Some(1),
        })
        .unwrap();

    let template = document.template();
    assert_eq!(template.sections.len(), before + 1);
    assert_eq!(template.section_index(&section_id), Some(1));

    // The new section accepts any component kind
    let block = document.new_component("text-block").unwrap();
    document
        .apply(Mutation::AddComponent {
            section_id,
            component: block,
            index: None,
        })
        .unwrap();
}

#[test]
fn test_mutation_wire_serialization() {
    let mutation = Mutation::UpdateElement {
        section_id: "s1".to_string(),
        component_id: "c1".to_string(),
        element_id: "e1".to_string(),
        properties: props(json!({"text": "Hi"})),
        style: PropertyMap::new(),
    };

    let json = serde_json::to_string(&mutation).unwrap();
    let back: Mutation = serde_json::from_str(&json).unwrap();

    assert_eq!(mutation, back);
}
