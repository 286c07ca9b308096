//! Built-in component definitions and starter templates.
//!
//! This is the static catalog the hydration source serves when the user
//! picks a template instead of loading a persisted page.

use crate::definitions::{ComponentDefinition, Definitions, ElementSeed};
use pagecraft_document::{
    BackgroundStyle, ColorScheme, ElementKind, GlobalSettings, IdGenerator, Padding, Section,
    SectionLock, SectionProperties, Template,
};
use serde_json::json;
use std::collections::BTreeSet;

/// The built-in component definition set
pub fn definitions() -> Definitions {
    let mut defs = Definitions::new();

    defs.register(
        ComponentDefinition::new(
            "hero-image",
            "Hero image",
            json!({"content": {"title": "Welcome", "subtitle": "Start building"}, "layout": "center"}),
        )
        .with_element(ElementSeed::new(ElementKind::Heading, json!({"text": "Welcome", "level": 1})))
        .with_element(ElementSeed::new(ElementKind::Paragraph, json!({"text": "Start building"})))
        .with_element(ElementSeed::new(ElementKind::Image, json!({"src": "", "alt": ""})))
        .with_element(ElementSeed::new(ElementKind::Button, json!({"label": "Get started", "href": "#"}))),
    );

    defs.register(
        ComponentDefinition::new(
            "video-hero",
            "Video hero",
            json!({"content": {"title": "Watch", "subtitle": "See it in action"}, "autoplay": false}),
        )
        .with_element(ElementSeed::new(ElementKind::Heading, json!({"text": "Watch", "level": 1})))
        .with_element(ElementSeed::new(ElementKind::Video, json!({"src": "", "poster": ""})))
        .with_element(ElementSeed::new(ElementKind::Button, json!({"label": "Learn more", "href": "#"}))),
    );

    defs.register(
        ComponentDefinition::new(
            "feature-grid",
            "Feature grid",
            json!({"content": {"title": "Features"}, "columns": 3}),
        )
        .with_element(ElementSeed::new(ElementKind::Heading, json!({"text": "Features", "level": 2})))
        .with_element(ElementSeed::new(
            ElementKind::Group,
            json!({"items": [{"title": "Fast", "body": ""}, {"title": "Simple", "body": ""}, {"title": "Yours", "body": ""}]}),
        )),
    );

    defs.register(
        ComponentDefinition::new(
            "product-card",
            "Product card",
            json!({"content": {"name": "Product", "price": "0.00", "currency": "USD"}}),
        )
        .with_element(ElementSeed::new(ElementKind::Image, json!({"src": "", "alt": ""})))
        .with_element(ElementSeed::new(ElementKind::Heading, json!({"text": "Product", "level": 3})))
        .with_element(ElementSeed::new(ElementKind::Paragraph, json!({"text": "0.00"})))
        .with_element(ElementSeed::new(ElementKind::Button, json!({"label": "Add to cart", "href": "#"}))),
    );

    defs.register(
        ComponentDefinition::new(
            "contact-form",
            "Contact form",
            json!({"content": {"title": "Get in touch"}, "submitLabel": "Send"}),
        )
        .with_element(ElementSeed::new(ElementKind::Heading, json!({"text": "Get in touch", "level": 2})))
        .with_element(ElementSeed::new(ElementKind::FormField, json!({"fieldType": "text", "label": "Name"})))
        .with_element(ElementSeed::new(ElementKind::FormField, json!({"fieldType": "email", "label": "Email"})))
        .with_element(ElementSeed::new(ElementKind::FormField, json!({"fieldType": "textarea", "label": "Message"})))
        .with_element(ElementSeed::new(ElementKind::Button, json!({"label": "Send", "href": ""}))),
    );

    defs.register(
        ComponentDefinition::new(
            "text-block",
            "Text block",
            json!({"content": {"body": ""}, "width": "narrow"}),
        )
        .with_element(ElementSeed::new(ElementKind::RichText, json!({"html": "<p></p>"}))),
    );

    defs.register(
        ComponentDefinition::new(
            "footer",
            "Footer",
            json!({"content": {"copyright": "© Pagecraft"}, "showSocial": true}),
        )
        .with_element(ElementSeed::new(ElementKind::Divider, json!({})).fixed())
        .with_element(ElementSeed::new(ElementKind::Paragraph, json!({"text": "© Pagecraft"}))),
    );

    defs
}

/// Starter templates built from the given definition set.
///
/// Every template returned here passes hydration validation.
pub fn starter_templates(defs: &Definitions) -> Vec<Template> {
    let mut templates = Vec::new();

    if let Some(landing) = landing_template(defs) {
        templates.push(landing);
    }
    if let Some(storefront) = storefront_template(defs) {
        templates.push(storefront);
    }

    templates
}

fn landing_template(defs: &Definitions) -> Option<Template> {
    let mut ids = IdGenerator::new("Landing");
    let template_id = ids.new_id();

    let hero = Section {
        id: ids.new_id(),
        name: "Hero".to_string(),
        title: Some("Above the fold".to_string()),
        subtitle: None,
        properties: SectionProperties {
            background_style: BackgroundStyle::Gradient,
            gradient_start: Some("#1a1a2e".to_string()),
            gradient_end: Some("#16213e".to_string()),
            gradient_direction: Some("to-bottom".to_string()),
            padding: Padding { vertical: 96, horizontal: 24 },
            ..SectionProperties::default()
        },
        allowed_component_kinds: BTreeSet::from(["hero-image".to_string(), "video-hero".to_string()]),
        components: vec![defs.get("hero-image")?.instantiate(&mut ids)],
        editable: SectionLock::Editable,
    };

    let features = Section {
        id: ids.new_id(),
        name: "Features".to_string(),
        title: None,
        subtitle: None,
        properties: SectionProperties {
            background_style: BackgroundStyle::Color,
            background_color: Some("#ffffff".to_string()),
            padding: Padding { vertical: 64, horizontal: 24 },
            ..SectionProperties::default()
        },
        allowed_component_kinds: BTreeSet::new(),
        components: vec![
            defs.get("feature-grid")?.instantiate(&mut ids),
            defs.get("text-block")?.instantiate(&mut ids),
        ],
        editable: SectionLock::Editable,
    };

    let contact = Section {
        id: ids.new_id(),
        name: "Contact".to_string(),
        title: Some("Get in touch".to_string()),
        subtitle: None,
        properties: SectionProperties {
            background_style: BackgroundStyle::Color,
            background_color: Some("#f5f5f5".to_string()),
            padding: Padding { vertical: 64, horizontal: 24 },
            ..SectionProperties::default()
        },
        allowed_component_kinds: BTreeSet::from(["contact-form".to_string(), "text-block".to_string()]),
        components: vec![defs.get("contact-form")?.instantiate(&mut ids)],
        editable: SectionLock::Editable,
    };

    // Footer ships locked: components can be edited but not added or removed
    let footer = Section {
        id: ids.new_id(),
        name: "Footer".to_string(),
        title: None,
        subtitle: None,
        properties: SectionProperties {
            background_style: BackgroundStyle::Color,
            background_color: Some("#1a1a2e".to_string()),
            padding: Padding { vertical: 32, horizontal: 24 },
            ..SectionProperties::default()
        },
        allowed_component_kinds: BTreeSet::from(["footer".to_string()]),
        components: vec![defs.get("footer")?.instantiate(&mut ids)],
        editable: SectionLock::LockedComponents,
    };

    Some(Template {
        id: template_id,
        name: "Landing".to_string(),
        global_settings: GlobalSettings {
            title: "Landing".to_string(),
            subtitle: "A single-page launch site".to_string(),
            meta_description: "Launch page built with Pagecraft".to_string(),
            logo: None,
            color_scheme: ColorScheme {
                primary: "#1a1a2e".to_string(),
                secondary: "#16213e".to_string(),
                accent: "#e94560".to_string(),
            },
        },
        sections: vec![hero, features, contact, footer],
    })
}

fn storefront_template(defs: &Definitions) -> Option<Template> {
    let mut ids = IdGenerator::new("Storefront");
    let template_id = ids.new_id();

    let hero = Section {
        id: ids.new_id(),
        name: "Hero".to_string(),
        title: None,
        subtitle: None,
        properties: SectionProperties {
            background_style: BackgroundStyle::Image,
            background_image: Some("/assets/storefront-hero.jpg".to_string()),
            padding: Padding { vertical: 120, horizontal: 24 },
            ..SectionProperties::default()
        },
        allowed_component_kinds: BTreeSet::from(["hero-image".to_string(), "video-hero".to_string()]),
        components: vec![defs.get("video-hero")?.instantiate(&mut ids)],
        editable: SectionLock::Editable,
    };

    let products = Section {
        id: ids.new_id(),
        name: "Products".to_string(),
        title: Some("Shop the collection".to_string()),
        subtitle: None,
        properties: SectionProperties {
            background_style: BackgroundStyle::Color,
            background_color: Some("#ffffff".to_string()),
            padding: Padding { vertical: 64, horizontal: 24 },
            ..SectionProperties::default()
        },
        allowed_component_kinds: BTreeSet::from(["product-card".to_string()]),
        components: vec![
            defs.get("product-card")?.instantiate(&mut ids),
            defs.get("product-card")?.instantiate(&mut ids),
            defs.get("product-card")?.instantiate(&mut ids),
        ],
        editable: SectionLock::Editable,
    };

    let footer = Section {
        id: ids.new_id(),
        name: "Footer".to_string(),
        title: None,
        subtitle: None,
        properties: SectionProperties {
            background_style: BackgroundStyle::Color,
            background_color: Some("#111111".to_string()),
            padding: Padding { vertical: 32, horizontal: 24 },
            ..SectionProperties::default()
        },
        allowed_component_kinds: BTreeSet::from(["footer".to_string()]),
        components: vec![defs.get("footer")?.instantiate(&mut ids)],
        editable: SectionLock::LockedComponents,
    };

    Some(Template {
        id: template_id,
        name: "Storefront".to_string(),
        global_settings: GlobalSettings {
            title: "Storefront".to_string(),
            subtitle: "Sell online".to_string(),
            meta_description: "Storefront built with Pagecraft".to_string(),
            logo: None,
            color_scheme: ColorScheme {
                primary: "#111111".to_string(),
                secondary: "#444444".to_string(),
                accent: "#ff6b35".to_string(),
            },
        },
        sections: vec![hero, products, footer],
    })
}
