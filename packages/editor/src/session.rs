//! # Edit Session
//!
//! Tracks the transient editing state around one open document: which node
//! is selected or focused, the preview device, and whether preview mode is
//! active.
//!
//! The session is also where the preview-mode contract is enforced: while
//! previewing, every mutating call is rejected before it reaches the
//! document, and after each successful structural change the selection is
//! repaired so it never points at a node that no longer exists.

use crate::{Document, EditorError, Mutation, MutationResult, Resolved, SelectionKey};
use serde::{Deserialize, Serialize};

/// Viewport the canvas renders at
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreviewDevice {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

/// One user's editing state over one document
#[derive(Debug)]
pub struct EditSession {
    document: Document,
    selected: Option<SelectionKey>,
    focused_element: Option<SelectionKey>,
    preview_device: PreviewDevice,
    preview_mode: bool,
}

impl EditSession {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            selected: None,
            focused_element: None,
            preview_device: PreviewDevice::Desktop,
            preview_mode: false,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Select a node. A key that does not resolve in the current document
    /// deselects instead; selecting always drops any element focus.
    pub fn select(&mut self, key: SelectionKey) -> bool {
        self.focused_element = None;
        if key.resolve(self.document.template()).is_some() {
            self.selected = Some(key);
            true
        } else {
            self.selected = None;
            false
        }
    }

    /// Select from a wire key string; malformed keys deselect
    pub fn select_key(&mut self, key: &str) -> bool {
        match SelectionKey::parse(key) {
            Some(parsed) => self.select(parsed),
            None => {
                self.deselect();
                false
            }
        }
    }

    pub fn deselect(&mut self) {
        self.selected = None;
        self.focused_element = None;
    }

    pub fn selected(&self) -> Option<&SelectionKey> {
        self.selected.as_ref()
    }

    pub fn resolve_selected(&self) -> Option<Resolved<'_>> {
        self.selected
            .as_ref()
            .and_then(|key| key.resolve(self.document.template()))
    }

    /// Focus an element for inline editing (rich-text toolbars).
    ///
    /// Only element-level keys that resolve can take focus.
    pub fn focus_element(&mut self, key: SelectionKey) -> bool {
        let is_element = matches!(key, SelectionKey::Element { .. });
        if is_element && key.resolve(self.document.template()).is_some() {
            self.focused_element = Some(key);
            true
        } else {
            false
        }
    }

    pub fn blur(&mut self) {
        self.focused_element = None;
    }

    pub fn focused_element(&self) -> Option<&SelectionKey> {
        self.focused_element.as_ref()
    }

    pub fn preview_device(&self) -> PreviewDevice {
        self.preview_device
    }

    pub fn set_preview_device(&mut self, device: PreviewDevice) {
        self.preview_device = device;
    }

    pub fn preview_mode(&self) -> bool {
        self.preview_mode
    }

    /// Toggle preview. Entering preview closes any inline editor; selection
    /// is kept so leaving preview restores the inspector.
    pub fn set_preview_mode(&mut self, preview: bool) {
        self.preview_mode = preview;
        if preview {
            self.focused_element = None;
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.document.is_dirty()
    }

    /// Record the persistence collaborator's save acknowledgment
    pub fn acknowledge_save(&mut self) {
        self.document.mark_saved();
    }

    /// Probe whether a mutation would be allowed right now
    pub fn can_apply(&self, mutation: &Mutation) -> bool {
        !self.preview_mode && self.document.can_apply(mutation)
    }

    /// Apply a mutation through the document, then repair the selection if
    /// the change removed what it pointed at
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, EditorError> {
        if self.preview_mode {
            return Err(EditorError::PreviewMode);
        }

        let result = self.document.apply(mutation)?;
        if result.changed {
            self.repair_selection();
        }
        Ok(result)
    }

    /// Drop a dangling selection to its nearest surviving ancestor
    fn repair_selection(&mut self) {
        let template = self.document.template();

        if let Some(key) = self.selected.take() {
            self.selected = nearest_surviving(key, template);
        }
        if let Some(key) = self.focused_element.take() {
            // Focus never climbs: a removed element just blurs
            if key.resolve(template).is_some() {
                self.focused_element = Some(key);
            }
        }
    }
}

fn nearest_surviving(
    key: SelectionKey,
    template: &pagecraft_document::Template,
) -> Option<SelectionKey> {
    let mut current = key;
    loop {
        if current.resolve(template).is_some() {
            // Climbing all the way to the template counts as deselection
            return (current != SelectionKey::Template).then_some(current);
        }
        current = current.parent()?;
    }
}
