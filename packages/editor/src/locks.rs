//! # Lock Policy
//!
//! Pure permission gate mapping a node's lock state and an operation kind
//! to permitted/denied. Denial is always a value, never a panic: the UI
//! probes the gate before rendering affordances (e.g. to hide a delete
//! button), so a denied operation must be cheap to ask about.
//!
//! Lock states change only through the explicit set-lock mutations; no
//! content update can relax or tighten a lock.

use pagecraft_document::{ComponentLock, Element, SectionLock};

/// Categories of operations the gate distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    UpdateContent,
    UpdateStyle,
    ReplaceKind,
    Delete,
    Move,
    AddChild,
    SetLock,
}

/// Permission gate implemented by each lock state machine
pub trait LockPolicy {
    fn permits(&self, op: OperationKind) -> bool;
}

impl LockPolicy for ComponentLock {
    fn permits(&self, op: OperationKind) -> bool {
        match op {
            OperationKind::UpdateContent | OperationKind::UpdateStyle => {
                *self != ComponentLock::LockedEditing
            }
            OperationKind::ReplaceKind | OperationKind::Delete => {
                *self != ComponentLock::LockedReplacing
            }
            OperationKind::Move | OperationKind::AddChild | OperationKind::SetLock => true,
        }
    }
}

impl LockPolicy for SectionLock {
    fn permits(&self, op: OperationKind) -> bool {
        match op {
            // Structural operations on the section's component collection.
            // Order is structural, so moves count.
            OperationKind::AddChild | OperationKind::Delete | OperationKind::Move => {
                *self != SectionLock::LockedComponents
            }
            // The section's own fields (name, title, background, padding)
            OperationKind::UpdateContent | OperationKind::UpdateStyle => {
                *self != SectionLock::LockedEditing
            }
            OperationKind::ReplaceKind | OperationKind::SetLock => true,
        }
    }
}

/// Gate for element-level edits, combining the element's own flags.
///
/// A locked element takes no edits at all; a non-editable element still
/// accepts style changes (it just offers no inline content editing).
pub fn element_permits(element: &Element, op: OperationKind) -> bool {
    match op {
        OperationKind::UpdateContent => element.editable && !element.locked,
        OperationKind::UpdateStyle => !element.locked,
        _ => !element.locked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_document::{ElementKind, PropertyMap};

    #[test]
    fn test_component_editable_permits_everything() {
        let lock = ComponentLock::Editable;
        for op in [
            OperationKind::UpdateContent,
            OperationKind::UpdateStyle,
            OperationKind::ReplaceKind,
            OperationKind::Delete,
            OperationKind::Move,
            OperationKind::SetLock,
        ] {
            assert!(lock.permits(op), "{op:?} should be permitted");
        }
    }

    #[test]
    fn test_locked_editing_denies_content_only() {
        let lock = ComponentLock::LockedEditing;

        assert!(!lock.permits(OperationKind::UpdateContent));
        assert!(!lock.permits(OperationKind::UpdateStyle));
        assert!(lock.permits(OperationKind::ReplaceKind));
        assert!(lock.permits(OperationKind::Delete));
        assert!(lock.permits(OperationKind::SetLock));
    }

    #[test]
    fn test_locked_replacing_denies_replace_and_delete() {
        let lock = ComponentLock::LockedReplacing;

        assert!(lock.permits(OperationKind::UpdateContent));
        assert!(lock.permits(OperationKind::UpdateStyle));
        assert!(!lock.permits(OperationKind::ReplaceKind));
        assert!(!lock.permits(OperationKind::Delete));
        assert!(lock.permits(OperationKind::SetLock));
    }

    #[test]
    fn test_section_locked_components_freezes_structure() {
        let lock = SectionLock::LockedComponents;

        assert!(!lock.permits(OperationKind::AddChild));
        assert!(!lock.permits(OperationKind::Delete));
        assert!(!lock.permits(OperationKind::Move));
        // Section's own fields stay editable
        assert!(lock.permits(OperationKind::UpdateContent));
        assert!(lock.permits(OperationKind::SetLock));
    }

    #[test]
    fn test_section_locked_editing_freezes_own_fields() {
        let lock = SectionLock::LockedEditing;

        assert!(!lock.permits(OperationKind::UpdateContent));
        assert!(!lock.permits(OperationKind::UpdateStyle));
        // Structure stays open
        assert!(lock.permits(OperationKind::AddChild));
        assert!(lock.permits(OperationKind::Delete));
        assert!(lock.permits(OperationKind::Move));
    }

    #[test]
    fn test_element_flags() {
        let element = Element {
            id: "e1".to_string(),
            kind: ElementKind::Heading,
            properties: PropertyMap::new(),
            style: PropertyMap::new(),
            editable: true,
            locked: false,
        };
        assert!(element_permits(&element, OperationKind::UpdateContent));
        assert!(element_permits(&element, OperationKind::UpdateStyle));

        let fixed = Element { editable: false, ..element.clone() };
        assert!(!element_permits(&fixed, OperationKind::UpdateContent));
        assert!(element_permits(&fixed, OperationKind::UpdateStyle));

        let locked = Element { locked: true, ..element };
        assert!(!element_permits(&locked, OperationKind::UpdateContent));
        assert!(!element_permits(&locked, OperationKind::UpdateStyle));
    }
}
