//! # Pagecraft Editor
//!
//! Document/editing state core for the Pagecraft site builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ catalog: definitions + starter templates    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Document lifecycle + mutations      │
//! │  - Hydrate/validate templates               │
//! │  - Apply mutations behind the lock policy   │
//! │  - Resolve selection keys                   │
//! │  - Track session state (selection, preview) │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderers: (node, selected, preview) → UI   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The template is plain data**: renderers are read-only consumers and
//!    signal intent back as mutations, never by touching the tree
//! 2. **Mutations are pure**: new template out, input untouched; denials are
//!    values the UI can probe ahead of time
//! 3. **Locks change only explicitly**: no content update can relax a lock
//! 4. **Merges are non-destructive**: partial patches never drop siblings
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagecraft_catalog::builtin;
//! use pagecraft_editor::{Document, EditSession, Mutation};
//!
//! let defs = builtin::definitions();
//! let template = builtin::starter_templates(&defs).remove(0);
//!
//! let mut session = EditSession::new(Document::hydrate(template, defs)?);
//! session.select_key("section-abc_2");
//!
//! session.apply(Mutation::UpdateSection {
//!     section_id: "abc_2".to_string(),
//!     patch: SectionPatch { name: Some("Hero".into()), ..Default::default() },
//! })?;
//! ```

mod document;
mod errors;
mod locks;
mod mutations;
mod selection;
mod session;

pub use document::{Document, MutationResult};
pub use errors::EditorError;
pub use locks::{element_permits, LockPolicy, OperationKind};
pub use mutations::{
    ColorSchemePatch, MoveDirection, Mutation, MutationError, PaddingPatch, SectionPatch,
    SectionPropertiesPatch, SettingsPatch,
};
pub use selection::{Resolved, SelectionKey, SelectionLevel};
pub use session::{EditSession, PreviewDevice};

// Re-export common types for convenience
pub use pagecraft_catalog::Definitions;
pub use pagecraft_document::{Template, ValidationError};
