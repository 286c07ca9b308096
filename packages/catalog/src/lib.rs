//! # Pagecraft Catalog
//!
//! Read-only lookup tables the editor instantiates nodes from:
//!
//! - [`Definitions`]: component kind → default shape (elements, parameters)
//! - [`builtin`]: the built-in definition set and starter templates served
//!   by the hydration source
//!
//! The registry is statically initialized and passed explicitly into the
//! editor, so tests can substitute fixture definitions.

pub mod builtin;
pub mod definitions;

pub use definitions::{ComponentDefinition, Definitions, ElementSeed};
