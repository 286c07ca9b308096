//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("invalid document: {0}")]
    Validation(#[from] pagecraft_document::ValidationError),

    #[error("mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),

    #[error("document is in preview mode")]
    PreviewMode,
}
