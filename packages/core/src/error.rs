//! Error types for the encode and decode paths.

use thiserror::Error;

/// Errors returned when a value cannot be rendered as an UBER document.
#[derive(Debug, Error, PartialEq)]
pub enum EncodeError {
    #[error("content could not be reflected to properties: {0}")]
    Serialize(String),

    #[error("content serialized to JSON null, which has no UBER representation")]
    NullContent,
}

/// Errors returned when an UBER document cannot be folded back into values.
///
/// Decoding is a pure transform: any error on a given input is permanent for
/// that input. Callers translate these into protocol-level responses.
#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    /// The document violates the wire format itself: unparseable JSON, a node
    /// claiming more than one of the value/link/data roles, `rel` without
    /// `url`, or a content subtree that cannot be interpreted.
    #[error("malformed UBER document: {0}")]
    Malformed(String),

    #[error("duplicate property {0:?} among one node's children")]
    DuplicateProperty(String),

    #[error("no resource entry with content was found in this document")]
    MissingContent,

    #[error("unknown action {0:?}; expected one of: append, partial, read, remove, replace")]
    UnknownAction(String),

    #[error("page field {name:?} is not a non-negative integer, got {value}")]
    InvalidPageField { name: String, value: String },

    #[error("could not construct a value from document properties: {0}")]
    PropertyConstruction(String),
}

impl DecodeError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        DecodeError::Malformed(reason.into())
    }
}
