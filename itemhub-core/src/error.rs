//! Error types for itemhub core
//!
//! Display strings double as the messages returned to clients, so they are
//! part of the wire contract of both HTTP surfaces.

use crate::item::ItemId;
use thiserror::Error;

/// Result type alias using the itemhub core error
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for the item store and query dispatcher
#[derive(Error, Debug)]
pub enum Error {
    /// No item is stored under the identifier
    #[error("Item no encontrado")]
    NotFound(ItemId),

    /// An identifier was missing or not an integer
    #[error("ID inválido")]
    InvalidId,

    /// A request body could not be decoded into item fields
    #[error("Datos inválidos")]
    InvalidData,

    /// Variables for a dispatched operation were missing or mistyped
    #[error("Datos inválidos para '{0}'")]
    InvalidArguments(&'static str),

    /// The query matched no registered signature
    #[error("Query o mutación no soportada")]
    UnsupportedOperation,

    /// I/O errors while reading external documents
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decoding errors while reading external documents
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error describes bad caller input or missing data, as
    /// opposed to an infrastructure failure on the server side
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::NotFound(_)
                | Error::InvalidId
                | Error::InvalidData
                | Error::InvalidArguments(_)
                | Error::UnsupportedOperation
        )
    }
}
