//! Tipos de error del núcleo

use thiserror::Error;

/// Error común
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    /// La tabla de referencia no se pudo leer o escribir
    #[error("Reference store error: {0}")]
    ReferenceStore(String),
}

/// Alias de Result
pub type Result<T> = std::result::Result<T, Error>;
