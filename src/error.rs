use thiserror::Error;

#[derive(Error, Debug)]
pub enum CajasError {
    #[error("Error de configuración: {0}")]
    Config(String),

    #[error("Archivo no encontrado: {0}")]
    FileNotFound(String),

    #[error("La hoja '{sheet}' no existe en {file}")]
    SheetNotFound { sheet: String, file: String },

    #[error("Error al leer el Excel: {0}")]
    ExcelRead(String),

    #[error("Error al generar el Excel: {0}")]
    ExcelGeneration(String),

    #[error("Error de entrada interactiva: {0}")]
    Prompt(String),

    #[error("Error de JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Error de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] cajas_picking_common::Error),
}

pub type Result<T> = std::result::Result<T, CajasError>;
