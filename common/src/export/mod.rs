//! Generación de archivos de salida compartida por el CLI

#[cfg(feature = "excel")]
pub mod excel_core;
