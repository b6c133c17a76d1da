//! Disposición fija de la hoja de inspección
//!
//! La hoja de inspección no tiene un esquema declarado: los técnicos se detectan en la
//! fila 16, los datos empiezan en la fila 21 y el código y las unidades por caja ocupan
//! columnas fijas. Estas posiciones se agrupan en [`SheetLayout`] para poder cambiarlas
//! desde la configuración o construir hojas sintéticas en las pruebas.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Hoja del libro de inspección que contiene los datos de técnicos
pub const INSPECTION_SHEET: &str = "LASER";

/// Fila (base 0) con los encabezados de técnicos
pub const HEADER_ROW: usize = 15;

/// Fila (base 0) que actúa de encabezado de datos; los datos empiezan en la siguiente
pub const DATA_HEADER_ROW: usize = 20;

/// Columna (base 0) del código de artículo
pub const CODE_COLUMN: usize = 1;

/// Columna (base 0) de las unidades por caja declaradas
pub const UNITS_COLUMN: usize = 3;

/// Prefijo que identifica una columna de técnico
pub const TECHNICIAN_PREFIX: &str = "TÉCNICO";

/// Posiciones de la hoja de inspección
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetLayout {
    pub sheet_name: String,
    pub header_row: usize,
    pub data_header_row: usize,
    pub code_column: usize,
    pub units_column: usize,
    pub technician_prefix: String,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            sheet_name: INSPECTION_SHEET.into(),
            header_row: HEADER_ROW,
            data_header_row: DATA_HEADER_ROW,
            code_column: CODE_COLUMN,
            units_column: UNITS_COLUMN,
            technician_prefix: TECHNICIAN_PREFIX.into(),
        }
    }
}

impl SheetLayout {
    /// Primera fila (base 0) con datos de artículos
    pub fn first_data_row(&self) -> usize {
        self.data_header_row + 1
    }

    /// Prefijo normalizado para comparar con los encabezados
    pub fn normalized_prefix(&self) -> String {
        self.technician_prefix.trim().to_uppercase()
    }

    pub fn validate(&self) -> Result<()> {
        if self.normalized_prefix().is_empty() {
            return Err(Error::Config("el prefijo de técnico está vacío".into()));
        }
        if self.sheet_name.trim().is_empty() {
            return Err(Error::Config("el nombre de la hoja está vacío".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let layout = SheetLayout::default();
        assert_eq!(layout.header_row, 15);
        assert_eq!(layout.first_data_row(), 21);
        assert_eq!(layout.code_column, 1);
        assert_eq!(layout.units_column, 3);
        assert_eq!(layout.sheet_name, "LASER");
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let layout: SheetLayout =
            serde_json::from_str(r#"{"header_row": 2}"#).expect("deserialización fallida");
        assert_eq!(layout.header_row, 2);
        assert_eq!(layout.data_header_row, DATA_HEADER_ROW);
    }

    #[test]
    fn test_empty_prefix_is_rejected() {
        let layout = SheetLayout {
            technician_prefix: "  ".into(),
            ..Default::default()
        };
        assert!(matches!(layout.validate(), Err(Error::Config(_))));
    }
}
