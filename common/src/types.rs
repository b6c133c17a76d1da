//! Tipos del modelo de datos
//!
//! - ReferenceEntry: fila persistida de la tabla de referencia (código → unidades/caja)
//! - TechnicianColumn / InspectionRow: vista efímera de la hoja subida
//! - ResultRow / TechnicianSummary: salida de la conciliación

use serde::{Deserialize, Serialize};

/// Entrada de la tabla de referencia
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceEntry {
    /// Código normalizado (clave única)
    pub code: String,

    pub units_per_box: u64,

    /// Columna "Artículo"; vacía en las entradas aprendidas
    #[serde(default)]
    pub label: String,
}

impl ReferenceEntry {
    pub fn new(code: impl Into<String>, units_per_box: u64) -> Self {
        Self {
            code: code.into(),
            units_per_box,
            label: String::new(),
        }
    }
}

/// Columna de técnico detectada en la fila de encabezados
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianColumn {
    pub technician_name: String,
    pub quantity_column_index: usize,
    /// Columna contigua de defectuosos; `None` si cae fuera de la hoja
    pub defective_column_index: Option<usize>,
}

/// Fila de artículo leída de la hoja para un técnico concreto
#[derive(Debug, Clone, PartialEq)]
pub struct InspectionRow {
    /// Fila de la hoja en base 1, para mensajes
    pub sheet_row: usize,
    pub code: String,
    pub raw_quantity: i64,
    pub raw_defective_quantity: i64,
    /// Unidades por caja declaradas, truncadas; `None` si faltan, no son numéricas o valen 0
    ///
    /// Un valor presente puede truncarse a 0 o ser negativo: la fila no tiene entonces
    /// unidades válidas y no se consulta la tabla de referencia.
    pub declared_units_per_box: Option<i64>,
}

/// Fila de resultado: reparto de una cantidad revisada en cajas y picking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRow {
    pub technician_name: String,
    pub code: String,
    pub quantity_reviewed: u64,
    pub units_per_box: u64,
    pub boxes: u64,
    pub picking_units: u64,
}

impl ResultRow {
    /// Divide `quantity` en cajas completas y unidades sueltas
    ///
    /// `units_per_box` debe ser mayor que 0.
    pub fn split(
        technician_name: impl Into<String>,
        code: impl Into<String>,
        quantity: u64,
        units_per_box: u64,
    ) -> Self {
        debug_assert!(units_per_box > 0);
        Self {
            technician_name: technician_name.into(),
            code: code.into(),
            quantity_reviewed: quantity,
            units_per_box,
            boxes: quantity / units_per_box,
            picking_units: quantity % units_per_box,
        }
    }
}

/// Totales por técnico
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianSummary {
    pub technician_name: String,
    pub total_good_units: u64,
    pub total_defective_units: u64,
    pub total_boxes: u64,
    pub total_picking_units: u64,
}

/// Fila con cantidad pero sin unidades por caja resolubles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnmatchedRow {
    pub technician_name: String,
    pub code: String,
    pub quantity: u64,
    pub sheet_row: usize,
}

/// Resultado completo de analizar una hoja
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// Filas de resultado, por técnico y en orden de hoja
    pub results: Vec<ResultRow>,
    /// Un resumen por técnico con actividad
    pub summaries: Vec<TechnicianSummary>,
    /// Técnicos sin actividad registrada
    pub inactive: Vec<String>,
    /// Filas descartadas por no tener unidades por caja
    pub unmatched: Vec<UnmatchedRow>,
    /// Entradas añadidas a la tabla de referencia en esta ejecución
    pub learned: Vec<ReferenceEntry>,
}

impl Analysis {
    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    /// Códigos sin resolver, sin repetir, en orden de aparición
    pub fn unmatched_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = Vec::new();
        for row in &self.unmatched {
            if !codes.contains(&row.code.as_str()) {
                codes.push(&row.code);
            }
        }
        codes
    }

    pub fn summary_for(&self, technician: &str) -> Option<&TechnicianSummary> {
        self.summaries
            .iter()
            .find(|s| s.technician_name == technician)
    }
}
