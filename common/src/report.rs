//! Datos de presentación
//!
//! Convierte un [`Analysis`] en todo lo que una interfaz necesita mostrar: mensaje de
//! estado, tabla de resultados, métricas y gráfico por técnico y avisos. No dibuja nada;
//! el CLI lo imprime en la terminal y cualquier otra interfaz puede hacer lo mismo.

use crate::types::{Analysis, ResultRow, TechnicianSummary};
use serde::Serialize;

/// Encabezados de la tabla de resultados (y del Excel descargable)
pub const RESULT_HEADERS: [&str; 6] = ["Técnico", "Código", "Revisado", "Uds/Caja", "Cajas", "Picking"];

pub const MSG_COMPLETED: &str = "Análisis completado";
pub const MSG_NO_DATA: &str = "No se encontraron datos para analizar.";

pub const LABEL_GOOD: &str = "Unidades Buenas";
pub const LABEL_DEFECTIVE: &str = "Unidades Defectuosas";
pub const LABEL_BOXES: &str = "Cajas Completas";
pub const LABEL_PICKING: &str = "Unidades a Picking";

/// Estado general del análisis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReportStatus {
    /// Hay al menos una fila de resultado
    Completed,
    NoData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub status: ReportStatus,
    pub message: &'static str,
    pub headers: [&'static str; 6],
    pub table: Vec<[String; 6]>,
    pub panels: Vec<TechnicianPanel>,
    /// Avisos informativos (técnicos sin actividad)
    pub notes: Vec<String>,
    /// Aviso de códigos sin unidades por caja
    pub unmatched_warning: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub label: &'static str,
    pub value: u64,
    /// Porcentaje con un decimal; `None` si el gráfico no tiene datos
    pub percent: Option<f64>,
}

/// Bloque de un técnico: métricas + gráfico de dos porciones
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnicianPanel {
    pub technician_name: String,
    pub metrics: [Metric; 4],
    pub chart: [ChartSlice; 2],
}

pub fn build_report(analysis: &Analysis) -> Report {
    let (status, message) = if analysis.has_results() {
        (ReportStatus::Completed, MSG_COMPLETED)
    } else {
        (ReportStatus::NoData, MSG_NO_DATA)
    };

    // sin filas de resultado sólo se muestra el aviso
    let panels = if analysis.has_results() {
        analysis.summaries.iter().map(technician_panel).collect()
    } else {
        Vec::new()
    };

    let codes = analysis.unmatched_codes();
    let unmatched_warning = (!codes.is_empty()).then(|| {
        format!(
            "{} filas sin unidades por caja quedaron fuera de los totales. Códigos: {}",
            analysis.unmatched.len(),
            codes.join(", ")
        )
    });

    Report {
        status,
        message,
        headers: RESULT_HEADERS,
        table: analysis.results.iter().map(table_row).collect(),
        panels,
        notes: analysis
            .inactive
            .iter()
            .map(|t| format!("{} no tiene actividad registrada.", t))
            .collect(),
        unmatched_warning,
    }
}

fn table_row(row: &ResultRow) -> [String; 6] {
    [
        row.technician_name.clone(),
        row.code.clone(),
        row.quantity_reviewed.to_string(),
        row.units_per_box.to_string(),
        row.boxes.to_string(),
        row.picking_units.to_string(),
    ]
}

fn technician_panel(summary: &TechnicianSummary) -> TechnicianPanel {
    let total = summary.total_boxes + summary.total_picking_units;
    let percent = |value: u64| {
        (total > 0).then(|| (value as f64 * 1000.0 / total as f64).round() / 10.0)
    };

    TechnicianPanel {
        technician_name: summary.technician_name.clone(),
        metrics: [
            Metric { label: LABEL_GOOD, value: summary.total_good_units },
            Metric { label: LABEL_DEFECTIVE, value: summary.total_defective_units },
            Metric { label: LABEL_BOXES, value: summary.total_boxes },
            Metric { label: LABEL_PICKING, value: summary.total_picking_units },
        ],
        chart: [
            ChartSlice {
                label: LABEL_BOXES,
                value: summary.total_boxes,
                percent: percent(summary.total_boxes),
            },
            ChartSlice {
                label: "Picking",
                value: summary.total_picking_units,
                percent: percent(summary.total_picking_units),
            },
        ],
    }
}
