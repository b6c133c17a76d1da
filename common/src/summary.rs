//! Acumulación de resultados por técnico

use crate::types::{Analysis, ReferenceEntry, ResultRow, TechnicianSummary, UnmatchedRow};

/// Acumulador de filas de resultado y totales por técnico
#[derive(Debug, Default)]
pub struct Aggregator {
    analysis: Analysis,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra un técnico sin actividad; no genera resumen
    pub fn mark_inactive(&mut self, technician: &str) {
        self.analysis.inactive.push(technician.to_string());
    }

    /// Abre el resumen de un técnico con actividad
    ///
    /// El resumen existe aunque todas sus filas acaben descartadas.
    pub fn begin_technician(&mut self, technician: &str) {
        if self.summary_mut(technician).is_none() {
            self.analysis.summaries.push(TechnicianSummary {
                technician_name: technician.to_string(),
                ..Default::default()
            });
        }
    }

    /// Suma una fila de resultado y sus defectuosos al técnico correspondiente
    pub fn record(&mut self, row: ResultRow, defective_units: u64) {
        if self.summary_mut(&row.technician_name).is_none() {
            self.begin_technician(&row.technician_name);
        }
        if let Some(summary) = self.summary_mut(&row.technician_name) {
            summary.total_good_units = summary.total_good_units.saturating_add(row.quantity_reviewed);
            summary.total_defective_units =
                summary.total_defective_units.saturating_add(defective_units);
            summary.total_boxes = summary.total_boxes.saturating_add(row.boxes);
            summary.total_picking_units = summary.total_picking_units.saturating_add(row.picking_units);
        }
        self.analysis.results.push(row);
    }

    pub fn record_unmatched(&mut self, row: UnmatchedRow) {
        self.analysis.unmatched.push(row);
    }

    pub fn record_learned(&mut self, entry: ReferenceEntry) {
        self.analysis.learned.push(entry);
    }

    pub fn finish(self) -> Analysis {
        self.analysis
    }

    // Los técnicos se procesan en orden, así que el actual suele ser el último
    fn summary_mut(&mut self, technician: &str) -> Option<&mut TechnicianSummary> {
        self.analysis
            .summaries
            .iter_mut()
            .rev()
            .find(|s| s.technician_name == technician)
    }
}
