//! Detección de columnas de técnicos
//!
//! Recorre la fila de encabezados y toma como columna de técnico cada celda de texto que,
//! recortada y en mayúsculas, empieza por el prefijo configurado. La columna inmediatamente
//! a la derecha se interpreta como la de defectuosos de ese técnico.

use crate::grid::Grid;
use crate::layout::SheetLayout;
use crate::types::TechnicianColumn;

/// Columnas de técnicos de izquierda a derecha
pub fn scan_technician_columns(grid: &Grid, layout: &SheetLayout) -> Vec<TechnicianColumn> {
    let prefix = layout.normalized_prefix();
    let width = grid.width();

    grid.row(layout.header_row)
        .enumerate()
        .filter_map(|(col, cell)| {
            let header = cell.as_text()?.trim();
            if !header.to_uppercase().starts_with(&prefix) {
                return None;
            }
            let defective = col + 1;
            Some(TechnicianColumn {
                technician_name: header.to_string(),
                quantity_column_index: col,
                defective_column_index: (defective < width).then_some(defective),
            })
        })
        .collect()
}
