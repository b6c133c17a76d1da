//! Motor de conciliación
//!
//! ## Flujo por columna de técnico
//! 1. Se leen las cantidades de la columna (no numérico = 0)
//! 2. Si la suma es exactamente 0 el técnico queda como inactivo
//! 3. Para cada fila con cantidad > 0 se resuelven las unidades por caja:
//!    declaradas en la hoja (y se aprenden si el código es nuevo) o, si faltan,
//!    las de la tabla de referencia. Un valor declarado distinto de 0 nunca cae a la
//!    tabla: si se trunca a 0 o es negativo, la fila no tiene unidades
//! 4. Las filas sin unidades resolubles se descartan de los totales y se
//!    registran como no conciliadas

use crate::error::Result;
use crate::grid::Grid;
use crate::header::scan_technician_columns;
use crate::layout::SheetLayout;
use crate::reference::{ReferenceStore, ReferenceTable};
use crate::summary::Aggregator;
use crate::types::{Analysis, InspectionRow, ReferenceEntry, ResultRow, TechnicianColumn, UnmatchedRow};

/// Analiza una hoja completa
///
/// Detecta las columnas de técnicos, concilia cada una contra `table` y devuelve las
/// filas de resultado con sus totales. Cada código nuevo con unidades declaradas se
/// añade a `table` y se persiste en `store` en el momento.
pub fn analyze<S>(
    grid: &Grid,
    layout: &SheetLayout,
    table: &mut ReferenceTable,
    store: &mut S,
) -> Result<Analysis>
where
    S: ReferenceStore + ?Sized,
{
    let columns = scan_technician_columns(grid, layout);
    if columns.is_empty() {
        log::warn!(
            "no se encontraron columnas con el prefijo {:?} en la fila {}",
            layout.technician_prefix,
            layout.header_row + 1
        );
        return Ok(Analysis::default());
    }
    log::debug!("{} columnas de técnico detectadas", columns.len());

    let mut reconciler = Reconciler::new(layout, table, store);
    for column in &columns {
        reconciler.reconcile_column(grid, column)?;
    }
    Ok(reconciler.finish())
}

/// Filas de artículos vistas desde la columna de un técnico
pub fn inspection_rows(grid: &Grid, layout: &SheetLayout, column: &TechnicianColumn) -> Vec<InspectionRow> {
    (layout.first_data_row()..grid.height())
        .map(|row| {
            let declared = grid
                .get(row, layout.units_column)
                .as_number()
                .filter(|&n| n != 0.0)
                .map(|n| n.trunc() as i64);

            InspectionRow {
                sheet_row: row + 1,
                code: grid.get(row, layout.code_column).as_code(),
                raw_quantity: grid.get(row, column.quantity_column_index).as_count(),
                raw_defective_quantity: column
                    .defective_column_index
                    .map(|col| grid.get(row, col).as_count())
                    .unwrap_or(0),
                declared_units_per_box: declared,
            }
        })
        .collect()
}

/// Concilia columnas de técnicos contra la tabla de referencia
pub struct Reconciler<'a, S: ReferenceStore + ?Sized> {
    layout: &'a SheetLayout,
    table: &'a mut ReferenceTable,
    store: &'a mut S,
    aggregator: Aggregator,
}

impl<'a, S: ReferenceStore + ?Sized> Reconciler<'a, S> {
    pub fn new(layout: &'a SheetLayout, table: &'a mut ReferenceTable, store: &'a mut S) -> Self {
        Self {
            layout,
            table,
            store,
            aggregator: Aggregator::new(),
        }
    }

    pub fn reconcile_column(&mut self, grid: &Grid, column: &TechnicianColumn) -> Result<()> {
        let technician = column.technician_name.as_str();
        let rows = inspection_rows(grid, self.layout, column);

        let total = rows
            .iter()
            .fold(0i64, |acc, r| acc.saturating_add(r.raw_quantity));
        if total == 0 {
            log::debug!("{}: sin actividad", technician);
            self.aggregator.mark_inactive(technician);
            return Ok(());
        }

        self.aggregator.begin_technician(technician);

        for row in rows.iter().filter(|r| r.raw_quantity > 0) {
            let quantity = row.raw_quantity as u64;

            let Some(units) = self.resolve_units(row)? else {
                log::debug!(
                    "{}: fila {} código {:?} sin unidades por caja, se descarta",
                    technician,
                    row.sheet_row,
                    row.code
                );
                self.aggregator.record_unmatched(UnmatchedRow {
                    technician_name: technician.to_string(),
                    code: row.code.clone(),
                    quantity,
                    sheet_row: row.sheet_row,
                });
                continue;
            };

            let defective = row.raw_defective_quantity.max(0) as u64;
            self.aggregator
                .record(ResultRow::split(technician, row.code.as_str(), quantity, units), defective);
        }

        Ok(())
    }

    /// Unidades por caja de una fila: declaradas o, en su defecto, de referencia
    ///
    /// Un valor declarado que no llega a 1 descarta la fila sin consultar la tabla.
    fn resolve_units(&mut self, row: &InspectionRow) -> Result<Option<u64>> {
        if let Some(declared) = row.declared_units_per_box {
            if declared <= 0 {
                return Ok(None);
            }
            let declared = declared as u64;
            if self.table.upsert_if_absent(&mut *self.store, &row.code, declared)? {
                self.aggregator
                    .record_learned(ReferenceEntry::new(row.code.clone(), declared));
            }
            return Ok(Some(declared));
        }

        Ok(self.table.units_for(&row.code).filter(|&units| units > 0))
    }

    pub fn finish(self) -> Analysis {
        let analysis = self.aggregator.finish();
        if !analysis.unmatched.is_empty() {
            log::warn!(
                "{} filas sin unidades por caja ({} códigos)",
                analysis.unmatched.len(),
                analysis.unmatched_codes().len()
            );
        }
        analysis
    }
}
