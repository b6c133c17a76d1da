//! Encadena lectura de la hoja, carga de la referencia y conciliación

use crate::error::Result;
use crate::sheet;
use cajas_picking_common::{analyze, Analysis, ReferenceStore, ReferenceTable, SheetLayout};
use std::path::Path;

/// Resultado de una ejecución con la tabla de referencia ya actualizada
pub struct Run {
    pub analysis: Analysis,
    pub table: ReferenceTable,
}

/// Analiza el Excel de inspección `input` con la tabla de `store`
///
/// Un error al cargar la tabla detiene la ejecución antes de leer la hoja.
pub fn run_analysis<S>(input: &Path, layout: &SheetLayout, store: &mut S) -> Result<Run>
where
    S: ReferenceStore + ?Sized,
{
    layout.validate()?;
    let mut table = store.load()?;
    let grid = sheet::read_grid(input, &layout.sheet_name)?;
    log::debug!(
        "hoja '{}': {} filas x {} columnas",
        layout.sheet_name,
        grid.height(),
        grid.width()
    );

    let analysis = analyze(&grid, layout, &mut table, store)?;
    Ok(Run { analysis, table })
}
