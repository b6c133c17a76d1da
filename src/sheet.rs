//! Lectura de hojas de cálculo
//!
//! Convierte una hoja (xlsx/xls/ods) en una [`Grid`] con coordenadas absolutas, sin
//! aplicar ninguna fila de encabezado.

use crate::error::{CajasError, Result};
use cajas_picking_common::{Cell, Grid};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;

/// Lee la hoja `sheet` de `path`
pub fn read_grid(path: &Path, sheet: &str) -> Result<Grid> {
    let mut workbook = open(path)?;

    if !workbook.sheet_names().iter().any(|name| name == sheet) {
        return Err(CajasError::SheetNotFound {
            sheet: sheet.to_string(),
            file: path.display().to_string(),
        });
    }

    let range = workbook
        .worksheet_range(sheet)
        .map_err(|e| CajasError::ExcelRead(format!("{}: {}", sheet, e)))?;
    Ok(grid_from_range(&range))
}

/// Lee la primera hoja de `path`
pub fn read_first_sheet(path: &Path) -> Result<Grid> {
    let mut workbook = open(path)?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| CajasError::ExcelRead(format!("{} no tiene hojas", path.display())))?;

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| CajasError::ExcelRead(format!("{}: {}", sheet, e)))?;
    Ok(grid_from_range(&range))
}

fn open(path: &Path) -> Result<calamine::Sheets<std::io::BufReader<std::fs::File>>> {
    if !path.exists() {
        return Err(CajasError::FileNotFound(path.display().to_string()));
    }
    open_workbook_auto(path)
        .map_err(|e| CajasError::ExcelRead(format!("{}: {}", path.display(), e)))
}

/// calamine recorta las filas y columnas vacías iniciales; aquí se recuperan
/// las posiciones absolutas
pub fn grid_from_range(range: &Range<Data>) -> Grid {
    let (start_row, start_col) = range.start().unwrap_or((0, 0));
    Grid::from_cells(range.cells().map(|(row, col, data)| {
        (
            start_row as usize + row,
            start_col as usize + col,
            to_cell(data),
        )
    }))
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}
