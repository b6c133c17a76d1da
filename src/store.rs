//! Tabla de referencia persistida en Excel
//!
//! Formato: primera hoja, fila 1 de encabezados `Artículo | Unidades/Caja |
//! Articulo, Nombre`. Si el archivo no existe la tabla empieza vacía; si existe pero no
//! se puede leer, la ejecución se detiene en lugar de continuar con una tabla vacía.

use crate::sheet;
use cajas_picking_common::export::excel_core::generate_reference_buffer;
use cajas_picking_common::reference::{CODE_HEADER, LABEL_HEADER, UNITS_HEADER};
use cajas_picking_common::{Cell, Error, Grid, ReferenceEntry, ReferenceStore, ReferenceTable, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone)]
pub struct XlsxReferenceStore {
    path: PathBuf,
}

impl XlsxReferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReferenceStore for XlsxReferenceStore {
    fn load(&self) -> Result<ReferenceTable> {
        if !self.path.exists() {
            log::info!("{} no existe, se parte de una tabla vacía", self.path.display());
            return Ok(ReferenceTable::new());
        }

        let grid = sheet::read_first_sheet(&self.path)
            .map_err(|e| Error::ReferenceStore(e.to_string()))?;
        let table = parse_reference_grid(&grid)
            .map_err(|msg| Error::ReferenceStore(format!("{}: {}", self.path.display(), msg)))?;

        log::debug!("{} artículos cargados de {}", table.len(), self.path.display());
        Ok(table)
    }

    fn save(&mut self, table: &ReferenceTable) -> Result<()> {
        let buffer = generate_reference_buffer(table).map_err(Error::ReferenceStore)?;
        write_atomically(&self.path, |file| file.write_all(&buffer))?;
        Ok(())
    }
}

/// Escribe `dest` a través de un temporal en la misma carpeta y lo renombra encima
///
/// Si `write_fn` falla, o el proceso se interrumpe antes del renombrado, `dest` queda
/// como estaba.
pub fn write_atomically<F>(dest: &Path, write_fn: F) -> io::Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let dir = dest
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    write_fn(tmp.as_file_mut())?;
    tmp.as_file_mut().flush()?;
    tmp.as_file().sync_all()?;

    tmp.persist(dest).map_err(|e| e.error)?;
    Ok(())
}

/// Interpreta la hoja de referencia
///
/// Unidades no numéricas o vacías cuentan como 0; las negativas también.
pub fn parse_reference_grid(grid: &Grid) -> std::result::Result<ReferenceTable, String> {
    let column_of = |header: &str| {
        grid.row(0)
            .position(|cell| cell.as_text().map(str::trim) == Some(header))
    };

    let code_col = column_of(CODE_HEADER)
        .ok_or_else(|| format!("falta la columna '{}'", CODE_HEADER))?;
    let units_col = column_of(UNITS_HEADER)
        .ok_or_else(|| format!("falta la columna '{}'", UNITS_HEADER))?;
    let label_col = column_of(LABEL_HEADER);

    let entries = (1..grid.height())
        .filter(|&row| !(grid.get(row, code_col).is_empty() && grid.get(row, units_col).is_empty()))
        .map(|row| ReferenceEntry {
            code: grid.get(row, code_col).as_code(),
            units_per_box: grid
                .get(row, units_col)
                .as_count()
                .max(0) as u64,
            label: label_col
                .map(|col| display_text(grid.get(row, col)))
                .unwrap_or_default(),
        });

    Ok(ReferenceTable::from_entries(entries))
}

fn display_text(cell: &Cell) -> String {
    match cell {
        Cell::Text(s) => s.trim().to_string(),
        Cell::Empty => String::new(),
        // números y booleanos con el mismo formato que los códigos
        other => other.as_code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> Vec<Cell> {
        vec![LABEL_HEADER.into(), UNITS_HEADER.into(), CODE_HEADER.into()]
    }

    #[test]
    fn test_parse_reference_grid() {
        let grid = Grid::new(vec![
            header(),
            vec!["Tornillo".into(), Cell::Number(24.0), " t-1 ".into()],
            vec![Cell::Empty, "doce".into(), "T2".into()],
            vec![Cell::Empty, Cell::Empty, Cell::Empty],
            vec![Cell::Empty, Cell::Number(-4.0), Cell::Number(77.0)],
        ]);

        let table = parse_reference_grid(&grid).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("T-1").unwrap().label, "Tornillo");
        assert_eq!(table.units_for("T-1"), Some(24));
        assert_eq!(table.units_for("T2"), Some(0));
        assert_eq!(table.units_for("77"), Some(0));
    }

    #[test]
    fn test_columns_found_in_any_order() {
        let grid = Grid::new(vec![
            vec![CODE_HEADER.into(), UNITS_HEADER.into()],
            vec!["A1".into(), Cell::Number(6.0)],
        ]);
        let table = parse_reference_grid(&grid).unwrap();
        assert_eq!(table.units_for("A1"), Some(6));
        assert_eq!(table.get("A1").unwrap().label, "");
    }

    #[test]
    fn test_failed_write_keeps_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("referencia.xlsx");
        std::fs::write(&path, b"contenido anterior").unwrap();

        let result = write_atomically(&path, |file| {
            file.write_all(b"PK\x03\x04 a medias")?;
            Err(io::Error::new(io::ErrorKind::Other, "interrumpido"))
        });

        assert!(result.is_err());
        assert_eq!(std::fs::read(&path).unwrap(), b"contenido anterior");
        // el temporal no queda en la carpeta
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_replaces_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nueva").join("referencia.xlsx");

        write_atomically(&path, |file| file.write_all(b"uno dos tres")).unwrap();
        write_atomically(&path, |file| file.write_all(b"uno")).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"uno");
    }

    #[test]
    fn test_missing_required_column_is_an_error() {
        let grid = Grid::new(vec![vec![LABEL_HEADER.into(), CODE_HEADER.into()]]);
        let err = parse_reference_grid(&grid).unwrap_err();
        assert!(err.contains(UNITS_HEADER));
    }
}
