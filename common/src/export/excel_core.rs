//! Generación de Excel (biblioteca común)
//!
//! Escribe en memoria el libro de resultados descargable y el archivo de la tabla de
//! referencia. Quien llama decide dónde guardar los bytes.

use crate::reference::{ReferenceTable, CODE_HEADER, LABEL_HEADER, UNITS_HEADER};
use crate::report::RESULT_HEADERS;
use crate::types::ResultRow;
use rust_xlsxwriter::*;

/// Nombre de archivo por defecto del Excel de resultados
pub const RESULTS_FILE_NAME: &str = "analisis_tecnico_resultado.xlsx";

/// Hoja del Excel de resultados
pub const RESULTS_SHEET: &str = "Resultados";

/// Hoja del archivo de referencia
pub const REFERENCE_SHEET: &str = "Sheet1";

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA))
}

/// Genera el Excel de resultados: una fila por [`ResultRow`]
pub fn generate_results_buffer(rows: &[ResultRow]) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();
    let header_format = header_format();

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(RESULTS_SHEET)
        .map_err(|e| format!("error al nombrar la hoja: {}", e))?;

    for (col, header) in RESULT_HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| format!("error al escribir encabezado: {}", e))?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        worksheet
            .write_string(r, 0, &row.technician_name)
            .and_then(|ws| ws.write_string(r, 1, &row.code))
            .and_then(|ws| ws.write_number(r, 2, row.quantity_reviewed as f64))
            .and_then(|ws| ws.write_number(r, 3, row.units_per_box as f64))
            .and_then(|ws| ws.write_number(r, 4, row.boxes as f64))
            .and_then(|ws| ws.write_number(r, 5, row.picking_units as f64))
            .map_err(|e| format!("error al escribir la fila {}: {}", r + 1, e))?;
    }

    worksheet
        .set_column_width(0, 24.0)
        .and_then(|ws| ws.set_column_width(1, 18.0))
        .map_err(|e| format!("error al ajustar columnas: {}", e))?;
    worksheet
        .set_freeze_panes(1, 0)
        .map_err(|e| format!("error al fijar encabezado: {}", e))?;

    workbook
        .save_to_buffer()
        .map_err(|e| format!("error al guardar el Excel: {}", e))
}

/// Genera el archivo de la tabla de referencia
///
/// Columnas: `Artículo | Unidades/Caja | Articulo, Nombre`, en el orden de la tabla.
pub fn generate_reference_buffer(table: &ReferenceTable) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();
    let header_format = header_format();

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(REFERENCE_SHEET)
        .map_err(|e| format!("error al nombrar la hoja: {}", e))?;

    for (col, header) in [LABEL_HEADER, UNITS_HEADER, CODE_HEADER].iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| format!("error al escribir encabezado: {}", e))?;
    }

    for (i, entry) in table.entries().iter().enumerate() {
        let r = i as u32 + 1;
        worksheet
            .write_string(r, 0, &entry.label)
            .and_then(|ws| ws.write_number(r, 1, entry.units_per_box as f64))
            .and_then(|ws| ws.write_string(r, 2, &entry.code))
            .map_err(|e| format!("error al escribir la fila {}: {}", r + 1, e))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| format!("error al guardar el Excel: {}", e))
}
