//! Exportación de resultados (Excel descargable + volcado JSON)

use crate::error::{CajasError, Result};
use cajas_picking_common::export::excel_core::{generate_results_buffer, RESULTS_FILE_NAME};
use cajas_picking_common::{Analysis, ResultRow};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Ruta final del Excel: si `output` es una carpeta (o no tiene extensión) se usa el
/// nombre por defecto dentro de ella
pub fn results_path(output: &Path) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(RESULTS_FILE_NAME)
    } else {
        output.to_path_buf()
    }
}

/// Motivo por el que no se escribe el Excel de resultados, si lo hay
pub fn skip_reason(analysis: &Analysis, no_export: bool) -> Option<&'static str> {
    if no_export {
        Some("--no-export")
    } else if !analysis.has_results() {
        Some("sin resultados")
    } else {
        None
    }
}

/// Escribe el Excel de resultados y devuelve la ruta usada
pub fn export_results(rows: &[ResultRow], output: &Path) -> Result<PathBuf> {
    let path = results_path(output);
    let buffer = generate_results_buffer(rows).map_err(CajasError::ExcelGeneration)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, buffer)?;
    Ok(path)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonExport<'a> {
    generated_at: String,
    source: String,
    #[serde(flatten)]
    analysis: &'a Analysis,
}

/// Vuelca el análisis completo a JSON
pub fn export_json(analysis: &Analysis, source: &Path, output: &Path) -> Result<()> {
    let payload = JsonExport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        source: source.display().to_string(),
        analysis,
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(output, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_reason() {
        let empty = Analysis::default();
        let with_rows = Analysis {
            results: vec![ResultRow::split("TÉCNICO A", "X1", 10, 5)],
            ..Default::default()
        };

        assert_eq!(skip_reason(&with_rows, false), None);
        assert_eq!(skip_reason(&with_rows, true), Some("--no-export"));
        assert_eq!(skip_reason(&empty, false), Some("sin resultados"));
        assert_eq!(skip_reason(&empty, true), Some("--no-export"));
    }

    #[test]
    fn test_results_path_for_file_and_dir() {
        assert_eq!(
            results_path(Path::new("salida/informe.xlsx")),
            PathBuf::from("salida/informe.xlsx")
        );
        assert_eq!(
            results_path(Path::new("salida")),
            PathBuf::from("salida").join(RESULTS_FILE_NAME)
        );
    }
}
