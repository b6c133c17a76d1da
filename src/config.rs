use crate::error::{CajasError, Result};
use cajas_picking_common::SheetLayout;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Archivo de la tabla de referencia por defecto (directorio actual)
pub const DEFAULT_REFERENCE_FILE: &str = "Articulos_Filtrados_Completos.xlsx";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub reference_path: PathBuf,
    /// Carpeta de salida del Excel de resultados; `None` = directorio actual
    pub output_dir: Option<PathBuf>,
    pub layout: SheetLayout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reference_path: PathBuf::from(DEFAULT_REFERENCE_FILE),
            output_dir: None,
            layout: SheetLayout::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            config.layout.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CajasError::Config("no se encontró el directorio personal".into()))?;
        Ok(home.join(".config").join("cajas-picking").join("config.json"))
    }

    /// Layout efectivo con la hoja indicada en la línea de comandos
    pub fn layout_for(&self, sheet: Option<&str>) -> SheetLayout {
        let mut layout = self.layout.clone();
        if let Some(sheet) = sheet {
            layout.sheet_name = sheet.to_string();
        }
        layout
    }

    pub fn reference_path_or(&self, overridden: Option<PathBuf>) -> PathBuf {
        overridden.unwrap_or_else(|| self.reference_path.clone())
    }
}
