//! Tabla de referencia de unidades por caja
//!
//! La tabla es el único estado duradero: se carga al comenzar, se modifica en memoria
//! durante la ejecución y cada entrada nueva se persiste en el momento, de modo que una
//! ejecución interrumpida conserva lo ya conciliado.

use crate::error::Result;
use crate::grid::normalize_code;
use crate::types::ReferenceEntry;
use std::collections::HashMap;

/// Columna con la descripción del artículo
pub const LABEL_HEADER: &str = "Artículo";
/// Columna con las unidades por caja
pub const UNITS_HEADER: &str = "Unidades/Caja";
/// Columna con el código normalizado (clave)
pub const CODE_HEADER: &str = "Articulo, Nombre";

/// Tabla ordenada de entradas con índice por código
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceTable {
    entries: Vec<ReferenceEntry>,
    index: HashMap<String, usize>,
}

impl ReferenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construye la tabla normalizando códigos
    ///
    /// Si un código aparece varias veces se conservan todas las filas, pero la búsqueda
    /// usa siempre la primera.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = ReferenceEntry>,
    {
        let mut table = Self::default();
        for mut entry in entries {
            entry.code = normalize_code(&entry.code);
            if table.index.contains_key(&entry.code) {
                log::warn!("código duplicado en la tabla de referencia: {}", entry.code);
            } else {
                table.index.insert(entry.code.clone(), table.entries.len());
            }
            table.entries.push(entry);
        }
        table
    }

    pub fn get(&self, code: &str) -> Option<&ReferenceEntry> {
        self.index.get(code).map(|&i| &self.entries[i])
    }

    /// Unidades por caja registradas para `code`
    pub fn units_for(&self, code: &str) -> Option<u64> {
        self.get(code).map(|e| e.units_per_box)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Añade `code` si no existe y persiste la tabla completa de inmediato
    ///
    /// Devuelve `true` si se añadió. La primera cantidad vista para un código se mantiene
    /// mientras exista la tabla. Los códigos vacíos nunca se registran.
    pub fn upsert_if_absent<S>(&mut self, store: &mut S, code: &str, units_per_box: u64) -> Result<bool>
    where
        S: ReferenceStore + ?Sized,
    {
        let code = normalize_code(code);
        if code.is_empty() || self.contains(&code) {
            return Ok(false);
        }

        self.index.insert(code.clone(), self.entries.len());
        self.entries.push(ReferenceEntry::new(code.clone(), units_per_box));
        store.save(self)?;

        log::info!("nuevo artículo en la tabla de referencia: {} → {} uds/caja", code, units_per_box);
        Ok(true)
    }
}

/// Almacenamiento persistente de la tabla de referencia
pub trait ReferenceStore {
    /// Lee la tabla persistida; si no existe devuelve una tabla vacía
    fn load(&self) -> Result<ReferenceTable>;

    /// Sobrescribe el contenido persistido con `table`
    fn save(&mut self, table: &ReferenceTable) -> Result<()>;
}

/// Almacén en memoria, usado en pruebas
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: Vec<ReferenceEntry>,
    save_count: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<ReferenceEntry>) -> Self {
        Self {
            saved: entries,
            save_count: 0,
        }
    }

    /// Contenido persistido tras el último `save`
    pub fn saved(&self) -> &[ReferenceEntry] {
        &self.saved
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl ReferenceStore for MemoryStore {
    fn load(&self) -> Result<ReferenceTable> {
        Ok(ReferenceTable::from_entries(self.saved.clone()))
    }

    fn save(&mut self, table: &ReferenceTable) -> Result<()> {
        self.saved = table.entries().to_vec();
        self.save_count += 1;
        Ok(())
    }
}
