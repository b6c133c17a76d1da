//! Cajas vs Picking: biblioteca común
//!
//! Núcleo sin E/S de la conciliación: detección de técnicos, resolución de unidades por
//! caja contra la tabla de referencia y totales por técnico.

pub mod error;
pub mod export;
pub mod grid;
pub mod header;
pub mod layout;
pub mod reconcile;
pub mod reference;
pub mod report;
pub mod summary;
pub mod types;

pub use error::{Error, Result};
pub use grid::{normalize_code, Cell, Grid};
pub use header::scan_technician_columns;
pub use layout::SheetLayout;
pub use reconcile::{analyze, inspection_rows, Reconciler};
pub use reference::{MemoryStore, ReferenceStore, ReferenceTable};
pub use report::{build_report, Report, ReportStatus};
pub use summary::Aggregator;
pub use types::{
    Analysis, InspectionRow, ReferenceEntry, ResultRow, TechnicianColumn, TechnicianSummary,
    UnmatchedRow,
};
