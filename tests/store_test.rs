//! Persistencia de la tabla de referencia en Excel

use cajas_picking::store::XlsxReferenceStore;
use cajas_picking_common::reference::{CODE_HEADER, LABEL_HEADER, UNITS_HEADER};
use cajas_picking_common::{Error, ReferenceStore, ReferenceTable};
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tempfile::tempdir;

/// Escribe una tabla con las columnas en orden distinto al que usa la aplicación
fn write_reference(path: &Path, rows: &[(&str, f64, &str)]) {
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    ws.write_string(0, 0, CODE_HEADER).unwrap();
    ws.write_string(0, 1, LABEL_HEADER).unwrap();
    ws.write_string(0, 2, UNITS_HEADER).unwrap();
    for (i, (code, units, label)) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        ws.write_string(r, 0, *code).unwrap();
        ws.write_string(r, 1, *label).unwrap();
        ws.write_number(r, 2, *units).unwrap();
    }
    workbook.save(path).unwrap();
}

#[test]
fn test_missing_file_loads_empty_table() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no_existe.xlsx");

    let table = XlsxReferenceStore::new(&path).load().unwrap();
    assert!(table.is_empty());
    assert!(!path.exists());
}

#[test]
fn test_each_new_entry_is_saved_immediately() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("datos").join("referencia.xlsx");
    let mut store = XlsxReferenceStore::new(&path);
    let mut table = ReferenceTable::new();

    assert!(table.upsert_if_absent(&mut store, "a-1", 12).unwrap());
    let on_disk = XlsxReferenceStore::new(&path).load().unwrap();
    assert_eq!(on_disk.units_for("A-1"), Some(12));

    assert!(table.upsert_if_absent(&mut store, "B-2", 4).unwrap());
    // la primera cantidad se mantiene
    assert!(!table.upsert_if_absent(&mut store, "A-1", 99).unwrap());

    let on_disk = XlsxReferenceStore::new(&path).load().unwrap();
    assert_eq!(on_disk.len(), 2);
    assert_eq!(on_disk.units_for("A-1"), Some(12));
    assert_eq!(on_disk.units_for("B-2"), Some(4));
}

#[test]
fn test_existing_rows_survive_a_save() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("referencia.xlsx");
    write_reference(
        &path,
        &[("T-1", 24.0, "Tornillo"), ("t-2 ", 10.0, "Tuerca"), ("T-1", 50.0, "Tornillo bis")],
    );

    let mut store = XlsxReferenceStore::new(&path);
    let mut table = store.load().unwrap();
    assert_eq!(table.units_for("T-1"), Some(24));
    assert_eq!(table.units_for("T-2"), Some(10));

    table.upsert_if_absent(&mut store, "N-9", 6).unwrap();

    let reloaded = XlsxReferenceStore::new(&path).load().unwrap();
    let rows: Vec<(&str, u64, &str)> = reloaded
        .entries()
        .iter()
        .map(|e| (e.code.as_str(), e.units_per_box, e.label.as_str()))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("T-1", 24, "Tornillo"),
            ("T-2", 10, "Tuerca"),
            ("T-1", 50, "Tornillo bis"),
            ("N-9", 6, ""),
        ]
    );
    assert_eq!(reloaded.units_for("T-1"), Some(24));
}

#[test]
fn test_file_without_required_columns_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("referencia.xlsx");

    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    ws.write_string(0, 0, "Código").unwrap();
    ws.write_string(0, 1, UNITS_HEADER).unwrap();
    ws.write_string(1, 0, "A-1").unwrap();
    ws.write_number(1, 1, 3.0).unwrap();
    workbook.save(&path).unwrap();

    let err = XlsxReferenceStore::new(&path).load().unwrap_err();
    match err {
        Error::ReferenceStore(msg) => assert!(msg.contains(CODE_HEADER)),
        other => panic!("error inesperado: {:?}", other),
    }
}
