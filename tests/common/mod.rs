//! Libros de inspección sintéticos con la disposición real de la hoja LASER
#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Columna del primer técnico; las anteriores son N°, Código, Descripción y Uds/Caja
pub const FIRST_TECHNICIAN_COLUMN: u16 = 4;

pub struct Technician<'a> {
    pub name: &'a str,
    pub quantities: Vec<f64>,
    pub defective: Vec<f64>,
}

pub struct Item<'a> {
    pub code: &'a str,
    pub units_per_box: Option<f64>,
}

pub fn item(code: &str, units_per_box: Option<f64>) -> Item<'_> {
    Item { code, units_per_box }
}

pub fn technician<'a>(name: &'a str, quantities: &[f64], defective: &[f64]) -> Technician<'a> {
    Technician {
        name,
        quantities: quantities.to_vec(),
        defective: defective.to_vec(),
    }
}

/// Escribe un libro con la hoja `sheet`: técnicos en la fila 16, datos desde la fila 21
pub fn write_inspection(path: &Path, sheet: &str, technicians: &[Technician], items: &[Item]) {
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    ws.set_name(sheet).unwrap();

    ws.write_string(0, 0, "INFORME DE INSPECCIÓN").unwrap();

    let mut col = FIRST_TECHNICIAN_COLUMN;
    for t in technicians {
        ws.write_string(15, col, t.name).unwrap();
        ws.write_string(15, col + 1, "Defectuosos").unwrap();
        col += 2;
    }

    for (c, header) in ["N°", "Código", "Descripción", "Uds/Caja"].iter().enumerate() {
        ws.write_string(20, c as u16, *header).unwrap();
    }

    for (i, it) in items.iter().enumerate() {
        let row = 21 + i as u32;
        ws.write_number(row, 0, (i + 1) as f64).unwrap();
        ws.write_string(row, 1, it.code).unwrap();
        ws.write_string(row, 2, "artículo de prueba").unwrap();
        if let Some(units) = it.units_per_box {
            ws.write_number(row, 3, units).unwrap();
        }

        let mut col = FIRST_TECHNICIAN_COLUMN;
        for t in technicians {
            if let Some(q) = t.quantities.get(i) {
                ws.write_number(row, col, *q).unwrap();
            }
            if let Some(d) = t.defective.get(i) {
                ws.write_number(row, col + 1, *d).unwrap();
            }
            col += 2;
        }
    }

    workbook.save(path).unwrap();
}
