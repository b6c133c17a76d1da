//! Resolución interactiva de códigos sin unidades por caja
//!
//! Pide al usuario las unidades por caja de cada código descartado y las registra en la
//! tabla de referencia con la misma regla que el aprendizaje automático (la primera
//! cantidad registrada se mantiene).

use crate::error::{CajasError, Result};
use cajas_picking_common::{Analysis, ReferenceStore, ReferenceTable};
use dialoguer::Input;

/// Código pendiente con la cantidad que quedó fuera de los totales
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCode {
    pub code: String,
    pub quantity: u64,
    pub technicians: Vec<String>,
}

/// Respuesta del usuario para un código
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitsAnswer {
    Units(u64),
    Skip,
    Quit,
}

/// Agrupa las filas no conciliadas por código, en orden de aparición
///
/// Los códigos vacíos no se pueden registrar y se omiten.
pub fn pending_codes(analysis: &Analysis) -> Vec<PendingCode> {
    let mut pending: Vec<PendingCode> = Vec::new();
    for row in analysis.unmatched.iter().filter(|r| !r.code.is_empty()) {
        match pending.iter_mut().find(|p| p.code == row.code) {
            Some(p) => {
                p.quantity += row.quantity;
                if !p.technicians.contains(&row.technician_name) {
                    p.technicians.push(row.technician_name.clone());
                }
            }
            None => pending.push(PendingCode {
                code: row.code.clone(),
                quantity: row.quantity,
                technicians: vec![row.technician_name.clone()],
            }),
        }
    }
    pending
}

pub fn parse_units_answer(input: &str) -> std::result::Result<UnitsAnswer, String> {
    match input.trim() {
        "" | "s" | "S" => Ok(UnitsAnswer::Skip),
        "q" | "Q" => Ok(UnitsAnswer::Quit),
        other => match other.parse::<u64>() {
            Ok(0) => Err("las unidades por caja deben ser mayores que 0".into()),
            Ok(units) => Ok(UnitsAnswer::Units(units)),
            Err(_) => Err(format!("'{}' no es un número entero", other)),
        },
    }
}

/// Pregunta por cada código pendiente y registra las respuestas
///
/// Devuelve cuántos códigos se añadieron.
pub fn resolve_interactive<S>(
    analysis: &Analysis,
    table: &mut ReferenceTable,
    store: &mut S,
) -> Result<usize>
where
    S: ReferenceStore + ?Sized,
{
    let pending = pending_codes(analysis);
    if pending.is_empty() {
        println!("✔ Todos los códigos tienen unidades por caja");
        return Ok(0);
    }

    println!("📦 Códigos sin unidades por caja: {}", pending.len());
    println!("---");
    println!("Operación: [número] registrar  [Enter/s] saltar  [q] terminar");
    println!("---\n");

    let mut added = 0;
    for (i, item) in pending.iter().enumerate() {
        println!(
            "[{}/{}] {} ({} uds, {})",
            i + 1,
            pending.len(),
            item.code,
            item.quantity,
            item.technicians.join(", ")
        );

        match prompt_units()? {
            UnitsAnswer::Units(units) => {
                if table.upsert_if_absent(&mut *store, &item.code, units)? {
                    added += 1;
                    println!("  → {} uds/caja\n", units);
                } else {
                    println!("  → ya estaba registrado, se mantiene el valor existente\n");
                }
            }
            UnitsAnswer::Skip => println!("  → saltado\n"),
            UnitsAnswer::Quit => {
                println!("Terminando...");
                break;
            }
        }
    }

    Ok(added)
}

fn prompt_units() -> Result<UnitsAnswer> {
    loop {
        let input: String = Input::new()
            .with_prompt("Unidades/Caja")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| CajasError::Prompt(e.to_string()))?;

        match parse_units_answer(&input) {
            Ok(answer) => return Ok(answer),
            Err(msg) => println!("  ⚠ {}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cajas_picking_common::UnmatchedRow;

    fn unmatched(technician: &str, code: &str, quantity: u64) -> UnmatchedRow {
        UnmatchedRow {
            technician_name: technician.into(),
            code: code.into(),
            quantity,
            sheet_row: 22,
        }
    }

    #[test]
    fn test_pending_codes_grouped() {
        let analysis = Analysis {
            unmatched: vec![
                unmatched("TÉCNICO A", "X3", 6),
                unmatched("TÉCNICO B", "X3", 4),
                unmatched("TÉCNICO B", "", 9),
                unmatched("TÉCNICO A", "X7", 1),
            ],
            ..Default::default()
        };

        let pending = pending_codes(&analysis);
        assert_eq!(pending.len(), 2);
        assert_eq!(pending[0].code, "X3");
        assert_eq!(pending[0].quantity, 10);
        assert_eq!(pending[0].technicians, vec!["TÉCNICO A", "TÉCNICO B"]);
        assert_eq!(pending[1].code, "X7");
    }

    #[test]
    fn test_parse_units_answer() {
        assert_eq!(parse_units_answer(" 12 "), Ok(UnitsAnswer::Units(12)));
        assert_eq!(parse_units_answer(""), Ok(UnitsAnswer::Skip));
        assert_eq!(parse_units_answer("s"), Ok(UnitsAnswer::Skip));
        assert_eq!(parse_units_answer("q"), Ok(UnitsAnswer::Quit));
        assert!(parse_units_answer("0").is_err());
        assert!(parse_units_answer("doce").is_err());
    }
}
