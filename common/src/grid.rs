//! Modelo de celdas y cuadrícula de una hoja
//!
//! Los lectores de hojas de cálculo convierten su tipo de celda nativo en [`Cell`]
//! para que el núcleo no dependa de ningún formato de archivo concreto.

use serde::{Deserialize, Serialize};

/// Valor de una celda
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Cell {
    /// Valor numérico de la celda; `None` si está vacía o no es numérica
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            Cell::Empty => return None,
            Cell::Number(n) => *n,
            Cell::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Cell::Text(s) => parse_number(s)?,
        };
        n.is_finite().then_some(n)
    }

    /// Cantidad entera (truncada); vacío o no numérico cuenta como 0
    pub fn as_count(&self) -> i64 {
        self.as_number().map(|n| n.trunc() as i64).unwrap_or(0)
    }

    /// Código de artículo normalizado (sin espacios, en mayúsculas)
    pub fn as_code(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => normalize_code(s),
            Cell::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            Cell::Bool(b) => b.to_string().to_uppercase(),
        }
    }

    /// Texto de la celda si es una cadena
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Cell::Number(n as f64)
    }
}

/// Normaliza un código: recorta espacios y pasa a mayúsculas
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Interpreta texto numérico; acepta coma decimal cuando no hay punto
fn parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(n) = trimmed.parse::<f64>() {
        return Some(n);
    }
    if !trimmed.contains('.') && trimmed.matches(',').count() == 1 {
        return trimmed.replace(',', ".").parse::<f64>().ok();
    }
    None
}

/// Cuadrícula densa de celdas en coordenadas absolutas de la hoja
///
/// La fila 0 es siempre la primera fila de la hoja, aunque esté vacía.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
    width: usize,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        Self { rows, width }
    }

    /// Construye la cuadrícula a partir de celdas sueltas `(fila, columna, valor)`
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, Cell)>,
    {
        let mut rows: Vec<Vec<Cell>> = Vec::new();
        for (row, col, cell) in cells {
            if cell == Cell::Empty {
                continue;
            }
            if rows.len() <= row {
                rows.resize_with(row + 1, Vec::new);
            }
            let target = &mut rows[row];
            if target.len() <= col {
                target.resize(col + 1, Cell::Empty);
            }
            target[col] = cell;
        }
        Self::new(rows)
    }

    /// Celda en `(fila, columna)`; fuera de rango devuelve `Cell::Empty`
    pub fn get(&self, row: usize, col: usize) -> &Cell {
        static EMPTY: Cell = Cell::Empty;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Celdas de una fila completa, rellenadas hasta el ancho de la cuadrícula
    pub fn row(&self, row: usize) -> impl Iterator<Item = &Cell> + '_ {
        (0..self.width).map(move |col| self.get(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_number_coercion() {
        assert_eq!(Cell::Number(4.0).as_number(), Some(4.0));
        assert_eq!(Cell::from(" 12 ").as_number(), Some(12.0));
        assert_eq!(Cell::from("2,5").as_number(), Some(2.5));
        assert_eq!(Cell::from("abc").as_number(), None);
        assert_eq!(Cell::from("").as_number(), None);
        assert_eq!(Cell::Empty.as_number(), None);
        assert_eq!(Cell::Bool(true).as_number(), Some(1.0));
        assert_eq!(Cell::Number(f64::NAN).as_number(), None);
    }

    #[test]
    fn test_as_count_truncates() {
        assert_eq!(Cell::Number(7.9).as_count(), 7);
        assert_eq!(Cell::Number(-3.5).as_count(), -3);
        assert_eq!(Cell::from("n/a").as_count(), 0);
        assert_eq!(Cell::Empty.as_count(), 0);
    }

    #[test]
    fn test_as_code_normalizes() {
        assert_eq!(Cell::from("  ab-12 ").as_code(), "AB-12");
        assert_eq!(Cell::Number(1234.0).as_code(), "1234");
        assert_eq!(Cell::Number(12.5).as_code(), "12.5");
        assert_eq!(Cell::Empty.as_code(), "");
    }

    #[test]
    fn test_grid_from_cells_keeps_absolute_positions() {
        let grid = Grid::from_cells(vec![
            (3, 2, Cell::from("x")),
            (5, 0, Cell::Number(1.0)),
            (4, 7, Cell::Empty),
        ]);
        assert_eq!(grid.height(), 6);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.get(3, 2), &Cell::from("x"));
        assert_eq!(grid.get(0, 0), &Cell::Empty);
        assert_eq!(grid.get(100, 100), &Cell::Empty);
        assert_eq!(grid.row(5).count(), 3);
    }
}
