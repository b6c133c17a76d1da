//! Presentación del informe en la terminal

use cajas_picking_common::report::{ChartSlice, Report, ReportStatus, TechnicianPanel};
use std::io::{self, Write};

const BAR_WIDTH: usize = 30;

pub fn render_report<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    match report.status {
        ReportStatus::Completed => {
            writeln!(out, "✔ {}\n", report.message)?;
            render_table(report, out)?;
            for panel in &report.panels {
                render_panel(panel, out)?;
            }
        }
        ReportStatus::NoData => {
            writeln!(out, "⚠ {}", report.message)?;
        }
    }

    if let Some(warning) = &report.unmatched_warning {
        writeln!(out, "\n⚠ {}", warning)?;
    }

    for note in &report.notes {
        writeln!(out, "ℹ {}", note)?;
    }

    Ok(())
}

fn render_table<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    let mut widths: Vec<usize> = report.headers.iter().map(|h| h.chars().count()).collect();
    for row in &report.table {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (cell, &width))| {
                // texto a la izquierda, números a la derecha
                if i < 2 {
                    format!("{:<width$}", cell, width = width)
                } else {
                    format!("{:>width$}", cell, width = width)
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    };

    writeln!(out, "{}", line(report.headers.to_vec()))?;
    writeln!(out, "{}", widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("  "))?;
    for row in &report.table {
        writeln!(out, "{}", line(row.iter().map(String::as_str).collect()))?;
    }
    Ok(())
}

fn render_panel<W: Write>(panel: &TechnicianPanel, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n---\n### {}", panel.technician_name)?;

    let label_width = panel.metrics.iter().map(|m| m.label.chars().count()).max().unwrap_or(0);
    for metric in &panel.metrics {
        writeln!(out, "  {:<width$}  {}", metric.label, metric.value, width = label_width)?;
    }

    writeln!(out)?;
    for slice in &panel.chart {
        writeln!(out, "  {}", chart_line(slice))?;
    }
    Ok(())
}

fn chart_line(slice: &ChartSlice) -> String {
    match slice.percent {
        Some(percent) => {
            let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
            format!(
                "{:<16} {}{} {:.1}%",
                slice.label,
                "█".repeat(filled),
                "░".repeat(BAR_WIDTH.saturating_sub(filled)),
                percent
            )
        }
        None => format!("{:<16} (sin datos)", slice.label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cajas_picking_common::{build_report, Analysis, ResultRow, TechnicianSummary};

    fn render(analysis: &Analysis) -> String {
        let mut out = Vec::new();
        render_report(&build_report(analysis), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_completed() {
        let analysis = Analysis {
            results: vec![ResultRow::split("TÉCNICO A", "X1", 10, 5)],
            summaries: vec![TechnicianSummary {
                technician_name: "TÉCNICO A".into(),
                total_good_units: 10,
                total_defective_units: 1,
                total_boxes: 2,
                total_picking_units: 0,
            }],
            inactive: vec!["TÉCNICO B".into()],
            ..Default::default()
        };

        let text = render(&analysis);
        assert!(text.contains("Análisis completado"));
        assert!(text.contains("### TÉCNICO A"));
        assert!(text.contains("Unidades Defectuosas"));
        assert!(text.contains("100.0%"));
        assert!(text.contains("TÉCNICO B no tiene actividad registrada."));
    }

    #[test]
    fn test_render_no_data() {
        let text = render(&Analysis::default());
        assert!(text.contains("No se encontraron datos para analizar."));
        assert!(!text.contains("###"));
    }

    #[test]
    fn test_chart_line_without_data() {
        let slice = ChartSlice {
            label: "Picking",
            value: 0,
            percent: None,
        };
        assert!(chart_line(&slice).contains("sin datos"));
    }
}
