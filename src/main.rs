use cajas_picking::{cli, config, error, export, pipeline, render, resolve, store};
use cajas_picking_common::{build_report, ReferenceStore};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use store::XlsxReferenceStore;

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("✖ {}", e);
        std::process::exit(1);
    }
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { sheet, output, json, no_export } => {
            println!("📊 cajas-picking - Análisis técnico: Cajas vs Picking\n");

            let layout = config.layout_for(sheet.sheet.as_deref());
            let mut store = XlsxReferenceStore::new(config.reference_path_or(sheet.reference));

            println!("[1/3] Leyendo {} (hoja {})...", sheet.input.display(), layout.sheet_name);
            let run = pipeline::run_analysis(&sheet.input, &layout, &mut store)?;
            let analysis = run.analysis;
            if !analysis.learned.is_empty() {
                println!(
                    "✔ {} artículos nuevos en {}",
                    analysis.learned.len(),
                    store.path().display()
                );
            }

            println!("[2/3] Resultados\n");
            let report = build_report(&analysis);
            render::render_report(&report, &mut std::io::stdout().lock())?;

            if let Some(reason) = export::skip_reason(&analysis, no_export) {
                println!("\n[3/3] Exportación omitida: {}", reason);
            } else {
                println!("\n[3/3] Exportando...");
                let target = output
                    .or_else(|| config.output_dir.clone())
                    .unwrap_or_else(|| std::path::PathBuf::from("."));
                let path = export::export_results(&analysis.results, &target)?;
                println!("✔ Excel de resultados: {}", path.display());
            }
            if let Some(json_path) = json {
                export::export_json(&analysis, &sheet.input, &json_path)?;
                println!("✔ JSON: {}", json_path.display());
            }

            println!("\n✅ Completado");
        }

        Commands::Resolve { sheet } => {
            println!("📦 cajas-picking - Códigos sin unidades por caja\n");

            let layout = config.layout_for(sheet.sheet.as_deref());
            let mut store = XlsxReferenceStore::new(config.reference_path_or(sheet.reference));

            let run = pipeline::run_analysis(&sheet.input, &layout, &mut store)?;
            let mut table = run.table;
            let added = resolve::resolve_interactive(&run.analysis, &mut table, &mut store)?;

            if added > 0 {
                println!("✔ {} códigos registrados en {}\n", added, store.path().display());
                let rerun = pipeline::run_analysis(&sheet.input, &layout, &mut store)?;
                render::render_report(&build_report(&rerun.analysis), &mut std::io::stdout().lock())?;
            }
        }

        Commands::Reference { reference } => {
            let store = XlsxReferenceStore::new(config.reference_path_or(reference));
            let table = store.load()?;

            println!("Tabla de referencia: {}", store.path().display());
            println!("  Artículos: {}", table.len());
            for entry in table.entries() {
                if entry.label.is_empty() {
                    println!("  {:<20} {:>6}", entry.code, entry.units_per_box);
                } else {
                    println!("  {:<20} {:>6}  {}", entry.code, entry.units_per_box, entry.label);
                }
            }
        }

        Commands::Config { set_reference, set_sheet, set_output_dir, show } => {
            let mut config = config;
            let changed = set_reference.is_some() || set_sheet.is_some() || set_output_dir.is_some();

            if let Some(path) = set_reference {
                config.reference_path = path;
            }
            if let Some(sheet) = set_sheet {
                config.layout.sheet_name = sheet;
            }
            if let Some(dir) = set_output_dir {
                config.output_dir = Some(dir);
            }
            if changed {
                config.layout.validate()?;
                config.save()?;
                println!("✔ Configuración guardada en {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("Configuración:");
                println!("  Tabla de referencia: {}", config.reference_path.display());
                println!(
                    "  Carpeta de salida: {}",
                    config
                        .output_dir
                        .as_ref()
                        .map(|d| d.display().to_string())
                        .unwrap_or_else(|| ".".into())
                );
                println!("  Hoja: {}", config.layout.sheet_name);
                println!(
                    "  Fila de técnicos: {}  Inicio de datos: {}",
                    config.layout.header_row + 1,
                    config.layout.first_data_row() + 1
                );
                println!("  Prefijo de técnico: {}", config.layout.technician_prefix);
            }
        }
    }

    Ok(())
}
