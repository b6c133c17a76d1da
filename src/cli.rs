use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cajas-picking")]
#[command(about = "Análisis técnico: cajas completas vs unidades a picking", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Muestra logs de depuración
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Opciones comunes a los comandos que leen una hoja de inspección
#[derive(Args, Debug, Clone)]
pub struct SheetArgs {
    /// Excel de inspección
    #[arg(required = true)]
    pub input: PathBuf,

    /// Hoja con los datos de técnicos (por defecto: LASER)
    #[arg(long)]
    pub sheet: Option<String>,

    /// Tabla de referencia de unidades por caja
    #[arg(short, long)]
    pub reference: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analiza un Excel de inspección y genera el Excel de resultados
    Analyze {
        #[command(flatten)]
        sheet: SheetArgs,

        /// Excel de resultados (archivo o carpeta)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Guarda además el análisis completo en JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// No escribe el Excel de resultados
        #[arg(long)]
        no_export: bool,
    },

    /// Pide las unidades por caja de los códigos no conciliados y repite el análisis
    Resolve {
        #[command(flatten)]
        sheet: SheetArgs,
    },

    /// Muestra la tabla de referencia
    Reference {
        /// Tabla de referencia de unidades por caja
        #[arg(short, long)]
        reference: Option<PathBuf>,
    },

    /// Muestra o edita la configuración
    Config {
        /// Tabla de referencia por defecto
        #[arg(long)]
        set_reference: Option<PathBuf>,

        /// Hoja de inspección por defecto
        #[arg(long)]
        set_sheet: Option<String>,

        /// Carpeta de salida por defecto
        #[arg(long)]
        set_output_dir: Option<PathBuf>,

        /// Muestra la configuración
        #[arg(long)]
        show: bool,
    },
}
