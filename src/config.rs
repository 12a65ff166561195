//! Configuración y argumentos CLI

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Categorías admitidas por defecto
pub const DEFAULT_CATEGORIES: [&str; 10] = [
    "science",
    "style",
    "culture",
    "life",
    "economics",
    "business",
    "travel",
    "forces",
    "media",
    "sport",
];

/// Formato del informe
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "extractor",
    version,
    about = "Extrae nombres, fechas y lugares de nacimiento de párrafos etiquetados",
    after_help = "EJEMPLOS:\n    extractor -i news.txt -o Results.txt\n    extractor \"Иван Петров родился 15 марта 1990 года в городе Москва.\""
)]
pub struct Config {
    /// Idioma a usar
    #[arg(short = 'l', long = "lang", default_value = "ru")]
    pub language: String,

    /// Archivo de entrada (categoría<TAB>título<TAB>texto por línea)
    #[arg(short = 'i', long = "input")]
    pub input_file: Option<PathBuf>,

    /// Archivo de salida del informe
    #[arg(short = 'o', long = "output", default_value = "Results.txt")]
    pub output_file: PathBuf,

    /// Párrafo a analizar directamente (el resultado se imprime)
    pub text: Option<String>,

    /// Categorías admitidas (se puede repetir)
    #[arg(short = 'c', long = "category", default_values_t = DEFAULT_CATEGORIES.map(String::from))]
    pub categories: Vec<String>,

    /// Formato del informe
    #[arg(short = 'f', long = "format", value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Directorio de datos (léxico y listas de nombres opcionales)
    #[arg(long = "data-dir", default_value = "data")]
    pub data_dir: PathBuf,

    /// Más detalle en el registro (-v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "ru".to_string(),
            input_file: None,
            output_file: PathBuf::from("Results.txt"),
            text: None,
            categories: DEFAULT_CATEGORIES.map(String::from).to_vec(),
            format: ReportFormat::Text,
            data_dir: PathBuf::from("data"),
            verbose: 0,
        }
    }
}

impl Config {
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut config = Self::try_parse_from(args)?;
        config.language = Self::canonicalize_language(&config.language);
        Ok(config)
    }

    fn canonicalize_language(language: &str) -> String {
        let normalized = language.trim().to_lowercase();
        match normalized.as_str() {
            "ru" | "russian" | "русский" => "ru".to_string(),
            _ => normalized,
        }
    }
}
