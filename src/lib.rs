//! Extractor - Biblioteca de extracción de datos biográficos
//!
//! Busca nombres de persona, fechas y lugares de nacimiento en párrafos de
//! texto mediante reglas sobre tokens anotados morfológicamente.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod extractor;
pub mod grammar;
pub mod languages;
pub mod records;
pub mod report;

pub use config::Config;
pub use error::{Error, Result};
pub use extractor::{CategorizedEntry, Entry, Extraction, Extractor, Phase};
