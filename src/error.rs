//! Errores del extractor

use std::path::PathBuf;

use thiserror::Error;

use crate::grammar::{GrammarError, InterpretError};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no se pudo leer '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("no se pudo escribir '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("idioma no soportado: {0}")]
    UnsupportedLanguage(String),

    #[error("línea {line} de '{path}' mal formada: {message}")]
    Lexicon {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("no se proporcionó texto ni archivo de entrada")]
    MissingInput,

    #[error("gramática inválida: {0}")]
    Grammar(#[from] GrammarError),

    #[error("error interno de interpretación: {0}")]
    Interpretation(#[from] InterpretError),

    #[error("error serializando JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("error de E/S: {0}")]
    Io(#[from] std::io::Error),
}
