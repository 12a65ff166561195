//! Lectura de registros `categoría<TAB>título<TAB>texto`

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Registro de entrada
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Número de línea (desde 1)
    pub number: usize,
    pub category: String,
    pub title: String,
    pub content: String,
}

impl Record {
    /// Analiza una línea; devuelve `None` si no tiene exactamente tres campos
    pub fn parse(number: usize, line: &str) -> Option<Self> {
        let mut fields = line.trim().split('\t');
        let (category, title, content) = (fields.next()?, fields.next()?, fields.next()?);
        if fields.next().is_some() {
            return None;
        }

        Some(Self {
            number,
            category: category.to_string(),
            title: title.to_string(),
            content: content.to_string(),
        })
    }
}

/// Lee todos los registros bien formados de un lector
pub fn parse_records<R: BufRead>(reader: R) -> std::io::Result<Vec<Record>> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        match Record::parse(index + 1, &line) {
            Some(record) => records.push(record),
            None => debug!(line = index + 1, "línea mal formada omitida"),
        }
    }

    Ok(records)
}

/// Lee todos los registros bien formados de un archivo
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let read_error = |source| Error::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    parse_records(BufReader::new(file)).map_err(read_error)
}
