//! Escritura del informe de resultados

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::ReportFormat;
use crate::error::{Error, Result};
use crate::extractor::{CategorizedEntry, Entry};

const NONE_MARKER: &str = "нет";

fn joined(values: &[String]) -> String {
    if values.is_empty() {
        NONE_MARKER.to_string()
    } else {
        values.join(", ")
    }
}

/// Líneas de datos de una entrada (sin cabecera)
pub fn render_entry(entry: &Entry) -> String {
    format!(
        "Имена: {}\nДата рождения: {}\nМесто рождения: {}\n",
        joined(&entry.names),
        joined(&entry.birth_dates),
        joined(&entry.birth_places)
    )
}

/// Informe de texto: un bloque por registro, en el orden de entrada
pub fn write_text<W: Write>(writer: &mut W, entries: &[CategorizedEntry]) -> std::io::Result<()> {
    for (i, item) in entries.iter().enumerate() {
        writeln!(
            writer,
            "Параграф {} извлеченные данные (Категория: {}):",
            i + 1,
            item.category
        )?;
        write!(writer, "{}", render_entry(&item.entry))?;
        writeln!(writer)?;
    }
    Ok(())
}

pub fn write_json<W: Write>(writer: &mut W, entries: &[CategorizedEntry]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, entries)?;
    writeln!(writer)?;
    Ok(())
}

pub fn write_report<W: Write>(
    writer: &mut W,
    entries: &[CategorizedEntry],
    format: ReportFormat,
) -> Result<()> {
    match format {
        ReportFormat::Text => write_text(writer, entries)?,
        ReportFormat::Json => write_json(writer, entries)?,
    }
    Ok(())
}

/// Escribe el informe en un archivo; cualquier fallo es fatal
pub fn save_report<P: AsRef<Path>>(
    path: P,
    entries: &[CategorizedEntry],
    format: ReportFormat,
) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    write_report(&mut writer, entries, format).map_err(|e| match e {
        Error::Io(source) => write_error(source),
        Error::Json(source) if source.is_io() => write_error(source.into()),
        other => other,
    })?;
    writer.flush().map_err(write_error)
}
