//! Nombres propios y apellidos
//!
//! Guarda formas flexionadas de nombres de pila y apellidos con su forma
//! nominativa. Sirve de fuente para las etiquetas "Name" y "Surn".

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// Papel de un nombre propio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NameRole {
    Given,
    Surname,
}

impl NameRole {
    /// Etiqueta gramatical correspondiente
    pub fn tag(self) -> &'static str {
        match self {
            NameRole::Given => "Name",
            NameRole::Surname => "Surn",
        }
    }
}

/// Conjunto de nombres propios y apellidos
#[derive(Debug, Default)]
pub struct ProperNames {
    /// forma en minúsculas -> (papel -> forma nominativa)
    forms: HashMap<String, Vec<(NameRole, String)>>,
}

impl ProperNames {
    /// Crea un conjunto vacío
    pub fn new() -> Self {
        Self {
            forms: HashMap::new(),
        }
    }

    /// Registra una forma flexionada de un nombre
    pub fn insert(&mut self, form: &str, lemma: &str, role: NameRole) {
        let entries = self.forms.entry(form.to_lowercase()).or_default();
        if !entries.iter().any(|(r, _)| *r == role) {
            entries.push((role, lemma.to_lowercase()));
        }
    }

    /// Carga nombres desde un archivo (un nombre por línea)
    pub fn append_from_file<P: AsRef<Path>>(&mut self, path: P, role: NameRole) -> Result<usize> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let reader = BufReader::new(file);
        let mut count = 0;

        for line_result in reader.lines() {
            let line = line_result.map_err(|source| Error::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let name = line.trim();

            if !name.is_empty() && !name.starts_with('#') {
                self.insert(name, name, role);
                count += 1;
            }
        }

        Ok(count)
    }

    /// Papeles conocidos para una forma (insensible a mayúsculas)
    pub fn roles(&self, word: &str) -> impl Iterator<Item = NameRole> + '_ {
        self.forms
            .get(&word.to_lowercase())
            .into_iter()
            .flatten()
            .map(|(role, _)| *role)
    }

    /// Forma nominativa de un nombre conocido
    pub fn lemma(&self, word: &str) -> Option<&str> {
        self.forms
            .get(&word.to_lowercase())
            .and_then(|entries| entries.first())
            .map(|(_, lemma)| lemma.as_str())
    }

    /// Número de formas registradas
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    /// Verifica si el conjunto está vacío
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}
