//! Motor principal de extracción
//!
//! Cada párrafo pasa por dos fases:
//!
//! 1. **Directa**: reglas NAME, DATE y PLACE sobre el texto tal cual.
//! 2. **Respaldo**: si alguna lista quedó vacía, se pasa el párrafo a
//!    minúsculas y se busca un verbo de nacimiento. Solo si aparece se
//!    repiten las tres reglas sobre el texto en minúsculas y sus resultados
//!    reemplazan (no se mezclan con) los de la fase directa, aunque vengan vacíos.

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::dictionary::{DictionaryLoader, NameRole, ProperNames, Trie};
use crate::error::{Error, Result};
use crate::grammar::{
    find_all, interpret, Fact, Grammar, InterpretError, Morphology, Token, Tokenizer,
};
use crate::languages::{get_language, Language};
use crate::records::Record;

/// Datos extraídos de un párrafo, en orden de aparición y sin deduplicar
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub names: Vec<String>,
    pub birth_dates: Vec<String>,
    pub birth_places: Vec<String>,
}

impl Entry {
    pub fn push(&mut self, fact: &Fact) {
        let rendered = fact.render();
        match fact {
            Fact::Name { .. } => self.names.push(rendered),
            Fact::Date { .. } => self.birth_dates.push(rendered),
            Fact::Place { .. } => self.birth_places.push(rendered),
        }
    }

    /// ¿Falta alguno de los tres tipos de dato?
    pub fn is_incomplete(&self) -> bool {
        self.names.is_empty() || self.birth_dates.is_empty() || self.birth_places.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.birth_dates.is_empty() && self.birth_places.is_empty()
    }
}

/// Entrada asociada a la categoría de su registro
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorizedEntry {
    pub category: String,
    pub entry: Entry,
}

/// Fase que produjo el resultado final
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Direct,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub entry: Entry,
    pub phase: Phase,
}

/// Contexto del motor: morfología, reglas compiladas y categorías admitidas
pub struct Extractor {
    tokenizer: Tokenizer,
    morphology: Morphology,
    grammar: Grammar,
    categories: Vec<String>,
}

impl Extractor {
    /// Crea el extractor cargando los datos opcionales de `config.data_dir`
    pub fn new(config: &Config) -> Result<Self> {
        let language = get_language(&config.language)
            .ok_or_else(|| Error::UnsupportedLanguage(config.language.clone()))?;
        let language_code = language.code().to_string();

        let lexicon_path = config.data_dir.join(&language_code).join("lexicon.txt");
        let lexicon = if lexicon_path.exists() {
            DictionaryLoader::load_from_file(&lexicon_path)?
        } else {
            warn!(
                path = %lexicon_path.display(),
                "no se encontró léxico; se usa solo el vocabulario incorporado"
            );
            Trie::new()
        };

        let mut names = ProperNames::new();
        for (file, role) in [("names.txt", NameRole::Given), ("surnames.txt", NameRole::Surname)] {
            let path = config.data_dir.join(file);
            if path.exists() {
                let count = names.append_from_file(&path, role)?;
                debug!(path = %path.display(), count, "nombres cargados");
            }
        }

        let mut extractor = Self::with_data(language, lexicon, names)?;
        extractor.categories = config.categories.clone();
        Ok(extractor)
    }

    /// Crea el extractor solo con el vocabulario incorporado del idioma
    pub fn for_language(code: &str) -> Result<Self> {
        let language =
            get_language(code).ok_or_else(|| Error::UnsupportedLanguage(code.to_string()))?;
        Self::with_data(language, Trie::new(), ProperNames::new())
    }

    pub fn with_data(
        language: Box<dyn Language>,
        lexicon: Trie,
        names: ProperNames,
    ) -> Result<Self> {
        let morphology = Morphology::new(lexicon, names, language);
        let grammar = morphology.language().grammar(&morphology)?;

        for rule in grammar.fact_rules().into_iter().chain([&grammar.birth_context]) {
            debug!(
                rule = %rule.id,
                arity = rule.arity(),
                fixed = rule.is_fixed_length(),
                "regla compilada"
            );
        }

        info!(
            language = morphology.language().name(),
            lexicon = morphology.lexicon_len(),
            names = morphology.names_len(),
            "extractor inicializado"
        );

        Ok(Self {
            tokenizer: Tokenizer::new(),
            morphology,
            grammar,
            categories: Config::default().categories,
        })
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Tokeniza y anota un párrafo
    pub fn analyze(&self, text: &str) -> Vec<Token> {
        self.morphology.analyze(&self.tokenizer, text)
    }

    /// Extrae los datos de un párrafo
    pub fn extract(&self, content: &str) -> std::result::Result<Entry, InterpretError> {
        self.extract_detailed(content).map(|extraction| extraction.entry)
    }

    /// Como `extract`, indicando además qué fase produjo el resultado
    pub fn extract_detailed(
        &self,
        content: &str,
    ) -> std::result::Result<Extraction, InterpretError> {
        let tokens = self.analyze(content);
        let entry = self.collect(&tokens)?;

        if !entry.is_incomplete() {
            return Ok(Extraction {
                entry,
                phase: Phase::Direct,
            });
        }

        let folded = content.to_lowercase();
        let tokens = self.analyze(&folded);
        if find_all(&self.grammar.birth_context, &tokens).next().is_none() {
            return Ok(Extraction {
                entry,
                phase: Phase::Direct,
            });
        }

        debug!("contexto de nacimiento encontrado; se repite la extracción en minúsculas");
        Ok(Extraction {
            entry: self.collect(&tokens)?,
            phase: Phase::Fallback,
        })
    }

    fn collect(&self, tokens: &[Token]) -> std::result::Result<Entry, InterpretError> {
        let mut entry = Entry::default();

        for rule in self.grammar.fact_rules() {
            for found in find_all(rule, tokens) {
                match interpret(rule, &found) {
                    Ok(fact) => entry.push(&fact),
                    Err(InterpretError::InvalidNumber { slot, value }) => {
                        warn!(
                            rule = %rule.id,
                            %slot,
                            %value,
                            "hecho descartado: número fuera de rango"
                        );
                    }
                    Err(e) => return Err(e),
                }
            }
        }

        Ok(entry)
    }

    /// ¿Se procesa esta categoría?
    pub fn accepts_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Procesa registros en orden. Las categorías no admitidas se omiten;
    /// un error interno en un párrafo solo descarta ese párrafo.
    pub fn process<I>(&self, records: I) -> Vec<CategorizedEntry>
    where
        I: IntoIterator<Item = Record>,
    {
        let mut entries = Vec::new();

        for record in records {
            if !self.accepts_category(&record.category) {
                debug!(paragraph = record.number, category = %record.category, "categoría omitida");
                continue;
            }

            info!(paragraph = record.number, category = %record.category, "procesando párrafo");
            match self.extract(&record.content) {
                Ok(entry) => entries.push(CategorizedEntry {
                    category: record.category,
                    entry,
                }),
                Err(e) => {
                    error!(
                        paragraph = record.number,
                        error = %e,
                        "párrafo descartado por error interno"
                    );
                }
            }
        }

        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extractor() -> Extractor {
        Extractor::for_language("ru").unwrap()
    }

    #[test]
    fn test_direct_phase_complete() {
        let extraction = extractor()
            .extract_detailed("Иван Петров родился 15 марта 1990 года в городе Москва.")
            .unwrap();

        assert_eq!(extraction.phase, Phase::Direct);
        assert_eq!(
            extraction.entry,
            Entry {
                names: vec!["Иван Петров".to_string()],
                birth_dates: vec!["15 март 1990".to_string()],
                birth_places: vec!["Москва".to_string()],
            }
        );
    }

    #[test]
    fn test_fallback_replaces_direct_results() {
        // Sin nombre: la fase de respaldo reemplaza todo; en minúsculas el lugar se pierde
        let extraction = extractor()
            .extract_detailed("Он родился 15 марта 1990 года в городе Москва.")
            .unwrap();

        assert_eq!(extraction.phase, Phase::Fallback);
        assert!(extraction.entry.names.is_empty());
        assert_eq!(extraction.entry.birth_dates, vec!["15 март 1990"]);
        assert!(extraction.entry.birth_places.is_empty());
    }

    #[test]
    fn test_without_birth_context_direct_results_stay() {
        let extraction = extractor()
            .extract_detailed("Завод открыли в городе Тула.")
            .unwrap();

        assert_eq!(extraction.phase, Phase::Direct);
        assert_eq!(extraction.entry.birth_places, vec!["Тула"]);
        assert!(extraction.entry.names.is_empty());
    }

    #[test]
    fn test_unsupported_language() {
        assert!(matches!(
            Extractor::for_language("xx"),
            Err(Error::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn test_entry_push() {
        let mut entry = Entry::default();
        assert!(entry.is_empty());
        entry.push(&Fact::Place {
            location: "Тула".to_string(),
        });
        assert_eq!(entry.birth_places, vec!["Тула"]);
        assert!(entry.is_incomplete());
    }
}
