//! Soporte para múltiples idiomas
//!
//! Define el trait común para implementaciones de idiomas específicos.

pub mod russian;

use crate::dictionary::{ProperNames, Trie};
use crate::grammar::{Grammar, GrammarError, Morphology};

/// Trait que define las capacidades requeridas para un idioma
pub trait Language: Send + Sync {
    /// Código del idioma (ej: "ru")
    fn code(&self) -> &str;

    /// Nombre del idioma
    fn name(&self) -> &str;

    /// Plegado de una palabra para búsquedas (minúsculas por defecto)
    fn fold(&self, word: &str) -> String {
        word.to_lowercase()
    }

    /// Añade al léxico el vocabulario incorporado del idioma
    fn configure_lexicon(&self, _lexicon: &mut Trie) {}

    /// Añade los nombres propios incorporados del idioma
    fn configure_names(&self, _names: &mut ProperNames) {}

    /// Etiquetas adivinadas para una palabra ausente del léxico
    fn guess_tags(&self, _folded: &str) -> Vec<&'static str> {
        Vec::new()
    }

    /// Compila las reglas de extracción del idioma
    fn grammar(&self, morphology: &Morphology) -> Result<Grammar, GrammarError>;
}

/// Crea una instancia del idioma especificado
pub fn get_language(code: &str) -> Option<Box<dyn Language>> {
    match code {
        "ru" | "russian" | "русский" => Some(Box::new(russian::Russian::new())),
        _ => None,
    }
}
