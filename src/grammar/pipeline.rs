//! Reconocedor de vocabulario cerrado
//!
//! Asocia todas las formas flexionadas de un vocabulario fijo (ej: los meses)
//! a su forma canónica, sin importar mayúsculas ni caso gramatical.

use std::collections::HashMap;

use super::tokenizer::Token;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionaryPipeline {
    forms: HashMap<String, String>,
}

impl DictionaryPipeline {
    /// Construye el reconocedor desde una lista literal `(canónica, formas)`.
    ///
    /// `normalize` se aplica además a cada forma para que también coincida la
    /// forma normal que la morfología asigna al token.
    pub fn new<'a, I, F>(entries: I, normalize: F) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a [&'a str])>,
        F: Fn(&str) -> String,
    {
        let mut forms = HashMap::new();
        for (canonical, inflections) in entries {
            for form in inflections.iter().copied().chain(std::iter::once(canonical)) {
                forms
                    .entry(form.to_lowercase())
                    .or_insert_with(|| canonical.to_string());
                forms
                    .entry(normalize(form))
                    .or_insert_with(|| canonical.to_string());
            }
        }
        Self { forms }
    }

    /// Forma canónica del token, si pertenece al vocabulario
    pub fn canonical(&self, token: &Token) -> Option<&str> {
        self.forms
            .get(&token.lowercase())
            .or_else(|| self.forms.get(&token.normalized_form))
            .map(String::as_str)
    }

    pub fn matches(&self, token: &Token) -> bool {
        self.canonical(token).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::tokenizer::TokenType;

    const SEASONS: &[(&str, &[&str])] = &[
        ("зима", &["зимы", "зиме", "зиму", "зимой"]),
        ("лето", &["лета", "лету", "летом", "лете"]),
    ];

    fn pipeline() -> DictionaryPipeline {
        DictionaryPipeline::new(SEASONS.iter().copied(), |w| w.to_lowercase())
    }

    fn word(text: &str) -> Token {
        Token::new(text.to_string(), TokenType::Word, 0, text.len())
    }

    #[test]
    fn test_canonical_form() {
        let pipeline = pipeline();

        assert_eq!(pipeline.canonical(&word("зимой")), Some("зима"));
        assert_eq!(pipeline.canonical(&word("ЛЕТОМ")), Some("лето"));
        assert_eq!(pipeline.canonical(&word("лето")), Some("лето"));
        assert_eq!(pipeline.canonical(&word("весна")), None);
    }

    #[test]
    fn test_matches_normalized_form() {
        let pipeline = pipeline();
        let token = word("зимою").with_annotation("зима".to_string(), ["NOUN"]);

        assert!(pipeline.matches(&token));
        assert_eq!(pipeline.canonical(&token), Some("зима"));
    }

    #[test]
    fn test_absence_is_not_an_error() {
        let pipeline = DictionaryPipeline::default();
        assert!(!pipeline.matches(&word("зима")));
    }
}
