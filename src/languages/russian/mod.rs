//! Implementación del idioma ruso

pub mod names;
pub mod rules;
pub mod vocabulary;

use crate::dictionary::{ProperNames, Trie, WordInfo};
use crate::grammar::{Grammar, GrammarError, Morphology};
use crate::languages::Language;

use vocabulary::{
    BIRTH_VERBS, BIRTH_VERB_TAGS, MONTHS, MONTH_TAGS, SETTLEMENTS, SETTLEMENT_TAGS,
};

#[derive(Debug, Default)]
pub struct Russian;

impl Russian {
    pub fn new() -> Self {
        Self
    }

    fn insert_table(&self, lexicon: &mut Trie, table: &[(&str, &[&str])], tags: &[&str]) {
        for (lemma, forms) in table {
            for form in forms.iter().chain(std::iter::once(lemma)) {
                lexicon.insert(&self.fold(form), WordInfo::new(lemma, tags.iter().copied()));
            }
        }
    }
}

impl Language for Russian {
    fn code(&self) -> &str {
        "ru"
    }

    fn name(&self) -> &str {
        "Русский"
    }

    /// Minúsculas y "ё" como "е"
    fn fold(&self, word: &str) -> String {
        word.to_lowercase().replace('ё', "е")
    }

    fn configure_lexicon(&self, lexicon: &mut Trie) {
        self.insert_table(lexicon, MONTHS, MONTH_TAGS);
        self.insert_table(lexicon, SETTLEMENTS, SETTLEMENT_TAGS);
        self.insert_table(lexicon, BIRTH_VERBS, BIRTH_VERB_TAGS);
    }

    fn configure_names(&self, proper_names: &mut ProperNames) {
        names::register_builtin_names(proper_names);
    }

    fn guess_tags(&self, folded: &str) -> Vec<&'static str> {
        if names::looks_like_surname(folded) {
            vec!["Surn"]
        } else {
            Vec::new()
        }
    }

    fn grammar(&self, morphology: &Morphology) -> Result<Grammar, GrammarError> {
        rules::grammar(morphology)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold() {
        let russian = Russian::new();
        assert_eq!(russian.fold("Посёлок"), "поселок");
        assert_eq!(russian.fold("МОСКВА"), "москва");
    }

    #[test]
    fn test_builtin_lexicon() {
        let russian = Russian::new();
        let mut lexicon = Trie::new();
        russian.configure_lexicon(&mut lexicon);

        assert_eq!(lexicon.get("сентябрём").map(|i| i.lemma.as_str()), None);
        assert_eq!(lexicon.get("сентябрем").unwrap().lemma, "сентябрь");
        assert_eq!(lexicon.get("деревне").unwrap().lemma, "деревня");
        assert!(lexicon.get("родилась").unwrap().tags.contains("Birth"));
    }

    #[test]
    fn test_guess_tags() {
        let russian = Russian::new();
        assert_eq!(russian.guess_tags("гагарин"), vec!["Surn"]);
        assert!(russian.guess_tags("космос").is_empty());
    }
}
