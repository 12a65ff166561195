//! Anotación morfológica de tokens
//!
//! Combina el léxico de formas, las listas de nombres propios y las
//! heurísticas del idioma para asignar a cada palabra su forma normal y sus
//! etiquetas gramaticales.

use std::collections::BTreeSet;

use crate::dictionary::{ProperNames, Trie, WordInfo};
use crate::languages::Language;

use super::tokenizer::{Token, Tokenizer};

pub struct Morphology {
    lexicon: Trie,
    names: ProperNames,
    language: Box<dyn Language>,
}

impl Morphology {
    /// Crea la morfología; el idioma añade su vocabulario incorporado
    pub fn new(mut lexicon: Trie, mut names: ProperNames, language: Box<dyn Language>) -> Self {
        language.configure_lexicon(&mut lexicon);
        language.configure_names(&mut names);
        Self {
            lexicon,
            names,
            language,
        }
    }

    pub fn language(&self) -> &dyn Language {
        self.language.as_ref()
    }

    pub fn lexicon_len(&self) -> usize {
        self.lexicon.len()
    }

    pub fn names_len(&self) -> usize {
        self.names.len()
    }

    fn lookup(&self, word: &str) -> Option<&WordInfo> {
        self.lexicon
            .get(&self.language.fold(word))
            .or_else(|| self.lexicon.get(word))
    }

    /// Forma normal de una palabra (lema si se conoce)
    pub fn normal_form(&self, word: &str) -> String {
        if let Some(info) = self.lookup(word) {
            return self.language.fold(&info.lemma);
        }
        if let Some(lemma) = self.names.lemma(word) {
            return self.language.fold(lemma);
        }
        self.language.fold(word)
    }

    /// Etiquetas gramaticales de una palabra
    pub fn tags(&self, word: &str) -> BTreeSet<String> {
        let mut tags = BTreeSet::new();

        match self.lookup(word) {
            Some(info) => tags.extend(info.tags.iter().cloned()),
            None => {
                // Solo se adivina para palabras fuera del léxico
                let folded = self.language.fold(word);
                tags.extend(self.language.guess_tags(&folded).into_iter().map(String::from));
            }
        }
        tags.extend(self.names.roles(word).map(|role| role.tag().to_string()));

        tags
    }

    /// Anota un token de palabra; el resto se devuelve sin cambios
    pub fn annotate(&self, token: Token) -> Token {
        if !token.is_word() {
            return token;
        }
        let normal_form = self.normal_form(&token.text);
        let tags = self.tags(&token.text);
        token.with_annotation(normal_form, tags)
    }

    /// Tokeniza y anota un párrafo completo
    pub fn analyze(&self, tokenizer: &Tokenizer, text: &str) -> Vec<Token> {
        tokenizer
            .tokenize(text)
            .into_iter()
            .map(|token| self.annotate(token))
            .collect()
    }
}
