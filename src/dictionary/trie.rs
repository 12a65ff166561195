//! Estructura Trie para búsqueda eficiente de formas de palabra

use std::collections::{BTreeSet, HashMap};

/// Información morfológica asociada a una forma de palabra
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordInfo {
    /// Forma normal (lema)
    pub lemma: String,
    /// Etiquetas gramaticales (ej: "NOUN", "gent", "Name")
    pub tags: BTreeSet<String>,
}

impl WordInfo {
    pub fn new<I, S>(lemma: &str, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lemma: lemma.to_string(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

/// Nodo del Trie
#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    word_info: Option<WordInfo>,
}

/// Léxico de formas de palabra indexado por su forma en minúsculas
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    word_count: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self {
            root: TrieNode::default(),
            word_count: 0,
        }
    }

    /// Inserta una forma en el Trie.
    /// Si la forma ya existe, conserva el primer lema y une las etiquetas.
    pub fn insert(&mut self, word: &str, info: WordInfo) {
        let word_lower = word.to_lowercase();
        let mut node = &mut self.root;

        for ch in word_lower.chars() {
            node = node.children.entry(ch).or_default();
        }

        match node.word_info {
            Some(ref mut existing) => existing.tags.extend(info.tags),
            None => {
                self.word_count += 1;
                node.word_info = Some(info);
            }
        }
    }

    /// Verifica si una forma existe en el Trie
    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Obtiene la información de una forma
    pub fn get(&self, word: &str) -> Option<&WordInfo> {
        let word_lower = word.to_lowercase();
        let mut node = &self.root;

        for ch in word_lower.chars() {
            node = node.children.get(&ch)?;
        }

        node.word_info.as_ref()
    }

    /// Número de formas en el Trie
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Verifica si el Trie está vacío
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}
