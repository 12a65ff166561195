//! Módulo de diccionario
//!
//! Léxico morfológico y listas de nombres propios que alimentan la anotación de tokens.

pub mod loader;
pub mod names;
pub mod trie;

pub use loader::DictionaryLoader;
pub use names::{NameRole, ProperNames};
pub use trie::{Trie, WordInfo};
