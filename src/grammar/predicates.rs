//! Predicados sobre tokens
//!
//! Cada predicado es un árbol de variantes evaluado recursivamente. Las hojas
//! prueban una propiedad de un solo token; `And`, `Or` y `Not` los combinan
//! con cortocircuito. Ningún predicado tiene estado.

use std::collections::BTreeSet;

use super::tokenizer::{Token, TokenType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Primera letra en mayúscula
    Capitalized,
    /// Etiqueta gramatical presente en el token
    Tag(String),
    /// Forma normal dentro de un conjunto cerrado
    Dictionary(BTreeSet<String>),
    /// Tipo de token
    Type(TokenType),
    /// Forma normal igual a una palabra dada
    Normalized(String),
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
    Not(Box<Predicate>),
}

impl Predicate {
    pub fn test(&self, token: &Token) -> bool {
        match self {
            Predicate::Capitalized => token.is_capitalized,
            Predicate::Tag(tag) => token.has_tag(tag),
            Predicate::Dictionary(words) => words.contains(&token.normalized_form),
            Predicate::Type(token_type) => token.token_type == *token_type,
            Predicate::Normalized(target) => token.normalized_form == *target,
            Predicate::And(children) => children.iter().all(|p| p.test(token)),
            Predicate::Or(children) => children.iter().any(|p| p.test(token)),
            Predicate::Not(inner) => !inner.test(token),
        }
    }
}

pub fn is_capitalized() -> Predicate {
    Predicate::Capitalized
}

/// Etiqueta gramatical (ej: "Name", "Surn")
pub fn gram(tag: &str) -> Predicate {
    Predicate::Tag(tag.to_string())
}

/// Las palabras deben llegar ya normalizadas (ver `Morphology::normal_form`)
pub fn dictionary<I, S>(words: I) -> Predicate
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Predicate::Dictionary(words.into_iter().map(Into::into).collect())
}

pub fn is_type(token_type: TokenType) -> Predicate {
    Predicate::Type(token_type)
}

pub fn normalized(word: impl Into<String>) -> Predicate {
    Predicate::Normalized(word.into())
}

pub fn and_(children: Vec<Predicate>) -> Predicate {
    Predicate::And(children)
}

pub fn or_(children: Vec<Predicate>) -> Predicate {
    Predicate::Or(children)
}

pub fn not_(inner: Predicate) -> Predicate {
    Predicate::Not(Box::new(inner))
}
