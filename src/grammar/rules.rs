//! Sistema de reglas de extracción

use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

use super::pipeline::DictionaryPipeline;
use super::predicates::Predicate;
use super::tokenizer::Token;

/// Identificador de regla
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleId(pub String);

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Campo con nombre que una regla puede capturar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    First,
    Last,
    Day,
    Month,
    Year,
    Location,
}

impl Slot {
    pub fn as_str(self) -> &'static str {
        match self {
            Slot::First => "first",
            Slot::Last => "last",
            Slot::Day => "day",
            Slot::Month => "month",
            Slot::Year => "year",
            Slot::Location => "location",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tipo de hecho que produce una regla
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactKind {
    Name,
    Date,
    Place,
}

impl FactKind {
    /// Campos que toda coincidencia de este tipo debe traer
    pub fn required_slots(self) -> &'static [Slot] {
        match self {
            FactKind::Name => &[Slot::First, Slot::Last],
            FactKind::Date => &[Slot::Day, Slot::Month, Slot::Year],
            FactKind::Place => &[Slot::Location],
        }
    }
}

/// Patrón que debe cumplir un token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenPattern {
    Predicate(Predicate),
    /// Vocabulario cerrado; captura la forma canónica en lugar del texto
    Pipeline(DictionaryPipeline),
}

impl TokenPattern {
    /// Valor capturado si el token cumple el patrón
    pub fn apply(&self, token: &Token) -> Option<String> {
        match self {
            TokenPattern::Predicate(predicate) => {
                predicate.test(token).then(|| token.text.clone())
            }
            TokenPattern::Pipeline(pipeline) => pipeline.canonical(token).map(str::to_string),
        }
    }
}

impl From<Predicate> for TokenPattern {
    fn from(predicate: Predicate) -> Self {
        TokenPattern::Predicate(predicate)
    }
}

impl From<DictionaryPipeline> for TokenPattern {
    fn from(pipeline: DictionaryPipeline) -> Self {
        TokenPattern::Pipeline(pipeline)
    }
}

/// Elemento de una regla: patrón, campo opcional y repetición
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleElement {
    pub pattern: TokenPattern,
    pub slot: Option<Slot>,
    pub repeatable: bool,
}

impl RuleElement {
    pub fn new(pattern: impl Into<TokenPattern>) -> Self {
        Self {
            pattern: pattern.into(),
            slot: None,
            repeatable: false,
        }
    }

    /// Captura el token en el campo indicado
    pub fn interpretation(mut self, slot: Slot) -> Self {
        self.slot = Some(slot);
        self
    }

    /// Consume uno o más tokens consecutivos (codicioso, sin retroceso)
    pub fn repeatable(mut self) -> Self {
        self.repeatable = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("la regla '{0}' no tiene elementos")]
    EmptyRule(String),
    #[error("la regla '{rule}' captura '{slot}' más de una vez")]
    DuplicateSlot { rule: String, slot: Slot },
}

/// Regla de extracción: secuencia ordenada de elementos
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub id: RuleId,
    pub fact: Option<FactKind>,
    pub elements: Vec<RuleElement>,
}

impl Rule {
    /// `fact` es `None` para reglas que solo sirven de disparador
    pub fn new(
        id: &str,
        fact: Option<FactKind>,
        elements: Vec<RuleElement>,
    ) -> Result<Self, GrammarError> {
        if elements.is_empty() {
            return Err(GrammarError::EmptyRule(id.to_string()));
        }

        let mut seen = BTreeSet::new();
        for slot in elements.iter().filter_map(|e| e.slot) {
            if !seen.insert(slot) {
                return Err(GrammarError::DuplicateSlot {
                    rule: id.to_string(),
                    slot,
                });
            }
        }

        Ok(Self {
            id: RuleId(id.to_string()),
            fact,
            elements,
        })
    }

    /// Número mínimo de tokens que consume
    pub fn arity(&self) -> usize {
        self.elements.len()
    }

    pub fn is_fixed_length(&self) -> bool {
        self.elements.iter().all(|e| !e.repeatable)
    }
}

/// Reglas compiladas de un idioma
#[derive(Debug, Clone)]
pub struct Grammar {
    pub name: Rule,
    pub date: Rule,
    pub place: Rule,
    pub birth_context: Rule,
}

impl Grammar {
    /// Reglas que producen hechos, en el orden en que se aplican
    pub fn fact_rules(&self) -> [&Rule; 3] {
        [&self.name, &self.date, &self.place]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::predicates::{is_capitalized, is_type};
    use crate::grammar::tokenizer::TokenType;

    #[test]
    fn test_empty_rule_rejected() {
        let result = Rule::new("vacía", None, vec![]);
        assert_eq!(result, Err(GrammarError::EmptyRule("vacía".to_string())));
    }

    #[test]
    fn test_duplicate_slot_rejected() {
        let result = Rule::new(
            "doble",
            Some(FactKind::Place),
            vec![
                RuleElement::new(is_capitalized()).interpretation(Slot::Location),
                RuleElement::new(is_capitalized()).interpretation(Slot::Location),
            ],
        );
        assert!(matches!(
            result,
            Err(GrammarError::DuplicateSlot { slot: Slot::Location, .. })
        ));
    }

    #[test]
    fn test_arity_and_fixed_length() {
        let rule = Rule::new(
            "número",
            None,
            vec![
                RuleElement::new(is_type(TokenType::Int)),
                RuleElement::new(is_capitalized()).repeatable(),
            ],
        )
        .unwrap();

        assert_eq!(rule.arity(), 2);
        assert!(!rule.is_fixed_length());
    }

    #[test]
    fn test_pattern_capture_value() {
        let token = Token::new("Москва".to_string(), TokenType::Word, 0, 12);
        let pattern = TokenPattern::from(is_capitalized());

        assert_eq!(pattern.apply(&token), Some("Москва".to_string()));
        assert_eq!(
            TokenPattern::from(is_type(TokenType::Int)).apply(&token),
            None
        );
    }
}
