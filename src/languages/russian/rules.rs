//! Reglas de extracción para el ruso
//!
//! - NAME: dos tokens seguidos, capitalizados y etiquetados como nombre o apellido.
//!   No se comprueba qué papel tiene cada uno.
//! - DATE: número, mes (forma canónica) y número. Sin validar rangos.
//! - PLACE: tipo de localidad seguido de cualquier palabra capitalizada.
//! - BIRTH_CONTEXT: forma de "родиться"/"рождённый"; solo dispara la fase de respaldo.

use crate::grammar::predicates::{and_, dictionary, gram, is_capitalized, is_type, normalized, or_};
use crate::grammar::{
    DictionaryPipeline, FactKind, Grammar, GrammarError, Morphology, Predicate, Rule, RuleElement,
    Slot, TokenType,
};

use super::vocabulary::{BIRTH_TRIGGERS, MONTHS, SETTLEMENT_WORDS};

fn name_part() -> Predicate {
    and_(vec![is_capitalized(), or_(vec![gram("Name"), gram("Surn")])])
}

pub fn name_rule() -> Result<Rule, GrammarError> {
    Rule::new(
        "name",
        Some(FactKind::Name),
        vec![
            RuleElement::new(name_part()).interpretation(Slot::First),
            RuleElement::new(name_part()).interpretation(Slot::Last),
        ],
    )
}

pub fn date_rule(morphology: &Morphology) -> Result<Rule, GrammarError> {
    let months = DictionaryPipeline::new(MONTHS.iter().copied(), |form| {
        morphology.normal_form(form)
    });

    Rule::new(
        "date",
        Some(FactKind::Date),
        vec![
            RuleElement::new(is_type(TokenType::Int)).interpretation(Slot::Day),
            RuleElement::new(months).interpretation(Slot::Month),
            RuleElement::new(is_type(TokenType::Int)).interpretation(Slot::Year),
        ],
    )
}

pub fn place_rule(morphology: &Morphology) -> Result<Rule, GrammarError> {
    let settlements = dictionary(SETTLEMENT_WORDS.iter().map(|w| morphology.normal_form(w)));

    Rule::new(
        "place",
        Some(FactKind::Place),
        vec![
            RuleElement::new(settlements),
            RuleElement::new(is_capitalized()).interpretation(Slot::Location),
        ],
    )
}

pub fn birth_context_rule(morphology: &Morphology) -> Result<Rule, GrammarError> {
    let triggers = BIRTH_TRIGGERS
        .iter()
        .map(|w| normalized(morphology.normal_form(w)))
        .collect();

    Rule::new("birth_context", None, vec![RuleElement::new(or_(triggers))])
}

pub fn grammar(morphology: &Morphology) -> Result<Grammar, GrammarError> {
    Ok(Grammar {
        name: name_rule()?,
        date: date_rule(morphology)?,
        place: place_rule(morphology)?,
        birth_context: birth_context_rule(morphology)?,
    })
}
