//! Interpretación de coincidencias como hechos tipados

use thiserror::Error;

use super::matcher::{Capture, Match};
use super::rules::{FactKind, Rule, Slot};

/// Hecho extraído de una coincidencia
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fact {
    Name { first: String, last: String },
    Date { day: u32, month: String, year: u32 },
    Place { location: String },
}

impl Fact {
    /// Representación textual usada en el informe
    pub fn render(&self) -> String {
        match self {
            Fact::Name { first, last } => format!("{} {}", first, last),
            Fact::Date { day, month, year } => format!("{} {} {}", day, month, year),
            Fact::Place { location } => location.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpretError {
    /// La regla declara el campo pero la coincidencia no lo trae
    #[error("la coincidencia de '{rule}' no tiene el campo '{slot}'")]
    MissingSlot { rule: String, slot: Slot },

    #[error("la regla '{rule}' no produce hechos")]
    NotAFactRule { rule: String },

    /// Número que no cabe en el campo; afecta solo a ese hecho
    #[error("valor numérico fuera de rango en '{slot}': {value}")]
    InvalidNumber { slot: Slot, value: String },
}

/// Convierte una coincidencia en el hecho que declara su regla
pub fn interpret(rule: &Rule, found: &Match) -> Result<Fact, InterpretError> {
    let kind = rule.fact.ok_or_else(|| InterpretError::NotAFactRule {
        rule: rule.id.to_string(),
    })?;

    let text = |slot: Slot| capture(rule, found, slot);

    let fact = match kind {
        FactKind::Name => Fact::Name {
            first: text(Slot::First)?.value.clone(),
            last: text(Slot::Last)?.value.clone(),
        },
        FactKind::Date => Fact::Date {
            day: number(Slot::Day, text(Slot::Day)?)?,
            month: text(Slot::Month)?.value.clone(),
            year: number(Slot::Year, text(Slot::Year)?)?,
        },
        FactKind::Place => Fact::Place {
            location: text(Slot::Location)?.value.clone(),
        },
    };

    Ok(fact)
}

fn capture<'m>(rule: &Rule, found: &'m Match, slot: Slot) -> Result<&'m Capture, InterpretError> {
    found.slot(slot).ok_or_else(|| InterpretError::MissingSlot {
        rule: rule.id.to_string(),
        slot,
    })
}

fn number(slot: Slot, capture: &Capture) -> Result<u32, InterpretError> {
    capture
        .value
        .parse()
        .map_err(|_| InterpretError::InvalidNumber {
            slot,
            value: capture.value.clone(),
        })
}
