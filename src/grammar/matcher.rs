//! Motor de coincidencias
//!
//! Recorre el flujo de tokens de izquierda a derecha probando una regla en
//! cada posición. Tras una coincidencia salta al final del tramo consumido,
//! así que las coincidencias de una misma pasada nunca se solapan.

use std::collections::BTreeMap;
use std::iter::FusedIterator;
use std::ops::Range;

use super::rules::{Rule, Slot};
use super::tokenizer::Token;

/// Tokens capturados por un campo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    /// Índices de token dentro del flujo
    pub span: Range<usize>,
    /// Texto del token, forma canónica, o textos unidos por espacio si el elemento se repite
    pub value: String,
}

/// Aplicación exitosa de una regla
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub start: usize,
    pub end: usize,
    slots: BTreeMap<Slot, Capture>,
}

impl Match {
    pub fn slot(&self, slot: Slot) -> Option<&Capture> {
        self.slots.get(&slot)
    }

    pub fn slots(&self) -> impl Iterator<Item = (Slot, &Capture)> {
        self.slots.iter().map(|(slot, capture)| (*slot, capture))
    }
}

/// Intenta aplicar la regla empezando exactamente en `start`
pub fn match_at(rule: &Rule, tokens: &[Token], start: usize) -> Option<Match> {
    let mut cursor = start;
    let mut slots = BTreeMap::new();

    for element in &rule.elements {
        let from = cursor;
        let mut values = Vec::new();

        while let Some(token) = tokens.get(cursor) {
            match element.pattern.apply(token) {
                Some(value) => {
                    values.push(value);
                    cursor += 1;
                }
                None => break,
            }
            if !element.repeatable {
                break;
            }
        }

        if values.is_empty() {
            return None;
        }

        if let Some(slot) = element.slot {
            slots.insert(
                slot,
                Capture {
                    span: from..cursor,
                    value: values.join(" "),
                },
            );
        }
    }

    if cursor == start {
        return None;
    }

    Some(Match {
        start,
        end: cursor,
        slots,
    })
}

/// Pasada única de una regla sobre un flujo de tokens
pub struct Matches<'r, 't> {
    rule: &'r Rule,
    tokens: &'t [Token],
    position: usize,
}

impl Iterator for Matches<'_, '_> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        while self.position < self.tokens.len() {
            match match_at(self.rule, self.tokens, self.position) {
                Some(found) => {
                    self.position = found.end;
                    return Some(found);
                }
                None => self.position += 1,
            }
        }
        None
    }
}

impl FusedIterator for Matches<'_, '_> {}

/// Todas las coincidencias no solapadas de `rule`, en orden.
///
/// El iterador es perezoso y no se puede reiniciar; para aplicar otra regla
/// sobre los mismos tokens hay que volver a llamar a `find_all`.
pub fn find_all<'r, 't>(rule: &'r Rule, tokens: &'t [Token]) -> Matches<'r, 't> {
    Matches {
        rule,
        tokens,
        position: 0,
    }
}
