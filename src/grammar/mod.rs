//! Motor de gramática
//!
//! Predicados sobre tokens, reglas compuestas, búsqueda de coincidencias e
//! interpretación de hechos.

pub mod interpretation;
pub mod matcher;
pub mod morphology;
pub mod pipeline;
pub mod predicates;
pub mod rules;
pub mod tokenizer;

pub use interpretation::{interpret, Fact, InterpretError};
pub use matcher::{find_all, match_at, Capture, Match, Matches};
pub use morphology::Morphology;
pub use pipeline::DictionaryPipeline;
pub use predicates::Predicate;
pub use rules::{FactKind, Grammar, GrammarError, Rule, RuleElement, RuleId, Slot, TokenPattern};
pub use tokenizer::{Token, TokenType, Tokenizer};
