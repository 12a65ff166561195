//! Tokenizador de texto

use std::collections::BTreeSet;

/// Tipo de token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    Word,
    Int,
    Punct,
    Other,
}

/// Token individual
///
/// Se construye sin anotación morfológica; `Morphology::annotate` rellena
/// `normalized_form` y `tags`. Una vez dentro del flujo de tokens no se modifica.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub normalized_form: String,
    pub start: usize,
    pub end: usize,
    pub is_capitalized: bool,
    pub token_type: TokenType,
    pub tags: BTreeSet<String>,
}

impl Token {
    pub fn new(text: String, token_type: TokenType, start: usize, end: usize) -> Self {
        let is_capitalized = text.chars().next().is_some_and(char::is_uppercase);
        Self {
            normalized_form: text.to_lowercase(),
            text,
            start,
            end,
            is_capitalized,
            token_type,
            tags: BTreeSet::new(),
        }
    }

    /// Añade la anotación morfológica (lema y etiquetas)
    pub fn with_annotation<I, S>(mut self, normalized_form: String, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.normalized_form = normalized_form;
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_word(&self) -> bool {
        self.token_type == TokenType::Word
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn lowercase(&self) -> String {
        self.text.to_lowercase()
    }
}

/// Tokenizador de texto
#[derive(Debug, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Tokeniza un texto. Los espacios separan tokens pero no se emiten.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut chars = text.char_indices().peekable();

        while let Some((start, ch)) = chars.next() {
            let token = if ch.is_alphabetic() {
                // Palabra, con guion o apóstrofo interno solo si sigue una letra
                let mut end = start + ch.len_utf8();
                let mut word = String::from(ch);

                while let Some(&(_, next_ch)) = chars.peek() {
                    if next_ch.is_alphabetic() {
                        word.push(next_ch);
                        end += next_ch.len_utf8();
                        chars.next();
                    } else if next_ch == '-' || next_ch == '\'' {
                        let mut lookahead = chars.clone();
                        lookahead.next();
                        match lookahead.peek() {
                            Some(&(_, after)) if after.is_alphabetic() => {
                                word.push(next_ch);
                                end += next_ch.len_utf8();
                                chars.next();
                            }
                            _ => break,
                        }
                    } else {
                        break;
                    }
                }

                Token::new(word, TokenType::Word, start, end)
            } else if ch.is_ascii_digit() {
                // Número entero
                let mut end = start + ch.len_utf8();
                let mut number = String::from(ch);

                while let Some(&(_, next_ch)) = chars.peek() {
                    if next_ch.is_ascii_digit() {
                        number.push(next_ch);
                        end += next_ch.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }

                Token::new(number, TokenType::Int, start, end)
            } else if ch.is_whitespace() {
                continue;
            } else if is_punctuation(ch) {
                // Puntuación - agrupar "..." en un solo token
                if ch == '.' {
                    let mut end = start + ch.len_utf8();
                    let mut dots = String::from(ch);

                    while let Some(&(_, next_ch)) = chars.peek() {
                        if next_ch == '.' {
                            dots.push(next_ch);
                            end += next_ch.len_utf8();
                            chars.next();
                        } else {
                            break;
                        }
                    }

                    Token::new(dots, TokenType::Punct, start, end)
                } else {
                    Token::new(ch.to_string(), TokenType::Punct, start, start + ch.len_utf8())
                }
            } else {
                Token::new(ch.to_string(), TokenType::Other, start, start + ch.len_utf8())
            };

            tokens.push(token);
        }

        tokens
    }
}

fn is_punctuation(ch: char) -> bool {
    ch.is_ascii_punctuation()
        || matches!(ch, '—' | '–' | '«' | '»' | '…' | '„' | '“' | '”' | '№')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_simple() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("Иван Петров");

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "Иван");
        assert_eq!(tokens[0].token_type, TokenType::Word);
        assert!(tokens[0].is_capitalized);
        assert_eq!(tokens[1].text, "Петров");
    }

    #[test]
    fn test_tokenize_punctuation() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("«Москва», город.");

        assert_eq!(tokens[0].text, "«");
        assert_eq!(tokens[0].token_type, TokenType::Punct);
        assert_eq!(tokens[1].text, "Москва");
        assert_eq!(tokens[2].text, "»");
        assert_eq!(tokens[3].text, ",");
        assert_eq!(tokens[5].text, ".");
        assert_eq!(tokens[5].token_type, TokenType::Punct);
    }

    #[test]
    fn test_tokenize_numbers() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("15 марта 1990.");

        assert_eq!(tokens[0].text, "15");
        assert_eq!(tokens[0].token_type, TokenType::Int);
        assert_eq!(tokens[2].text, "1990");
        assert_eq!(tokens[2].token_type, TokenType::Int);
        assert_eq!(tokens[3].text, ".");
    }

    #[test]
    fn test_internal_hyphen() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("Санкт-Петербург - город");

        assert_eq!(tokens[0].text, "Санкт-Петербург");
        assert_eq!(tokens[1].text, "-");
        assert_eq!(tokens[1].token_type, TokenType::Punct);
        assert_eq!(tokens[2].text, "город");
    }

    #[test]
    fn test_trailing_hyphen_is_not_part_of_word() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("кто- то");

        assert_eq!(tokens[0].text, "кто");
        assert_eq!(tokens[1].text, "-");
    }

    #[test]
    fn test_positions() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("ab  cd");

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].start, 0);
        assert_eq!(tokens[0].end, 2);
        assert_eq!(tokens[1].start, 4);
        assert_eq!(tokens[1].end, 6);
    }

    #[test]
    fn test_capitalization_flag() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("город Москва 1990");

        assert!(!tokens[0].is_capitalized);
        assert!(tokens[1].is_capitalized);
        assert!(!tokens[2].is_capitalized);
    }
}
