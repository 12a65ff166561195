//! Cargador de léxicos desde archivos

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::trie::{Trie, WordInfo};
use crate::error::{Error, Result};

pub struct DictionaryLoader;

impl DictionaryLoader {
    /// Carga un léxico desde un archivo
    ///
    /// Formato esperado: forma|lema|etiqueta,etiqueta
    /// Ejemplo: марта|март|NOUN,masc,gent
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Trie> {
        let mut trie = Trie::new();
        Self::append_from_file(&mut trie, path)?;
        Ok(trie)
    }

    /// Añade las formas de un archivo a un léxico existente.
    /// Devuelve el número de líneas aceptadas.
    pub fn append_from_file<P: AsRef<Path>>(trie: &mut Trie, path: P) -> Result<usize> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let reader = BufReader::new(file);
        let mut count = 0;

        for (index, line_result) in reader.lines().enumerate() {
            let line = line_result.map_err(|source| Error::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let line = line.trim();

            // Ignorar líneas vacías y comentarios
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (word, info) = Self::parse_line(line).ok_or_else(|| Error::Lexicon {
                path: path.to_path_buf(),
                line: index + 1,
                message: format!("se esperaba 'forma|lema|etiquetas': {}", line),
            })?;

            trie.insert(word, info);
            count += 1;
        }

        Ok(count)
    }

    fn parse_line(line: &str) -> Option<(&str, WordInfo)> {
        let mut parts = line.split('|').map(str::trim);
        let word = parts.next().filter(|w| !w.is_empty())?;
        // Sin lema explícito, la forma es su propio lema
        let lemma = parts.next().filter(|l| !l.is_empty()).unwrap_or(word);
        let tags = parts
            .next()
            .map(|t| {
                t.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        Some((word, WordInfo::new(&lemma.to_lowercase(), tags)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;

    #[test]
    fn test_load_lexicon() {
        let test_file = "test_lexicon.txt";
        let mut file = File::create(test_file).unwrap();
        writeln!(file, "марта|март|NOUN,gent").unwrap();
        writeln!(file, "# comentario").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "хутор").unwrap();
        drop(file);

        let trie = DictionaryLoader::load_from_file(test_file).unwrap();
        fs::remove_file(test_file).unwrap();

        assert_eq!(trie.len(), 2);
        let info = trie.get("марта").unwrap();
        assert_eq!(info.lemma, "март");
        assert!(info.tags.contains("gent"));
        assert_eq!(trie.get("хутор").unwrap().lemma, "хутор");
        assert!(!trie.contains("# comentario"));
    }

    #[test]
    fn test_malformed_line_reports_position() {
        let test_file = "test_lexicon_bad.txt";
        let mut file = File::create(test_file).unwrap();
        writeln!(file, "город|город|NOUN").unwrap();
        writeln!(file, "|sin forma|").unwrap();
        drop(file);

        let result = DictionaryLoader::load_from_file(test_file);
        fs::remove_file(test_file).unwrap();

        match result {
            Err(Error::Lexicon { line, .. }) => assert_eq!(line, 2),
            other => panic!("Se esperaba error de léxico: {:?}", other.map(|t| t.len())),
        }
    }

    #[test]
    fn test_missing_file() {
        let result = DictionaryLoader::load_from_file("no_existe_lexicon.txt");
        assert!(matches!(result, Err(Error::Read { .. })));
    }
}
