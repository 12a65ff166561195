//! Tests de integración del procesamiento por lotes y del informe.

use std::fs;
use std::io::Write;

use extractor::config::ReportFormat;
use extractor::dictionary::{ProperNames, Trie};
use extractor::grammar::predicates::{and_, gram, is_capitalized};
use extractor::grammar::{FactKind, Grammar, GrammarError, Morphology, Rule, RuleElement, Slot};
use extractor::languages::russian::{self, Russian};
use extractor::languages::Language;
use extractor::records::{parse_records, read_records};
use extractor::report::save_report;
use extractor::Extractor;
use pretty_assertions::assert_eq;

const NEWS: &str = "\
sport\tЧемпион\tИван Петров родился 15 марта 1990 года в городе Москва.
politics\tВыборы\tАнна Смирнова родилась 2 мая 1970 в городе Казань.
линия без табуляций
science\tНаука\tЦены на нефть выросли.
culture\tКультура\tПоэт родился 3 октября 1895 года в селе Константиново.
";

fn create_test_extractor() -> Extractor {
    Extractor::for_language("ru").expect("Failed to create extractor")
}

#[test]
fn test_non_whitelisted_category_is_absent() {
    let extractor = create_test_extractor();
    let records = parse_records(NEWS.as_bytes()).unwrap();
    let entries = extractor.process(records);

    let categories: Vec<&str> = entries.iter().map(|e| e.category.as_str()).collect();
    assert_eq!(categories, vec!["sport", "science", "culture"]);
}

#[test]
fn test_batch_preserves_input_order_and_results() {
    let extractor = create_test_extractor();
    let entries = extractor.process(parse_records(NEWS.as_bytes()).unwrap());

    assert_eq!(entries[0].entry.names, vec!["Иван Петров"]);
    assert!(entries[1].entry.is_empty());
    assert_eq!(entries[2].entry.birth_dates, vec!["3 октябрь 1895"]);
    // Respaldo en minúsculas: el lugar capitalizado se pierde
    assert!(entries[2].entry.birth_places.is_empty());
}

#[test]
fn test_custom_category_whitelist() {
    let extractor = create_test_extractor().with_categories(vec!["politics".to_string()]);
    let entries = extractor.process(parse_records(NEWS.as_bytes()).unwrap());

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].entry.birth_places, vec!["Казань"]);
    assert_eq!(entries[0].entry.names, vec!["Анна Смирнова"]);
}

#[test]
fn test_file_round_trip_through_report() {
    let input_file = "test_batch_news.txt";
    let output_file = "test_batch_results.txt";
    let mut file = fs::File::create(input_file).unwrap();
    write!(file, "{}", NEWS).unwrap();
    drop(file);

    let extractor = create_test_extractor();
    let records = read_records(input_file).unwrap();
    let entries = extractor.process(records);
    save_report(output_file, &entries, ReportFormat::Text).unwrap();
    let report = fs::read_to_string(output_file).unwrap();

    fs::remove_file(input_file).unwrap();
    fs::remove_file(output_file).unwrap();

    assert!(report.starts_with(
        "Параграф 1 извлеченные данные (Категория: sport):\nИмена: Иван Петров\n"
    ));
    assert!(report.contains("Параграф 2 извлеченные данные (Категория: science):\nИмена: нет\n"));
    assert!(report.contains("Дата рождения: 3 октябрь 1895\nМесто рождения: нет\n"));
    assert!(!report.contains("politics"));
}

/// Ruso con una regla de nombres que nunca captura el apellido
struct FirstNameOnly(Russian);

impl Language for FirstNameOnly {
    fn code(&self) -> &str {
        self.0.code()
    }

    fn name(&self) -> &str {
        "ruso (solo nombre de pila)"
    }

    fn fold(&self, word: &str) -> String {
        self.0.fold(word)
    }

    fn configure_lexicon(&self, lexicon: &mut Trie) {
        self.0.configure_lexicon(lexicon);
    }

    fn configure_names(&self, names: &mut ProperNames) {
        self.0.configure_names(names);
    }

    fn guess_tags(&self, folded: &str) -> Vec<&'static str> {
        self.0.guess_tags(folded)
    }

    fn grammar(&self, morphology: &Morphology) -> Result<Grammar, GrammarError> {
        let mut grammar = russian::rules::grammar(morphology)?;
        grammar.name = Rule::new(
            "name",
            Some(FactKind::Name),
            vec![RuleElement::new(and_(vec![is_capitalized(), gram("Name")]))
                .interpretation(Slot::First)],
        )?;
        Ok(grammar)
    }
}

#[test]
fn test_interpretation_error_drops_only_that_paragraph() {
    let extractor = Extractor::with_data(
        Box::new(FirstNameOnly(Russian::new())),
        Trie::new(),
        ProperNames::new(),
    )
    .expect("Failed to create extractor");

    let input = "sport\tt\tИван пришёл\nmedia\tt\tв городе Тула\n";
    let records = parse_records(input.as_bytes()).unwrap();
    let entries = extractor.process(records);

    assert_eq!(entries.len(), 1, "Solo debe quedar el segundo párrafo");
    assert_eq!(entries[0].category, "media");
    assert_eq!(entries[0].entry.birth_places, vec!["Тула"]);
    assert!(entries[0].entry.names.is_empty());
}
