//! Nombres de pila y apellidos rusos
//!
//! Los nombres de pila incorporados se declinan con reglas regulares para
//! reconocerlos en cualquier caso. Los apellidos se reconocen por sufijo.

use crate::dictionary::{NameRole, ProperNames};

/// Nombres masculinos más comunes
const MASCULINE_NAMES: &[&str] = &[
    "александр", "алексей", "анатолий", "андрей", "антон", "аркадий", "артём", "артем",
    "борис", "вадим", "валентин", "валерий", "василий", "виктор", "виталий", "владимир",
    "владислав", "вячеслав", "геннадий", "георгий", "глеб", "григорий", "даниил", "денис",
    "дмитрий", "евгений", "егор", "иван", "игорь", "илья", "кирилл", "константин", "лев",
    "леонид", "максим", "матвей", "михаил", "никита", "николай", "олег", "павел", "пётр",
    "петр", "роман", "руслан", "сергей", "станислав", "степан", "тимофей", "фёдор", "федор",
    "юрий", "ярослав", "лаврентий", "эдуард",
];

/// Nombres femeninos más comunes
const FEMININE_NAMES: &[&str] = &[
    "александра", "алина", "алла", "анастасия", "анна", "валентина", "валерия", "вера",
    "вероника", "виктория", "галина", "дарья", "екатерина", "елена", "елизавета", "жанна",
    "зинаида", "зоя", "инна", "ирина", "карина", "кристина", "ксения", "лариса", "людмила",
    "любовь", "маргарита", "марина", "мария", "надежда", "наталья", "наталия", "нина",
    "оксана", "ольга", "полина", "раиса", "светлана", "софья", "софия", "тамара",
    "татьяна", "ульяна", "юлия", "яна",
];

/// Apellidos frecuentes que no siguen los sufijos habituales
const IRREGULAR_SURNAMES: &[&str] = &[
    "толстой", "шевченко", "бондаренко", "коваленко", "гоголь", "блок", "цой", "ткачук",
    "мельник", "шмидт",
];

/// Sufijos de apellido (nominativo y casos oblicuos frecuentes)
const SURNAME_SUFFIXES: &[&str] = &[
    "ов", "ев", "ин", "ын", "ова", "ева", "ина", "ына", "овым", "евым", "иным", "ыным", "овой",
    "евой", "иной", "ыной", "ский", "цкий", "ская", "цкая", "ского", "цкого", "ской", "цкой",
];

/// Longitud mínima (en caracteres) para aplicar los sufijos de apellido
const MIN_SURNAME_LEN: usize = 5;

/// Registra los nombres incorporados con todas sus formas de caso
pub fn register_builtin_names(names: &mut ProperNames) {
    for name in MASCULINE_NAMES {
        for form in inflect_given_name(name, false) {
            names.insert(&form, name, NameRole::Given);
        }
    }
    for name in FEMININE_NAMES {
        for form in inflect_given_name(name, true) {
            names.insert(&form, name, NameRole::Given);
        }
    }
    for surname in IRREGULAR_SURNAMES {
        names.insert(surname, surname, NameRole::Surname);
    }
}

/// Nombres con vocal caediza en la raíz
const FLEETING_VOWEL: &[(&str, &str)] = &[("павел", "павл"), ("лев", "льв")];

const VELAR_OR_HUSHING: &[char] = &['г', 'к', 'х', 'ж', 'ш', 'ч', 'щ'];
const HUSHING: &[char] = &['ж', 'ш', 'ч', 'щ', 'ц'];

/// Formas del singular de un nombre de pila (incluye el nominativo)
pub fn inflect_given_name(name: &str, feminine: bool) -> Vec<String> {
    let (stem, endings): (&str, Vec<&str>) =
        if let Some((_, stem)) = FLEETING_VOWEL.iter().find(|(nominative, _)| *nominative == name) {
            (*stem, vec!["а", "у", "ом", "е"])
        } else if let Some(stem) = name.strip_suffix("ия") {
            (stem, vec!["ии", "ию", "ией"])
        } else if let Some(stem) = name.strip_suffix('я') {
            (stem, vec!["и", "е", "ю", "ей"])
        } else if let Some(stem) = name.strip_suffix('а') {
            let genitive = if ends_with_any(stem, VELAR_OR_HUSHING) { "и" } else { "ы" };
            let instrumental = if ends_with_any(stem, HUSHING) { "ей" } else { "ой" };
            (stem, vec![genitive, "е", "у", instrumental])
        } else if let Some(stem) = name.strip_suffix("ий") {
            (stem, vec!["ия", "ию", "ием", "ии"])
        } else if let Some(stem) = name.strip_suffix('ь') {
            if feminine {
                (stem, vec!["и", "ью"])
            } else {
                (stem, vec!["я", "ю", "ем", "е"])
            }
        } else if let Some(stem) = name.strip_suffix('й') {
            (stem, vec!["я", "ю", "ем", "е"])
        } else {
            (name, vec!["а", "у", "ом", "е"])
        };

    std::iter::once(name.to_string())
        .chain(endings.iter().map(|ending| format!("{}{}", stem, ending)))
        .collect()
}

fn ends_with_any(word: &str, letters: &[char]) -> bool {
    word.chars().last().is_some_and(|c| letters.contains(&c))
}

/// ¿Parece un apellido por su terminación?
pub fn looks_like_surname(folded: &str) -> bool {
    folded.chars().count() >= MIN_SURNAME_LEN
        && SURNAME_SUFFIXES.iter().any(|suffix| folded.ends_with(suffix))
}
