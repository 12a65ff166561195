//! Vocabulario cerrado del ruso: meses, tipos de localidad y verbos de nacimiento
//!
//! Cada entrada es `(forma canónica, formas flexionadas)`. Las formas se
//! escriben literalmente, incluidas las variantes con "ё".

/// Meses en todos los casos del singular
pub const MONTHS: &[(&str, &[&str])] = &[
    ("январь", &["января", "январю", "январём", "январем", "январе"]),
    ("февраль", &["февраля", "февралю", "февралём", "февралем", "феврале"]),
    ("март", &["марта", "марту", "мартом", "марте"]),
    ("апрель", &["апреля", "апрелю", "апрелем", "апреле"]),
    ("май", &["мая", "маю", "маем", "мае"]),
    ("июнь", &["июня", "июню", "июнем", "июне"]),
    ("июль", &["июля", "июлю", "июлем", "июле"]),
    ("август", &["августа", "августу", "августом", "августе"]),
    ("сентябрь", &["сентября", "сентябрю", "сентябрём", "сентябрем", "сентябре"]),
    ("октябрь", &["октября", "октябрю", "октябрём", "октябрем", "октябре"]),
    ("ноябрь", &["ноября", "ноябрю", "ноябрём", "ноябрем", "ноябре"]),
    ("декабрь", &["декабря", "декабрю", "декабрём", "декабрем", "декабре"]),
];

/// Palabras que introducen el nombre de una localidad
pub const SETTLEMENTS: &[(&str, &[&str])] = &[
    ("город", &["города", "городу", "городом", "городе"]),
    ("село", &["села", "селу", "селом", "селе"]),
    (
        "поселок",
        &[
            "посёлок", "посёлка", "поселка", "посёлку", "поселку", "посёлком", "поселком",
            "посёлке", "поселке",
        ],
    ),
    ("деревня", &["деревни", "деревне", "деревню", "деревней", "деревнею"]),
];

/// Formas del verbo "nacer" y del participio pasivo correspondiente
pub const BIRTH_VERBS: &[(&str, &[&str])] = &[
    ("родиться", &["родился", "родилась", "родилось", "родились"]),
    (
        "рожденный",
        &[
            "рожден", "рождён", "рождена", "рождено", "рождены", "рождённый", "рождённая",
            "рождённое", "рождённые", "рождённого", "рождённой", "рождённому", "рождённым",
            "рождённом", "рождённую", "рождёнными", "рождённых",
        ],
    ),
];

/// Palabras con las que se escriben las reglas de lugar
pub const SETTLEMENT_WORDS: &[&str] = &["город", "село", "поселок", "деревня"];

/// Formas que disparan la fase de respaldo
pub const BIRTH_TRIGGERS: &[&str] = &["родился", "рожден", "родилась", "рождена"];

/// Etiquetas asignadas a cada tabla al cargarla en el léxico
pub const MONTH_TAGS: &[&str] = &["NOUN", "masc", "Month"];
pub const SETTLEMENT_TAGS: &[&str] = &["NOUN", "Settlement"];
pub const BIRTH_VERB_TAGS: &[&str] = &["VERB", "Birth"];
