//! Built-in Spanish reference tables.

/// Common Spanish letter pairs and their weights.
#[rustfmt::skip]
const SPANISH_BIGRAMS: &[(&str, f64)] = &[
    ("de", 4.5), ("en", 4.3), ("es", 4.0), ("la", 4.0), ("el", 3.8), ("qu", 3.2),
    ("re", 3.0), ("ra", 2.9), ("os", 2.8), ("ar", 2.8), ("co", 2.7), ("te", 2.7),
    ("an", 2.6), ("as", 2.6), ("er", 2.5), ("se", 2.5), ("or", 2.4), ("al", 2.4),
    ("ci", 2.3), ("to", 2.2), ("nt", 2.2), ("lo", 2.1), ("no", 2.1), ("pa", 2.0),
    ("po", 1.9), ("ma", 1.8), ("is", 1.8), ("ta", 1.8), ("in", 1.7), ("na", 1.7),
    ("ro", 1.7), ("mi", 1.6), ("li", 1.5), ("do", 1.5), ("ue", 1.5), ("me", 1.4),
    ("pe", 1.4), ("bi", 1.3), ("ga", 1.2), ("ya", 1.1), ("ve", 1.1), ("ho", 1.0),
    ("va", 1.0), ("mo", 1.0),
];

/// Common Spanish letter triples and their weights.
#[rustfmt::skip]
const SPANISH_TRIGRAMS: &[(&str, f64)] = &[
    ("que", 7.0), ("ent", 5.5), ("con", 5.0), ("los", 4.8), ("las", 4.6), ("del", 4.6),
    ("una", 4.5), ("por", 4.4), ("est", 4.2), ("ela", 3.8), ("aci", 3.5), ("ara", 3.0),
    ("res", 3.4), ("dos", 3.3), ("par", 3.2), ("pro", 3.2), ("men", 3.1), ("ion", 3.0),
    ("era", 2.9), ("tra", 2.9),
];

/// Frequent function words, spelled as written. Accented entries never
/// match normalized text and are dropped when the scorer is built.
#[rustfmt::skip]
const SPANISH_LEXICON: &[&str] = &[
    "de", "la", "que", "el", "en", "y", "a", "los", "se", "del", "las", "un", "por", "con",
    "no", "una", "su", "para", "es", "al", "lo", "como", "más", "pero", "sus", "le", "ya", "o",
    "este", "sí", "porque", "cuando", "muy", "sin", "sobre", "también", "me", "hasta",
];

/// Raw n-gram weights and lexicon words.
///
/// Entries are kept as strings; the [`Scorer`](super::Scorer) validates and
/// compiles them into dense lookups. When an n-gram appears twice the later
/// weight wins.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTables {
    pub bigrams: Vec<(String, f64)>,
    pub trigrams: Vec<(String, f64)>,
    pub lexicon: Vec<String>,
}

impl ScoreTables {
    pub fn spanish() -> Self {
        Self {
            bigrams: owned(SPANISH_BIGRAMS),
            trigrams: owned(SPANISH_TRIGRAMS),
            lexicon: SPANISH_LEXICON.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl Default for ScoreTables {
    fn default() -> Self {
        Self::spanish()
    }
}

fn owned(entries: &[(&str, f64)]) -> Vec<(String, f64)> {
    entries.iter().map(|(g, w)| (g.to_string(), *w)).collect()
}
