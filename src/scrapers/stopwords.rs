//! Stopword lists used to score candidate text blocks.
//!
//! A block of running prose contains many function words ("der", "und",
//! "the", "and"); navigation, captions and boilerplate contain few. Counting
//! them is the main signal for locating the article body.

use super::language::Language;
use once_cell::sync::Lazy;
use std::collections::HashSet;

const GERMAN: &[&str] = &[
    "aber", "alle", "allem", "allen", "aller", "alles", "als", "also", "am", "an", "ander",
    "andere", "anderen", "anderer", "anders", "auch", "auf", "aus", "bei", "bin", "bis", "bist",
    "da", "damit", "dann", "das", "dass", "daß", "dem", "den", "denn", "der", "des", "dich", "die",
    "dies", "diese", "diesem", "diesen", "dieser", "dieses", "dir", "doch", "dort", "du", "durch",
    "ein", "eine", "einem", "einen", "einer", "eines", "einig", "einige", "er", "es", "etwas",
    "euch", "euer", "für", "gegen", "gewesen", "hab", "habe", "haben", "hat", "hatte", "hatten",
    "hier", "hin", "hinter", "ich", "ihm", "ihn", "ihnen", "ihr", "ihre", "ihrem", "ihren",
    "ihrer", "im", "in", "indem", "ins", "ist", "jede", "jedem", "jeden", "jeder", "jetzt",
    "kann", "kein", "keine", "können", "man", "manche", "mein", "meine", "mich", "mir", "mit",
    "muss", "nach", "nicht", "nichts", "noch", "nun", "nur", "ob", "oder", "ohne", "sehr", "sein",
    "seine", "seinem", "seinen", "seiner", "selbst", "sich", "sie", "sind", "so", "solche",
    "soll", "sondern", "sonst", "über", "um", "und", "uns", "unser", "unter", "viel", "vom",
    "von", "vor", "war", "waren", "warst", "was", "weil", "welche", "wenn", "werde", "werden",
    "wie", "wieder", "will", "wir", "wird", "wo", "wollen", "würde", "würden", "zu", "zum",
    "zur", "zwar", "zwischen",
];

const ENGLISH: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him",
    "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me", "more",
    "most", "my", "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other",
    "our", "out", "over", "own", "said", "same", "she", "should", "so", "some", "such", "than",
    "that", "the", "their", "them", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "under", "until", "up", "very", "was", "we", "were", "what", "when",
    "where", "which", "while", "who", "whom", "why", "will", "with", "would", "you", "your",
];

static GERMAN_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| GERMAN.iter().copied().collect());
static ENGLISH_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| ENGLISH.iter().copied().collect());

/// The stopword set for `language`.
pub fn for_language(language: Language) -> &'static HashSet<&'static str> {
    match language {
        Language::German => &GERMAN_SET,
        Language::English => &ENGLISH_SET,
    }
}

/// Count the stopwords in `text`, ignoring case and surrounding punctuation.
pub fn count(text: &str, language: Language) -> usize {
    let words = for_language(language);
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .filter(|w| words.contains(w.as_str()))
        .count()
}
