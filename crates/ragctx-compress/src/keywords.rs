//! Query keyword extraction.
use regex::Regex;
use std::sync::LazyLock;

static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s'-]").expect("static regex"));
static QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""([^"]+)""#).expect("static regex"));

/// French and English function words ignored as keywords.
pub const STOP_WORDS: &[&str] = &[
    // French
    "les", "des", "une", "est", "sont", "dans", "pour", "par", "sur", "avec", "sans", "sous", "entre", "vers",
    "chez", "aux", "du", "que", "qui", "quoi", "dont", "où", "quel", "quelle", "quels", "quelles", "comment",
    "pourquoi", "quand", "mais", "donc", "car", "ainsi", "alors", "aussi", "plus", "moins", "très", "tout",
    "tous", "toute", "toutes", "cette", "ces", "cet", "son", "sa", "ses", "leur", "leurs", "nous", "vous",
    "ils", "elles", "elle", "lui", "eux", "été", "être", "avoir", "fait", "faire", "peut", "comme", "même",
    "pas", "non", "oui", "ont", "était", "avait", "sera", "selon", "depuis", "pendant", "avant",
    "après", "contre", "parmi",
    // English
    "the", "and", "for", "are", "was", "were", "with", "from", "that", "this", "these", "those", "what",
    "which", "who", "whom", "whose", "when", "where", "why", "how", "into", "about", "over", "under", "than",
    "then", "there", "their", "they", "them", "his", "her", "its", "our", "your", "has", "have", "had",
    "been", "being", "not", "but", "all", "any", "can", "could", "would", "should", "does", "did", "doing",
    "will", "shall", "may", "might", "must", "also", "such", "between", "during", "before", "after",
    "against", "among",
];

pub fn is_stop_word(token: &str) -> bool { STOP_WORDS.contains(&token) }

/// Keywords of a query: lowercased tokens longer than two characters that are
/// not stop words, plus every double-quoted phrase of the original query.
///
/// Duplicates are dropped case-insensitively; first occurrence wins.
pub fn extract_keywords(query: &str) -> Vec<String> {
    let lowered = query.to_lowercase();
    let cleaned = DISALLOWED.replace_all(&lowered, "");

    let mut keywords: Vec<String> = Vec::new();
    let mut push = |candidate: &str| {
        if !keywords.iter().any(|k| k.to_lowercase() == candidate.to_lowercase()) {
            keywords.push(candidate.to_string());
        }
    };

    for token in cleaned.split_whitespace() {
        if token.chars().count() <= 2 || is_stop_word(token) {
            continue;
        }
        push(token);
    }
    for caps in QUOTED.captures_iter(query) {
        let phrase = caps[1].trim();
        if !phrase.is_empty() {
            push(phrase);
        }
    }
    keywords
}
