/// Splits `text` into trimmed sentences.
///
/// A boundary is `.`, `!` or `?` followed by whitespace and then an uppercase
/// letter, so "M. de la Fayette" stays whole while "M. Lafayette" is split
/// after "M.".
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let end = i + c.len_utf8();
        let rest = &text[end..];
        let next = rest.trim_start();
        let gap = rest.len() - next.len();
        if gap > 0 && next.chars().next().is_some_and(char::is_uppercase) {
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = end + gap;
        }
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}
