use ragctx_compress::{extract_keywords, jaccard_similarity, score_sentence, split_sentences};

#[test]
fn keywords_drop_short_tokens_and_stop_words() {
    let kws = extract_keywords("What were the causes of the Battle of Verdun?");
    assert_eq!(kws, vec!["causes".to_string(), "battle".to_string(), "verdun".to_string()]);

    let kws = extract_keywords("Quelles sont les causes de la révolution de 1848");
    assert_eq!(kws, vec!["causes".to_string(), "révolution".to_string(), "1848".to_string()]);
}

#[test]
fn keywords_keep_apostrophes_hyphens_and_quoted_phrases() {
    let kws = extract_keywords(r#"l'armée franco-prussienne "Traité de Francfort""#);
    assert!(kws.contains(&"l'armée".to_string()));
    assert!(kws.contains(&"franco-prussienne".to_string()));
    assert!(kws.contains(&"Traité de Francfort".to_string()), "phrase keeps original case: {kws:?}");
    assert!(kws.contains(&"traité".to_string()));
}

#[test]
fn keywords_are_unique_and_empty_query_yields_none() {
    let kws = extract_keywords(r#"Verdun verdun "Verdun""#);
    assert_eq!(kws, vec!["verdun".to_string()]);
    assert!(extract_keywords("").is_empty());
    assert!(extract_keywords("   of the et la   ").is_empty());
}

#[test]
fn sentences_split_on_punctuation_before_uppercase() {
    let text = "The siege began in February. It lasted ten months! Was it worth it? Historians disagree.";
    assert_eq!(
        split_sentences(text),
        vec!["The siege began in February.", "It lasted ten months!", "Was it worth it?", "Historians disagree."]
    );
}

#[test]
fn sentences_keep_abbreviations_with_lowercase_continuation() {
    let text = "Il écrit env. trois mille lettres. Élisabeth les conserve.";
    assert_eq!(split_sentences(text), vec!["Il écrit env. trois mille lettres.", "Élisabeth les conserve."]);

    assert_eq!(split_sentences("No boundary here.No space."), vec!["No boundary here.No space."]);
    assert_eq!(split_sentences("   "), Vec::<&str>::new());
}

#[test]
fn sentences_split_abbreviation_only_before_uppercase() {
    assert_eq!(
        split_sentences("Il rencontre M. de la Fayette. Puis part."),
        vec!["Il rencontre M. de la Fayette.", "Puis part."]
    );
    assert_eq!(
        split_sentences("Il rencontre M. Lafayette. Puis part."),
        vec!["Il rencontre M.", "Lafayette.", "Puis part."]
    );
}

#[test]
fn jaccard_ignores_case_and_punctuation() {
    assert!((jaccard_similarity("A b c", "a B c.") - 1.0).abs() < 1e-12);
    assert!((jaccard_similarity("a b", "b c") - 1.0 / 3.0).abs() < 1e-12);
    assert_eq!(jaccard_similarity("", ""), 0.0);
}

#[test]
fn sentence_score_components() {
    let kws = vec!["verdun".to_string(), "battle".to_string()];
    let long = "The Battle of Verdun was fought between February and December 1916.";
    assert!(long.chars().count() >= 50);
    // two keywords + full query + first-position bonus
    let s = score_sentence(long, 0, "Battle of Verdun", &kws);
    assert!((s - 4.3).abs() < 1e-9, "score was {s}");

    // positional bonus decays to zero
    let s = score_sentence(long, 10, "Battle of Verdun", &kws);
    assert!((s - 4.0).abs() < 1e-9, "score was {s}");

    // short sentences are halved
    let s = score_sentence("Verdun held.", 1, "Battle of Verdun", &kws);
    assert!((s - (1.0 + 0.25) * 0.5).abs() < 1e-9, "score was {s}");

    // empty query earns no full-query bonus
    let s = score_sentence(long, 10, "", &[]);
    assert_eq!(s, 0.0);
}
