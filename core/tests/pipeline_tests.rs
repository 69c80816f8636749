use bucket_core::export::{read_csv, to_csv_string};
use bucket_core::matcher::categorize;
use bucket_core::stopwords::filter_stop_words;
use bucket_core::tokenizer::tokenize;
use bucket_core::{Analyzer, AnalyzerConfig, Assignment, CategoryDictionary, CompiledDictionary, MatchMode, Normalizer, StopWordSet};
use std::collections::{BTreeMap, BTreeSet};

fn analyzer(mode: MatchMode) -> Analyzer {
    Analyzer::new(&AnalyzerConfig { mode, ..Default::default() }).unwrap()
}

fn category_of(a: &Analyzer, word: &str) -> String {
    a.dictionary().name_of(a.dictionary().match_token(word)).to_string()
}

#[test]
fn army_general_scenario() {
    let sw = StopWordSet::english();
    let tokens = filter_stop_words(&tokenize("The army general ordered a protest march."), &sw, false);
    assert_eq!(tokens, vec!["army", "general", "ordered", "protest", "march"]);

    let a = analyzer(MatchMode::Exact);
    assert_eq!(category_of(&a, "general"), "Military Figures");
    assert_eq!(category_of(&a, "protest"), "Demonstrations");
    assert_eq!(category_of(&a, "march"), "Demonstrations");
    assert_eq!(category_of(&a, "army"), "Miscellaneous");
    assert_eq!(category_of(&a, "ordered"), "Miscellaneous");

    let report = a.categorize("The army general ordered a protest march.").unwrap();
    let rows: Vec<(&str, String)> = report.rows.iter().map(|r| (r.category.as_str(), r.joined_words())).collect();
    assert_eq!(
        rows,
        vec![
            ("Military Figures", "general".to_string()),
            ("Demonstrations", "march, protest".to_string()),
            ("Miscellaneous", "army, ordered".to_string()),
        ]
    );
    let misc: Vec<&str> = report.miscellaneous_top.iter().map(|w| w.word.as_str()).collect();
    assert_eq!(misc, vec!["army", "ordered"]);
}

#[test]
fn frequency_scenario() {
    let a = Analyzer::from_parts(StopWordSet::empty(), &CategoryDictionary::builtin().unwrap(), MatchMode::Exact);
    let top = a.top_words("fire fire flood fire flood").unwrap();
    let pairs: Vec<(&str, u32)> = top.iter().map(|w| (w.word.as_str(), w.count)).collect();
    assert_eq!(pairs, vec![("fire", 3), ("flood", 2)]);
}

#[test]
fn stemmed_scenario() {
    let exact = analyzer(MatchMode::Exact);
    let stemmed = analyzer(MatchMode::Stemmed);
    assert_eq!(category_of(&exact, "protesters"), "Miscellaneous");
    assert_eq!(category_of(&stemmed, "protesters"), "Demonstrations");
}

#[test]
fn blank_input_is_rejected() {
    let a = analyzer(MatchMode::Exact);
    for text in ["", "   ", "\n\t"] {
        assert!(a.categorize(text).is_err());
        assert!(a.top_words(text).is_err());
    }
    // non-blank input that tokenizes to nothing is fine
    assert!(a.categorize("!!! 2024").unwrap().rows.is_empty());
}

#[test]
fn first_declared_category_wins_in_builtin() {
    // "officer" (Military Figures) and "officers" (Law Enforcement) share a stem
    let stemmed = analyzer(MatchMode::Stemmed);
    assert_eq!(category_of(&stemmed, "officers"), "Military Figures");
    let exact = analyzer(MatchMode::Exact);
    assert_eq!(category_of(&exact, "officers"), "Law Enforcement");
}

#[test]
fn multi_word_keywords_stay_dead() {
    for mode in [MatchMode::Exact, MatchMode::Stemmed] {
        let a = analyzer(mode);
        let dead: Vec<&str> = a.dictionary().unmatchable_keywords().map(|(_, k)| k).collect();
        assert!(dead.contains(&"Prime Minister"));
        assert_eq!(category_of(&a, "prime"), "Miscellaneous");
        assert_eq!(category_of(&a, "minister"), "Political Figures");
    }
}

#[test]
fn rows_follow_declaration_order() {
    let a = analyzer(MatchMode::Exact);
    let report = a
        .categorize("zebra riot flood general election, riot again and a banana\nwar")
        .unwrap();
    let names = a.dictionary().names();
    let positions: Vec<usize> = report
        .rows
        .iter()
        .filter(|r| r.category != "Miscellaneous")
        .map(|r| names.iter().position(|n| *n == r.category).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(report.rows.last().unwrap().category, "Miscellaneous");
    assert_eq!(report.rows.last().unwrap().words, vec!["banana", "zebra"]);
}

#[test]
fn every_word_has_one_home() {
    let dict = CategoryDictionary::builtin().unwrap();
    let compiled = CompiledDictionary::compile(&dict, Normalizer::new(MatchMode::Stemmed));
    let tokens = tokenize("Soldiers and police clashed with protesters near the border; hospitals overwhelmed.");
    let result = categorize(&tokens, &compiled);
    assert_eq!(result.total_tokens(), tokens.len());
    for t in &tokens {
        let assigned = result.assignment_of(t).unwrap();
        assert_eq!(assigned, compiled.match_token(t));
    }
    assert_eq!(result.assignment_of("hospitals"), Some(Assignment::Category(11)));
}

#[test]
fn csv_export_round_trips() {
    let a = analyzer(MatchMode::Stemmed);
    let report = a
        .categorize("Protesters marched to parliament.\nPolice arrested dozens; hospitals report injuries.\nThe drought continues.")
        .unwrap();
    let csv = to_csv_string(&report.rows).unwrap();
    assert!(csv.starts_with("Category,Words\n"));
    let back = read_csv(csv.as_bytes()).unwrap();

    let as_map = |rows: &[bucket_core::Row]| -> BTreeMap<String, BTreeSet<String>> {
        rows.iter().map(|r| (r.category.clone(), r.words.iter().cloned().collect())).collect()
    };
    assert_eq!(as_map(&back), as_map(&report.rows));
    assert_eq!(back.last().map(|r| r.category.as_str()), Some("Miscellaneous"));
}

#[test]
fn frequency_table_shape() {
    let a = analyzer(MatchMode::Exact).with_limit(100);
    let mut text = String::new();
    for i in 0..150 {
        text.push_str(&format!("word{} ", "abcdefghijklmnopqrstuvwxyz".chars().nth(i % 26).unwrap()));
        text.push_str(&"x".repeat(2 + i % 7));
        text.push('\n');
    }
    let top = a.top_words(&text).unwrap();
    assert!(top.len() <= 100);
    assert!(top.windows(2).all(|w| w[0].count >= w[1].count));
    assert!(top.iter().all(|w| w.word.chars().count() > 1));
}
