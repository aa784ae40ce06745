//! Routing behavior of the built-in keyword table

use proptest::prelude::*;
use std::sync::Arc;
use std::thread;
use triage_classifiers::prelude::*;

fn classifier() -> KeywordClassifier {
    KeywordClassifier::builtin().expect("built-in classifier")
}

#[test]
fn test_no_keyword_input() {
    let c = classifier();
    assert_eq!(c.classify(Some("the weather is nice today")), None);
    assert_eq!(c.classify(Some("?!... ,,, ;;")), None);
}

#[test]
fn test_single_department_match() {
    let c = classifier();
    assert_eq!(
        c.classify(Some("my truck broke down during the shipment delivery")),
        Some(Department::Logistics)
    );
}

#[test]
fn test_tie_break_prefers_enumeration_order() {
    let c = classifier();

    for text in ["cargo pump", "pump cargo", "the pump leaks near the cargo bay"] {
        let scores = c.scores(text);
        assert_eq!(scores.get(Department::Logistics), 1, "{text}");
        assert_eq!(scores.get(Department::Maintenance), 1, "{text}");
        assert_eq!(c.classify(Some(text)), Some(Department::Logistics), "{text}");
    }

    // IT Support precedes Human Resources
    assert_eq!(c.classify(Some("payroll update")), Some(Department::ItSupport));
}

#[test]
fn test_case_insensitive() {
    let c = classifier();
    let upper = c.classify_detailed(Some("SECURITY BREACH AT THE GATE"));
    let lower = c.classify_detailed(Some("security breach at the gate"));

    assert_eq!(upper.department, Some(Department::Security));
    assert_eq!(upper.department, lower.department);
    assert_eq!(upper.scores, lower.scores);
}

#[test]
fn test_punctuation_robustness() {
    let c = classifier();
    assert_eq!(
        c.classify(Some("power!! outage, need repair-technician ASAP.")),
        Some(Department::Maintenance)
    );
}

#[test]
fn test_very_long_description() {
    let c = classifier();
    let text = "truck ".repeat(1_000_000);

    let result = c.classify_detailed(Some(&text));
    assert_eq!(result.department, Some(Department::Logistics));
    assert_eq!(result.scores.get(Department::Logistics), 1_000_000);
    assert_eq!(result.scores.total(), 1_000_000);
}

#[test]
fn test_accented_letters_are_kept() {
    let c = classifier();
    // "hér" stays one token with its accent, so it never contains "hr"
    assert_eq!(c.scores("hér").total(), 0);
    assert_eq!(c.classify(Some("hér")), None);
    assert_eq!(c.classify(Some("hr")), Some(Department::HumanResources));
}

#[test]
fn test_score_accumulation() {
    let c = classifier();
    let text = "Our fleet courier van and freight truck are stuck while the pump and generator failed";
    let scores = c.scores(text);

    assert_eq!(scores.get(Department::Logistics), 5);
    assert_eq!(scores.get(Department::Maintenance), 2);
    assert_eq!(c.classify(Some(text)), Some(Department::Logistics));
}

#[test]
fn test_local_config_copy_is_isolated() {
    let table = KeywordTable::builtin();
    let c = KeywordClassifier::new(table.clone()).unwrap();
    let before = c.classify(Some("the printer is jammed"));

    let mut copy = table.to_config();
    copy.departments.get_mut(&Department::ItSupport).unwrap().clear();
    copy.departments
        .get_mut(&Department::HumanResources)
        .unwrap()
        .push("printer".to_string());
    let edited = KeywordClassifier::new(Arc::new(KeywordTable::from_config(&copy).unwrap())).unwrap();

    assert_eq!(before, Some(Department::ItSupport));
    assert_eq!(
        edited.classify(Some("the printer is jammed")),
        Some(Department::HumanResources)
    );
    assert_eq!(c.classify(Some("the printer is jammed")), before);
    assert_eq!(
        KeywordClassifier::builtin().unwrap().classify(Some("the printer is jammed")),
        before
    );
}

#[test]
fn test_shared_across_threads() {
    let c = Arc::new(classifier());
    let texts = [
        "guard patrol reported theft",
        "salary and overtime questions",
        "wifi login error",
        "",
    ];

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let c = Arc::clone(&c);
            thread::spawn(move || texts.map(|t| c.classify(Some(t))))
        })
        .collect();

    for handle in handles {
        assert_eq!(
            handle.join().unwrap(),
            [
                Some(Department::Security),
                Some(Department::HumanResources),
                Some(Department::ItSupport),
                None,
            ]
        );
    }
}

#[test]
fn test_whole_text_strategy_from_config() {
    let mut config = KeywordConfig::builtin().unwrap();
    config.strategy = MatchStrategy::WholeText;
    let c = KeywordClassifier::new(Arc::new(KeywordTable::from_config(&config).unwrap())).unwrap();

    assert_eq!(c.strategy(), MatchStrategy::WholeText);
    assert_eq!(c.classify(Some("the air conditioning is out")), Some(Department::Maintenance));
    assert_eq!(
        c.classify(Some("my truck broke down during the shipment delivery")),
        Some(Department::Logistics)
    );
}

proptest! {
    #[test]
    fn prop_classification_is_deterministic(text in "\\PC{0,200}") {
        let c = classifier();
        let first = c.classify_detailed(Some(&text));
        let second = c.classify_detailed(Some(&text));
        prop_assert_eq!(first.department, second.department);
        prop_assert_eq!(first.scores, second.scores);
    }

    #[test]
    fn prop_no_match_only_at_zero(text in "[a-zA-Z !?,.-]{0,120}") {
        let c = classifier();
        let result = c.classify_detailed(Some(&text));
        prop_assert_eq!(result.department.is_none(), result.scores.total() == 0);
        if let Some(dept) = result.department {
            let top = result.scores.iter().map(|(_, s)| s).max().unwrap_or(0);
            prop_assert_eq!(result.scores.get(dept), top);
        }
    }

    #[test]
    fn prop_case_does_not_matter(text in "[a-z ]{0,80}") {
        let c = classifier();
        prop_assert_eq!(c.scores(&text), c.scores(&text.to_uppercase()));
    }
}
