use std::io::Write;

use super::*;

const TEST_RULES: &str = r#"
[
    {
        "source": {
            "name": "process1"
        },
        "destinations": [
            {
                "name": "process2"
            },
            {
                "name": "process3"
            }
        ]
    },
    {
        "source": {
            "name": "process2"
        },
        "destinations": [
            {
                "name": "process1"
            }
        ]
    }
]
"#;

fn test_set() -> RuleSet {
    RuleSet::parse(TEST_RULES).expect("test rules should parse")
}

#[test]
fn listed_pairs_are_allowed() {
    let id1 = PeerId::new("process1", 111);
    let id2 = PeerId::new("process2", 222);
    let id3 = PeerId::new("process3", 333);
    let rules = test_set();

    assert_eq!(rules.decide(&id1, &id2), Verdict::Allow);
    assert_eq!(rules.decide(&id1, &id3), Verdict::Allow);
    assert_eq!(rules.decide(&id2, &id1), Verdict::Allow);
}

#[test]
fn unlisted_pairs_are_rejected() {
    let id1 = PeerId::new("process1", 111);
    let id2 = PeerId::new("process2", 222);
    let id3 = PeerId::new("process3", 333);
    let id4 = PeerId::new("process4", 444);
    let rules = test_set();

    assert_eq!(rules.decide(&id1, &id4), Verdict::DisallowedDestination);
    assert_eq!(rules.decide(&id2, &id3), Verdict::DisallowedDestination);
    assert_eq!(rules.decide(&id3, &id1), Verdict::SourceUnknown);
    assert_eq!(rules.decide(&id4, &id1), Verdict::SourceUnknown);
    assert_eq!(rules.decide(&id4, &id3), Verdict::SourceUnknown);
}

#[test]
fn matching_ignores_the_numeric_id() {
    let rules = test_set();
    assert_eq!(
        rules.decide(&PeerId::new("process1", 999), &PeerId::new("process2", 0)),
        Verdict::Allow
    );
}

#[test]
fn load_reads_a_rules_file() {
    let mut file = tempfile::NamedTempFile::new().expect("cannot create temp file");
    file.write_all(TEST_RULES.as_bytes()).expect("cannot write temp file");

    let rules = RuleSet::load(file.path()).expect("rules file should load");
    assert_eq!(
        rules.decide(&PeerId::new("process1", 1), &PeerId::new("process2", 2)),
        Verdict::Allow
    );
}

#[test]
fn missing_file_is_a_read_error() {
    let err = RuleSet::load(Path::new("definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, RulesError::Read { .. }));
}

#[test]
fn invalid_document_is_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().expect("cannot create temp file");
    file.write_all(b"{ not rules }").expect("cannot write temp file");

    let err = RuleSet::load(file.path()).unwrap_err();
    assert!(matches!(err, RulesError::Parse { .. }));
}
