use speakwell::application::services::{ContentJudgment, JudgmentParseError};

#[test]
fn given_valid_json_when_parsing_then_returns_judgment() {
    let raw = r#"{"relevance_score": 20, "quality_score": 17.5,
                  "relevance_feedback": "On topic", "quality_feedback": "Clear"}"#;

    let judgment = ContentJudgment::parse(raw).unwrap();

    assert_eq!(judgment.relevance_score, 20.0);
    assert_eq!(judgment.quality_score, 17.5);
    assert_eq!(judgment.relevance_feedback, "On topic");
    assert_eq!(judgment.content_points(), 37.5);
    assert!(judgment.is_relevant());
}

#[test]
fn given_fenced_json_when_parsing_then_accepts_it() {
    let raw = "```json\n{\"relevance_score\": 3, \"quality_score\": 2, \"relevance_feedback\": \"Off\", \"quality_feedback\": \"Weak\"}\n```";

    let judgment = ContentJudgment::parse(raw).unwrap();

    assert_eq!(judgment.relevance_score, 3.0);
    assert!(!judgment.is_relevant());
}

#[test]
fn given_python_literal_when_parsing_then_rejects_it() {
    let raw = "{'relevance_score': 20, 'quality_score': 20, 'relevance_feedback': 'a', 'quality_feedback': 'b'}";

    assert!(matches!(
        ContentJudgment::parse(raw),
        Err(JudgmentParseError::Malformed(_))
    ));
}

#[test]
fn given_prose_around_json_when_parsing_then_rejects_it() {
    let raw = r#"Here is my analysis: {"relevance_score": 20, "quality_score": 20, "relevance_feedback": "a", "quality_feedback": "b"}"#;

    assert!(ContentJudgment::parse(raw).is_err());
}

#[test]
fn given_missing_field_when_parsing_then_rejects_it() {
    let raw = r#"{"relevance_score": 20, "quality_score": 20, "relevance_feedback": "a"}"#;

    assert!(matches!(
        ContentJudgment::parse(raw),
        Err(JudgmentParseError::Malformed(_))
    ));
}

#[test]
fn given_string_score_when_parsing_then_rejects_it() {
    let raw = r#"{"relevance_score": "20", "quality_score": 20, "relevance_feedback": "a", "quality_feedback": "b"}"#;

    assert!(ContentJudgment::parse(raw).is_err());
}

#[test]
fn given_out_of_range_score_when_parsing_then_rejects_it() {
    let raw = r#"{"relevance_score": 20, "quality_score": 40, "relevance_feedback": "a", "quality_feedback": "b"}"#;

    assert!(matches!(
        ContentJudgment::parse(raw),
        Err(JudgmentParseError::OutOfRange { field: "quality_score", .. })
    ));
}

#[test]
fn given_negative_score_when_parsing_then_rejects_it() {
    let raw = r#"{"relevance_score": -1, "quality_score": 10, "relevance_feedback": "a", "quality_feedback": "b"}"#;

    assert!(matches!(
        ContentJudgment::parse(raw),
        Err(JudgmentParseError::OutOfRange { field: "relevance_score", .. })
    ));
}
