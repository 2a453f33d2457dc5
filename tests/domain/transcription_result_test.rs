use speakwell::domain::{TranscriptionResult, TranscriptionStatus};

#[test]
fn given_missing_file_result_when_serializing_then_only_status_and_message() {
    let json = serde_json::to_value(TranscriptionResult::not_found()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({ "status": "error", "message": "File not found" })
    );
}

#[test]
fn given_success_result_when_serializing_then_includes_text_and_language_code() {
    let result = TranscriptionResult::success(
        "um hello".to_string(),
        "answer.webm".to_string(),
        "German".to_string(),
        "de".to_string(),
    );

    let json = serde_json::to_value(&result).unwrap();

    assert!(result.is_success());
    assert_eq!(
        json,
        serde_json::json!({
            "status": "success",
            "text": "um hello",
            "filename": "answer.webm",
            "language": "German",
            "language_code": "de"
        })
    );
}

#[test]
fn given_failed_result_when_inspecting_then_carries_message_and_filename() {
    let result = TranscriptionResult::failed(
        "Error processing audio: boom".to_string(),
        "a.mp3".to_string(),
        "English".to_string(),
    );

    assert_eq!(result.status, TranscriptionStatus::Error);
    assert_eq!(result.filename.as_deref(), Some("a.mp3"));
    assert!(result.text.is_none());
    assert!(result.language_code.is_none());
}

#[test]
fn given_status_when_displaying_then_uses_lowercase() {
    assert_eq!(TranscriptionStatus::Success.to_string(), "success");
    assert_eq!(TranscriptionStatus::Error.to_string(), "error");
}
