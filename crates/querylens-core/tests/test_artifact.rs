use querylens_core::api::{parse_describe, parse_random_questions, resolve_image_url};
use querylens_core::artifact::{QuestionAnswer, TableArtifact};
use querylens_core::error::QueryLensError;
use querylens_core::notice::{Notice, NoticeLevel};
use querylens_core::questions::{clean_question, QuestionCache};
use serde_json::json;

// ---------------------------------------------------------------------------
// /question responses
// ---------------------------------------------------------------------------

#[test]
fn test_question_answer_with_image_and_table() {
    let body = json!({
        "df": {"columns": ["genre", "tracks"], "rows": [
            {"genre": "Rock", "tracks": 1297},
            {"genre": "Latin", "tracks": 579}
        ]},
        "image_url": "/srv/app/frontend/static/plots/plot_20240101_120000.svg",
        "should_plot": true
    })
    .to_string();

    let answer = QuestionAnswer::from_json(&body).unwrap();
    assert!(answer.should_plot);
    assert!(answer.artifact.has_image());
    let table = answer.artifact.table.unwrap();
    assert_eq!(table.columns, vec!["genre", "tracks"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.cell_text(0, "genre"), "Rock");
    assert_eq!(table.cell_text(1, "tracks"), "579");
}

#[test]
fn test_question_answer_stringified_none_image_is_absent() {
    let body = json!({
        "df": {"columns": ["a"], "rows": [{"a": 1}]},
        "image_url": "None",
        "should_plot": false
    })
    .to_string();
    let answer = QuestionAnswer::from_json(&body).unwrap();
    assert!(!answer.artifact.has_image());
    assert!(answer.artifact.has_rows());
}

#[test]
fn test_question_answer_without_image_or_rows_is_missing_image() {
    let body = json!({
        "df": {"columns": [], "rows": []},
        "image_url": "",
        "should_plot": true
    })
    .to_string();
    let err = QuestionAnswer::from_json(&body).unwrap_err();
    assert!(matches!(err, QueryLensError::MissingImage));
    assert!(err.is_malformed_artifact());
}

#[test]
fn test_question_answer_null_df() {
    let body = json!({"df": null, "image_url": "plots/p.png", "should_plot": true}).to_string();
    let answer = QuestionAnswer::from_json(&body).unwrap();
    assert!(answer.artifact.table.is_none());
    assert_eq!(answer.artifact.image_ref.as_deref(), Some("plots/p.png"));
}

#[test]
fn test_question_answer_malformed_rows() {
    let body = json!({"df": {"columns": ["a"], "rows": [1, 2]}, "image_url": "p.png"}).to_string();
    let err = QuestionAnswer::from_json(&body).unwrap_err();
    assert!(matches!(err, QueryLensError::MalformedTable(_)), "got: {err}");
}

#[test]
fn test_question_answer_df_not_object() {
    let body = json!({"df": [1, 2, 3], "image_url": "p.png"}).to_string();
    let err = QuestionAnswer::from_json(&body).unwrap_err();
    assert!(err.to_string().contains("an array"), "got: {err}");
}

#[test]
fn test_question_answer_invalid_json() {
    let err = QuestionAnswer::from_json("<html>").unwrap_err();
    assert!(matches!(err, QueryLensError::Json(_)));
    assert!(!err.is_malformed_artifact());
}

#[test]
fn test_table_columns_inferred_from_rows() {
    let table = TableArtifact::from_value(json!({"rows": [{"b": 1, "a": null}]})).unwrap();
    assert_eq!(table.columns, vec!["b", "a"]);
    assert_eq!(table.cell_text(0, "a"), "");
    assert_eq!(table.cell_text(5, "a"), "");
}

// ---------------------------------------------------------------------------
// Other endpoints
// ---------------------------------------------------------------------------

#[test]
fn test_parse_describe_keeps_key_order() {
    let body = r#"{"rows": [{"table": "albums", "column": "Title", "type": "NVARCHAR"}]}"#;
    let table = parse_describe(body).unwrap();
    assert_eq!(table.columns, vec!["table", "column", "type"]);
    assert_eq!(table.cell_text(0, "type"), "NVARCHAR");
}

#[test]
fn test_parse_describe_empty() {
    let table = parse_describe(r#"{"rows": []}"#).unwrap();
    assert!(table.is_empty());
    assert!(table.columns.is_empty());
}

#[test]
fn test_parse_random_questions_mixed_items() {
    let body = r#"{"questions": ["Top 5 artists by sales?", {"text": "Revenue per genre?"}]}"#;
    let questions = parse_random_questions(body).unwrap();
    assert_eq!(questions, vec!["Top 5 artists by sales?", "Revenue per genre?"]);
}

#[test]
fn test_wrong_shaped_payloads_are_malformed() {
    let describe = parse_describe(r#"{"rows": [1, 2]}"#).unwrap_err();
    assert!(matches!(describe, QueryLensError::MalformedTable(_)), "{describe}");
    assert_eq!(Notice::from_error("Describe", &describe).level, NoticeLevel::Alert);

    let questions = parse_random_questions(r#"{"questions": [42]}"#).unwrap_err();
    assert!(matches!(questions, QueryLensError::MalformedTable(_)), "{questions}");

    // Same shape on /question is classified the same way.
    let answer = QuestionAnswer::from_json(r#"{"df": {"rows": [1, 2]}}"#).unwrap_err();
    assert_eq!(
        Notice::from_error("Question", &answer).level,
        Notice::from_error("Describe", &describe).level
    );
}

#[test]
fn test_invalid_json_payload_stays_fetch_error() {
    let err = parse_describe("<html>gateway timeout</html>").unwrap_err();
    assert!(matches!(err, QueryLensError::Json(_)));
    assert_eq!(Notice::from_error("Describe", &err).level, NoticeLevel::Error);
}

#[test]
fn test_resolve_image_url() {
    let base = "http://localhost:8000";
    assert_eq!(
        resolve_image_url(base, "/srv/app/frontend/static/plots/p.svg"),
        "http://localhost:8000/static/plots/p.svg"
    );
    assert_eq!(
        resolve_image_url(base, "C:\\app\\frontend\\static\\plots\\p.png"),
        "http://localhost:8000/static/plots/p.png"
    );
    assert_eq!(resolve_image_url(base, "https://cdn/x.png"), "https://cdn/x.png");
    assert_eq!(resolve_image_url("http://h/", "/img/a.png"), "http://h/img/a.png");
    assert_eq!(resolve_image_url(base, "plots/a.png"), "http://localhost:8000/plots/a.png");
}

// ---------------------------------------------------------------------------
// Question cache
// ---------------------------------------------------------------------------

#[test]
fn test_clean_question_strips_numbering() {
    assert_eq!(clean_question("3. Which genre sells most?").as_deref(), Some("Which genre sells most?"));
    assert_eq!(clean_question("- Top albums?").as_deref(), Some("Top albums?"));
    assert_eq!(clean_question("  12.  "), None);
    assert_eq!(clean_question("Hi?"), None);
}

#[test]
fn test_question_cache_refill_and_drain() {
    let mut cache = QuestionCache::new();
    let added = cache.refill(vec![
        "1. First question?".to_string(),
        "First question?".to_string(),
        "ok".to_string(),
        "2. Second question?".to_string(),
    ]);
    assert_eq!(added, 2);
    assert_eq!(cache.next_question().as_deref(), Some("First question?"));
    assert_eq!(cache.next_question().as_deref(), Some("Second question?"));
    assert_eq!(cache.next_question(), None);
    assert!(cache.is_empty());
}

// ---------------------------------------------------------------------------
// Notices
// ---------------------------------------------------------------------------

#[test]
fn test_notice_levels_from_errors() {
    let alert = Notice::from_error("Ask", &QueryLensError::MissingImage);
    assert_eq!(alert.level, NoticeLevel::Alert);
    assert!(alert.text.starts_with("Ask failed:"));

    let fetch = Notice::from_error(
        "Describe",
        &QueryLensError::Status {
            status: 500,
            path: "/describe".into(),
            detail: Some("boom".into()),
        },
    );
    assert_eq!(fetch.level, NoticeLevel::Error);
    assert_eq!(fetch.text, "Describe failed: Server returned 500 for /describe: boom");
    assert!(fetch.is_failure());
    assert!(!Notice::info("done").is_failure());
}
