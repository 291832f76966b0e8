mod common;

use common::OneShotServer;
use querylens_core::api::ApiClient;
use querylens_core::config::{ClientConfig, ImageFormat};
use querylens_core::error::QueryLensError;
use querylens_core::preview::{classify, ContentKind};
use querylens_core::settings::{DatabaseSettings, DatabaseType};

fn client_for(server: &OneShotServer) -> ApiClient {
    let config = ClientConfig {
        server_url: server.url.clone(),
        request_timeout_secs: 10,
        ..ClientConfig::default()
    };
    ApiClient::new(&config).unwrap()
}

#[test]
fn test_schema_image_keeps_content_type() {
    let server = OneShotServer::start("200 OK", "image/svg+xml", "<svg xmlns=\"http://www.w3.org/2000/svg\"/>");
    let image = client_for(&server).schema_image().unwrap();

    assert_eq!(image.content_type.as_deref(), Some("image/svg+xml"));
    assert!(image.bytes.starts_with(b"<svg"));

    let (source, hint) = image.into_source();
    assert_eq!(classify(&source, hint.as_deref()), ContentKind::Vector);

    let request = server.request();
    assert!(request.starts_with("GET /schema/image "), "got: {request}");
}

#[test]
fn test_ask_posts_question_and_parses_answer() {
    let body = r#"{"df": {"columns": ["n"], "rows": [{"n": 8}]}, "image_url": "/x/static/plots/p.png", "should_plot": false}"#;
    let server = OneShotServer::start("200 OK", "application/json", body);
    let answer = client_for(&server)
        .ask("  How many employees?  ", ImageFormat::Png)
        .unwrap();

    assert!(!answer.should_plot);
    assert_eq!(answer.artifact.table.unwrap().cell_text(0, "n"), "8");

    let request = server.request();
    assert!(request.starts_with("POST /question?format=png "), "got: {request}");
    assert!(request.contains(r#"{"question":"How many employees?"}"#), "got: {request}");
}

#[test]
fn test_ask_rejects_empty_question_without_request() {
    let config = ClientConfig::default();
    let client = ApiClient::new(&config).unwrap();
    let err = client.ask("   ", ImageFormat::Svg).unwrap_err();
    assert!(matches!(err, QueryLensError::EmptyQuestion));
}

#[test]
fn test_status_error_carries_server_detail() {
    let server = OneShotServer::start(
        "500 Internal Server Error",
        "application/json",
        r#"{"detail": "Failed to generate schema image"}"#,
    );
    let err = client_for(&server).schema_image().unwrap_err();

    match err {
        QueryLensError::Status { status, ref path, ref detail } => {
            assert_eq!(status, 500);
            assert_eq!(path, "/schema/image");
            assert_eq!(detail.as_deref(), Some("Failed to generate schema image"));
        }
        other => panic!("unexpected error: {other}"),
    }
    server.request();
}

#[test]
fn test_random_questions_sends_count() {
    let server = OneShotServer::start("200 OK", "application/json", r#"{"questions": ["A question?"]}"#);
    let questions = client_for(&server).random_questions(7).unwrap();
    assert_eq!(questions, vec!["A question?"]);
    assert!(server.request().starts_with("GET /random-questions?count=7 "));
}

#[test]
fn test_update_settings_body() {
    let server = OneShotServer::start("200 OK", "application/json", r#"{"status": "ok"}"#);
    let settings = DatabaseSettings {
        db_path: "/data/shop.db".into(),
        db_type: DatabaseType::Sqlite,
        model: Some("gemma-3-4b-it".into()),
    };
    client_for(&server).update_settings(&settings).unwrap();

    let request = server.request();
    assert!(request.starts_with("POST /settings "));
    assert!(request.contains(r#""database_path":"/data/shop.db""#), "got: {request}");
    assert!(request.contains(r#""database_type":"sqlite""#), "got: {request}");
    assert!(request.contains(r#""model":"gemma-3-4b-it""#), "got: {request}");
}

#[test]
fn test_fetch_image_rebases_static_path() {
    let server = OneShotServer::start("200 OK", "image/png", vec![0x89, b'P', b'N', b'G']);
    let image = client_for(&server)
        .fetch_image("/srv/app/frontend/static/plots/plot_1.png")
        .unwrap();
    assert!(image.url.ends_with("/static/plots/plot_1.png"));
    assert!(server.request().starts_with("GET /static/plots/plot_1.png "));
}

#[test]
fn test_connection_refused_is_http_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let config = ClientConfig {
        server_url: format!("http://127.0.0.1:{port}"),
        connect_timeout_secs: 2,
        ..ClientConfig::default()
    };
    let err = ApiClient::new(&config).unwrap().describe().unwrap_err();
    assert!(matches!(err, QueryLensError::Http(_)), "got: {err}");
}
