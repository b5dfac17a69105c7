// Rust guideline compliant 2026-02-09

//! HTTP tests for `ApiClient` against a one-shot local server.

use filmcheck_app::{ApiClient, AppError, DetailSource, ErrorCode, SuggestionSource};
use filmcheck_core::{Config, DetailRecord, Error};
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::thread;

/// Request line and body seen by the server.
struct Seen {
    request_line: String,
    body: String,
}

/// Serves a single canned response and reports the request it received.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, Receiver<Seen>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local port");
    let addr = listener.local_addr().expect("local address");
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (stream, _) = listener.accept().expect("accept connection");
        let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

        let mut request_line = String::new();
        reader.read_line(&mut request_line).expect("read request line");

        let mut content_length = 0usize;
        loop {
            let mut header = String::new();
            reader.read_line(&mut header).expect("read header");
            let header = header.trim_end();
            if header.is_empty() {
                break;
            }
            if let Some((name, value)) = header.split_once(':') {
                if name.eq_ignore_ascii_case("content-length") {
                    content_length = value.trim().parse().unwrap_or(0);
                }
            }
        }

        let mut request_body = vec![0u8; content_length];
        reader.read_exact(&mut request_body).expect("read request body");

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        let mut stream = stream;
        stream.write_all(response.as_bytes()).expect("write response");
        stream.flush().expect("flush response");

        let _ = tx.send(Seen {
            request_line: request_line.trim_end().to_string(),
            body: String::from_utf8_lossy(&request_body).to_string(),
        });
    });

    (format!("http://{}", addr), rx)
}

fn client_for(base: &str) -> ApiClient {
    let config = Config {
        graphql_url: base.to_string(),
        suggestion_url: base.to_string(),
        timeout_secs: 5,
        ..Config::default()
    };
    ApiClient::new(&config).expect("client should build")
}

#[test]
fn test_suggest_decodes_candidates() {
    let (base, seen) = serve_once(
        "200 OK",
        r#"{"d":[{"id":"tt0113277","l":"Heat","s":"Al Pacino"},{"id":"nm0000199"}]}"#,
    );

    let candidates = client_for(&base).suggest("Heat 1995").expect("suggest should succeed");

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].label, "Heat");
    assert_eq!(candidates[1].summary, "");
    let seen = seen.recv().expect("request seen");
    assert_eq!(seen.request_line, "GET /x/Heat+1995.json HTTP/1.1");
}

#[test]
fn test_suggestion_failure_status_is_source_unavailable() {
    let (base, _seen) = serve_once("503 Service Unavailable", "");

    let err = client_for(&base).suggest("Heat").unwrap_err();

    assert_eq!(err.code(), ErrorCode::SourceUnavailable);
    assert!(matches!(
        err,
        AppError::Core(Error::SourceUnavailable { origin: "suggestion", status: 503 })
    ));
}

#[test]
fn test_detail_failure_status_is_source_unavailable() {
    let (base, _seen) = serve_once("404 Not Found", "");

    let err = client_for(&base).title("tt0113277").unwrap_err();

    assert!(matches!(
        err,
        AppError::Core(Error::SourceUnavailable { origin: "detail", status: 404 })
    ));
}

#[test]
fn test_fetch_detail_posts_title_query() {
    let (base, seen) = serve_once(
        "200 OK",
        r#"{"data":{"title":{"id":"tt0113277","type":"movie","primary_title":"Heat"}}}"#,
    );

    let record = client_for(&base)
        .fetch_detail("tt0113277")
        .expect("detail should succeed");

    assert!(matches!(record, DetailRecord::Title(t) if t.primary_title.as_deref() == Some("Heat")));
    let seen = seen.recv().expect("request seen");
    assert!(seen.request_line.starts_with("POST / "));
    let body: serde_json::Value = serde_json::from_str(&seen.body).expect("JSON request body");
    assert_eq!(body["variables"]["id"], "tt0113277");
    assert_eq!(body["variables"]["credits"], 5);
}

#[test]
fn test_person_graphql_errors_are_reported() {
    let (base, _seen) = serve_once(
        "200 OK",
        r#"{"data":null,"errors":[{"message":"name not found"}]}"#,
    );

    let err = client_for(&base).person("nm9999999").unwrap_err();

    assert_eq!(err.code(), ErrorCode::GraphqlError);
    assert!(err.to_string().contains("name not found"));
}
