//! Tests for engine module

use super::*;
use crate::http::{HttpClient, RawResponse};
use async_trait::async_trait;
use futures::StreamExt;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Scripted transport
// ============================================================================

/// Replays canned responses and records every query it was sent
#[derive(Default)]
struct ScriptedTransport {
    responses: Mutex<VecDeque<RawResponse>>,
    requests: Mutex<Vec<HashMap<String, String>>>,
}

impl ScriptedTransport {
    fn new(bodies: Vec<serde_json::Value>) -> Self {
        let responses = bodies
            .into_iter()
            .map(|body| RawResponse {
                status: 200,
                body: body.to_string(),
            })
            .collect();
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::default(),
        }
    }

    fn with_raw(responses: Vec<RawResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::default(),
        }
    }

    fn requests(&self) -> Vec<HashMap<String, String>> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, _url: &str, query: &[(String, String)]) -> Result<RawResponse> {
        self.requests
            .lock()
            .unwrap()
            .push(query.iter().cloned().collect());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Error::Other("no scripted response left".to_string()))
    }
}

async fn collect(run: Pagination<'_, ScriptedTransport>) -> Vec<PageEnvelope> {
    run.into_stream()
        .map(|page| page.unwrap())
        .collect::<Vec<_>>()
        .await
}

fn cursor_page(after: &str) -> serde_json::Value {
    json!({"data": [{"id": "1"}], "paging": {"cursors": {"after": after}}})
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_requires_credentials() {
    let transport = ScriptedTransport::default();
    let result = Pagination::new(
        &transport,
        "https://x/1/likes",
        Parameters::new(),
        Vec::<String>::new(),
        CursorExtractor::CursorAfter,
    );
    assert!(matches!(result, Err(Error::CredentialsExhausted)));
}

// ============================================================================
// Continuation
// ============================================================================

#[tokio::test]
async fn test_two_page_run() {
    let transport = ScriptedTransport::new(vec![cursor_page("C1"), json!({"data": []})]);
    let run = Pagination::new(
        &transport,
        "https://x/1/likes",
        Parameters::new(),
        ["A"],
        CursorExtractor::CursorAfter,
    )
    .unwrap();

    let pages = collect(run).await;

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[1].record_count(), 0);
    assert_eq!(transport.requests().len(), 2);
    assert_eq!(transport.requests()[1].get("after").map(String::as_str), Some("C1"));
}

#[tokio::test]
async fn test_stops_without_cursor() {
    let transport = ScriptedTransport::new(vec![json!({"data": [{"id": "1"}]}), cursor_page("C9")]);
    let run = Pagination::new(
        &transport,
        "https://x/1/likes",
        Parameters::new(),
        ["A"],
        CursorExtractor::CursorAfter,
    )
    .unwrap();

    let pages = collect(run).await;
    assert_eq!(pages.len(), 1);
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn test_stagnation_guard() {
    let transport = ScriptedTransport::new(vec![cursor_page("C1"), cursor_page("C1"), cursor_page("C2")]);
    let run = Pagination::new(
        &transport,
        "https://x/1/likes",
        Parameters::new(),
        ["A"],
        CursorExtractor::CursorAfter,
    )
    .unwrap();

    let pages = collect(run).await;

    // Second page repeats the cursor already in the parameters
    assert_eq!(pages.len(), 2);
    assert!(pages[1].has_data());
    assert_eq!(transport.requests().len(), 2);
}

#[tokio::test]
async fn test_stagnation_guard_uses_initial_parameter() {
    let transport = ScriptedTransport::new(vec![cursor_page("C0")]);
    let params = Parameters::new().with("after", "C0");
    let run = Pagination::new(
        &transport,
        "https://x/1/likes",
        params,
        ["A"],
        CursorExtractor::CursorAfter,
    )
    .unwrap();

    assert_eq!(collect(run).await.len(), 1);
}

#[tokio::test]
async fn test_date_until_run() {
    let transport = ScriptedTransport::new(vec![
        json!({"data": [{"id": "p1"}], "paging": {"next": "https://x/1/feed?limit=25&until=1400"}}),
        json!({"data": [{"id": "p2"}], "paging": {"next": "https://x/1/feed?limit=50&until=1300"}}),
        json!({"data": []}),
    ]);
    let run = Pagination::new(
        &transport,
        "https://x/1/feed",
        Parameters::new().with("since", "-1day"),
        ["A"],
        CursorExtractor::DateUntil,
    )
    .unwrap();

    let pages = collect(run).await;
    assert_eq!(pages.len(), 3);

    let requests = transport.requests();
    assert_eq!(requests[0].get("until"), None);
    assert_eq!(requests[1].get("until").map(String::as_str), Some("1400"));
    assert_eq!(requests[2].get("until").map(String::as_str), Some("1300"));
    assert_eq!(requests[2].get("since").map(String::as_str), Some("-1day"));
}

// ============================================================================
// Credentials and ramp-up
// ============================================================================

#[tokio::test]
async fn test_credentials_round_robin() {
    let transport = ScriptedTransport::new(vec![
        cursor_page("C1"),
        cursor_page("C2"),
        cursor_page("C3"),
        json!({"data": []}),
    ]);
    let run = Pagination::new(
        &transport,
        "https://x/1/likes",
        Parameters::new(),
        ["A", "B"],
        CursorExtractor::CursorAfter,
    )
    .unwrap();

    collect(run).await;

    let tokens: Vec<String> = transport
        .requests()
        .iter()
        .map(|q| q["access_token"].clone())
        .collect();
    assert_eq!(tokens, vec!["A", "B", "A", "B"]);
}

#[tokio::test]
async fn test_limit_ramp_up() {
    let transport = ScriptedTransport::new(vec![
        cursor_page("C1"),
        cursor_page("C2"),
        cursor_page("C3"),
        json!({"data": []}),
    ]);
    let run = Pagination::new(
        &transport,
        "https://x/1/likes",
        Parameters::new().with("limit", 25),
        ["A"],
        CursorExtractor::CursorAfter,
    )
    .unwrap()
    .with_ramp_up(RampUp::geometric(2, 60));

    let pages = collect(run).await;

    let limits: Vec<u64> = pages
        .iter()
        .map(|p| p.parameters.get_u64("limit").unwrap())
        .collect();
    assert_eq!(limits, vec![25, 50, 60, 60]);
}

#[tokio::test]
async fn test_no_limit_no_ramp_up() {
    let transport = ScriptedTransport::new(vec![cursor_page("C1"), json!({"data": []})]);
    let run = Pagination::new(
        &transport,
        "https://x/1/likes",
        Parameters::new(),
        ["A"],
        CursorExtractor::CursorAfter,
    )
    .unwrap()
    .with_ramp_up(RampUp::geometric(2, 3000));

    let pages = collect(run).await;
    assert!(pages.iter().all(|p| !p.parameters.contains("limit")));
}

#[tokio::test]
async fn test_custom_token_param() {
    let transport = ScriptedTransport::new(vec![json!({"data": []})]);
    let run = Pagination::new(
        &transport,
        "https://x/1/likes",
        Parameters::new(),
        ["A"],
        CursorExtractor::CursorAfter,
    )
    .unwrap()
    .with_token_param("token");

    collect(run).await;
    let requests = transport.requests();
    assert_eq!(requests[0].get("token").map(String::as_str), Some("A"));
    assert!(!requests[0].contains_key("access_token"));
}

// ============================================================================
// Envelopes
// ============================================================================

#[tokio::test]
async fn test_envelope_parameters_are_snapshots() {
    let transport = ScriptedTransport::new(vec![cursor_page("C1"), json!({"data": []})]);
    let run = Pagination::new(
        &transport,
        "https://x/1/likes",
        Parameters::new().with("limit", 25),
        ["A"],
        CursorExtractor::CursorAfter,
    )
    .unwrap()
    .with_ramp_up(RampUp::geometric(2, 3000));

    let pages = collect(run).await;

    assert_eq!(
        serde_json::to_value(&pages[0].parameters).unwrap(),
        json!({"access_token": "A", "limit": 25})
    );
    assert_eq!(
        serde_json::to_value(&pages[1].parameters).unwrap(),
        json!({"access_token": "A", "after": "C1", "limit": 50})
    );
    assert_eq!(pages[0].endpoint, "https://x/1/likes");
}

#[tokio::test]
async fn test_non_json_body_becomes_error_page() {
    let transport = ScriptedTransport::with_raw(vec![RawResponse {
        status: 503,
        body: "Service Unavailable".to_string(),
    }]);
    let run = Pagination::new(
        &transport,
        "https://x/1/likes",
        Parameters::new(),
        ["A"],
        CursorExtractor::CursorAfter,
    )
    .unwrap();

    let pages = collect(run).await;

    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].status, 503);
    assert_eq!(pages[0].content, json!({"error": "Service Unavailable"}));
}

#[tokio::test]
async fn test_transport_error_ends_run() {
    let transport = ScriptedTransport::new(vec![cursor_page("C1")]);
    let mut run = Pagination::new(
        &transport,
        "https://x/1/likes",
        Parameters::new(),
        ["A"],
        CursorExtractor::CursorAfter,
    )
    .unwrap();

    assert!(run.next_page().await.unwrap().is_ok());
    assert!(!run.is_done());
    // Script is empty now, so the transport fails
    assert!(run.next_page().await.unwrap().is_err());
    assert!(run.is_done());
    assert!(run.next_page().await.is_none());
    assert_eq!(run.pages_fetched(), 1);
}

#[test]
fn test_parse_body() {
    assert_eq!(parse_body(r#"{"data": []}"#), json!({"data": []}));
    assert_eq!(parse_body(""), json!({"error": ""}));
    assert_eq!(parse_body("<html>"), json!({"error": "<html>"}));
}

#[test]
fn test_run_stats() {
    let mut stats = RunStats::new();
    stats.add_page(10, true);
    stats.add_page(0, false);
    assert_eq!(stats.pages, 2);
    assert_eq!(stats.records, 10);
    assert_eq!(stats.error_pages, 1);
}

// ============================================================================
// Against a mock server
// ============================================================================

#[tokio::test]
async fn test_run_against_mock_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2.2/42/comments"))
        .and(query_param_is_missing("after"))
        .and(query_param("access_token", "A"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cursor_page("C1")))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2.2/42/comments"))
        .and(query_param("after", "C1"))
        .and(query_param("access_token", "B"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let endpoint = format!("{}/v2.2/42/comments", mock_server.uri());
    let run = Pagination::new(
        &client,
        endpoint.clone(),
        Parameters::new().with("limit", 25).with("summary", 1),
        ["A", "B"],
        CursorExtractor::CursorAfter,
    )
    .unwrap()
    .with_ramp_up(RampUp::geometric(2, 3000));

    let pages: Vec<_> = run.into_stream().collect().await;

    assert_eq!(pages.len(), 2);
    let first = pages[0].as_ref().unwrap();
    assert_eq!(first.status, 200);
    assert_eq!(first.endpoint, endpoint);
    assert_eq!(pages[1].as_ref().unwrap().record_count(), 0);
}
