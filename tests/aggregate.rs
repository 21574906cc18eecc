use std::sync::Mutex;

use pretty_assertions::assert_eq;
use reddit_gallery::api::{ClientSettings, Credentials, RedditClient};
use reddit_gallery::{run_aggregation, AutoStall, QueryConfig, SortOrder, StatusSink, Termination};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct RecordingSink {
    messages: Mutex<Vec<(String, bool)>>,
}

impl RecordingSink {
    fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
        }
    }

    fn take(&self) -> Vec<(String, bool)> {
        self.messages.lock().unwrap().drain(..).collect()
    }
}

impl StatusSink for RecordingSink {
    fn status(&self, message: &str, is_error: bool) {
        self.messages
            .lock()
            .unwrap()
            .push((message.to_string(), is_error));
    }
}

fn test_client(server: &MockServer) -> RedditClient {
    let settings = ClientSettings {
        api_base: server.uri(),
        auth_base: server.uri(),
        ..Default::default()
    };
    RedditClient::new(settings).expect("client builds")
}

fn test_credentials() -> Credentials {
    Credentials {
        client_id: "test-id".to_string(),
        client_secret: "test-secret".to_string(),
    }
}

fn query(source: &str, limit: u32) -> QueryConfig {
    QueryConfig {
        source: source.to_string(),
        sort: SortOrder::Hot,
        time_filter: None,
        limit,
    }
}

async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/v1/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok-123"
        })))
        .expect(1)
        .mount(server)
        .await;
}

fn media_child(id: &str) -> serde_json::Value {
    json!({"kind": "t3", "data": {
        "id": id,
        "title": format!("Media {}", id),
        "url": format!("https://i.redd.it/{}.jpg", id),
        "permalink": format!("/r/pics/comments/{}/media/", id),
        "author": "alice",
        "created_utc": 1700000000.0,
        "score": 10
    }})
}

fn text_child(id: &str) -> serde_json::Value {
    json!({"kind": "t3", "data": {
        "id": id,
        "title": format!("Text {}", id),
        "url": format!("https://example.com/{}", id),
        "permalink": format!("/r/pics/comments/{}/text/", id),
        "author": "bob",
        "created_utc": 1700000000.0,
        "score": 3
    }})
}

#[tokio::test]
async fn run_collects_media_across_pages() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path("/r/pics/hot"))
        .and(query_param("after", "t3_p2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "children": [media_child("p3"), media_child("p4")],
                "after": "t3_p4"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/r/pics/hot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "children": [media_child("p1"), text_child("p2")],
                "after": "t3_p2"
            }
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let sink = RecordingSink::new();

    let result = run_aggregation(
        &client,
        &test_credentials(),
        &query("pics", 2),
        &sink,
        &AutoStall(false),
    )
    .await;

    assert_eq!(result.termination, Termination::Satisfied);
    assert_eq!(result.requests_issued, 2);
    let ids: Vec<&str> = result.media.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "p3"]);
    // p2 was classified, p4 arrived after the limit was met
    let skipped: Vec<&str> = result.non_media.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(skipped, vec!["p2", "p4"]);

    let messages = sink.take();
    let (last, is_error) = messages.last().unwrap();
    assert!(last.contains("2/2"));
    assert!(!is_error);
}

#[tokio::test]
async fn auth_failure_yields_empty_run() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": "invalid_client"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let sink = RecordingSink::new();

    let result = run_aggregation(
        &client,
        &test_credentials(),
        &query("pics", 2),
        &sink,
        &AutoStall(false),
    )
    .await;

    assert_eq!(result.termination, Termination::AuthFailed);
    assert!(result.termination.is_error());
    assert!(result.media.is_empty());
    assert_eq!(result.requests_issued, 0);

    let (last, is_error) = sink.take().pop().unwrap();
    assert!(last.contains("invalid_client"));
    assert!(is_error);
}

#[tokio::test]
async fn fetch_failure_keeps_partial_results() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path("/r/pics/hot"))
        .and(query_param("after", "t3_p2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/r/pics/hot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "children": [media_child("p1")],
                "after": "t3_p2"
            }
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let sink = RecordingSink::new();

    let result = run_aggregation(
        &client,
        &test_credentials(),
        &query("pics", 2),
        &sink,
        &AutoStall(false),
    )
    .await;

    assert_eq!(result.termination, Termination::FetchFailed);
    assert_eq!(result.requests_issued, 1);
    assert_eq!(result.media.len(), 1);

    let messages = sink.take();
    assert!(messages
        .iter()
        .any(|(m, is_error)| *is_error && m.contains("500")));
}

#[tokio::test]
async fn stalled_single_media_run_stops_after_three_attempts() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path("/r/pics/best"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "children": [text_child("np")],
                "after": "t3_next"
            }
        })))
        .expect(3)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let sink = RecordingSink::new();

    let mut stall_query = query("pics", 1);
    stall_query.sort = SortOrder::Best;

    let result = run_aggregation(
        &client,
        &test_credentials(),
        &stall_query,
        &sink,
        &AutoStall(false),
    )
    .await;

    assert_eq!(result.termination, Termination::StallAborted);
    assert!(!result.termination.is_error());
    assert_eq!(result.requests_issued, 3);
    assert!(result.media.is_empty());

    let messages = sink.take();
    assert!(messages.iter().any(|(m, _)| m.contains("3 attempts")));
    let (last, is_error) = messages.last().unwrap();
    assert!(last.contains("stalled"));
    assert!(!is_error);
}
