//! Reactive adapters and custom transports.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use bytes::Bytes;
use serde_json::json;
use tusk::entity::Visibility;
use tusk::method::StatusForm;
use tusk::rx::{Completable, RxApps, RxDomainBlocks, RxLists, RxScheduledStatuses, RxStatuses};
use tusk::{Error, HttpClient, MastodonClient, MastodonConfig, Request, Response, Result};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string, body_string_contains, method, path, query_param},
};

fn client(server: &MockServer) -> MastodonClient {
    let config = MastodonConfig::from_base_url(&server.uri())
        .expect("config")
        .with_access_token("t");
    MastodonClient::new(config)
}

/// Transport that never reaches a server.
#[derive(Debug, Clone, Default)]
struct Unreachable {
    calls: Arc<AtomicUsize>,
}

impl HttpClient for Unreachable {
    async fn execute(&self, _request: Request<Bytes>) -> Result<Response<Bytes>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(Error::connection("connection refused"))
    }
}

#[tokio::test]
async fn single_fires_only_when_polled() {
    let server = MockServer::start().await;

    let guard = Mock::given(method("POST"))
        .and(path("/api/v1/statuses/5/pin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "5",
            "uri": "https://mastodon.example/statuses/5",
            "created_at": "2024-03-01T12:00:00.000Z",
            "account": {"id": "1", "username": "alice", "acct": "alice"},
            "pinned": true
        })))
        .expect(1)
        .mount_as_scoped(&server)
        .await;

    let statuses = RxStatuses::new(client(&server));
    let single = statuses.pin("5");

    assert!(guard.received_requests().await.is_empty());

    let mut pinned = None;
    single
        .subscribe(|status| pinned = status.pinned, |e| panic!("unexpected {e}"))
        .await;

    assert_eq!(pinned, Some(true));
    assert_eq!(guard.received_requests().await.len(), 1);
}

#[tokio::test]
async fn dropped_single_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/lists/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let lists = RxLists::new(client(&server));
    drop(lists.delete_list("3"));
}

#[tokio::test]
async fn completable_reports_completion() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/statuses/8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let completable: Completable = RxStatuses::new(client(&server)).delete_status("8");

    let mut completed = false;
    completable
        .subscribe(|| completed = true, |e| panic!("unexpected {e}"))
        .await;

    assert!(completed);
}

#[tokio::test]
async fn domain_block_round_trip_as_completables() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/domain_blocks"))
        .and(body_string("domain=spam.example"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/domain_blocks"))
        .and(query_param("domain", "spam.example"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let domain_blocks = RxDomainBlocks::new(client(&server));
    let block = domain_blocks.block_domain("spam.example");
    let unblock = domain_blocks.unblock_domain("spam.example");

    let mut completed = 0;
    block
        .subscribe(|| completed += 1, |e| panic!("unexpected {e}"))
        .await;
    unblock
        .subscribe(|| completed += 1, |e| panic!("unexpected {e}"))
        .await;

    assert_eq!(completed, 2);
}

#[tokio::test]
async fn scheduled_status_can_be_created_and_cancelled() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/statuses"))
        .and(body_string_contains("scheduled_at=2030-01-01T10%3A00%3A00Z"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "3221",
            "scheduled_at": "2030-01-01T10:00:00.000Z",
            "params": {"text": "happy new year", "visibility": "public"},
            "media_attachments": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/scheduled_statuses/3221"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let scheduled = RxStatuses::new(client.clone())
        .schedule_status(&StatusForm::new("happy new year"), "2030-01-01T10:00:00Z")
        .await
        .expect("scheduled");

    assert_eq!(scheduled.id, "3221");
    assert_eq!(scheduled.params.text, "happy new year");

    RxScheduledStatuses::new(client)
        .cancel(&scheduled.id)
        .await
        .expect("cancelled");
}

#[tokio::test]
async fn rx_direct_reblog_fails_without_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = RxStatuses::new(client(&server))
        .reblog("1", Visibility::Direct)
        .await
        .expect_err("direct reblog");

    assert!(err.is_invalid_request());
}

#[tokio::test]
async fn rx_error_status_goes_to_error_callback() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/lists/404"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "Record not found"})),
        )
        .mount(&server)
        .await;

    let mut status = None;
    RxLists::new(client(&server))
        .list("404")
        .subscribe(|_| panic!("no list expected"), |e| status = e.status())
        .await;

    assert_eq!(status, Some(404));
}

#[tokio::test]
async fn token_exchange_over_unreachable_transport() {
    let http = Unreachable::default();
    let calls = Arc::clone(&http.calls);
    let config = MastodonConfig::builder("mastodon.example").build().expect("config");
    let client = MastodonClient::with_http(config, http);

    let err = client
        .apps()
        .access_token("id", "secret", tusk::oauth::OOB_REDIRECT_URI, "code")
        .execute()
        .await
        .expect_err("no network");

    assert!(err.is_connection());
    assert!(err.status().is_none());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn rx_over_custom_transport() {
    let http = Unreachable::default();
    let calls = Arc::clone(&http.calls);
    let config = MastodonConfig::builder("mastodon.example").build().expect("config");
    let apps = RxApps::from(MastodonClient::with_http(config, http));

    let single = apps.verify_app_credentials();
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let err = single.await.expect_err("no network");
    assert!(err.is_connection());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
