use std::time::Duration;

use exa_sdk::test_support::{client_for, list_page};
use exa_sdk::types::websets::{
    Cadence, CreateImportParamsBuilder, CreateMonitorParamsBuilder, CreateStreamParamsBuilder,
    CreateWebhookParamsBuilder, CsvImportConfig, EventType, ImportFormat, ImportStatus,
    ListAttemptsParams, MonitorStatus, RunStatus, ScheduleBehavior, StreamStatus,
    UpdateMonitorParams, Webset, WebsetEntity,
};
use exa_sdk::{ExaError, ListParams, PollOptions};
use futures::TryStreamExt;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn import_json(status: &str) -> serde_json::Value {
    json!({
        "id": "imp_1",
        "object": "import",
        "status": status,
        "format": "csv",
        "entity": { "type": "company" },
        "count": 100,
        "uploadUrl": "https://uploads.example.com/imp_1",
        "uploadValidUntil": "2025-01-01T01:00:00Z"
    })
}

fn schedule_json(id: &str, object: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "object": object,
        "status": status,
        "websetId": "ws_1",
        "cadence": { "cron": "0 9 * * 1", "timezone": "Etc/UTC" },
        "behavior": { "type": "search", "config": { "count": 5 } }
    })
}

fn fast_poll() -> PollOptions {
    PollOptions::default()
        .with_interval(Duration::from_millis(10))
        .with_timeout(Duration::from_secs(5))
}

#[tokio::test]
async fn import_create_returns_upload_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/websets/v0/imports"))
        .and(body_json(json!({
            "format": "csv",
            "size": 2048,
            "count": 100,
            "title": "Leads",
            "entity": { "type": "company" },
            "csv": { "identifier": 0 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(import_json("pending")))
        .expect(1)
        .mount(&server)
        .await;

    let params = CreateImportParamsBuilder::default()
        .format(ImportFormat::Csv)
        .size(2048_u64)
        .count(100_u64)
        .title("Leads")
        .entity(WebsetEntity::Company)
        .csv(CsvImportConfig {
            identifier: Some(0),
        })
        .build()
        .unwrap();

    let client = client_for(server.uri());
    let import = client.websets().imports().create(&params).await.unwrap();
    assert_eq!(import.status, ImportStatus::Pending);
    assert_eq!(
        import.upload_url.as_deref(),
        Some("https://uploads.example.com/imp_1")
    );
}

#[tokio::test]
async fn import_wait_completes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/websets/v0/imports/imp_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(import_json("processing")))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/websets/v0/imports/imp_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(import_json("completed")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(server.uri());
    let import = client
        .websets()
        .imports()
        .wait_until_completed_with("imp_1", fast_poll(), |_| {})
        .await
        .unwrap();
    assert_eq!(import.status, ImportStatus::Completed);
}

#[tokio::test]
async fn import_failure_carries_failed_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/websets/v0/imports/imp_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(import_json("processing")))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    let mut failed = import_json("failed");
    failed["failedReason"] = json!("invalid_format");
    failed["failedMessage"] = json!("Row 3 has no URL");
    Mock::given(method("GET"))
        .and(path("/websets/v0/imports/imp_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(failed))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(server.uri());
    let err = client
        .websets()
        .imports()
        .wait_until_completed_with("imp_1", fast_poll(), |_| {})
        .await
        .unwrap_err();

    match err {
        ExaError::ResourceFailed {
            resource,
            id,
            status,
            message,
        } => {
            assert_eq!(resource, "import");
            assert_eq!(id, "imp_1");
            assert_eq!(status, "failed");
            assert_eq!(message, "Row 3 has no URL");
        }
        other => panic!("Expected ResourceFailed, got {other:?}"),
    }
}

#[test]
fn import_builder_rejects_zero_count() {
    let err: ExaError = CreateImportParamsBuilder::default()
        .size(10_u64)
        .build()
        .unwrap_err()
        .into();
    assert!(matches!(err, ExaError::InvalidRequest(m) if m.contains("count")));
}

#[tokio::test]
async fn monitor_create_update_and_runs() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/websets/v0/monitors"))
        .and(body_json(json!({
            "websetId": "ws_1",
            "cadence": { "cron": "0 9 * * 1", "timezone": "Etc/UTC" },
            "behavior": { "type": "search", "config": { "count": 5 } }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(schedule_json("mon_1", "monitor", "enabled")),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/websets/v0/monitors/mon_1"))
        .and(body_json(json!({ "status": "disabled" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(schedule_json("mon_1", "monitor", "disabled")),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/websets/v0/monitors/mon_1/runs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_page(
            vec![json!({
                "id": "run_1",
                "object": "monitor_run",
                "status": "completed",
                "monitorId": "mon_1",
                "type": "search",
                "completedAt": "2025-01-06T09:05:00Z"
            })],
            None,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(server.uri());
    let monitors = client.websets().monitors();

    let params = CreateMonitorParamsBuilder::default()
        .webset_id("ws_1")
        .cadence(Cadence::cron("0 9 * * 1").with_timezone("Etc/UTC"))
        .behavior(ScheduleBehavior::search(5))
        .build()
        .unwrap();
    let monitor = monitors.create(&params).await.unwrap();
    assert_eq!(monitor.status, MonitorStatus::Enabled);

    let disabled = monitors
        .update(
            "mon_1",
            &UpdateMonitorParams {
                status: Some(MonitorStatus::Disabled),
                ..UpdateMonitorParams::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(disabled.status, MonitorStatus::Disabled);

    let runs = monitors
        .runs()
        .list("mon_1", &ListParams::default())
        .await
        .unwrap();
    assert!(!runs.has_more);
    assert_eq!(runs.data[0].status, RunStatus::Completed);
    assert_eq!(runs.data[0].kind.as_deref(), Some("search"));
}

#[tokio::test]
async fn monitor_list_all_filters_by_webset() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/websets/v0/monitors"))
        .and(query_param("websetId", "ws_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_page(
            vec![
                schedule_json("mon_1", "monitor", "enabled"),
                schedule_json("mon_2", "monitor", "disabled"),
            ],
            None,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(server.uri());
    let all: Vec<_> = client
        .websets()
        .monitors()
        .list_all(Some("ws_1".into()))
        .try_collect()
        .await
        .unwrap();
    assert_eq!(all.len(), 2);
}

#[test]
fn monitor_builder_rejects_bad_cron() {
    let err: ExaError = CreateMonitorParamsBuilder::default()
        .webset_id("ws_1")
        .cadence(Cadence::cron("every monday"))
        .behavior(ScheduleBehavior::search(5))
        .build()
        .unwrap_err()
        .into();
    assert!(matches!(err, ExaError::InvalidRequest(m) if m.contains("5 fields")));
}

#[tokio::test]
async fn stream_create_and_delete() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/websets/v0/streams"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(schedule_json("str_1", "stream", "enabled")),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/websets/v0/streams/str_1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(schedule_json("str_1", "stream", "closed")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(server.uri());
    let streams = client.websets().streams();
    let params = CreateStreamParamsBuilder::default()
        .webset_id("ws_1")
        .cadence(Cadence::cron("0 9 * * 1"))
        .behavior(ScheduleBehavior::search(5))
        .build()
        .unwrap();

    let created = streams.create(&params).await.unwrap();
    assert_eq!(created.status, StreamStatus::Enabled);
    let closed = streams.delete("str_1").await.unwrap();
    assert_eq!(closed.status, StreamStatus::Closed);
}

#[tokio::test]
async fn webhook_create_and_attempts() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/websets/v0/webhooks"))
        .and(body_json(json!({
            "events": ["webset.idle", "webset.item.enriched"],
            "url": "https://hooks.example.com/exa"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "wh_1",
            "object": "webhook",
            "status": "active",
            "events": ["webset.idle", "webset.item.enriched"],
            "url": "https://hooks.example.com/exa",
            "secret": "whsec_123"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let attempt = |id: &str| {
        json!({
            "id": id,
            "object": "webhook_attempt",
            "eventId": "ev_1",
            "eventType": "webset.idle",
            "webhookId": "wh_1",
            "url": "https://hooks.example.com/exa",
            "successful": false,
            "responseStatusCode": 500,
            "attempt": 1
        })
    };

    Mock::given(method("GET"))
        .and(path("/websets/v0/webhooks/wh_1/attempts"))
        .and(query_param("eventType", "webset.idle"))
        .and(query_param("successful", "false"))
        .and(query_param_is_missing("cursor"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(list_page(vec![attempt("att_1")], Some("a1"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/websets/v0/webhooks/wh_1/attempts"))
        .and(query_param("eventType", "webset.idle"))
        .and(query_param("cursor", "a1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(list_page(vec![attempt("att_2")], None)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(server.uri());
    let webhooks = client.websets().webhooks();
    let params = CreateWebhookParamsBuilder::default()
        .event(EventType::WebsetIdle)
        .event(EventType::WebsetItemEnriched)
        .url("https://hooks.example.com/exa")
        .build()
        .unwrap();

    let hook = webhooks.create(&params).await.unwrap();
    assert_eq!(hook.secret.as_deref(), Some("whsec_123"));

    let attempts: Vec<_> = webhooks
        .list_all_attempts(
            "wh_1",
            ListAttemptsParams {
                event_type: Some(EventType::WebsetIdle),
                successful: Some(false),
                ..ListAttemptsParams::default()
            },
        )
        .try_collect()
        .await
        .unwrap();
    assert_eq!(attempts.len(), 2);
    assert_eq!(attempts[0].response_status_code, Some(500));
}

#[tokio::test]
async fn events_list_and_decode() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/websets/v0/events"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_page(
            vec![json!({
                "id": "ev_1",
                "object": "event",
                "type": "webset.idle",
                "data": { "id": "ws_1", "object": "webset", "status": "idle" },
                "createdAt": "2025-01-01T00:00:00Z"
            })],
            Some("e2"),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(server.uri());
    let page = client
        .websets()
        .events()
        .list(&ListParams {
            cursor: None,
            limit: Some(1),
        })
        .await
        .unwrap();

    assert!(page.has_more);
    assert_eq!(page.next_cursor.as_deref(), Some("e2"));
    let event = &page.data[0];
    assert_eq!(event.event_type, EventType::WebsetIdle);
    let ws: Webset = event.data_as().unwrap();
    assert_eq!(ws.id, "ws_1");
}
