use exa_sdk::test_support::{EnvGuard, client_for};
use exa_sdk::types::{
    HighlightsContentsOptions, SearchRequest, SearchType, SummaryContentsOptions,
    TextContentsOptions,
};
use exa_sdk::{Client, ExaConfig, ExaError};
use serde_json::json;
use serial_test::serial;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_search_response() -> serde_json::Value {
    json!({
        "requestId": "req_1",
        "results": [
            {
                "url": "https://example.com/page1",
                "id": "abc123",
                "title": "Example Page",
                "score": 0.95,
                "publishedDate": "2025-01-15",
                "author": "Test Author",
                "text": "This is the full text content.",
                "summary": "A short summary.",
                "highlights": ["key highlight one", "key highlight two"],
                "highlightScores": [0.9, 0.8],
                "favicon": "https://example.com/favicon.ico"
            }
        ],
        "resolvedSearchType": "neural",
        "costDollars": {
            "total": 0.005,
            "search": { "neural": 0.003 },
            "contents": { "text": 0.001, "highlights": 0.0005, "summary": 0.0005 }
        }
    })
}

#[tokio::test]
async fn search_success_parses() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(header("x-api-key", "test-api-key"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_search_response()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(server.uri());
    let resp = client
        .search()
        .create(SearchRequest::new("test query").with_num_results(10))
        .await
        .unwrap();

    assert_eq!(resp.request_id.as_deref(), Some("req_1"));
    assert_eq!(resp.results.len(), 1);
    let r = &resp.results[0];
    assert_eq!(r.url, "https://example.com/page1");
    assert_eq!(r.title.as_deref(), Some("Example Page"));
    assert!((r.score.unwrap() - 0.95).abs() < f64::EPSILON);
    assert_eq!(r.text.as_deref(), Some("This is the full text content."));
    assert_eq!(
        r.highlights.as_ref().unwrap(),
        &["key highlight one", "key highlight two"]
    );
    assert_eq!(r.favicon.as_deref(), Some("https://example.com/favicon.ico"));
    assert_eq!(resp.resolved_search_type.as_deref(), Some("neural"));

    let cost = resp.cost_dollars.as_ref().unwrap();
    assert!((cost.total.unwrap() - 0.005).abs() < 1e-12);
    let search_cost = cost.search.as_ref().unwrap();
    assert!((search_cost.neural.unwrap() - 0.003).abs() < 1e-12);
    assert!(search_cost.keyword.is_none());
}

#[tokio::test]
async fn search_without_content_options_requests_capped_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_json(json!({
            "query": "latest AI developments",
            "contents": { "text": { "maxCharacters": 10000 } }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(server.uri());
    let resp = client
        .search()
        .create(SearchRequest::new("latest AI developments"))
        .await
        .unwrap();
    assert!(resp.results.is_empty());
}

#[tokio::test]
async fn search_with_contents_disabled_sends_no_contents_key() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_json(json!({ "query": "rust async runtimes", "numResults": 3 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(server.uri());
    client
        .search()
        .create(
            SearchRequest::new("rust async runtimes")
                .with_num_results(3)
                .with_text(true)
                .without_contents(),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn search_nests_content_options_and_passes_the_rest_through() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_json(json!({
            "query": "fusion energy",
            "type": "neural",
            "numResults": 5,
            "includeDomains": ["nature.com"],
            "userLocation": "DE",
            "contents": {
                "text": { "maxCharacters": 2000 },
                "highlights": { "numSentences": 2 },
                "summary": { "query": "main finding" }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let req = SearchRequest::new("fusion energy")
        .with_search_type(SearchType::Neural)
        .with_num_results(5)
        .with_include_domains(["nature.com"])
        .with_option("userLocation", "DE")
        .with_text(TextContentsOptions::max_characters(2000))
        .with_highlights(HighlightsContentsOptions {
            num_sentences: Some(2),
            ..HighlightsContentsOptions::default()
        })
        .with_summary(SummaryContentsOptions {
            query: Some("main finding".into()),
            ..SummaryContentsOptions::default()
        });

    let client = client_for(server.uri());
    client.search().create(req).await.unwrap();
}

#[tokio::test]
#[serial(env)]
async fn missing_api_key_is_config_error() {
    let _guard = EnvGuard::remove("EXA_API_KEY");

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = Client::with_config(ExaConfig::new().with_api_base(server.uri()));
    let result = client
        .search()
        .create(SearchRequest::new("test"))
        .await;

    match result.unwrap_err() {
        ExaError::Config(msg) => assert!(msg.contains("EXA_API_KEY")),
        other => panic!("Expected Config error, got {other:?}"),
    }
}

#[tokio::test]
async fn user_agent_names_the_sdk() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(header(
            "user-agent",
            concat!("exa-sdk-rs/", env!("CARGO_PKG_VERSION")),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(server.uri());
    client
        .search()
        .create(SearchRequest::new("test"))
        .await
        .unwrap();
}
