use exa_sdk::test_support::client_for;
use exa_sdk::types::FindSimilarRequest;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn find_similar_success_parses() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/findSimilar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {
                    "url": "https://similar.com/page",
                    "title": "Similar Page",
                    "score": 0.88
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(server.uri());
    let req = FindSimilarRequest::new("https://example.com")
        .with_num_results(5)
        .with_exclude_source_domain(true);
    let resp = client.find_similar().create(req).await.unwrap();

    assert_eq!(resp.results.len(), 1);
    assert_eq!(resp.results[0].url, "https://similar.com/page");
    assert!((resp.results[0].score.unwrap() - 0.88).abs() < f64::EPSILON);
}

#[tokio::test]
async fn find_similar_nests_contents_like_search() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/findSimilar"))
        .and(body_json(json!({
            "url": "https://example.com",
            "numResults": 3,
            "excludeSourceDomain": true,
            "contents": { "text": { "maxCharacters": 10000 }, "highlights": true }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let req = FindSimilarRequest::new("https://example.com")
        .with_num_results(3)
        .with_exclude_source_domain(true)
        .with_option("contents", json!({ "text": { "maxCharacters": 10000 } }))
        .with_highlights(true);

    let client = client_for(server.uri());
    client.find_similar().create(req).await.unwrap();
}

#[tokio::test]
async fn find_similar_without_contents() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/findSimilar"))
        .and(body_json(json!({ "url": "https://example.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(server.uri());
    client
        .find_similar()
        .create(FindSimilarRequest::new("https://example.com").without_contents())
        .await
        .unwrap();
}
