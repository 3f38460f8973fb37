//! Router integration tests
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use httpmock::prelude::*;
use pressbody_core::FetchConfig;
use pressbody_server::{AppState, app};
use serde_json::{Value, json};
use tower::ServiceExt;

fn router() -> axum::Router {
    app(AppState::new(FetchConfig::default()).unwrap())
}

fn scrape_uri(params: &[(&str, &str)]) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    for (k, v) in params {
        query.append_pair(k, v);
    }
    format!("/scrape?{}", query.finish())
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_missing_url() {
    for uri in [
        "/scrape".to_string(),
        scrape_uri(&[("source_name", "동아일보")]),
        scrape_uri(&[("source_name", "UnknownPress")]),
        scrape_uri(&[("source_name", "SBS"), ("url", "")]),
    ] {
        let (status, body) = get(&uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, json!({ "error": "source_name과 url이 필요합니다." }));
    }
}

#[tokio::test]
async fn test_missing_source_name() {
    let (status, body) = get(&scrape_uri(&[("url", "http://x")])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "source_name과 url이 필요합니다." }));
}

#[tokio::test]
async fn test_unsupported_publisher() {
    let (status, body) = get("/scrape?source_name=UnknownPress&url=http://x").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "지원하지 않는 언론사입니다." }));
}

#[tokio::test]
async fn test_publisher_match_is_case_sensitive() {
    let (status, body) = get(&scrape_uri(&[("source_name", "sbs"), ("url", "http://x")])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "지원하지 않는 언론사입니다." }));
}

#[tokio::test]
async fn test_scrape_success() {
    let server = MockServer::start_async().await;
    let article_url = server.url("/news/1");
    server
        .mock_async(|when, then| {
            when.method(GET).path("/news/1").header("referer", article_url.as_str());
            then.status(200).body(r#"<html><body><div class="news_view">Hello<br>World</div></body></html>"#);
        })
        .await;

    let (status, body) = get(&scrape_uri(&[("source_name", "동아일보"), ("url", &article_url)])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "content": "Hello\nWorld" }));
}

#[tokio::test]
async fn test_scrape_paragraph_join() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/hani");
            then.status(200).body(
                r#"<div class="article-text">
                    <p class="text">첫 번째 문단은 본문의 시작 부분입니다.</p>
                    <p class="text">두 번째 문단은 본문의 끝 부분입니다.</p>
                </div>"#,
            );
        })
        .await;

    let (status, body) = get(&scrape_uri(&[("source_name", "Hani"), ("url", &server.url("/hani"))])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "content": "첫 번째 문단은 본문의 시작 부분입니다.\n두 번째 문단은 본문의 끝 부분입니다." })
    );
}

#[tokio::test]
async fn test_empty_extraction_is_404() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/empty");
            then.status(200).body("<html><body><div class=\"ad\">광고</div></body></html>");
        })
        .await;

    let (status, body) = get(&scrape_uri(&[("source_name", "Chosun"), ("url", &server.url("/empty"))])).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "본문을 찾을 수 없습니다." }));
}

#[tokio::test]
async fn test_upstream_failure_is_500() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/down");
            then.status(503).body("unavailable");
        })
        .await;

    let (status, body) = get(&scrape_uri(&[("source_name", "Mbn"), ("url", &server.url("/down"))])).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch data" }));
}

#[tokio::test]
async fn test_invalid_url_is_500() {
    let (status, body) = get(&scrape_uri(&[("source_name", "Chosun"), ("url", "not a url")])).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch data" }));
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let response = router()
        .oneshot(
            Request::builder()
                .uri("/scrape")
                .header(header::ORIGIN, "https://news.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_unknown_route() {
    let response = router()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
