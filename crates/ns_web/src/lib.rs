use axum::{routing::post, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;
use ns_core::Result;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/summarize", post(handlers::summarize))
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Binds `addr` and serves the API until the process stops.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🚀 Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, create_app(state)).await?;
    Ok(())
}

pub mod prelude {
    pub use ns_core::{Error, ProcessingError, Result, SummaryPipeline};
    pub use crate::{create_app, serve, AppState};
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use chrono::NaiveDate;
    use ns_core::{ArticleData, ArticleSource, SummaryPipeline, PROCESSING_FAILED_DETAIL};
    use ns_inference::providers::DummyTranslator;
    use ns_inference::LexiconScorer;
    use ns_scrapers::{ArticleScraper, ScraperConfig};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    struct FixedSource(ArticleData);

    #[async_trait]
    impl ArticleSource for FixedSource {
        async fn fetch_article(&self, _url: &str) -> Result<ArticleData> {
            Ok(self.0.clone())
        }
    }

    struct PrefixTranslator;

    #[async_trait]
    impl ns_core::TranslationProvider for PrefixTranslator {
        fn name(&self) -> &str {
            "prefix"
        }

        async fn translate(&self, text: &str, target_language: &str) -> Result<String> {
            Ok(format!("({}) {}", target_language, text))
        }
    }

    fn article(authors: Vec<&str>) -> ArticleData {
        ArticleData {
            url: "https://news.example.com/story".to_string(),
            title: "Harbor reopens".to_string(),
            authors: authors.into_iter().map(String::from).collect(),
            publication_date: NaiveDate::from_ymd_opt(2024, 3, 5),
            full_text: "The harbor reopened today. Fishermen were happy with the great news.".to_string(),
            summary: "The harbor reopened today.".to_string(),
        }
    }

    fn app_with(source: Arc<dyn ArticleSource>) -> Router {
        let pipeline = SummaryPipeline::new(source, Arc::new(PrefixTranslator), Arc::new(LexiconScorer::new()));
        create_app(AppState::new(pipeline))
    }

    fn summarize_request(body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/summarize")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_summarize_success() {
        let app = app_with(Arc::new(FixedSource(article(vec!["Jane Doe", "John Roe"]))));
        let response = app
            .oneshot(summarize_request(json!({"url": "https://news.example.com/story", "target_language": "es"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["summary"], "The harbor reopened today.");
        assert_eq!(body["translated_summary"], "(es) The harbor reopened today.");
        assert_eq!(body["title"], "Harbor reopens");
        assert_eq!(body["author"], "Jane Doe");
        assert_eq!(body["publication_date"], "2024-03-05");

        let polarity = body["sentiment"]["polarity"].as_f64().unwrap();
        assert!((-1.0..=1.0).contains(&polarity));
        assert!(polarity > 0.0);
        assert_eq!(body["sentiment"]["sentiment"], "positive");
    }

    #[tokio::test]
    async fn test_unreachable_url_returns_uniform_error() {
        let scraper = ArticleScraper::new(ScraperConfig::default()).unwrap();
        let pipeline = SummaryPipeline::new(
            Arc::new(scraper),
            Arc::new(DummyTranslator::new()),
            Arc::new(LexiconScorer::new()),
        );
        let app = create_app(AppState::new(pipeline));

        let response = app
            .oneshot(summarize_request(json!({"url": "http://127.0.0.1:9/story", "target_language": "es"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(response).await, json!({"detail": PROCESSING_FAILED_DETAIL}));
    }

    #[tokio::test]
    async fn test_article_without_author_fails() {
        let app = app_with(Arc::new(FixedSource(article(vec![]))));
        let response = app
            .oneshot(summarize_request(json!({"url": "https://news.example.com/story", "target_language": "es"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(response).await, json!({"detail": PROCESSING_FAILED_DETAIL}));
    }

    #[tokio::test]
    async fn test_malformed_body_returns_uniform_error() {
        let app = app_with(Arc::new(FixedSource(article(vec!["Jane Doe"]))));
        let response = app
            .oneshot(summarize_request(json!({"url": "https://news.example.com/story"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(response).await, json!({"detail": PROCESSING_FAILED_DETAIL}));
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let app = app_with(Arc::new(FixedSource(article(vec!["Jane Doe"]))));
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/summarize")
            .header(header::ORIGIN, "http://localhost:4200")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }
}
