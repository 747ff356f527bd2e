use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use std::sync::Arc;

mod handlers {
    pub mod contact_handlers;
    pub mod newsletter_handlers;
    pub mod intake_dtos;
}
mod api {
    pub mod mailer;
    pub mod resend;
}

use handlers::contact_handlers;
use handlers::newsletter_handlers;
use api::mailer::Mailer;

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    pub mailer: Mailer,
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(contact_handlers::submit_contact_form))
        .route("/api/newsletter", post(newsletter_handlers::subscribe))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any) // Be cautious with `Any` in production; restrict to your frontend origin
                .allow_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state)
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let state = Arc::new(AppState {
        mailer: Mailer::from_env(),
    });

    use tokio::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:3001").await.unwrap();
    axum::serve(listener, app(state).into_make_service()).await.unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use crate::api::mailer::RecordingMailer;

    fn test_app(recorder: RecordingMailer) -> Router {
        app(Arc::new(AppState {
            mailer: Mailer::Recording(recorder),
        }))
    }

    fn json_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_check_responds() {
        let response = test_app(RecordingMailer::default())
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn contact_route_accepts_a_minimal_submission() {
        let recorder = RecordingMailer::default();
        let response = test_app(recorder.clone())
            .oneshot(json_post(
                "/api/contact",
                r#"{"name":"Jane","email":"jane@x.com","message":"Hi"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({"success": true}));
        assert_eq!(recorder.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn contact_route_rejects_missing_fields() {
        let response = test_app(RecordingMailer::default())
            .oneshot(json_post(
                "/api/contact",
                r#"{"name":"Jane","email":"jane@x.com"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Missing required fields"})
        );
    }

    #[tokio::test]
    async fn newsletter_route_rejects_invalid_email() {
        let response = test_app(RecordingMailer::default())
            .oneshot(json_post("/api/newsletter", r#"{"email":"not-an-email"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Invalid email address"})
        );
    }

    #[tokio::test]
    async fn newsletter_route_subscribes_a_valid_email() {
        let recorder = RecordingMailer::default();
        let response = test_app(recorder.clone())
            .oneshot(json_post("/api/newsletter", r#"{"email":"a@b.com"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({"success": true}));
        assert_eq!(recorder.audience.lock().unwrap().as_slice(), ["a@b.com"]);
    }
}
