use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::json;

use crate::api::mailer::OutgoingEmail;
use crate::handlers::intake_dtos::NewsletterRequest;
use crate::AppState;

// Deliberately loose: this is the pattern the signup forms have always used.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must compile"));

const WELCOME_SUBJECT: &str = "Welcome to Healthspan Productions!";

const WELCOME_HTML: &str = r#"<div style="font-family: 'Outfit', Arial, sans-serif; max-width: 600px; margin: 0 auto; background-color: #0D1B2A; color: #F8F9FA; padding: 40px;">
  <h1 style="color: #00A896; font-family: 'Cormorant Garamond', Georgia, serif; font-size: 32px; margin-bottom: 24px;">Welcome to Healthspan Productions</h1>
  <p style="font-size: 16px; line-height: 1.6; margin-bottom: 16px;">Thank you for joining our community of longevity enthusiasts and health innovators.</p>
  <p style="font-size: 16px; line-height: 1.6; margin-bottom: 16px;">You'll be the first to know about:</p>
  <ul style="font-size: 16px; line-height: 1.8; margin-bottom: 24px;">
    <li>Upcoming summits and events</li>
    <li>Exclusive speaker announcements</li>
    <li>Early access to registration</li>
    <li>Insights from leading longevity experts</li>
  </ul>
  <p style="font-size: 16px; line-height: 1.6; color: #00A896;">Here's to your healthspan,</p>
  <p style="font-size: 16px; line-height: 1.6;"><strong>The Healthspan Productions Team</strong></p>
</div>"#;

pub async fn subscribe(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewsletterRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let email = payload.email.as_deref().unwrap_or("").trim().to_string();

    if email.is_empty() || !EMAIL_PATTERN.is_match(&email) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Invalid email address"})),
        ));
    }

    if let Err(e) = state.mailer.add_to_audience(&email).await {
        tracing::error!("newsletter audience registration failed: {}", e);
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Failed to subscribe"})),
        ));
    }

    let welcome = OutgoingEmail {
        to: email,
        reply_to: None,
        subject: WELCOME_SUBJECT.to_string(),
        html: WELCOME_HTML.to_string(),
    };

    match state.mailer.send(welcome).await {
        Ok(()) => Ok(Json(json!({"success": true}))),
        Err(e) => {
            tracing::error!("welcome email delivery failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to subscribe"})),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mailer::{Mailer, RecordingMailer};

    fn state_with(mailer: Mailer) -> Arc<AppState> {
        Arc::new(AppState { mailer })
    }

    fn request(email: &str) -> NewsletterRequest {
        serde_json::from_value(json!({ "email": email })).unwrap()
    }

    #[tokio::test]
    async fn rejects_an_address_without_a_domain_dot() {
        let result = subscribe(
            State(state_with(Mailer::Recording(RecordingMailer::default()))),
            Json(request("not-an-email")),
        )
        .await;

        let (status, Json(body)) = result.err().unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid email address"}));
    }

    #[tokio::test]
    async fn rejects_a_missing_email() {
        let payload: NewsletterRequest = serde_json::from_value(json!({})).unwrap();
        let result = subscribe(
            State(state_with(Mailer::Recording(RecordingMailer::default()))),
            Json(payload),
        )
        .await;

        assert_eq!(result.err().unwrap().0, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn accepts_plus_addressing() {
        let recorder = RecordingMailer::default();
        let result = subscribe(
            State(state_with(Mailer::Recording(recorder.clone()))),
            Json(request("jane+events@longevity.example")),
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(
            recorder.audience.lock().unwrap().as_slice(),
            ["jane+events@longevity.example"]
        );
    }

    #[tokio::test]
    async fn registers_then_sends_the_welcome_email() {
        let recorder = RecordingMailer::default();
        let result = subscribe(
            State(state_with(Mailer::Recording(recorder.clone()))),
            Json(request("a@b.com")),
        )
        .await;

        assert!(result.is_ok());
        let sent = recorder.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "a@b.com");
        assert_eq!(sent[0].subject, WELCOME_SUBJECT);
        assert!(sent[0].reply_to.is_none());
    }

    #[tokio::test]
    async fn succeeds_without_a_configured_provider() {
        let result = subscribe(State(state_with(Mailer::Log)), Json(request("a@b.com"))).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn surfaces_provider_failure_as_a_generic_500() {
        let recorder = RecordingMailer {
            fail: true,
            ..RecordingMailer::default()
        };
        let result = subscribe(
            State(state_with(Mailer::Recording(recorder))),
            Json(request("a@b.com")),
        )
        .await;

        let (status, Json(body)) = result.err().unwrap();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Failed to subscribe"}));
    }
}
