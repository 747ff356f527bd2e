use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::api::mailer::{self, OutgoingEmail};
use crate::handlers::intake_dtos::ContactRequest;
use crate::AppState;

pub async fn submit_contact_form(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ContactRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let name = payload.name.as_deref().unwrap_or("").trim();
    let email = payload.email.as_deref().unwrap_or("").trim();
    let message = payload.message.as_deref().unwrap_or("");

    if name.is_empty() || email.is_empty() || message.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Missing required fields"})),
        ));
    }

    let inquiry_type = payload.inquiry_type.unwrap_or_default();

    let outgoing = OutgoingEmail {
        to: mailer::operator_address(),
        reply_to: Some(email.to_string()),
        subject: format!("New {} inquiry from {}", inquiry_type, name),
        html: format!(
            "<h2>New Contact Form Submission</h2>\
             <p><strong>Name:</strong> {}</p>\
             <p><strong>Email:</strong> {}</p>\
             <p><strong>Inquiry Type:</strong> {}</p>\
             <p><strong>Message:</strong></p>\
             <p>{}</p>",
            name,
            email,
            inquiry_type,
            message.replace('\n', "<br>")
        ),
    };

    match state.mailer.send(outgoing).await {
        Ok(()) => Ok(Json(json!({"success": true}))),
        Err(e) => {
            tracing::error!("contact form delivery failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to send message"})),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mailer::{Mailer, RecordingMailer};

    fn state_with(recorder: RecordingMailer) -> Arc<AppState> {
        Arc::new(AppState {
            mailer: Mailer::Recording(recorder),
        })
    }

    fn request(body: serde_json::Value) -> ContactRequest {
        serde_json::from_value(body).unwrap()
    }

    #[tokio::test]
    async fn defaults_the_inquiry_type_to_general() {
        let recorder = RecordingMailer::default();
        let result = submit_contact_form(
            State(state_with(recorder.clone())),
            Json(request(json!({
                "name": "Jane",
                "email": "jane@x.com",
                "message": "Hi"
            }))),
        )
        .await;

        assert!(result.is_ok());
        let sent = recorder.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].subject.contains("General"));
        assert!(sent[0].subject.contains("Jane"));
        assert_eq!(sent[0].reply_to.as_deref(), Some("jane@x.com"));
    }

    #[tokio::test]
    async fn carries_the_selected_inquiry_type_into_the_subject() {
        let recorder = RecordingMailer::default();
        let result = submit_contact_form(
            State(state_with(recorder.clone())),
            Json(request(json!({
                "name": "Ada",
                "email": "ada@x.com",
                "inquiryType": "brand-partnership",
                "message": "Let's talk"
            }))),
        )
        .await;

        assert!(result.is_ok());
        let sent = recorder.sent.lock().unwrap();
        assert_eq!(
            sent[0].subject,
            "New Brand Partnership inquiry from Ada"
        );
    }

    #[tokio::test]
    async fn rejects_a_missing_message() {
        let result = submit_contact_form(
            State(state_with(RecordingMailer::default())),
            Json(request(json!({"name": "Jane", "email": "jane@x.com"}))),
        )
        .await;

        let (status, Json(body)) = result.err().unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Missing required fields"}));
    }

    #[tokio::test]
    async fn rejects_whitespace_only_fields() {
        let result = submit_contact_form(
            State(state_with(RecordingMailer::default())),
            Json(request(json!({
                "name": "   ",
                "email": "jane@x.com",
                "message": "Hi"
            }))),
        )
        .await;

        assert_eq!(result.err().unwrap().0, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn turns_message_newlines_into_breaks() {
        let recorder = RecordingMailer::default();
        let _ = submit_contact_form(
            State(state_with(recorder.clone())),
            Json(request(json!({
                "name": "Jane",
                "email": "jane@x.com",
                "message": "line one\nline two"
            }))),
        )
        .await;

        let sent = recorder.sent.lock().unwrap();
        assert!(sent[0].html.contains("line one<br>line two"));
    }

    #[tokio::test]
    async fn surfaces_delivery_failure_as_a_generic_500() {
        let recorder = RecordingMailer {
            fail: true,
            ..RecordingMailer::default()
        };
        let result = submit_contact_form(
            State(state_with(recorder)),
            Json(request(json!({
                "name": "Jane",
                "email": "jane@x.com",
                "message": "Hi"
            }))),
        )
        .await;

        let (status, Json(body)) = result.err().unwrap();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Failed to send message"}));
    }
}
