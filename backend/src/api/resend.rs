use reqwest::Client;
use serde::Serialize;

use crate::api::mailer::DeliveryError;

const RESEND_API_BASE: &str = "https://api.resend.com";

#[derive(Serialize, Debug, Clone)]
pub struct SendEmailRequest {
    pub from: String,
    pub to: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: String,
}

#[derive(Serialize)]
struct CreateContactRequest<'a> {
    email: &'a str,
}

pub struct ResendClient {
    client: Client,
    api_key: String,
}

impl ResendClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    pub async fn send_email(&self, request: &SendEmailRequest) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(format!("{}/emails", RESEND_API_BASE))
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DeliveryError::Api { status, body });
        }
        Ok(())
    }

    pub async fn add_contact(&self, audience_id: &str, email: &str) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(format!(
                "{}/audiences/{}/contacts",
                RESEND_API_BASE, audience_id
            ))
            .bearer_auth(&self.api_key)
            .json(&CreateContactRequest { email })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DeliveryError::Api { status, body });
        }
        Ok(())
    }
}
