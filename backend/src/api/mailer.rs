use std::env;

use crate::api::resend::{ResendClient, SendEmailRequest};

const DEFAULT_FROM: &str = "Healthspan Productions <noreply@healthspanevents.com>";
const DEFAULT_OPERATOR: &str = "connect@healthspanevents.com";

/// Operator inbox that receives contact-form submissions.
pub fn operator_address() -> String {
    env::var("CONTACT_EMAIL").unwrap_or_else(|_| DEFAULT_OPERATOR.to_string())
}

#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("request to delivery provider failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("delivery provider returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[cfg(test)]
    #[error("simulated delivery failure")]
    Simulated,
}

/// Email delivery capability. `Resend` talks to the live provider, `Log`
/// records submissions locally and still reports success so the site works
/// without credentials.
pub enum Mailer {
    Resend {
        client: ResendClient,
        from: String,
        audience_id: Option<String>,
    },
    Log,
    #[cfg(test)]
    Recording(RecordingMailer),
}

impl Mailer {
    pub fn from_env() -> Self {
        match env::var("RESEND_API_KEY") {
            Ok(key) if !key.is_empty() => {
                tracing::info!("email delivery enabled via Resend");
                Mailer::Resend {
                    client: ResendClient::new(key),
                    from: env::var("RESEND_FROM_EMAIL")
                        .unwrap_or_else(|_| DEFAULT_FROM.to_string()),
                    audience_id: env::var("RESEND_AUDIENCE_ID")
                        .ok()
                        .filter(|id| !id.is_empty()),
                }
            }
            _ => {
                tracing::info!("RESEND_API_KEY not set, submissions will be logged only");
                Mailer::Log
            }
        }
    }

    pub async fn send(&self, email: OutgoingEmail) -> Result<(), DeliveryError> {
        match self {
            Mailer::Resend { client, from, .. } => {
                client
                    .send_email(&SendEmailRequest {
                        from: from.clone(),
                        to: vec![email.to],
                        reply_to: email.reply_to,
                        subject: email.subject,
                        html: email.html,
                    })
                    .await
            }
            Mailer::Log => {
                tracing::info!(
                    to = %email.to,
                    reply_to = %email.reply_to.as_deref().unwrap_or("-"),
                    subject = %email.subject,
                    "email delivery not configured, logging submission instead"
                );
                Ok(())
            }
            #[cfg(test)]
            Mailer::Recording(recorder) => {
                if recorder.fail {
                    return Err(DeliveryError::Simulated);
                }
                recorder.sent.lock().unwrap().push(email);
                Ok(())
            }
        }
    }

    /// Registers an address with the configured audience. A missing audience
    /// id is not an error: registration is simply skipped.
    pub async fn add_to_audience(&self, email: &str) -> Result<(), DeliveryError> {
        match self {
            Mailer::Resend {
                client,
                audience_id: Some(id),
                ..
            } => client.add_contact(id, email).await,
            Mailer::Resend { .. } => Ok(()),
            Mailer::Log => {
                tracing::info!(%email, "newsletter signup (delivery not configured)");
                Ok(())
            }
            #[cfg(test)]
            Mailer::Recording(recorder) => {
                if recorder.fail {
                    return Err(DeliveryError::Simulated);
                }
                recorder.audience.lock().unwrap().push(email.to_string());
                Ok(())
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub struct RecordingMailer {
    pub sent: std::sync::Arc<std::sync::Mutex<Vec<OutgoingEmail>>>,
    pub audience: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
    pub fail: bool,
}
