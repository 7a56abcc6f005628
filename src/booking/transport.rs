use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};

/// Mail handed to a transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingMail {
    pub from: String,
    pub to: Vec<String>,
    pub reply_to: String,
    pub subject: String,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Mail API key missing: environment variable {0} is not set")]
    MissingApiKey(String),

    #[error("Mail request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Mail API rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn deliver(&self, mail: &OutgoingMail) -> Result<(), TransportError>;

    fn name(&self) -> &str;
}

/// JSON mail API client (Resend-compatible payload, bearer auth)
#[derive(Debug, Clone)]
pub struct HttpMailTransport {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl HttpMailTransport {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Reads the API key from `api_key_env`
    pub fn from_env(endpoint: impl Into<String>, api_key_env: &str) -> Result<Self, TransportError> {
        let api_key = std::env::var(api_key_env)
            .map_err(|_| TransportError::MissingApiKey(api_key_env.to_string()))?;
        Ok(Self::new(endpoint, api_key))
    }
}

#[async_trait]
impl MailTransport for HttpMailTransport {
    async fn deliver(&self, mail: &OutgoingMail) -> Result<(), TransportError> {
        debug!("POST {} ({})", self.endpoint, mail.subject);
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(mail)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        info!("Mail API accepted booking mail with status {}", status);
        Ok(())
    }

    fn name(&self) -> &str {
        "http"
    }
}

/// Development transport: logs the mail instead of sending it
#[derive(Debug, Clone, Default)]
pub struct LogTransport;

#[async_trait]
impl MailTransport for LogTransport {
    async fn deliver(&self, mail: &OutgoingMail) -> Result<(), TransportError> {
        info!(
            "Booking mail from {} to {:?} (reply-to {}): {}\n{}",
            mail.from, mail.to, mail.reply_to, mail.subject, mail.text
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "log"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_is_reported() {
        let result = HttpMailTransport::from_env(
            "https://mail.invalid/emails",
            "TIDEWALK_TEST_KEY_THAT_IS_NEVER_SET",
        );
        assert!(matches!(result, Err(TransportError::MissingApiKey(_))));
    }

    #[test]
    fn payload_uses_api_field_names() {
        let mail = OutgoingMail {
            from: "a@site.example".into(),
            to: vec!["b@site.example".into()],
            reply_to: "c@example.org".into(),
            subject: "Hello".into(),
            text: "Body".into(),
        };
        let value = serde_json::to_value(&mail).unwrap();
        assert_eq!(value["reply_to"], "c@example.org");
        assert_eq!(value["to"][0], "b@site.example");
    }

    #[tokio::test]
    async fn log_transport_always_succeeds() {
        let mail = OutgoingMail {
            from: "a@site.example".into(),
            to: vec!["b@site.example".into()],
            reply_to: "c@example.org".into(),
            subject: "Hello".into(),
            text: "Body".into(),
        };
        assert!(LogTransport.deliver(&mail).await.is_ok());
    }
}
