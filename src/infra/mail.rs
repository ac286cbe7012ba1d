//! Mail adapters: the transactional email HTTP API and a log-only fallback.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{info, warn};

use crate::{
    application::mailer::{MailError, Mailer},
    config::{MailCredentials, MailSettings},
    domain::contact::ContactMessage,
};

use super::error::InfraError;

/// Picks the HTTP mailer when credentials are configured, the log mailer otherwise.
pub fn build_mailer(settings: &MailSettings) -> Result<Arc<dyn Mailer>, InfraError> {
    match settings.credentials.as_ref() {
        Some(credentials) => Ok(Arc::new(EmailJsMailer::new(
            &settings.endpoint,
            credentials.clone(),
            settings.timeout,
        )?)),
        None => {
            warn!(
                target = "infra::mail::build_mailer",
                "mail credentials are not configured; contact messages will only be logged"
            );
            Ok(Arc::new(LogMailer))
        }
    }
}

#[derive(Debug, Clone)]
pub struct EmailJsMailer {
    client: Client,
    endpoint: String,
    credentials: MailCredentials,
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    phone: &'a str,
    subject: &'a str,
    message: &'a str,
    preferred_contact: &'a str,
}

impl EmailJsMailer {
    pub fn new(
        endpoint: &str,
        credentials: MailCredentials,
        timeout: std::time::Duration,
    ) -> Result<Self, InfraError> {
        let client = Client::builder()
            .user_agent(concat!("suncrest/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(InfraError::MailClient)?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            credentials,
        })
    }
}

#[async_trait]
impl Mailer for EmailJsMailer {
    async fn send(&self, message: &ContactMessage) -> Result<(), MailError> {
        let payload = SendRequest {
            service_id: &self.credentials.service_id,
            template_id: &self.credentials.template_id,
            user_id: &self.credentials.public_key,
            template_params: TemplateParams {
                from_name: &message.name,
                from_email: &message.email,
                phone: message.phone.as_deref().unwrap_or_default(),
                subject: message.subject.label(),
                message: &message.message,
                preferred_contact: message.preferred_contact.as_str(),
            },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|err| MailError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

/// Accepts every message and records it in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: &ContactMessage) -> Result<(), MailError> {
        info!(
            target = "infra::mail::LogMailer",
            subject = message.subject.as_str(),
            preferred_contact = message.preferred_contact.as_str(),
            message_len = message.message.len(),
            "contact message accepted without delivery"
        );
        Ok(())
    }
}
