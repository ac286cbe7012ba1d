//! Outbound delivery port for contact messages.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::contact::ContactMessage;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("mail endpoint returned {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("mail transport failed: {0}")]
    Transport(String),
}

#[async_trait]
pub trait Mailer: Send + Sync {
    /// Delivers one message. Callers never retry a failed delivery.
    async fn send(&self, message: &ContactMessage) -> Result<(), MailError>;
}
