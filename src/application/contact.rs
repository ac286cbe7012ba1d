//! Contact form submission and delivery.

use std::sync::Arc;

use metrics::counter;
use thiserror::Error;
use tracing::{error, info};

use crate::{
    application::{
        counters,
        mailer::{MailError, Mailer},
    },
    domain::{
        contact::{ContactForm, ContactMessage, Subject},
        validation::FieldErrors,
    },
    presentation::views::{ContactFormView, FormNotice, SelectOption},
};

const SOURCE: &str = "application::contact::ContactService";

pub const SUCCESS_TITLE: &str = "Message Sent Successfully!";
pub const SUCCESS_MESSAGE: &str = "Thank you for contacting us. We've received your message and will get back to you within 24 hours.";
pub const FAILURE_TITLE: &str = "Message Not Sent";
pub const FAILURE_MESSAGE: &str =
    "Something went wrong while sending your message. Please try again.";

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("contact form has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors),
    #[error("contact message could not be delivered")]
    Delivery(#[source] MailError),
}

#[derive(Clone)]
pub struct ContactService {
    mailer: Arc<dyn Mailer>,
}

impl ContactService {
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }

    /// Validates and delivers one message. Failed deliveries are reported, never retried.
    pub async fn submit(&self, form: &ContactForm) -> Result<ContactMessage, ContactError> {
        counter!(counters::CONTACT_SUBMISSIONS).increment(1);

        let message = form.validate().map_err(|errors| {
            counter!(counters::FORM_REJECTIONS, "form" => "contact").increment(1);
            ContactError::Invalid(errors)
        })?;

        if let Err(err) = self.mailer.send(&message).await {
            counter!(counters::CONTACT_DELIVERY_FAILURES).increment(1);
            error!(
                target = SOURCE,
                subject = message.subject.as_str(),
                error = %err,
                "contact message delivery failed"
            );
            return Err(ContactError::Delivery(err));
        }

        info!(
            target = SOURCE,
            subject = message.subject.as_str(),
            preferred_contact = message.preferred_contact.as_str(),
            "contact message delivered"
        );
        Ok(message)
    }
}

/// Contact form state; the subject list keeps the submitted choice selected.
pub fn form_view(
    values: ContactForm,
    errors: FieldErrors,
    notice: Option<FormNotice>,
) -> ContactFormView {
    let subjects = Subject::ALL
        .into_iter()
        .map(|subject| SelectOption {
            value: subject.as_str().to_string(),
            label: subject.label().to_string(),
            selected: values.subject.trim() == subject.as_str(),
        })
        .collect();

    ContactFormView {
        values,
        errors,
        subjects,
        notice,
    }
}

pub fn success_notice() -> FormNotice {
    FormNotice {
        success: true,
        title: SUCCESS_TITLE.to_string(),
        message: SUCCESS_MESSAGE.to_string(),
    }
}

pub fn failure_notice() -> FormNotice {
    FormNotice {
        success: false,
        title: FAILURE_TITLE.to_string(),
        message: FAILURE_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    #[derive(Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<ContactMessage>>,
        fail: bool,
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, message: &ContactMessage) -> Result<(), MailError> {
            if self.fail {
                return Err(MailError::Transport("connection refused".to_string()));
            }
            self.sent
                .lock()
                .expect("mailer lock")
                .push(message.clone());
            Ok(())
        }
    }

    fn filled() -> ContactForm {
        ContactForm {
            name: "Arjun Iyer".to_string(),
            email: "arjun@example.com".to_string(),
            phone: "  ".to_string(),
            subject: "investment".to_string(),
            message: "Looking to start a SIP.".to_string(),
            preferred_contact: "email".to_string(),
        }
    }

    #[tokio::test]
    async fn valid_submission_is_delivered_once() {
        let mailer = Arc::new(RecordingMailer::default());
        let service = ContactService::new(mailer.clone());

        let message = service.submit(&filled()).await.expect("delivered");

        assert_eq!(message.subject, Subject::Investment);
        let sent = mailer.sent.lock().expect("mailer lock");
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].phone, None);
    }

    #[tokio::test]
    async fn invalid_submission_never_reaches_the_mailer() {
        let mailer = Arc::new(RecordingMailer::default());
        let service = ContactService::new(mailer.clone());

        let err = service
            .submit(&ContactForm::default())
            .await
            .expect_err("invalid");

        assert!(matches!(err, ContactError::Invalid(ref errors) if errors.contains("name")));
        assert!(mailer.sent.lock().expect("mailer lock").is_empty());
    }

    #[tokio::test]
    async fn delivery_failure_is_surfaced() {
        let service = ContactService::new(Arc::new(RecordingMailer {
            fail: true,
            ..RecordingMailer::default()
        }));

        let err = service.submit(&filled()).await.expect_err("failed");
        assert!(matches!(err, ContactError::Delivery(MailError::Transport(_))));
    }

    #[test]
    fn form_view_keeps_selected_subject() {
        let view = form_view(filled(), FieldErrors::new(), Some(success_notice()));

        assert_eq!(view.subjects.len(), Subject::ALL.len());
        let selected: Vec<_> = view.subjects.iter().filter(|s| s.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].label, "Investment Planning");
        assert!(view.notice.as_ref().is_some_and(|notice| notice.success));
    }
}
