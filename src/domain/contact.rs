use serde::{Deserialize, Serialize};

use super::validation::{self, FieldErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Consultation,
    Investment,
    Retirement,
    Tax,
    Business,
    Other,
}

impl Subject {
    pub const ALL: [Subject; 6] = [
        Subject::Consultation,
        Subject::Investment,
        Subject::Retirement,
        Subject::Tax,
        Subject::Business,
        Subject::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Subject::Consultation => "consultation",
            Subject::Investment => "investment",
            Subject::Retirement => "retirement",
            Subject::Tax => "tax",
            Subject::Business => "business",
            Subject::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Subject::Consultation => "Free Consultation",
            Subject::Investment => "Investment Planning",
            Subject::Retirement => "Retirement Planning",
            Subject::Tax => "Tax Services",
            Subject::Business => "Business Finance",
            Subject::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|subject| subject.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferredContact {
    #[default]
    Email,
    Phone,
}

impl PreferredContact {
    pub fn as_str(self) -> &'static str {
        match self {
            PreferredContact::Email => "email",
            PreferredContact::Phone => "phone",
        }
    }

    /// Anything other than `phone` falls back to email, the form's default choice.
    pub fn parse(value: &str) -> Self {
        if value.trim() == "phone" {
            PreferredContact::Phone
        } else {
            PreferredContact::Email
        }
    }
}

/// Raw contact form fields as posted by the browser.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub preferred_contact: String,
}

/// A validated contact message, ready to hand to the mailer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Subject,
    pub message: String,
    pub preferred_contact: PreferredContact,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactMessage, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = validation::required(&mut errors, "name", &self.name, "Name is required");
        let email = validation::email(
            &mut errors,
            "email",
            &self.email,
            "Please enter a valid email address",
        );
        let subject = Subject::parse(self.subject.trim());
        if subject.is_none() {
            errors.insert("subject", "Please select a subject");
        }
        let message =
            validation::required(&mut errors, "message", &self.message, "Message is required");

        match subject {
            Some(subject) if errors.is_empty() => Ok(ContactMessage {
                name,
                email,
                phone: validation::optional(&self.phone),
                subject,
                message,
                preferred_contact: PreferredContact::parse(&self.preferred_contact),
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Anika Rao".to_string(),
            email: "anika@example.com".to_string(),
            phone: String::new(),
            subject: "retirement".to_string(),
            message: "I'd like to review my pension options.".to_string(),
            preferred_contact: "phone".to_string(),
        }
    }

    #[test]
    fn valid_form_produces_message() {
        let message = filled().validate().expect("valid form");

        assert_eq!(message.subject, Subject::Retirement);
        assert_eq!(message.preferred_contact, PreferredContact::Phone);
        assert_eq!(message.phone, None);
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = ContactForm::default().validate().expect_err("invalid form");

        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("subject"), Some("Please select a subject"));
        assert_eq!(errors.get("message"), Some("Message is required"));
        assert!(!errors.contains("phone"));
    }

    #[test]
    fn unknown_subject_is_rejected() {
        let form = ContactForm {
            subject: "lottery".to_string(),
            ..filled()
        };

        let errors = form.validate().expect_err("invalid subject");
        assert_eq!(errors.get("subject"), Some("Please select a subject"));
    }

    #[test]
    fn preferred_contact_defaults_to_email() {
        let form = ContactForm {
            preferred_contact: String::new(),
            ..filled()
        };

        let message = form.validate().expect("valid form");
        assert_eq!(message.preferred_contact, PreferredContact::Email);
    }
}
