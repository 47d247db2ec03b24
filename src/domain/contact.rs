//! Contact form model
//!
//! Field definitions, the JSON payload posted to the mail relay, and the
//! mapping from a delivery outcome to what the user is told.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const REJECTION_FALLBACK: &str = "Failed to send message";
pub const TRANSPORT_FAILURE: &str = "Failed to send message. Please try again.";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, Serialize, Deserialize,
)]
pub enum Field {
    #[default]
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Subject,
            Field::Subject => Field::Message,
            Field::Message => Field::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Subject => Field::Email,
            Field::Message => Field::Subject,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Email Address",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "John Doe",
            Field::Email => "john@example.com",
            Field::Subject => "Project Inquiry",
            Field::Message => "Tell me about your project...",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, Field::Message)
    }
}

/// Body of the mail relay request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactPayload {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// First required field left empty, in form order.
    pub fn first_missing(&self) -> Option<Field> {
        [Field::Name, Field::Email, Field::Subject, Field::Message]
            .into_iter()
            .find(|field| self.get(*field).is_empty())
    }
}

/// Identifies one submission within one visit of the contact page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SubmissionId {
    pub visit: u64,
    pub seq: u64,
}

/// Terminal result of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MailOutcome {
    Sent,
    /// Non-success status; `message` is the relay's `error` field if any
    Rejected { message: Option<String> },
    /// No response was obtained
    TransportFailed,
}

/// A blocking notification the user must dismiss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn error(body: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            body: body.into(),
        }
    }
}

impl MailOutcome {
    /// The blocking notice for a failed outcome.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            MailOutcome::Sent => None,
            MailOutcome::Rejected { message } => Some(Notice::error(
                message
                    .as_deref()
                    .filter(|m| !m.is_empty())
                    .unwrap_or(REJECTION_FALLBACK),
            )),
            MailOutcome::TransportFailed => Some(Notice::error(TRANSPORT_FAILURE)),
        }
    }
}
