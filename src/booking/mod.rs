//! Booking inquiries
//!
//! Collects the booking form, validates it and forwards it as an email
//! through a [`MailTransport`]. Delivery is attempted once; the visitor sees
//! a plain [`BookingOutcome`] status and failures are never retried
//! automatically.
//!
//! ```text
//! Booking form ──► BookingHandle ──[BookingAction]──► worker ──► MailTransport
//!      ▲                                                │
//!      └────────────── BookingOutcome (oneshot) ◄───────┘
//! ```

pub mod booking_worker;
pub mod transport;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use booking_worker::{BookingAction, BookingHandle, BookingSettings};
pub use transport::{HttpMailTransport, LogTransport, MailTransport, OutgoingMail, TransportError};

// Booking errors
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Invalid booking: {0}")]
    Validation(String),

    #[error("Failed to deliver booking: {0}")]
    Transport(#[from] TransportError),

    #[error("Booking worker unavailable: {0}")]
    ChannelError(String),
}

/// Which form the inquiry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BookingKind {
    #[default]
    Hike,
    Tour,
}

impl fmt::Display for BookingKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BookingKind::Hike => write!(f, "hike"),
            BookingKind::Tour => write!(f, "tour"),
        }
    }
}

/// One submitted booking form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub message: String,
    pub kind: BookingKind,
    /// Selected hike or tour type
    pub selection: String,
    /// Number of people in the group
    pub group_size: u32,
    pub submitted_at: DateTime<Local>,
}

impl BookingRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
        kind: BookingKind,
        selection: impl Into<String>,
        group_size: u32,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            kind,
            selection: selection.into(),
            group_size,
            submitted_at: Local::now(),
        }
    }

    pub fn validate(&self, max_group_size: u32) -> Result<(), BookingError> {
        if self.name.trim().is_empty() {
            return Err(BookingError::Validation("Please enter your name".to_string()));
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(BookingError::Validation(
                "Please enter a valid email address".to_string(),
            ));
        }
        if self.selection.trim().is_empty() {
            return Err(BookingError::Validation(format!(
                "Please choose a {}",
                self.kind
            )));
        }
        if self.group_size == 0 || self.group_size > max_group_size {
            return Err(BookingError::Validation(format!(
                "Group size must be between 1 and {}",
                max_group_size
            )));
        }
        Ok(())
    }

    /// Renders the inquiry into the mail the operator receives
    pub fn to_mail(&self, sender: &str, recipient: &str) -> OutgoingMail {
        let subject = format!("New Booking Request from {}", self.name.trim());
        let text = format!(
            "Name: {}\nEmail: {}\n{}: {}\nPeople: {}\nSubmitted: {}\n\n{}",
            self.name.trim(),
            self.email.trim(),
            match self.kind {
                BookingKind::Hike => "Hike",
                BookingKind::Tour => "Tour",
            },
            self.selection.trim(),
            self.group_size,
            self.submitted_at.format("%Y-%m-%d %H:%M"),
            self.message.trim()
        );

        OutgoingMail {
            from: sender.to_string(),
            to: vec![recipient.to_string()],
            reply_to: self.email.trim().to_string(),
            subject,
            text,
        }
    }
}

// local@domain.tld, no whitespace
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

/// Status shown to the visitor after a submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingOutcome {
    pub success: bool,
    pub message: Option<String>,
}

impl BookingOutcome {
    pub fn sent() -> Self {
        Self {
            success: true,
            message: Some("Thanks for your interest in joining us, we'll get back to you soon.".to_string()),
        }
    }

    pub fn failed(error: &BookingError) -> Self {
        let message = match error {
            BookingError::Validation(reason) => reason.clone(),
            _ => "There was an error submitting your request. Please try again.".to_string(),
        };
        Self {
            success: false,
            message: Some(message),
        }
    }
}
