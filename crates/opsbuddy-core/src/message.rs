//! Chat Messages
//!
//! The message record handed to the bubble renderer by the host chat app.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tone::Tone;

/// Who sent a message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Operator typing into the chat
    User,
    /// OpsBuddy response
    Bot,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Bot => write!(f, "bot"),
        }
    }
}

/// Severity of a bot message
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Critical,
    Resolved,
}

/// Icon shown next to the severity label
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeverityIcon {
    Info,
    AlertTriangle,
    CheckCircle,
}

impl Severity {
    /// Header label
    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Critical => "Critical Alert",
            Severity::Resolved => "Resolved",
        }
    }

    pub fn icon(self) -> SeverityIcon {
        match self {
            Severity::Info => SeverityIcon::Info,
            Severity::Warning | Severity::Critical => SeverityIcon::AlertTriangle,
            Severity::Resolved => SeverityIcon::CheckCircle,
        }
    }

    /// Accent color for the icon and left border
    pub fn tone(self) -> Tone {
        match self {
            Severity::Info => Tone::Blue,
            Severity::Warning => Tone::Amber,
            Severity::Critical => Tone::Red,
            Severity::Resolved => Tone::Green,
        }
    }
}

/// A single chat message
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Stable identifier, used as the list key by the host
    pub id: String,

    /// Raw payload: plain text or a JSON report
    pub content: String,

    pub role: Role,

    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,

    /// Only meaningful for bot messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

impl Message {
    /// Create a new message with a fresh id and the current time
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content: content.into(),
            role,
            timestamp: Utc::now(),
            severity: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self::new(Role::Bot, content)
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Severity as the renderer sees it. User messages never carry one.
    pub fn effective_severity(&self) -> Option<Severity> {
        match self.role {
            Role::User => None,
            Role::Bot => self.severity,
        }
    }

    /// Severity driving the bot header; absent falls back to `Info`.
    /// `None` for user messages, which have no header.
    pub fn header_severity(&self) -> Option<Severity> {
        match self.role {
            Role::User => None,
            Role::Bot => Some(self.severity.unwrap_or_default()),
        }
    }

    /// Left border accent, only for bot messages with an explicit severity
    pub fn accent(&self) -> Option<Tone> {
        self.effective_severity().map(Severity::tone)
    }
}
