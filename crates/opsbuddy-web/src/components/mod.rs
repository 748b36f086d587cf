//! UI Components

mod chat_message;
mod content;
mod icons;

pub use chat_message::ChatMessage;
pub use content::{
    Badge, FormattedContentView, HealthReportView, IncidentDigestView, IncidentTableView,
    TextLinesView,
};
pub use icons::SeverityGlyph;
