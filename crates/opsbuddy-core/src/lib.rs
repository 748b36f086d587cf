//! # opsbuddy-core
//!
//! Message model and content classification for the OpsBuddy chat UI.
//!
//! ## Architecture
//!
//! ```text
//! content ──► classify ──┬─► HealthReport    {"response": {"ci": ..}}
//!                        ├─► IncidentTable   {"incidents": [..]}
//!                        ├─► IncidentDigest  "Found N open incidents\n- INC.."
//!                        └─► TextLines       anything else
//! ```
//!
//! Everything here is pure and target-independent; the Leptos components in
//! `opsbuddy-web` only turn these shapes into markup.

pub mod classify;
pub mod clock;
pub mod error;
pub mod message;
pub mod report;
pub mod tone;

pub use classify::classify;
pub use clock::clock_label;
pub use error::{FormatError, Result};
pub use message::{Message, Role, Severity, SeverityIcon};
pub use report::{
    DependencyRow, DigestEntry, Direction, FormattedContent, HealthReport, IncidentDigest,
    IncidentRecord, IncidentTable, TextLines, DEFAULT_INCIDENT_MESSAGE,
};
pub use tone::Tone;
