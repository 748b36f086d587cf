//! Report Shapes
//!
//! Structured layouts a message payload can be classified into. All of these
//! are derived from the message content on every render and never stored.

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::tone::{self, Tone};

/// Message line shown above a JSON incident table without its own `message`
pub const DEFAULT_INCIDENT_MESSAGE: &str = "Incidents with CI Health";

/// Result of classifying a message payload
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormattedContent {
    /// `{"response": {"ci": ...}}` health check
    Health(HealthReport),
    /// `{"incidents": [...]}` incident list
    Incidents(IncidentTable),
    /// "Found N open incidents" plain-text list
    Digest(IncidentDigest),
    /// Anything else, line by line
    Text(TextLines),
}

impl FormattedContent {
    /// Short name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            FormattedContent::Health(_) => "health_report",
            FormattedContent::Incidents(_) => "incident_table",
            FormattedContent::Digest(_) => "incident_digest",
            FormattedContent::Text(_) => "text",
        }
    }
}

/// CI health check response
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    #[serde(default, deserialize_with = "scalar_text")]
    pub prefix: String,

    /// Configuration item the report is about
    #[serde(default, deserialize_with = "scalar_text")]
    pub ci: String,

    #[serde(default, deserialize_with = "scalar_text")]
    pub health_status: String,

    #[serde(default, deserialize_with = "scalar_text")]
    pub details: String,

    /// Monitoring dashboard URL
    #[serde(default, deserialize_with = "scalar_text")]
    pub dashboard: String,

    #[serde(default, deserialize_with = "scalar_text")]
    pub recent_updates: String,

    #[serde(default)]
    pub dependencies: Dependencies,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dependencies {
    #[serde(default)]
    pub upstream: Vec<Dependency>,
    #[serde(default)]
    pub downstream: Vec<Dependency>,
}

/// Edge in the CMDB dependency graph
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dependency {
    #[serde(default, deserialize_with = "scalar_text")]
    pub ci: String,

    #[serde(default, deserialize_with = "scalar_text")]
    pub relationship: String,

    #[serde(rename = "type", default, deserialize_with = "scalar_text")]
    pub kind: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Upstream,
    Downstream,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Direction::Upstream => "Upstream",
            Direction::Downstream => "Downstream",
        }
    }
}

/// One row of the dependency table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DependencyRow {
    pub direction: Direction,
    pub ci: String,
    /// `"{relationship} ({type})"`
    pub relationship: String,
}

impl HealthReport {
    /// Heading, e.g. `"Check: CI123"`
    pub fn title(&self) -> String {
        format!("{}: {}", self.prefix, self.ci)
    }

    pub fn health_tone(&self) -> Option<Tone> {
        tone::health_tone(&self.health_status)
    }

    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.upstream.is_empty() || !self.dependencies.downstream.is_empty()
    }

    /// Upstream rows first, then downstream, each in payload order
    pub fn dependency_rows(&self) -> Vec<DependencyRow> {
        let upstream = self
            .dependencies
            .upstream
            .iter()
            .map(|dep| (Direction::Upstream, dep));
        let downstream = self
            .dependencies
            .downstream
            .iter()
            .map(|dep| (Direction::Downstream, dep));

        upstream
            .chain(downstream)
            .map(|(direction, dep)| DependencyRow {
                direction,
                ci: dep.ci.clone(),
                relationship: format!("{} ({})", dep.relationship, dep.kind),
            })
            .collect()
    }
}

/// Incident list parsed from a JSON payload
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "IncidentPayload")]
pub struct IncidentTable {
    pub message: String,
    pub incidents: Vec<IncidentRecord>,
}

#[derive(Deserialize)]
struct IncidentPayload {
    #[serde(default)]
    message: Option<Value>,
    #[serde(deserialize_with = "lenient_records")]
    incidents: Vec<IncidentRecord>,
}

impl From<IncidentPayload> for IncidentTable {
    fn from(payload: IncidentPayload) -> Self {
        let message = match payload.message {
            Some(message) if is_truthy(&message) => {
                display_text(message).ok().flatten().unwrap_or_default()
            }
            _ => DEFAULT_INCIDENT_MESSAGE.to_string(),
        };
        Self {
            message,
            incidents: payload.incidents,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub incident_id: String,

    #[serde(default, deserialize_with = "lenient_text")]
    pub ci: String,

    #[serde(default, deserialize_with = "lenient_text")]
    pub status: String,

    #[serde(default, deserialize_with = "lenient_optional_text")]
    pub ci_health: Option<String>,

    #[serde(default, deserialize_with = "lenient_optional_text")]
    pub details: Option<String>,
}

impl IncidentRecord {
    pub fn status_tone(&self) -> Option<Tone> {
        tone::incident_status_tone(&self.status)
    }

    pub fn ci_health_tone(&self) -> Option<Tone> {
        self.ci_health.as_deref().and_then(tone::ci_health_tone)
    }

    /// Heading in the "Show Details" section
    pub fn detail_heading(&self) -> String {
        format!("{} - {}", self.incident_id, self.ci)
    }
}

/// Incident list recovered from a "Found N open incidents" text message
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IncidentDigest {
    pub title: String,
    pub incidents: Vec<DigestEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DigestEntry {
    pub id: String,
    pub description: String,
    pub status: String,
}

impl DigestEntry {
    pub fn status_tone(&self) -> Option<Tone> {
        tone::incident_status_tone(&self.status)
    }
}

/// Verbatim content, split on newlines
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TextLines {
    pub lines: Vec<String>,
}

impl TextLines {
    pub fn new(content: &str) -> Self {
        Self {
            lines: content.split('\n').map(String::from).collect(),
        }
    }

    /// Lines paired with whether a line break follows them
    pub fn iter_with_breaks(&self) -> impl Iterator<Item = (&str, bool)> {
        let last = self.lines.len().saturating_sub(1);
        self.lines
            .iter()
            .enumerate()
            .map(move |(i, line)| (line.as_str(), i < last))
    }
}

/// JSON truthiness: `null`, `false`, `0` and `""` are falsy
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text shown for a scalar. Strings and numbers print, `null` and booleans
/// show nothing; arrays and objects are handed back.
fn display_text(value: Value) -> std::result::Result<Option<String>, Value> {
    match value {
        Value::Null | Value::Bool(_) => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(other),
    }
}

/// Scalar as display text; `null`, booleans and missing become empty
fn scalar_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.unwrap_or_default())
}

fn optional_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    display_text(Value::deserialize(deserializer)?)
        .map_err(|other| D::Error::custom(format!("expected a scalar, found {other}")))
}

/// Like `scalar_text`, but arrays and objects become empty instead of failing
fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_optional_text(deserializer)?.unwrap_or_default())
}

fn lenient_optional_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(display_text(Value::deserialize(deserializer)?).unwrap_or(None))
}

/// Every entry becomes a row; entries that aren't objects render blank
fn lenient_records<'de, D>(deserializer: D) -> std::result::Result<Vec<IncidentRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<Value>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .map(|entry| IncidentRecord::deserialize(entry).unwrap_or_default())
        .collect())
}
