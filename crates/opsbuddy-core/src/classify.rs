//! Content Classifier
//!
//! Decides how a message payload is laid out. Stages are tried in order and
//! the first one that succeeds wins:
//!
//! 1. JSON health report or incident list
//! 2. "Found N open incidents" plain-text digest
//! 3. Verbatim text, line by line
//!
//! The last stage accepts any string, so classification never fails.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{FormatError, Result};
use crate::report::{
    is_truthy, DigestEntry, FormattedContent, HealthReport, IncidentDigest, IncidentTable,
    TextLines,
};

/// `INC<digits>: <description> (<status>)`
static INCIDENT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(INC\d+): (.*) \((.*)\)$").unwrap());

/// Classify a message payload into the layout it should be rendered with
pub fn classify(content: &str) -> FormattedContent {
    tracing::trace!(len = content.len(), "classifying message content");

    let formatted = parse_report(content)
        .or_else(|err| {
            if err.is_syntax() {
                tracing::debug!(error = %err, "content is not JSON");
            } else {
                tracing::debug!(error = %err, "JSON content is not a known report");
            }
            parse_incident_digest(content).map(FormattedContent::Digest)
        })
        .unwrap_or_else(|err| {
            tracing::debug!(error = %err, "falling back to plain text");
            FormattedContent::Text(TextLines::new(content))
        });

    tracing::debug!(kind = formatted.kind(), "classified message content");
    formatted
}

/// Parse a JSON health report (`response.ci`) or incident list (`incidents`)
pub fn parse_report(content: &str) -> Result<FormattedContent> {
    let value: Value = serde_json::from_str(content)?;

    let health = value
        .get("response")
        .filter(|response| response.get("ci").is_some_and(is_truthy));
    if let Some(response) = health {
        let report = HealthReport::deserialize(response)?;
        return Ok(FormattedContent::Health(report));
    }

    if value.get("incidents").is_some_and(Value::is_array) {
        let table = IncidentTable::deserialize(&value)?;
        return Ok(FormattedContent::Incidents(table));
    }

    Err(FormatError::NoMatch("neither response.ci nor an incidents list"))
}

/// Parse the plain-text incident summary the backend sends, e.g.
///
/// ```text
/// Found 2 open incidents
/// - INC100: disk full (New)
/// - INC101: cpu high (Resolved)
/// ```
///
/// Bullet lines that don't fit the pattern are skipped.
pub fn parse_incident_digest(content: &str) -> Result<IncidentDigest> {
    let looks_like_digest = content.contains("Found")
        && content.contains("open incidents")
        && content.contains("INC");
    if !looks_like_digest {
        return Err(FormatError::NoMatch("no open-incidents summary markers"));
    }

    let mut lines = content.split('\n');
    let title = lines.next().unwrap_or_default().to_string();

    let incidents: Vec<DigestEntry> = lines
        .map(str::trim)
        .filter(|line| line.starts_with('-'))
        .filter_map(parse_digest_line)
        .collect();

    if incidents.is_empty() {
        return Err(FormatError::NoMatch("no incident lines matched"));
    }

    Ok(IncidentDigest { title, incidents })
}

fn parse_digest_line(line: &str) -> Option<DigestEntry> {
    let line = line.strip_prefix("- ").unwrap_or(line);
    let caps = INCIDENT_LINE.captures(line)?;

    Some(DigestEntry {
        id: caps[1].to_string(),
        description: caps[2].to_string(),
        status: caps[3].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Direction, DEFAULT_INCIDENT_MESSAGE};
    use crate::tone::Tone;

    fn health(content: &str) -> HealthReport {
        match classify(content) {
            FormattedContent::Health(report) => report,
            other => panic!("expected health report, got {other:?}"),
        }
    }

    fn text_lines(content: &str) -> Vec<String> {
        match classify(content) {
            FormattedContent::Text(text) => text.lines,
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_health_report_without_dependencies() {
        let report = health(
            r#"{"response":{"ci":"CI123","prefix":"Check","health_status":"Healthy","details":"d","dashboard":"http://x","recent_updates":"none","dependencies":{"upstream":[],"downstream":[]}}}"#,
        );

        assert_eq!(report.title(), "Check: CI123");
        assert_eq!(report.health_status, "Healthy");
        assert_eq!(report.health_tone(), Some(Tone::Green));
        assert_eq!(report.dashboard, "http://x");
        assert!(!report.has_dependencies());
        assert!(report.dependency_rows().is_empty());
    }

    #[test]
    fn test_health_report_with_upstream_dependency() {
        let report = health(
            r#"{"response":{"ci":"CI9","prefix":"Check","health_status":"Critical","details":"d","dashboard":"http://x","recent_updates":"n","dependencies":{"upstream":[{"ci":"A","relationship":"depends_on","type":"svc"}],"downstream":[]}}}"#,
        );

        assert_eq!(report.health_tone(), Some(Tone::Red));
        assert!(report.has_dependencies());

        let rows = report.dependency_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].direction, Direction::Upstream);
        assert_eq!(rows[0].direction.label(), "Upstream");
        assert_eq!(rows[0].ci, "A");
        assert_eq!(rows[0].relationship, "depends_on (svc)");
    }

    #[test]
    fn test_health_report_unknown_status_is_unstyled() {
        let report = health(r#"{"response":{"ci":"X","prefix":"Check","health_status":"Unknown"}}"#);
        assert_eq!(report.health_tone(), None);
        // missing dependencies are treated as none
        assert!(!report.has_dependencies());
    }

    #[test]
    fn test_incident_table_default_message() {
        let content = r#"{"incidents":[{"incident_id":"INC1","ci":"CI1","status":"New","ci_health":"Healthy","details":"x"}]}"#;
        let FormattedContent::Incidents(table) = classify(content) else {
            panic!("expected incident table");
        };

        assert_eq!(table.message, DEFAULT_INCIDENT_MESSAGE);
        assert_eq!(table.incidents.len(), 1);

        let incident = &table.incidents[0];
        assert_eq!(incident.detail_heading(), "INC1 - CI1");
        assert_eq!(incident.details.as_deref(), Some("x"));
        assert_eq!(incident.status_tone(), Some(Tone::Blue));
        assert_eq!(incident.ci_health_tone(), Some(Tone::Green));
    }

    #[test]
    fn test_incident_table_keeps_message_and_order() {
        let content = r#"{"message":"Open incidents for ServerX","incidents":[
            {"incident_id":"INC2","ci":"ServerX","status":"In Progress","ci_health":"Warning"},
            {"incident_id":"INC1","ci":"ServerX","status":"Closed"}
        ]}"#;
        let FormattedContent::Incidents(table) = classify(content) else {
            panic!("expected incident table");
        };

        assert_eq!(table.message, "Open incidents for ServerX");
        let ids: Vec<_> = table.incidents.iter().map(|i| i.incident_id.as_str()).collect();
        assert_eq!(ids, vec!["INC2", "INC1"]);
        assert_eq!(table.incidents[0].ci_health_tone(), Some(Tone::Amber));
        assert_eq!(table.incidents[1].status_tone(), None);
        assert_eq!(table.incidents[1].ci_health, None);
    }

    #[test]
    fn test_empty_message_uses_default() {
        let FormattedContent::Incidents(table) = classify(r#"{"message":"","incidents":[]}"#) else {
            panic!("expected incident table");
        };
        assert_eq!(table.message, DEFAULT_INCIDENT_MESSAGE);
        assert!(table.incidents.is_empty());
    }

    #[test]
    fn test_health_takes_priority_over_incidents() {
        let content = r#"{"response":{"ci":"CI1","prefix":"Check"},"incidents":[]}"#;
        assert_eq!(classify(content).kind(), "health_report");
    }

    #[test]
    fn test_text_incident_digest() {
        let content =
            "Found 2 open incidents\n- INC100: disk full (New)\n- INC101: cpu high (Resolved)";
        let FormattedContent::Digest(digest) = classify(content) else {
            panic!("expected incident digest");
        };

        assert_eq!(digest.title, "Found 2 open incidents");
        assert_eq!(
            digest.incidents,
            vec![
                DigestEntry {
                    id: "INC100".into(),
                    description: "disk full".into(),
                    status: "New".into(),
                },
                DigestEntry {
                    id: "INC101".into(),
                    description: "cpu high".into(),
                    status: "Resolved".into(),
                },
            ]
        );
        assert_eq!(digest.incidents[1].status_tone(), Some(Tone::Green));
    }

    #[test]
    fn test_digest_skips_malformed_lines() {
        let content = "Found 3 open incidents\r\n- INC1: ok (New)\r\n- not an incident\r\n  - INC2: (nested) thing (In Progress)  \r\nINC3: no bullet (New)";
        let FormattedContent::Digest(digest) = classify(content) else {
            panic!("expected incident digest");
        };

        assert_eq!(digest.title, "Found 3 open incidents\r");
        assert_eq!(digest.incidents.len(), 2);
        assert_eq!(digest.incidents[0].id, "INC1");
        assert_eq!(digest.incidents[1].description, "(nested) thing");
        assert_eq!(digest.incidents[1].status, "In Progress");
    }

    #[test]
    fn test_digest_without_matching_lines_falls_back() {
        let content = "Found 0 open incidents\n- none for INC scope";
        assert_eq!(
            text_lines(content),
            vec!["Found 0 open incidents", "- none for INC scope"]
        );
    }

    #[test]
    fn test_digest_requires_all_markers() {
        assert_eq!(classify("Found 1 incident\n- INC1: a (New)").kind(), "text");
        assert_eq!(classify("open incidents\n- INC1: a (New)").kind(), "text");
    }

    #[test]
    fn test_plain_text_fallback() {
        let FormattedContent::Text(text) = classify("hello\nworld") else {
            panic!("expected text");
        };
        assert_eq!(text.lines, vec!["hello", "world"]);
        let breaks = text.iter_with_breaks().filter(|(_, br)| *br).count();
        assert_eq!(breaks, 1);
    }

    #[test]
    fn test_text_is_not_trimmed() {
        assert_eq!(text_lines("  indented \n"), vec!["  indented ", ""]);
    }

    #[test]
    fn test_partial_json_falls_through() {
        // response without ci
        assert_eq!(classify(r#"{"response":{"prefix":"Check"}}"#).kind(), "text");
        // falsy ci
        assert_eq!(classify(r#"{"response":{"ci":""}}"#).kind(), "text");
        // incidents that are not a list
        assert_eq!(classify(r#"{"incidents":"INC1"}"#).kind(), "text");
        // dependencies of the wrong shape
        assert_eq!(
            classify(r#"{"response":{"ci":"A","dependencies":{"upstream":"B"}}}"#).kind(),
            "text"
        );
        // non-object JSON
        assert_eq!(classify("null").kind(), "text");
        assert_eq!(classify("42").kind(), "text");
    }

    #[test]
    fn test_incident_list_with_odd_entries_is_still_a_table() {
        let FormattedContent::Incidents(table) = classify(r#"{"incidents":[1,2]}"#) else {
            panic!("expected incident table");
        };
        assert_eq!(table.incidents.len(), 2);
        assert_eq!(table.incidents[0].detail_heading(), " - ");

        let content = r#"{"incidents":[{"incident_id":"INC1","ci":"CI1","status":"New","details":{"x":1}}]}"#;
        let FormattedContent::Incidents(table) = classify(content) else {
            panic!("expected incident table");
        };
        assert_eq!(table.incidents[0].incident_id, "INC1");
        assert_eq!(table.incidents[0].details, None);
    }

    #[test]
    fn test_json_shaped_digest_text() {
        // JSON that matches no report still gets the text heuristics
        let content = r#"{"note":"Found 1 open incidents INC"}"#;
        assert_eq!(text_lines(content), vec![content]);
    }

    #[test]
    fn test_classify_is_total_and_idempotent() {
        let inputs = [
            "",
            "\n",
            "{",
            "[]",
            "Found open incidents INC",
            "- INC1: x (y)",
            "{\"response\":{\"ci\":1}}",
            "🚨 outage\n\n",
        ];
        for input in inputs {
            assert_eq!(classify(input), classify(input), "input: {input:?}");
        }
    }

    #[test]
    fn test_numeric_ci_is_truthy() {
        let report = health(r#"{"response":{"ci":7,"prefix":"Check"}}"#);
        assert_eq!(report.title(), "Check: 7");
        assert_eq!(classify(r#"{"response":{"ci":0}}"#).kind(), "text");
    }
}
