//! Badge Tones
//!
//! Closed lookup tables from the status strings the backend emits to the
//! color a badge is drawn in. Unrecognized values map to `None` and are
//! rendered unstyled.

/// Color family of a badge, icon or accent border
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tone {
    Green,
    Amber,
    Red,
    Blue,
}

/// Health status of a CI in a health report
pub fn health_tone(status: &str) -> Option<Tone> {
    match status {
        "Healthy" => Some(Tone::Green),
        "Degraded" => Some(Tone::Amber),
        "Critical" => Some(Tone::Red),
        _ => None,
    }
}

/// Status column of an incident table
pub fn incident_status_tone(status: &str) -> Option<Tone> {
    match status {
        "New" => Some(Tone::Blue),
        "In Progress" => Some(Tone::Amber),
        "Resolved" => Some(Tone::Green),
        "Critical" => Some(Tone::Red),
        _ => None,
    }
}

/// CI Health column of an incident table
pub fn ci_health_tone(health: &str) -> Option<Tone> {
    match health {
        "Healthy" => Some(Tone::Green),
        "Degraded" | "Warning" => Some(Tone::Amber),
        "Critical" => Some(Tone::Red),
        _ => None,
    }
}
