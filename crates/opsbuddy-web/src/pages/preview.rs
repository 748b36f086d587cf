//! Preview Page
//!
//! Sample conversation exercising every content layout and severity.

use chrono::{Duration, Utc};
use leptos::prelude::*;
use opsbuddy_core::{Message, Severity};
use serde_json::json;

use crate::components::ChatMessage;

/// Messages shown on the preview page
pub fn sample_messages() -> Vec<Message> {
    let healthy = json!({
        "response": {
            "prefix": "Health check",
            "ci": "DB-PROD-03",
            "health_status": "Healthy",
            "details": "All replicas in sync, p99 latency 12ms.",
            "dashboard": "https://grafana.example.com/d/db-prod-03",
            "recent_updates": "No changes in the last 24h",
            "dependencies": { "upstream": [], "downstream": [] }
        }
    });

    let critical = json!({
        "response": {
            "prefix": "Health check",
            "ci": "ServerX",
            "health_status": "Critical",
            "details": "CPU 90%, memory 85%, disk 95%.",
            "dashboard": "https://grafana.example.com/d/serverx",
            "recent_updates": "High load detected",
            "dependencies": {
                "upstream": [{ "ci": "RouterA", "relationship": "connects_to", "type": "network" }],
                "downstream": [{ "ci": "AppB", "relationship": "hosts", "type": "application" }]
            }
        }
    });

    let incidents = json!({
        "message": "Open incidents for ServerX",
        "incidents": [
            {
                "incident_id": "INC12345",
                "ci": "ServerX",
                "status": "In Progress",
                "ci_health": "Critical",
                "details": "Server down after kernel update."
            },
            {
                "incident_id": "INC12346",
                "ci": "DB-PROD-03",
                "status": "Resolved",
                "ci_health": "Healthy",
                "details": "Failover completed."
            }
        ]
    });

    let messages = vec![
        Message::user("Check health of DB-PROD-03"),
        Message::bot(healthy.to_string()).with_severity(Severity::Resolved),
        Message::user("Check health of ServerX"),
        Message::bot(critical.to_string()).with_severity(Severity::Critical),
        Message::user("Show incidents for ServerX"),
        Message::bot(incidents.to_string()).with_severity(Severity::Warning),
        Message::user("Any open incidents?"),
        Message::bot(
            "Found 2 open incidents\n- INC100: disk full (New)\n- INC101: cpu high (In Progress)",
        )
        .with_severity(Severity::Info),
        Message::bot("Hi, I'm OpsBuddy.\nAsk me about incidents, CI health or dependencies."),
    ];

    // one minute apart, ending now
    let start = Utc::now() - Duration::minutes(messages.len() as i64);
    messages
        .into_iter()
        .zip(0_i64..)
        .map(|(message, i)| {
            message
                .with_id(format!("sample-{i}"))
                .with_timestamp(start + Duration::minutes(i))
        })
        .collect()
}

#[component]
pub fn PreviewPage() -> impl IntoView {
    let (animated, set_animated) = signal(true);
    let messages = sample_messages();

    view! {
        <div class="chat">
            <aside class="sidebar">
                <h2>"Preview"</h2>
                <div class="field">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || animated.get()
                            on:change=move |ev| set_animated.set(event_target_checked(&ev))
                        />
                        " Animate entrance"
                    </label>
                </div>
            </aside>

            <main class="chat-main">
                <div class="messages">
                    {move || {
                        let animated = animated.get();
                        messages
                            .iter()
                            .cloned()
                            .map(|message| view! { <ChatMessage message=message animated=animated /> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </main>
        </div>
    }
}
