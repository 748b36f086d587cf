//! Severity Icons
//!
//! Inline SVG versions of the info, alert-triangle and check-circle glyphs.

use leptos::prelude::*;
use opsbuddy_core::{Severity, SeverityIcon};

use crate::theme;

#[component]
pub fn SeverityGlyph(severity: Severity) -> impl IntoView {
    let class = theme::icon_class(severity.tone());

    let paths = match severity.icon() {
        SeverityIcon::Info => view! {
            <circle cx="12" cy="12" r="10" />
            <path d="M12 16v-4" />
            <path d="M12 8h.01" />
        }
        .into_any(),
        SeverityIcon::AlertTriangle => view! {
            <path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z" />
            <path d="M12 9v4" />
            <path d="M12 17h.01" />
        }
        .into_any(),
        SeverityIcon::CheckCircle => view! {
            <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14" />
            <path d="m9 11 3 3L22 4" />
        }
        .into_any(),
    };

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
        >
            {paths}
        </svg>
    }
}
