//! Chat Message Bubble

use leptos::prelude::*;
use opsbuddy_core::{classify, Message};

use super::content::FormattedContentView;
use super::icons::SeverityGlyph;
use crate::locale::local_time_label;
use crate::theme;

/// One chat bubble: severity header for bot messages, classified content,
/// and a local-time footer.
///
/// With `animated` (the default) the bubble fades in after a short delay;
/// otherwise it is rendered fully opaque right away.
#[component]
pub fn ChatMessage(message: Message, #[prop(default = true)] animated: bool) -> impl IntoView {
    tracing::trace!(id = %message.id, role = %message.role, "rendering chat message");

    let class = theme::bubble_class(&message, animated);
    let style = theme::entrance_style(animated);

    let header = message.header_severity().map(|severity| {
        view! {
            <div class="flex items-center gap-2 mb-2">
                <SeverityGlyph severity=severity />
                <span class="font-medium">{severity.label()}</span>
            </div>
        }
    });

    let content = classify(&message.content);
    let time = local_time_label(message.timestamp);

    view! {
        <div class=class style=style>
            {header}
            <div class="text-sm md:text-base overflow-x-auto">
                <FormattedContentView content=content />
            </div>
            <div class="text-xs mt-1 opacity-70">{time}</div>
        </div>
    }
}
