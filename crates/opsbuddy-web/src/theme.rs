//! Tailwind Class Tables
//!
//! Maps the tones and roles from `opsbuddy-core` onto utility classes.

use opsbuddy_core::{Message, Role, Tone};

/// Delay before the entrance fade starts
pub const ENTER_DELAY_MS: u32 = 100;

/// Length of the entrance fade
pub const ENTER_DURATION_MS: u32 = 300;

const BADGE_BASE: &str = "px-2 py-1 rounded-full text-xs font-medium";

pub const TABLE: &str = "w-full caption-bottom text-sm";
pub const TABLE_ROW: &str = "border-b transition-colors hover:bg-muted/50";
pub const TABLE_HEAD: &str = "h-10 px-2 text-left align-middle font-medium text-muted-foreground";
pub const TABLE_CELL: &str = "p-2 align-middle";

/// Join the classes that apply, skipping the rest
pub fn join_classes<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> String {
    parts.into_iter().flatten().collect::<Vec<_>>().join(" ")
}

fn badge_tone(tone: Tone) -> &'static str {
    match tone {
        Tone::Green => "bg-green-100 text-green-800",
        Tone::Amber => "bg-amber-100 text-amber-800",
        Tone::Red => "bg-red-100 text-red-800",
        Tone::Blue => "bg-blue-100 text-blue-800",
    }
}

/// Rounded status pill; unrecognized statuses get no color
pub fn badge_class(tone: Option<Tone>) -> String {
    join_classes([Some(BADGE_BASE), tone.map(badge_tone)])
}

pub fn icon_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Green => "h-5 w-5 text-green-500",
        Tone::Amber => "h-5 w-5 text-amber-500",
        Tone::Red => "h-5 w-5 text-red-500",
        Tone::Blue => "h-5 w-5 text-blue-500",
    }
}

pub fn accent_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Green => "border-l-4 border-green-500",
        Tone::Amber => "border-l-4 border-amber-500",
        Tone::Red => "border-l-4 border-red-500",
        Tone::Blue => "border-l-4 border-blue-500",
    }
}

pub fn role_class(role: Role) -> &'static str {
    match role {
        Role::User => "message-user",
        Role::Bot => "message-bot",
    }
}

/// Animated bubbles start transparent and fade in through a CSS animation
pub fn entrance_class(animated: bool) -> &'static str {
    if animated {
        "animate-in fade-in fill-mode-both"
    } else {
        "opacity-100"
    }
}

pub fn entrance_style(animated: bool) -> String {
    if animated {
        format!("animation-duration: {ENTER_DURATION_MS}ms; animation-delay: {ENTER_DELAY_MS}ms;")
    } else {
        "animation-delay: 0ms;".to_string()
    }
}

/// Outer classes of a chat bubble
pub fn bubble_class(message: &Message, animated: bool) -> String {
    join_classes([
        Some(role_class(message.role)),
        message.accent().map(accent_class),
        Some(entrance_class(animated)),
    ])
}
