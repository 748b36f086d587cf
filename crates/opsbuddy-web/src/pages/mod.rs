//! Page Components

mod preview;

pub use preview::{sample_messages, PreviewPage};
