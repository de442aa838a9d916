//! Capture path state and the rules that gate new captures.

pub mod path;
pub mod rules;

pub use path::CapturePath;
pub use rules::{can_capture, find_capturable_target};
