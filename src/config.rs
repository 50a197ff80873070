use log::Level;

/// Scroll offset (CSS pixels) past which the header switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 20.0;

/// Fraction of a section that must be on screen before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// How far a hidden section sits below its resting position, in rem.
pub const REVEAL_OFFSET_REM: f32 = 2.0;

/// In-page anchor of the closing call-to-action.
pub const DEMO_ANCHOR: &str = "demo";

pub const CONTENT_MANIFEST: &str = include_str!("../content/site.json");

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose observer tracing while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
