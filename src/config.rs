use log::Level;

pub const STUDIO_NAME: &str = "SEO Growth Studio";

pub const BOOKING_URL: &str = "https://calendly.com/josephjoshua/discovery-call";

pub const HERO_PHRASES: &[&str] = &["Get Found.", "Get Leads.", "Grow Smarter with SEO."];

/// Leading part of the last hero phrase that gets the accent colour.
pub const HERO_ACCENT: &str = "Grow Smarter";

/// Fraction of a process step that must be on screen before it becomes active.
pub const STEP_VISIBILITY_THRESHOLD: f64 = 0.6;

/// Fraction of a section that must be on screen before it reveals itself.
pub const REVEAL_AMOUNT: f64 = 0.2;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose logs while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
