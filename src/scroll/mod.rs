//! Scroll input: section tracking and recorded scroll scripts.

pub mod script;
/// Offset-to-section tracking.
pub mod tracker;

pub use script::{ScrollSample, ScrollScript};
pub use tracker::{ScrollState, ScrollTracker, SectionChange};
