// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Scroll-synchronized 3D scene animation controller.
//!
//! Parallax drives a continuously rendered scene whose camera depth and
//! object orientation follow the page scroll position. Rendering itself is
//! left to the host: the crate owns the time-varying control logic and hands
//! finished frames to a [`engine::FrameSink`].
//!
//! # Key entry points
//!
//! - [`engine::ScrollSceneEngine`] - owns all mutable state and runs ticks
//! - [`scroll::ScrollTracker`] - maps raw offsets to discrete sections
//! - [`animation::SectionAnimator`] - fires one-shot rotations on section
//!   entry
//! - [`camera::CameraMotionController`] - smoothed scroll-driven dolly
//! - [`scene::particles::generate_particle_field`] - banded shell sampling
//! - [`options::Options`] - TOML-backed configuration
//!
//! # Architecture
//!
//! Everything runs on one logical thread. Scroll events update the tracker
//! between frames; each frame the engine smooths the camera, advances
//! in-flight tweens, spins and bobs the meshes, then submits the scene. The
//! `web` feature wires this to `requestAnimationFrame` and window scroll
//! events; the `parallax` binary replays recorded scroll scripts offline.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod options;
pub mod scene;
pub mod scroll;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use engine::{FrameSink, HostEvent, ScrollSceneEngine, Viewport};
pub use error::ParallaxError;
