//! Pronounceable name generation library.
//!
//! This crate provides the name generation engine including:
//! - Weighted random selection over learned frequency tables
//! - Letter and syllable Markov chains (order 1 and 2)
//! - Onset/nucleus/coda assembly and positional n-gram stitching
//! - Blending of two profiles into a single name
//! - A profile-free phonetic pattern generator
//! - Profile loading (JSON documents or plain-text corpora)
//!
//! The high-level entry point is [`model::generator::Generator`].

/// Name generation models, strategies and the orchestrating generator.
pub mod model;

/// Error type shared by the profile loader and the configuration surface.
pub mod error;

/// I/O utilities (file loading, path helpers).
pub mod io;

pub use error::{NameGenError, Result};
pub use model::generator::{GeneratedName, Generator};
pub use model::profile::Profile;
pub use model::strategy::Strategy;
