//! Top-level module for the name generation system.
//!
//! This module provides:
//! - Weighted sampling (`weighted`) and transition tables (`markov_table`)
//! - Profiles and their serialized document form (`profile`, `document`)
//! - Corpus analysis producing profile documents (`analyzer`)
//! - The profile-free phonetic pattern engine (`phonetic`)
//! - Profile-driven strategies (`strategy`)
//! - Session configuration (`generation_input`)
//! - A high-level generation interface (`generator`)

/// High-level generator owning the profiles, configuration and random stream.
pub mod generator;

/// Strategy and length-bound configuration for a generator session.
pub mod generation_input;

/// Profile-driven strategies and their dispatch.
pub mod strategy;

/// Legacy phonetic pattern generator.
pub mod phonetic;

/// Immutable bundle of learned tables.
pub mod profile;

/// JSON layout of an analyzed profile.
pub mod document;

/// Corpus analysis into profile documents.
mod analyzer;

/// Context-to-candidates transition tables.
pub mod markov_table;

/// Weighted items and roulette-wheel sampling.
pub mod weighted;
