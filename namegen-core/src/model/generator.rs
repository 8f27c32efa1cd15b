use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use super::generation_input::GenerationInput;
use super::phonetic::PhoneticPatternEngine;
use super::profile::Profile;
use super::strategy::{self, Strategy};

/// Attempts made to satisfy the length bounds before giving up.
pub const MAX_ATTEMPTS: usize = 100;

/// A generated name and how it was produced.
///
/// `tag` is the pattern template for profile-free names and the strategy
/// name for profile-driven ones.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneratedName {
	pub text: String,
	pub tag: String,
}

/// High-level generator owning profiles, configuration and randomness.
///
/// # Responsibilities
/// - Hold up to two profiles (primary, and secondary for blending)
/// - Resolve the configured strategy for each name
/// - Retry until the length bounds are met, best effort
/// - Route every random draw through a single seeded stream
#[derive(Debug)]
pub struct Generator {
	input: GenerationInput,
	primary: Option<Profile>,
	secondary: Option<Profile>,
	legacy: PhoneticPatternEngine,
	rng: StdRng,
	legacy_warned: bool,
}

impl Default for Generator {
	fn default() -> Self {
		Self::new()
	}
}

impl Generator {
	/// Creates a generator seeded from the operating system.
	pub fn new() -> Self {
		Self::with_rng(StdRng::from_os_rng())
	}

	/// Creates a generator with a fixed seed.
	pub fn with_seed(seed: u64) -> Self {
		Self::with_rng(StdRng::seed_from_u64(seed))
	}

	fn with_rng(rng: StdRng) -> Self {
		Self {
			input: GenerationInput::default(),
			primary: None,
			secondary: None,
			legacy: PhoneticPatternEngine::new(),
			rng,
			legacy_warned: false,
		}
	}

	/// Applies a strategy and length bounds, optionally reseeding.
	///
	/// # Errors
	/// Returns an error if the bounds are inverted; the previous
	/// configuration is kept in that case.
	pub fn configure(&mut self, strategy: Strategy, min_length: usize, max_length: usize, seed: Option<u64>) -> Result<()> {
		self.input = GenerationInput::new(strategy, min_length, max_length)?;
		if let Some(seed) = seed {
			self.seed(seed);
		}
		Ok(())
	}

	pub fn input(&self) -> &GenerationInput {
		&self.input
	}

	/// True when length bounds are configured but no profile is loaded:
	/// profile-free names are returned without length filtering.
	pub fn ignores_length_bounds(&self) -> bool {
		self.primary.is_none() && (self.input.min_length() > 0 || self.input.max_length() > 0)
	}

	/// Restarts the random stream from `seed`.
	pub fn seed(&mut self, seed: u64) {
		self.rng = StdRng::seed_from_u64(seed);
	}

	/// Loads the primary profile from disk.
	///
	/// # Errors
	/// Returns an error if the profile cannot be loaded; the previous
	/// profile is kept in that case.
	pub fn load_profile<P: AsRef<Path>>(&mut self, filepath: P) -> Result<()> {
		self.set_profile(Profile::new(filepath)?);
		Ok(())
	}

	/// Loads the secondary profile from disk, enabling blending.
	pub fn load_second_profile<P: AsRef<Path>>(&mut self, filepath: P) -> Result<()> {
		self.set_second_profile(Profile::new(filepath)?);
		Ok(())
	}

	pub fn set_profile(&mut self, profile: Profile) {
		self.primary = Some(profile);
	}

	pub fn set_second_profile(&mut self, profile: Profile) {
		self.secondary = Some(profile);
	}

	/// Drops both profiles, going back to pattern-based generation.
	pub fn clear_profiles(&mut self) {
		self.primary = None;
		self.secondary = None;
	}

	/// Names of the loaded profiles, primary first.
	pub fn profile_names(&self) -> Vec<&str> {
		self.primary.iter().chain(self.secondary.iter()).map(Profile::name).collect()
	}

	/// Generates a single name.
	///
	/// # Behavior
	/// - Without a profile, expands a phonetic pattern directly.
	/// - With a profile, `Random` draws one of the profile strategies,
	///   then up to [`MAX_ATTEMPTS`] candidates are generated until one
	///   satisfies the length bounds.
	///
	/// # Notes
	/// - Length bounds are best effort: after the last attempt the last
	///   candidate is returned even if it violates them.
	/// - `Legacy` with a loaded profile still uses patterns; this is
	///   logged once per generator.
	pub fn generate_one(&mut self) -> GeneratedName {
		let Some(primary) = self.primary.as_ref() else {
			let (text, tag) = self.legacy.generate(&mut self.rng);
			return GeneratedName { text, tag };
		};
		let secondary = self.secondary.as_ref();

		let strategy = match self.input.strategy {
			Strategy::Random => {
				Strategy::PROFILE_STRATEGIES[self.rng.random_range(0..Strategy::PROFILE_STRATEGIES.len())]
			}
			configured => configured,
		};

		if strategy == Strategy::Legacy && !self.legacy_warned {
			log::warn!("Legacy strategy selected while profile '{}' is loaded; the profile is ignored", primary.name());
			self.legacy_warned = true;
		}

		let mut candidate = GeneratedName::default();
		for _ in 0..MAX_ATTEMPTS {
			candidate = match strategy::run(strategy, primary, secondary, &mut self.rng) {
				Some(text) => GeneratedName { text, tag: strategy.to_string() },
				None => {
					let (text, tag) = self.legacy.generate(&mut self.rng);
					GeneratedName { text, tag }
				}
			};
			if self.input.accepts(&candidate.text) {
				return candidate;
			}
		}

		log::debug!("No {} candidate met the length bounds after {} attempts", strategy, MAX_ATTEMPTS);
		candidate
	}

	/// Generates exactly `count` names, one after the other.
	pub fn generate_batch(&mut self, count: usize) -> Vec<GeneratedName> {
		(0..count).map(|_| self.generate_one()).collect()
	}
}
