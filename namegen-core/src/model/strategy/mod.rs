//! Profile-driven generation strategies.
//!
//! Each strategy is a plain function of the primary profile, an optional
//! secondary profile used for blending, and the shared random stream.
//! Blending rules intentionally differ per strategy; only the threshold
//! draw is shared.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use rand::Rng;

use crate::error::NameGenError;
use super::phonetic::capitalize;
use super::profile::Profile;

/// Letter-level Markov chains with mid-name profile switching.
pub mod markov;

/// Syllable-level Markov chains seeded from start syllables.
pub mod syllable;

/// Onset + nucleus + coda syllable assembly.
pub mod component;

/// Positional bigram/trigram stitching.
pub mod ngram;

/// Result returned when a profile has no data to generate from.
pub const SENTINEL: &str = "Error";

/// Generation strategy selected for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
	/// Phonetic pattern templates, no profile needed.
	Legacy,
	/// Order-1 letter Markov chain.
	Markov1,
	/// Order-2 letter Markov chain.
	Markov2,
	/// Syllable Markov chain.
	Syllable,
	/// Onset/nucleus/coda assembly.
	Component,
	/// Positional n-gram stitching.
	NGram,
	/// A profile-driven strategy drawn anew for every name.
	Random,
}

impl Strategy {
	/// The concrete strategies `Random` chooses from.
	pub const PROFILE_STRATEGIES: [Strategy; 5] =
		[Strategy::Markov1, Strategy::Markov2, Strategy::Syllable, Strategy::Component, Strategy::NGram];

	pub fn as_str(&self) -> &'static str {
		match self {
			Strategy::Legacy => "legacy",
			Strategy::Markov1 => "markov1",
			Strategy::Markov2 => "markov2",
			Strategy::Syllable => "syllable",
			Strategy::Component => "component",
			Strategy::NGram => "ngram",
			Strategy::Random => "random",
		}
	}
}

impl fmt::Display for Strategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Strategy {
	type Err = NameGenError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"legacy" | "pattern" => Ok(Strategy::Legacy),
			"markov1" | "markov-1" => Ok(Strategy::Markov1),
			"markov2" | "markov-2" | "markov" => Ok(Strategy::Markov2),
			"syllable" | "syllables" => Ok(Strategy::Syllable),
			"component" | "components" => Ok(Strategy::Component),
			"ngram" | "n-gram" => Ok(Strategy::NGram),
			"random" => Ok(Strategy::Random),
			other => Err(NameGenError::UnknownStrategy(other.to_owned())),
		}
	}
}

/// Runs a concrete profile-driven strategy and capitalizes its result.
///
/// Returns `None` for `Legacy` and `Random`, which the orchestrator
/// resolves itself.
pub fn run<R: Rng + ?Sized>(
	strategy: Strategy,
	primary: &Profile,
	secondary: Option<&Profile>,
	rng: &mut R,
) -> Option<String> {
	let name = match strategy {
		Strategy::Markov1 => markov::generate(primary, secondary, 1, rng),
		Strategy::Markov2 => markov::generate(primary, secondary, 2, rng),
		Strategy::Syllable => syllable::generate(primary, secondary, rng),
		Strategy::Component => component::generate(primary, secondary, rng),
		Strategy::NGram => ngram::generate(primary, secondary, rng),
		Strategy::Legacy | Strategy::Random => return None,
	};
	Some(capitalize(&name))
}

/// Draws a blend threshold uniformly from `range`.
pub(crate) fn pick_threshold<R: Rng + ?Sized>(rng: &mut R, range: RangeInclusive<usize>) -> usize {
	rng.random_range(range)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn strategy_names_round_trip() {
		for strategy in [Strategy::Legacy, Strategy::Random].into_iter().chain(Strategy::PROFILE_STRATEGIES) {
			assert_eq!(strategy.as_str().parse::<Strategy>().unwrap(), strategy);
		}
	}

	#[test]
	fn unknown_strategy_is_an_error() {
		assert!(matches!("bogus".parse::<Strategy>(), Err(NameGenError::UnknownStrategy(_))));
	}

	#[test]
	fn random_excludes_legacy() {
		assert!(!Strategy::PROFILE_STRATEGIES.contains(&Strategy::Legacy));
		assert!(!Strategy::PROFILE_STRATEGIES.contains(&Strategy::Random));
	}
}
