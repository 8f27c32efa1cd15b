use rand::Rng;

use super::{markov, pick_threshold};
use crate::model::profile::{Position, Profile};
use crate::model::weighted::sample;

/// Generates a name by assembling 1 to 3 syllables from their components.
///
/// Each syllable is `onset + nucleus + coda`. Onsets and codas come from
/// the table of the syllable's role (first: start, last: end, otherwise
/// middle); the nucleus comes from the shared nucleus table.
///
/// Profiles without component data degrade to the order-2 letter chain.
///
/// # Blending
/// A blend index in `{1, 2}` is drawn; syllables at or after it are built
/// from the secondary's tables.
pub fn generate<R: Rng + ?Sized>(primary: &Profile, secondary: Option<&Profile>, rng: &mut R) -> String {
	if !primary.has_components() {
		log::debug!("Profile '{}' has no component data, using order-2 letters", primary.name());
		return markov::generate(primary, secondary, 2, rng);
	}

	let count = rng.random_range(1..=3);
	let blend_at = secondary.map(|_| pick_threshold(rng, 1..=2));

	let mut result = String::new();
	for index in 0..count {
		let profile = match (secondary, blend_at) {
			(Some(profile), Some(at)) if index >= at => profile,
			_ => primary,
		};
		let position = Position::of(index, count);

		for part in [profile.onsets(position), profile.nuclei(), profile.codas(position)] {
			if let Some(value) = sample(part, rng) {
				result.push_str(value);
			}
		}
	}

	result
}
