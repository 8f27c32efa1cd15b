use rand::Rng;

use super::SENTINEL;
use crate::model::profile::{Position, Profile};
use crate::model::weighted::{WeightedItem, sample};

/// Generates a name by stitching positional n-grams.
///
/// The opening segment is a start trigram or bigram from the primary
/// profile. One to three middle segments and one end segment follow, drawn
/// from the secondary profile when present and from the primary otherwise:
/// the head of a blended name comes from the first profile, its body and
/// ending from the second.
///
/// Each segment flips a fair coin between the trigram and bigram tables of
/// its position, falling back to whichever is non-empty.
///
/// # Returns
/// [`SENTINEL`] if the primary has neither start trigrams nor start bigrams.
pub fn generate<R: Rng + ?Sized>(primary: &Profile, secondary: Option<&Profile>, rng: &mut R) -> String {
	let Some(opening) = segment(primary, Position::Start, rng) else {
		return SENTINEL.to_owned();
	};
	let mut result = opening.to_owned();

	let body = secondary.unwrap_or(primary);
	let middles = rng.random_range(1..=3);
	for _ in 0..middles {
		if let Some(middle) = segment(body, Position::Middle, rng) {
			result.push_str(middle);
		}
	}

	if let Some(ending) = segment(body, Position::End, rng) {
		result.push_str(ending);
	}

	result
}

/// Draws one segment for `position`, or `None` if the profile has no n-grams there.
fn segment<'a, R: Rng + ?Sized>(profile: &'a Profile, position: Position, rng: &mut R) -> Option<&'a str> {
	let trigrams = profile.trigrams().at(position);
	let bigrams = profile.bigrams().at(position);

	let prefer_trigram = rng.random_bool(0.5);
	let table: &[WeightedItem] = match (trigrams.is_empty(), bigrams.is_empty()) {
		(true, true) => return None,
		(false, true) => trigrams,
		(true, false) => bigrams,
		(false, false) if prefer_trigram => trigrams,
		(false, false) => bigrams,
	};

	sample(table, rng)
}
