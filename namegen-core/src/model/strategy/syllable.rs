use rand::Rng;

use super::{SENTINEL, markov, pick_threshold};
use crate::model::markov_table::END_MARKER;
use crate::model::profile::Profile;
use crate::model::weighted::sample;

/// Most syllables chained after the start syllable.
const MAX_CHAINED: usize = 2;

/// Generates a name as a chain of syllables.
///
/// A start syllable is drawn from the positional start table, then 0 to 2
/// more syllables follow the syllable chain of the current syllable.
/// Chaining stops early on an unknown syllable, no usable candidates, or
/// the end marker.
///
/// Profiles without syllable data degrade to the order-2 letter chain.
///
/// # Blending
/// A blend point in `{1, 2}` is drawn; once that many syllables are in
/// the name, lookups use the secondary's syllable chain.
pub fn generate<R: Rng + ?Sized>(primary: &Profile, secondary: Option<&Profile>, rng: &mut R) -> String {
	if !primary.has_syllables() {
		log::debug!("Profile '{}' has no syllable data, using order-2 letters", primary.name());
		return markov::generate(primary, secondary, 2, rng);
	}

	let blend_at = secondary.map(|_| pick_threshold(rng, 1..=2));

	let Some(first) = sample(&primary.syllables().start, rng) else {
		return SENTINEL.to_owned();
	};
	let mut result = first.to_owned();
	let mut current = first.to_owned();
	let mut count = 1;

	let extra = rng.random_range(0..=MAX_CHAINED);
	for _ in 0..extra {
		let profile = match (secondary, blend_at) {
			(Some(profile), Some(at)) if count >= at => profile,
			_ => primary,
		};

		let Some(next) = profile.syllable_chain().get(&current).and_then(|candidates| sample(candidates, rng)) else {
			break;
		};
		if next == END_MARKER {
			break;
		}

		result.push_str(next);
		current = next.to_owned();
		count += 1;
	}

	result
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;
	use serde_json::json;

	fn syllables(start: serde_json::Value, order_1: serde_json::Value) -> Profile {
		let doc = json!({
			"config": { "markov_order": 1, "syllables_enabled": true },
			"syllable_analysis": {
				"positional_syllables": { "start": start },
				"syllable_markov": { "order_1": order_1 }
			}
		});
		Profile::from_json_str(&doc.to_string()).unwrap()
	}

	#[test]
	fn missing_syllables_degrade_to_letters() {
		let doc = json!({
			"letter_analysis": { "markov_chains": { "order_2": { "^^": { "z": 1 }, "^z": { "$": 1 } } } }
		});
		let profile = Profile::from_json_str(&doc.to_string()).unwrap();
		let mut rng = StdRng::seed_from_u64(4);
		assert_eq!(generate(&profile, None, &mut rng), "z");
	}

	#[test]
	fn chains_at_most_two_syllables() {
		let profile = syllables(json!({ "ka": 1 }), json!({ "ka": { "ka": 1 } }));
		let mut rng = StdRng::seed_from_u64(10);
		let mut lengths = std::collections::HashSet::new();
		for _ in 0..200 {
			let name = generate(&profile, None, &mut rng);
			assert!(["ka", "kaka", "kakaka"].contains(&name.as_str()), "{name}");
			lengths.insert(name.len());
		}
		assert_eq!(lengths.len(), 3);
	}

	#[test]
	fn unknown_syllable_stops_chain() {
		let profile = syllables(json!({ "ri": 1 }), json!({ "ka": { "lo": 1 } }));
		let mut rng = StdRng::seed_from_u64(10);
		for _ in 0..50 {
			assert_eq!(generate(&profile, None, &mut rng), "ri");
		}
	}

	#[test]
	fn end_marker_stops_chain() {
		let profile = syllables(json!({ "ri": 1 }), json!({ "ri": { "$": 1 } }));
		let mut rng = StdRng::seed_from_u64(10);
		for _ in 0..50 {
			assert_eq!(generate(&profile, None, &mut rng), "ri");
		}
	}

	#[test]
	fn secondary_chain_takes_over_after_blend_point() {
		let a = syllables(json!({ "ka": 1 }), json!({ "ka": { "ri": 1 }, "ri": { "ri": 1 } }));
		let b = syllables(json!({ "zu": 1 }), json!({ "ka": { "mo": 1 }, "ri": { "mo": 1 }, "mo": { "mo": 1 } }));
		let mut rng = StdRng::seed_from_u64(42);
		for _ in 0..200 {
			let name = generate(&a, Some(&b), &mut rng);
			// The start syllable always comes from the primary
			assert!(name.starts_with("ka"), "{name}");
			assert!(
				["ka", "kamo", "kamomo", "kari", "karimo"].contains(&name.as_str()),
				"{name}"
			);
		}
	}
}
