use rand::Rng;

use super::{SENTINEL, pick_threshold};
use crate::model::markov_table::{END_MARKER, START_MARKER};
use crate::model::profile::Profile;
use crate::model::weighted::sample;

/// Hard cap on appended units per name.
pub const MAX_UNITS: usize = 20;

/// Switch point used without a secondary profile; never reached.
const NO_SWITCH: usize = usize::MAX;

/// Generates a name from the letter chain of the given order (1 or 2).
///
/// Starting from the start context, the next unit is sampled from the
/// candidates of the current context and appended. Generation stops when
/// the end marker is drawn, the context is unknown or has no usable
/// candidates, or [`MAX_UNITS`] units were appended.
///
/// # Blending
/// With a secondary profile, a switch point in `{3, 4, 5}` is drawn once.
/// Once the name reaches that many characters, the secondary table is
/// queried with the same context key for the rest of the name.
///
/// # Returns
/// The lowercase name (possibly empty), or [`SENTINEL`] when the primary
/// table is empty.
pub fn generate<R: Rng + ?Sized>(primary: &Profile, secondary: Option<&Profile>, order: usize, rng: &mut R) -> String {
	let table = primary.letter_chain(order);
	if table.is_empty() {
		return SENTINEL.to_owned();
	}

	let switch_at = match secondary {
		Some(_) => pick_threshold(rng, 3..=5),
		None => NO_SWITCH,
	};

	let mut result = String::new();
	let mut context = start_context(order);

	for _ in 0..MAX_UNITS {
		let source = match secondary {
			Some(profile) if result.chars().count() >= switch_at => profile.letter_chain(order),
			_ => table,
		};

		let Some(unit) = source.get(&context).and_then(|candidates| sample(candidates, rng)) else {
			break;
		};
		if unit == END_MARKER {
			break;
		}

		result.push_str(unit);
		context = next_context(&context, unit, order);
	}

	result
}

fn start_context(order: usize) -> String {
	std::iter::repeat_n(START_MARKER, order.max(1)).collect()
}

/// Order 1: the unit just drawn. Order 2: the last two characters of the
/// start-padded name.
fn next_context(context: &str, unit: &str, order: usize) -> String {
	if order <= 1 {
		return unit.to_owned();
	}
	let chars: Vec<char> = context.chars().chain(unit.chars()).collect();
	chars[chars.len().saturating_sub(2)..].iter().collect()
}
