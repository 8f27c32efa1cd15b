use rand::Rng;

use serde::{Deserialize, Serialize};

/// A candidate value and its observed frequency.
///
/// Within one list values need not be unique; duplicates simply add
/// their weights to the same outcome.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct WeightedItem {
	/// Fragment produced when this item is selected.
	pub value: String,
	/// Relative frequency. Items with weight 0 are never selected.
	pub weight: u64,
}

impl WeightedItem {
	pub fn new(value: impl Into<String>, weight: u64) -> Self {
		Self { value: value.into(), weight }
	}
}

/// Selects an item from a weighted list using roulette-wheel sampling.
///
/// A single uniform integer is drawn in `[1, total]`, and the first item
/// whose cumulative weight reaches the draw is returned.
///
/// This method performs:
/// - an O(n) scan to compute the total weight
/// - an O(n) cumulative scan to select the bucket
///
/// Returns `None` (without consuming randomness) if the list is empty, its
/// total weight is zero, or the total does not fit in a `u64`. Callers must
/// treat this as "no candidate".
///
/// For a given list order and RNG state the selection is fully
/// reproducible.
pub fn sample<'a, R: Rng + ?Sized>(items: &'a [WeightedItem], rng: &mut R) -> Option<&'a str> {
	let total = items.iter().try_fold(0u64, |acc, item| acc.checked_add(item.weight))?;
	if total == 0 {
		return None;
	}

	let draw = rng.random_range(1..=total);

	// Partial sums never exceed `total`
	let mut cumulative = 0u64;
	for item in items {
		cumulative += item.weight;
		if cumulative >= draw {
			return Some(&item.value);
		}
	}

	// Unreachable: the last non-zero item always closes the wheel
	None
}
