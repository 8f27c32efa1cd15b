use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::weighted::WeightedItem;

/// Start-of-name marker used to build the initial context.
pub const START_MARKER: char = '^';

/// End-of-name marker appearing among transition candidates.
pub const END_MARKER: &str = "$";

/// Transition table of a Markov chain.
///
/// Maps a context (the last unit for order 1, the last two characters for
/// order 2, padded with [`START_MARKER`]) to the weighted candidates for
/// the next unit, [`END_MARKER`] included.
///
/// ## Invariants
/// - Built once when a profile is loaded, never mutated afterwards
/// - Candidate order is the order of the source document (key-sorted)
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct MarkovTable {
	transitions: HashMap<String, Vec<WeightedItem>>,
}

impl MarkovTable {
	pub fn new(transitions: HashMap<String, Vec<WeightedItem>>) -> Self {
		Self { transitions }
	}

	/// Candidates following `context`, or `None` if it was never observed.
	pub fn get(&self, context: &str) -> Option<&[WeightedItem]> {
		self.transitions.get(context).map(Vec::as_slice)
	}

	pub fn is_empty(&self) -> bool {
		self.transitions.is_empty()
	}

	/// Number of known contexts.
	pub fn len(&self) -> usize {
		self.transitions.len()
	}
}

impl FromIterator<(String, Vec<WeightedItem>)> for MarkovTable {
	fn from_iter<I: IntoIterator<Item = (String, Vec<WeightedItem>)>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}
