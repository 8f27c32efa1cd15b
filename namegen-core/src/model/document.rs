//! Serialized layout of an analyzed profile.
//!
//! The document mirrors the output of the corpus analyzer:
//!
//! ```json
//! {
//!   "config": { "markov_order": 2, "syllables_enabled": true, "components_enabled": true },
//!   "letter_analysis": {
//!     "markov_chains": { "order_1": { "^": { "a": 3 } }, "order_2": { "^^": { "a": 3 } } },
//!     "positional_bigrams": { "start": { "ka": 2 }, "middle": {}, "end": {} },
//!     "positional_trigrams": { "start": {}, "middle": {}, "end": {} }
//!   },
//!   "syllable_analysis": {
//!     "positional_syllables": { "start": {}, "middle": {}, "end": {} },
//!     "syllable_markov": { "order_1": {}, "order_2": {} }
//!   },
//!   "component_analysis": {
//!     "frequencies": { "nuclei": {}, "codas": {} },
//!     "positional_onsets": { "start": {}, "middle": {}, "end": {} },
//!     "positional_codas": { "start": {}, "middle": {}, "end": {} }
//!   }
//! }
//! ```
//!
//! Every section is optional. Counts that are not non-negative integers
//! are ignored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::markov_table::MarkovTable;
use super::weighted::WeightedItem;

/// `{value: count}` frequency map.
pub type CountMap = BTreeMap<String, Value>;

/// `{context: {next: count}}` transition map.
pub type ChainMap = BTreeMap<String, Value>;

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct ProfileDocument {
	pub config: DocumentConfig,
	pub letter_analysis: LetterAnalysis,
	pub syllable_analysis: SyllableAnalysis,
	pub component_analysis: ComponentAnalysis,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct DocumentConfig {
	pub markov_order: usize,
	pub syllables_enabled: bool,
	pub components_enabled: bool,
}

impl Default for DocumentConfig {
	fn default() -> Self {
		Self { markov_order: 2, syllables_enabled: false, components_enabled: false }
	}
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct LetterAnalysis {
	pub markov_chains: ChainPair,
	pub positional_bigrams: PositionalCounts,
	pub positional_trigrams: PositionalCounts,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct SyllableAnalysis {
	pub positional_syllables: PositionalCounts,
	pub syllable_markov: ChainPair,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct ComponentAnalysis {
	pub frequencies: ComponentFrequencies,
	pub positional_onsets: PositionalCounts,
	pub positional_codas: PositionalCounts,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct ComponentFrequencies {
	pub nuclei: CountMap,
	pub codas: CountMap,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct ChainPair {
	pub order_1: ChainMap,
	pub order_2: ChainMap,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct PositionalCounts {
	pub start: CountMap,
	pub middle: CountMap,
	pub end: CountMap,
}

impl ProfileDocument {
	/// Serializes the document as indented JSON.
	pub fn to_json_pretty(&self) -> serde_json::Result<String> {
		serde_json::to_string_pretty(self)
	}
}

/// Converts a `{value: count}` map into a weighted list.
///
/// Entries whose count is not a non-negative integer are skipped.
pub(crate) fn to_weighted(counts: &CountMap) -> Vec<WeightedItem> {
	counts
		.iter()
		.filter_map(|(value, count)| count.as_u64().map(|weight| WeightedItem::new(value.as_str(), weight)))
		.collect()
}

/// Converts a `{context: {next: count}}` map into a transition table.
///
/// Contexts whose value is not an object are skipped.
pub(crate) fn to_markov(chain: &ChainMap) -> MarkovTable {
	chain
		.iter()
		.filter_map(|(context, transitions)| {
			let transitions = transitions.as_object()?;
			let candidates = transitions
				.iter()
				.filter_map(|(next, count)| count.as_u64().map(|weight| WeightedItem::new(next.as_str(), weight)))
				.collect();
			Some((context.clone(), candidates))
		})
		.collect()
}
