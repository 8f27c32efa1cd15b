use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NameGenError, Result};
use crate::io::{cache_path, has_extension, profile_name, read_corpus};
use super::document::{PositionalCounts, ProfileDocument, to_markov, to_weighted};
use super::markov_table::MarkovTable;
use super::weighted::WeightedItem;

/// Markov order assumed for profiles built from a raw corpus.
pub const DEFAULT_MARKOV_ORDER: usize = 2;

/// Role of a unit inside a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
	Start,
	Middle,
	End,
}

impl Position {
	/// Role of the unit at `index` in a sequence of `count` units.
	///
	/// The first unit is always `Start`, even when it is also the last one.
	pub fn of(index: usize, count: usize) -> Self {
		if index == 0 {
			Position::Start
		} else if index + 1 >= count {
			Position::End
		} else {
			Position::Middle
		}
	}
}

/// Weighted lists split by position in the name.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Positional {
	pub start: Vec<WeightedItem>,
	pub middle: Vec<WeightedItem>,
	pub end: Vec<WeightedItem>,
}

impl Positional {
	pub fn at(&self, position: Position) -> &[WeightedItem] {
		match position {
			Position::Start => &self.start,
			Position::Middle => &self.middle,
			Position::End => &self.end,
		}
	}

	fn from_counts(counts: &PositionalCounts) -> Self {
		Self {
			start: to_weighted(&counts.start),
			middle: to_weighted(&counts.middle),
			end: to_weighted(&counts.end),
		}
	}
}

/// Immutable bundle of the frequency tables learned from a name corpus.
///
/// A `Profile` carries every table needed by every strategy. Tables that
/// the source did not provide are simply empty; strategies treat an empty
/// table as "unsupported for this profile" and degrade.
///
/// ## Invariants
/// - Never mutated once loaded
/// - Syllable tables are empty unless `syllables_enabled`
/// - Component tables are empty unless `components_enabled`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Profile {
	name: String,
	markov_order: usize,
	syllables_enabled: bool,
	components_enabled: bool,

	letters_order1: MarkovTable,
	letters_order2: MarkovTable,
	bigrams: Positional,
	trigrams: Positional,

	syllables: Positional,
	syllables_order1: MarkovTable,
	syllables_order2: MarkovTable,

	onsets: Positional,
	nuclei: Vec<WeightedItem>,
	codas: Vec<WeightedItem>,
	positional_codas: Positional,
}

impl Profile {
	/// Loads a profile from disk.
	///
	/// - `.json` files are parsed as an analyzed [`ProfileDocument`].
	/// - Any other file is read as a corpus with one name per line. If a
	///   compiled `.bin` sibling exists it is loaded with `postcard`,
	///   otherwise the corpus is analyzed and the compiled profile is
	///   written next to it for fast loading.
	///
	/// The profile name is the file name without extension.
	///
	/// # Errors
	/// Returns an error if the file cannot be read, parsed or analyzed.
	pub fn new<P: AsRef<Path>>(filepath: P) -> Result<Self> {
		let path = filepath.as_ref();
		if !path.is_file() {
			return Err(NameGenError::InvalidPath(path.display().to_string()));
		}
		let name = profile_name(path)?;

		let profile = if has_extension(path, "json") {
			let json = std::fs::read_to_string(path)?;
			Self::from_json_str(&json)?
		} else {
			Self::load_corpus(path)?
		};

		log::info!("Loaded profile '{}' from {}", name, path.display());
		Ok(profile.with_name(name))
	}

	/// Loads a corpus through its compiled cache, building the cache if needed.
	fn load_corpus(path: &Path) -> Result<Self> {
		let binary_data_path = cache_path(path)?;
		if binary_data_path.exists() {
			let bytes = std::fs::read(&binary_data_path)?;
			return Ok(postcard::from_bytes(&bytes)?);
		}

		let lines = read_corpus(path)?;
		let document = ProfileDocument::analyze(&lines, DEFAULT_MARKOV_ORDER);
		if document.letter_analysis.markov_chains.order_1.is_empty() {
			return Err(NameGenError::EmptyCorpus(path.display().to_string()));
		}
		let profile = Self::from_document(&document);

		let bytes = postcard::to_stdvec(&profile)?;
		std::fs::write(&binary_data_path, bytes)?;
		log::info!("Wrote compiled profile to {}", binary_data_path.display());

		Ok(profile)
	}

	/// Parses a profile from an analyzed JSON document.
	pub fn from_json_str(json: &str) -> Result<Self> {
		let document: ProfileDocument = serde_json::from_str(json)?;
		Ok(Self::from_document(&document))
	}

	/// Builds the in-memory tables from a document.
	///
	/// Syllable and component sections are only read when the document
	/// config enables them.
	pub fn from_document(document: &ProfileDocument) -> Self {
		let config = &document.config;
		let letters = &document.letter_analysis;

		let mut profile = Self {
			markov_order: config.markov_order,
			syllables_enabled: config.syllables_enabled,
			components_enabled: config.components_enabled,
			letters_order1: to_markov(&letters.markov_chains.order_1),
			letters_order2: to_markov(&letters.markov_chains.order_2),
			bigrams: Positional::from_counts(&letters.positional_bigrams),
			trigrams: Positional::from_counts(&letters.positional_trigrams),
			..Self::default()
		};

		if config.syllables_enabled {
			let syllables = &document.syllable_analysis;
			profile.syllables = Positional::from_counts(&syllables.positional_syllables);
			profile.syllables_order1 = to_markov(&syllables.syllable_markov.order_1);
			profile.syllables_order2 = to_markov(&syllables.syllable_markov.order_2);
		}

		if config.components_enabled {
			let components = &document.component_analysis;
			profile.nuclei = to_weighted(&components.frequencies.nuclei);
			profile.codas = to_weighted(&components.frequencies.codas);
			profile.onsets = Positional::from_counts(&components.positional_onsets);
			profile.positional_codas = Positional::from_counts(&components.positional_codas);
		}

		profile
	}

	/// Builds a profile directly from a list of names.
	pub fn from_corpus(lines: &[String], markov_order: usize) -> Self {
		Self::from_document(&ProfileDocument::analyze(lines, markov_order))
	}

	/// Returns the same profile with a display name.
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = name.into();
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn markov_order(&self) -> usize {
		self.markov_order
	}

	/// True when the profile carries usable syllable data.
	pub fn has_syllables(&self) -> bool {
		self.syllables_enabled && !self.syllables.start.is_empty()
	}

	/// True when the profile carries usable component data.
	pub fn has_components(&self) -> bool {
		self.components_enabled && !self.nuclei.is_empty()
	}

	/// Letter-level transition table of the given order (1 or 2).
	pub fn letter_chain(&self, order: usize) -> &MarkovTable {
		if order <= 1 { &self.letters_order1 } else { &self.letters_order2 }
	}

	/// Syllable-level table preferred by this profile.
	///
	/// Order 2 is used when the profile declares `markov_order >= 2` and
	/// actually provides it; otherwise order 1.
	pub fn syllable_chain(&self) -> &MarkovTable {
		if self.markov_order >= 2 && !self.syllables_order2.is_empty() {
			&self.syllables_order2
		} else {
			&self.syllables_order1
		}
	}

	pub fn syllables(&self) -> &Positional {
		&self.syllables
	}

	pub fn onsets(&self, position: Position) -> &[WeightedItem] {
		self.onsets.at(position)
	}

	pub fn nuclei(&self) -> &[WeightedItem] {
		&self.nuclei
	}

	/// Codas for a position, or the general coda table if that position has none.
	pub fn codas(&self, position: Position) -> &[WeightedItem] {
		let positional = self.positional_codas.at(position);
		if positional.is_empty() { &self.codas } else { positional }
	}

	pub fn bigrams(&self) -> &Positional {
		&self.bigrams
	}

	pub fn trigrams(&self) -> &Positional {
		&self.trigrams
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn profile(value: serde_json::Value) -> Profile {
		Profile::from_json_str(&value.to_string()).unwrap()
	}

	#[test]
	fn position_of_single_unit_is_start() {
		assert_eq!(Position::of(0, 1), Position::Start);
		assert_eq!(Position::of(1, 3), Position::Middle);
		assert_eq!(Position::of(2, 3), Position::End);
		assert_eq!(Position::of(1, 2), Position::End);
	}

	#[test]
	fn disabled_sections_are_not_loaded() {
		let p = profile(json!({
			"config": { "syllables_enabled": false, "components_enabled": false },
			"syllable_analysis": { "positional_syllables": { "start": { "ka": 1 } } },
			"component_analysis": { "frequencies": { "nuclei": { "a": 1 } } }
		}));
		assert!(!p.has_syllables());
		assert!(!p.has_components());
		assert!(p.syllables().start.is_empty());
	}

	#[test]
	fn enabled_sections_are_loaded() {
		let p = profile(json!({
			"config": { "markov_order": 1, "syllables_enabled": true, "components_enabled": true },
			"syllable_analysis": {
				"positional_syllables": { "start": { "ka": 1 } },
				"syllable_markov": { "order_1": { "ka": { "ri": 2 } } }
			},
			"component_analysis": { "frequencies": { "nuclei": { "a": 1 } } }
		}));
		assert!(p.has_syllables());
		assert!(p.has_components());
		assert_eq!(p.markov_order(), 1);
		assert!(p.syllable_chain().get("ka").is_some());
	}

	#[test]
	fn syllable_chain_prefers_order_two() {
		let p = profile(json!({
			"config": { "markov_order": 2, "syllables_enabled": true },
			"syllable_analysis": {
				"positional_syllables": { "start": { "ka": 1 } },
				"syllable_markov": {
					"order_1": { "ka": { "ri": 2 } },
					"order_2": { "ka": { "lo": 2 } }
				}
			}
		}));
		assert_eq!(p.syllable_chain().get("ka").unwrap()[0].value, "lo");
	}

	#[test]
	fn codas_fall_back_to_general_table() {
		let p = profile(json!({
			"config": { "components_enabled": true },
			"component_analysis": {
				"frequencies": { "nuclei": { "a": 1 }, "codas": { "n": 1 } },
				"positional_codas": { "start": { "r": 1 } }
			}
		}));
		assert_eq!(p.codas(Position::Start)[0].value, "r");
		assert_eq!(p.codas(Position::End)[0].value, "n");
	}

	#[test]
	fn corpus_file_is_analyzed_and_cached() {
		let dir = tempfile::tempdir().unwrap();
		let corpus = dir.path().join("elves.txt");
		std::fs::write(&corpus, "Aragorn\nArwen\nElrond\n").unwrap();

		let first = Profile::new(&corpus).unwrap();
		assert_eq!(first.name(), "elves");
		assert!(dir.path().join("elves.bin").exists());

		let cached = Profile::new(&corpus).unwrap();
		assert_eq!(first, cached);
	}

	#[test]
	fn empty_corpus_is_rejected() {
		let dir = tempfile::tempdir().unwrap();
		let corpus = dir.path().join("empty.txt");
		std::fs::write(&corpus, "\n  \n123\n").unwrap();
		assert!(matches!(Profile::new(&corpus), Err(NameGenError::EmptyCorpus(_))));
	}

	#[test]
	fn missing_file_is_rejected() {
		assert!(matches!(Profile::new("does/not/exist.json"), Err(NameGenError::InvalidPath(_))));
	}
}
