//! Corpus analysis: turns a list of real names into a [`ProfileDocument`].
//!
//! Lines are split into chunks analyzed on separate threads, and the
//! partial counts are merged into a single document.

use std::collections::HashMap;
use std::sync::mpsc;
use std::thread;

use serde_json::{Map, Value};

use super::document::{ChainMap, ChainPair, CountMap, PositionalCounts, ProfileDocument};
use super::markov_table::{END_MARKER, START_MARKER};
use super::profile::Position;

const VOWELS: &str = "aeiouyáàâäãåéèêëíìîïóòôöõúùûüý";

type Tally = HashMap<String, u64>;
type ChainTally = HashMap<String, Tally>;

/// Occurrence counts split by position in the name.
#[derive(Default, Debug)]
struct PositionalTally {
	start: Tally,
	middle: Tally,
	end: Tally,
}

impl PositionalTally {
	fn add(&mut self, position: Position, value: &str) {
		let tally = match position {
			Position::Start => &mut self.start,
			Position::Middle => &mut self.middle,
			Position::End => &mut self.end,
		};
		*tally.entry(value.to_owned()).or_insert(0) += 1;
	}

	fn merge(&mut self, other: PositionalTally) {
		merge_tally(&mut self.start, other.start);
		merge_tally(&mut self.middle, other.middle);
		merge_tally(&mut self.end, other.end);
	}

	fn to_counts(&self) -> PositionalCounts {
		PositionalCounts {
			start: to_count_map(&self.start),
			middle: to_count_map(&self.middle),
			end: to_count_map(&self.end),
		}
	}
}

/// One syllable split into its components. Onset and coda may be empty.
#[derive(Debug, PartialEq)]
struct Syllable {
	onset: String,
	nucleus: String,
	coda: String,
}

impl Syllable {
	fn text(&self) -> String {
		format!("{}{}{}", self.onset, self.nucleus, self.coda)
	}
}

/// Raw counts accumulated over (part of) a corpus.
#[derive(Default, Debug)]
struct CorpusCounts {
	letters_order1: ChainTally,
	letters_order2: ChainTally,
	bigrams: PositionalTally,
	trigrams: PositionalTally,
	syllables: PositionalTally,
	syllables_order1: ChainTally,
	onsets: PositionalTally,
	nuclei: Tally,
	codas: Tally,
	positional_codas: PositionalTally,
}

impl CorpusCounts {
	/// Adds a single name to the counts. Lines without letters are ignored.
	fn add_name(&mut self, line: &str) {
		let chars: Vec<char> = line
			.chars()
			.flat_map(char::to_lowercase)
			.filter(|c| c.is_alphabetic())
			.collect();
		if chars.is_empty() {
			return;
		}

		self.add_letter_chains(&chars);
		add_positional_windows(&mut self.bigrams, &chars, 2);
		add_positional_windows(&mut self.trigrams, &chars, 3);

		let syllables = syllabify(&chars);
		let count = syllables.len();
		for (index, syllable) in syllables.iter().enumerate() {
			let position = Position::of(index, count);
			let text = syllable.text();
			self.syllables.add(position, &text);

			let next = syllables.get(index + 1).map(Syllable::text).unwrap_or_else(|| END_MARKER.to_owned());
			add_transition(&mut self.syllables_order1, &text, &next);

			self.onsets.add(position, &syllable.onset);
			self.positional_codas.add(position, &syllable.coda);
			*self.nuclei.entry(syllable.nucleus.clone()).or_insert(0) += 1;
			*self.codas.entry(syllable.coda.clone()).or_insert(0) += 1;
		}
	}

	fn add_letter_chains(&mut self, chars: &[char]) {
		let start = START_MARKER.to_string();
		let mut previous = start.clone();
		for c in chars {
			let next = c.to_string();
			add_transition(&mut self.letters_order1, &previous, &next);
			previous = next;
		}
		add_transition(&mut self.letters_order1, &previous, END_MARKER);

		let padded: Vec<char> = [START_MARKER, START_MARKER].iter().chain(chars).copied().collect();
		for (i, c) in chars.iter().enumerate() {
			let context: String = padded[i..i + 2].iter().collect();
			add_transition(&mut self.letters_order2, &context, &c.to_string());
		}
		let tail: String = padded[padded.len() - 2..].iter().collect();
		add_transition(&mut self.letters_order2, &tail, END_MARKER);
	}

	fn merge(&mut self, other: CorpusCounts) {
		merge_chain(&mut self.letters_order1, other.letters_order1);
		merge_chain(&mut self.letters_order2, other.letters_order2);
		self.bigrams.merge(other.bigrams);
		self.trigrams.merge(other.trigrams);
		self.syllables.merge(other.syllables);
		merge_chain(&mut self.syllables_order1, other.syllables_order1);
		self.onsets.merge(other.onsets);
		merge_tally(&mut self.nuclei, other.nuclei);
		merge_tally(&mut self.codas, other.codas);
		self.positional_codas.merge(other.positional_codas);
	}

	fn into_document(self, markov_order: usize) -> ProfileDocument {
		let mut document = ProfileDocument::default();

		document.config.markov_order = markov_order;
		document.config.syllables_enabled = true;
		document.config.components_enabled = true;

		let letters = &mut document.letter_analysis;
		letters.markov_chains = ChainPair {
			order_1: to_chain_map(&self.letters_order1),
			order_2: to_chain_map(&self.letters_order2),
		};
		letters.positional_bigrams = self.bigrams.to_counts();
		letters.positional_trigrams = self.trigrams.to_counts();

		let syllables = &mut document.syllable_analysis;
		syllables.positional_syllables = self.syllables.to_counts();
		syllables.syllable_markov.order_1 = to_chain_map(&self.syllables_order1);

		let components = &mut document.component_analysis;
		components.frequencies.nuclei = to_count_map(&self.nuclei);
		components.frequencies.codas = to_count_map(&self.codas);
		components.positional_onsets = self.onsets.to_counts();
		components.positional_codas = self.positional_codas.to_counts();

		document
	}
}

impl ProfileDocument {
	/// Analyzes a corpus (one name per line) into a profile document.
	///
	/// # Behavior
	/// - Splits input lines into chunks (based on CPU cores * factor).
	/// - Spawns threads to count each chunk.
	/// - Merges all partial counts sequentially.
	///
	/// # Notes
	/// - Names are lowercased and stripped of non-alphabetic characters.
	/// - Syllable and component sections are always enabled.
	pub fn analyze(lines: &[String], markov_order: usize) -> Self {
		let cpus = num_cpus::get();
		let factor = 8;
		let chunks = cpus * factor;
		let chunk_size = lines.len().div_ceil(chunks).max(1);

		let (tx, rx) = mpsc::channel();
		for chunk in lines.chunks(chunk_size) {
			let tx = tx.clone();
			let chunk: Vec<String> = chunk.to_vec();

			thread::spawn(move || {
				let mut partial = CorpusCounts::default();
				for line in &chunk {
					partial.add_name(line);
				}
				// The receiver outlives every sender
				let _ = tx.send(partial);
			});
		}
		drop(tx);

		let mut counts = CorpusCounts::default();
		for partial in rx.iter() {
			counts.merge(partial);
		}

		counts.into_document(markov_order)
	}
}

fn is_vowel(chars: &[char], index: usize) -> bool {
	let c = chars[index];
	if c == 'y' && index == 0 {
		return false;
	}
	VOWELS.contains(c)
}

/// Splits a name into syllables around its vowel groups.
///
/// A single consonant between two vowel groups opens the next syllable;
/// a longer cluster gives its first consonant to the previous coda.
/// Names without any vowel yield no syllables.
fn syllabify(chars: &[char]) -> Vec<Syllable> {
	let mut groups: Vec<(bool, String)> = Vec::new();
	for index in 0..chars.len() {
		let vowel = is_vowel(chars, index);
		match groups.last_mut() {
			Some((kind, text)) if *kind == vowel => text.push(chars[index]),
			_ => groups.push((vowel, chars[index].to_string())),
		}
	}

	let mut syllables = Vec::new();
	let mut onset = String::new();
	let mut iter = groups.into_iter().peekable();
	while let Some((vowel, text)) = iter.next() {
		if !vowel {
			// Only the leading group reaches here
			onset = text;
			continue;
		}

		let mut syllable = Syllable { onset: std::mem::take(&mut onset), nucleus: text, coda: String::new() };
		if let Some((_, cluster)) = iter.next_if(|(kind, _)| !*kind) {
			if iter.peek().is_none() {
				syllable.coda = cluster;
			} else if cluster.chars().count() == 1 {
				onset = cluster;
			} else {
				let mut rest = cluster.chars();
				syllable.coda = rest.next().map(String::from).unwrap_or_default();
				onset = rest.collect();
			}
		}
		syllables.push(syllable);
	}

	syllables
}

fn add_positional_windows(tally: &mut PositionalTally, chars: &[char], size: usize) {
	if chars.len() < size {
		return;
	}
	let last = chars.len() - size;
	for i in 0..=last {
		let gram: String = chars[i..i + size].iter().collect();
		if i == 0 {
			tally.add(Position::Start, &gram);
		}
		if i == last {
			tally.add(Position::End, &gram);
		}
		if i != 0 && i != last {
			tally.add(Position::Middle, &gram);
		}
	}
}

fn add_transition(chain: &mut ChainTally, context: &str, next: &str) {
	*chain.entry(context.to_owned()).or_default().entry(next.to_owned()).or_insert(0) += 1;
}

fn merge_tally(into: &mut Tally, from: Tally) {
	for (value, count) in from {
		*into.entry(value).or_insert(0) += count;
	}
}

fn merge_chain(into: &mut ChainTally, from: ChainTally) {
	for (context, tally) in from {
		merge_tally(into.entry(context).or_default(), tally);
	}
}

fn to_count_map(tally: &Tally) -> CountMap {
	tally.iter().map(|(value, count)| (value.clone(), Value::from(*count))).collect()
}

fn to_chain_map(chain: &ChainTally) -> ChainMap {
	chain
		.iter()
		.map(|(context, tally)| {
			let next: Map<String, Value> = tally.iter().map(|(v, c)| (v.clone(), Value::from(*c))).collect();
			(context.clone(), Value::Object(next))
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::profile::Profile;

	fn split(name: &str) -> Vec<String> {
		let chars: Vec<char> = name.chars().collect();
		syllabify(&chars).iter().map(Syllable::text).collect()
	}

	fn count(map: &CountMap, key: &str) -> Option<u64> {
		map.get(key).and_then(Value::as_u64)
	}

	#[test]
	fn syllabify_splits_on_vowel_groups() {
		assert_eq!(split("aragorn"), vec!["a", "ra", "gorn"]);
		assert_eq!(split("elrond"), vec!["el", "rond"]);
		assert_eq!(split("yara"), vec!["ya", "ra"]);
		assert!(split("brr").is_empty());
	}

	#[test]
	fn syllable_components_are_recorded() {
		let chars: Vec<char> = "strand".chars().collect();
		let syllables = syllabify(&chars);
		assert_eq!(
			syllables,
			vec![Syllable { onset: "str".into(), nucleus: "a".into(), coda: "nd".into() }]
		);
	}

	#[test]
	fn letter_chains_use_start_and_end_markers() {
		let doc = ProfileDocument::analyze(&["Ea".to_owned()], 2);
		let chains = &doc.letter_analysis.markov_chains;

		assert_eq!(chains.order_1["^"]["e"], 1);
		assert_eq!(chains.order_1["a"]["$"], 1);
		assert_eq!(chains.order_2["^^"]["e"], 1);
		assert_eq!(chains.order_2["^e"]["a"], 1);
		assert_eq!(chains.order_2["ea"]["$"], 1);
	}

	#[test]
	fn positional_ngrams_split_start_middle_end() {
		let doc = ProfileDocument::analyze(&["karin".to_owned()], 2);
		let bigrams = &doc.letter_analysis.positional_bigrams;
		assert_eq!(count(&bigrams.start, "ka"), Some(1));
		assert_eq!(count(&bigrams.middle, "ar"), Some(1));
		assert_eq!(count(&bigrams.middle, "ri"), Some(1));
		assert_eq!(count(&bigrams.end, "in"), Some(1));
		assert_eq!(count(&bigrams.middle, "ka"), None);

		let trigrams = &doc.letter_analysis.positional_trigrams;
		assert_eq!(count(&trigrams.start, "kar"), Some(1));
		assert_eq!(count(&trigrams.middle, "ari"), Some(1));
		assert_eq!(count(&trigrams.end, "rin"), Some(1));
	}

	#[test]
	fn counts_merge_across_chunks() {
		let lines: Vec<String> = std::iter::repeat("Lina".to_owned()).take(500).collect();
		let doc = ProfileDocument::analyze(&lines, 2);
		assert_eq!(doc.letter_analysis.markov_chains.order_1["^"]["l"], 500);
		assert_eq!(count(&doc.syllable_analysis.positional_syllables.start, "li"), Some(500));
		assert_eq!(count(&doc.syllable_analysis.positional_syllables.end, "na"), Some(500));
	}

	#[test]
	fn analyzed_document_round_trips_through_json() {
		let lines = vec!["Aragorn".to_owned(), "Arwen".to_owned()];
		let doc = ProfileDocument::analyze(&lines, 2);
		let json = doc.to_json_pretty().unwrap();

		let profile = Profile::from_json_str(&json).unwrap();
		assert_eq!(profile, Profile::from_corpus(&lines, 2));
		assert!(profile.has_syllables());
		assert!(profile.has_components());
	}

	#[test]
	fn empty_input_gives_empty_document() {
		let doc = ProfileDocument::analyze(&[], 2);
		assert!(doc.letter_analysis.markov_chains.order_1.is_empty());
	}
}
