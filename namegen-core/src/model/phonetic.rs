//! Profile-free name generation from phonetic pattern templates.
//!
//! Pattern codes:
//!
//! | Code | Expands to                                  |
//! |------|---------------------------------------------|
//! | `C`  | any consonant                               |
//! | `V`  | vowel                                       |
//! | `P`  | plosive (`bcdgkpqt`)                        |
//! | `F`  | fricative (`fhsvxz`)                        |
//! | `N`  | nasal (`mn`)                                |
//! | `L`  | liquid (`lr`)                               |
//! | `W`  | glide (`wj`)                                |
//! | `B`  | consonant blend (`sh`, `tr`, `str`, ...)    |
//! | `D`  | doubled vowel or consonant                  |
//! | `Q`  | quality pair (two consonant categories)     |
//! | `S`  | special ending (`xzk`)                      |
//!
//! Unknown codes are skipped so templates can grow new codes.

use rand::Rng;

const PLOSIVES: &[u8] = b"bcdgkpqt";
const FRICATIVES: &[u8] = b"fhsvxz";
const NASALS: &[u8] = b"mn";
const LIQUIDS: &[u8] = b"lr";
const GLIDES: &[u8] = b"wj";
const CONSONANTS: &[u8] = b"bcdfghjklmnpqrstvwxyz";
const VOWELS: &[u8] = b"aeiou";
const SPECIAL_ENDINGS: &[u8] = b"xzk";

const BLENDS: &[&str] = &[
	"bl", "br", "ch", "cl", "cr", "dr", "fl", "fr", "gl", "gr",
	"pl", "pr", "sc", "sh", "sk", "sl", "sm", "sn", "sp", "st",
	"sw", "th", "tr", "tw", "wh", "wr", "qu", "scr", "spr", "str",
];

/// Template library. Duplicates are kept: they weight the uniform pick.
pub const DEFAULT_PATTERNS: &[&str] = &[
	// Short
	"CVC", "VCC", "CCV", "VC", "CV",
	// Four letters
	"CVCC", "CCVC", "CVCV", "VCVC", "CVVC",
	// Five letters
	"CVCVC", "CVCCV", "CCVCV", "VCVCV", "CVCCC", "CCCVC",
	// Six letters
	"CVCVCV", "CVCCVC", "CCVCVC", "CVCVCC", "VCVCVC",
	// Blends
	"BVC", "BVV", "BVCC", "BVC", "BVCV", "CVBV", "BVCVC", "CVBVC",
	// Doubled letters
	"CVDV", "VDVC", "CVDVC", "CVVCV",
	// Special endings
	"CVS", "CVCS", "CVCVS", "BVCS",
	// Mixed
	"VCCV", "VCCVC", "CCVVC", "CVCVVC", "BVVCV",
	// Long
	"CVCVCVC", "CCVCVCV", "BVCVCVC",
	// Quirky
	"VCV", "VCVV", "CVVCC", "CCVCC",
	// Phonetic categories
	"PVP", "PVPV", "FVF", "FVFV", "LVL", "LVLV",
	"PVL", "PVLV", "FVL", "FVLV", "NVL", "NVLV",
	// Quality pairs
	"QVC", "QVCV", "QVQV", "QVCVC", "VQVC",
];

/// Ordered consonant-category pairings used by the `Q` code.
const QUALITY_PAIRS: [(&[u8], &[u8]); 10] = [
	(PLOSIVES, LIQUIDS),
	(PLOSIVES, FRICATIVES),
	(FRICATIVES, LIQUIDS),
	(FRICATIVES, NASALS),
	(LIQUIDS, PLOSIVES),
	(LIQUIDS, FRICATIVES),
	(NASALS, PLOSIVES),
	(NASALS, FRICATIVES),
	(GLIDES, PLOSIVES),
	(GLIDES, FRICATIVES),
];

/// Legacy generator expanding phonetic pattern templates.
#[derive(Debug, Clone)]
pub struct PhoneticPatternEngine {
	patterns: Vec<String>,
}

impl Default for PhoneticPatternEngine {
	fn default() -> Self {
		Self::new()
	}
}

impl PhoneticPatternEngine {
	/// Creates an engine with the built-in template library.
	pub fn new() -> Self {
		Self::with_patterns(DEFAULT_PATTERNS.iter().map(|p| (*p).to_owned()).collect())
	}

	/// Creates an engine with a custom template library.
	pub fn with_patterns(patterns: Vec<String>) -> Self {
		Self { patterns }
	}

	pub fn patterns(&self) -> &[String] {
		&self.patterns
	}

	/// Picks a template uniformly and expands it.
	///
	/// Returns the capitalized name and the template used.
	pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> (String, String) {
		if self.patterns.is_empty() {
			return (String::new(), String::new());
		}
		let pattern = &self.patterns[rng.random_range(0..self.patterns.len())];
		(self.expand(pattern, rng), pattern.clone())
	}

	/// Expands a template left to right and capitalizes the result.
	pub fn expand<R: Rng + ?Sized>(&self, pattern: &str, rng: &mut R) -> String {
		let mut result = String::new();

		for code in pattern.chars() {
			match code {
				'C' => result.push(pick(CONSONANTS, rng)),
				'V' => result.push(pick(VOWELS, rng)),
				'P' => result.push(pick(PLOSIVES, rng)),
				'F' => result.push(pick(FRICATIVES, rng)),
				'N' => result.push(pick(NASALS, rng)),
				'L' => result.push(pick(LIQUIDS, rng)),
				'W' => result.push(pick(GLIDES, rng)),
				'S' => result.push(pick(SPECIAL_ENDINGS, rng)),
				'B' => result.push_str(BLENDS[rng.random_range(0..BLENDS.len())]),
				'D' => {
					let class = if rng.random_range(0..2) == 1 { VOWELS } else { CONSONANTS };
					let c = pick(class, rng);
					result.push(c);
					result.push(c);
				}
				'Q' => {
					let (first, second) = QUALITY_PAIRS[rng.random_range(0..QUALITY_PAIRS.len())];
					result.push(pick(first, rng));
					result.push(pick(second, rng));
				}
				_ => {}
			}
		}

		capitalize(&result)
	}
}

fn pick<R: Rng + ?Sized>(class: &[u8], rng: &mut R) -> char {
	class[rng.random_range(0..class.len())] as char
}

/// Uppercases the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn in_class(c: char, class: &[u8]) -> bool {
		class.contains(&(c as u8))
	}

	#[test]
	fn library_is_fixed_and_uses_known_codes() {
		let engine = PhoneticPatternEngine::new();
		assert_eq!(engine.patterns().len(), DEFAULT_PATTERNS.len());
		assert!(engine.patterns().len() >= 65);
		for pattern in engine.patterns() {
			assert!(pattern.chars().all(|c| "CVPFNLWBDQS".contains(c)), "{pattern}");
		}
	}

	#[test]
	fn capitalize_touches_only_first_character() {
		assert_eq!(capitalize("zara"), "Zara");
		assert_eq!(capitalize("eLo"), "ELo");
		assert_eq!(capitalize(""), "");
	}

	#[test]
	fn expansion_follows_categories() {
		let engine = PhoneticPatternEngine::new();
		let mut rng = StdRng::seed_from_u64(3);
		for _ in 0..200 {
			let name = engine.expand("PVNLWFS", &mut rng).to_lowercase();
			let chars: Vec<char> = name.chars().collect();
			assert_eq!(chars.len(), 7);
			assert!(in_class(chars[0], PLOSIVES));
			assert!(in_class(chars[1], VOWELS));
			assert!(in_class(chars[2], NASALS));
			assert!(in_class(chars[3], LIQUIDS));
			assert!(in_class(chars[4], GLIDES));
			assert!(in_class(chars[5], FRICATIVES));
			assert!(in_class(chars[6], SPECIAL_ENDINGS));
		}
	}

	#[test]
	fn double_code_repeats_one_letter() {
		let engine = PhoneticPatternEngine::new();
		let mut rng = StdRng::seed_from_u64(11);
		for _ in 0..100 {
			let name = engine.expand("D", &mut rng).to_lowercase();
			let chars: Vec<char> = name.chars().collect();
			assert_eq!(chars.len(), 2);
			assert_eq!(chars[0], chars[1]);
		}
	}

	#[test]
	fn quality_pair_draws_from_a_listed_pairing() {
		let engine = PhoneticPatternEngine::new();
		let mut rng = StdRng::seed_from_u64(5);
		for _ in 0..300 {
			let name = engine.expand("Q", &mut rng).to_lowercase();
			let chars: Vec<char> = name.chars().collect();
			assert_eq!(chars.len(), 2);
			assert!(
				QUALITY_PAIRS.iter().any(|(a, b)| in_class(chars[0], a) && in_class(chars[1], b)),
				"{name}"
			);
		}
	}

	#[test]
	fn blend_code_emits_a_known_blend() {
		let engine = PhoneticPatternEngine::new();
		let mut rng = StdRng::seed_from_u64(8);
		for _ in 0..100 {
			let name = engine.expand("B", &mut rng).to_lowercase();
			assert!(BLENDS.contains(&name.as_str()), "{name}");
		}
	}

	#[test]
	fn unknown_codes_are_skipped() {
		let engine = PhoneticPatternEngine::new();
		let mut rng = StdRng::seed_from_u64(2);
		let name = engine.expand("VxZ?V", &mut rng);
		assert_eq!(name.chars().count(), 2);
	}

	#[test]
	fn generated_names_are_capitalized_and_tagged() {
		let engine = PhoneticPatternEngine::new();
		let mut rng = StdRng::seed_from_u64(42);
		for _ in 0..500 {
			let (name, pattern) = engine.generate(&mut rng);
			assert!(DEFAULT_PATTERNS.contains(&pattern.as_str()));
			let mut chars = name.chars();
			assert!(chars.next().unwrap().is_uppercase());
			assert!(chars.all(|c| c.is_lowercase()));
		}
	}

	#[test]
	fn seeded_generation_is_reproducible() {
		let engine = PhoneticPatternEngine::new();
		let run = |seed| {
			let mut rng = StdRng::seed_from_u64(seed);
			(0..20).map(|_| engine.generate(&mut rng)).collect::<Vec<_>>()
		};
		assert_eq!(run(17), run(17));
	}
}
