use crate::error::{NameGenError, Result};
use super::strategy::Strategy;

/// Input parameters applied to every name produced by a `Generator`.
///
/// # Responsibilities
/// - Track the selected strategy
/// - Track the length bounds enforced by the retry loop
///
/// # Invariants
/// - A bound of 0 means "unbounded" on that side
/// - When both bounds are set, `min_length <= max_length`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationInput {
	/// Strategy used when a profile is loaded.
	pub strategy: Strategy,

	/// Minimum name length in characters (0 = unbounded).
	min_length: usize,

	/// Maximum name length in characters (0 = unbounded).
	max_length: usize,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self { strategy: Strategy::Random, min_length: 0, max_length: 0 }
	}
}

impl GenerationInput {
	/// Creates an input with the given strategy and length bounds.
	///
	/// # Errors
	/// Returns an error if both bounds are set and `min_length > max_length`.
	pub fn new(strategy: Strategy, min_length: usize, max_length: usize) -> Result<Self> {
		let mut input = Self { strategy, ..Self::default() };
		input.set_length_bounds(min_length, max_length)?;
		Ok(input)
	}

	pub fn min_length(&self) -> usize {
		self.min_length
	}

	pub fn max_length(&self) -> usize {
		self.max_length
	}

	/// Sets the length bounds.
	///
	/// # Errors
	/// Returns an error if both bounds are set and `min_length > max_length`.
	pub fn set_length_bounds(&mut self, min_length: usize, max_length: usize) -> Result<()> {
		if min_length > 0 && max_length > 0 && min_length > max_length {
			return Err(NameGenError::config(format!(
				"min_length ({min_length}) must not exceed max_length ({max_length})"
			)));
		}
		self.min_length = min_length;
		self.max_length = max_length;
		Ok(())
	}

	/// Returns true when `name` satisfies both bounds.
	pub fn accepts(&self, name: &str) -> bool {
		let length = name.chars().count();
		(self.min_length == 0 || length >= self.min_length) && (self.max_length == 0 || length <= self.max_length)
	}
}
