use std::path::{Component, Path, PathBuf};
use std::{env, fs, io};

use crate::error::{NameGenError, Result};

/// Extension of the compiled profile written next to a corpus.
pub(crate) const CACHE_EXTENSION: &str = "bin";

/// Reads a corpus file: one name per line.
///
/// Lines are trimmed; blank lines are dropped.
pub(crate) fn read_corpus<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
	let contents = fs::read_to_string(path)?;
	Ok(contents
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.map(str::to_owned)
		.collect())
}

/// Path of the compiled profile cached next to `corpus`.
///
/// `data/elves.txt` → `data/elves.bin`
pub(crate) fn cache_path(corpus: &Path) -> Result<PathBuf> {
	if corpus.file_stem().is_none() {
		return Err(NameGenError::InvalidPath(corpus.display().to_string()));
	}
	Ok(corpus.with_extension(CACHE_EXTENSION))
}

/// Profile name derived from its file: the stem, without directory or extension.
pub(crate) fn profile_name(path: &Path) -> Result<String> {
	path.file_stem()
		.map(|stem| stem.to_string_lossy().into_owned())
		.ok_or_else(|| NameGenError::InvalidPath(path.display().to_string()))
}

/// Returns true when the path carries the given extension (case-insensitive).
pub(crate) fn has_extension<P: AsRef<Path>>(path: P, extension: &str) -> bool {
	path.as_ref()
		.extension()
		.is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension))
}

/// Resolves a profile folder: empty, `"."` and `"./"` mean the working directory.
pub fn normalize_folder(input: &str) -> PathBuf {
	match input {
		"" | "." | "./" => env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
		folder => PathBuf::from(folder),
	}
}

/// Maps a profile name to a file inside `folder`.
///
/// The name must be a plain file name: separators, `..` and absolute or
/// prefixed components are rejected so the result never leaves `folder`.
/// A name without an extension tries each of `extensions` in order and
/// falls back to the bare name.
///
/// # Errors
/// [`NameGenError::InvalidPath`] if the name is empty or not a plain file name.
pub fn resolve_profile(folder: &Path, name: &str, extensions: &[&str]) -> Result<PathBuf> {
	let mut components = Path::new(name).components();
	let plain = matches!(
		(components.next(), components.next()),
		(Some(Component::Normal(_)), None)
	) && !name.contains(['/', '\\']);
	if !plain {
		return Err(NameGenError::InvalidPath(name.to_owned()));
	}

	let direct = folder.join(name);
	if direct.extension().is_some() {
		return Ok(direct);
	}
	Ok(extensions
		.iter()
		.map(|ext| direct.with_extension(ext))
		.find(|path| path.is_file())
		.unwrap_or(direct))
}

/// Lists all files whose extension is one of `extensions` in a directory.
///
/// Returns file names only (no paths), sorted.
pub fn list_files<P: AsRef<Path>>(dir: P, extensions: &[&str]) -> io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let entry = entry?;
		let path = entry.path();

		if path.is_file() && extensions.iter().any(|ext| has_extension(&path, ext)) {
			if let Some(name) = path.file_name() {
				files.push(name.to_string_lossy().to_string());
			}
		}
	}

	files.sort();
	Ok(files)
}
