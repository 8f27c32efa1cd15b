//! Integration tests for the namegen CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get a path relative to the workspace root
fn workspace_path(relative: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join(relative)
}

/// The JSON profile fixture shared with the core tests
fn tiny_profile() -> PathBuf {
	workspace_path("namegen-core/tests/fixtures/tiny.json")
}

/// Copies the bundled Latin corpus into a temporary directory so compiled caches stay out of the tree
fn temp_latin_corpus(dir: &TempDir) -> PathBuf {
	let target = dir.path().join("latin.txt");
	fs::copy(workspace_path("data/latin.txt"), &target).unwrap();
	target
}

fn namegen() -> Command {
	let mut cmd = Command::cargo_bin("namegen").unwrap();
	cmd.env_remove("NAMEGEN_PROFILE").env_remove("NAMEGEN_SEED").env_remove("NAMEGEN_STRATEGY");
	cmd
}

fn output_lines(cmd: &mut Command) -> Vec<String> {
	let output = cmd.output().unwrap();
	assert!(output.status.success());
	String::from_utf8(output.stdout).unwrap().lines().map(str::to_owned).collect()
}

#[test]
fn test_default_generates_ten_names() {
	let lines = output_lines(&mut namegen());
	assert_eq!(lines.len(), 10);
	for line in lines {
		assert!(line.chars().next().unwrap().is_uppercase(), "{line}");
	}
}

#[test]
fn test_count_flag() {
	let lines = output_lines(namegen().arg("-n").arg("25"));
	assert_eq!(lines.len(), 25);
}

#[test]
fn test_count_out_of_range_is_rejected() {
	namegen().arg("-n").arg("0").assert().failure();
	namegen().arg("-n").arg("10001").assert().failure();
}

#[test]
fn test_debug_shows_tags() {
	namegen()
		.args(["-n", "5", "--debug", "--seed", "7"])
		.assert()
		.success()
		.stdout(predicate::str::is_match(r"^(\S+ \[[A-Z]+\]\n){5}$").unwrap());
}

#[test]
fn test_seed_is_reproducible() {
	let first = output_lines(namegen().args(["-n", "20", "--seed", "42"]));
	let second = output_lines(namegen().args(["-n", "20", "--seed", "42"]));
	assert_eq!(first, second);
}

#[test]
fn test_json_profile_strategy_tag() {
	namegen()
		.args(["-n", "5", "-d", "-s", "markov2", "--seed", "1", "-p"])
		.arg(tiny_profile())
		.assert()
		.success()
		.stdout(predicate::str::contains("[markov2]"))
		.stdout(predicate::str::contains("ina"));
}

#[test]
fn test_corpus_profile_with_blend() {
	let dir = TempDir::new().unwrap();
	let latin = temp_latin_corpus(&dir);

	namegen()
		.args(["-n", "30", "-d", "--seed", "3", "--min-length", "4", "--max-length", "10", "-p"])
		.arg(&latin)
		.arg("-b")
		.arg(tiny_profile())
		.assert()
		.success()
		.stdout(predicate::str::contains("Error").not());

	assert!(dir.path().join("latin.bin").exists());
}

#[test]
fn test_bounds_without_profile_warn() {
	namegen()
		.env_remove("RUST_LOG")
		.args(["-n", "3", "--min-length", "8"])
		.assert()
		.success()
		.stderr(predicate::str::contains("length bounds are ignored"));
}

#[test]
fn test_bounds_with_profile_do_not_warn() {
	namegen()
		.env_remove("RUST_LOG")
		.args(["-n", "3", "--min-length", "4", "-p"])
		.arg(tiny_profile())
		.assert()
		.success()
		.stderr(predicate::str::contains("length bounds are ignored").not());
}

#[test]
fn test_blend_requires_profile() {
	namegen().arg("-b").arg(tiny_profile()).assert().failure();
}

#[test]
fn test_unknown_strategy_is_rejected() {
	namegen()
		.args(["-s", "bogus"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("Unknown strategy"));
}

#[test]
fn test_inverted_bounds_are_rejected() {
	namegen()
		.args(["--min-length", "8", "--max-length", "3"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("min_length"));
}

#[test]
fn test_missing_profile_fails() {
	namegen()
		.args(["-p", "does-not-exist.json"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("Failed to load profile"));
}

#[test]
fn test_analyze_writes_profile() {
	let dir = TempDir::new().unwrap();
	let latin = temp_latin_corpus(&dir);
	let output = dir.path().join("latin.json");

	namegen().arg("analyze").arg(&latin).arg("-o").arg(&output).assert().success();

	let json = fs::read_to_string(&output).unwrap();
	assert!(json.contains("\"markov_chains\""));
	assert!(json.contains("\"syllables_enabled\": true"));

	namegen()
		.args(["-n", "10", "-s", "component", "-d", "-p"])
		.arg(&output)
		.assert()
		.success()
		.stdout(predicate::str::contains("[component]"));
}

#[test]
fn test_analyze_rejects_empty_corpus() {
	let dir = TempDir::new().unwrap();
	let corpus = dir.path().join("empty.txt");
	fs::write(&corpus, "\n\n").unwrap();

	namegen().arg("analyze").arg(&corpus).assert().failure();
}
