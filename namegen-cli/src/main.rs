use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use rs_namegen_core::model::document::ProfileDocument;
use rs_namegen_core::{Generator, Strategy};

/// Generate pronounceable names from phonetic patterns or learned profiles
#[derive(Debug, Parser)]
#[command(name = "namegen", version, args_conflicts_with_subcommands = true)]
struct Cli {
	#[command(subcommand)]
	command: Option<Command>,

	#[command(flatten)]
	generate: GenerateArgs,
}

#[derive(Debug, Subcommand)]
enum Command {
	/// Generate names (default)
	Generate(GenerateArgs),
	/// Analyze a corpus (one name per line) into a JSON profile
	Analyze(AnalyzeArgs),
}

/// Logging flags shared by every command
#[derive(Debug, Args)]
struct LogArgs {
	/// Increase verbosity
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,

	/// Suppress log output
	#[arg(short, long)]
	quiet: bool,
}

#[derive(Debug, Args)]
struct GenerateArgs {
	/// Number of names to generate
	#[arg(short = 'n', long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=10000))]
	count: u32,

	/// Generation strategy (legacy, markov1, markov2, syllable, component, ngram, random)
	#[arg(short, long, default_value = "random", env = "NAMEGEN_STRATEGY")]
	strategy: Strategy,

	/// Minimum name length (0 = unbounded)
	#[arg(long, default_value_t = 0)]
	min_length: usize,

	/// Maximum name length (0 = unbounded)
	#[arg(long, default_value_t = 0)]
	max_length: usize,

	/// Seed for reproducible output
	#[arg(long, env = "NAMEGEN_SEED")]
	seed: Option<u64>,

	/// Profile to learn from (.json document or a corpus with one name per line)
	#[arg(short, long, value_name = "FILE", env = "NAMEGEN_PROFILE")]
	profile: Option<PathBuf>,

	/// Second profile blended into the first
	#[arg(short, long, value_name = "FILE", requires = "profile")]
	blend: Option<PathBuf>,

	/// Show the pattern or strategy used for each name
	#[arg(short, long)]
	debug: bool,

	#[command(flatten)]
	log: LogArgs,
}

#[derive(Debug, Args)]
struct AnalyzeArgs {
	/// Corpus file, one name per line
	#[arg(value_name = "CORPUS")]
	corpus: PathBuf,

	/// Output file (default: stdout)
	#[arg(short, long, value_name = "FILE")]
	output: Option<PathBuf>,

	/// Markov order recorded in the profile
	#[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=2))]
	markov_order: u8,

	#[command(flatten)]
	log: LogArgs,
}

impl LogArgs {
	/// Initialize logging based on verbosity level
	fn init_logging(&self) {
		let log_level = match self.verbose {
			0 => "warn",
			1 => "info",
			2 => "debug",
			_ => "trace",
		};

		if !self.quiet {
			env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
		}
	}
}

impl GenerateArgs {
	fn execute(&self) -> Result<()> {
		self.log.init_logging();
		log::debug!("Arguments: {:?}", self);

		let mut generator = match self.seed {
			Some(seed) => Generator::with_seed(seed),
			None => Generator::new(),
		};

		if let Some(profile) = &self.profile {
			generator
				.load_profile(profile)
				.with_context(|| format!("Failed to load profile {}", profile.display()))?;
		}
		if let Some(blend) = &self.blend {
			generator
				.load_second_profile(blend)
				.with_context(|| format!("Failed to load blend profile {}", blend.display()))?;
		}
		if self.profile.is_none() && !matches!(self.strategy, Strategy::Legacy | Strategy::Random) {
			log::warn!("No profile given, strategy '{}' falls back to phonetic patterns", self.strategy);
		}

		generator.configure(self.strategy, self.min_length, self.max_length, None)?;
		if generator.ignores_length_bounds() {
			log::warn!("No profile given, length bounds are ignored by phonetic patterns");
		}

		let stdout = std::io::stdout();
		let mut out = stdout.lock();
		for name in generator.generate_batch(self.count as usize) {
			if self.debug {
				writeln!(out, "{} [{}]", name.text, name.tag)?;
			} else {
				writeln!(out, "{}", name.text)?;
			}
		}

		Ok(())
	}
}

impl AnalyzeArgs {
	fn execute(&self) -> Result<()> {
		self.log.init_logging();

		let contents = std::fs::read_to_string(&self.corpus)
			.with_context(|| format!("Failed to read corpus {}", self.corpus.display()))?;
		let lines: Vec<String> = contents.lines().map(str::to_owned).collect();

		let document = ProfileDocument::analyze(&lines, self.markov_order as usize);
		if document.letter_analysis.markov_chains.order_1.is_empty() {
			anyhow::bail!("Corpus {} contains no usable names", self.corpus.display());
		}
		log::info!(
			"Analyzed {} lines: {} letter contexts, {} start syllables",
			lines.len(),
			document.letter_analysis.markov_chains.order_2.len(),
			document.syllable_analysis.positional_syllables.start.len()
		);

		let json = document.to_json_pretty()?;
		match &self.output {
			Some(path) => std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?,
			None => println!("{json}"),
		}

		Ok(())
	}
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Some(Command::Generate(args)) => args.execute(),
		Some(Command::Analyze(args)) => args.execute(),
		None => cli.generate.execute(),
	}
}
