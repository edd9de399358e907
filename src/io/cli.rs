//! Command-line interface for generating puzzles and inspecting the corpus

use crate::algorithm::assembler::{AssemblerConfig, PuzzleAssembler};
use crate::corpus::store::WordClueStore;
use crate::io::api::corpus_body;
use crate::io::configuration::{DEFAULT_CORPUS_DIR, DEFAULT_GRID_SIZE, MAX_PUZZLE_ATTEMPTS};
use crate::io::error::{Result, WithPath};
use crate::io::progress::ProgressManager;
use crate::io::render::render_puzzle;
use crate::puzzle::data::PuzzleData;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "minicross")]
#[command(author, version, about = "Generate mini crossword puzzles from a word and clue corpus")]
/// Command-line arguments for the crossword generator
pub struct Cli {
    /// Directory holding the per-length corpus JSON files
    #[arg(short, long, global = true, default_value = DEFAULT_CORPUS_DIR)]
    pub corpus: PathBuf,

    /// Suppress progress output and warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log generation attempts
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available operations
#[derive(Subcommand)]
pub enum Command {
    /// Generate one or more puzzles
    Generate(GenerateArgs),
    /// Print the corpus as served by the crosswords endpoint
    Corpus,
}

/// Options for puzzle generation
#[derive(Args)]
pub struct GenerateArgs {
    /// Side length of the grid
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Number of puzzles to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Random seed for reproducible generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Maximum attempts per puzzle
    #[arg(short, long, default_value_t = MAX_PUZZLE_ATTEMPTS)]
    pub attempts: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Show answers in text output
    #[arg(short, long)]
    pub reveal: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Serialization of generated puzzles
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `PuzzleData` JSON, an array when several puzzles are generated
    Json,
    /// Rendered grid and clue lists
    Text,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log filter implied by the verbosity flags
    pub const fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "info"
        } else {
            "warn"
        }
    }
}

/// Runs the selected command against a corpus directory
pub struct PuzzleRunner {
    cli: Cli,
    store: WordClueStore,
    progress_manager: Option<ProgressManager>,
}

impl PuzzleRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        let store = WordClueStore::new(cli.corpus.clone());

        Self {
            cli,
            store,
            progress_manager,
        }
    }

    /// Execute the selected command
    ///
    /// # Errors
    ///
    /// Returns an error if generation exhausts its attempts, the corpus
    /// command cannot read the corpus, or output cannot be written
    pub fn process(&mut self) -> Result<()> {
        let Self {
            cli,
            store,
            progress_manager,
        } = self;

        match &cli.command {
            Command::Generate(args) => {
                let puzzles = generate_batch(store, args, progress_manager.as_mut())?;
                let rendered = Self::format_puzzles(&puzzles, args.format, args.reveal)?;
                Self::write_output(args.output.as_ref(), &rendered)
            }
            Command::Corpus => {
                let body = corpus_body(store)?;
                let rendered = serde_json::to_string_pretty(&body)?;
                Self::write_output(None, &rendered)
            }
        }
    }

    /// Serialize puzzles in the requested format
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails
    pub fn format_puzzles(
        puzzles: &[PuzzleData],
        format: OutputFormat,
        reveal: bool,
    ) -> Result<String> {
        match format {
            OutputFormat::Json => match puzzles {
                [single] => Ok(serde_json::to_string_pretty(single)?),
                _ => Ok(serde_json::to_string_pretty(puzzles)?),
            },
            OutputFormat::Text => Ok(puzzles
                .iter()
                .map(|puzzle| render_puzzle(puzzle, reveal))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn write_output(path: Option<&PathBuf>, content: &str) -> Result<()> {
        match path {
            Some(path) => {
                let file = File::create(path).with_path(path, "create")?;
                let mut writer = BufWriter::new(file);
                writeln!(writer, "{content}").with_path(path, "write")?;
                writer.flush().with_path(path, "flush")
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{content}")?;
                Ok(stdout.flush()?)
            }
        }
    }
}

fn generate_batch(
    store: &WordClueStore,
    args: &GenerateArgs,
    mut progress: Option<&mut ProgressManager>,
) -> Result<Vec<PuzzleData>> {
    let config = AssemblerConfig {
        max_attempts: args.attempts,
        ..AssemblerConfig::default()
    };
    let assembler = PuzzleAssembler::with_config(store, config);
    let mut rng = args
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    if let Some(pm) = progress.as_deref_mut() {
        pm.initialize(args.count);
    }

    let mut puzzles = Vec::with_capacity(args.count);
    let mut outcome = Ok(());
    for _ in 0..args.count {
        match assembler.generate_report(args.size, &mut rng) {
            Ok(report) => {
                if let Some(pm) = progress.as_deref_mut() {
                    pm.complete_puzzle(report.attempts);
                }
                puzzles.push(report.puzzle);
            }
            Err(error) => {
                outcome = Err(error);
                break;
            }
        }
    }

    if let Some(pm) = progress {
        pm.finish();
    }

    outcome.map(|()| puzzles)
}
