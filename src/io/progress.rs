//! Progress display for batch puzzle generation

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Puzzles: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many puzzles of a batch are done and how many attempts they took
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    total_attempts: usize,
    completed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bar yet
    pub const fn new() -> Self {
        Self {
            bar: None,
            total_attempts: 0,
            completed: 0,
        }
    }

    /// Create the batch bar for `puzzle_count` puzzles
    pub fn initialize(&mut self, puzzle_count: usize) {
        let bar = ProgressBar::new(puzzle_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(100));
        self.bar = Some(bar);
        self.total_attempts = 0;
        self.completed = 0;
    }

    /// Record a finished puzzle and the attempts it needed
    pub fn complete_puzzle(&mut self, attempts: usize) {
        self.completed += 1;
        self.total_attempts += attempts;
        if let Some(ref bar) = self.bar {
            bar.inc(1);
            bar.set_message(format!("{:.1} attempts/puzzle", self.average_attempts()));
        }
    }

    /// Mean attempts per finished puzzle, zero before the first one
    pub fn average_attempts(&self) -> f64 {
        if self.completed == 0 {
            0.0
        } else {
            self.total_attempts as f64 / self.completed as f64
        }
    }

    /// Number of puzzles recorded so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
