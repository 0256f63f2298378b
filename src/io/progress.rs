//! Attempt progress display for background solves

use crate::io::configuration::{MAX_ATTEMPTS, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Attempts: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar counting attempts against the worst case
///
/// The bar is measured against [`MAX_ATTEMPTS`], the number of attempts an
/// unsolvable board takes, so a solvable board finishes early.
pub struct AttemptProgress {
    bar: ProgressBar,
}

impl Default for AttemptProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl AttemptProgress {
    /// Create a visible progress bar
    pub fn new() -> Self {
        let bar = ProgressBar::new(MAX_ATTEMPTS);
        bar.set_style(PROGRESS_STYLE.clone());
        Self { bar }
    }

    /// Create a progress tracker that draws nothing
    pub fn hidden() -> Self {
        let bar = ProgressBar::with_draw_target(Some(MAX_ATTEMPTS), ProgressDrawTarget::hidden());
        Self { bar }
    }

    /// Report the attempts started so far
    pub fn update(&self, attempts: u64) {
        self.bar.set_position(attempts.min(MAX_ATTEMPTS));
    }

    /// Attempts currently shown
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Stop the bar with a final message
    pub fn finish(&self, solved: bool) {
        let message = if solved { "solved" } else { "exhausted" };
        self.bar.finish_with_message(message);
    }
}
