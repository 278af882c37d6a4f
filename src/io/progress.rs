//! Batch progress display

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Layouts: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over a batch of layouts
///
/// A hidden manager keeps the same counters but draws nothing.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Visible bar for `layout_count` layouts
    pub fn new(layout_count: usize) -> Self {
        let bar = ProgressBar::new(layout_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar }
    }

    /// Bar that never draws, for quiet runs
    pub fn hidden(layout_count: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(layout_count as u64);
        Self { bar }
    }

    /// Show which seed is being generated
    pub fn start_layout(&self, seed: u64) {
        self.bar.set_message(format!("seed {seed}"));
    }

    /// Count one finished layout
    pub fn complete_layout(&self) {
        self.bar.inc(1);
    }

    /// Layouts finished so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
