//! Progress display for a solver run

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

use crate::io::configuration::PROGRESS_BAR_WIDTH;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} cells {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks collapsed cells and restarts while a grid is being solved
///
/// The bar length follows the solved cell count, so it stays correct when
/// symmetry or resizing changes the active grid between runs.
pub struct SolveProgress {
    bar: ProgressBar,
}

impl SolveProgress {
    /// Create a bar for a grid of `cell_count` solved cells
    pub fn new(label: &str, cell_count: usize) -> Self {
        let bar = ProgressBar::new(cell_count as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_prefix(label.to_string());
        Self { bar }
    }

    /// Hidden bar for quiet runs and tests
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Report the current collapsed count and restart total
    pub fn update(&self, collapsed: usize, restarts: usize) {
        self.bar.set_position(collapsed as u64);
        self.bar.set_message(format!("({restarts} restarts)"));
    }

    /// Last reported collapsed count
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Close the bar with a final status line
    pub fn finish(&self, completed: bool) {
        let status = if completed { "done" } else { "stopped" };
        self.bar.finish_with_message(status);
    }
}
