//! Row-level progress bars for large generation runs.

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar over `total` rows, or a hidden no-op bar when disabled.
pub(crate) fn row_bar(total: u64, label: &'static str, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::with_template("{msg:>12} [{bar:40.cyan/blue}] {human_pos}/{human_len} ({percent}%)")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-"),
    );
    bar.set_message(label);
    bar
}
