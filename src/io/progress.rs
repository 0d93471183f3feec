//! Seam removal progress display

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks seams removed from the current image
///
/// The bar is created lazily by [`ProgressManager::start`] and shows the grid
/// dimensions after every removal.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    removed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no active bar
    pub const fn new() -> Self {
        Self {
            bar: None,
            removed: 0,
        }
    }

    /// Begin tracking `total_seams` removals for the file at `path`
    pub fn start(&mut self, path: &Path, total_seams: usize) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let bar = ProgressBar::new(total_seams as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_prefix(display_name);
        self.bar = Some(bar);
        self.removed = 0;
    }

    /// Record one removed seam and the dimensions it left behind
    pub fn seam_removed(&mut self, width: usize, height: usize) {
        self.removed += 1;
        if let Some(ref bar) = self.bar {
            bar.set_position(self.removed as u64);
            bar.set_message(format!("width = {width}, height = {height}"));
        }
    }

    /// Number of removals recorded since the last `start`
    pub const fn removed(&self) -> usize {
        self.removed
    }

    /// Close the bar, leaving the final state on screen
    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish();
        }
    }
}
