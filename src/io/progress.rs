//! Progress display for batch layout runs

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static TARGET_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.red/magenta}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Targets: [{bar:40.red/magenta}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Shows placement progress for the current target and, for batches of more
/// than one directory, a bar counting finished targets
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    target_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            target_bar: None,
        }
    }

    /// Announce the number of targets in the batch
    pub fn initialize(&mut self, target_count: usize) {
        if target_count > 1 {
            let batch_bar = ProgressBar::new(target_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }
    }

    /// Replace the target bar with one for `path`, expecting `requested` points
    pub fn start_target(&mut self, path: &Path, requested: usize) {
        if let Some(previous) = self.target_bar.take() {
            previous.finish_and_clear();
            self.multi_progress.remove(&previous);
        }

        let name = path
            .file_name()
            .unwrap_or(path.as_os_str())
            .to_string_lossy()
            .to_string();
        let bar = ProgressBar::new(requested as u64);
        bar.set_style(TARGET_STYLE.clone());
        bar.set_prefix(name);
        self.target_bar = Some(self.multi_progress.add(bar));
    }

    /// Report the number of points selected so far
    pub fn update_selected(&self, selected: usize) {
        if let Some(ref bar) = self.target_bar {
            bar.set_position(selected as u64);
        }
    }

    /// Mark the current target as done with `placed` points
    pub fn complete_target(&self, placed: usize) {
        if let Some(ref bar) = self.target_bar {
            bar.set_position(placed as u64);
            bar.finish_with_message("✓");
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All targets processed");
        }
        let _ = self.multi_progress.clear();
    }
}
