//! Progress reporting utilities using indicatif.
//!
//! [`ProgressCallback`] is the hook the organizer calls while it works through
//! a folder. [`Progress`] implements it with a terminal progress bar; the CLI
//! installs it for text output when progress display is enabled.

use std::sync::Mutex;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Progress callback for an organize run.
///
/// Implement this trait to receive progress updates as files are processed.
pub trait ProgressCallback: Send + Sync {
    /// Called once before the first file is processed.
    ///
    /// # Arguments
    ///
    /// * `phase` - Name of the phase (e.g., "organize")
    /// * `total` - Number of files that will be processed
    fn on_phase_start(&self, phase: &str, total: usize);

    /// Called after each file has been processed.
    ///
    /// # Arguments
    ///
    /// * `current` - Current item number (1-based)
    /// * `path` - Path being processed
    fn on_progress(&self, current: usize, path: &str);

    /// Called when the phase completes.
    fn on_phase_end(&self, phase: &str);
}

/// Progress reporter using an indicatif bar on stderr.
///
/// Whether to show progress at all is decided by the caller; a `Progress`
/// always draws once a phase starts.
#[derive(Default)]
pub struct Progress {
    bar: Mutex<Option<ProgressBar>>,
}

impl Progress {
    /// Create a new progress reporter.
    ///
    /// # Examples
    ///
    /// ```
    /// use dupesort::progress::Progress;
    ///
    /// let progress = Progress::new();
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn style() -> ProgressStyle {
        ProgressStyle::with_template(
            "[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█>-")
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock() {
            if let Some(ref pb) = *guard {
                f(pb);
            }
        }
    }
}

impl ProgressCallback for Progress {
    fn on_phase_start(&self, phase: &str, total: usize) {
        let pb = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stderr());
        pb.set_style(Self::style());
        pb.set_message(phase.to_string());
        if let Ok(mut guard) = self.bar.lock() {
            *guard = Some(pb);
        }
    }

    fn on_progress(&self, current: usize, path: &str) {
        let display_msg = truncate_path(path, 30);
        self.with_bar(|pb| {
            pb.set_position(current as u64);
            pb.set_message(display_msg);
        });
    }

    fn on_phase_end(&self, phase: &str) {
        let taken = self.bar.lock().ok().and_then(|mut guard| guard.take());
        if let Some(pb) = taken {
            pb.finish_and_clear();
            log::debug!("Phase '{}' finished", phase);
        }
    }
}

/// Truncate a path for display in the progress bar.
fn truncate_path(path: &str, max_len: usize) -> String {
    if path.chars().count() <= max_len {
        return path.to_string();
    }

    let file_name = std::path::Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let name_len = file_name.chars().count();
    if name_len >= max_len {
        let tail: String = file_name.chars().skip(name_len + 3 - max_len).collect();
        return format!("...{}", tail);
    }

    format!(".../{}", file_name)
}
