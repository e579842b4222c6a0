//! Progress indicators with CI fallback

use super::context::UiContext;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// A task spinner with CI fallback
pub struct TaskSpinner {
    spinner: Option<cliclack::ProgressBar>,
    interactive: bool,
}

impl TaskSpinner {
    /// Create a new spinner (shows immediately in interactive mode)
    pub fn new(ctx: &UiContext) -> Self {
        Self {
            spinner: None,
            interactive: ctx.use_fancy_output(),
        }
    }

    /// Start the spinner with a message
    pub fn start(&mut self, message: &str) {
        if self.interactive {
            let spinner = cliclack::spinner();
            spinner.start(message);
            self.spinner = Some(spinner);
        } else {
            // Plain output for CI
            println!("{} {}", style("...").dim(), message);
        }
    }

    /// Stop with success message
    pub fn stop(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.stop(message);
        } else if self.interactive {
            // Fallback if spinner wasn't started
            println!("{} {}", style("✓").green(), message);
        } else {
            println!("{} {}", style("[OK]").green(), message);
        }
    }

    /// Stop with error message
    pub fn stop_error(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.error(message);
        } else if self.interactive {
            println!("{} {}", style("✗").red(), message);
        } else {
            println!("{} {}", style("[FAIL]").red(), message);
        }
    }
}

/// Percentage bar for the deletion passes.
///
/// Renders a ten-segment indicatif bar in interactive mode; in CI mode
/// prints a line at each ten-percent step instead.
pub struct DeleteProgress {
    bar: Option<ProgressBar>,
    label: String,
    last_decile: u64,
}

impl DeleteProgress {
    /// Create a progress indicator for one deletion pass
    pub fn new(ctx: &UiContext, label: &str) -> Self {
        let bar = if ctx.use_fancy_output() {
            let bar = ProgressBar::new(0);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("  {prefix} {bar:10.cyan/dim} {percent:>3}% ({pos}/{len})")
                    .unwrap()
                    .progress_chars("■■ "),
            );
            bar.set_prefix(label.to_string());
            Some(bar)
        } else {
            None
        };
        Self {
            bar,
            label: label.to_string(),
            last_decile: 0,
        }
    }

    /// Record that `done` of `total` files have been processed
    pub fn update(&mut self, done: usize, total: usize) {
        if let Some(ref bar) = self.bar {
            bar.set_length(total as u64);
            bar.set_position(done as u64);
            return;
        }

        // Plain mode: one line per ten-percent step, nothing per file
        let percent = (done as u64 * 100) / (total.max(1) as u64);
        let decile = percent / 10;
        if decile > self.last_decile || (done == total && self.last_decile < 10) {
            self.last_decile = decile;
            println!("  {} {}%", self.label, percent);
        }
    }

    /// Finish and clear the progress bar
    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
