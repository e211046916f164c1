use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;
use std::time::Duration;

/// Spinner redraw interval while a request is being confirmed
const SPINNER_TICK: Duration = Duration::from_millis(100);

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with the rendered screen
/// on stdout. Step progress is shown as an indicatif spinner; warnings
/// are coloured with owo-colors.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        if let Some(pb) = pb_option.as_ref() {
            pb.clone()
        } else {
            let pb = ProgressBar::new(total as u64);
            let style = ProgressStyle::default_spinner()
                .template("   {spinner:.green} [{pos}/{len}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner());
            pb.set_style(style);
            pb.enable_steady_tick(SPINNER_TICK);
            *pb_option = Some(pb.clone());
            pb
        }
    }

    /// Clears and forgets the current spinner, if any
    fn finish_progress(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.finish_progress();
        eprintln!("{}", message.yellow());
    }

    fn report_completion(&self, message: &str) {
        self.finish_progress();
        eprintln!();
        eprintln!("{}", message.green());
    }
}
