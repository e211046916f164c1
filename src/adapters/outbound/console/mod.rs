/// Console adapters writing progress and warnings to stderr
mod progress_reporter;

pub use progress_reporter::StderrProgressReporter;
