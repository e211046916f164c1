/// ProgressReporter port for user-facing progress and warnings
///
/// Messages go to a side channel (e.g. stderr) so they never mix with
/// the rendered screen.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through a fixed number of steps
    ///
    /// # Arguments
    /// * `current` - Current step, starting at 1
    /// * `total` - Number of steps
    /// * `message` - Optional description of the current step
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}

impl<T: ProgressReporter + ?Sized> ProgressReporter for &T {
    fn report(&self, message: &str) {
        (**self).report(message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        (**self).report_progress(current, total, message);
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message);
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message);
    }
}
