//! Batch fetch progress display.

use indicatif::{ProgressBar, ProgressStyle};

/// The remaining-count message, singular at exactly one request.
pub fn waiting_message(remaining: usize) -> String {
    let noun = if remaining == 1 { "request" } else { "requests" };
    format!("Waiting for {} {} to finish...", remaining, noun)
}

/// A progress bar over one batch of menu requests.
pub struct BatchProgress {
    bar: ProgressBar,
    total: usize,
}

impl BatchProgress {
    /// Create a visible bar for `total` requests.
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{bar:30.magenta} {msg}")
                .unwrap(),
        );
        bar.set_message("working...");
        Self { bar, total }
    }

    /// Create a bar that doesn't show (for quiet mode).
    pub fn hidden(total: usize) -> Self {
        Self {
            bar: ProgressBar::hidden(),
            total,
        }
    }

    /// Record that `remaining` requests are still unsettled.
    pub fn update(&self, remaining: usize) {
        self.bar
            .set_position(self.total.saturating_sub(remaining) as u64);
        if remaining > 0 {
            self.bar.set_message(waiting_message(remaining));
        }
    }

    /// Remove the bar from the terminal.
    pub fn finish_and_clear(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_plural_above_one() {
        assert_eq!(waiting_message(3), "Waiting for 3 requests to finish...");
    }

    #[test]
    fn message_is_singular_at_one() {
        assert_eq!(waiting_message(1), "Waiting for 1 request to finish...");
    }

    #[test]
    fn hidden_bar_accepts_updates() {
        let progress = BatchProgress::hidden(3);
        progress.update(2);
        progress.update(0);
        progress.finish_and_clear();
    }

    #[test]
    fn update_never_underflows() {
        let progress = BatchProgress::hidden(1);
        progress.update(5);
        progress.finish_and_clear();
    }
}
