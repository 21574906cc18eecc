//! Spinner-backed progress reporting and the interactive stall prompt.

use crate::aggregate::paginator::STALL_AFTER_ATTEMPTS;
use crate::aggregate::sink::{StallHandler, StatusSink};
use crate::output::console::print_error;
use async_trait::async_trait;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};

/// Status sink backed by a terminal spinner.
pub struct ConsoleStatusSink {
    spinner: ProgressBar,
}

impl ConsoleStatusSink {
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        Self { spinner }
    }

    /// A sink that renders nothing, for quiet runs.
    pub fn quiet() -> Self {
        Self {
            spinner: ProgressBar::hidden(),
        }
    }

    /// Clear the spinner once the run is over.
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }

    pub(crate) fn bar(&self) -> ProgressBar {
        self.spinner.clone()
    }
}

impl StatusSink for ConsoleStatusSink {
    fn status(&self, message: &str, is_error: bool) {
        if is_error {
            self.spinner.suspend(|| print_error(message));
        } else {
            self.spinner.set_message(message.to_string());
        }
    }
}

/// Asks on the terminal whether a stalled run should keep going.
pub struct ConsoleStallHandler {
    spinner: ProgressBar,
    default_answer: bool,
}

impl ConsoleStallHandler {
    pub fn new(sink: &ConsoleStatusSink) -> Self {
        Self {
            spinner: sink.bar(),
            default_answer: false,
        }
    }
}

#[async_trait]
impl StallHandler for ConsoleStallHandler {
    async fn continue_after_stall(&self) -> bool {
        self.spinner.suspend(|| {
            Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(format!(
                    "No media found after {} attempts. Keep trying?",
                    STALL_AFTER_ATTEMPTS
                ))
                .default(self.default_answer)
                .interact()
                .unwrap_or(self.default_answer)
        })
    }
}
