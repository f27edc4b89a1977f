use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

// Three dots filling up and draining, like a chat "typing" bubble.
const TYPING_FRAMES: &[&str] = &["·  ", "·· ", "···", " ··", "  ·", "   ", ""];

/// The typing indicator, drawn on stderr.
///
/// Clears itself when dropped, so it cannot outlive the reply it precedes.
pub struct Spinner {
    progress_bar: ProgressBar,
}

impl Spinner {
    /// Starts a typing indicator after `label`.
    #[allow(clippy::unwrap_used)]
    pub fn typing(label: &str) -> Self {
        let progress_bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        // unwrap is safe: template string is a compile-time constant
        progress_bar.set_style(
            ProgressStyle::default_spinner()
                .tick_strings(TYPING_FRAMES)
                .template("{msg} {spinner}")
                .unwrap(),
        );
        progress_bar.set_message(label.to_string());
        progress_bar.enable_steady_tick(Duration::from_millis(200));

        Self { progress_bar }
    }

    #[cfg(test)]
    pub(super) const fn progress_bar(&self) -> &ProgressBar {
        &self.progress_bar
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.progress_bar.finish_and_clear();
    }
}
