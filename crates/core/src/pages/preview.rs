//! Debounced image preview for the suggestion form.

use std::time::Duration;

use tokio::time::{Instant, sleep_until};

/// Quiet period before an edited image URL is previewed.
pub const PREVIEW_DEBOUNCE: Duration = Duration::from_millis(500);

/// Image preview that follows the image URL field once typing pauses.
#[derive(Debug, Clone)]
pub struct ImagePreview {
    delay: Duration,
    pending: Option<(String, Instant)>,
    shown: Option<String>,
}

impl Default for ImagePreview {
    fn default() -> Self {
        Self::new(PREVIEW_DEBOUNCE)
    }
}

impl ImagePreview {
    /// Preview that waits `delay` after the last edit.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            shown: None,
        }
    }

    /// Record an edit of the image URL field. Clearing the field clears the
    /// preview immediately.
    pub fn input(&mut self, url: &str) {
        let url = url.trim();

        if url.is_empty() {
            self.pending = None;
            self.shown = None;

            return;
        }

        self.pending = Some((url.to_string(), Instant::now() + self.delay));
    }

    /// When the pending edit becomes visible, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    /// Promote the pending edit once its quiet period has passed and return
    /// the URL currently previewed.
    pub fn poll(&mut self) -> Option<&str> {
        let due = self
            .deadline()
            .is_some_and(|deadline| Instant::now() >= deadline);

        if due {
            self.shown = self.pending.take().map(|(url, _)| url);
        }

        self.shown.as_deref()
    }

    /// Wait out the pending quiet period, then [`poll`](Self::poll).
    pub async fn settle(&mut self) -> Option<&str> {
        if let Some(deadline) = self.deadline() {
            sleep_until(deadline).await;
        }

        self.poll()
    }

    /// URL currently previewed, without promoting pending edits.
    pub fn shown(&self) -> Option<&str> {
        self.shown.as_deref()
    }
}
