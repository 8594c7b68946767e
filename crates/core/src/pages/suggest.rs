//! Suggest Product Page

use std::{str::FromStr, time::Duration};

use rust_decimal::Decimal;
use tokio_util::sync::CancellationToken;

use crate::{
    catalog::{CatalogClient, CatalogError},
    pages::{PageFailure, preview::ImagePreview, until_cancelled},
    products::{DraftError, DraftField, ProductDraft},
    routes::{Navigation, Route},
};

/// Shown when the submission request fails.
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit suggestion. Please try again.";

/// Shown once the suggestion has been accepted.
pub const SUBMITTED_MESSAGE: &str = "Your product suggestion has been submitted.";

/// Wait before returning to the home page after a successful submission.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Form status.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionStatus {
    /// Not yet submitted.
    Editing,

    /// Rejected locally; nothing was sent.
    Rejected(DraftError),

    /// Sent, but the service did not accept it.
    Failed(PageFailure),

    /// Accepted by the service. Further submissions are ignored.
    Submitted,
}

/// Result of [`SuggestProductPage::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft failed validation and no request was made.
    Rejected,

    /// The request failed; the user may resubmit.
    Failed,

    /// Accepted; the page asks to navigate away.
    Submitted(Navigation),

    /// Already submitted; nothing was sent.
    Ignored,

    /// Cancelled before the request resolved; the status is unchanged.
    Cancelled,
}

/// Product suggestion form.
#[derive(Debug)]
pub struct SuggestProductPage {
    draft: ProductDraft,
    price_input: String,
    status: SubmissionStatus,
    preview: ImagePreview,
}

impl Default for SuggestProductPage {
    fn default() -> Self {
        Self::new()
    }
}

impl SuggestProductPage {
    /// Empty form.
    pub fn new() -> Self {
        Self::with_preview(ImagePreview::default())
    }

    /// Empty form using the given image preview.
    pub fn with_preview(preview: ImagePreview) -> Self {
        Self {
            draft: ProductDraft::default(),
            price_input: String::new(),
            status: SubmissionStatus::Editing,
            preview,
        }
    }

    /// Current draft.
    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    /// Price field as typed.
    pub fn price_input(&self) -> &str {
        &self.price_input
    }

    /// Current status.
    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Image preview for the image URL field.
    pub fn preview(&mut self) -> &mut ImagePreview {
        &mut self.preview
    }

    /// Inline error for `field` from the last rejected submission.
    pub fn field_error(&self, field: DraftField) -> Option<String> {
        match &self.status {
            SubmissionStatus::Rejected(error) => {
                error.violation_for(field).map(|violation| violation.to_string())
            }
            SubmissionStatus::Editing
            | SubmissionStatus::Failed(_)
            | SubmissionStatus::Submitted => None,
        }
    }

    /// Update a form field. A price that does not parse counts as zero.
    /// Edits after a successful submission are ignored.
    pub fn set_field(&mut self, field: DraftField, value: &str) {
        if self.status == SubmissionStatus::Submitted {
            return;
        }

        match field {
            DraftField::Name => value.clone_into(&mut self.draft.name),
            DraftField::Description => value.clone_into(&mut self.draft.description),
            DraftField::Category => value.clone_into(&mut self.draft.category),
            DraftField::ImageUrl => {
                value.clone_into(&mut self.draft.image_url);
                self.preview.input(value);
            }
            DraftField::Price => {
                value.clone_into(&mut self.price_input);
                self.draft.price = Decimal::from_str(value.trim()).unwrap_or(Decimal::ZERO);
            }
        }
    }

    /// Submit the draft. Invalid drafts are rejected without a request and a
    /// successful submission is never repeated.
    pub async fn submit(&mut self, client: &CatalogClient, cancel: &CancellationToken) -> SubmitOutcome {
        if self.status == SubmissionStatus::Submitted {
            return SubmitOutcome::Ignored;
        }

        let Some(result) = until_cancelled(cancel, client.suggest_product(self.draft.clone())).await
        else {
            return SubmitOutcome::Cancelled;
        };

        match result {
            Ok(()) => {
                self.status = SubmissionStatus::Submitted;

                SubmitOutcome::Submitted(Navigation::Delayed {
                    delay: REDIRECT_DELAY,
                    route: Route::Home,
                })
            }
            Err(CatalogError::Validation(error)) => {
                self.status = SubmissionStatus::Rejected(error);

                SubmitOutcome::Rejected
            }
            Err(error) => {
                self.status =
                    SubmissionStatus::Failed(PageFailure::from_error(&error, SUBMIT_FAILED_MESSAGE));

                SubmitOutcome::Failed
            }
        }
    }
}
