//! Product Drafts
//!
//! A draft is a user-built product suggestion. Drafts are checked locally
//! before submission; only a [`ValidDraft`] can be handed to the catalog
//! transport.

use std::fmt::{Display, Formatter, Result as FmtResult};

use rust_decimal::Decimal;
use serde::Serialize;
use smallvec::SmallVec;
use thiserror::Error;
use url::Url;

/// Categories offered by the suggestion form. The catalog accepts any label.
pub const SUGGESTED_CATEGORIES: [&str; 5] =
    ["Electronics", "Books", "Clothing", "Home & Garden", "Sports"];

/// Candidate product pending submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    /// Display name
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Price in major currency units
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Category label
    pub category: String,

    /// Absolute display image URL
    pub image_url: String,
}

impl ProductDraft {
    /// Check every submission precondition.
    ///
    /// # Errors
    ///
    /// Returns every violated precondition when any required field is blank,
    /// the price is not strictly positive, or the image URL is not an
    /// absolute `http`/`https` URL.
    pub fn validate(self) -> Result<ValidDraft, DraftError> {
        let mut violations = SmallVec::new();

        for (field, value) in [
            (DraftField::Name, &self.name),
            (DraftField::Description, &self.description),
            (DraftField::Category, &self.category),
        ] {
            if value.trim().is_empty() {
                violations.push(DraftViolation::Missing(field));
            }
        }

        if self.price <= Decimal::ZERO {
            violations.push(DraftViolation::NonPositivePrice);
        }

        if self.image_url.trim().is_empty() {
            violations.push(DraftViolation::Missing(DraftField::ImageUrl));
        } else if !is_absolute_http_url(&self.image_url) {
            violations.push(DraftViolation::InvalidImageUrl);
        }

        if violations.is_empty() {
            Ok(ValidDraft(self))
        } else {
            Err(DraftError { violations })
        }
    }
}

fn is_absolute_http_url(value: &str) -> bool {
    Url::parse(value.trim())
        .is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
}

/// A draft that passed [`ProductDraft::validate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidDraft(ProductDraft);

impl ValidDraft {
    /// Borrow the validated draft.
    pub fn draft(&self) -> &ProductDraft {
        &self.0
    }

    /// Unwrap the validated draft.
    pub fn into_draft(self) -> ProductDraft {
        self.0
    }
}

/// Draft form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    /// Product name
    Name,

    /// Product description
    Description,

    /// Product price
    Price,

    /// Product category
    Category,

    /// Product image URL
    ImageUrl,
}

impl DraftField {
    /// Every field, in form order.
    pub const ALL: [DraftField; 5] = [
        DraftField::Name,
        DraftField::Description,
        DraftField::Price,
        DraftField::Category,
        DraftField::ImageUrl,
    ];

    /// Human-readable field label.
    pub const fn label(self) -> &'static str {
        match self {
            DraftField::Name => "Product Name",
            DraftField::Description => "Description",
            DraftField::Price => "Price",
            DraftField::Category => "Category",
            DraftField::ImageUrl => "Image URL",
        }
    }
}

impl Display for DraftField {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

/// A single failed precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftViolation {
    /// Required field is blank.
    Missing(DraftField),

    /// Price is zero or negative.
    NonPositivePrice,

    /// Image URL is not an absolute http(s) URL.
    InvalidImageUrl,
}

impl DraftViolation {
    /// Field the violation is reported against.
    pub const fn field(self) -> DraftField {
        match self {
            DraftViolation::Missing(field) => field,
            DraftViolation::NonPositivePrice => DraftField::Price,
            DraftViolation::InvalidImageUrl => DraftField::ImageUrl,
        }
    }
}

impl Display for DraftViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DraftViolation::Missing(field) => write!(f, "{field} is required"),
            DraftViolation::NonPositivePrice => f.write_str("Price must be greater than zero"),
            DraftViolation::InvalidImageUrl => {
                f.write_str("Image URL must be an absolute http(s) URL")
            }
        }
    }
}

/// Draft failed local validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fill in all fields correctly.")]
pub struct DraftError {
    violations: SmallVec<[DraftViolation; 5]>,
}

impl DraftError {
    /// Every violated precondition, in form order.
    pub fn violations(&self) -> &[DraftViolation] {
        &self.violations
    }

    /// First violation reported against `field`, for inline display.
    pub fn violation_for(&self, field: DraftField) -> Option<DraftViolation> {
        self.violations
            .iter()
            .copied()
            .find(|violation| violation.field() == field)
    }
}
