//! Products

pub mod cards;
pub mod drafts;
pub mod models;
pub mod records;

pub use cards::ProductCard;
pub use drafts::{DraftError, DraftField, DraftViolation, ProductDraft, ValidDraft};
pub use models::{Product, ProductId};
