//! Product Cards
//!
//! Display-ready projections of a [`Product`] shared by the list, search and
//! detail pages.

use rust_decimal::Decimal;
use rusty_money::{Money, iso};

use crate::products::models::{Product, ProductId};

/// Image shown on cards when a product has no image URL.
pub const CARD_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200?text=No+Image";

/// Image shown on the detail page when the product image is missing or fails to load.
pub const DETAIL_PLACEHOLDER_IMAGE: &str =
    "https://upload.wikimedia.org/wikipedia/commons/1/14/No_Image_Available.jpg";

/// Card copy used when a product has no description.
pub const FALLBACK_DESCRIPTION: &str =
    "A concise product description or key selling points go here. Keep it short and sweet for card views!";

/// Products priced above this are badged as trending.
const TRENDING_THRESHOLD: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

/// Compare-at price multiplier (1.1).
const COMPARE_AT_MARKUP: Decimal = Decimal::from_parts(11, 0, 0, false, 1);

/// Format a price as US dollars, e.g. `$1,200.00`.
pub fn format_price(price: Decimal) -> String {
    Money::from_decimal(price, iso::USD).to_string()
}

/// Card model for a single product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    /// Product identifier, used for the detail link
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// Category badge
    pub category: String,

    /// Description, or the fallback copy when empty
    pub description: String,

    /// Formatted price
    pub price: String,

    /// Formatted compare-at price
    pub compare_at_price: String,

    /// Whether to show the trending badge
    pub trending: bool,

    /// Image URL, or the card placeholder when empty
    pub image_url: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        let description = if product.description.trim().is_empty() {
            FALLBACK_DESCRIPTION.to_string()
        } else {
            product.description.clone()
        };

        ProductCard {
            id: product.id.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            description,
            price: format_price(product.price),
            compare_at_price: format_price(product.price * COMPARE_AT_MARKUP),
            trending: product.price > TRENDING_THRESHOLD,
            image_url: image_or(&product.image_url, CARD_PLACEHOLDER_IMAGE).to_string(),
        }
    }
}

/// `image_url` unless it is blank, otherwise `placeholder`.
pub fn image_or<'a>(image_url: &'a str, placeholder: &'a str) -> &'a str {
    if image_url.trim().is_empty() {
        placeholder
    } else {
        image_url
    }
}
