//! Suggestion form arguments

use clap::Args;
use storefront::products::DraftField;

/// Fields of a product suggestion.
#[derive(Debug, Args)]
pub(crate) struct SuggestArgs {
    /// Product name
    #[arg(long)]
    pub(crate) name: String,

    /// Product description
    #[arg(long)]
    pub(crate) description: String,

    /// Price in dollars
    #[arg(long)]
    pub(crate) price: String,

    /// Category (for example Electronics, Books, Clothing)
    #[arg(long)]
    pub(crate) category: String,

    /// Absolute image URL
    #[arg(long)]
    pub(crate) image_url: String,
}

impl SuggestArgs {
    /// Form values in field order.
    pub(crate) fn fields(&self) -> [(DraftField, &str); 5] {
        [
            (DraftField::Name, self.name.as_str()),
            (DraftField::Description, self.description.as_str()),
            (DraftField::Price, self.price.as_str()),
            (DraftField::Category, self.category.as_str()),
            (DraftField::ImageUrl, self.image_url.as_str()),
        ]
    }
}
