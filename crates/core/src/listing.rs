//! Product Listing
//!
//! The filtered and sorted projection of a fetched product set. A product is
//! kept when the (case-insensitive) search term occurs in its name or
//! category; a blank term keeps everything. Names and categories are ordered
//! by Unicode collation, so accented letters sort with their base letter.
//! Sorting is stable, so products with equal keys stay in fetch order.

use std::{
    cmp::Ordering,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
    sync::LazyLock,
};

use icu_collator::{
    Collator, CollatorBorrowed, CollatorPreferences,
    options::{CollatorOptions, Strength},
};
use thiserror::Error;
use tracing::warn;

use crate::products::Product;

/// Sort order for a product listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Name, A to Z
    #[default]
    Name,

    /// Price, low to high
    PriceLow,

    /// Price, high to low
    PriceHigh,

    /// Category, A to Z
    Category,
}

/// Sort key string did not match any [`SortKey`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key `{0}`, expected one of: name, price-low, price-high, category")]
pub struct UnknownSortKey(String);

impl SortKey {
    /// Every sort key, in menu order.
    pub const ALL: [SortKey; 4] = [
        SortKey::Name,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Category,
    ];

    /// Parameter value, e.g. `price-low`.
    pub const fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Category => "category",
        }
    }

    /// Menu label.
    pub const fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Sort by Name A-Z",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Category => "Category",
        }
    }

    /// Lenient parse for UI-provided values; anything unknown sorts by name.
    pub fn from_param(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    /// Compare two products under this key.
    pub fn compare(self, left: &Product, right: &Product) -> Ordering {
        match self {
            SortKey::Name => TEXT_ORDER.compare(&left.name, &right.name),
            SortKey::PriceLow => left.price.cmp(&right.price),
            SortKey::PriceHigh => right.price.cmp(&left.price),
            SortKey::Category => TEXT_ORDER.compare(&left.category, &right.category),
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == value)
            .ok_or_else(|| UnknownSortKey(value.to_string()))
    }
}

static TEXT_ORDER: LazyLock<TextOrder> = LazyLock::new(TextOrder::new);

/// Root-locale collation at secondary strength: accents are significant only
/// after base letters, case is ignored.
struct TextOrder {
    collator: Option<CollatorBorrowed<'static>>,
}

impl TextOrder {
    fn new() -> Self {
        let mut options = CollatorOptions::default();

        options.strength = Some(Strength::Secondary);

        let collator = match Collator::try_new(CollatorPreferences::default(), options) {
            Ok(collator) => Some(collator),
            Err(error) => {
                warn!(%error, "collation data unavailable, sorting text caselessly");

                None
            }
        };

        Self { collator }
    }

    fn compare(&self, left: &str, right: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(left, right),
            None => caseless_cmp(left, right),
        }
    }
}

/// Caseless comparison; strings differing only by case compare equal.
fn caseless_cmp(left: &str, right: &str) -> Ordering {
    left.chars()
        .flat_map(char::to_lowercase)
        .cmp(right.chars().flat_map(char::to_lowercase))
}

fn matches_needle(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
}

/// Indices into `products` of the projection for `term` and `sort`.
fn project_indices(products: &[Product], term: &str, sort: SortKey) -> Vec<usize> {
    let needle = (!term.trim().is_empty()).then(|| term.to_lowercase());

    let mut matched: Vec<(usize, &Product)> = products
        .iter()
        .enumerate()
        .filter(|(_, product)| {
            needle
                .as_deref()
                .is_none_or(|needle| matches_needle(product, needle))
        })
        .collect();

    matched.sort_by(|(_, left), (_, right)| sort.compare(left, right));

    matched.into_iter().map(|(index, _)| index).collect()
}

/// Filter and sort `products` without modifying them.
pub fn project<'a>(products: &'a [Product], term: &str, sort: SortKey) -> Vec<&'a Product> {
    project_indices(products, term, sort)
        .into_iter()
        .filter_map(|index| products.get(index))
        .collect()
}

/// List view-model: the fetched product set plus its current projection.
///
/// The projection is recomputed whenever the term, the sort key or the
/// product set changes. The product set itself keeps fetch order.
#[derive(Debug, Clone, Default)]
pub struct ProductListing {
    products: Vec<Product>,
    term: String,
    sort: SortKey,
    projection: Vec<usize>,
}

impl ProductListing {
    /// Listing over `products` with a blank term, sorted by name.
    pub fn new(products: Vec<Product>) -> Self {
        Self::with_view(products, String::new(), SortKey::default())
    }

    /// Listing over `products` with the given term and sort key.
    pub fn with_view(products: Vec<Product>, term: impl Into<String>, sort: SortKey) -> Self {
        let mut listing = Self {
            products,
            term: term.into(),
            sort,
            projection: Vec::new(),
        };

        listing.recompute();

        listing
    }

    /// The fetched product set, in fetch order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Current search term.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Current sort key.
    pub fn sort(&self) -> SortKey {
        self.sort
    }

    /// Replace the search term.
    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
        self.recompute();
    }

    /// Replace the sort key.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.recompute();
    }

    /// Replace the product set.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.recompute();
    }

    /// Products to display, in display order.
    pub fn projection(&self) -> impl Iterator<Item = &Product> + '_ {
        self.projection
            .iter()
            .filter_map(|&index| self.products.get(index))
    }

    /// Number of products in the projection.
    pub fn len(&self) -> usize {
        self.projection.len()
    }

    /// Whether the projection is empty ("no products found").
    pub fn is_empty(&self) -> bool {
        self.projection.is_empty()
    }

    fn recompute(&mut self) {
        self.projection = project_indices(&self.products, &self.term, self.sort);
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::products::ProductId;

    use super::*;

    fn product(id: &str, name: &str, price: i64, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: String::new(),
            price: Decimal::from(price),
            category: category.to_string(),
            image_url: String::new(),
        }
    }

    fn names<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<&'a str> {
        products
            .into_iter()
            .map(|product| product.name.as_str())
            .collect()
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("1", "Zeta", 10, "A"),
            product("2", "Alpha", 5, "B"),
        ]
    }

    #[test]
    fn sort_by_name_is_alphabetical() {
        let products = catalog();

        assert_eq!(names(project(&products, "", SortKey::Name)), ["Alpha", "Zeta"]);
    }

    #[test]
    fn sort_by_price_low_is_ascending() {
        let products = catalog();

        let projected = project(&products, "", SortKey::PriceLow);

        assert_eq!(names(projected.iter().copied()), ["Alpha", "Zeta"]);
        assert_eq!(projected.first().map(|p| p.price), Some(Decimal::from(5)));
    }

    #[test]
    fn blank_term_keeps_every_product() {
        let products = catalog();

        for term in ["", "  ", "\t"] {
            assert_eq!(project(&products, term, SortKey::Name).len(), products.len());
        }
    }

    #[test]
    fn unmatched_term_yields_empty_projection() {
        let products = catalog();

        assert!(project(&products, "nothing", SortKey::Name).is_empty());
    }

    #[test]
    fn term_matches_name_or_category_case_insensitively() {
        let products = vec![
            product("1", "Desk Lamp", 30, "Home & Garden"),
            product("2", "Novel", 12, "Books"),
            product("3", "Garden Hose", 20, "Outdoor"),
        ];

        assert_eq!(
            names(project(&products, "GARDEN", SortKey::Name)),
            ["Desk Lamp", "Garden Hose"]
        );
        assert_eq!(names(project(&products, "book", SortKey::Name)), ["Novel"]);
    }

    #[test]
    fn price_low_and_high_are_reverses_without_ties() {
        let products = vec![
            product("1", "C", 30, "X"),
            product("2", "A", 10, "X"),
            product("3", "D", 40, "X"),
            product("4", "B", 20, "X"),
        ];

        let mut low = names(project(&products, "", SortKey::PriceLow));
        let high = names(project(&products, "", SortKey::PriceHigh));

        low.reverse();

        assert_eq!(low, high);
    }

    #[test]
    fn equal_keys_keep_fetch_order() {
        let products = vec![
            product("1", "First", 10, "Same"),
            product("2", "Second", 10, "Same"),
            product("3", "Cheap", 1, "Other"),
            product("4", "Third", 10, "Same"),
        ];

        let ids = |sort| -> Vec<String> {
            project(&products, "", sort)
                .into_iter()
                .map(|product| product.id.to_string())
                .collect()
        };

        assert_eq!(ids(SortKey::PriceLow), ["3", "1", "2", "4"]);
        assert_eq!(ids(SortKey::PriceHigh), ["1", "2", "4", "3"]);
        assert_eq!(ids(SortKey::Category), ["3", "1", "2", "4"]);
    }

    #[test]
    fn name_sort_ignores_case() {
        let products = vec![
            product("1", "banana", 1, "X"),
            product("2", "Apple", 1, "X"),
            product("3", "cherry", 1, "X"),
        ];

        assert_eq!(
            names(project(&products, "", SortKey::Name)),
            ["Apple", "banana", "cherry"]
        );
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        let products = vec![
            product("1", "Zucchini", 1, "X"),
            product("2", "Éclair", 1, "X"),
            product("3", "apple", 1, "X"),
        ];

        assert_eq!(
            names(project(&products, "", SortKey::Name)),
            ["apple", "Éclair", "Zucchini"]
        );
    }

    #[test]
    fn accented_categories_sort_with_their_base_letter() {
        let products = vec![
            product("1", "Kazoo", 1, "Zoo"),
            product("2", "Radio", 1, "Électronique"),
            product("3", "Easel", 1, "art"),
        ];

        assert_eq!(
            names(project(&products, "", SortKey::Category)),
            ["Easel", "Radio", "Kazoo"]
        );
    }

    #[test]
    fn names_differing_only_by_case_keep_fetch_order() {
        let products = vec![
            product("1", "apple", 1, "X"),
            product("2", "APPLE", 1, "X"),
            product("3", "Apple", 1, "X"),
        ];

        let ids: Vec<&str> = project(&products, "", SortKey::Name)
            .into_iter()
            .map(|product| product.id.as_str())
            .collect();

        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn empty_catalog_projects_to_empty() {
        for sort in SortKey::ALL {
            let listing = ProductListing::with_view(Vec::new(), "lamp", sort);

            assert!(listing.is_empty());
        }
    }

    #[test]
    fn listing_recomputes_on_every_change() {
        let mut listing = ProductListing::new(catalog());

        assert_eq!(names(listing.projection()), ["Alpha", "Zeta"]);

        listing.set_sort(SortKey::PriceHigh);
        assert_eq!(names(listing.projection()), ["Zeta", "Alpha"]);

        listing.set_term("alp");
        assert_eq!(names(listing.projection()), ["Alpha"]);

        listing.set_products(vec![product("3", "Alpine Boots", 80, "Shoes")]);
        assert_eq!(names(listing.projection()), ["Alpine Boots"]);
        assert_eq!(listing.len(), 1);
    }

    #[test]
    fn listing_never_reorders_base_set() {
        let mut listing = ProductListing::new(catalog());

        listing.set_sort(SortKey::PriceLow);

        assert_eq!(names(listing.products()), ["Zeta", "Alpha"]);
    }

    #[test]
    fn sort_keys_round_trip_through_params() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
        }

        assert_eq!(SortKey::from_param("bogus"), SortKey::Name);
        assert!("bogus".parse::<SortKey>().is_err());
    }
}
