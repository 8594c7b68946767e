//! Product Records
//!
//! Wire shapes exchanged with the catalog service. The service names the
//! identifier `_id`; [`ProductRecord`] is the only type aware of that, and
//! every record becomes a [`Product`] through its `From` impl before it
//! reaches application state.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::products::models::{Product, ProductId};

/// Product as returned by the catalog service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Service identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// Display name
    pub name: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Price in major currency units
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Category label
    #[serde(default)]
    pub category: String,

    /// Display image URL
    #[serde(default)]
    pub image_url: String,
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Product {
            id: ProductId::from(record.id),
            name: record.name,
            description: record.description,
            price: record.price,
            category: record.category,
            image_url: record.image_url,
        }
    }
}

/// Body of the list and search endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsEnvelope {
    /// Informational message, only sent by the list endpoint
    #[serde(default)]
    pub message: Option<String>,

    /// Matching products
    pub products: Vec<ProductRecord>,
}

impl ProductsEnvelope {
    /// Normalise every record into a [`Product`], keeping service order.
    pub fn into_products(self) -> Vec<Product> {
        self.products.into_iter().map(Product::from).collect()
    }
}

/// Body of the get-one endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductEnvelope {
    /// The product, absent or `null` when the service has no such product
    #[serde(default)]
    pub product: Option<ProductRecord>,
}

impl ProductEnvelope {
    /// Normalise the payload, `None` when the product is absent.
    pub fn into_product(self) -> Option<Product> {
        self.product.map(Product::from)
    }
}
