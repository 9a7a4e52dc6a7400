//! Products

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::TypedId;

/// Product Id
pub type ProductId = TypedId<Product>;

/// Product, as resolved by the gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Gateway-assigned identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Unit price
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,

    /// Units in stock
    pub inventory: i64,

    /// Whether the product can be ordered
    pub available: bool,
}

/// Listing projection of a product: `(id, name, price)`.
///
/// The id is always the first column; row selection relies on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRow {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Unit price
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl ProductRow {
    /// Render the row as the `ID | Name | Price` table columns.
    #[must_use]
    pub fn columns(&self) -> [String; 3] {
        [
            self.id.to_string(),
            self.name.clone(),
            format_price(self.price),
        ]
    }
}

impl From<Product> for ProductRow {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
        }
    }
}

/// New product payload (`CreateProductInput`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    /// Product name
    pub name: String,

    /// Unit price
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Initial stock level
    pub inventory: i64,
}

/// Partial product update (`UpdateProductInput`); absent fields are left as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    /// New name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New unit price
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Decimal>,

    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New stock level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory: Option<i64>,
}

/// Restock request (`RestockProductInput`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restock {
    /// Product to restock
    pub id: ProductId,

    /// Units to add
    pub quantity: i64,
}

/// Availability toggle (`SetProductAvailabilityInput`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityChange {
    /// Product to toggle
    pub id: ProductId,

    /// New availability
    pub available: bool,
}

/// Format a price with two decimal places.
#[must_use]
pub fn format_price(price: Decimal) -> String {
    format!("{price:.2}")
}
