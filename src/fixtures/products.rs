//! Product Fixtures

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    products::{Product, ProductId},
};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Catalog entries
    pub products: Vec<ProductFixture>,
}

/// Product fixture from YAML
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product id
    pub id: String,

    /// Product name
    pub name: String,

    /// Price as a decimal string, e.g. `"12.50"`
    pub price: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Units in stock
    pub inventory: i64,

    /// Availability; defaults to "in stock"
    #[serde(default)]
    pub available: Option<bool>,
}

impl TryFrom<ProductFixture> for Product {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let price = Decimal::from_str(fixture.price.trim())
            .map_err(|_parse_error| FixtureError::InvalidPrice(fixture.price.clone()))?;

        Ok(Product {
            id: ProductId::new(fixture.id),
            name: fixture.name,
            price,
            description: fixture.description,
            inventory: fixture.inventory,
            available: fixture.available.unwrap_or(fixture.inventory > 0),
        })
    }
}
