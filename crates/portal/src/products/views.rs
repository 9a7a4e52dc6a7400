//! Product views

use rust_decimal::Decimal;
use salvo::prelude::StatusError;

use storefront::products::{Product, format_price};

use crate::extensions::*;

/// All six product fields, one per line.
pub(crate) fn details(product: &Product) -> String {
    format!(
        "ID: {}\nName: {}\nPrice: {}\nDescription: {}\nInventory: {}\nAvailable: {}",
        product.id,
        product.name,
        format_price(product.price),
        product.description.as_deref().unwrap_or("-"),
        product.inventory,
        if product.available { "Yes" } else { "No" },
    )
}

/// Convert a price typed into the page into a decimal amount.
pub(crate) fn parse_price(price: f64) -> Result<Decimal, StatusError> {
    Decimal::try_from(price).or_400("price must be a finite number")
}

#[cfg(test)]
pub(crate) fn make_product(id: &str, name: &str, price: Decimal) -> Product {
    Product {
        id: id.into(),
        name: name.to_string(),
        price,
        description: None,
        inventory: 3,
        available: true,
    }
}
