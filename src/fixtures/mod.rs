//! Fixtures
//!
//! YAML product catalogs and an in-memory [`Catalog`] that pages through
//! them exactly the way the gateway's `productsCursor` resolver does: items
//! ordered by id, cursors are the base64-encoded id of an item, and one
//! extra row is fetched to decide whether another page follows.

use std::{fs, path::PathBuf};

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use thiserror::Error;

use crate::{
    fixtures::products::ProductsFixture,
    pagination::{Connection, Cursor, Edge, PageInfo, PageRequest},
    products::{Product, ProductId},
};

pub mod products;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Two fixture products share an id
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// Cursor is not a base64-encoded product id
    #[error("invalid cursor: {0}")]
    InvalidCursor(String),
}

/// Product catalog backed by fixture data.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from products; they are kept sorted by id.
    ///
    /// # Errors
    ///
    /// Returns an error if two products share an id.
    pub fn new(mut products: Vec<Product>) -> Result<Self, FixtureError> {
        products.sort_by(|a, b| a.id.cmp(&b.id));

        if let Some([duplicate, _]) = products
            .windows(2)
            .find(|pair| matches!(pair, [a, b] if a.id == b.id))
        {
            return Err(FixtureError::DuplicateProduct(duplicate.id.to_string()));
        }

        Ok(Self { products })
    }

    /// Load `products/{name}.yml` from the crate's `fixtures` directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::load(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures"), name)
    }

    /// Load `products/{name}.yml` below `base_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(base_path: impl Into<PathBuf>, name: &str) -> Result<Self, FixtureError> {
        let file_path = base_path
            .into()
            .join("products")
            .join(format!("{name}.yml"));

        let contents = fs::read_to_string(&file_path)?;
        let fixture: ProductsFixture = serde_norway::from_str(&contents)?;

        let products = fixture
            .products
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(products)
    }

    /// All products in id order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Resolve one `productsCursor(after, first)` page.
    ///
    /// # Errors
    ///
    /// Returns an error if `after` is not a cursor issued by [`Catalog::cursor_for`].
    pub fn products_cursor(
        &self,
        request: &PageRequest,
    ) -> Result<Connection<Product>, FixtureError> {
        let after = request.after.as_ref().map(decode_cursor).transpose()?;

        let first = usize::try_from(request.first.get()).unwrap_or(usize::MAX);

        let mut window: Vec<&Product> = self
            .products
            .iter()
            .filter(|product| {
                after
                    .as_deref()
                    .is_none_or(|after| product.id.as_str() > after)
            })
            .take(first.saturating_add(1))
            .collect();

        let has_next_page = window.len() > first;

        window.truncate(first);

        let edges: Vec<Edge<Product>> = window
            .into_iter()
            .map(|product| Edge {
                cursor: Self::cursor_for(&product.id),
                node: product.clone(),
            })
            .collect();

        let end_cursor = edges.last().map(|edge| edge.cursor.clone());

        Ok(Connection {
            edges,
            page_info: PageInfo {
                has_next_page,
                end_cursor,
            },
            total_count: i64::try_from(self.products.len()).ok(),
        })
    }

    /// The cursor pointing just after `id`.
    pub fn cursor_for(id: &ProductId) -> Cursor {
        Cursor::new(BASE64.encode(id.as_str()))
    }
}

fn decode_cursor(cursor: &Cursor) -> Result<String, FixtureError> {
    let bytes = BASE64
        .decode(cursor.as_str())
        .map_err(|source| FixtureError::InvalidCursor(source.to_string()))?;

    String::from_utf8(bytes).map_err(|source| FixtureError::InvalidCursor(source.to_string()))
}
