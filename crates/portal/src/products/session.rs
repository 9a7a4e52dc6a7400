//! Session payloads exchanged with the portal page.

use std::str::FromStr;

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use storefront::{
    pagination::Cursor,
    products::{ProductRow, format_price},
    session::SessionState,
};

/// A listed product as displayed: `ID | Name | Price`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductRowView {
    /// Product identifier
    pub id: String,

    /// Product name
    pub name: String,

    /// Price with two decimal places
    pub price: String,
}

impl From<ProductRow> for ProductRowView {
    fn from(row: ProductRow) -> Self {
        let [id, name, price] = row.columns();

        Self { id, name, price }
    }
}

impl TryFrom<ProductRowView> for ProductRow {
    type Error = rust_decimal::Error;

    fn try_from(row: ProductRowView) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id.into(),
            name: row.name,
            price: Decimal::from_str(&row.price)?,
        })
    }
}

/// Browsing session carried by the page between requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct SessionPayload {
    /// End cursor of the current page; absent at the start of the list
    #[serde(default)]
    pub cursor: Option<String>,

    /// Rows of the current page
    #[serde(default)]
    pub rows: Vec<ProductRowView>,

    /// Whether a further page exists
    #[serde(default)]
    pub has_next_page: bool,

    /// Most recently selected product
    #[serde(default)]
    pub selected_id: Option<String>,
}

impl From<SessionState> for SessionPayload {
    fn from(session: SessionState) -> Self {
        Self {
            cursor: session.cursor.map(|cursor| cursor.as_str().to_owned()),
            rows: session.rows.into_iter().map(Into::into).collect(),
            has_next_page: session.has_next_page,
            selected_id: session.selected_id.map(|id| id.into_string()),
        }
    }
}

impl TryFrom<SessionPayload> for SessionState {
    type Error = rust_decimal::Error;

    fn try_from(payload: SessionPayload) -> Result<Self, Self::Error> {
        Ok(Self {
            cursor: payload.cursor.map(Cursor::new),
            rows: payload
                .rows
                .into_iter()
                .map(ProductRow::try_from)
                .collect::<Result<_, _>>()?,
            has_next_page: payload.has_next_page,
            selected_id: payload.selected_id.map(Into::into),
        })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;
    use testresult::TestResult;

    use storefront::products::ProductId;

    use super::*;

    #[test]
    fn session_survives_the_page() -> TestResult {
        let session = SessionState {
            cursor: Some(Cursor::new("cC0wMDI=")),
            rows: vec![ProductRow {
                id: ProductId::new("p-002"),
                name: "Linen Tea Towel".to_string(),
                price: dec!(8.00),
            }],
            has_next_page: true,
            selected_id: Some(ProductId::new("p-002")),
        };

        let payload = SessionPayload::from(session.clone());

        assert_eq!(payload.rows.first().map(|r| r.price.as_str()), Some("8.00"));
        assert_eq!(SessionState::try_from(payload)?, session);

        Ok(())
    }

    #[test]
    fn tampered_price_is_rejected() {
        let payload = SessionPayload {
            rows: vec![ProductRowView {
                id: "p-1".into(),
                name: "Mug".into(),
                price: "twelve".into(),
            }],
            ..SessionPayload::default()
        };

        assert!(SessionState::try_from(payload).is_err());
    }
}
