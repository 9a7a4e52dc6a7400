//! Forward paging over a static catalog.
//!
//! Drives [`SessionState`] against the fixture catalog the same way the
//! portal drives it against the gateway: request from the session, resolve
//! the connection, fold the page back into the session.

use std::collections::HashSet;

use testresult::TestResult;

use storefront::{
    fixtures::Catalog,
    pagination::{MAX_PAGE_SIZE, Page, PageRequest, PageSize},
    products::{ProductId, ProductRow},
    session::SessionState,
};

fn size(value: i64) -> PageSize {
    PageSize::clamped(value, MAX_PAGE_SIZE)
}

fn fetch(catalog: &Catalog, request: &PageRequest) -> TestResult<Page<ProductRow>> {
    Ok(Page::from(catalog.products_cursor(request)?).map(ProductRow::from))
}

fn ids(rows: &[ProductRow]) -> Vec<&str> {
    rows.iter().map(|row| row.id.as_str()).collect()
}

#[test]
fn five_item_catalog_pages_by_two() -> TestResult {
    let catalog = Catalog::from_set("five")?;
    let mut session = SessionState::default();

    let request = session.restart(size(2));
    session.apply_page(fetch(&catalog, &request)?);

    assert_eq!(ids(&session.rows), vec!["p-001", "p-002"]);
    assert!(session.cursor.is_some(), "first page should yield a cursor");
    assert!(session.has_next_page);

    let first_cursor = session.cursor.clone();

    let request = session.next_request(size(2));
    session.apply_page(fetch(&catalog, &request)?);

    assert_eq!(ids(&session.rows), vec!["p-003", "p-004"]);
    assert_ne!(session.cursor, first_cursor, "cursor should advance");
    assert!(session.has_next_page);

    let request = session.next_request(size(2));
    session.apply_page(fetch(&catalog, &request)?);

    assert_eq!(ids(&session.rows), vec!["p-005"]);
    assert!(!session.has_next_page, "last page should report no next page");

    Ok(())
}

#[test]
fn pages_never_exceed_requested_size_and_are_disjoint() -> TestResult {
    let catalog = Catalog::from_set("five")?;

    for page_size in 1..=i64::from(MAX_PAGE_SIZE) {
        let mut session = SessionState::default();
        let mut seen: HashSet<ProductId> = HashSet::new();

        let mut request = session.restart(size(page_size));

        loop {
            let page = fetch(&catalog, &request)?;
            let limit = usize::try_from(page_size)?;

            assert!(page.items.len() <= limit, "page larger than {page_size}");

            for row in &page.items {
                assert!(seen.insert(row.id.clone()), "{} returned twice", row.id);
            }

            let more = page.has_next_page;
            session.apply_page(page);

            if !more {
                break;
            }

            request = session.next_request(size(page_size));
        }

        assert_eq!(seen.len(), catalog.len(), "every product seen exactly once");
    }

    Ok(())
}

#[test]
fn restarting_returns_the_same_first_page() -> TestResult {
    let catalog = Catalog::from_set("five")?;
    let mut session = SessionState::default();

    let request = session.restart(size(3));
    session.apply_page(fetch(&catalog, &request)?);
    let first = session.rows.clone();

    let request = session.next_request(size(3));
    session.apply_page(fetch(&catalog, &request)?);

    let request = session.restart(size(3));
    session.apply_page(fetch(&catalog, &request)?);

    assert_eq!(session.rows, first);

    Ok(())
}

#[test]
fn empty_catalog_yields_empty_page() -> TestResult {
    let catalog = Catalog::from_set("empty")?;
    let mut session = SessionState::default();

    let request = session.restart(size(10));
    session.apply_page(fetch(&catalog, &request)?);

    assert!(session.rows.is_empty());
    assert!(session.cursor.is_none());
    assert!(!session.has_next_page);

    Ok(())
}
