//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use storefront_app::{
    context::AppContext,
    domain::{orders::MockOrdersService, products::MockProductsService, users::MockUsersService},
};

use crate::{config::listing::ListingConfig, state::State};

pub(crate) const TEST_LISTING: ListingConfig = ListingConfig {
    default_page_size: 10,
    max_page_size: 50,
};

pub(crate) const TEST_GATEWAY_URL: &str = "http://gateway.test/query";

/// Mocks for every service; any call without an expectation fails the test.
#[derive(Default)]
pub(crate) struct Mocks {
    pub(crate) users: MockUsersService,
    pub(crate) products: MockProductsService,
    pub(crate) orders: MockOrdersService,
}

impl Mocks {
    pub(crate) fn with_users(users: MockUsersService) -> Self {
        Self {
            users,
            ..Self::default()
        }
    }

    pub(crate) fn with_products(products: MockProductsService) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }

    pub(crate) fn with_orders(orders: MockOrdersService) -> Self {
        Self {
            orders,
            ..Self::default()
        }
    }

    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(
            AppContext {
                gateway_url: TEST_GATEWAY_URL.to_string(),
                users: Arc::new(self.users),
                products: Arc::new(self.products),
                orders: Arc::new(self.orders),
            },
            TEST_LISTING,
        )
    }
}

pub(crate) fn portal_service(mocks: Mocks, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(mocks.into_state())).push(route))
}

pub(crate) fn users_service(users: MockUsersService, route: Router) -> Service {
    portal_service(Mocks::with_users(users), route)
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    portal_service(Mocks::with_products(products), route)
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    portal_service(Mocks::with_orders(orders), route)
}
