//! App Router

use salvo::Router;

use crate::{orders, products, users};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("users")
                .get(users::index::handler)
                .post(users::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(users::get::handler)
                        .put(users::update::handler)
                        .delete(users::delete::handler)
                        .push(Router::with_path("orders").get(orders::for_user::handler)),
                ),
        )
        .push(
            Router::with_path("products")
                .post(products::create::handler)
                .push(Router::with_path("load").post(products::load::handler))
                .push(Router::with_path("next").post(products::next::handler))
                .push(Router::with_path("select").post(products::select::handler))
                .push(Router::with_path("view").post(products::view::handler))
                .push(
                    Router::with_path("{id}")
                        .put(products::update::handler)
                        .delete(products::delete::handler)
                        .push(Router::with_path("restock").post(products::restock::handler))
                        .push(
                            Router::with_path("availability")
                                .put(products::availability::handler),
                        ),
                ),
        )
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .post(orders::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(orders::get::handler)
                        .put(orders::update::handler)
                        .delete(orders::delete::handler)
                        .push(Router::with_path("status").put(orders::status::handler))
                        .push(Router::with_path("quantity").put(orders::quantity::handler)),
                ),
        )
}
