//! App Router

use std::sync::Arc;

use salvo::{Router, affix_state::inject, catch_panic::CatchPanic, trailing_slash::remove_slash};

use crate::{
    cart, categories, healthcheck, identity, observability, orders, products, retailer, services,
    state::State, stores,
};

/// Full route tree with state, request logging and panic capture.
pub(crate) fn root_router(state: Arc<State>) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(state))
        .hoop(observability::request_logging)
        .push(Router::with_path("api").push(api_router()))
}

/// Routes under `/api`. Catalog reads are public; cart, order and retailer
/// routes act as the identity resolved from request headers.
fn api_router() -> Router {
    Router::new()
        .push(Router::with_path("health").get(healthcheck::handler))
        .push(Router::with_path("categories").get(categories::handler))
        .push(
            Router::with_path("stores")
                .get(stores::index::handler)
                .push(Router::with_path("nearby").get(stores::nearby::handler))
                .push(Router::with_path("{store}").get(stores::get::handler)),
        )
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("hot-deals").get(products::hot_deals::handler))
                .push(
                    Router::with_path("{product}")
                        .get(products::get::handler)
                        .push(Router::with_path("negotiate").post(products::negotiate::handler)),
                ),
        )
        .push(
            Router::with_path("services")
                .get(services::index::handler)
                .push(Router::with_path("{service}").get(services::get::handler)),
        )
        .push(
            Router::new()
                .hoop(identity::middleware::handler)
                .push(
                    Router::with_path("cart").get(cart::get::handler).push(
                        Router::with_path("items")
                            .post(cart::add_item::handler)
                            .push(
                                Router::with_path("{item}")
                                    .put(cart::update_item::handler)
                                    .delete(cart::remove_item::handler),
                            ),
                    ),
                )
                .push(
                    Router::with_path("orders")
                        .get(orders::index::handler)
                        .post(orders::create::handler)
                        .push(Router::with_path("{order}").get(orders::get::handler)),
                )
                .push(
                    Router::with_path("retailer")
                        .push(Router::with_path("products").get(retailer::products::handler))
                        .push(
                            Router::with_path("orders")
                                .get(retailer::orders::handler)
                                .push(Router::with_path("{order}").push(
                                    Router::with_path("status")
                                        .put(retailer::update_status::handler),
                                )),
                        ),
                ),
        )
}
