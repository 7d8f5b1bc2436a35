//! Error rendering.
//!
//! Every failed request answers with a `{"message": ...}` JSON body. Handlers
//! reject with a [`StatusError`] whose brief carries the message; the catcher
//! below rewrites whatever error reaches the response into the wire shape.

use salvo::{catcher::Catcher, http::ResBody, oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use souk_app::domain::{
    carts::CartsServiceError, catalog::CatalogServiceError, negotiation::NegotiationServiceError,
    orders::OrdersServiceError,
};

/// Wire shape of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorMessage {
    /// What went wrong.
    pub(crate) message: String,
}

/// Catcher rendering uncaught errors as `{"message": ...}`.
pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(render_json_error)
}

#[salvo::handler]
async fn render_json_error(res: &mut Response, ctrl: &mut FlowCtrl) {
    let Some(status) = res.status_code else {
        return;
    };

    if !status.is_client_error() && !status.is_server_error() {
        return;
    }

    let message = match &res.body {
        ResBody::Error(error) => error.brief.clone(),
        _ => status.canonical_reason().unwrap_or("Unknown error").to_string(),
    };

    res.render(Json(ErrorMessage { message }));
    ctrl.skip_rest();
}

pub(crate) fn catalog(error: CatalogServiceError) -> StatusError {
    match error {
        CatalogServiceError::StoreNotFound => StatusError::not_found().brief("Store not found"),
        CatalogServiceError::ProductNotFound => StatusError::not_found().brief("Product not found"),
        CatalogServiceError::ServiceNotFound => StatusError::not_found().brief("Service not found"),
    }
}

pub(crate) fn negotiation(error: NegotiationServiceError) -> StatusError {
    match error {
        NegotiationServiceError::InvalidOffer(_) => {
            StatusError::bad_request().brief("Valid offer price is required")
        }
        NegotiationServiceError::ProductNotFound => {
            StatusError::not_found().brief("Product not found")
        }
    }
}

pub(crate) fn carts(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::ItemNotFound => StatusError::not_found().brief("Cart item not found"),
        CartsServiceError::ProductNotFound => StatusError::not_found().brief("Product not found"),
        CartsServiceError::ServiceNotFound => StatusError::not_found().brief("Service not found"),
        CartsServiceError::InvalidQuantity => {
            StatusError::bad_request().brief("Valid quantity is required")
        }
    }
}

pub(crate) fn orders(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::MissingDeliveryAddress => {
            StatusError::bad_request().brief("Store ID and delivery address are required")
        }
        OrdersServiceError::StoreNotFound => StatusError::not_found().brief("Store not found"),
        OrdersServiceError::EmptyCart => StatusError::bad_request().brief("Cart is empty"),
        OrdersServiceError::InvalidTransition(source) => {
            StatusError::conflict().brief(source.to_string())
        }
    }
}
