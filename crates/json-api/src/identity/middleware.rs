//! Identity middleware.

use std::sync::Arc;

use salvo::prelude::*;
use souk_app::{UserId, domain::catalog::models::StoreId};

use crate::{
    extensions::*,
    identity::{STORE_ID_HEADER, USER_ID_HEADER},
    state::State,
};

enum HeaderId {
    /// No header; the configured default applies.
    Missing,

    /// A positive id.
    Id(i64),

    /// Present but not a positive integer.
    Malformed,
}

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => state,
        Err(_error) => {
            res.render(StatusError::internal_server_error());

            return;
        }
    };

    let user = match header_id(req, USER_ID_HEADER) {
        HeaderId::Id(id) => UserId::from_i64(id),
        HeaderId::Missing => state.identity.user,
        HeaderId::Malformed => {
            res.render(StatusError::bad_request().brief("Invalid x-user-id header"));

            return;
        }
    };

    let store = match header_id(req, STORE_ID_HEADER) {
        HeaderId::Id(id) => StoreId::from_i64(id),
        HeaderId::Missing => state.identity.store,
        HeaderId::Malformed => {
            res.render(StatusError::bad_request().brief("Invalid x-store-id header"));

            return;
        }
    };

    depot.insert_user_id(user);
    depot.insert_store_id(store);

    ctrl.call_next(req, depot, res).await;
}

fn header_id(req: &Request, name: &str) -> HeaderId {
    let Some(value) = req.headers().get(name) else {
        return HeaderId::Missing;
    };

    value
        .to_str()
        .ok()
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .filter(|id| *id > 0)
        .map_or(HeaderId::Malformed, HeaderId::Id)
}
