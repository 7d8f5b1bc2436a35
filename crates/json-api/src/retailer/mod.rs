//! Retailer

mod handlers;

pub(crate) use handlers::*;
