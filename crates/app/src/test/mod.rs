//! Shared support for service-level tests.

mod context;

pub(crate) use context::TestContext;
