//! price list loading

pub(crate) mod backoff;
pub(crate) mod client;
