//! Source composition for configuration loading.

pub(crate) mod merge_policy;
pub(crate) mod service;
