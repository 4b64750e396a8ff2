//! Configuration sources, one module per layer.

pub(crate) mod environment;
pub(crate) mod global_file;
pub(crate) mod workspace_file;
