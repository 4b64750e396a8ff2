//! Environment overlay: `CMDDOC__<KEY>` variables, `__` between nested keys.
//!
//! `CMDDOC__WATCH__DEBOUNCE_MS=50` sets `watch.debounce_ms`. The single
//! underscore `CMDDOC_LOG*` variables belong to the logging setup and are not
//! part of this layer.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, Map};

const ENV_PREFIX: &str = "CMDDOC";
const KEY_SEPARATOR: &str = "__";

/// Environment source reading `vars` when given, the process environment otherwise.
fn overlay(vars: Option<Map<String, String>>) -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator(KEY_SEPARATOR)
        .try_parsing(true)
        .source(vars)
}

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(overlay(None)))
}
