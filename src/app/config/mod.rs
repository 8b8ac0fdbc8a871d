//! Environment-backed configuration loading.
//!
//! Pure schema parsing and variant folding live in `domain::config`.

mod environment;
mod load_config;

pub use environment::{BOOTSTRAP_ID_VAR, CHANNEL_NAME_VAR, ConfigEnvironment, HOME_VAR};
pub use load_config::{DEFAULT_CONFIG_FILE, load_config};
