//! Process-level helpers shared by the binary and the library.

pub mod logging;

pub use logging::{
    config_from_env, init_default, init_from_env, init_logging, parse_level, LoggingConfig,
};
