use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a simulation run from its configuration.
///
/// The integrator itself never fails: diverging or negative populations are
/// a property of the Euler scheme at large step sizes, not an error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The values are inconsistent (non-positive step, inverted time range,
    /// non-finite input).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The configuration file could not be read.
    #[error("failed to read config file `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid TOML or has unknown fields.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
