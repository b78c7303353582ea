use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{InitialState, ModelParameters, TimeGrid};

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

/// Everything needed for one run, in the flat layout of a config file:
///
/// ```toml
/// a = 1.2
/// b = 0.6
/// c = 0.8
/// d = 0.3
/// x0 = 2.0
/// y0 = 1.0
/// t0 = 0.0
/// t_end = 20.0
/// h = 0.1
/// ```
///
/// Missing fields take their default value; unknown fields are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub x0: f64,
    pub y0: f64,
    pub t0: f64,
    pub t_end: f64,
    pub h: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        let params = ModelParameters::default();
        let initial = InitialState::default();
        let grid = TimeGrid::default();
        Self {
            a: params.a,
            b: params.b,
            c: params.c,
            d: params.d,
            x0: initial.x0,
            y0: initial.y0,
            t0: grid.t0(),
            t_end: grid.t_end(),
            h: grid.h(),
        }
    }
}

impl SimConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Read a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Validate and break the flat config into the integrator inputs.
    pub fn split(&self) -> Result<(ModelParameters, InitialState, TimeGrid), ConfigError> {
        let coefficients = [self.a, self.b, self.c, self.d, self.x0, self.y0];
        if coefficients.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::InvalidConfiguration(
                "model coefficients and initial populations must be finite".into(),
            ));
        }

        let params = ModelParameters { a: self.a, b: self.b, c: self.c, d: self.d };
        let initial = InitialState { x0: self.x0, y0: self.y0 };
        let grid = TimeGrid::new(self.t0, self.t_end, self.h)?;
        Ok((params, initial, grid))
    }
}
