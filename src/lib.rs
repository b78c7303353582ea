pub mod config;
pub mod dynamics;
pub mod error;
pub mod integrator;
pub mod io;
pub mod types;

pub use config::SimConfig;
pub use error::ConfigError;
pub use integrator::{euler_step, simulate};
pub use types::{InitialState, ModelParameters, State, TimeGrid, Trajectory};
