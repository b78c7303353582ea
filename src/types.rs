use std::ops::Index;

use nalgebra::Vector2;

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Model coefficients
// ---------------------------------------------------------------------------

/// Coefficients of the Lotka-Volterra equations.
///
///   dx/dt =  a·x − b·x·y
///   dy/dt = −c·y + d·x·y
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParameters {
    pub a: f64, // prey growth rate
    pub b: f64, // predation rate
    pub c: f64, // predator death rate
    pub d: f64, // predator growth from predation
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self { a: 1.2, b: 0.6, c: 0.8, d: 0.3 }
    }
}

/// Initial prey (x0) and predator (y0) populations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialState {
    pub x0: f64,
    pub y0: f64,
}

impl Default for InitialState {
    fn default() -> Self {
        Self { x0: 2.0, y0: 1.0 }
    }
}

// ---------------------------------------------------------------------------
// Time grid
// ---------------------------------------------------------------------------

/// Fixed-step sample times `t0, t0 + h, t0 + 2h, ...`.
///
/// The grid spans the half-open range `[t0, t_end + h)`, so the last sample
/// lands on or just past `t_end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    t0: f64,
    t_end: f64,
    h: f64,
}

impl TimeGrid {
    /// Build a grid, rejecting a non-positive step or an inverted range.
    pub fn new(t0: f64, t_end: f64, h: f64) -> Result<Self, ConfigError> {
        if !(t0.is_finite() && t_end.is_finite() && h.is_finite()) {
            return Err(ConfigError::InvalidConfiguration(format!(
                "time grid values must be finite (t0={t0}, t_end={t_end}, h={h})"
            )));
        }
        if h <= 0.0 {
            return Err(ConfigError::InvalidConfiguration(format!(
                "step size must be positive, got h={h}"
            )));
        }
        if t_end < t0 {
            return Err(ConfigError::InvalidConfiguration(format!(
                "end time {t_end} is before start time {t0}"
            )));
        }
        let steps = ((t_end + h - t0) / h).ceil();
        if !steps.is_finite() || steps >= usize::MAX as f64 {
            return Err(ConfigError::InvalidConfiguration(format!(
                "step size h={h} is too small for the range [{t0}, {t_end}]"
            )));
        }
        Ok(Self { t0, t_end, h })
    }

    pub fn t0(&self) -> f64 {
        self.t0
    }

    pub fn t_end(&self) -> f64 {
        self.t_end
    }

    pub fn h(&self) -> f64 {
        self.h
    }

    /// Number of samples: `ceil((t_end + h - t0) / h)`.
    pub fn len(&self) -> usize {
        ((self.t_end + self.h - self.t0) / self.h).ceil().max(0.0) as usize
    }

    /// Never true for a validated grid.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Time of sample `i`.
    pub fn time(&self, i: usize) -> f64 {
        self.t0 + i as f64 * self.h
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |i| self.time(i))
    }
}

impl Default for TimeGrid {
    fn default() -> Self {
        Self { t0: 0.0, t_end: 20.0, h: 0.1 }
    }
}

// ---------------------------------------------------------------------------
// Population state
// ---------------------------------------------------------------------------

/// Populations at a single grid time. `pop = [prey, predator]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub time: f64,
    pub pop: Vector2<f64>,
}

impl State {
    pub fn new(time: f64, prey: f64, predator: f64) -> Self {
        Self { time, pop: Vector2::new(prey, predator) }
    }

    pub fn prey(&self) -> f64 {
        self.pop.x
    }

    pub fn predator(&self) -> f64 {
        self.pop.y
    }

    /// Forward Euler update of the populations: `pop + h·dpop`.
    /// Time is left to the caller, which reads it off the grid.
    pub fn apply(&self, d: &Deriv, h: f64) -> Vector2<f64> {
        self.pop + d.dpop * h
    }
}

/// Time derivative of the populations, `[dx/dt, dy/dt]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deriv {
    pub dpop: Vector2<f64>,
}

// ---------------------------------------------------------------------------
// Trajectory
// ---------------------------------------------------------------------------

/// Ordered samples produced by one simulation run. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    samples: Vec<State>,
}

impl Trajectory {
    pub(crate) fn from_samples(samples: Vec<State>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, State> {
        self.samples.iter()
    }

    pub fn as_slice(&self) -> &[State] {
        &self.samples
    }

    pub fn first(&self) -> Option<&State> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&State> {
        self.samples.last()
    }

    /// Up to `n` earliest samples.
    pub fn head(&self, n: usize) -> &[State] {
        &self.samples[..n.min(self.samples.len())]
    }

    /// Up to `n` latest samples, in time order.
    pub fn tail(&self, n: usize) -> &[State] {
        &self.samples[self.samples.len().saturating_sub(n)..]
    }
}

impl Index<usize> for Trajectory {
    type Output = State;

    fn index(&self, i: usize) -> &State {
        &self.samples[i]
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a State;
    type IntoIter = std::slice::Iter<'a, State>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
