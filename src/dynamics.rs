use nalgebra::Vector2;

use crate::types::{Deriv, ModelParameters, State};

// ---------------------------------------------------------------------------
// Lotka-Volterra right-hand side
// ---------------------------------------------------------------------------

/// Compute population derivatives at the given state.
///
///   dx/dt =  a·x − b·x·y   (prey: growth minus predation)
///   dy/dt = −c·y + d·x·y   (predators: death plus growth from predation)
pub fn derivatives(state: &State, params: &ModelParameters) -> Deriv {
    let x = state.prey();
    let y = state.predator();

    Deriv {
        dpop: Vector2::new(
            params.a * x - params.b * x * y,
            -params.c * y + params.d * x * y,
        ),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
