use nalgebra::Vector2;

use crate::dynamics;
use crate::types::{InitialState, ModelParameters, State, TimeGrid, Trajectory};

// ---------------------------------------------------------------------------
// Explicit (forward) Euler integrator
// ---------------------------------------------------------------------------

/// Single Euler step: populations after advancing `state` by `h`.
pub fn euler_step(state: &State, params: &ModelParameters, h: f64) -> Vector2<f64> {
    let d = dynamics::derivatives(state, params);
    state.apply(&d, h)
}

/// Upper bound on up-front allocation; longer runs grow the buffer as they go.
const MAX_PREALLOC: usize = 1_000_000;

// ---------------------------------------------------------------------------
// Full simulation loop
// ---------------------------------------------------------------------------

/// Integrate the model over every point of `grid`.
///
/// Sample `i` holds the populations *before* step `i` is applied, so the
/// first sample is exactly `(t0, x0, y0)`. Divergent or negative populations
/// are left as computed.
pub fn simulate(params: &ModelParameters, initial: &InitialState, grid: &TimeGrid) -> Trajectory {
    let mut trajectory = Vec::with_capacity(grid.len().min(MAX_PREALLOC));
    let mut pop = Vector2::new(initial.x0, initial.y0);

    for t in grid.times() {
        let state = State { time: t, pop };
        trajectory.push(state);
        pop = euler_step(&state, params, grid.h());
    }

    tracing::debug!(
        samples = trajectory.len(),
        t0 = grid.t0(),
        t_end = grid.t_end(),
        h = grid.h(),
        "simulation complete"
    );

    Trajectory::from_samples(trajectory)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_run() -> Trajectory {
        simulate(
            &ModelParameters::default(),
            &InitialState::default(),
            &TimeGrid::default(),
        )
    }

    #[test]
    fn sample_count_matches_half_open_range() {
        // [0, 20.1) stepped by 0.1: 201 points, 202 if rounding lands above.
        let traj = reference_run();
        assert!(
            (201..=202).contains(&traj.len()),
            "unexpected sample count {}",
            traj.len()
        );
        assert_eq!(traj.len(), TimeGrid::default().len());
    }

    #[test]
    fn first_sample_is_initial_state() {
        let traj = reference_run();
        let first = traj.first().unwrap();
        assert_eq!(first.time, 0.0);
        assert_eq!(first.prey(), 2.0);
        assert_eq!(first.predator(), 1.0);
    }

    #[test]
    fn first_sample_uses_nonzero_start_time() {
        let initial = InitialState { x0: 5.0, y0: 0.75 };
        let grid = TimeGrid::new(2.5, 4.0, 0.5).unwrap();
        let traj = simulate(&ModelParameters::default(), &initial, &grid);

        let first = traj.first().unwrap();
        assert_eq!(first.time, 2.5);
        assert_eq!(first.prey(), 5.0);
        assert_eq!(first.predator(), 0.75);
        // [2.5, 4.5) in steps of 0.5 -> 2.5, 3.0, 3.5, 4.0
        assert_eq!(traj.len(), 4);
        assert_eq!(traj.last().unwrap().time, 4.0);
    }

    #[test]
    fn fine_grid_beyond_preallocation_runs_to_completion() {
        let params = ModelParameters { a: 0.0, b: 0.0, c: 0.0, d: 0.0 };
        let grid = TimeGrid::new(0.0, 1.0, 1e-6).unwrap();
        let traj = simulate(&params, &InitialState::default(), &grid);
        assert!(traj.len() > MAX_PREALLOC);
        assert_eq!(traj.len(), grid.len());
    }

    #[test]
    fn second_sample_matches_hand_computed_step() {
        let traj = reference_run();
        assert_relative_eq!(traj[1].time, 0.1, epsilon = 1e-12);
        assert_relative_eq!(traj[1].prey(), 2.12, epsilon = 1e-12);
        assert_relative_eq!(traj[1].predator(), 1.04, epsilon = 1e-12);
    }

    #[test]
    fn zero_coefficients_keep_populations_constant() {
        let params = ModelParameters { a: 0.0, b: 0.0, c: 0.0, d: 0.0 };
        let initial = InitialState { x0: 7.5, y0: 3.25 };
        let grid = TimeGrid::new(0.0, 5.0, 0.5).unwrap();
        let traj = simulate(&params, &initial, &grid);

        for pair in traj.as_slice().windows(2) {
            assert!(pair[1].time > pair[0].time);
        }
        for s in &traj {
            assert_eq!(s.prey(), 7.5);
            assert_eq!(s.predator(), 3.25);
        }
    }

    #[test]
    fn consecutive_samples_follow_euler_update() {
        let p = ModelParameters::default();
        let grid = TimeGrid::default();
        let h = grid.h();
        let traj = simulate(&p, &InitialState::default(), &grid);

        for pair in traj.as_slice().windows(2) {
            let (x, y) = (pair[0].prey(), pair[0].predator());
            let x_next = x + h * (p.a * x - p.b * x * y);
            let y_next = y + h * (-p.c * y + p.d * x * y);
            assert_relative_eq!(pair[1].prey(), x_next, max_relative = 1e-12);
            assert_relative_eq!(pair[1].predator(), y_next, max_relative = 1e-12);
        }
    }

    #[test]
    fn sample_times_come_from_grid() {
        let grid = TimeGrid::default();
        let traj = simulate(&ModelParameters::default(), &InitialState::default(), &grid);
        for (i, s) in traj.iter().enumerate() {
            assert_eq!(s.time, grid.time(i));
        }
    }

    #[test]
    fn runs_are_bit_identical() {
        assert_eq!(reference_run(), reference_run());
    }

    #[test]
    fn large_step_instability_is_not_suppressed() {
        // With h = 1 the prey overshoots below zero within a few steps;
        // the integrator must report it rather than clamp.
        let params = ModelParameters { a: 1.2, b: 0.6, c: 0.8, d: 0.3 };
        let initial = InitialState { x0: 2.0, y0: 5.0 };
        let grid = TimeGrid::new(0.0, 3.0, 1.0).unwrap();
        let traj = simulate(&params, &initial, &grid);
        // x1 = 2 + (2.4 − 6.0) = −1.6
        assert_relative_eq!(traj[1].prey(), -1.6, epsilon = 1e-12);
        assert!(traj.iter().any(|s| s.prey() < 0.0));
    }
}
