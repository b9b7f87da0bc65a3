//! Simulation module
//!
//! All aiming and projectile logic lives here:
//! - Single-threaded, one tick at a time
//! - Stable iteration order (by firing order / ID)
//! - No rendering or platform dependencies

pub mod intercept;
pub mod projectile;
pub mod state;
pub mod tick;

pub use intercept::{
    InterceptProblem, InterceptSolution, QuadraticRoots, predict_launch_velocity, select_root,
    solve_intercept, solve_quadratic,
};
pub use projectile::{Bounds, Projectile, Side};
pub use state::{FireButton, FireInput, SimEvent, SimState};
pub use tick::{TickInput, resolve_collisions, tick};
