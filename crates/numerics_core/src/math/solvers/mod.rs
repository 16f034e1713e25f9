//! Linear solvers for numerical computation.
//!
//! ## Available Solvers
//!
//! - [`solve_tridiagonal`] / [`TridiagonalSystem`]: O(m) direct elimination for
//!   tridiagonal systems (Thomas algorithm), used by the cubic spline to
//!   compute knot derivatives
//!
//! ## Configuration
//!
//! - [`SolverConfig`]: pivot tolerance below which a system is declared singular
//!
//! ## Example
//!
//! ```
//! use numerics_core::math::solvers::solve_tridiagonal;
//!
//! let lower: [f64; 2] = [1.0, 1.0];
//! let diag = [4.0, 4.0, 4.0];
//! let upper = [1.0, 1.0];
//! let x = solve_tridiagonal(&lower, &diag, &upper, &[6.0, 0.0, 6.0]).unwrap();
//!
//! assert!((x[1] + 6.0 / 7.0).abs() < 1e-12);
//! ```

mod config;
mod tridiagonal;

// Re-export public types at module level
pub use config::SolverConfig;
pub use tridiagonal::{solve_tridiagonal, solve_tridiagonal_with_config, TridiagonalSystem};
