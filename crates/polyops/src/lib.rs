//! # polyops
//!
//! Single-variable polynomial arithmetic over primitive numeric
//! coefficients.
//!
//! ## Features
//!
//! - **Dense storage**: coefficients in ascending power order with a fixed
//!   declared degree
//! - **Arithmetic operators**: `+`, `-`, `*`, and scalar scaling with the
//!   scalar on either side
//! - **Checked indexing**: 1-based coefficient access counted down from the
//!   highest power, with typed errors
//! - **Rendering**: human-readable `Display` output such as `2x^2 - x + 3`
//!
//! ## Quick Start
//!
//! ```rust
//! use polyops::prelude::*;
//!
//! let p = Polynomial::from_coeffs(1, &[2.0, 1.0])?; // x + 2
//! let q = Polynomial::from_coeffs(1, &[1.0, 3.0])?; // 3x + 1
//! assert_eq!((&p + &q).to_string(), "4x + 3");
//! # Ok::<(), PolyError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use polyops_coeff as coeff;
pub use polyops_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use polyops_coeff::Coefficient;
    pub use polyops_poly::{PolyError, Polynomial};
}
