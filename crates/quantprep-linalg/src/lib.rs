//! 2x2 linear algebra for the QuantPrep linear-algebra lessons.
//!
//! Everything works on [`Vec2`] and the row-major [`Mat2`]:
//!
//! - [`matrix`]: vectors, matrices, products, and the standard plane
//!   transforms (rotation, scaling, shear, reflection, projection)
//! - [`decompose`]: solving `Ax = b`, eigenvalues and eigenvectors, and the
//!   singular value decomposition
//!
//! Near-singular cases are decided with [`EPSILON`].
//!
//! # Examples
//!
//! ```
//! use quantprep_linalg::{Mat2, Vec2, decompose::solve};
//!
//! // x + 2y = 5, 3x - y = 1
//! let a = Mat2::new(1.0, 2.0, 3.0, -1.0);
//! let x = solve(a, Vec2::new(5.0, 1.0)).unwrap();
//! assert!((x.x - 1.0).abs() < 1e-12 && (x.y - 2.0).abs() < 1e-12);
//! ```

pub use self::matrix::{Mat2, ParseMatrixError, ReflectionAxis, Vec2};

pub mod decompose;
pub mod matrix;

/// Tolerance below which a determinant or vector component counts as zero.
pub const EPSILON: f64 = 1e-9;
