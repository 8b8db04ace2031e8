//! Linear systems, eigen decomposition and SVD of 2x2 matrices.

use serde::Serialize;

use crate::{
    EPSILON,
    matrix::{Mat2, Vec2},
};

/// Smallest ratio `s2 / s1` for which the second left singular vector is
/// taken from the matrix rather than completed as a perpendicular.
const RANK_TOLERANCE: f64 = 1e-6;

/// Solves `a * x = b` by Cramer's rule.
///
/// Returns `None` when `a` has no inverse (the two equations describe parallel
/// or identical lines).
#[must_use]
pub fn solve(a: Mat2, b: Vec2) -> Option<Vec2> {
    let det = a.determinant();
    if det.abs() < EPSILON {
        return None;
    }
    Some(Vec2::new(
        (b.x * a.d - b.y * a.b) / det,
        (a.a * b.y - a.c * b.x) / det,
    ))
}

/// Eigenvalues of a 2x2 matrix with, when they are real, their eigenvectors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Eigen {
    /// Real eigenvalues, larger first, with unit eigenvectors in the same order.
    ///
    /// For a repeated eigenvalue the second vector is the first turned a
    /// quarter turn; it is an eigenvector only if the matrix is a multiple of
    /// the identity.
    Real {
        values: [f64; 2],
        vectors: [Vec2; 2],
    },
    /// The conjugate pair `re ± im i`. No real direction is preserved.
    Complex { re: f64, im: f64 },
}

impl Eigen {
    #[must_use]
    pub fn is_real(&self) -> bool {
        matches!(self, Self::Real { .. })
    }
}

/// Unit vector in the null space of `m - lambda I`.
fn eigenvector(m: Mat2, lambda: f64) -> Vec2 {
    let v = if m.c.abs() > EPSILON {
        Vec2::new(lambda - m.d, m.c)
    } else if m.b.abs() > EPSILON {
        Vec2::new(m.b, lambda - m.a)
    } else if (lambda - m.a).abs() <= (lambda - m.d).abs() {
        Vec2::new(1.0, 0.0)
    } else {
        Vec2::new(0.0, 1.0)
    };
    v.normalized().unwrap_or(Vec2::new(1.0, 0.0))
}

/// Eigenvalues and eigenvectors of `m`.
///
/// # Examples
///
/// ```
/// use quantprep_linalg::{Mat2, decompose::{Eigen, eigen}};
///
/// let Eigen::Real { values, .. } = eigen(Mat2::new(2.0, 1.0, 1.0, 2.0)) else {
///     unreachable!();
/// };
/// assert_eq!(values, [3.0, 1.0]);
///
/// // A quarter-turn rotation has eigenvalues ±i.
/// assert_eq!(eigen(Mat2::new(0.0, -1.0, 1.0, 0.0)), Eigen::Complex { re: 0.0, im: 1.0 });
/// ```
#[must_use]
pub fn eigen(m: Mat2) -> Eigen {
    let half_trace = m.trace() / 2.0;
    // (a - d)^2 + 4bc equals trace^2 - 4 det without the cancellation.
    let discriminant = (m.a - m.d).powi(2) + 4.0 * m.b * m.c;
    if discriminant < 0.0 {
        return Eigen::Complex {
            re: half_trace,
            im: (-discriminant).sqrt() / 2.0,
        };
    }
    let half_gap = discriminant.sqrt() / 2.0;
    let values = [half_trace + half_gap, half_trace - half_gap];
    let first = eigenvector(m, values[0]);
    let second = if values[0] - values[1] < EPSILON {
        first.perp()
    } else {
        eigenvector(m, values[1])
    };
    Eigen::Real {
        values,
        vectors: [first, second],
    }
}

/// Singular value decomposition `m = u * diag(sigma) * vᵀ`.
///
/// The columns of `u` and `v` are the left and right singular vectors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Svd {
    pub u: Mat2,
    /// Singular values, larger first.
    pub sigma: [f64; 2],
    pub v: Mat2,
}

impl Svd {
    /// Multiplies the factors back together.
    #[must_use]
    pub fn reconstruct(&self) -> Mat2 {
        self.u * Mat2::scaling(self.sigma[0], self.sigma[1]) * self.v.transpose()
    }
}

/// Singular value decomposition of `m`.
///
/// The right singular vectors come from the eigenvectors of `mᵀm`, which is
/// symmetric, so they are always real and orthogonal.
///
/// # Examples
///
/// ```
/// use quantprep_linalg::{Mat2, decompose::svd};
///
/// let m = Mat2::new(3.0, 0.0, 4.0, 5.0);
/// let svd = svd(m);
/// assert!((svd.sigma[0] - 45.0_f64.sqrt()).abs() < 1e-12);
/// assert!((svd.sigma[1] - 5.0_f64.sqrt()).abs() < 1e-12);
/// assert!(svd.reconstruct().approx_eq(m, 1e-12));
/// ```
#[must_use]
pub fn svd(m: Mat2) -> Svd {
    let gram = m.transpose() * m;
    let (values, vectors) = match eigen(gram) {
        Eigen::Real { values, vectors } => (values, vectors),
        // Not reached: the discriminant of a symmetric matrix is a sum of squares.
        Eigen::Complex { re, .. } => ([re, re], [Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)]),
    };
    let sigma = values.map(|value| value.max(0.0).sqrt());
    let [v1, v2] = vectors;

    let u1 = if sigma[0] > EPSILON {
        (m * v1).normalized().unwrap_or(Vec2::new(1.0, 0.0))
    } else {
        Vec2::new(1.0, 0.0)
    };
    let u2 = if sigma[1] > RANK_TOLERANCE * sigma[0] {
        (m * v2).normalized().unwrap_or(u1.perp())
    } else {
        u1.perp()
    };
    Svd {
        u: Mat2::from_columns(u1, u2),
        sigma,
        v: Mat2::from_columns(v1, v2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {expected}, got {actual}"
        );
    }

    fn assert_eigenpair(m: Mat2, value: f64, vector: Vec2) {
        let diff = m * vector - vector.scaled(value);
        assert!(diff.length() < 1e-9, "{vector:?} is not an eigenvector for {value}");
        assert_close(vector.length(), 1.0);
    }

    fn real_parts(eigen: Eigen) -> ([f64; 2], [Vec2; 2]) {
        match eigen {
            Eigen::Real { values, vectors } => (values, vectors),
            Eigen::Complex { .. } => panic!("expected real eigenvalues, got {eigen:?}"),
        }
    }

    #[test]
    fn test_solve() {
        let a = Mat2::new(2.0, 1.0, 1.0, 3.0);
        let x = solve(a, Vec2::new(3.0, 5.0)).unwrap();
        assert_close(x.x, 0.8);
        assert_close(x.y, 1.4);
        let b = a * x;
        assert_close(b.x, 3.0);
        assert_close(b.y, 5.0);
    }

    #[test]
    fn test_solve_singular_system() {
        // Parallel lines: x + 2y = 1, 2x + 4y = 5.
        assert_eq!(solve(Mat2::new(1.0, 2.0, 2.0, 4.0), Vec2::new(1.0, 5.0)), None);
        assert_eq!(solve(Mat2::ZERO, Vec2::default()), None);
    }

    #[test]
    fn test_eigen_distinct() {
        let m = Mat2::new(4.0, 1.0, 2.0, 3.0);
        let (values, vectors) = real_parts(eigen(m));
        assert_close(values[0], 5.0);
        assert_close(values[1], 2.0);
        assert_eigenpair(m, values[0], vectors[0]);
        assert_eigenpair(m, values[1], vectors[1]);
    }

    #[test]
    fn test_eigen_diagonal_matrix() {
        let m = Mat2::scaling(1.0, 5.0);
        let (values, vectors) = real_parts(eigen(m));
        assert_eq!(values, [5.0, 1.0]);
        assert_eq!(vectors, [Vec2::new(0.0, 1.0), Vec2::new(1.0, 0.0)]);
    }

    #[test]
    fn test_eigen_repeated() {
        let (values, vectors) = real_parts(eigen(Mat2::scaling(2.0, 2.0)));
        assert_eq!(values, [2.0, 2.0]);
        assert_close(vectors[0].dot(vectors[1]), 0.0);

        // A shear has a single eigen direction, the x axis.
        let shear = Mat2::shear(1.0, 0.0);
        let (values, vectors) = real_parts(eigen(shear));
        assert_eq!(values, [1.0, 1.0]);
        assert_eigenpair(shear, 1.0, vectors[0]);
    }

    #[test]
    fn test_eigen_complex() {
        assert_eq!(
            eigen(Mat2::new(1.0, -2.0, 1.0, 3.0)),
            Eigen::Complex { re: 2.0, im: 1.0 }
        );
        let rotation = eigen(Mat2::rotation(std::f64::consts::FRAC_PI_3));
        let Eigen::Complex { re, im } = rotation else {
            panic!("rotation has no real eigenvalues");
        };
        assert_close(re, 0.5);
        assert_close(im, 3.0_f64.sqrt() / 2.0);
        assert!(!rotation.is_real());
    }

    #[test]
    fn test_eigenvalues_match_trace_and_determinant() {
        let m = Mat2::new(-1.5, 2.0, 0.5, 4.0);
        let (values, _) = real_parts(eigen(m));
        assert_close(values[0] + values[1], m.trace());
        assert_close(values[0] * values[1], m.determinant());
    }

    #[test]
    fn test_svd_factors_are_orthogonal() {
        let m = Mat2::new(3.0, 0.0, 4.0, 5.0);
        let svd = svd(m);
        assert!(svd.reconstruct().approx_eq(m, TOLERANCE));
        assert!((svd.u.transpose() * svd.u).approx_eq(Mat2::IDENTITY, TOLERANCE));
        assert!((svd.v.transpose() * svd.v).approx_eq(Mat2::IDENTITY, TOLERANCE));
        assert_close(svd.sigma[0] * svd.sigma[1], m.determinant().abs());
    }

    #[test]
    fn test_svd_of_reflection_and_rank_one() {
        let reflection = Mat2::new(0.0, 1.0, 1.0, 0.0);
        let svd_reflection = svd(reflection);
        assert_eq!(svd_reflection.sigma, [1.0, 1.0]);
        assert!(svd_reflection.reconstruct().approx_eq(reflection, TOLERANCE));

        let rank_one = Mat2::new(1.0, 2.0, 2.0, 4.0);
        let svd_rank_one = svd(rank_one);
        assert_close(svd_rank_one.sigma[0], 5.0);
        assert!(svd_rank_one.sigma[1] < 1e-6);
        assert!(svd_rank_one.reconstruct().approx_eq(rank_one, 1e-9));
        let u = svd_rank_one.u;
        assert!((u.transpose() * u).approx_eq(Mat2::IDENTITY, TOLERANCE));
    }

    #[test]
    fn test_svd_of_zero_matrix() {
        let svd = svd(Mat2::ZERO);
        assert_eq!(svd.sigma, [0.0, 0.0]);
        assert_eq!(svd.reconstruct(), Mat2::ZERO);
    }
}
