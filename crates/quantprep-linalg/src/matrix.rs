use std::{fmt, ops, str::FromStr};

use serde::Serialize;

use crate::EPSILON;

/// A vector in the plane.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Serialize, derive_more::Add, derive_more::Sub,
)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// z component of the 3D cross product, the signed area spanned by both vectors.
    #[must_use]
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// The vector rotated a quarter turn counterclockwise.
    #[must_use]
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Unit vector in the same direction, `None` for a (near) zero vector.
    #[must_use]
    pub fn normalized(self) -> Option<Self> {
        let length = self.length();
        (length > EPSILON).then(|| self.scaled(1.0 / length))
    }
}

/// Line a [`Mat2::reflection`] mirrors across.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReflectionAxis {
    X,
    Y,
    /// The line through the origin along this direction.
    Line(Vec2),
}

/// A 2x2 matrix `[[a, b], [c, d]]`, stored by rows.
///
/// # Examples
///
/// ```
/// use quantprep_linalg::{Mat2, Vec2};
///
/// let m = Mat2::new(2.0, 1.0, 1.0, 3.0);
/// assert_eq!(m.determinant(), 5.0);
/// assert_eq!(m * Vec2::new(1.0, 1.0), Vec2::new(3.0, 4.0));
/// assert_eq!(m * Mat2::IDENTITY, m);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Mat2 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Default for Mat2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat2 {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// The matrix whose columns are `first` and `second`.
    #[must_use]
    pub const fn from_columns(first: Vec2, second: Vec2) -> Self {
        Self::new(first.x, second.x, first.y, second.y)
    }

    /// Counterclockwise rotation by `angle` radians.
    #[must_use]
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, -sin, sin, cos)
    }

    #[must_use]
    pub const fn scaling(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy)
    }

    /// `shx` shifts x by a multiple of y, `shy` shifts y by a multiple of x.
    #[must_use]
    pub const fn shear(shx: f64, shy: f64) -> Self {
        Self::new(1.0, shx, shy, 1.0)
    }

    /// Reflection across `axis`. A zero direction vector gives the identity.
    #[must_use]
    pub fn reflection(axis: ReflectionAxis) -> Self {
        match axis {
            ReflectionAxis::X => Self::new(1.0, 0.0, 0.0, -1.0),
            ReflectionAxis::Y => Self::new(-1.0, 0.0, 0.0, 1.0),
            ReflectionAxis::Line(dir) => {
                let len_sq = dir.dot(dir);
                if len_sq == 0.0 {
                    return Self::IDENTITY;
                }
                let (x2, y2, xy) = (dir.x * dir.x, dir.y * dir.y, dir.x * dir.y);
                Self::new(x2 - y2, 2.0 * xy, 2.0 * xy, y2 - x2).scaled(1.0 / len_sq)
            }
        }
    }

    /// Orthogonal projection onto the line along `onto`. A zero vector gives
    /// the zero matrix.
    #[must_use]
    pub fn projection(onto: Vec2) -> Self {
        let len_sq = onto.dot(onto);
        if len_sq == 0.0 {
            return Self::ZERO;
        }
        let xy = onto.x * onto.y;
        Self::new(onto.x * onto.x, xy, xy, onto.y * onto.y).scaled(1.0 / len_sq)
    }

    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(
            self.a * factor,
            self.b * factor,
            self.c * factor,
            self.d * factor,
        )
    }

    #[must_use]
    pub fn determinant(self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    #[must_use]
    pub fn trace(self) -> f64 {
        self.a + self.d
    }

    #[must_use]
    pub const fn transpose(self) -> Self {
        Self::new(self.a, self.c, self.b, self.d)
    }

    /// `None` when the determinant is within [`EPSILON`] of zero.
    #[must_use]
    pub fn inverse(self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < EPSILON {
            return None;
        }
        Some(Self::new(self.d, -self.b, -self.c, self.a).scaled(1.0 / det))
    }

    #[must_use]
    pub const fn columns(self) -> [Vec2; 2] {
        [Vec2::new(self.a, self.c), Vec2::new(self.b, self.d)]
    }

    /// Whether every entry is within `tolerance` of `other`'s.
    #[must_use]
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        [
            self.a - other.a,
            self.b - other.b,
            self.c - other.c,
            self.d - other.d,
        ]
        .iter()
        .all(|diff| diff.abs() <= tolerance)
    }
}

impl ops::Mul for Mat2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.a * rhs.a + self.b * rhs.c,
            self.a * rhs.b + self.b * rhs.d,
            self.c * rhs.a + self.d * rhs.c,
            self.c * rhs.b + self.d * rhs.d,
        )
    }
}

impl ops::Mul<Vec2> for Mat2 {
    type Output = Vec2;

    fn mul(self, v: Vec2) -> Vec2 {
        Vec2::new(self.a * v.x + self.b * v.y, self.c * v.x + self.d * v.y)
    }
}

impl fmt::Display for Mat2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.a, self.b, self.c, self.d)
    }
}

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ParseMatrixError {
    #[display("expected 4 comma separated entries (a,b,c,d), found {found}")]
    WrongLength { found: usize },
    #[display("invalid matrix entry '{value}'")]
    InvalidEntry { value: String },
}

impl FromStr for Mat2 {
    type Err = ParseMatrixError;

    /// Parses `a,b,c,d`, the entries in row order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let entries = s
            .split(',')
            .map(|raw| {
                let raw = raw.trim();
                raw.parse::<f64>()
                    .ok()
                    .filter(|value| value.is_finite())
                    .ok_or_else(|| ParseMatrixError::InvalidEntry {
                        value: raw.to_owned(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let &[a, b, c, d] = entries.as_slice() else {
            return Err(ParseMatrixError::WrongLength {
                found: entries.len(),
            });
        };
        Ok(Self::new(a, b, c, d))
    }
}
