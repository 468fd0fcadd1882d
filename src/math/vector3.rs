use std::f32::consts::TAU;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand::Rng;

use crate::error::{Result, VectorError};
use crate::math::Vector2;

/// A 3-dimensional single-precision vector.
///
/// Every operation is functional: it consumes `self` by value and returns a
/// new vector, leaving the receiver untouched. The compound-assignment
/// operators (`+=`, `-=`, `*=`) are the explicit opt-in for in-place
/// updates.
///
/// No invariants are enforced on the components; NaN and infinity propagate
/// according to IEEE 754. The only validated operation is scalar
/// [division](Self::divide).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Unit vector along the positive x-axis.
    pub const UNIT_X: Self = Self {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };

    /// Unit vector along the positive y-axis.
    pub const UNIT_Y: Self = Self {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };

    /// Unit vector along the positive z-axis.
    pub const UNIT_Z: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    /// Creates a vector from its components.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Returns a random unit vector built from two independent uniform
    /// angles in `[0, 2π)` mapped through spherical coordinates, then
    /// normalized.
    ///
    /// The sample is not uniform over the sphere; density concentrates
    /// toward the poles.
    #[must_use]
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        let angle1 = rng.gen_range(0.0..TAU);
        let angle2 = rng.gen_range(0.0..TAU);
        Self::new(
            angle1.cos() * angle2.cos(),
            angle1.sin() * angle2.cos(),
            angle2.sin(),
        )
        .normalize()
    }

    /// Returns the Euclidean length of the vector.
    #[must_use]
    pub fn magnitude(self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    /// Returns the squared length, avoiding the square root. Preferred for
    /// threshold comparisons.
    #[must_use]
    pub fn magnitude_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Component-wise sum with the scalar triple `(dx, dy, dz)`.
    ///
    /// The vector-argument form is the `+` operator.
    #[must_use]
    pub fn add_xyz(self, dx: f32, dy: f32, dz: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Component-wise difference with the scalar triple `(dx, dy, dz)`.
    #[must_use]
    pub fn sub_xyz(self, dx: f32, dy: f32, dz: f32) -> Self {
        Self::new(self.x - dx, self.y - dy, self.z - dz)
    }

    /// Scales all three components by `n`.
    #[must_use]
    pub fn scale(self, n: f32) -> Self {
        Self::new(self.x * n, self.y * n, self.z * n)
    }

    /// Divides all three components by `n`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DivisionByZero`] when `n` is exactly zero;
    /// the components are never silently turned into infinities or NaNs.
    pub fn divide(self, n: f32) -> Result<Self> {
        if n == 0.0 {
            return Err(VectorError::DivisionByZero);
        }
        Ok(Self::new(self.x / n, self.y / n, self.z / n))
    }

    /// Returns the Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).magnitude()
    }

    /// Returns the dot product with `other`.
    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the cross product with `other` under the right-hand rule:
    /// `(y₁z₂ − y₂z₁, z₁x₂ − z₂x₁, x₁y₂ − x₂y₁)`.
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - other.y * self.z,
            self.z * other.x - other.z * self.x,
            self.x * other.y - other.x * self.y,
        )
    }

    /// Flips the sign of all three components.
    #[must_use]
    pub fn negate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }

    /// Returns the unit vector in the same direction.
    ///
    /// The zero vector is returned unchanged, keeping this total. A vector
    /// whose magnitude is exactly 1 is also returned unchanged; the
    /// division would be a no-op.
    #[must_use]
    pub fn normalize(self) -> Self {
        let m = self.magnitude();
        if m == 0.0 || m == 1.0 {
            return self;
        }
        Self::new(self.x / m, self.y / m, self.z / m)
    }

    /// Rescales the vector to length `len` without changing its direction.
    ///
    /// The zero vector has no direction and stays zero.
    #[must_use]
    pub fn set_magnitude(self, len: f32) -> Self {
        self.normalize().scale(len)
    }

    /// Caps the length at `max`, rescaling only when the squared magnitude
    /// exceeds `max²`.
    #[must_use]
    pub fn limit(self, max: f32) -> Self {
        if self.magnitude_squared() <= max * max {
            self
        } else {
            self.set_magnitude(max)
        }
    }

    /// Rotates the vector about the x-axis by `theta` radians.
    ///
    /// All output components are computed from the pre-rotation
    /// components; the same holds for the other axis rotations.
    #[must_use]
    pub fn rotate_x(self, theta: f32) -> Self {
        let cos = theta.cos();
        let sin = theta.sin();
        Self::new(
            self.x,
            self.y * cos - self.z * sin,
            self.y * sin + self.z * cos,
        )
    }

    /// Rotates the vector about the y-axis by `theta` radians.
    #[must_use]
    pub fn rotate_y(self, theta: f32) -> Self {
        let cos = theta.cos();
        let sin = theta.sin();
        Self::new(
            self.x * cos + self.z * sin,
            self.y,
            self.z * cos - self.x * sin,
        )
    }

    /// Rotates the vector about the z-axis by `theta` radians.
    #[must_use]
    pub fn rotate_z(self, theta: f32) -> Self {
        let cos = theta.cos();
        let sin = theta.sin();
        Self::new(
            self.x * cos - self.y * sin,
            self.x * sin + self.y * cos,
            self.z,
        )
    }

    /// Applies [`rotate_x(alpha)`](Self::rotate_x), then
    /// [`rotate_y(beta)`](Self::rotate_y), then
    /// [`rotate_z(gamma)`](Self::rotate_z), in that order.
    ///
    /// Each step rounds independently. This extrinsic X→Y→Z composition is
    /// not interchangeable with [`roll_pitch_yaw`](Self::roll_pitch_yaw),
    /// which applies a single combined matrix with the opposite parameter
    /// convention.
    #[must_use]
    pub fn rotate(self, alpha: f32, beta: f32, gamma: f32) -> Self {
        self.rotate_x(alpha).rotate_y(beta).rotate_z(gamma)
    }

    /// Applies the combined roll-pitch-yaw rotation matrix in one step.
    ///
    /// Roll turns about the z-axis, pitch about the y-axis, and yaw about
    /// the x-axis; the matrix is the aerospace product of the three, so no
    /// intermediate rounding occurs.
    #[must_use]
    pub fn roll_pitch_yaw(self, roll: f32, pitch: f32, yaw: f32) -> Self {
        let r_sin = roll.sin();
        let r_cos = roll.cos();
        let p_sin = pitch.sin();
        let p_cos = pitch.cos();
        let y_sin = yaw.sin();
        let y_cos = yaw.cos();
        Self::new(
            (r_cos * p_cos) * self.x
                + (r_cos * p_sin * y_sin - r_sin * y_cos) * self.y
                + (r_cos * p_sin * y_cos + r_sin * y_sin) * self.z,
            (r_sin * p_cos) * self.x
                + (r_sin * p_sin * y_sin + r_cos * y_cos) * self.y
                + (r_sin * p_sin * y_cos - r_cos * y_sin) * self.z,
            -p_sin * self.x + (p_cos * y_sin) * self.y + (p_cos * y_cos) * self.z,
        )
    }

    /// Linear blend toward `end` by `amt`. See [`lerp`].
    #[must_use]
    pub fn lerp(self, end: Self, amt: f32) -> Self {
        lerp(self, end, amt)
    }

    /// Interpolates away from `end` by `amt`. See [`lerp_away`].
    #[must_use]
    pub fn lerp_away(self, end: Self, amt: f32) -> Self {
        lerp_away(self, end, amt)
    }

    /// Unsigned angle to `other` in `[0, π]`. See [`angle_between`].
    #[must_use]
    pub fn angle_between(self, other: Self) -> f32 {
        angle_between(self, other)
    }

    /// Reflects the vector about the unit normal `normal`:
    /// `v − 2(v·n)n`.
    #[must_use]
    pub fn reflect(self, normal: Self) -> Self {
        self - normal.scale(2.0 * self.dot(normal))
    }

    /// Refracts the vector across the unit normal `normal` for the
    /// refractive-index ratio `eta`, per Snell's law.
    ///
    /// When the discriminant `1 − eta²(1 − (v·n)²)` is not positive the ray
    /// undergoes total internal reflection and the result is
    /// [`reflect`](Self::reflect).
    #[must_use]
    pub fn refract(self, normal: Self, eta: f32) -> Self {
        let dot = self.dot(normal);
        let d = 1.0 - eta * eta * (1.0 - dot * dot);
        if d > 0.0 {
            (self - normal.scale(dot)).scale(eta) - normal.scale(d.sqrt())
        } else {
            self.reflect(normal)
        }
    }

    /// Stable identity key folding the component bit patterns.
    ///
    /// Uses the same fold as [`Vector2::hash_key`], so a 2D vector and its
    /// z = 0 lift into 3D produce the same key.
    #[must_use]
    pub fn hash_key(self) -> u64 {
        [self.x, self.y, self.z].into_iter().fold(1_u64, |acc, c| {
            acc.wrapping_mul(31).wrapping_add(u64::from(c.to_bits()))
        })
    }

    fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

/// Returns the unsigned angle between `v1` and `v2` in `[0, π]`.
///
/// Returns `0.0` when either operand has all components exactly zero. The
/// cosine is clamped to `[−1, 1]` before the arccosine, so floating-point
/// overshoot maps to exactly `π` (at or below −1) or exactly `0` (at or
/// above 1) instead of NaN.
#[must_use]
pub fn angle_between(v1: Vector3, v2: Vector3) -> f32 {
    if v1.is_zero() || v2.is_zero() {
        return 0.0;
    }
    let cos = v1.dot(v2) / (v1.magnitude() * v2.magnitude());
    cos.clamp(-1.0, 1.0).acos()
}

/// Linear blend from `start` toward `end` by `amt`:
/// `start + (end − start)·amt`.
#[must_use]
pub fn lerp(start: Vector3, end: Vector3, amt: f32) -> Vector3 {
    start + (end - start).scale(amt)
}

/// Interpolates away from `end`: `start + (start − end)·amt`.
///
/// The direction convention is inverted relative to [`lerp`]: growing `amt`
/// moves the result further from `end`.
#[must_use]
pub fn lerp_away(start: Vector3, end: Vector3, amt: f32) -> Vector3 {
    start + (start - end).scale(amt)
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;

    fn mul(self, n: f32) -> Self::Output {
        self.scale(n)
    }
}

impl MulAssign<f32> for Vector3 {
    fn mul_assign(&mut self, n: f32) {
        *self = self.scale(n);
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Sum for Vector3 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<Vector2> for Vector3 {
    /// Lifts a 2D vector into 3D with `z = 0`.
    fn from(v: Vector2) -> Self {
        Self::new(v.x, v.y, 0.0)
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {}, {}, {} ]", self.x, self.y, self.z)
    }
}
