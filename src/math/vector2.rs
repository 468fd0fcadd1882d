use std::f32::consts::TAU;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand::Rng;

use crate::error::{Result, VectorError};
use crate::math::Vector3;

/// A 2-dimensional single-precision vector.
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
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Unit vector along the positive x-axis.
    pub const UNIT_X: Self = Self { x: 1.0, y: 0.0 };

    /// Unit vector along the positive y-axis.
    pub const UNIT_Y: Self = Self { x: 0.0, y: 1.0 };

    /// Creates a vector from its components.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the unit vector pointing at `angle` radians from the
    /// positive x-axis.
    #[must_use]
    pub fn from_angle(angle: f32) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    /// Returns a unit vector at a uniformly random angle in `[0, 2π)`.
    #[must_use]
    pub fn random() -> Self {
        Self::from_angle(rand::thread_rng().gen_range(0.0..TAU))
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
        self.x * self.x + self.y * self.y
    }

    /// Component-wise sum with the scalar pair `(dx, dy)`.
    ///
    /// The vector-argument form is the `+` operator.
    #[must_use]
    pub fn add_xy(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Component-wise difference with the scalar pair `(dx, dy)`.
    #[must_use]
    pub fn sub_xy(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x - dx, self.y - dy)
    }

    /// Scales both components by `n`.
    #[must_use]
    pub fn scale(self, n: f32) -> Self {
        Self::new(self.x * n, self.y * n)
    }

    /// Divides both components by `n`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DivisionByZero`] when `n` is exactly zero;
    /// the components are never silently turned into infinities or NaNs.
    pub fn divide(self, n: f32) -> Result<Self> {
        if n == 0.0 {
            return Err(VectorError::DivisionByZero);
        }
        Ok(Self::new(self.x / n, self.y / n))
    }

    /// Returns the Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).magnitude()
    }

    /// Returns the dot product with `other`.
    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Returns the 2D cross product lifted onto the z-axis:
    /// `(0, 0, x₁y₂ − x₂y₁)`.
    ///
    /// The z component is the signed cross magnitude under the right-hand
    /// rule, so callers working in 3D can compose it directly.
    #[must_use]
    pub fn cross(self, other: Self) -> Vector3 {
        Vector3::new(0.0, 0.0, self.x * other.y - other.x * self.y)
    }

    /// Flips the sign of both components.
    #[must_use]
    pub fn negate(self) -> Self {
        Self::new(-self.x, -self.y)
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
        Self::new(self.x / m, self.y / m)
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

    /// Returns the signed angle from the positive x-axis in `(−π, π]`.
    #[must_use]
    pub fn heading(self) -> f32 {
        self.y.atan2(self.x)
    }

    /// Rotates the vector counter-clockwise by `theta` radians.
    ///
    /// Both output components are computed from the pre-rotation
    /// components.
    #[must_use]
    pub fn rotate(self, theta: f32) -> Self {
        let cos = theta.cos();
        let sin = theta.sin();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
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
    /// A fixed third term of `0.0` is folded in, so a 2D vector and its
    /// z = 0 lift into 3D produce the same key.
    #[must_use]
    pub fn hash_key(self) -> u64 {
        [self.x, self.y, 0.0].into_iter().fold(1_u64, |acc, c| {
            acc.wrapping_mul(31).wrapping_add(u64::from(c.to_bits()))
        })
    }

    fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Returns the unsigned angle between `v1` and `v2` in `[0, π]`.
///
/// Returns `0.0` when either operand has all components exactly zero. The
/// cosine is clamped to `[−1, 1]` before the arccosine, so floating-point
/// overshoot maps to exactly `π` (at or below −1) or exactly `0` (at or
/// above 1) instead of NaN.
#[must_use]
pub fn angle_between(v1: Vector2, v2: Vector2) -> f32 {
    if v1.is_zero() || v2.is_zero() {
        return 0.0;
    }
    let cos = v1.dot(v2) / (v1.magnitude() * v2.magnitude());
    cos.clamp(-1.0, 1.0).acos()
}

/// Linear blend from `start` toward `end` by `amt`:
/// `start + (end − start)·amt`.
#[must_use]
pub fn lerp(start: Vector2, end: Vector2, amt: f32) -> Vector2 {
    start + (end - start).scale(amt)
}

/// Interpolates away from `end`: `start + (start − end)·amt`.
///
/// The direction convention is inverted relative to [`lerp`]: growing `amt`
/// moves the result further from `end`.
#[must_use]
pub fn lerp_away(start: Vector2, end: Vector2, amt: f32) -> Vector2 {
    start + (start - end).scale(amt)
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;

    fn mul(self, n: f32) -> Self::Output {
        self.scale(n)
    }
}

impl MulAssign<f32> for Vector2 {
    fn mul_assign(&mut self, n: f32) {
        *self = self.scale(n);
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Sum for Vector2 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {}, {} ]", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use approx::assert_relative_eq;

    use super::*;
    use crate::math::TOLERANCE;

    const TOL: f32 = TOLERANCE;

    // ── construction tests ──

    #[test]
    fn default_is_zero() {
        assert_eq!(Vector2::default(), Vector2::ZERO);
    }

    #[test]
    fn from_angle_quarter_turn() {
        let v = Vector2::from_angle(FRAC_PI_2);
        assert!(v.x.abs() < TOL, "x={}", v.x);
        assert!((v.y - 1.0).abs() < TOL, "y={}", v.y);
    }

    #[test]
    fn random_is_unit_length() {
        for _ in 0..32 {
            let v = Vector2::random();
            assert!((v.magnitude() - 1.0).abs() < TOL, "v={v}");
        }
    }

    #[test]
    fn from_array() {
        assert_eq!(Vector2::from([3.0, 4.0]), Vector2::new(3.0, 4.0));
    }

    // ── magnitude tests ──

    #[test]
    fn magnitude_3_4_5() {
        assert_eq!(Vector2::new(3.0, 4.0).magnitude(), 5.0);
    }

    #[test]
    fn dot_with_self_is_magnitude_squared() {
        let v = Vector2::new(-2.5, 1.75);
        assert_relative_eq!(v.dot(v), v.magnitude_squared());
    }

    // ── arithmetic tests ──

    #[test]
    fn add_and_sub_forms_agree() {
        let v = Vector2::new(1.0, 2.0);
        let w = Vector2::new(-0.5, 4.0);
        assert_eq!(v + w, v.add_xy(-0.5, 4.0));
        assert_eq!(v - w, v.sub_xy(-0.5, 4.0));
    }

    #[test]
    fn assign_operators_match_functional_forms() {
        let mut v = Vector2::new(1.0, 2.0);
        v += Vector2::new(3.0, -1.0);
        v -= Vector2::new(1.0, 1.0);
        v *= 2.0;
        assert_eq!(v, Vector2::new(6.0, 0.0));
    }

    #[test]
    fn sum_accumulates() {
        let total: Vector2 = [
            Vector2::new(1.0, 0.0),
            Vector2::new(2.0, -1.0),
            Vector2::new(0.5, 0.5),
        ]
        .into_iter()
        .sum();
        assert_eq!(total, Vector2::new(3.5, -0.5));
    }

    #[test]
    fn scale_divide_round_trip() {
        let v = Vector2::new(1.3, -4.2);
        let back = v.scale(7.5).divide(7.5).unwrap_or(Vector2::ZERO);
        assert_relative_eq!(back.x, v.x, max_relative = TOL);
        assert_relative_eq!(back.y, v.y, max_relative = TOL);
    }

    #[test]
    fn divide_by_zero_is_an_error() {
        assert_eq!(
            Vector2::new(1.0, 2.0).divide(0.0),
            Err(VectorError::DivisionByZero)
        );
    }

    #[test]
    fn distance_is_difference_magnitude() {
        let d = Vector2::new(1.0, 1.0).distance(Vector2::new(4.0, 5.0));
        assert_eq!(d, 5.0);
    }

    #[test]
    fn negate_matches_neg_operator() {
        let v = Vector2::new(3.0, -4.0);
        assert_eq!(v.negate(), -v);
        assert_eq!(v.negate(), Vector2::new(-3.0, 4.0));
    }

    // ── normalize / magnitude-shaping tests ──

    #[test]
    fn normalize_yields_unit_length() {
        let m = Vector2::new(3.0, 4.0).normalize().magnitude();
        assert!((m - 1.0).abs() < TOL, "m={m}");
    }

    #[test]
    fn normalize_zero_stays_zero() {
        assert_eq!(Vector2::ZERO.normalize(), Vector2::ZERO);
    }

    #[test]
    fn set_magnitude_scales_direction() {
        let v = Vector2::new(3.0, 4.0).set_magnitude(10.0);
        assert_relative_eq!(v.x, 6.0, max_relative = TOL);
        assert_relative_eq!(v.y, 8.0, max_relative = TOL);
    }

    #[test]
    fn set_magnitude_of_zero_stays_zero() {
        assert_eq!(Vector2::ZERO.set_magnitude(4.0), Vector2::ZERO);
    }

    #[test]
    fn limit_leaves_short_vectors_alone() {
        let v = Vector2::new(1.0, 1.0);
        assert_eq!(v.limit(5.0), v);
    }

    #[test]
    fn limit_caps_long_vectors() {
        let v = Vector2::new(30.0, 40.0).limit(5.0);
        assert!((v.magnitude() - 5.0).abs() < TOL, "v={v}");
    }

    // ── angle tests ──

    #[test]
    fn heading_of_unit_y() {
        assert_relative_eq!(Vector2::UNIT_Y.heading(), FRAC_PI_2);
    }

    #[test]
    fn heading_of_negative_x_is_pi() {
        assert_relative_eq!(Vector2::new(-1.0, 0.0).heading(), PI);
    }

    #[test]
    fn rotate_quarter_turn() {
        let v = Vector2::UNIT_X.rotate(FRAC_PI_2);
        assert!(v.x.abs() < TOL, "x={}", v.x);
        assert!((v.y - 1.0).abs() < TOL, "y={}", v.y);
    }

    #[test]
    fn rotate_preserves_magnitude() {
        let v = Vector2::new(-2.0, 7.0);
        for theta in [0.0, 0.3, FRAC_PI_4, 2.0, -5.5] {
            let m = v.rotate(theta).magnitude();
            assert!((m - v.magnitude()).abs() < 1e-4, "theta={theta} m={m}");
        }
    }

    #[test]
    fn rotate_uses_original_components() {
        // A stale-read rotation would leave (cos²−sin·cos, ...) here.
        let v = Vector2::new(1.0, 0.0).rotate(FRAC_PI_4);
        assert_relative_eq!(v.x, FRAC_PI_4.cos(), max_relative = TOL);
        assert_relative_eq!(v.y, FRAC_PI_4.sin(), max_relative = TOL);
    }

    #[test]
    fn angle_between_unit_self_is_exactly_zero() {
        assert_eq!(angle_between(Vector2::UNIT_X, Vector2::UNIT_X), 0.0);
    }

    #[test]
    fn angle_between_self_is_zero() {
        // acos is steep near ±1, so the tolerance here is coarser than TOL.
        let v = Vector2::new(2.0, 3.0);
        let a = angle_between(v, v);
        assert!(a.is_finite() && a.abs() < 1e-3, "a={a}");
    }

    #[test]
    fn angle_between_opposite_is_pi() {
        let v = Vector2::new(2.0, 3.0);
        let a = angle_between(v, v.negate());
        assert!((a - PI).abs() < 1e-3, "a={a}");
    }

    #[test]
    fn angle_between_zero_operand_is_zero() {
        assert_eq!(angle_between(Vector2::ZERO, Vector2::UNIT_X), 0.0);
        assert_eq!(angle_between(Vector2::UNIT_X, Vector2::ZERO), 0.0);
    }

    #[test]
    fn angle_between_perpendicular() {
        let a = angle_between(Vector2::UNIT_X, Vector2::UNIT_Y);
        assert_relative_eq!(a, FRAC_PI_2);
    }

    #[test]
    fn angle_between_never_produces_nan() {
        // Parallel vectors push the cosine right up against ±1; the clamp
        // keeps acos inside its domain.
        let v = Vector2::new(0.1, 0.3);
        let a = angle_between(v, v.scale(3.0));
        assert!(a.is_finite() && a.abs() < 1e-3, "a={a}");
        let b = angle_between(v, v.scale(-3.0));
        assert!(b.is_finite() && (b - PI).abs() < 1e-3, "b={b}");
    }

    #[test]
    fn method_delegates_to_free_function() {
        let v = Vector2::new(1.0, 2.0);
        let w = Vector2::new(-3.0, 0.5);
        assert_eq!(v.angle_between(w), angle_between(v, w));
    }

    // ── cross product tests ──

    #[test]
    fn cross_of_axes_is_unit_z() {
        let c = Vector2::UNIT_X.cross(Vector2::UNIT_Y);
        assert_eq!(c, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn cross_is_anti_commutative() {
        let v = Vector2::new(1.5, -2.0);
        let w = Vector2::new(0.5, 3.0);
        assert_eq!(v.cross(w), w.cross(v).negate());
    }

    // ── interpolation tests ──

    #[test]
    fn lerp_blends_toward_end() {
        let mid = lerp(Vector2::ZERO, Vector2::new(2.0, 4.0), 0.5);
        assert_eq!(mid, Vector2::new(1.0, 2.0));
    }

    #[test]
    fn lerp_endpoints() {
        let start = Vector2::new(1.0, 1.0);
        let end = Vector2::new(5.0, -3.0);
        assert_eq!(lerp(start, end, 0.0), start);
        assert_eq!(lerp(start, end, 1.0), end);
    }

    #[test]
    fn lerp_away_moves_off_the_end_point() {
        let start = Vector2::new(1.0, 1.0);
        let end = Vector2::new(2.0, 2.0);
        // start + (start − end)·amt walks the opposite direction.
        assert_eq!(lerp_away(start, end, 1.0), Vector2::new(0.0, 0.0));
        assert_eq!(lerp_away(start, end, 0.0), start);
    }

    // ── reflection / refraction tests ──

    #[test]
    fn reflect_off_parallel_normal_negates() {
        let n = Vector2::new(3.0, 4.0).normalize();
        let r = n.reflect(n);
        assert_relative_eq!(r.x, -n.x, max_relative = TOL);
        assert_relative_eq!(r.y, -n.y, max_relative = TOL);
    }

    #[test]
    fn reflect_across_surface() {
        // Falling ray bouncing off a floor with normal +y.
        let v = Vector2::new(1.0, -1.0);
        assert_eq!(v.reflect(Vector2::UNIT_Y), Vector2::new(1.0, 1.0));
    }

    #[test]
    fn refract_straight_through_at_eta_one() {
        let v = Vector2::new(0.6, -0.8);
        let out = v.refract(Vector2::UNIT_Y, 1.0);
        assert_relative_eq!(out.x, v.x, max_relative = TOL);
        assert_relative_eq!(out.y, v.y, max_relative = TOL);
    }

    #[test]
    fn refract_falls_back_to_reflection() {
        // Grazing ray with a dense-to-sparse ratio: discriminant ≤ 0.
        let v = Vector2::new(0.995, -0.1).normalize();
        let out = v.refract(Vector2::UNIT_Y, 2.0);
        assert_eq!(out, v.reflect(Vector2::UNIT_Y));
    }

    // ── identity tests ──

    #[test]
    fn equal_vectors_share_hash_keys() {
        assert_eq!(Vector2::new(0.0, 0.0), Vector2::new(0.0, 0.0));
        assert_eq!(
            Vector2::new(0.0, 0.0).hash_key(),
            Vector2::new(0.0, 0.0).hash_key()
        );
    }

    #[test]
    fn distinct_vectors_get_distinct_keys() {
        assert_ne!(
            Vector2::new(1.0, 0.0).hash_key(),
            Vector2::new(0.0, 1.0).hash_key()
        );
    }

    #[test]
    fn display_renders_bracketed_pair() {
        assert_eq!(Vector2::new(1.0, 2.5).to_string(), "[ 1, 2.5 ]");
    }
}
