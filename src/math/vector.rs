use crate::math::{vector2, vector3, Vector2, Vector3};

/// Dimension-agnostic contract shared by [`Vector2`] and [`Vector3`].
///
/// Generic callers (integrators, steering code, interpolators) can accept
/// any `V: Vector` without caring about dimensionality. Each method
/// delegates to the inherent implementation on the concrete type and
/// resolves statically, so the trait adds no call-site overhead.
pub trait Vector: Copy {
    /// Euclidean length of the vector.
    fn magnitude(self) -> f32;

    /// Squared Euclidean length; avoids the square root.
    fn magnitude_squared(self) -> f32;

    /// Dot product with `other`.
    fn dot(self, other: Self) -> f32;

    /// Component-wise scale by `n`.
    #[must_use]
    fn scale(self, n: f32) -> Self;

    /// Unit vector in the same direction; the zero vector is returned
    /// unchanged.
    #[must_use]
    fn normalize(self) -> Self;

    /// Linear blend toward `end` by `amt`.
    #[must_use]
    fn lerp(self, end: Self, amt: f32) -> Self;

    /// Unsigned angle to `other` in `[0, π]`; zero-length operands give 0.
    fn angle_between(self, other: Self) -> f32;
}

impl Vector for Vector2 {
    fn magnitude(self) -> f32 {
        Vector2::magnitude(self)
    }

    fn magnitude_squared(self) -> f32 {
        Vector2::magnitude_squared(self)
    }

    fn dot(self, other: Self) -> f32 {
        Vector2::dot(self, other)
    }

    fn scale(self, n: f32) -> Self {
        Vector2::scale(self, n)
    }

    fn normalize(self) -> Self {
        Vector2::normalize(self)
    }

    fn lerp(self, end: Self, amt: f32) -> Self {
        vector2::lerp(self, end, amt)
    }

    fn angle_between(self, other: Self) -> f32 {
        vector2::angle_between(self, other)
    }
}

impl Vector for Vector3 {
    fn magnitude(self) -> f32 {
        Vector3::magnitude(self)
    }

    fn magnitude_squared(self) -> f32 {
        Vector3::magnitude_squared(self)
    }

    fn dot(self, other: Self) -> f32 {
        Vector3::dot(self, other)
    }

    fn scale(self, n: f32) -> Self {
        Vector3::scale(self, n)
    }

    fn normalize(self) -> Self {
        Vector3::normalize(self)
    }

    fn lerp(self, end: Self, amt: f32) -> Self {
        vector3::lerp(self, end, amt)
    }

    fn angle_between(self, other: Self) -> f32 {
        vector3::angle_between(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn normalized_magnitude<V: Vector>(v: V) -> f32 {
        v.normalize().magnitude()
    }

    fn midpoint<V: Vector>(a: V, b: V) -> V {
        a.lerp(b, 0.5)
    }

    #[test]
    fn generic_normalize_works_in_both_dimensions() {
        let m2 = normalized_magnitude(Vector2::new(3.0, 4.0));
        let m3 = normalized_magnitude(Vector3::new(1.0, 2.0, 2.0));
        assert!((m2 - 1.0).abs() < TOLERANCE, "m2={m2}");
        assert!((m3 - 1.0).abs() < TOLERANCE, "m3={m3}");
    }

    #[test]
    fn generic_lerp_finds_midpoints() {
        assert_eq!(
            midpoint(Vector2::ZERO, Vector2::new(4.0, 2.0)),
            Vector2::new(2.0, 1.0)
        );
        assert_eq!(
            midpoint(Vector3::ZERO, Vector3::new(4.0, 2.0, -6.0)),
            Vector3::new(2.0, 1.0, -3.0)
        );
    }

    #[test]
    fn generic_dot_matches_magnitude_squared() {
        fn check<V: Vector>(v: V) {
            let d = v.dot(v);
            let m = v.magnitude_squared();
            assert!((d - m).abs() < TOLERANCE, "d={d} m={m}");
        }
        check(Vector2::new(1.5, -0.5));
        check(Vector3::new(1.5, -0.5, 2.0));
    }
}
