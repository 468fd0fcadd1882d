pub mod vector2;
pub mod vector3;

mod vector;

pub use vector::Vector;
pub use vector2::Vector2;
pub use vector3::Vector3;

/// Global tolerance for floating-point comparisons.
pub const TOLERANCE: f32 = 1e-6;
