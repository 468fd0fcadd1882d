pub mod error;
pub mod math;

pub use error::{Result, VectorError};
pub use math::{Vector, Vector2, Vector3};
