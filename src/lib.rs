//! Fixed-size 3D math primitives for rendering and physics code.
//!
//! Componentwise [`Vec3`]/[`Vec4`] arithmetic, row-major [`Mat3`]/[`Mat4`]
//! matrices with the usual transform factories, and an axis-aligned
//! [`Bounds`] volume for culling and collision queries. Everything is a
//! plain `Copy` value type; NaN and infinity propagate per IEEE-754, and
//! the only fallible operations are matrix inversion and fallible
//! normalization.

pub mod bounds;
pub mod mat;
pub mod vec;

pub use bounds::Bounds;
pub use mat::{Mat3, Mat4};
pub use vec::{Vec3, Vec4};

/// Errors from operations handed degenerate numeric input.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum MathError {
    /// The determinant is at or near zero, so no inverse exists.
    #[error("matrix is singular (determinant {0}), cannot invert")]
    SingularMatrix(f32),

    /// Normalizing a vector whose length is zero.
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,
}
