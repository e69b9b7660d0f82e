// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use thiserror::Error;

/// Clip plane named by [`MatrixError::InvalidNearFar`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ClipPlane {
    /// The near clip plane.
    Near,
    /// The far clip plane.
    Far,
}

impl fmt::Display for ClipPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Near => f.write_str("near"),
            Self::Far => f.write_str("far"),
        }
    }
}

/// Errors produced by [`crate::Matrix4`] builders.
///
/// Every failing call returns before writing, so the destination matrix keeps
/// its previous contents.
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum MatrixError {
    /// Two opposing clip planes coincide, the aspect ratio is zero, or the
    /// field of view has a zero sine.
    #[error("null frustum")]
    DegenerateFrustum,
    /// A perspective builder received a near or far distance that is not
    /// strictly positive.
    #[error("{plane} <= 0 (got {value})")]
    InvalidNearFar {
        /// Which plane was rejected.
        plane: ClipPlane,
        /// The rejected distance.
        value: f32,
    },
    /// The matrix has a zero determinant. Only the `try_*` inversion entry
    /// points report this; the plain ones leave the destination unchanged.
    #[error("singular matrix (determinant is zero)")]
    SingularMatrix,
}
