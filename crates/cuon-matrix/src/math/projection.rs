// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Projection builders. Parameters are validated before any element is
//! written, so a rejected call leaves the matrix as it was.

use tracing::debug;

use crate::error::{ClipPlane, MatrixError};
use crate::math::{deg_to_rad, Matrix4};

fn degenerate(builder: &'static str) -> MatrixError {
    debug!(builder, "rejected projection: null frustum");
    MatrixError::DegenerateFrustum
}

fn check_near_far(builder: &'static str, near: f32, far: f32) -> Result<(), MatrixError> {
    let rejected = if near <= 0.0 {
        Some((ClipPlane::Near, near))
    } else if far <= 0.0 {
        Some((ClipPlane::Far, far))
    } else {
        None
    };
    match rejected {
        Some((plane, value)) => {
            debug!(builder, %plane, value, "rejected projection: clip distance <= 0");
            Err(MatrixError::InvalidNearFar { plane, value })
        }
        None => Ok(()),
    }
}

impl Matrix4 {
    /// Overwrites with an orthographic projection.
    ///
    /// Near and far may have any sign, but no pair of opposing planes may
    /// coincide.
    ///
    /// # Errors
    /// Returns [`MatrixError::DegenerateFrustum`] if `left == right`,
    /// `bottom == top` or `near == far`.
    ///
    /// ```
    /// use cuon_matrix::{Matrix4, MatrixError};
    /// let mut m = Matrix4::identity();
    /// assert_eq!(m.set_ortho(1.0, 1.0, 0.0, 1.0, 0.0, 1.0), Err(MatrixError::DegenerateFrustum));
    /// assert_eq!(m, Matrix4::identity());
    /// ```
    #[rustfmt::skip]
    pub fn set_ortho(
        &mut self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Result<&mut Self, MatrixError> {
        if left == right || bottom == top || near == far {
            return Err(degenerate("set_ortho"));
        }
        let rw = 1.0 / (right - left);
        let rh = 1.0 / (top - bottom);
        let rd = 1.0 / (far - near);

        Ok(self.set(&Self::new([
            2.0 * rw,              0.0,                   0.0,                 0.0,
            0.0,                   2.0 * rh,              0.0,                 0.0,
            0.0,                   0.0,                   -2.0 * rd,           0.0,
            -(right + left) * rw,  -(top + bottom) * rh,  -(far + near) * rd,  1.0,
        ])))
    }

    /// Right-multiplies by [`Matrix4::set_ortho`].
    ///
    /// # Errors
    /// Same as [`Matrix4::set_ortho`]; on error this matrix is unchanged.
    pub fn ortho(
        &mut self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Result<&mut Self, MatrixError> {
        let mut p = Self::identity();
        p.set_ortho(left, right, bottom, top, near, far)?;
        Ok(self.concat(&p))
    }

    /// Overwrites with a perspective frustum projection.
    ///
    /// Both `near` and `far` must be strictly positive.
    ///
    /// # Errors
    /// Returns [`MatrixError::DegenerateFrustum`] if a pair of opposing planes
    /// coincides, or [`MatrixError::InvalidNearFar`] if `near` or `far` is not
    /// strictly positive.
    #[rustfmt::skip]
    pub fn set_frustum(
        &mut self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Result<&mut Self, MatrixError> {
        if left == right || top == bottom || near == far {
            return Err(degenerate("set_frustum"));
        }
        check_near_far("set_frustum", near, far)?;
        let rw = 1.0 / (right - left);
        let rh = 1.0 / (top - bottom);
        let rd = 1.0 / (far - near);

        Ok(self.set(&Self::new([
            2.0 * near * rw,     0.0,                 0.0,                      0.0,
            0.0,                 2.0 * near * rh,     0.0,                      0.0,
            (right + left) * rw, (top + bottom) * rh, -(far + near) * rd,       -1.0,
            0.0,                 0.0,                 -2.0 * near * far * rd,   0.0,
        ])))
    }

    /// Right-multiplies by [`Matrix4::set_frustum`].
    ///
    /// # Errors
    /// Same as [`Matrix4::set_frustum`]; on error this matrix is unchanged.
    pub fn frustum(
        &mut self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Result<&mut Self, MatrixError> {
        let mut p = Self::identity();
        p.set_frustum(left, right, bottom, top, near, far)?;
        Ok(self.concat(&p))
    }

    /// Overwrites with a symmetric perspective projection.
    ///
    /// `fovy` is the vertical field of view in degrees and `aspect` is
    /// width / height.
    ///
    /// # Errors
    /// Returns [`MatrixError::DegenerateFrustum`] if `near == far`,
    /// `aspect == 0` or the field of view has a zero sine, and
    /// [`MatrixError::InvalidNearFar`] if `near` or `far` is not strictly
    /// positive.
    ///
    /// ```
    /// use cuon_matrix::{ClipPlane, Matrix4, MatrixError};
    /// let mut m = Matrix4::identity();
    /// assert_eq!(m.set_perspective(60.0, 0.0, 1.0, 10.0), Err(MatrixError::DegenerateFrustum));
    /// assert_eq!(
    ///     m.set_perspective(60.0, 1.0, -1.0, 10.0),
    ///     Err(MatrixError::InvalidNearFar { plane: ClipPlane::Near, value: -1.0 })
    /// );
    /// ```
    #[rustfmt::skip]
    pub fn set_perspective(
        &mut self,
        fovy: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Result<&mut Self, MatrixError> {
        if near == far || aspect == 0.0 {
            return Err(degenerate("set_perspective"));
        }
        check_near_far("set_perspective", near, far)?;
        let (s, c) = (deg_to_rad(fovy) / 2.0).sin_cos();
        if s == 0.0 {
            return Err(degenerate("set_perspective"));
        }
        let rd = 1.0 / (far - near);
        let ct = c / s;

        Ok(self.set(&Self::new([
            ct / aspect, 0.0, 0.0,                     0.0,
            0.0,         ct,  0.0,                     0.0,
            0.0,         0.0, -(far + near) * rd,      -1.0,
            0.0,         0.0, -2.0 * near * far * rd,  0.0,
        ])))
    }

    /// Right-multiplies by [`Matrix4::set_perspective`].
    ///
    /// # Errors
    /// Same as [`Matrix4::set_perspective`]; on error this matrix is unchanged.
    pub fn perspective(
        &mut self,
        fovy: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Result<&mut Self, MatrixError> {
        let mut p = Self::identity();
        p.set_perspective(fovy, aspect, near, far)?;
        Ok(self.concat(&p))
    }
}
