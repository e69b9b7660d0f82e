// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Affine builders: scale, translation, rotation and the look-at view matrix.

use crate::math::{deg_to_rad, Matrix4, Vector3};

impl Matrix4 {
    /// Overwrites with a non-uniform scale matrix.
    #[rustfmt::skip]
    pub fn set_scale(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.set(&Self::new([
            x,   0.0, 0.0, 0.0, // col 0
            0.0, y,   0.0, 0.0, // col 1
            0.0, 0.0, z,   0.0, // col 2
            0.0, 0.0, 0.0, 1.0, // col 3
        ]))
    }

    /// Right-multiplies by a scale matrix.
    ///
    /// Equivalent to `concat` with [`Matrix4::set_scale`], but only columns
    /// 0..2 are touched.
    pub fn scale(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        let e = self.elements_mut();
        for row in 0..4 {
            e[row] *= x;
            e[row + 4] *= y;
            e[row + 8] *= z;
        }
        self
    }

    /// Overwrites with a translation matrix; translation occupies column 3.
    #[rustfmt::skip]
    pub fn set_translate(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.set(&Self::new([
            1.0, 0.0, 0.0, 0.0, // col 0
            0.0, 1.0, 0.0, 0.0, // col 1
            0.0, 0.0, 1.0, 0.0, // col 2
            x,   y,   z,   1.0, // col 3 (translation)
        ]))
    }

    /// Right-multiplies by a translation matrix, updating column 3 in place.
    ///
    /// ```
    /// use cuon_matrix::{Matrix4, Vector3};
    /// let mut m = Matrix4::identity();
    /// m.set_scale(2.0, 2.0, 2.0).translate(1.0, 0.0, 0.0);
    /// // translation happens first, then the scale
    /// assert_eq!(m.multiply_vector3(&Vector3::ZERO).to_array(), [2.0, 0.0, 0.0]);
    /// ```
    pub fn translate(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        let e = self.elements_mut();
        for row in 0..4 {
            e[row + 12] += e[row] * x + e[row + 4] * y + e[row + 8] * z;
        }
        self
    }

    /// Overwrites with a rotation of `angle` degrees about the axis `(x, y, z)`.
    ///
    /// The axis need not be unit length. An axis lying exactly on X, Y or Z
    /// takes a dedicated path; a negative axis flips the rotation direction.
    #[rustfmt::skip]
    pub fn set_rotate(&mut self, angle: f32, x: f32, y: f32, z: f32) -> &mut Self {
        let (mut s, c) = deg_to_rad(angle).sin_cos();

        let data = match (x != 0.0, y != 0.0, z != 0.0) {
            (true, false, false) => {
                if x < 0.0 {
                    s = -s;
                }
                [
                    1.0, 0.0, 0.0, 0.0,
                    0.0, c,   s,   0.0,
                    0.0, -s,  c,   0.0,
                    0.0, 0.0, 0.0, 1.0,
                ]
            }
            (false, true, false) => {
                if y < 0.0 {
                    s = -s;
                }
                [
                    c,   0.0, -s,  0.0,
                    0.0, 1.0, 0.0, 0.0,
                    s,   0.0, c,   0.0,
                    0.0, 0.0, 0.0, 1.0,
                ]
            }
            (false, false, true) => {
                if z < 0.0 {
                    s = -s;
                }
                [
                    c,   s,   0.0, 0.0,
                    -s,  c,   0.0, 0.0,
                    0.0, 0.0, 1.0, 0.0,
                    0.0, 0.0, 0.0, 1.0,
                ]
            }
            _ => rodrigues(x, y, z, s, c),
        };
        self.set(&Self::new(data))
    }

    /// Right-multiplies by a rotation of `angle` degrees about `(x, y, z)`.
    pub fn rotate(&mut self, angle: f32, x: f32, y: f32, z: f32) -> &mut Self {
        let mut r = Self::identity();
        r.set_rotate(angle, x, y, z);
        self.concat(&r)
    }

    /// Overwrites with a view matrix looking from `eye` towards `center`.
    ///
    /// The rotation rows are the side, true-up and negated forward axes; the
    /// eye offset is then applied with [`Matrix4::translate`]. `eye == center`
    /// or `up` parallel to the view direction yields non-finite elements.
    ///
    /// ```
    /// use cuon_matrix::{Matrix4, Vector3};
    /// let mut view = Matrix4::identity();
    /// view.set_look_at(
    ///     Vector3::new(0.0, 0.0, 5.0),
    ///     Vector3::ZERO,
    ///     Vector3::new(0.0, 1.0, 0.0),
    /// );
    /// let p = view.multiply_vector3(&Vector3::ZERO);
    /// assert_eq!(p.to_array(), [0.0, 0.0, -5.0]);
    /// ```
    #[rustfmt::skip]
    pub fn set_look_at(&mut self, eye: Vector3, center: Vector3, up: Vector3) -> &mut Self {
        let mut f = Vector3::new(center.x() - eye.x(), center.y() - eye.y(), center.z() - eye.z());
        scale_by_inverse_length(&mut f);
        let mut s = f.cross(&up);
        scale_by_inverse_length(&mut s);
        let u = s.cross(&f);

        self.set(&Self::new([
            s.x(), u.x(), -f.x(), 0.0,
            s.y(), u.y(), -f.y(), 0.0,
            s.z(), u.z(), -f.z(), 0.0,
            0.0,   0.0,   0.0,    1.0,
        ]))
        .translate(-eye.x(), -eye.y(), -eye.z())
    }

    /// Right-multiplies by the view matrix of [`Matrix4::set_look_at`].
    pub fn look_at(&mut self, eye: Vector3, center: Vector3, up: Vector3) -> &mut Self {
        let mut view = Self::identity();
        view.set_look_at(eye, center, up);
        self.concat(&view)
    }
}

/// Axis-angle rotation for an arbitrary axis, normalising it unless its
/// length is exactly one.
fn rodrigues(mut x: f32, mut y: f32, mut z: f32, s: f32, c: f32) -> [f32; 16] {
    let len = (x * x + y * y + z * z).sqrt();
    if len != 1.0 {
        let rlen = 1.0 / len;
        x *= rlen;
        y *= rlen;
        z *= rlen;
    }
    let nc = 1.0 - c;
    let (xy, yz, zx) = (x * y, y * z, z * x);
    let (xs, ys, zs) = (x * s, y * s, z * s);
    [
        x * x * nc + c,
        xy * nc + zs,
        zx * nc - ys,
        0.0,
        xy * nc - zs,
        y * y * nc + c,
        yz * nc + xs,
        0.0,
        zx * nc + ys,
        yz * nc - xs,
        z * z * nc + c,
        0.0,
        0.0,
        0.0,
        0.0,
        1.0,
    ]
}

// Unlike `Vector3::normalize`, a zero vector is not special-cased: the view
// basis degenerates to non-finite values.
fn scale_by_inverse_length(v: &mut Vector3) {
    let r = 1.0 / v.length();
    for c in v.elements_mut() {
        *c *= r;
    }
}
