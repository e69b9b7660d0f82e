// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Index, IndexMut, Mul, MulAssign};

use bytemuck::{Pod, Zeroable};
use tracing::debug;

use crate::error::MatrixError;
use crate::math::{Vector3, Vector4};

const IDENTITY: [f32; 16] = [
    1.0, 0.0, 0.0, 0.0, // col 0
    0.0, 1.0, 0.0, 0.0, // col 1
    0.0, 0.0, 1.0, 0.0, // col 2
    0.0, 0.0, 0.0, 1.0, // col 3
];

/// Column‑major 4×4 matrix behaving like an OpenGL matrix stack entry.
///
/// - Element `col * 4 + row` holds row `row`, column `col`; the layout is
///   uploaded verbatim, see [`Matrix4::as_bytes`].
/// - `set_*` methods overwrite the whole matrix. The other transform methods
///   right‑multiply (`self = self * T`), so the transform added last is the
///   first one applied to a vertex.
/// - Mutators return `&mut Self` for chaining; fallible builders return
///   `Result<&mut Self, MatrixError>` and never write on failure.
///
/// # Examples
/// ```
/// use cuon_matrix::{Matrix4, Vector3};
/// let mut m = Matrix4::identity();
/// m.set_scale(2.0, 3.0, 4.0);
/// let v = m.multiply_vector3(&Vector3::new(1.0, 1.0, 1.0));
/// assert_eq!(v.to_array(), [2.0, 3.0, 4.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(C)]
pub struct Matrix4 {
    data: [f32; 16],
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix4 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self { data: IDENTITY }
    }

    /// Creates a matrix from column-major array data.
    pub const fn new(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Returns the matrix as a column‑major array.
    pub fn to_array(self) -> [f32; 16] {
        self.data
    }

    /// Borrows the column-major elements.
    pub fn elements(&self) -> &[f32; 16] {
        &self.data
    }

    /// Mutably borrows the column-major elements.
    pub fn elements_mut(&mut self) -> &mut [f32; 16] {
        &mut self.data
    }

    /// The 64 bytes of the column-major elements, ready for a uniform upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Element at `row`, `col`.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[col * 4 + row]
    }

    /// Overwrites every element with the identity matrix.
    pub fn set_identity(&mut self) -> &mut Self {
        self.data = IDENTITY;
        self
    }

    /// Copies `src` into this matrix.
    pub fn set(&mut self, src: &Self) -> &mut Self {
        self.data = src.data;
        self
    }

    /// Right-multiplies by `other` (`self = self * other`).
    ///
    /// Both operands are copied before the first write.
    ///
    /// ```
    /// use cuon_matrix::Matrix4;
    /// let mut m = Matrix4::identity();
    /// let mut s = Matrix4::identity();
    /// s.set_scale(2.0, 3.0, 4.0);
    /// m.concat(&s);
    /// assert_eq!(m, s);
    /// ```
    pub fn concat(&mut self, other: &Self) -> &mut Self {
        let a = self.data;
        let b = other.data;
        let e = &mut self.data;
        for i in 0..4 {
            let (ai0, ai1, ai2, ai3) = (a[i], a[i + 4], a[i + 8], a[i + 12]);
            e[i] = ai0 * b[0] + ai1 * b[1] + ai2 * b[2] + ai3 * b[3];
            e[i + 4] = ai0 * b[4] + ai1 * b[5] + ai2 * b[6] + ai3 * b[7];
            e[i + 8] = ai0 * b[8] + ai1 * b[9] + ai2 * b[10] + ai3 * b[11];
            e[i + 12] = ai0 * b[12] + ai1 * b[13] + ai2 * b[14] + ai3 * b[15];
        }
        self
    }

    /// Alias of [`Matrix4::concat`].
    pub fn multiply(&mut self, other: &Self) -> &mut Self {
        self.concat(other)
    }

    /// Multiplies the matrix by itself (`self = self * self`).
    pub fn square(&mut self) -> &mut Self {
        let snapshot = *self;
        self.concat(&snapshot)
    }

    /// Transforms `pos` as a point (`w = 1`), returning a new vector.
    ///
    /// Translation is applied; the fourth row is ignored, so there is no
    /// perspective divide.
    pub fn multiply_vector3(&self, pos: &Vector3) -> Vector3 {
        let e = &self.data;
        let [x, y, z] = pos.to_array();
        Vector3::new(
            x * e[0] + y * e[4] + z * e[8] + e[12],
            x * e[1] + y * e[5] + z * e[9] + e[13],
            x * e[2] + y * e[6] + z * e[10] + e[14],
        )
    }

    /// Full homogeneous transform of `pos`, returning a new vector.
    pub fn multiply_vector4(&self, pos: &Vector4) -> Vector4 {
        let e = &self.data;
        let [x, y, z, w] = pos.to_array();
        Vector4::new(
            x * e[0] + y * e[4] + z * e[8] + w * e[12],
            x * e[1] + y * e[5] + z * e[9] + w * e[13],
            x * e[2] + y * e[6] + z * e[10] + w * e[14],
            x * e[3] + y * e[7] + z * e[11] + w * e[15],
        )
    }

    /// Transposes the matrix in place.
    pub fn transpose(&mut self) -> &mut Self {
        let e = &mut self.data;
        e.swap(1, 4);
        e.swap(2, 8);
        e.swap(3, 12);
        e.swap(6, 9);
        e.swap(7, 13);
        e.swap(11, 14);
        self
    }

    /// Determinant, by cofactor expansion along the first column.
    pub fn determinant(&self) -> f32 {
        adjugate(&self.data).1
    }

    /// Stores the inverse of `other` in this matrix.
    ///
    /// A singular `other` (determinant exactly zero) leaves this matrix
    /// unchanged; use [`Matrix4::try_set_inverse_of`] to detect that case.
    pub fn set_inverse_of(&mut self, other: &Self) -> &mut Self {
        if self.try_set_inverse_of(other).is_err() {
            debug!("set_inverse_of: singular matrix, destination left unchanged");
        }
        self
    }

    /// Stores the inverse of `other`, or reports [`MatrixError::SingularMatrix`]
    /// without touching this matrix.
    ///
    /// # Errors
    /// Returns [`MatrixError::SingularMatrix`] if the determinant of `other`
    /// is exactly zero.
    pub fn try_set_inverse_of(&mut self, other: &Self) -> Result<&mut Self, MatrixError> {
        let (inv, det) = adjugate(&other.data);
        if det == 0.0 {
            return Err(MatrixError::SingularMatrix);
        }
        let rdet = 1.0 / det;
        for (d, v) in self.data.iter_mut().zip(inv) {
            *d = v * rdet;
        }
        Ok(self)
    }

    /// Inverts the matrix in place; a singular matrix is left unchanged.
    ///
    /// ```
    /// use cuon_matrix::{Matrix4, Vector3};
    /// let mut m = Matrix4::identity();
    /// m.set_translate(1.0, 2.0, 3.0).invert();
    /// let p = m.multiply_vector3(&Vector3::new(1.0, 2.0, 3.0));
    /// assert_eq!(p.to_array(), [0.0, 0.0, 0.0]);
    /// ```
    pub fn invert(&mut self) -> &mut Self {
        let snapshot = *self;
        self.set_inverse_of(&snapshot)
    }

    /// Inverts the matrix in place, or reports [`MatrixError::SingularMatrix`].
    ///
    /// # Errors
    /// Returns [`MatrixError::SingularMatrix`] if the determinant is exactly
    /// zero; the matrix is left unchanged.
    pub fn try_invert(&mut self) -> Result<&mut Self, MatrixError> {
        let snapshot = *self;
        self.try_set_inverse_of(&snapshot)
    }
}

/// Adjugate (transposed cofactor matrix) of `s`, plus its determinant.
#[rustfmt::skip]
fn adjugate(s: &[f32; 16]) -> ([f32; 16], f32) {
    let mut inv = [0.0; 16];

    inv[0] = s[5] * s[10] * s[15] - s[5] * s[11] * s[14] - s[9] * s[6] * s[15]
        + s[9] * s[7] * s[14] + s[13] * s[6] * s[11] - s[13] * s[7] * s[10];
    inv[4] = -s[4] * s[10] * s[15] + s[4] * s[11] * s[14] + s[8] * s[6] * s[15]
        - s[8] * s[7] * s[14] - s[12] * s[6] * s[11] + s[12] * s[7] * s[10];
    inv[8] = s[4] * s[9] * s[15] - s[4] * s[11] * s[13] - s[8] * s[5] * s[15]
        + s[8] * s[7] * s[13] + s[12] * s[5] * s[11] - s[12] * s[7] * s[9];
    inv[12] = -s[4] * s[9] * s[14] + s[4] * s[10] * s[13] + s[8] * s[5] * s[14]
        - s[8] * s[6] * s[13] - s[12] * s[5] * s[10] + s[12] * s[6] * s[9];

    inv[1] = -s[1] * s[10] * s[15] + s[1] * s[11] * s[14] + s[9] * s[2] * s[15]
        - s[9] * s[3] * s[14] - s[13] * s[2] * s[11] + s[13] * s[3] * s[10];
    inv[5] = s[0] * s[10] * s[15] - s[0] * s[11] * s[14] - s[8] * s[2] * s[15]
        + s[8] * s[3] * s[14] + s[12] * s[2] * s[11] - s[12] * s[3] * s[10];
    inv[9] = -s[0] * s[9] * s[15] + s[0] * s[11] * s[13] + s[8] * s[1] * s[15]
        - s[8] * s[3] * s[13] - s[12] * s[1] * s[11] + s[12] * s[3] * s[9];
    inv[13] = s[0] * s[9] * s[14] - s[0] * s[10] * s[13] - s[8] * s[1] * s[14]
        + s[8] * s[2] * s[13] + s[12] * s[1] * s[10] - s[12] * s[2] * s[9];

    inv[2] = s[1] * s[6] * s[15] - s[1] * s[7] * s[14] - s[5] * s[2] * s[15]
        + s[5] * s[3] * s[14] + s[13] * s[2] * s[7] - s[13] * s[3] * s[6];
    inv[6] = -s[0] * s[6] * s[15] + s[0] * s[7] * s[14] + s[4] * s[2] * s[15]
        - s[4] * s[3] * s[14] - s[12] * s[2] * s[7] + s[12] * s[3] * s[6];
    inv[10] = s[0] * s[5] * s[15] - s[0] * s[7] * s[13] - s[4] * s[1] * s[15]
        + s[4] * s[3] * s[13] + s[12] * s[1] * s[7] - s[12] * s[3] * s[5];
    inv[14] = -s[0] * s[5] * s[14] + s[0] * s[6] * s[13] + s[4] * s[1] * s[14]
        - s[4] * s[2] * s[13] - s[12] * s[1] * s[6] + s[12] * s[2] * s[5];

    inv[3] = -s[1] * s[6] * s[11] + s[1] * s[7] * s[10] + s[5] * s[2] * s[11]
        - s[5] * s[3] * s[10] - s[9] * s[2] * s[7] + s[9] * s[3] * s[6];
    inv[7] = s[0] * s[6] * s[11] - s[0] * s[7] * s[10] - s[4] * s[2] * s[11]
        + s[4] * s[3] * s[10] + s[8] * s[2] * s[7] - s[8] * s[3] * s[6];
    inv[11] = -s[0] * s[5] * s[11] + s[0] * s[7] * s[9] + s[4] * s[1] * s[11]
        - s[4] * s[3] * s[9] - s[8] * s[1] * s[7] + s[8] * s[3] * s[5];
    inv[15] = s[0] * s[5] * s[10] - s[0] * s[6] * s[9] - s[4] * s[1] * s[10]
        + s[4] * s[2] * s[9] + s[8] * s[1] * s[6] - s[8] * s[2] * s[5];

    let det = s[0] * inv[0] + s[1] * inv[4] + s[2] * inv[8] + s[3] * inv[12];
    (inv, det)
}

impl From<[f32; 16]> for Matrix4 {
    fn from(value: [f32; 16]) -> Self {
        Self { data: value }
    }
}

impl From<Matrix4> for [f32; 16] {
    fn from(value: Matrix4) -> Self {
        value.data
    }
}

impl Index<usize> for Matrix4 {
    type Output = f32;
    fn index(&self, idx: usize) -> &f32 {
        &self.data[idx]
    }
}

impl IndexMut<usize> for Matrix4 {
    fn index_mut(&mut self, idx: usize) -> &mut f32 {
        &mut self.data[idx]
    }
}

impl Mul for Matrix4 {
    type Output = Self;
    fn mul(mut self, rhs: Self) -> Self::Output {
        self.concat(&rhs);
        self
    }
}

impl MulAssign for Matrix4 {
    fn mul_assign(&mut self, rhs: Self) {
        self.concat(&rhs);
    }
}

impl MulAssign<&Self> for Matrix4 {
    fn mul_assign(&mut self, rhs: &Self) {
        self.concat(rhs);
    }
}

impl Mul<Vector3> for Matrix4 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        self.multiply_vector3(&rhs)
    }
}

impl Mul<Vector4> for Matrix4 {
    type Output = Vector4;
    fn mul(self, rhs: Vector4) -> Vector4 {
        self.multiply_vector4(&rhs)
    }
}
