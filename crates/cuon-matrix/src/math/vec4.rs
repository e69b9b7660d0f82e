// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::Index;

use bytemuck::{Pod, Zeroable};

/// Four-component `f32` vector `(x, y, z, w)`.
///
/// Read-only once built; produced and consumed by
/// [`crate::Matrix4::multiply_vector4`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(C)]
pub struct Vector4 {
    data: [f32; 4],
}

impl Vector4 {
    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Copies up to four leading values of `src`; missing values are zero.
    ///
    /// ```
    /// use cuon_matrix::Vector4;
    /// let v = Vector4::from_slice(&[1.0, 2.0, 3.0, 4.0, 3.0]);
    /// assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn from_slice(src: &[f32]) -> Self {
        let mut data = [0.0; 4];
        for (dst, value) in data.iter_mut().zip(src) {
            *dst = *value;
        }
        Self { data }
    }

    /// X component.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    /// W component.
    pub fn w(&self) -> f32 {
        self.data[3]
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 4] {
        self.data
    }

    /// Borrows the components.
    pub fn elements(&self) -> &[f32; 4] {
        &self.data
    }
}

impl From<[f32; 4]> for Vector4 {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl From<Vector4> for [f32; 4] {
    fn from(value: Vector4) -> Self {
        value.data
    }
}

impl Index<usize> for Vector4 {
    type Output = f32;
    fn index(&self, idx: usize) -> &f32 {
        &self.data[idx]
    }
}
