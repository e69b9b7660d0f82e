// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Index, IndexMut};

use bytemuck::{Pod, Zeroable};

/// Three-component `f32` vector `(x, y, z)`.
///
/// * Owns its storage; constructors copy their input.
/// * [`Vector3::normalize`] mutates in place and returns `&mut Self` so it can
///   be chained.
/// * Use [`crate::Matrix4::multiply_vector3`] to transform it as a point
///   (homogeneous `w = 1`).
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(C)]
pub struct Vector3 {
    data: [f32; 3],
}

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// Copies up to three leading values of `src`.
    ///
    /// Extra values are ignored and missing ones are zero.
    ///
    /// ```
    /// use cuon_matrix::Vector3;
    /// assert_eq!(Vector3::from_slice(&[1.0, 2.0, 3.0, 4.0]).to_array(), [1.0, 2.0, 3.0]);
    /// assert_eq!(Vector3::from_slice(&[1.0]).to_array(), [1.0, 0.0, 0.0]);
    /// ```
    pub fn from_slice(src: &[f32]) -> Self {
        let mut data = [0.0; 3];
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

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 3] {
        self.data
    }

    /// Borrows the components.
    pub fn elements(&self) -> &[f32; 3] {
        &self.data
    }

    /// Mutably borrows the components.
    pub fn elements_mut(&mut self) -> &mut [f32; 3] {
        &mut self.data
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.data[0] * other.data[0] + self.data[1] * other.data[1] + self.data[2] * other.data[2]
    }

    /// Cross product `self × other`.
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Normalises the vector in place.
    ///
    /// A zero-length vector stays zero rather than turning into NaN, and a
    /// vector whose length is exactly `1.0` is left untouched.
    ///
    /// ```
    /// use cuon_matrix::Vector3;
    /// let mut v = Vector3::new(3.0, 0.0, 4.0);
    /// v.normalize();
    /// assert_eq!(v.to_array(), [0.6, 0.0, 0.8]);
    /// ```
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        if len == 0.0 {
            self.data = [0.0; 3];
            return self;
        }
        if len == 1.0 {
            return self;
        }
        let inv = 1.0 / len;
        for c in &mut self.data {
            *c *= inv;
        }
        self
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(value: Vector3) -> Self {
        value.data
    }
}

impl Index<usize> for Vector3 {
    type Output = f32;
    fn index(&self, idx: usize) -> &f32 {
        &self.data[idx]
    }
}

impl IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, idx: usize) -> &mut f32 {
        &mut self.data[idx]
    }
}
