// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::{Matrix4, Vector3};

impl Matrix4 {
    /// Right-multiplies by a planar shadow projection.
    ///
    /// `plane` is `(A, B, C, D)` for `Ax + By + Cz + D = 0`. `light` is a
    /// homogeneous light position; `light[3] == 0` makes it a direction.
    /// Geometry transformed by the result is flattened onto the plane along
    /// the light rays.
    ///
    /// ```
    /// use cuon_matrix::{Matrix4, Vector4};
    /// let mut m = Matrix4::identity();
    /// // ground plane y = 0, light straight above
    /// m.drop_shadow([0.0, 1.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0]);
    /// let p = m.multiply_vector4(&Vector4::new(1.0, 5.0, 2.0, 1.0));
    /// assert_eq!(p.to_array(), [1.0, 0.0, 2.0, 1.0]);
    /// ```
    pub fn drop_shadow(&mut self, plane: [f32; 4], light: [f32; 4]) -> &mut Self {
        let dot = plane.iter().zip(&light).map(|(p, l)| p * l).sum::<f32>();
        let mut shadow = [0.0; 16];
        for col in 0..4 {
            for row in 0..4 {
                let term = -light[row] * plane[col];
                shadow[col * 4 + row] = if row == col { dot + term } else { term };
            }
        }
        self.concat(&Self::new(shadow))
    }

    /// Right-multiplies by a shadow projection onto the plane through
    /// `plane_point` with normal `normal`, lit from direction `light_dir`.
    pub fn drop_shadow_directionally(
        &mut self,
        normal: Vector3,
        plane_point: Vector3,
        light_dir: Vector3,
    ) -> &mut Self {
        let d = plane_point.dot(&normal);
        self.drop_shadow(
            [normal.x(), normal.y(), normal.z(), -d],
            [light_dir.x(), light_dir.y(), light_dir.z(), 0.0],
        )
    }
}
