// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Fixed-size `f32` vectors and the column-major [`Matrix4`].
//!
//! Angles passed to the public builders are in degrees, like the OpenGL
//! helpers they replace; the conversion goes through [`deg_to_rad`].

use core::f32::consts::TAU;

mod mat4;
mod projection;
mod shadow;
mod transform;
mod vec3;
mod vec4;

pub use mat4::Matrix4;
pub use vec3::Vector3;
pub use vec4::Vector4;

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees with float32 precision.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}
