// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! cuon-matrix: OpenGL-style matrix helpers for model/view/projection pipelines.
//!
//! [`Matrix4`] mirrors the classic fixed-function matrix stack: `set_*`
//! builders overwrite the matrix, while the bare transform names (`translate`,
//! `rotate`, `perspective`, ...) right-multiply the current matrix so the most
//! recently added transform is the first one applied to a vertex.
//!
//! Storage is column-major `f32` throughout and is part of the public
//! contract; [`Matrix4::as_bytes`] hands the exact layout to a GPU uniform.
//!
//! ```
//! use cuon_matrix::{Matrix4, MatrixError, Vector3};
//!
//! # fn main() -> Result<(), MatrixError> {
//! let mut mvp = Matrix4::identity();
//! mvp.set_perspective(30.0, 1.0, 1.0, 100.0)?
//!     .look_at(
//!         Vector3::new(3.0, 3.0, 7.0),
//!         Vector3::new(0.0, 0.0, 0.0),
//!         Vector3::new(0.0, 1.0, 0.0),
//!     )
//!     .rotate(45.0, 0.0, 1.0, 0.0);
//! assert_eq!(mvp.as_bytes().len(), 64);
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]
// Lint levels live in `[workspace.lints]`.

mod error;

/// Vector and matrix types (Vector3, Vector4, Matrix4) plus angle helpers.
pub mod math;

pub use error::{ClipPlane, MatrixError};
pub use math::{Matrix4, Vector3, Vector4};
