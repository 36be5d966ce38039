//! Matrix operation: affine RGBA channel mix.
//!
//! ```text
//! out = M * in + offset
//! ```
//!
//! The inverse operation solves for `in`: `M' = M^-1`, `offset' = -(M^-1 * offset)`.
//! Inversion fails when `M` is singular.

use glam::{Mat4, Vec4};
use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::error::PipelineError;

/// Determinant magnitude below which a matrix is treated as singular.
const SINGULAR_EPSILON: f32 = 1e-10;

/// Direction-agnostic parameters of a matrix operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatrixOpData {
    /// 4x4 channel mixing matrix (column-major, as glam stores it).
    pub matrix: Mat4,
    /// Per-channel offset added after the matrix.
    pub offset: Vec4,
}

impl MatrixOpData {
    /// Identity parameters: identity matrix, zero offset.
    pub const fn identity() -> Self {
        Self {
            matrix: Mat4::IDENTITY,
            offset: Vec4::ZERO,
        }
    }

    pub fn new(matrix: Mat4, offset: Vec4) -> Self {
        Self { matrix, offset }
    }

    /// True when applying these parameters changes nothing.
    pub fn is_identity(&self) -> bool {
        self.matrix == Mat4::IDENTITY && self.offset == Vec4::ZERO
    }

    /// Parameters of the inverse operation.
    pub fn inverted(&self) -> Result<Self, PipelineError> {
        if self.matrix.determinant().abs() < SINGULAR_EPSILON {
            return Err(PipelineError::SingularMatrix);
        }
        let inverse = self.matrix.inverse();
        Ok(Self {
            matrix: inverse,
            offset: -(inverse * self.offset),
        })
    }
}

impl Default for MatrixOpData {
    fn default() -> Self {
        Self::identity()
    }
}

/// A compiled matrix operation: parameters plus resolved direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixOp {
    data: MatrixOpData,
    direction: Direction,
}

impl MatrixOp {
    pub fn new(data: MatrixOpData, direction: Direction) -> Self {
        Self { data, direction }
    }

    pub fn data(&self) -> &MatrixOpData {
        &self.data
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// True when this op cannot change any pixel.
    pub fn is_noop(&self) -> bool {
        self.data.is_identity()
    }

    /// Folds an inverse direction into the parameters.
    ///
    /// This is where a singular matrix deferred at build time surfaces as an
    /// error.
    pub fn finalize(&mut self) -> Result<(), PipelineError> {
        if self.direction == Direction::Inverse {
            self.data = self.data.inverted()?;
            self.direction = Direction::Forward;
        }
        Ok(())
    }

    /// Applies the affine mix to a buffer of RGBA pixels.
    ///
    /// Finalize first: the stored matrix is applied as-is and the direction
    /// flag is not consulted here.
    pub fn apply(&self, pixels: &mut [[f32; 4]]) {
        for px in pixels {
            let v = Vec4::from_array(*px);
            *px = (self.data.matrix * v + self.data.offset).to_array();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    const EPSILON: f32 = 1e-6;

    fn assert_close4(actual: [f32; 4], expected: [f32; 4]) {
        for c in 0..4 {
            assert!(
                (actual[c] - expected[c]).abs() < EPSILON,
                "channel {c}: {:.8} vs {:.8}",
                actual[c],
                expected[c]
            );
        }
    }

    #[test]
    fn test_default_data_is_identity() {
        let data = MatrixOpData::default();
        assert!(data.is_identity());
    }

    #[test]
    fn test_offset_alone_is_not_identity() {
        let data = MatrixOpData::new(Mat4::IDENTITY, Vec4::new(0.1, 0.0, 0.0, 0.0));
        assert!(!data.is_identity());
    }

    #[test]
    fn test_inverted_scale_is_reciprocal_scale() {
        let data = MatrixOpData::new(Mat4::from_scale(Vec3::splat(2.0)), Vec4::ZERO);
        let inv = data.inverted().expect("invertible scale");
        let mut px = [[0.5_f32, 0.5, 0.5, 1.0]];
        MatrixOp::new(inv, Direction::Forward).apply(&mut px);
        assert_close4(px[0], [0.25, 0.25, 0.25, 1.0]);
    }

    #[test]
    fn test_inverted_undoes_offset() {
        let data = MatrixOpData::new(
            Mat4::from_scale(Vec3::splat(2.0)),
            Vec4::new(0.1, 0.2, 0.3, 0.0),
        );
        let inv = data.inverted().expect("invertible matrix");

        let original = [[0.4_f32, 0.5, 0.6, 1.0]];
        let mut px = original;
        MatrixOp::new(data, Direction::Forward).apply(&mut px);
        MatrixOp::new(inv, Direction::Forward).apply(&mut px);
        assert_close4(px[0], original[0]);
    }

    #[test]
    fn test_inverted_rejects_singular_matrix() {
        let data = MatrixOpData::new(Mat4::ZERO, Vec4::ZERO);
        assert!(matches!(
            data.inverted().unwrap_err(),
            PipelineError::SingularMatrix
        ));
    }

    #[test]
    fn test_finalize_folds_inverse_into_data() {
        let data = MatrixOpData::new(Mat4::from_scale(Vec3::splat(4.0)), Vec4::ZERO);
        let mut op = MatrixOp::new(data, Direction::Inverse);
        op.finalize().expect("invertible op");
        assert_eq!(op.direction(), Direction::Forward);

        let mut px = [[1.0_f32, 1.0, 1.0, 1.0]];
        op.apply(&mut px);
        assert_close4(px[0], [0.25, 0.25, 0.25, 1.0]);
    }

    #[test]
    fn test_apply_mixes_and_offsets_channels() {
        let data = MatrixOpData::new(
            Mat4::from_scale(Vec3::new(2.0, 1.0, 0.5)),
            Vec4::new(0.0, 0.1, 0.0, 0.0),
        );
        let op = MatrixOp::new(data, Direction::Forward);
        let mut px = [[0.5_f32, 0.5, 0.5, 1.0]];
        op.apply(&mut px);
        assert_close4(px[0], [1.0, 0.6, 0.25, 1.0]);
    }
}
