//! User-facing description of an affine channel mix.
//!
//! ```text
//! out = M * in + offset
//! ```
//!
//! Follows the same conventions as the exponent transform: value semantics,
//! setters tolerant of absent input, and no numeric checks until the
//! pipeline is finalized (a singular matrix under an inverse direction is
//! only rejected there).

use std::fmt;

use glam::{Mat4, Vec4};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::direction::Direction;
use crate::error::PipelineError;
use crate::ops::{MatrixOp, MatrixOpData};
use crate::pipeline::Pipeline;

/// Affine matrix transform description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatrixTransform {
    #[serde(default)]
    data: MatrixOpData,
    #[serde(default)]
    direction: Direction,
}

impl MatrixTransform {
    /// Creates an identity transform: unit matrix, zero offset, forward.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn matrix(&self) -> Mat4 {
        self.data.matrix
    }

    /// Replaces the matrix. Passing `None` leaves the transform unchanged.
    pub fn set_matrix(&mut self, matrix: Option<Mat4>) {
        if let Some(matrix) = matrix {
            self.data.matrix = matrix;
        }
    }

    pub fn offset(&self) -> Vec4 {
        self.data.offset
    }

    /// Replaces the offset. Passing `None` leaves the transform unchanged.
    pub fn set_offset(&mut self, offset: Option<Vec4>) {
        if let Some(offset) = offset {
            self.data.offset = offset;
        }
    }

    /// Checks the transform description for structural problems.
    ///
    /// Invertibility is deliberately not checked here; see the module docs.
    pub fn validate(&self) -> Result<(), PipelineError> {
        Ok(())
    }
}

impl fmt::Display for MatrixTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<MatrixTransform direction={}, matrix=", self.direction)?;
        for (i, v) in self.data.matrix.to_cols_array().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str(", offset=")?;
        for (i, v) in self.data.offset.to_array().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str(">")
    }
}

/// Appends the single op realizing `transform` to `pipeline`.
pub fn build_matrix_ops(
    pipeline: &mut Pipeline,
    _config: &Config,
    transform: &MatrixTransform,
    direction: Direction,
) {
    let combined = direction.combine(transform.direction());
    let data = MatrixOpData::new(transform.matrix(), transform.offset());
    pipeline.push(MatrixOp::new(data, combined).into());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::Op;

    #[test]
    fn test_new_is_forward_identity() {
        let transform = MatrixTransform::new();
        assert_eq!(transform.direction(), Direction::Forward);
        assert_eq!(transform.matrix(), Mat4::IDENTITY);
        assert_eq!(transform.offset(), Vec4::ZERO);
    }

    #[test]
    fn test_set_matrix_none_is_a_noop() {
        let mut transform = MatrixTransform::new();
        transform.set_matrix(Some(Mat4::from_scale(glam::Vec3::splat(2.0))));
        let before = transform.matrix();
        transform.set_matrix(None);
        assert_eq!(transform.matrix(), before);
    }

    #[test]
    fn test_set_offset_roundtrips() {
        let mut transform = MatrixTransform::new();
        transform.set_offset(Some(Vec4::new(0.1, 0.2, 0.3, 0.0)));
        assert_eq!(transform.offset(), Vec4::new(0.1, 0.2, 0.3, 0.0));
        transform.set_offset(None);
        assert_eq!(transform.offset(), Vec4::new(0.1, 0.2, 0.3, 0.0));
    }

    #[test]
    fn test_display_default_state() {
        let transform = MatrixTransform::new();
        assert_eq!(
            transform.to_string(),
            "<MatrixTransform direction=forward, \
             matrix=1 0 0 0 0 1 0 0 0 0 1 0 0 0 0 1, offset=0 0 0 0>"
        );
    }

    #[test]
    fn test_build_combines_directions_before_instantiating() {
        let mut transform = MatrixTransform::new();
        transform.set_direction(Direction::Inverse);
        transform.set_offset(Some(Vec4::new(0.5, 0.5, 0.5, 0.0)));

        let mut pipeline = Pipeline::new();
        build_matrix_ops(
            &mut pipeline,
            &Config::new(),
            &transform,
            Direction::Forward,
        );

        assert_eq!(pipeline.len(), 1);
        let Op::Matrix(op) = &pipeline.ops()[0] else {
            panic!("expected a matrix op");
        };
        assert_eq!(op.direction(), Direction::Inverse);
        assert_eq!(op.data().offset, Vec4::new(0.5, 0.5, 0.5, 0.0));
    }
}
