//! Compiled pipeline operations: direction-resolved, inspectable, executable.
//!
//! Transforms are the mutable, user-facing descriptions; the ops here are
//! what a pipeline holds once a build has resolved each effective direction.
//! An op stays inspectable (parameters plus direction) until
//! [`finalize`](Op::finalize) folds any inverse direction into its data,
//! after which it applies forward.

pub mod exponent;
pub mod matrix;

pub use exponent::{ExponentOp, ExponentOpData};
pub use matrix::{MatrixOp, MatrixOpData};

use crate::direction::Direction;
use crate::error::PipelineError;

/// A single compiled operation in a pipeline.
///
/// The set is closed; pipelines treat ops as opaque ordered elements and
/// only ever append them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// Per-channel power curve.
    Exponent(ExponentOp),
    /// Affine channel mix.
    Matrix(MatrixOp),
}

impl Op {
    /// Short lowercase name for logs and error context.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Exponent(_) => "exponent",
            Self::Matrix(_) => "matrix",
        }
    }

    /// The op's effective direction (forward once finalized).
    pub fn direction(&self) -> Direction {
        match self {
            Self::Exponent(op) => op.direction(),
            Self::Matrix(op) => op.direction(),
        }
    }

    /// True when applying this op cannot change any pixel.
    pub fn is_noop(&self) -> bool {
        match self {
            Self::Exponent(op) => op.is_noop(),
            Self::Matrix(op) => op.is_noop(),
        }
    }

    /// Folds an inverse direction into the op data. See the per-op finalize
    /// docs for the failure cases.
    pub fn finalize(&mut self) -> Result<(), PipelineError> {
        match self {
            Self::Exponent(op) => op.finalize(),
            Self::Matrix(op) => op.finalize(),
        }
    }

    /// Applies the finalized op to a buffer of RGBA pixels.
    pub fn apply(&self, pixels: &mut [[f32; 4]]) {
        match self {
            Self::Exponent(op) => op.apply(pixels),
            Self::Matrix(op) => op.apply(pixels),
        }
    }
}

impl From<ExponentOp> for Op {
    fn from(op: ExponentOp) -> Self {
        Self::Exponent(op)
    }
}

impl From<MatrixOp> for Op {
    fn from(op: MatrixOp) -> Self {
        Self::Matrix(op)
    }
}
