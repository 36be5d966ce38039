//! Chromaflow Core: color transform descriptions compiled into executable
//! pipelines.
//!
//! Transforms are plain editable values describing what should happen to an
//! image. Building walks a transform tree, resolves every direction against
//! its enclosing context, and appends ops to a [`Pipeline`]; finalizing the
//! pipeline yields a [`CpuProcessor`] that pushes pixels through the chain.
//! No GPU or framework dependencies.

pub mod config;
pub mod direction;
pub mod error;
pub mod ops;
pub mod pipeline;
pub mod transforms;

// Re-exports for convenience. glam is re-exported because its types appear
// in the public matrix APIs.
pub use config::Config;
pub use direction::Direction;
pub use error::PipelineError;
pub use glam;
pub use ops::{ExponentOp, ExponentOpData, MatrixOp, MatrixOpData, Op};
pub use pipeline::{CpuProcessor, Pipeline};
pub use transforms::{
    ExponentTransform, GroupTransform, MatrixTransform, Transform, build_exponent_ops,
    build_group_ops, build_matrix_ops, build_transform_ops,
};
