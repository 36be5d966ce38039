//! Editable transform descriptions and the builds that compile them.
//!
//! Each transform module pairs a description type with a `build_*_ops`
//! function that appends the corresponding ops to a [`Pipeline`]. The
//! [`Transform`] enum ties them together so trees of heterogeneous
//! transforms (groups in particular) can be built with one call.

pub mod exponent;
pub mod group;
pub mod matrix;

pub use exponent::{ExponentTransform, build_exponent_ops};
pub use group::{GroupTransform, build_group_ops};
pub use matrix::{MatrixTransform, build_matrix_ops};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::direction::Direction;
use crate::error::PipelineError;
use crate::pipeline::Pipeline;

/// Any transform description the pipeline compiler understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transform {
    Exponent(ExponentTransform),
    Matrix(MatrixTransform),
    Group(GroupTransform),
}

impl Transform {
    pub fn direction(&self) -> Direction {
        match self {
            Self::Exponent(t) => t.direction(),
            Self::Matrix(t) => t.direction(),
            Self::Group(t) => t.direction(),
        }
    }

    pub fn set_direction(&mut self, direction: Direction) {
        match self {
            Self::Exponent(t) => t.set_direction(direction),
            Self::Matrix(t) => t.set_direction(direction),
            Self::Group(t) => t.set_direction(direction),
        }
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        match self {
            Self::Exponent(t) => t.validate(),
            Self::Matrix(t) => t.validate(),
            Self::Group(t) => t.validate(),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exponent(t) => t.fmt(f),
            Self::Matrix(t) => t.fmt(f),
            Self::Group(t) => t.fmt(f),
        }
    }
}

impl From<ExponentTransform> for Transform {
    fn from(transform: ExponentTransform) -> Self {
        Self::Exponent(transform)
    }
}

impl From<MatrixTransform> for Transform {
    fn from(transform: MatrixTransform) -> Self {
        Self::Matrix(transform)
    }
}

impl From<GroupTransform> for Transform {
    fn from(transform: GroupTransform) -> Self {
        Self::Group(transform)
    }
}

/// Appends the ops realizing `transform` to `pipeline`, dispatching on the
/// concrete transform kind.
pub fn build_transform_ops(
    pipeline: &mut Pipeline,
    config: &Config,
    transform: &Transform,
    direction: Direction,
) {
    tracing::trace!("building ops for {transform}");
    match transform {
        Transform::Exponent(t) => build_exponent_ops(pipeline, config, t, direction),
        Transform::Matrix(t) => build_matrix_ops(pipeline, config, t, direction),
        Transform::Group(t) => build_group_ops(pipeline, config, t, direction),
    }
}
