//! Ordered container of child transforms built as one unit.
//!
//! A group contributes no op of its own. Building a group under a combined
//! inverse direction walks the children in reverse order, mirroring how the
//! inverse of a function composition reverses its factors:
//!
//! ```text
//! (f . g)^-1 = g^-1 . f^-1
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::direction::Direction;
use crate::error::PipelineError;
use crate::pipeline::Pipeline;
use crate::transforms::{Transform, build_transform_ops};

/// Ordered list of child transforms with a direction of its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupTransform {
    #[serde(default)]
    transforms: Vec<Transform>,
    #[serde(default)]
    direction: Direction,
}

impl GroupTransform {
    /// Creates an empty forward group.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Appends a child transform.
    pub fn push(&mut self, transform: impl Into<Transform>) {
        self.transforms.push(transform.into());
    }

    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Validates every child, failing on the first problem found.
    pub fn validate(&self) -> Result<(), PipelineError> {
        for transform in &self.transforms {
            transform.validate()?;
        }
        Ok(())
    }
}

impl fmt::Display for GroupTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<GroupTransform direction={}, transforms={}>",
            self.direction,
            self.transforms.len()
        )
    }
}

/// Appends the ops realizing every child of `group` to `pipeline`.
///
/// The ambient direction combines with the group's own direction once; the
/// combined direction is what each child build receives, and it also decides
/// the iteration order.
pub fn build_group_ops(
    pipeline: &mut Pipeline,
    config: &Config,
    group: &GroupTransform,
    direction: Direction,
) {
    let combined = direction.combine(group.direction());
    match combined {
        Direction::Forward => {
            for transform in group.transforms() {
                build_transform_ops(pipeline, config, transform, combined);
            }
        }
        Direction::Inverse => {
            for transform in group.transforms().iter().rev() {
                build_transform_ops(pipeline, config, transform, combined);
            }
        }
    }
}
