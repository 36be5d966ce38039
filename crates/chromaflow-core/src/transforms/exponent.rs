//! User-facing description of a per-channel power curve.
//!
//! ```text
//! out[c] = max(in[c], 0) ^ value[c]      c in {R, G, B, A}
//! ```
//!
//! The transform itself is a plain value object: cloning it yields an
//! independent editable copy, and setters accept partial input without
//! complaint. Exponent values are not range-checked here; a value that
//! cannot be realized (a zero exponent under an inverse direction) is
//! reported when the pipeline is finalized.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::direction::Direction;
use crate::error::PipelineError;
use crate::ops::{ExponentOp, ExponentOpData};
use crate::pipeline::Pipeline;

/// Per-channel exponent transform description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExponentTransform {
    #[serde(default)]
    data: ExponentOpData,
    #[serde(default)]
    direction: Direction,
}

impl ExponentTransform {
    /// Creates an identity transform: unit exponents, forward direction.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// The four per-channel exponents, RGBA order.
    pub fn value(&self) -> [f32; 4] {
        self.data.value
    }

    /// Replaces all four exponents. Passing `None` leaves the transform
    /// unchanged. Values are copied verbatim without range checks.
    pub fn set_value(&mut self, value: Option<[f32; 4]>) {
        if let Some(value) = value {
            self.data.value = value;
        }
    }

    /// Checks the transform description for structural problems.
    ///
    /// The direction is guaranteed valid by its type and the exponent
    /// payload is deliberately left unchecked until finalize, so this
    /// currently always succeeds. Callers should still validate before
    /// building so future payload checks are picked up.
    pub fn validate(&self) -> Result<(), PipelineError> {
        Ok(())
    }
}

impl fmt::Display for ExponentTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.data.value;
        write!(
            f,
            "<ExponentTransform direction={}, value={} {} {} {}>",
            self.direction, v[0], v[1], v[2], v[3]
        )
    }
}

/// Appends the single op realizing `transform` to `pipeline`.
///
/// `direction` is the ambient direction of the surrounding build (a parent
/// group being inverted, for example); it combines with the transform's own
/// direction before the op is instantiated.
pub fn build_exponent_ops(
    pipeline: &mut Pipeline,
    _config: &Config,
    transform: &ExponentTransform,
    direction: Direction,
) {
    let combined = direction.combine(transform.direction());
    pipeline.push(ExponentOp::new(ExponentOpData::new(transform.value()), combined).into());
}
