//! Exponent operation: per-channel power curve.
//!
//! ```text
//! out[c] = max(in[c], 0) ^ exponent[c]      c in {R, G, B, A}
//! ```
//!
//! The inverse operation raises to the reciprocal exponents; a channel
//! exponent of 0 maps every input to 1 and therefore has no inverse.

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::error::PipelineError;

/// Direction-agnostic parameters of an exponent operation.
///
/// One exponent per RGBA channel; the fourth conventionally stays 1.0 so
/// alpha passes through. Exponents are not range-checked: negative and
/// fractional values are legal and only rejected where they cannot be
/// honored (inverting 0 at finalization).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExponentOpData {
    /// Per-channel exponents, `[r, g, b, a]`.
    pub value: [f32; 4],
}

impl ExponentOpData {
    /// Identity parameters: every channel raised to 1.
    pub const fn identity() -> Self {
        Self { value: [1.0; 4] }
    }

    pub fn new(value: [f32; 4]) -> Self {
        Self { value }
    }

    /// True when applying these parameters changes no non-negative input.
    pub fn is_identity(&self) -> bool {
        self.value.iter().all(|&e| (e - 1.0).abs() < 1e-7)
    }

    /// Parameters of the inverse operation: per-channel reciprocals.
    pub fn inverted(&self) -> Result<Self, PipelineError> {
        let mut value = [0.0_f32; 4];
        for (channel, &e) in self.value.iter().enumerate() {
            if e.abs() < 1e-7 {
                return Err(PipelineError::NonInvertibleExponent { channel, value: e });
            }
            value[channel] = 1.0 / e;
        }
        Ok(Self { value })
    }
}

impl Default for ExponentOpData {
    fn default() -> Self {
        Self::identity()
    }
}

/// A compiled exponent operation: parameters plus resolved direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentOp {
    data: ExponentOpData,
    direction: Direction,
}

impl ExponentOp {
    pub fn new(data: ExponentOpData, direction: Direction) -> Self {
        Self { data, direction }
    }

    pub fn data(&self) -> &ExponentOpData {
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
    /// After a successful finalize the op applies forward. This is where a
    /// zero exponent deferred at build time surfaces as an error.
    pub fn finalize(&mut self) -> Result<(), PipelineError> {
        if self.direction == Direction::Inverse {
            self.data = self.data.inverted()?;
            self.direction = Direction::Forward;
        }
        Ok(())
    }

    /// Applies the power curve to a buffer of RGBA pixels.
    ///
    /// Channels are clamped to zero before the power so negative bases
    /// cannot produce NaN. Finalize first: the stored exponents are applied
    /// as-is and the direction flag is not consulted here.
    pub fn apply(&self, pixels: &mut [[f32; 4]]) {
        let exp = self.data.value;
        for px in pixels {
            for c in 0..4 {
                px[c] = px[c].max(0.0).powf(exp[c]);
            }
        }
    }
}
