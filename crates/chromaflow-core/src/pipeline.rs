//! Op sequence produced by transform builds and its finalized CPU form.
//!
//! A [`Pipeline`] is the append-only accumulator the `build_*_ops` functions
//! write into. Ops keep their resolved direction and full parameters there,
//! so a pipeline can still be inspected, compared, and extended. Calling
//! [`Pipeline::finalize`] ends that phase: directions are folded into the
//! parameters, identity ops are dropped, and the result is an immutable
//! [`CpuProcessor`] ready to push pixels through.
//!
//! Errors deferred during building (a zero exponent or singular matrix under
//! an inverse direction) surface in `finalize`, not before.

use crate::error::PipelineError;
use crate::ops::Op;

/// Ordered op list under construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pipeline {
    ops: Vec<Op>,
}

impl Pipeline {
    /// Creates an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an op. Building never replaces or reorders existing ops.
    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// True when no op in the pipeline can change a pixel.
    pub fn is_noop(&self) -> bool {
        self.ops.iter().all(Op::is_noop)
    }

    /// Resolves every op and packages the survivors as a CPU processor.
    ///
    /// Each op folds its direction into its parameters; identity ops are
    /// dropped afterwards. The first op that cannot be resolved aborts the
    /// finalize with its error.
    pub fn finalize(self) -> Result<CpuProcessor, PipelineError> {
        let total = self.ops.len();
        let mut retained = Vec::with_capacity(total);
        for mut op in self.ops {
            if let Err(e) = op.finalize() {
                tracing::debug!("{} op failed to finalize: {e}", op.name());
                return Err(e);
            }
            if op.is_noop() {
                continue;
            }
            retained.push(op);
        }
        tracing::debug!(
            "finalized pipeline: {} op(s) retained, {} no-op(s) dropped",
            retained.len(),
            total - retained.len()
        );
        Ok(CpuProcessor { ops: retained })
    }
}

/// Finalized op chain applied on the CPU.
///
/// Processors are immutable once built; share one across threads freely and
/// hand each thread its own pixel buffers.
#[derive(Debug, Clone, PartialEq)]
pub struct CpuProcessor {
    ops: Vec<Op>,
}

impl CpuProcessor {
    /// Number of ops the processor will run per pixel.
    pub fn op_count(&self) -> usize {
        self.ops.len()
    }

    /// True when applying the processor returns every pixel unchanged.
    pub fn is_noop(&self) -> bool {
        self.ops.is_empty()
    }

    /// Applies the op chain to a single RGBA pixel.
    pub fn apply_pixel(&self, pixel: &mut [f32; 4]) {
        self.apply_rgba(std::slice::from_mut(pixel));
    }

    /// Applies the op chain to a buffer of RGBA pixels in place.
    pub fn apply_rgba(&self, pixels: &mut [[f32; 4]]) {
        for op in &self.ops {
            op.apply(pixels);
        }
    }

    /// Applies the op chain to an interleaved RGBA float buffer.
    ///
    /// A buffer whose length is not a multiple of 4 is left untouched, in
    /// line with how absent input is tolerated elsewhere.
    pub fn apply_interleaved(&self, buffer: &mut [f32]) {
        if buffer.len() % 4 != 0 {
            return;
        }
        self.apply_rgba(bytemuck::cast_slice_mut(buffer));
    }
}
