#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("channel {channel} exponent {value} cannot be inverted")]
    NonInvertibleExponent { channel: usize, value: f32 },
    #[error("matrix is singular and cannot be inverted")]
    SingularMatrix,
}
