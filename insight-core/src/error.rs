/// Errors produced by the `insight-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A route segment did not name any supported field.
    #[error("unknown field: {segment}")]
    UnknownField { segment: String },
}
