/// Errors from the usage-rendering layer.
use std::fmt;

use thiserror::Error;

/// Errors that can occur while rendering usage text.
#[derive(Debug, Error)]
pub enum UsageError {
    /// A descriptor carried no names; no prefix column can be computed.
    #[error("parameter descriptor at position {position} has an empty name list")]
    InvalidDescriptor {
        /// Index of the offending descriptor in the rendered list.
        position: usize,
    },

    /// The output sink refused a write.
    #[error("output sink write failed")]
    Fmt(#[from] fmt::Error),
}

/// Exit code mapping for `UsageError` variants.
impl UsageError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidDescriptor { .. } => 2,
            Self::Fmt(_) => 1,
        }
    }
}
