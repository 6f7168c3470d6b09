/// Shared serializable output types for the CLI.
///
/// These types are what gets written to stdout/stderr in JSON mode. They
/// are decoupled from the library's model types.
use serde::{Deserialize, Serialize};
use usagefmt::UsageError;

/// Summary of a validated usage model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckSummaryOutput {
    /// Always `true` when validation passed.
    pub ok: bool,
    /// Program name from the model.
    pub program_name: String,
    /// Number of declared options.
    pub options: usize,
    /// Number of declared commands.
    pub commands: usize,
    /// Whether a main (positional) parameter is declared.
    pub has_main_parameter: bool,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from any command failure.
    #[must_use]
    pub fn from_error(err: &anyhow::Error) -> Self {
        let code = match err.downcast_ref::<UsageError>() {
            Some(UsageError::InvalidDescriptor { .. }) => "invalid_descriptor",
            Some(UsageError::Fmt(_)) => "write_failed",
            None => "model_load_failed",
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message: format!("{err:#}"),
            },
        }
    }
}
