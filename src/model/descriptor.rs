/// Parameter descriptors: the finalized flag metadata a parameter
/// registry hands to the renderer.
use serde::{Deserialize, Serialize};

use super::errors::UsageError;

/// What kind of value a parameter accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Boolean switch; takes no value.
    #[default]
    Flag,
    /// Free-form scalar value (string, number, path).
    Scalar,
    /// Closed set of legal values.
    Enum {
        /// Ordered legal value labels, as registered.
        labels: Vec<String>,
    },
}

/// A single declared parameter, as finalized by the registry.
///
/// Descriptors are read-only inputs to the renderer. Sort order of the
/// descriptor list is the registry's responsibility, not the renderer's.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct ParameterDescriptor {
    /// Names the user may type, in registration order (e.g., `-f`, `--file`).
    pub names: Vec<String>,
    /// Whether the parameter must be supplied.
    #[serde(default)]
    pub required: bool,
    /// Human-readable description; may be empty.
    #[serde(default)]
    pub description: String,
    /// Display form of the resolved default value, or null when there is none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Whether the value is secret; masks the default in output.
    #[serde(default)]
    pub password: bool,
    /// Whether the parameter accepts `key<assignment>value` syntax.
    #[serde(default)]
    pub dynamic: bool,
    /// Assignment token shown in the dynamic syntax hint.
    #[serde(default = "default_assignment")]
    pub assignment: String,
    /// What kind of value the parameter accepts.
    #[serde(default)]
    pub kind: ValueKind,
    /// Whether this is the help flag; suppresses the default annotation.
    #[serde(default)]
    pub help_flag: bool,
}

fn default_assignment() -> String {
    "=".to_owned()
}

impl ParameterDescriptor {
    /// Comma-joined display form of the names (e.g., `-f, --file`).
    #[must_use]
    pub fn display_names(&self) -> String {
        self.names.join(", ")
    }

    /// Display form of the default value, masked for password parameters
    /// and substituted with `<empty string>` for empty defaults.
    ///
    /// Returns `None` when there is no default or this is the help flag.
    #[must_use]
    pub fn display_default(&self) -> Option<String> {
        if self.help_flag {
            return None;
        }
        let def = self.default_value.as_deref()?;
        if self.password {
            Some("********".to_owned())
        } else if def.is_empty() {
            Some("<empty string>".to_owned())
        } else {
            Some(def.to_owned())
        }
    }
}

/// Check that every descriptor has at least one name.
///
/// Renderers call this before appending anything to the sink, so a
/// malformed list never produces a partial block.
///
/// # Errors
///
/// Returns `UsageError::InvalidDescriptor` for the first descriptor whose
/// name list is empty.
pub fn validate_descriptors(params: &[ParameterDescriptor]) -> Result<(), UsageError> {
    for (position, pd) in params.iter().enumerate() {
        if pd.names.is_empty() {
            return Err(UsageError::InvalidDescriptor { position });
        }
    }
    Ok(())
}
