/// Command descriptors and the top-level usage model.
use serde::{Deserialize, Serialize};

use super::descriptor::{ParameterDescriptor, validate_descriptors};
use super::errors::UsageError;

/// A subcommand entry in the commands block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandDescriptor {
    /// Primary command name.
    pub name: String,
    /// Alternate names, in registration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// Human-readable description; may be empty.
    #[serde(default)]
    pub description: String,
}

impl CommandDescriptor {
    /// Display name: `name(alias1,alias2)` when aliases exist, else `name`.
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.aliases.is_empty() {
            self.name.clone()
        } else {
            format!("{}({})", self.name, self.aliases.join(","))
        }
    }
}

/// The finalized, registry-sorted input to a usage render.
///
/// Registration, type coercion, sorting, and default-value resolution all
/// happen in the registry before this model is handed over; the renderer
/// only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageModel {
    /// Program name shown in the usage line.
    pub program_name: String,
    /// Declared options, already sorted by the registry.
    #[serde(default)]
    pub options: Vec<ParameterDescriptor>,
    /// Display text of the main (positional) parameter, if declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_parameter: Option<String>,
    /// Declared subcommands, in registration order.
    #[serde(default)]
    pub commands: Vec<CommandDescriptor>,
}

impl UsageModel {
    /// Check the model invariants without rendering anything.
    ///
    /// # Errors
    ///
    /// Returns `UsageError::InvalidDescriptor` for the first option whose
    /// name list is empty.
    pub fn validate(&self) -> Result<(), UsageError> {
        validate_descriptors(&self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_without_aliases() {
        let cmd = CommandDescriptor {
            name: "fetch".to_owned(),
            aliases: vec![],
            description: String::new(),
        };
        assert_eq!(cmd.display_name(), "fetch");
    }

    #[test]
    fn test_display_name_with_aliases() {
        let cmd = CommandDescriptor {
            name: "fetch".to_owned(),
            aliases: vec!["f".to_owned(), "ft".to_owned()],
            description: String::new(),
        };
        assert_eq!(cmd.display_name(), "fetch(f,ft)");
    }

    #[test]
    fn test_minimal_model_json_fills_defaults() {
        let model: UsageModel = serde_json::from_str(
            r#"{"program_name": "tool", "options": [{"names": ["-a"]}]}"#,
        )
        .unwrap();
        assert_eq!(model.program_name, "tool");
        assert!(model.commands.is_empty());
        assert!(model.main_parameter.is_none());
        let pd = &model.options[0];
        assert!(!pd.required);
        assert_eq!(pd.assignment, "=");
        assert!(pd.description.is_empty());
    }

    #[test]
    fn test_validate_rejects_nameless_option() {
        let model: UsageModel =
            serde_json::from_str(r#"{"program_name": "tool", "options": [{"names": []}]}"#)
                .unwrap();
        let err = model.validate().unwrap_err();
        assert!(matches!(err, UsageError::InvalidDescriptor { position: 0 }));
    }
}
