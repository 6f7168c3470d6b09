/// Descriptor model layer: parameter and command metadata handed over by
/// the parameter registry.
pub mod command;
pub mod descriptor;
pub mod errors;

pub use command::{CommandDescriptor, UsageModel};
pub use descriptor::{ParameterDescriptor, ValueKind, validate_descriptors};
pub use errors::UsageError;
