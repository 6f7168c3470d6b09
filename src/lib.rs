#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! usagefmt — render aligned usage help text for command-line parameter
//! registries.
//!
//! A parameter registry hands over a finalized [`UsageModel`] (sorted
//! options, commands, main parameter); a [`UsageFormatter`] strategy
//! appends the usage line, the options block, and the commands block to
//! any `fmt::Write` sink. Two layouts ship: [`UsageStyle::Unix`] aligns
//! every description at one shared column, [`UsageStyle::Stacked`] puts
//! details on indented lines under each flag.

pub mod model;
pub mod render;

pub use model::{CommandDescriptor, ParameterDescriptor, UsageError, UsageModel, ValueKind};
pub use render::{RenderOptions, UsageFormatter, UsageStyle, formatter_for};
