/// Rendering layer: formatter strategies, text wrapping, layout options.
pub mod formatter;
pub mod stacked;
pub mod unix;
pub mod wrap;

pub use formatter::{RenderOptions, UsageFormatter, UsageStyle, formatter_for};
pub use stacked::StackedUsageFormatter;
pub use unix::UnixUsageFormatter;
pub use wrap::wrap_description;
