//! Presentation layer for quorumtool
//!
//! This crate contains the CLI definition, the usage text, and the
//! formatters that turn reports into the tool's line-oriented output.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use cli::usage::usage_text;
pub use output::console::ConsoleFormatter;
pub use output::diagnostics::Diagnostics;
pub use output::formatter::OutputFormatter;
