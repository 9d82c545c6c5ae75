//! Output formatting

pub mod console;
pub mod diagnostics;
pub mod formatter;
