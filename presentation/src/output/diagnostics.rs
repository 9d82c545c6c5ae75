//! Operator-facing error messages on stderr

use colored::Colorize;

/// Writes error lines to stderr
#[derive(Debug, Clone, Copy)]
pub struct Diagnostics {
    color: bool,
}

impl Diagnostics {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Render an error line without printing it
    pub fn error_line(&self, message: &str) -> String {
        if self.color {
            message.red().bold().to_string()
        } else {
            message.to_string()
        }
    }

    pub fn error(&self, message: &str) {
        eprintln!("{}", self.error_line(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_when_color_disabled() {
        let diagnostics = Diagnostics::new(false);
        assert_eq!(
            diagnostics.error_line("Cannot initialize QUORUM service"),
            "Cannot initialize QUORUM service"
        );
    }

    #[test]
    fn test_colored_line_keeps_message() {
        colored::control::set_override(true);
        let line = Diagnostics::new(true).error_line("set votes FAILED: 11");
        assert!(line.contains("set votes FAILED: 11"));
        assert!(line.starts_with('\u{1b}'));
        colored::control::unset_override();
    }
}
