//! Colored terminal output on stderr.

use console::{Style, Term};

/// Terminal output formatter.
pub(crate) struct Output {
    term: Term,
    green: Style,
    red: Style,
    dim: Style,
    cyan_bold: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            red: Style::new().red(),
            dim: Style::new().dim(),
            cyan_bold: Style::new().cyan().bold(),
        }
    }

    pub(crate) fn info(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        let _ = self.term.write_line(&self.green.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Print a site heading (cyan bold) with its config path dimmed.
    pub(crate) fn site(&self, title: &str, path: &str) {
        let _ = self.term.write_line(&format!(
            "{} {}",
            self.cyan_bold.apply_to(title),
            self.dim.apply_to(path)
        ));
    }

    /// Print an indented problem line (red bullet).
    pub(crate) fn issue(&self, msg: &str) {
        let _ = self
            .term
            .write_line(&format!("  {} {msg}", self.red.apply_to("✗")));
    }
}
