//! Diagnostic rendering for evaluation and load failures.
//!
//! Evaluation errors point at the offending byte offset with a caret line
//! under the expression:
//!
//! ```text
//! error[E2003]: index 5 out of range for `A` of length 3
//!   |
//!   | A[5]
//!   | ^
//!   = help: run `subex explain E2003` for details
//! ```

use std::fmt::Write;

use subex_eval::{ErrorCode, EvalError, LoadError};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Renders diagnostics, optionally with ANSI colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Renderer {
    colors: bool,
}

impl Renderer {
    pub fn new(colors: bool) -> Self {
        Renderer { colors }
    }

    /// Colors when stderr is a terminal.
    pub fn for_stderr() -> Self {
        Renderer::new(std::io::IsTerminal::is_terminal(&std::io::stderr()))
    }

    /// Render an evaluation error against the expression it came from.
    pub fn eval_error(&self, source: &str, err: &EvalError) -> String {
        let mut out = self.header(err.code(), &err.to_string());
        let column = source
            .get(..err.offset())
            .map_or(0, |prefix| prefix.chars().count());

        let gutter = self.paint(colors::GUTTER, "|");
        let _ = writeln!(out, "  {gutter}");
        let _ = writeln!(out, "  {gutter} {source}");
        let caret = self.paint(colors::ERROR, "^");
        let _ = writeln!(out, "  {gutter} {:column$}{caret}", "");
        self.help(&mut out, err.code());
        out
    }

    /// Render a load error from the values file at `path`.
    pub fn load_error(&self, path: &str, err: &LoadError) -> String {
        let mut out = self.header(err.code(), &err.to_string());
        let arrow = self.paint(colors::GUTTER, "-->");
        let _ = writeln!(out, "  {arrow} {path}:{}", err.line());
        self.help(&mut out, err.code());
        out
    }

    fn header(&self, code: ErrorCode, message: &str) -> String {
        let label = self.paint(colors::ERROR, &format!("error[{code}]"));
        let message = self.paint(colors::BOLD, message);
        format!("{label}: {message}\n")
    }

    fn help(&self, out: &mut String, code: ErrorCode) {
        let eq = self.paint(colors::GUTTER, "=");
        let _ = writeln!(out, "  {eq} help: run `subex explain {code}` for details");
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.colors {
            format!("{color}{text}{}", colors::RESET)
        } else {
            text.to_string()
        }
    }
}
