//! Command handlers for the `subex` CLI.
//!
//! Each submodule implements one command. Option parsing and file reading
//! are shared and live here in the module root.

use subex_eval::{EvalConfig, Expression, LoadError};

mod batch;
mod eval;
mod explain;
mod symbols;

pub use batch::run_batch;
pub use eval::eval_expression;
pub use explain::explain_error;
pub use symbols::print_symbols;

/// Options shared by `eval`, `symbols` and `batch`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalOptions {
    /// Path of the value records file.
    pub values: Option<String>,
    pub max_depth: usize,
    /// Print the expression with scalar values substituted before the result.
    pub show_substituted: bool,
}

impl Default for EvalOptions {
    fn default() -> Self {
        EvalOptions {
            values: None,
            max_depth: EvalConfig::DEFAULT_MAX_DEPTH,
            show_substituted: false,
        }
    }
}

impl EvalOptions {
    pub fn config(&self) -> EvalConfig {
        EvalConfig {
            max_depth: self.max_depth,
        }
    }
}

/// Split command arguments into positionals and options.
///
/// Arguments starting with `--` are options; a lone `-` or anything else is
/// positional, so an expression like `-5` is still accepted.
pub fn parse_options(args: &[String]) -> Result<(Vec<String>, EvalOptions), String> {
    let mut options = EvalOptions::default();
    let mut positional = Vec::new();

    for arg in args {
        if let Some(path) = arg.strip_prefix("--values=") {
            if path.is_empty() {
                return Err("`--values=` needs a file path".to_string());
            }
            options.values = Some(path.to_string());
        } else if let Some(depth) = arg.strip_prefix("--max-depth=") {
            options.max_depth = depth
                .parse()
                .map_err(|_| format!("invalid value for `--max-depth`: '{depth}'"))?;
        } else if arg == "--show-substituted" {
            options.show_substituted = true;
        } else if arg.starts_with("--") {
            return Err(format!("unknown option '{arg}'"));
        } else {
            positional.push(arg.clone());
        }
    }

    Ok((positional, options))
}

/// Read a file to a string, exiting with an error message on failure.
pub(super) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Build an expression and apply the records in `values`, if any.
pub(super) fn prepare(text: &str, values: Option<&str>) -> Result<Expression, LoadError> {
    let mut expr = Expression::new(text);
    if let Some(values) = values {
        let summary = expr.load_values(values.lines())?;
        if summary.skipped > 0 {
            tracing::info!(skipped = summary.skipped, "ignored records for unknown names");
        }
    }
    Ok(expr)
}
