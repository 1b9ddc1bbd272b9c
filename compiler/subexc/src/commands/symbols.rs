//! The `symbols` command: list the symbols discovered in an expression.

use std::fmt::Write;

use subex_eval::Expression;

use crate::report::Renderer;

use super::{prepare, read_file, EvalOptions};

/// Print the scalars and arrays of `text`, with values from `--values`.
pub fn print_symbols(text: &str, options: &EvalOptions) {
    let values = options.values.as_deref().map(read_file);
    match prepare(text, values.as_deref()) {
        Ok(expr) => print!("{}", format_symbols(&expr)),
        Err(err) => {
            let path = options.values.as_deref().unwrap_or_default();
            eprint!("{}", Renderer::for_stderr().load_error(path, &err));
            std::process::exit(1);
        }
    }
}

/// One symbol per line in discovery order, scalars first.
fn format_symbols(expr: &Expression) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "scalars ({}):", expr.scalars().len());
    for scalar in expr.scalars() {
        let _ = writeln!(out, "  {scalar}");
    }
    let _ = writeln!(out, "arrays ({}):", expr.arrays().len());
    for array in expr.arrays() {
        let _ = writeln!(out, "  {array}");
    }
    out
}

#[cfg(test)]
mod tests;
