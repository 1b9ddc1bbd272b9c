//! The `eval` command: evaluate one expression and print the result.

use crate::report::Renderer;

use super::{prepare, read_file, EvalOptions};

/// Evaluate `text` with the records from `--values`, printing the result.
///
/// Exits with status 1 after printing a diagnostic on any failure.
pub fn eval_expression(text: &str, options: &EvalOptions) {
    let renderer = Renderer::for_stderr();
    let values = options.values.as_deref().map(read_file);

    let expr = match prepare(text, values.as_deref()) {
        Ok(expr) => expr,
        Err(err) => {
            let path = options.values.as_deref().unwrap_or_default();
            eprint!("{}", renderer.load_error(path, &err));
            std::process::exit(1);
        }
    };

    if options.show_substituted {
        println!("{}", expr.substituted());
    }

    match expr.evaluate_with(&options.config()) {
        Ok(value) => println!("{value}"),
        Err(err) => {
            eprint!("{}", renderer.eval_error(expr.text(), &err));
            std::process::exit(1);
        }
    }
}
