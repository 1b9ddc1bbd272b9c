//! The `batch` command: evaluate every line of a file.

use subex_eval::EvalConfig;

use crate::report::Renderer;

use super::{prepare, read_file, EvalOptions};

/// Evaluate each non-blank line of `path` as its own expression.
///
/// Every line gets a fresh expression loaded from the same records. All
/// lines are attempted; the exit status is 1 if any of them failed.
pub fn run_batch(path: &str, options: &EvalOptions) {
    let source = read_file(path);
    let values = options.values.as_deref().map(read_file);
    let batch = Batch {
        values: values.as_deref(),
        values_path: options.values.as_deref().unwrap_or_default(),
        config: options.config(),
        renderer: Renderer::for_stderr(),
    };

    let mut failed = 0usize;
    for line in source.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match batch.evaluate_line(line) {
            Ok(value) => println!("{line} = {value}"),
            Err(diagnostic) => {
                failed += 1;
                eprint!("{diagnostic}");
            }
        }
    }

    if failed > 0 {
        eprintln!("{failed} expression(s) failed");
        std::process::exit(1);
    }
}

struct Batch<'a> {
    values: Option<&'a str>,
    values_path: &'a str,
    config: EvalConfig,
    renderer: Renderer,
}

impl Batch<'_> {
    /// Evaluate one line, or render why it failed.
    fn evaluate_line(&self, line: &str) -> Result<f64, String> {
        let expr = prepare(line, self.values)
            .map_err(|err| self.renderer.load_error(self.values_path, &err))?;
        expr.evaluate_with(&self.config)
            .map_err(|err| self.renderer.eval_error(expr.text(), &err))
    }
}

#[cfg(test)]
mod tests;
