#![allow(clippy::float_cmp, reason = "expected values are exact")]

use super::*;
use pretty_assertions::assert_eq;

fn batch(values: Option<&str>) -> Batch<'_> {
    Batch {
        values,
        values_path: "vals.txt",
        config: EvalConfig::default(),
        renderer: Renderer::new(false),
    }
}

#[test]
fn lines_share_records() {
    let batch = batch(Some("x 2\nA 2 (0,3) (1,4)"));
    assert_eq!(batch.evaluate_line("x*A[1]"), Ok(8.0));
    assert_eq!(batch.evaluate_line("A[0]-x"), Ok(1.0));
}

#[test]
fn failing_line_renders_diagnostic() {
    let batch = batch(None);
    let Err(diagnostic) = batch.evaluate_line("(1+2") else {
        panic!("expected a diagnostic");
    };
    assert!(diagnostic.starts_with("error[E2004]: unbalanced `(`"));
    assert!(diagnostic.contains("  | (1+2\n  | ^\n"));
}

#[test]
fn load_failure_names_values_file() {
    let batch = batch(Some("x oops"));
    let Err(diagnostic) = batch.evaluate_line("x") else {
        panic!("expected a diagnostic");
    };
    assert!(diagnostic.contains("--> vals.txt:1"));
}

#[test]
fn oversized_array_count_is_a_diagnostic() {
    let batch = batch(Some("A 18446744073709551615"));
    let Err(diagnostic) = batch.evaluate_line("A[0]") else {
        panic!("expected a diagnostic");
    };
    assert!(diagnostic.starts_with("error[E1004]: "), "{diagnostic}");
}
