use super::*;
use pretty_assertions::assert_eq;

#[test]
fn lists_loaded_symbols() {
    let expr = prepare("b + A[a] * b", Some("A 2 (1,5)\nb 3")).unwrap_or_else(|e| {
        panic!("{e}");
    });
    assert_eq!(
        format_symbols(&expr),
        "scalars (2):\n  b = 3\n  a = 0\narrays (1):\n  A = [0, 5]\n"
    );
}

#[test]
fn empty_expression_has_no_symbols() {
    let expr = Expression::new("1+2");
    assert_eq!(format_symbols(&expr), "scalars (0):\narrays (0):\n");
}
