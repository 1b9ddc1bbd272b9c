#![allow(clippy::float_cmp, reason = "results are exact small integers")]

use super::*;
use pretty_assertions::assert_eq;

// === Precedence and associativity ===

#[test]
fn multiplication_binds_tighter() {
    assert_eq!(reduce_flat("2+3*4"), Ok(14.0));
    assert_eq!(reduce_flat("2*3+4"), Ok(10.0));
    assert_eq!(reduce_flat("1+2*3-4/2"), Ok(5.0));
}

#[test]
fn equal_precedence_is_left_to_right() {
    assert_eq!(reduce_flat("8/2/2"), Ok(2.0));
    assert_eq!(reduce_flat("8-2-2"), Ok(4.0));
    assert_eq!(reduce_flat("8-2+1"), Ok(7.0));
    assert_eq!(reduce_flat("2*6/3*2"), Ok(8.0));
}

#[test]
fn single_literal() {
    assert_eq!(reduce_flat("7"), Ok(7.0));
    assert_eq!(reduce_flat("2.5"), Ok(2.5));
    assert_eq!(reduce_flat(".5"), Ok(0.5));
}

#[test]
fn whitespace_is_ignored() {
    assert_eq!(reduce_flat(" 2 + 3 * 4 "), Ok(14.0));
}

#[test]
fn fractional_arithmetic() {
    assert_eq!(reduce_flat("7/2"), Ok(3.5));
    assert_eq!(reduce_flat("0.5*3"), Ok(1.5));
}

// === Minus forms ===

#[test]
fn double_minus_collapses_to_addition() {
    assert_eq!(reduce_flat("5--3"), Ok(8.0));
    assert_eq!(reduce_flat("10-2--3"), Ok(11.0));
    assert_eq!(reduce_flat("2*3--4"), Ok(10.0));
}

#[test]
fn narrow_unary_minus() {
    assert_eq!(reduce_flat("-5"), Ok(-5.0));
    assert_eq!(reduce_flat("-2.5"), Ok(-2.5));
}

#[test]
fn leading_minus_with_more_terms_is_unsupported() {
    assert_eq!(
        reduce_flat("-5*2"),
        Err(EvalError::UnsupportedUnaryMinus { offset: 0 })
    );
    assert_eq!(
        reduce_flat("--5"),
        Err(EvalError::UnsupportedUnaryMinus { offset: 0 })
    );
}

#[test]
fn minus_after_operator_is_unsupported() {
    assert_eq!(
        reduce_flat("2*-3"),
        Err(EvalError::UnsupportedUnaryMinus { offset: 2 })
    );
    assert_eq!(
        reduce_flat("5---3"),
        Err(EvalError::UnsupportedUnaryMinus { offset: 3 })
    );
}

// === IEEE-754 ===

#[test]
fn division_by_zero_is_a_value() {
    assert_eq!(reduce_flat("1/0"), Ok(f64::INFINITY));
    assert_eq!(reduce_flat("0-1/0"), Ok(f64::NEG_INFINITY));
    assert!(reduce_flat("0/0").is_ok_and(f64::is_nan));
}

// === Malformed input ===

#[test]
fn empty_is_malformed() {
    assert_eq!(
        reduce_flat(""),
        Err(EvalError::MalformedArithmetic {
            reason: "expected an operand",
            offset: 0,
        })
    );
}

#[test]
fn trailing_operator_is_malformed() {
    assert_eq!(
        reduce_flat("2+"),
        Err(EvalError::MalformedArithmetic {
            reason: "operator is missing its right operand",
            offset: 1,
        })
    );
}

#[test]
fn leading_operator_is_malformed() {
    assert_eq!(
        reduce_flat("*2"),
        Err(EvalError::MalformedArithmetic {
            reason: "operator is missing its left operand",
            offset: 0,
        })
    );
}

#[test]
fn adjacent_operands_are_malformed() {
    assert_eq!(
        reduce_flat("2 3"),
        Err(EvalError::MalformedArithmetic {
            reason: "missing operator between operands",
            offset: 2,
        })
    );
}

#[test]
fn non_numeric_text_is_invalid() {
    assert_eq!(
        reduce_flat("2+x"),
        Err(EvalError::InvalidToken {
            text: "x".to_string(),
            offset: 2,
        })
    );
    assert_eq!(
        reduce_flat("1.2.3"),
        Err(EvalError::InvalidToken {
            text: "1.2.3".to_string(),
            offset: 0,
        })
    );
    assert_eq!(
        reduce_flat("(1)"),
        Err(EvalError::InvalidToken {
            text: "(".to_string(),
            offset: 0,
        })
    );
}

// === Terms ===

#[test]
fn reduce_terms_uses_operand_values() {
    // Negative operands come from resolved groups, not from minus signs.
    let terms = [
        Term::Operand {
            value: -4.0,
            offset: 0,
        },
        Term::Operator {
            op: Operator::Mul,
            offset: 5,
        },
        Term::Operand {
            value: 2.0,
            offset: 6,
        },
    ];
    assert_eq!(reduce_terms(&terms, 0), Ok(-8.0));
}

#[test]
fn reduce_terms_empty_reports_start() {
    assert_eq!(
        reduce_terms(&[], 9),
        Err(EvalError::MalformedArithmetic {
            reason: "expected an operand",
            offset: 9,
        })
    );
}

// === Helpers ===

#[test]
fn scan_word_stops_at_delimiters() {
    assert_eq!(scan_word("abc+1", 0), 3);
    assert_eq!(scan_word("x1.5*2", 0), 4);
    assert_eq!(scan_word("12", 0), 2);
    assert_eq!(scan_word("+1", 0), 0);
}

#[test]
fn literal_forms() {
    assert_eq!(parse_literal("3.", 0), Ok(3.0));
    assert!(parse_literal(".", 0).is_err());
    assert!(parse_literal("1e5", 0).is_err());
}

// === Property tests ===

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_reduce {
    use super::super::reduce_flat;
    use proptest::prelude::*;

    /// Independent recursive-descent evaluator over integer tokens.
    fn reference(first: i64, rest: &[(char, i64)]) -> i64 {
        let mut sum = 0;
        let mut sign = 1;
        let mut product = first;
        for &(op, value) in rest {
            match op {
                '*' => product *= value,
                '+' | '-' => {
                    sum += sign * product;
                    sign = if op == '+' { 1 } else { -1 };
                    product = value;
                }
                _ => unreachable!(),
            }
        }
        sum + sign * product
    }

    proptest! {
        #[test]
        fn matches_reference_precedence(
            first in 0i64..20,
            rest in proptest::collection::vec(
                (prop_oneof![Just('+'), Just('-'), Just('*')], 0i64..20),
                0..6,
            ),
        ) {
            let mut text = first.to_string();
            for (op, value) in &rest {
                text.push(*op);
                text.push_str(&value.to_string());
            }
            #[allow(clippy::cast_precision_loss, reason = "values stay far below 2^53")]
            let expected = reference(first, &rest) as f64;
            prop_assert_eq!(reduce_flat(&text), Ok(expected), "text: {}", text);
        }
    }
}
