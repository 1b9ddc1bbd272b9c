use super::*;
use pretty_assertions::assert_eq;

#[test]
fn simple_paren() {
    assert_eq!(find_matching_close("(1+2)*3", 0), Ok(4));
}

#[test]
fn nested_parens_match_outermost() {
    assert_eq!(find_matching_close("((1+2))", 0), Ok(6));
    assert_eq!(find_matching_close("((1+2))", 1), Ok(5));
}

#[test]
fn nested_subscripts() {
    let text = "A[B[0]]+1";
    assert_eq!(find_matching_close(text, 1), Ok(6));
    assert_eq!(find_matching_close(text, 3), Ok(5));
}

#[test]
fn counts_only_its_own_kind() {
    // The `]` inside does not affect paren depth.
    assert_eq!(find_matching_close("(A[1]+2)", 0), Ok(7));
}

#[test]
fn search_starts_at_opener() {
    assert_eq!(find_matching_close("(1)+(2)", 4), Ok(6));
}

#[test]
fn unclosed_paren_is_unbalanced() {
    assert_eq!(
        find_matching_close("2*(1+(3)", 2),
        Err(EvalError::Unbalanced {
            delimiter: '(',
            offset: 2,
        })
    );
}

#[test]
fn unclosed_bracket_is_unbalanced() {
    assert_eq!(
        find_matching_close("A[1", 1),
        Err(EvalError::Unbalanced {
            delimiter: '[',
            offset: 1,
        })
    );
}

#[test]
fn non_opener_is_rejected() {
    assert_eq!(
        find_matching_close("1+2", 1),
        Err(EvalError::InvalidToken {
            text: "+".to_string(),
            offset: 1,
        })
    );
    assert!(find_matching_close("", 0).is_err());
}

#[test]
fn delimiter_pairs() {
    assert_eq!(Delimiter::from_open(b'('), Some(Delimiter::Paren));
    assert_eq!(Delimiter::from_open(b'['), Some(Delimiter::Bracket));
    assert_eq!(Delimiter::from_open(b')'), None);
    assert_eq!(Delimiter::Bracket.close(), b']');
}
