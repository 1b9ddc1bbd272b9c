use super::*;
use crate::symbols::SymbolKind;
use pretty_assertions::assert_eq;

fn scalar_names(table: &SymbolTable) -> Vec<&str> {
    table.scalars().iter().map(|s| s.name.as_str()).collect()
}

fn array_names(table: &SymbolTable) -> Vec<&str> {
    table.arrays().iter().map(|a| a.name.as_str()).collect()
}

#[test]
fn repeated_name_is_declared_once() {
    let table = discover("x+x*x");
    assert_eq!(scalar_names(&table), vec!["x"]);
    assert!(table.arrays().is_empty());
}

#[test]
fn first_occurrence_order() {
    let table = discover("b*(a+c) - a/b");
    assert_eq!(scalar_names(&table), vec!["b", "a", "c"]);
}

#[test]
fn subscripted_names_are_arrays() {
    let table = discover("A[i] + B[A[0]] * k");
    assert_eq!(scalar_names(&table), vec!["i", "k"]);
    assert_eq!(array_names(&table), vec!["A", "B"]);
}

#[test]
fn array_classification_uses_any_occurrence() {
    // `A` first appears bare, later subscripted: still one array symbol.
    let table = discover("A + A[1]");
    assert_eq!(table.kind_of("A"), Some(SymbolKind::Array));
    assert_eq!(table.len(), 1);
}

#[test]
fn whitespace_before_bracket_still_subscripts() {
    let table = discover("A [2]");
    assert_eq!(array_names(&table), vec!["A"]);
}

#[test]
fn mixed_tokens_are_not_names() {
    let table = discover("x1 + 2y + 12 + z");
    assert_eq!(scalar_names(&table), vec!["z"]);
}

#[test]
fn names_are_case_sensitive() {
    let table = discover("a + A");
    assert_eq!(scalar_names(&table), vec!["a", "A"]);
}

#[test]
fn longer_names_are_distinct_from_prefixes() {
    let table = discover("x+xy");
    assert_eq!(scalar_names(&table), vec!["x", "xy"]);
}

#[test]
fn non_ascii_letters_form_names() {
    let table = discover("é*2 + ß");
    assert_eq!(scalar_names(&table), vec!["é", "ß"]);
}

#[test]
fn single_non_digit_character_is_a_scalar() {
    let table = discover("q");
    assert_eq!(scalar_names(&table), vec!["q"]);
}

#[test]
fn single_digit_has_no_symbols() {
    assert!(discover("7").is_empty());
}

#[test]
fn pure_arithmetic_has_no_symbols() {
    assert!(discover("(1+2)*3.5").is_empty());
    assert!(discover("").is_empty());
}

#[test]
fn token_offsets_track_multibyte_delimiters() {
    let found: Vec<(usize, &str)> = tokens("ab\u{3000}cd+e").collect();
    assert_eq!(found, vec![(0, "ab"), (5, "cd"), (8, "e")]);
}

mod proptest_discovery {
    use super::super::discover;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn every_name_declared_exactly_once(
            names in proptest::collection::vec("[a-c]{1,2}", 1..10),
            subscript_mask in proptest::collection::vec(any::<bool>(), 10),
        ) {
            let mut text = String::new();
            for (i, name) in names.iter().enumerate() {
                if i > 0 {
                    text.push('+');
                }
                text.push_str(name);
                if subscript_mask[i] {
                    text.push_str("[0]");
                }
            }

            let table = discover(&text);
            let mut declared: Vec<&str> = table
                .scalars()
                .iter()
                .map(|s| s.name.as_str())
                .chain(table.arrays().iter().map(|a| a.name.as_str()))
                .collect();
            let total = declared.len();
            declared.sort_unstable();
            declared.dedup();
            prop_assert_eq!(declared.len(), total);

            let mut expected: Vec<&str> = names.iter().map(String::as_str).collect();
            expected.sort_unstable();
            expected.dedup();
            prop_assert_eq!(declared, expected);
        }
    }
}
