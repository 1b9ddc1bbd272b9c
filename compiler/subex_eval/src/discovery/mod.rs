//! Symbol discovery: find the variable names of an expression.
//!
//! The text is split on the delimiters (whitespace and `*+-/()[]`). A token
//! made entirely of letters is a variable name; anything else (`12`, `x1`)
//! is not. Each name is declared once, in first-occurrence order, as an
//! array if any occurrence is followed by `[` and as a scalar otherwise.
//!
//! As an extension to strict token adjacency, whitespace between a name and
//! its `[` is skipped: `A [0]` subscripts `A` just like `A[0]`. The
//! evaluator resolves subscripts the same way, so the two never disagree.

use rustc_hash::FxHashSet;

use crate::symbols::SymbolTable;

/// Characters separating tokens, besides whitespace.
const OPERATOR_DELIMITERS: &[char] = &['*', '+', '-', '/', '(', ')', '[', ']'];

#[inline]
fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || OPERATOR_DELIMITERS.contains(&c)
}

#[inline]
fn is_name(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

/// Build the symbol table for `text`, with every value at zero.
#[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn discover(text: &str) -> SymbolTable {
    let mut table = SymbolTable::new();

    // A lone non-digit character is a bare variable.
    let mut chars = text.chars();
    if let (Some(only), None) = (chars.next(), chars.next()) {
        if !only.is_ascii_digit() {
            table.declare_scalar(text);
        }
        return table;
    }

    let occurrences: Vec<(&str, bool)> = tokens(text)
        .filter(|&(_, token)| is_name(token))
        .map(|(start, token)| (token, followed_by_bracket(text, start + token.len())))
        .collect();

    let arrays: FxHashSet<&str> = occurrences
        .iter()
        .filter(|&&(_, subscripted)| subscripted)
        .map(|&(name, _)| name)
        .collect();

    for &(name, _) in &occurrences {
        if arrays.contains(name) {
            table.declare_array(name);
        } else {
            table.declare_scalar(name);
        }
    }

    tracing::debug!(
        scalars = table.scalars().len(),
        arrays = table.arrays().len(),
        "discovered symbols"
    );
    table
}

/// Non-delimiter tokens of `text` with their byte offsets.
fn tokens(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split(is_delimiter)
        .scan(0usize, move |offset, token| {
            let start = *offset;
            // Every split point consumes exactly one delimiter character.
            let delimiter_len = text[start + token.len()..]
                .chars()
                .next()
                .map_or(0, char::len_utf8);
            *offset = start + token.len() + delimiter_len;
            Some((start, token))
        })
        .filter(|(_, token)| !token.is_empty())
}

/// Whether the first non-whitespace character at or after `end` is `[`.
fn followed_by_bracket(text: &str, end: usize) -> bool {
    text[end..].trim_start().starts_with('[')
}

#[cfg(test)]
mod tests;
