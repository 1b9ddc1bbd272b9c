//! Arithmetic reduction of flat operand/operator sequences.
//!
//! A flat sequence has no groups left: every operand is already a number.
//! Reduction runs in two left-to-right phases:
//!
//! 1. Fold `*` and `/` into the operand on their left, producing a chain of
//!    additive terms.
//! 2. Fold the chain with `+` and `-`.
//!
//! Minus signs in operand position are accepted in exactly two forms:
//! - the whole sequence is `-<operand>` (negation);
//! - `a - - b`, read as `a + b`, with both minus signs consumed together.
//!
//! Any other minus in operand position is [`EvalError::UnsupportedUnaryMinus`].
//! Division follows IEEE-754: `1/0` is infinity, `0/0` is NaN.

use smallvec::{smallvec, SmallVec};

use crate::errors::{EvalError, EvalResult};

/// Binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    #[inline]
    pub fn from_byte(byte: u8) -> Option<Operator> {
        match byte {
            b'+' => Some(Operator::Add),
            b'-' => Some(Operator::Sub),
            b'*' => Some(Operator::Mul),
            b'/' => Some(Operator::Div),
            _ => None,
        }
    }

    /// `*` and `/` bind tighter than `+` and `-`.
    #[inline]
    pub fn is_multiplicative(self) -> bool {
        matches!(self, Operator::Mul | Operator::Div)
    }

    #[inline]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Sub => left - right,
            Operator::Mul => left * right,
            Operator::Div => left / right,
        }
    }
}

/// One element of a flat sequence, with the byte offset it came from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Term {
    Operand { value: f64, offset: usize },
    Operator { op: Operator, offset: usize },
}

/// Terms of one group. Most groups are short enough to stay inline.
pub(crate) type Terms = SmallVec<[Term; 16]>;

/// Evaluate a flat arithmetic string such as `"2+3*4"`.
///
/// The text may contain decimal literals and `+ - * /` only; whitespace is
/// ignored. Names, groups and any other characters are rejected.
pub fn reduce_flat(text: &str) -> EvalResult {
    let bytes = text.as_bytes();
    let mut terms = Terms::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let b = bytes[pos];
        if b.is_ascii_whitespace() {
            pos += 1;
        } else if let Some(op) = Operator::from_byte(b) {
            terms.push(Term::Operator { op, offset: pos });
            pos += 1;
        } else {
            let end = scan_word(text, pos);
            let end = if end == pos { next_char_end(text, pos) } else { end };
            let value = parse_literal(&text[pos..end], pos)?;
            terms.push(Term::Operand { value, offset: pos });
            pos = end;
        }
    }

    reduce_terms(&terms, 0)
}

/// Reduce a flat sequence of terms.
///
/// `start` is the offset reported when the sequence is empty.
pub fn reduce_terms(terms: &[Term], start: usize) -> EvalResult {
    if let [Term::Operator {
        op: Operator::Sub, ..
    }, Term::Operand { value, .. }] = terms
    {
        return Ok(-value);
    }

    let mut pos = 0;
    let first = next_operand(terms, &mut pos, start, "expected an operand")?;

    // Phase 1: multiplicative folding into an additive chain.
    let mut chain: SmallVec<[(Operator, f64); 8]> = smallvec![(Operator::Add, first)];
    while let Some((op, offset)) = next_operator(terms, &mut pos)? {
        let right = next_operand(terms, &mut pos, offset, "operator is missing its right operand")?;
        if op.is_multiplicative() {
            if let Some((_, acc)) = chain.last_mut() {
                *acc = op.apply(*acc, right);
            }
        } else {
            chain.push((op, right));
        }
    }

    // Phase 2: additive folding, left to right.
    let mut links = chain.iter();
    let initial = links.next().map_or(first, |&(_, value)| value);
    Ok(links.fold(initial, |acc, &(op, value)| op.apply(acc, value)))
}

fn next_operand(
    terms: &[Term],
    pos: &mut usize,
    anchor: usize,
    missing: &'static str,
) -> EvalResult {
    match terms.get(*pos) {
        Some(&Term::Operand { value, .. }) => {
            *pos += 1;
            Ok(value)
        }
        Some(&Term::Operator {
            op: Operator::Sub,
            offset,
        }) => Err(EvalError::UnsupportedUnaryMinus { offset }),
        Some(&Term::Operator { offset, .. }) => Err(EvalError::MalformedArithmetic {
            reason: "operator is missing its left operand",
            offset,
        }),
        None => Err(EvalError::MalformedArithmetic {
            reason: missing,
            offset: anchor,
        }),
    }
}

/// Next operator, collapsing an adjacent `- -` pair into `+`.
fn next_operator(terms: &[Term], pos: &mut usize) -> EvalResult<Option<(Operator, usize)>> {
    match terms.get(*pos) {
        None => Ok(None),
        Some(&Term::Operator {
            op: Operator::Sub,
            offset,
        }) if matches!(
            terms.get(*pos + 1),
            Some(Term::Operator {
                op: Operator::Sub,
                ..
            })
        ) =>
        {
            *pos += 2;
            Ok(Some((Operator::Add, offset)))
        }
        Some(&Term::Operator { op, offset }) => {
            *pos += 1;
            Ok(Some((op, offset)))
        }
        Some(&Term::Operand { offset, .. }) => Err(EvalError::MalformedArithmetic {
            reason: "missing operator between operands",
            offset,
        }),
    }
}

/// End of the word starting at `start`: a maximal run of alphanumeric
/// characters and `.`.
pub(crate) fn scan_word(text: &str, start: usize) -> usize {
    text[start..]
        .char_indices()
        .find(|&(_, c)| !(c.is_alphanumeric() || c == '.'))
        .map_or(text.len(), |(i, _)| start + i)
}

/// End of the single character starting at `start`.
pub(crate) fn next_char_end(text: &str, start: usize) -> usize {
    text[start..]
        .chars()
        .next()
        .map_or(text.len(), |c| start + c.len_utf8())
}

/// Parse a decimal literal (`12`, `1.5`, `.5`, `3.`). No sign, no exponent.
pub(crate) fn parse_literal(word: &str, offset: usize) -> EvalResult {
    let is_decimal = word.bytes().any(|b| b.is_ascii_digit())
        && word.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        && word.bytes().filter(|&b| b == b'.').count() <= 1;

    let invalid = || EvalError::InvalidToken {
        text: word.to_owned(),
        offset,
    };
    if !is_decimal {
        return Err(invalid());
    }
    word.parse::<f64>().map_err(|_| invalid())
}

#[cfg(test)]
mod tests;
