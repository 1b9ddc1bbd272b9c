//! Balanced-group matching for parentheses and subscript brackets.
//!
//! Only the delimiter kind that opened the group is counted, so a `(` is
//! closed by the first `)` that brings the paren depth back to zero
//! regardless of brackets in between. Callers bound the search by slicing
//! `text` to the enclosing group.

use crate::errors::{EvalError, EvalResult};

/// Grouping delimiter pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delimiter {
    /// `(` `)`
    Paren,
    /// `[` `]`
    Bracket,
}

impl Delimiter {
    /// Delimiter opened by `byte`, if any.
    #[inline]
    pub fn from_open(byte: u8) -> Option<Delimiter> {
        match byte {
            b'(' => Some(Delimiter::Paren),
            b'[' => Some(Delimiter::Bracket),
            _ => None,
        }
    }

    pub fn open(self) -> u8 {
        match self {
            Delimiter::Paren => b'(',
            Delimiter::Bracket => b'[',
        }
    }

    pub fn close(self) -> u8 {
        match self {
            Delimiter::Paren => b')',
            Delimiter::Bracket => b']',
        }
    }
}

/// Find the index of the delimiter closing the group opened at `open_index`.
///
/// Fails with [`EvalError::Unbalanced`] pointing at the opener when the text
/// runs out before the depth returns to zero. A byte at `open_index` that
/// opens no group is reported as [`EvalError::InvalidToken`].
pub fn find_matching_close(text: &str, open_index: usize) -> EvalResult<usize> {
    let bytes = text.as_bytes();
    let Some(delimiter) = bytes.get(open_index).copied().and_then(Delimiter::from_open) else {
        let found = text.get(open_index..).and_then(|rest| rest.chars().next());
        return Err(EvalError::InvalidToken {
            text: found.map(String::from).unwrap_or_default(),
            offset: open_index,
        });
    };

    let (open, close) = (delimiter.open(), delimiter.close());
    let mut depth = 0usize;
    for (i, &b) in bytes.iter().enumerate().skip(open_index) {
        if b == open {
            depth += 1;
        } else if b == close {
            depth -= 1;
            if depth == 0 {
                return Ok(i);
            }
        }
    }

    Err(EvalError::Unbalanced {
        delimiter: char::from(open),
        offset: open_index,
    })
}

#[cfg(test)]
mod tests;
