//! Recursive evaluation of an expression against its symbol table.
//!
//! The evaluator scans an immutable text buffer by byte offsets. Each span
//! is turned into a flat sequence of [`Term`]s:
//!
//! - a `(`...`)` group is reduced recursively and becomes one operand;
//! - `name[`...`]` reduces the subscript recursively, truncates it toward
//!   zero, and becomes the array element at that index;
//! - a bare name becomes the value of its scalar;
//! - decimal literals and `+ - * /` are taken as they are.
//!
//! The flat sequence is then handed to [`reduce_terms`]. Matching closers
//! are found with [`find_matching_close`] bounded by the enclosing span, so
//! an unclosed opener is reported even when a closer of the same kind
//! appears after the enclosing group ends.
//!
//! Names are resolved as whole identifier tokens, never as substrings: with
//! scalars `x` and `xy`, the text `xy` always means `xy`.

use tracing::{debug, trace};

use crate::errors::{EvalError, EvalResult};
use crate::grouping::find_matching_close;
use crate::reduce::{parse_literal, reduce_terms, scan_word, Operator, Term, Terms};
use crate::stack::ensure_sufficient_stack;
use crate::symbols::{SymbolKind, SymbolTable};

/// Evaluation limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Deepest accepted nesting of groups and subscripts. `0` allows none.
    pub max_depth: usize,
}

impl EvalConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 256;
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Evaluate `text` with the default configuration.
pub fn evaluate(text: &str, table: &SymbolTable) -> EvalResult {
    evaluate_with(text, table, &EvalConfig::default())
}

/// Evaluate `text`, resolving variables from `table`.
#[tracing::instrument(level = "debug", skip(table, config), fields(max_depth = config.max_depth))]
pub fn evaluate_with(text: &str, table: &SymbolTable, config: &EvalConfig) -> EvalResult {
    let reducer = GroupReducer {
        text,
        table,
        max_depth: config.max_depth,
    };
    let value = reducer.reduce(0, text.len(), 0)?;
    debug!(value, "evaluated");
    Ok(value)
}

/// Render `text` with every scalar name replaced by its value and all
/// whitespace removed.
///
/// Only maximal runs of letters are compared against scalar names, so `x`
/// never rewrites part of `xy`. Array names and unknown names are kept.
/// This is a display form: [`evaluate`] never re-reads it.
pub fn substitute(text: &str, table: &SymbolTable) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c.is_whitespace() {
            continue;
        }
        if !c.is_alphabetic() {
            out.push(c);
            continue;
        }

        let mut end = start + c.len_utf8();
        while let Some(&(i, next)) = chars.peek() {
            if !next.is_alphabetic() {
                break;
            }
            end = i + next.len_utf8();
            chars.next();
        }

        let run = &text[start..end];
        match table.scalar(run) {
            Some(symbol) => out.push_str(&symbol.value.to_string()),
            None => out.push_str(run),
        }
    }

    out
}

/// Recursive reducer over spans of one immutable text.
struct GroupReducer<'a> {
    text: &'a str,
    table: &'a SymbolTable,
    max_depth: usize,
}

impl GroupReducer<'_> {
    /// Reduce `text[start..end]`, which sits `depth` groups deep.
    fn reduce(&self, start: usize, end: usize, depth: usize) -> EvalResult {
        if depth > self.max_depth {
            return Err(EvalError::NestingTooDeep {
                limit: self.max_depth,
                offset: start.saturating_sub(1),
            });
        }
        ensure_sufficient_stack(|| self.reduce_span(start, end, depth))
    }

    fn reduce_span(&self, start: usize, end: usize, depth: usize) -> EvalResult {
        let bytes = self.text.as_bytes();
        let mut terms = Terms::new();
        let mut pos = start;

        while pos < end {
            let b = bytes[pos];
            if let Some(op) = Operator::from_byte(b) {
                terms.push(Term::Operator { op, offset: pos });
                pos += 1;
                continue;
            }

            match b {
                b'(' => {
                    let close = self.matching_close(pos, end)?;
                    let value = self.reduce(pos + 1, close, depth + 1)?;
                    trace!(offset = pos, value, "reduced group");
                    terms.push(Term::Operand { value, offset: pos });
                    pos = close + 1;
                }
                b')' | b']' => {
                    return Err(EvalError::Unbalanced {
                        delimiter: char::from(b),
                        offset: pos,
                    });
                }
                b'[' => {
                    return Err(EvalError::MalformedArithmetic {
                        reason: "subscript without an array name",
                        offset: pos,
                    });
                }
                _ => {
                    let Some(c) = self.text[pos..].chars().next() else {
                        break;
                    };
                    if c.is_whitespace() {
                        pos += c.len_utf8();
                        continue;
                    }

                    let word_end = scan_word(self.text, pos).min(end);
                    if word_end == pos {
                        return Err(EvalError::InvalidToken {
                            text: c.to_string(),
                            offset: pos,
                        });
                    }

                    let word = &self.text[pos..word_end];
                    let (value, next) = if word.chars().all(char::is_alphabetic) {
                        self.resolve_name(word, pos, end, depth)?
                    } else {
                        (parse_literal(word, pos)?, word_end)
                    };
                    terms.push(Term::Operand { value, offset: pos });
                    pos = next;
                }
            }
        }

        reduce_terms(&terms, start)
    }

    /// Value of the name starting at `start`, and the offset after its use
    /// (after the closing `]` for a subscripted array).
    fn resolve_name(
        &self,
        name: &str,
        start: usize,
        end: usize,
        depth: usize,
    ) -> EvalResult<(f64, usize)> {
        let name_end = start + name.len();
        let after = end - self.text[name_end..end].trim_start().len();
        let subscripted = after < end && self.text.as_bytes()[after] == b'[';

        match (self.table.kind_of(name), subscripted) {
            (Some(SymbolKind::Scalar), false) => {
                let value = self
                    .table
                    .scalar(name)
                    .map(|symbol| symbol.value)
                    .ok_or_else(|| unknown_symbol(name, start))?;
                Ok((value, name_end))
            }
            (Some(SymbolKind::Array), true) => {
                let close = self.matching_close(after, end)?;
                let index = self.reduce(after + 1, close, depth + 1)?;
                let value = self.element(name, index, start)?;
                trace!(name, index, value, "resolved element");
                Ok((value, close + 1))
            }
            (Some(declared), _) => Err(EvalError::SymbolKindMismatch {
                name: name.to_owned(),
                declared,
                offset: start,
            }),
            (None, _) => Err(unknown_symbol(name, start)),
        }
    }

    /// Element of array `name` at `index` truncated toward zero.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss,
        reason = "index is range-checked against the array length before the cast"
    )]
    fn element(&self, name: &str, index: f64, offset: usize) -> EvalResult {
        let array = self
            .table
            .array(name)
            .ok_or_else(|| unknown_symbol(name, offset))?;
        let index = index.trunc();
        let out_of_range = || EvalError::IndexOutOfRange {
            name: name.to_owned(),
            index,
            len: array.len(),
            offset,
        };

        // NaN fails both comparisons.
        if !(index >= 0.0 && index < array.len() as f64) {
            return Err(out_of_range());
        }
        array.get(index as usize).ok_or_else(out_of_range)
    }

    fn matching_close(&self, open: usize, end: usize) -> EvalResult<usize> {
        find_matching_close(&self.text[..end], open)
    }
}

#[cold]
fn unknown_symbol(name: &str, offset: usize) -> EvalError {
    EvalError::UnknownSymbol {
        name: name.to_owned(),
        offset,
    }
}
