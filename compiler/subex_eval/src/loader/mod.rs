//! Symbol loader: apply value records to a symbol table.
//!
//! Record forms, one per line, fields separated by whitespace:
//!
//! ```text
//! x 5                     scalar: name value
//! A 3 (0,10) (2,30)       array:  name count (index,value)...
//! ```
//!
//! The symbol a record names decides how it is read: a scalar takes exactly
//! one value, an array takes a count (at most [`ArraySymbol::MAX_LEN`]) and
//! any number of pairs. Inside the pairs, `(`, `)` and `,` separate
//! numbers just like whitespace does.
//! Records naming unknown symbols are skipped without inspecting their
//! fields; blank lines are ignored.

use tracing::debug;

use crate::errors::LoadError;
use crate::symbols::{ArraySymbol, SymbolKind, SymbolTable};

/// Counts of records applied and skipped by [`load_values`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub applied: usize,
    pub skipped: usize,
}

/// Apply every record in `records` to `table`.
///
/// Stops at the first malformed record; records before it stay applied.
#[tracing::instrument(level = "debug", skip_all)]
pub fn load_values<I, S>(records: I, table: &mut SymbolTable) -> Result<LoadSummary, LoadError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut summary = LoadSummary::default();

    for (i, record) in records.into_iter().enumerate() {
        let line = i + 1;
        let fields: Vec<&str> = record.as_ref().split_whitespace().collect();
        let Some(&name) = fields.first() else {
            continue;
        };

        match table.kind_of(name) {
            None => {
                debug!(line, name, "skipping record for unknown symbol");
                summary.skipped += 1;
            }
            Some(SymbolKind::Scalar) => {
                load_scalar(line, &fields, table)?;
                summary.applied += 1;
            }
            Some(SymbolKind::Array) => {
                load_array(line, &fields, table)?;
                summary.applied += 1;
            }
        }
    }

    debug!(applied = summary.applied, skipped = summary.skipped, "loaded values");
    Ok(summary)
}

fn load_scalar(line: usize, fields: &[&str], table: &mut SymbolTable) -> Result<(), LoadError> {
    let name = fields[0];
    let &[_, value] = fields else {
        return Err(LoadError::ShapeMismatch {
            line,
            name: name.to_owned(),
            expected: SymbolKind::Scalar,
            fields: fields.len(),
        });
    };

    let value = parse_integer::<i64>(line, name, value)?;
    if let Some(symbol) = table.scalar_mut(name) {
        symbol.value = to_number(value);
        debug!(line, name, value, "loaded scalar");
    }
    Ok(())
}

fn load_array(line: usize, fields: &[&str], table: &mut SymbolTable) -> Result<(), LoadError> {
    let name = fields[0];
    let Some(&count) = fields.get(1) else {
        return Err(LoadError::ShapeMismatch {
            line,
            name: name.to_owned(),
            expected: SymbolKind::Array,
            fields: fields.len(),
        });
    };
    let len = parse_integer::<usize>(line, name, count)?;
    let too_large = || LoadError::ArrayTooLarge {
        line,
        name: name.to_owned(),
        len,
    };
    if len > ArraySymbol::MAX_LEN {
        return Err(too_large());
    }

    let numbers: Vec<&str> = fields[2..]
        .iter()
        .flat_map(|field| field.split(['(', ')', ',']))
        .filter(|number| !number.is_empty())
        .collect();

    let mut entries = Vec::with_capacity(numbers.len() / 2);
    for pair in numbers.chunks(2) {
        let &[index, value] = pair else {
            return Err(LoadError::ShapeMismatch {
                line,
                name: name.to_owned(),
                expected: SymbolKind::Array,
                fields: fields.len(),
            });
        };
        let index = parse_integer::<usize>(line, name, index)?;
        let value = parse_integer::<i64>(line, name, value)?;
        if index >= len {
            return Err(LoadError::EntryOutOfRange {
                line,
                name: name.to_owned(),
                index,
                len,
            });
        }
        entries.push((index, value));
    }

    if let Some(symbol) = table.array_mut(name) {
        symbol.allocate(len).map_err(|_| too_large())?;
        for (index, value) in entries {
            symbol.values[index] = to_number(value);
        }
        debug!(line, name, len, "loaded array");
    }
    Ok(())
}

fn parse_integer<T: std::str::FromStr>(
    line: usize,
    name: &str,
    field: &str,
) -> Result<T, LoadError> {
    field.parse().map_err(|_| LoadError::MalformedRecord {
        line,
        name: name.to_owned(),
        field: field.to_owned(),
    })
}

#[allow(
    clippy::cast_precision_loss,
    reason = "symbol values are f64; integers beyond 2^53 round"
)]
fn to_number(value: i64) -> f64 {
    value as f64
}
