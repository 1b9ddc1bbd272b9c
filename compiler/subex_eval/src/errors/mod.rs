//! Error taxonomy for loading values and evaluating expressions.
//!
//! Two phase-specific error types:
//! - [`LoadError`]: a value record could not be applied to the symbol table.
//! - [`EvalError`]: an expression could not be evaluated.
//!
//! Every variant maps to a stable [`ErrorCode`]. Expression errors carry a
//! byte offset into the evaluated text so a driver can point at the culprit.
//! Floating-point exceptional results (infinity, NaN) are values, not errors.

use std::fmt;

use crate::symbols::SymbolKind;

/// Result alias for evaluation.
pub type EvalResult<T = f64> = Result<T, EvalError>;

/// Stable error codes.
///
/// Format: E#### where the first digit indicates the phase:
/// - E1xxx: value record loading
/// - E2xxx: expression evaluation
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Record field is not an integer
    E1001,
    /// Record layout contradicts the symbol kind
    E1002,
    /// Array entry index outside the declared size
    E1003,
    /// Array count too large to allocate
    E1004,
    /// Reference to an undeclared name
    E2001,
    /// Scalar subscripted, or array used without subscript
    E2002,
    /// Array subscript out of range
    E2003,
    /// Unbalanced parenthesis or bracket
    E2004,
    /// Unary minus outside the supported forms
    E2005,
    /// Malformed arithmetic
    E2006,
    /// Invalid token
    E2007,
    /// Nesting depth limit exceeded
    E2008,
}

impl ErrorCode {
    /// All error codes, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        ErrorCode::E2006,
        ErrorCode::E2007,
        ErrorCode::E2008,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
            ErrorCode::E2008 => "E2008",
        }
    }

    /// Long-form explanation shown by `subex explain <code>`.
    pub fn explanation(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => {
                "A value record contains a field that is not an integer. Scalar records are \
                 `name value`; array records are `name count (index,value) ...`, and every \
                 number in them must be an integer."
            }
            ErrorCode::E1002 => {
                "A value record's layout does not match the symbol it names. A scalar takes \
                 exactly one value; an array takes a count followed by (index,value) pairs."
            }
            ErrorCode::E1003 => {
                "An array record assigns an index that is outside the count declared in the \
                 same record. Indices are zero-based and must be less than the count."
            }
            ErrorCode::E1004 => {
                "An array record declares a count larger than the evaluator accepts \
                 (16777216 entries) or than memory allows. Check the count field."
            }
            ErrorCode::E2001 => {
                "The expression uses a name that is not in its symbol table. Names are \
                 sequences of letters; check the spelling against the declared symbols."
            }
            ErrorCode::E2002 => {
                "A name is used both as an array (followed by `[`) and as a plain scalar, or \
                 a scalar is subscripted. Each name has exactly one kind per expression."
            }
            ErrorCode::E2003 => {
                "An array subscript evaluated to an index outside `[0, length)` of the array. \
                 Subscripts are truncated toward zero before the range check."
            }
            ErrorCode::E2004 => {
                "An opening `(` or `[` has no matching close, or a closing `)` or `]` appears \
                 without an opener."
            }
            ErrorCode::E2005 => {
                "A minus sign appears where an operand is expected. Only two forms are \
                 supported: an expression that is exactly `-<number>`, and `a - - b`, which \
                 is read as `a + b`. Wrap other negations as `(0-x)`."
            }
            ErrorCode::E2006 => {
                "The arithmetic is incomplete: an operator is missing an operand, two \
                 operands are not separated by an operator, or a group is empty. \
                 Whitespace separates tokens and never joins them: `1 2` is two operands \
                 with no operator between them, not the number `12`."
            }
            ErrorCode::E2007 => {
                "The expression contains text that is neither a name, a decimal literal, an \
                 operator (`+ - * /`) nor a delimiter (`( ) [ ]`)."
            }
            ErrorCode::E2008 => {
                "Parentheses and subscripts are nested deeper than the configured limit. \
                 Raise it with `--max-depth=<n>`."
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse an error code string like `"E2003"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

/// Failure while applying value records to a symbol table.
///
/// `line` is the 1-based position of the record in the input sequence.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("line {line}: field `{field}` of record for `{name}` is not an integer")]
    MalformedRecord {
        line: usize,
        name: String,
        field: String,
    },

    #[error("line {line}: record for {expected} `{name}` has {fields} fields")]
    ShapeMismatch {
        line: usize,
        name: String,
        expected: SymbolKind,
        fields: usize,
    },

    #[error("line {line}: index {index} is outside `{name}` of size {len}")]
    EntryOutOfRange {
        line: usize,
        name: String,
        index: usize,
        len: usize,
    },

    #[error("line {line}: count {len} of `{name}` is too large to allocate")]
    ArrayTooLarge {
        line: usize,
        name: String,
        len: usize,
    },
}

impl LoadError {
    pub fn code(&self) -> ErrorCode {
        match self {
            LoadError::MalformedRecord { .. } => ErrorCode::E1001,
            LoadError::ShapeMismatch { .. } => ErrorCode::E1002,
            LoadError::EntryOutOfRange { .. } => ErrorCode::E1003,
            LoadError::ArrayTooLarge { .. } => ErrorCode::E1004,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            LoadError::MalformedRecord { line, .. }
            | LoadError::ShapeMismatch { line, .. }
            | LoadError::EntryOutOfRange { line, .. }
            | LoadError::ArrayTooLarge { line, .. } => *line,
        }
    }
}

/// Failure while evaluating an expression.
///
/// `offset` is a byte offset into the evaluated text.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("unknown symbol `{name}`")]
    UnknownSymbol { name: String, offset: usize },

    #[error("`{name}` is declared as {declared} but used as {}", .declared.other())]
    SymbolKindMismatch {
        name: String,
        declared: SymbolKind,
        offset: usize,
    },

    #[error("index {index} out of range for `{name}` of length {len}")]
    IndexOutOfRange {
        name: String,
        index: f64,
        len: usize,
        offset: usize,
    },

    #[error("unbalanced `{delimiter}`")]
    Unbalanced { delimiter: char, offset: usize },

    #[error("unary minus is only supported as `-<number>` or `a - - b`")]
    UnsupportedUnaryMinus { offset: usize },

    #[error("malformed arithmetic: {reason}")]
    MalformedArithmetic { reason: &'static str, offset: usize },

    #[error("invalid token `{text}`")]
    InvalidToken { text: String, offset: usize },

    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize, offset: usize },
}

impl EvalError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::UnknownSymbol { .. } => ErrorCode::E2001,
            EvalError::SymbolKindMismatch { .. } => ErrorCode::E2002,
            EvalError::IndexOutOfRange { .. } => ErrorCode::E2003,
            EvalError::Unbalanced { .. } => ErrorCode::E2004,
            EvalError::UnsupportedUnaryMinus { .. } => ErrorCode::E2005,
            EvalError::MalformedArithmetic { .. } => ErrorCode::E2006,
            EvalError::InvalidToken { .. } => ErrorCode::E2007,
            EvalError::NestingTooDeep { .. } => ErrorCode::E2008,
        }
    }

    /// Byte offset of the offending text.
    pub fn offset(&self) -> usize {
        match self {
            EvalError::UnknownSymbol { offset, .. }
            | EvalError::SymbolKindMismatch { offset, .. }
            | EvalError::IndexOutOfRange { offset, .. }
            | EvalError::Unbalanced { offset, .. }
            | EvalError::UnsupportedUnaryMinus { offset }
            | EvalError::MalformedArithmetic { offset, .. }
            | EvalError::InvalidToken { offset, .. }
            | EvalError::NestingTooDeep { offset, .. } => *offset,
        }
    }
}
