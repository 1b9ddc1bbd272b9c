//! Subex Eval - Evaluator for arithmetic expressions with scalar and array
//! variables.
//!
//! An expression such as `a - varx + arrayA[2]` is evaluated in three steps:
//!
//! 1. [`discover`] scans the text and declares every name it finds, as an
//!    array when it is ever followed by `[`, as a scalar otherwise.
//! 2. [`load_values`] applies `name value` and `name count (i,v) ...`
//!    records to the declared symbols.
//! 3. [`evaluate`] reduces groups and subscripts recursively, then folds
//!    the flat sequence with `*` `/` binding tighter than `+` `-`.
//!
//! [`Expression`] bundles the three steps.
//!
//! # Tracing
//!
//! Discovery, loading, and evaluation are instrumented with `tracing`.
//! Set `RUST_LOG=subex_eval=debug` for one line per phase, or `trace` to
//! see every reduced group and resolved element.

pub mod discovery;
pub mod errors;
pub mod evaluator;
pub mod expression;
pub mod grouping;
pub mod loader;
pub mod reduce;
mod stack;
pub mod symbols;

pub use discovery::discover;
pub use errors::{ErrorCode, EvalError, EvalResult, LoadError};
pub use evaluator::{evaluate, evaluate_with, substitute, EvalConfig};
pub use expression::Expression;
pub use grouping::{find_matching_close, Delimiter};
pub use loader::{load_values, LoadSummary};
pub use reduce::{reduce_flat, reduce_terms, Operator, Term};
pub use symbols::{ArraySymbol, ScalarSymbol, SymbolKind, SymbolTable};
