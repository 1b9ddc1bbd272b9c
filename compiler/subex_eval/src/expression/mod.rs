//! The expression lifecycle: discover, load, evaluate.

use crate::discovery::discover;
use crate::errors::{EvalResult, LoadError};
use crate::evaluator::{evaluate_with, substitute, EvalConfig};
use crate::loader::{load_values, LoadSummary};
use crate::symbols::{ArraySymbol, ScalarSymbol, SymbolTable};

/// An expression together with the symbols discovered in it.
///
/// Construction runs discovery, so every name in the text has a zero-valued
/// symbol before any values are loaded. The text is never modified;
/// evaluating twice gives the same result. To evaluate the same text with
/// values from another source, build a new `Expression`.
#[derive(Clone, Debug)]
pub struct Expression {
    text: String,
    symbols: SymbolTable,
}

impl Expression {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let symbols = discover(&text);
        Self { text, symbols }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn scalars(&self) -> &[ScalarSymbol] {
        self.symbols.scalars()
    }

    pub fn arrays(&self) -> &[ArraySymbol] {
        self.symbols.arrays()
    }

    /// Apply value records to the discovered symbols.
    pub fn load_values<I, S>(&mut self, records: I) -> Result<LoadSummary, LoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        load_values(records, &mut self.symbols)
    }

    pub fn evaluate(&self) -> EvalResult {
        self.evaluate_with(&EvalConfig::default())
    }

    pub fn evaluate_with(&self, config: &EvalConfig) -> EvalResult {
        evaluate_with(&self.text, &self.symbols, config)
    }

    /// The text with scalar values substituted, for display.
    pub fn substituted(&self) -> String {
        substitute(&self.text, &self.symbols)
    }
}
