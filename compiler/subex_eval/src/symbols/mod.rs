//! Symbol table for the variables of one expression.
//!
//! Scalars and arrays are kept in two insertion-ordered lists (discovery
//! order), with a shared name index so a name resolves to at most one
//! symbol of one kind.

use rustc_hash::FxHashMap;
use std::collections::TryReserveError;
use std::fmt;

/// Which kind of variable a name denotes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// A single number.
    Scalar,
    /// A fixed-length, zero-indexed sequence of numbers.
    Array,
}

impl SymbolKind {
    /// The opposite kind.
    pub fn other(self) -> SymbolKind {
        match self {
            SymbolKind::Scalar => SymbolKind::Array,
            SymbolKind::Array => SymbolKind::Scalar,
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolKind::Scalar => f.write_str("scalar"),
            SymbolKind::Array => f.write_str("array"),
        }
    }
}

/// A named variable holding a single number. Starts at zero.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarSymbol {
    pub name: String,
    pub value: f64,
}

impl ScalarSymbol {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: 0.0,
        }
    }
}

impl fmt::Display for ScalarSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

/// A named variable holding a fixed-length sequence of numbers.
///
/// Starts unsized; the loader allocates `values` from the declared count.
#[derive(Clone, Debug, PartialEq)]
pub struct ArraySymbol {
    pub name: String,
    pub values: Vec<f64>,
}

impl ArraySymbol {
    /// Largest count an array record may declare.
    pub const MAX_LEN: usize = 1 << 24;

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// Replace the contents with `len` zeros.
    ///
    /// Fails without touching the contents when `len` zeros cannot be
    /// allocated.
    pub fn allocate(&mut self, len: usize) -> Result<(), TryReserveError> {
        let mut values = Vec::new();
        values.try_reserve_exact(len)?;
        values.resize(len, 0.0);
        self.values = values;
        Ok(())
    }

    /// Element at `index`, if within `[0, len)`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for ArraySymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = [", self.name)?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

/// Distinct scalar and array symbols of one expression.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    scalars: Vec<ScalarSymbol>,
    arrays: Vec<ArraySymbol>,
    index: FxHashMap<String, (SymbolKind, usize)>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a zero-valued scalar. Returns `false` if the name is taken.
    pub fn declare_scalar(&mut self, name: &str) -> bool {
        if self.index.contains_key(name) {
            return false;
        }
        self.index
            .insert(name.to_owned(), (SymbolKind::Scalar, self.scalars.len()));
        self.scalars.push(ScalarSymbol::new(name));
        true
    }

    /// Declare an unsized array. Returns `false` if the name is taken.
    pub fn declare_array(&mut self, name: &str) -> bool {
        if self.index.contains_key(name) {
            return false;
        }
        self.index
            .insert(name.to_owned(), (SymbolKind::Array, self.arrays.len()));
        self.arrays.push(ArraySymbol::new(name));
        true
    }

    /// Kind of `name`, or `None` if undeclared.
    #[inline]
    pub fn kind_of(&self, name: &str) -> Option<SymbolKind> {
        self.index.get(name).map(|&(kind, _)| kind)
    }

    pub fn scalar(&self, name: &str) -> Option<&ScalarSymbol> {
        match self.index.get(name) {
            Some(&(SymbolKind::Scalar, slot)) => self.scalars.get(slot),
            _ => None,
        }
    }

    pub fn scalar_mut(&mut self, name: &str) -> Option<&mut ScalarSymbol> {
        match self.index.get(name) {
            Some(&(SymbolKind::Scalar, slot)) => self.scalars.get_mut(slot),
            _ => None,
        }
    }

    pub fn array(&self, name: &str) -> Option<&ArraySymbol> {
        match self.index.get(name) {
            Some(&(SymbolKind::Array, slot)) => self.arrays.get(slot),
            _ => None,
        }
    }

    pub fn array_mut(&mut self, name: &str) -> Option<&mut ArraySymbol> {
        match self.index.get(name) {
            Some(&(SymbolKind::Array, slot)) => self.arrays.get_mut(slot),
            _ => None,
        }
    }

    /// Scalars in discovery order.
    pub fn scalars(&self) -> &[ScalarSymbol] {
        &self.scalars
    }

    /// Arrays in discovery order.
    pub fn arrays(&self) -> &[ArraySymbol] {
        &self.arrays
    }

    /// Total number of symbols of both kinds.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
