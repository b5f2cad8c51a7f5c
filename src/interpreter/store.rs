use std::collections::HashMap;

use dashu::integer::IBig;

/// Session-wide mapping from variable names to their values.
///
/// Entries are only created or replaced by `=`; nothing is ever removed.
/// Names are taken as written, so a numeral such as `5` can be a key too.
#[derive(Debug, Default, Clone)]
pub struct VariableStore {
    values:   HashMap<String, IBig>,
    numerals: bool,
}

/// Whether a name looks like a number: it starts with a digit or a sign.
#[must_use]
pub fn is_numeral(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_digit() || c == '-')
}

impl VariableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&IBig> {
        self.values.get(name)
    }

    /// Inserts a variable or overwrites its previous value.
    pub fn set(&mut self, name: impl Into<String>, value: IBig) {
        let name = name.into();
        self.numerals |= is_numeral(&name);
        self.values.insert(name, value);
    }

    /// Whether any key is a numeral, which makes computed values resolvable
    /// through the store as well.
    #[must_use]
    pub const fn has_numeral_names(&self) -> bool {
        self.numerals
    }

    /// Number of variables defined so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
