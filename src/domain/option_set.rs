//! Ordered, append-only collection of options for one context.

use crate::domain::option::CommandOption;

/// Options scoped to the global context or to one sub-operation.
///
/// Flattening preserves append order and passes duplicates through:
/// rejecting repeated flags is camelot's job, not ours.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionSet<O> {
    options: Vec<O>,
}

impl<O> Default for OptionSet<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> OptionSet<O> {
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
        }
    }

    /// Append an option.
    pub fn push(&mut self, option: O) {
        self.options.push(option);
    }

    /// Builder-style append.
    pub fn with(mut self, option: O) -> Self {
        self.push(option);
        self
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, O> {
        self.options.iter()
    }
}

impl<O: CommandOption> OptionSet<O> {
    /// Append the tokens of every option, in append order.
    pub fn flatten_into(&self, tokens: &mut Vec<String>) {
        for option in &self.options {
            option.flatten_into(tokens);
        }
    }

    pub fn flatten(&self) -> Vec<String> {
        let mut tokens = Vec::new();
        self.flatten_into(&mut tokens);
        tokens
    }
}

impl<O> From<Vec<O>> for OptionSet<O> {
    fn from(options: Vec<O>) -> Self {
        Self { options }
    }
}

impl<O> FromIterator<O> for OptionSet<O> {
    fn from_iter<I: IntoIterator<Item = O>>(iter: I) -> Self {
        Self {
            options: iter.into_iter().collect(),
        }
    }
}

impl<O> Extend<O> for OptionSet<O> {
    fn extend<I: IntoIterator<Item = O>>(&mut self, iter: I) {
        self.options.extend(iter);
    }
}

impl<O> IntoIterator for OptionSet<O> {
    type Item = O;
    type IntoIter = std::vec::IntoIter<O>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.into_iter()
    }
}

impl<'a, O> IntoIterator for &'a OptionSet<O> {
    type Item = &'a O;
    type IntoIter = std::slice::Iter<'a, O>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}
