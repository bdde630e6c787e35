//! Which fields the user has interacted with

use std::collections::BTreeSet;

use crate::value::FieldId;

/// Fields that have been blurred at least once
///
/// Touched state only decides whether an error is shown inline; it never
/// changes whether a field is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TouchedState<F> {
    fields: BTreeSet<F>,
}

impl<F: FieldId> TouchedState<F> {
    pub fn new() -> Self {
        Self {
            fields: BTreeSet::new(),
        }
    }

    /// Mark a field touched. Returns `true` the first time.
    pub fn touch(&mut self, field: F) -> bool {
        self.fields.insert(field)
    }

    /// Mark every field of the form touched (submit attempt)
    pub fn touch_all(&mut self) {
        self.fields.extend(F::ALL.iter().copied());
    }

    pub fn is_touched(&self, field: F) -> bool {
        self.fields.contains(&field)
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = F> + '_ {
        self.fields.iter().copied()
    }
}

impl<F: FieldId> Default for TouchedState<F> {
    fn default() -> Self {
        Self::new()
    }
}
