// File: src/form_state.rs
// Purpose: Per-form editing state: current values, touched fields and errors

use innkeep_validation::{TouchedState, Validate, ValidationErrors};

use crate::forms::{Editable, FieldInput};

/// Editing state of one form
///
/// Errors are recomputed from the current values after every change. They are
/// only displayed for fields the user has touched; [`FormState::submit`]
/// touches every field first, so a failed submit shows everything at once.
#[derive(Debug, Clone)]
pub struct FormState<T: Validate> {
    data: T,
    initial: T,
    touched: TouchedState<T::Field>,
    errors: ValidationErrors<T::Field>,
}

impl<T: Validate + Clone> FormState<T> {
    /// Start editing `data`; reset returns to this value
    pub fn new(data: T) -> Self {
        let errors = data.errors();
        Self {
            initial: data.clone(),
            data,
            touched: TouchedState::new(),
            errors,
        }
    }

    /// Current values
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Mutate the values in place and revalidate
    pub fn update(&mut self, change: impl FnOnce(&mut T)) {
        change(&mut self.data);
        self.revalidate();
    }

    /// Mark a field as visited
    pub fn blur(&mut self, field: T::Field) {
        if self.touched.touch(field) {
            tracing::trace!(field = ?field, "field touched");
        }
    }

    pub fn is_touched(&self, field: T::Field) -> bool {
        self.touched.is_touched(field)
    }

    pub fn touch_all(&mut self) {
        self.touched.touch_all();
    }

    /// Every current error, touched or not
    pub fn errors(&self) -> &ValidationErrors<T::Field> {
        &self.errors
    }

    /// Errors the user should see right now
    pub fn visible_errors(&self) -> ValidationErrors<T::Field> {
        self.errors.visible_to(&self.touched)
    }

    pub fn visible_error(&self, field: T::Field) -> Option<&str> {
        if self.touched.is_touched(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Gate a submission: touch everything, then hand out the data when valid
    pub fn submit(&mut self) -> Result<&T, ValidationErrors<T::Field>> {
        self.touch_all();
        self.revalidate();
        if self.errors.is_empty() {
            Ok(&self.data)
        } else {
            tracing::debug!(errors = self.errors.len(), "submission blocked by validation");
            Err(self.errors.clone())
        }
    }

    /// Back to the initial values with nothing touched
    pub fn reset(&mut self) {
        self.data = self.initial.clone();
        self.touched.clear();
        self.revalidate();
    }

    pub fn into_data(self) -> T {
        self.data
    }

    fn revalidate(&mut self) {
        self.errors = self.data.errors();
    }
}

impl<T: Editable + Clone> FormState<T> {
    /// Write one field from an input event and revalidate
    pub fn set(&mut self, field: T::Field, input: impl Into<FieldInput>) {
        self.data.apply(field, input.into());
        self.revalidate();
    }
}

impl<T: Validate + Clone + Default> Default for FormState<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
