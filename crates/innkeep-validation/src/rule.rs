//! Rules, rule sets and the validation runtime

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::errors::ValidationErrors;
use crate::value::{FieldId, FieldValue, FormValues};

type Predicate<F> = dyn Fn(&FieldValue<'_>, &dyn FormValues<F>) -> bool + Send + Sync;

/// A single predicate + message pair applied to one field
///
/// The predicate receives the field's value and the whole form, so
/// cross-field checks (confirm password, check-out after check-in) are
/// ordinary rules.
pub struct Rule<F> {
    predicate: Arc<Predicate<F>>,
    message: Cow<'static, str>,
}

impl<F> Rule<F> {
    pub fn new<P>(message: impl Into<Cow<'static, str>>, predicate: P) -> Self
    where
        P: Fn(&FieldValue<'_>, &dyn FormValues<F>) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            message: message.into(),
        }
    }

    /// Message reported when the predicate fails
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Replace the message, keeping the predicate
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// `true` when the value passes
    pub fn check(&self, value: &FieldValue<'_>, form: &dyn FormValues<F>) -> bool {
        (self.predicate)(value, form)
    }
}

impl<F> Clone for Rule<F> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            message: self.message.clone(),
        }
    }
}

impl<F> fmt::Debug for Rule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("message", &self.message).finish()
    }
}

/// Ordered rules per field. The first failing rule of a field wins.
#[derive(Debug, Clone)]
pub struct RuleSet<F> {
    fields: BTreeMap<F, Vec<Rule<F>>>,
}

impl<F: FieldId> RuleSet<F> {
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Append rules to a field, after any rules it already has
    pub fn field(mut self, field: F, rules: impl IntoIterator<Item = Rule<F>>) -> Self {
        self.fields.entry(field).or_default().extend(rules);
        self
    }

    /// Append rules to a field only when `condition` holds
    ///
    /// When the condition is false the field is left out of the set entirely
    /// and is therefore never validated or reported.
    pub fn field_if(
        self,
        condition: bool,
        field: F,
        rules: impl IntoIterator<Item = Rule<F>>,
    ) -> Self {
        if condition {
            self.field(field, rules)
        } else {
            self
        }
    }

    /// Drop a field and all of its rules
    pub fn without(mut self, field: F) -> Self {
        self.fields.remove(&field);
        self
    }

    pub fn contains(&self, field: F) -> bool {
        self.fields.contains_key(&field)
    }

    pub fn rules_for(&self, field: F) -> &[Rule<F>] {
        self.fields.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Fields that have rules, in field order
    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.fields.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl<F: FieldId> Default for RuleSet<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate `data` against `rules`
///
/// Every field in `rules` is checked in order; the first failing rule of a
/// field contributes its message and the field's remaining rules are skipped.
/// Fields that pass, and fields without rules, are absent from the result.
pub fn validate_form<F, D>(data: &D, rules: &RuleSet<F>) -> ValidationErrors<F>
where
    F: FieldId,
    D: FormValues<F>,
{
    let form: &dyn FormValues<F> = data;
    let mut errors = ValidationErrors::new();

    for (&field, field_rules) in &rules.fields {
        let value = form.value(field);
        if let Some(failed) = field_rules.iter().find(|rule| !rule.check(&value, form)) {
            errors.insert(field, failed.message());
        }
    }

    tracing::trace!(
        checked = rules.len(),
        failed = errors.len(),
        "validated form"
    );

    errors
}
