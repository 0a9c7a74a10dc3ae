//! Validation rules and the per-form rule set.

use std::collections::BTreeMap;
use std::fmt;

use inquiry_model::FormField;

/// One validation check: a named predicate over the field's current value
/// plus the message shown when the predicate fails.
///
/// Rules are plain data. Predicates are function references rather than
/// closures so a rule chain reads as a declaration, not behavior.
#[derive(Clone)]
pub struct Rule {
    predicate: fn(&str) -> bool,
    message: String,
}

impl Rule {
    pub fn new(predicate: fn(&str) -> bool, message: impl Into<String>) -> Self {
        Self {
            predicate,
            message: message.into(),
        }
    }

    /// Run the predicate against a field value. True means the rule passes.
    pub fn check(&self, value: &str) -> bool {
        (self.predicate)(value)
    }

    /// Message surfaced when this rule fails.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Read-only mapping from field to its ordered rule chain.
///
/// Constructed once at startup and immutable afterwards. A field with no
/// entry carries no validation; that is a valid, silent case, not a failure.
/// Rule order within a chain is significant: only the first failing rule's
/// message is ever displayed.
#[derive(Debug, Clone)]
pub struct RuleSet<F: FormField> {
    rules: BTreeMap<F, Vec<Rule>>,
}

impl<F: FormField> RuleSet<F> {
    pub fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Declare the rule chain for one field.
    #[must_use]
    pub fn with_rules(mut self, field: F, rules: Vec<Rule>) -> Self {
        self.rules.insert(field, rules);
        self
    }

    /// The rule chain for `field`, empty when the field carries no rules.
    pub fn rules_for(&self, field: F) -> &[Rule] {
        self.rules.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Fields that carry at least one declared rule chain.
    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.rules.keys().copied()
    }
}

impl<F: FormField> Default for RuleSet<F> {
    fn default() -> Self {
        Self::new()
    }
}
