//! Rule evaluation.

use std::collections::BTreeMap;

use inquiry_model::{FormField, FormSnapshot};

use crate::report::ErrorReport;
use crate::rule::RuleSet;

/// Evaluate every rule in `rules` against `snapshot`.
///
/// Pure and total: a missing field value reads as the empty string, every
/// rule in a chain runs even after an earlier one fails, and the same inputs
/// always produce the same report. Fields without rules contribute an empty
/// entry and can never invalidate the form.
pub fn evaluate<F: FormField>(rules: &RuleSet<F>, snapshot: &FormSnapshot<F>) -> ErrorReport<F> {
    let mut failures = BTreeMap::new();
    for field in rules.fields() {
        let value = snapshot.value(field);
        let failing: Vec<String> = rules
            .rules_for(field)
            .iter()
            .filter(|rule| !rule.check(value))
            .map(|rule| rule.message().to_string())
            .collect();
        failures.insert(field, failing);
    }
    ErrorReport::from_failures(failures)
}
