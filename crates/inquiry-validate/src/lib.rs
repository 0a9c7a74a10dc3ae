//! Rule-based field validation.
//!
//! A [`RuleSet`] maps each form field to an ordered chain of predicate rules;
//! [`evaluate`] runs every rule against a form snapshot and produces an
//! [`ErrorReport`] with the failing messages per field, in declaration order.
//! Evaluation is a pure function of its inputs: it never fails, never keeps
//! state, and is cheap enough to re-run on every edit.

pub mod contact;
mod engine;
mod report;
mod rule;

pub use contact::contact_rules;
pub use engine::evaluate;
pub use report::ErrorReport;
pub use rule::{Rule, RuleSet};
