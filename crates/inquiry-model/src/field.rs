//! Type-safe form field identifiers.
//!
//! Fields are declared as a closed enum per form rather than free-form
//! strings, so rule sets and snapshots are exhaustive over the field set and
//! checked at compile time. The engine and controller stay generic over
//! [`FormField`], which keeps the field set open across forms while closed
//! within one.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A statically declared, enumerable set of form fields.
///
/// Implementors are unit enums. The `Serialize` bound fixes the wire name of
/// each field (payload keys), and `name` exposes the same identifier for
/// display and parsing.
pub trait FormField:
    Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + Serialize + 'static
{
    /// Every field of the form, in declaration order.
    const ALL: &'static [Self];

    /// Stable identifier used in payloads, CLI flags, and messages.
    fn name(&self) -> &'static str;
}

/// Fields of the contact inquiry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    /// Full name of the person submitting the inquiry.
    UserName,
    /// Contact email address.
    Email,
    /// Optional subject line. Carries no validation rules.
    Subject,
    /// Body of the inquiry.
    Details,
}

impl FormField for ContactField {
    const ALL: &'static [Self] = &[
        Self::UserName,
        Self::Email,
        Self::Subject,
        Self::Details,
    ];

    fn name(&self) -> &'static str {
        match self {
            Self::UserName => "userName",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Details => "details",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContactField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "userName" => Ok(Self::UserName),
            "email" => Ok(Self::Email),
            "subject" => Ok(Self::Subject),
            "details" => Ok(Self::Details),
            other => Err(ModelError::UnknownField(other.to_string())),
        }
    }
}
