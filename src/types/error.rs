use thiserror::Error;

use super::value::ValueKind;

/// Errors produced while building, registering or removing rules.
///
/// The `Display` strings are the exact messages reported to command callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("Rule label cannot be empty")]
    EmptyLabel,

    #[error("Rule label \"{label}\" is already in use")]
    DuplicateLabel { label: String },

    #[error("Unknown rule label operation \"{op}\"")]
    InvalidOperatorForLabel { op: char },

    #[error("Unknown rule consequence operation \"{op}\"")]
    InvalidOperatorForConsequence { op: char },

    #[error("Condition \"{property}\" does not support operation \"{op}\"")]
    InvalidOperatorForProperty { property: String, op: char },

    #[error("Can not parse value \"{value}\" from condition \"{property}\": \"{diagnostic}\"")]
    InvalidRegex {
        property: String,
        value: String,
        diagnostic: String,
    },

    #[error("Can not parse value \"{value}\" from condition \"{property}\": \"expected {expected}\"")]
    TypeMismatch {
        property: String,
        value: String,
        expected: ValueKind,
    },

    #[error("Unknown rule condition \"{name}\"")]
    UnknownProperty { name: String },

    #[error("Unknown rule consequence \"{name}\"")]
    UnknownConsequence { name: String },

    #[error("Unknown rule flag \"{flag}\"")]
    UnknownFlag { flag: String },

    #[error("Expected a condition after \"{flag}\"")]
    DanglingNegation { flag: String },

    #[error("Couldn't find any rules with label \"{selector}\"")]
    LabelNotFound { selector: String },

    #[error("Not enough arguments")]
    NotEnoughArguments,

    #[error("Argument {arg:?} must not contain tabs or newlines")]
    ControlCharacter { arg: String },
}

impl RuleError {
    /// Whether the reported message ends with a newline.
    ///
    /// Parse-time failures are reported as complete lines; store lookups
    /// report the bare message.
    #[must_use]
    pub fn is_line_terminated(&self) -> bool {
        !matches!(
            self,
            RuleError::EmptyLabel
                | RuleError::DuplicateLabel { .. }
                | RuleError::LabelNotFound { .. }
        )
    }
}
