use std::fmt;

use super::property::ConsequenceName;

/// A placement directive: `name=value`.
///
/// Values are kept as written; interpreting them is up to the window manager
/// (see [`ClientChanges`](crate::ClientChanges)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consequence {
    name: ConsequenceName,
    value: String,
}

impl Consequence {
    #[must_use]
    pub fn new(name: ConsequenceName, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> ConsequenceName {
        self.name
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Consequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}
