use std::fmt;
use std::time::Duration;

use super::consequence::Consequence;

/// Detailed result of one match pass, returned by
/// [`RuleStore::match_window_detailed()`](crate::RuleStore::match_window_detailed).
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct MatchReport {
    consequences: Vec<Consequence>,
    matched: Vec<String>,
    expired: Vec<String>,
    duration: Duration,
}

impl MatchReport {
    pub(crate) fn new(
        consequences: Vec<Consequence>,
        matched: Vec<String>,
        expired: Vec<String>,
        duration: Duration,
    ) -> Self {
        Self {
            consequences,
            matched,
            expired,
            duration,
        }
    }

    /// Consequences of every matching rule, in rule order then term order.
    #[must_use]
    pub fn consequences(&self) -> &[Consequence] {
        &self.consequences
    }

    /// Labels of the rules that matched, in evaluation order.
    #[must_use]
    pub fn matched(&self) -> &[String] {
        &self.matched
    }

    /// Labels of single-use rules removed by this pass.
    #[must_use]
    pub fn expired(&self) -> &[String] {
        &self.expired
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn into_consequences(self) -> Vec<Consequence> {
        self.consequences
    }
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "matched: [{}]", self.matched.join(", "))?;
        write!(f, ", expired: [{}]", self.expired.join(", "))?;
        write!(f, ", consequences: {}", self.consequences.len())?;
        write!(f, ", duration: {:?}", self.duration)
    }
}
