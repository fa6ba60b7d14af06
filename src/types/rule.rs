use std::fmt;

use super::condition::Condition;
use super::consequence::Consequence;

/// A registered rule: when every condition holds for a new window, its
/// consequences apply to that window.
///
/// Rules are created through a [`RuleBuilder`] handed to
/// [`RuleStore::insert()`](crate::RuleStore::insert), which assigns the label.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub(crate) label: String,
    pub(crate) once: bool,
    pub(crate) conditions: Vec<Condition>,
    pub(crate) consequences: Vec<Consequence>,
}

impl Rule {
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the rule expires after its first match.
    #[must_use]
    pub fn once(&self) -> bool {
        self.once
    }

    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    #[must_use]
    pub fn consequences(&self) -> &[Consequence] {
        &self.consequences
    }
}

/// Listing format: `label=<label>`, then every condition and consequence,
/// each followed by a tab, then a newline.
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "label={}\t", self.label)?;
        for cond in &self.conditions {
            write!(f, "{cond}\t")?;
        }
        for cons in &self.consequences {
            write!(f, "{cons}\t")?;
        }
        writeln!(f)
    }
}

/// A rule that has not been registered yet.
///
/// # Example
///
/// ```
/// use winrule::{Condition, Consequence, ConsequenceName, Property, RuleBuilder, RuleStore};
///
/// let mut store = RuleStore::new();
/// let label = store
///     .insert(
///         RuleBuilder::new()
///             .when(Condition::equals(Property::Class, "Foo").unwrap())
///             .then(Consequence::new(ConsequenceName::Tag, "bar")),
///     )
///     .unwrap();
/// assert_eq!(label, "0");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleBuilder {
    pub(crate) label: Option<String>,
    pub(crate) once: bool,
    pub(crate) prepend: bool,
    pub(crate) conditions: Vec<Condition>,
    pub(crate) consequences: Vec<Consequence>,
}

impl RuleBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit label instead of the next generated one.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn once(mut self) -> Self {
        self.once = true;
        self
    }

    /// Register in front of all existing rules.
    #[must_use]
    pub fn prepend(mut self) -> Self {
        self.prepend = true;
        self
    }

    #[must_use]
    pub fn when(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    #[must_use]
    pub fn then(mut self, consequence: Consequence) -> Self {
        self.consequences.push(consequence);
        self
    }

    pub(crate) fn build(self, label: String) -> Rule {
        Rule {
            label,
            once: self.once,
            conditions: self.conditions,
            consequences: self.consequences,
        }
    }
}
