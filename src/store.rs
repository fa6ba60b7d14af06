use std::fmt;

use tracing::debug;

use crate::{Condition, Consequence, MatchReport, Rule, RuleBuilder, RuleError, WindowProperties};

/// Argument spellings that select every rule for removal.
pub const REMOVE_ALL_FLAGS: [&str; 2] = ["-F", "--all"];

/// Which rules an `unrule` request removes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSelector {
    Label(String),
    /// Position in registration order, starting at 0.
    Index(usize),
    All,
}

impl RuleSelector {
    /// Interpret a command argument: the bulk flags select everything, any
    /// other text is a label.
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        if REMOVE_ALL_FLAGS.contains(&arg) {
            RuleSelector::All
        } else {
            RuleSelector::Label(arg.to_owned())
        }
    }
}

impl fmt::Display for RuleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleSelector::Label(label) => f.write_str(label),
            RuleSelector::Index(idx) => write!(f, "{idx}"),
            RuleSelector::All => f.write_str("--all"),
        }
    }
}

/// Ordered collection of registered rules.
///
/// Generated labels come from a counter that only moves forward: removing
/// rules never makes their labels available to the generator again.
#[derive(Debug, Default)]
pub struct RuleStore {
    rules: Vec<Rule>,
    next_label: u64,
}

impl RuleStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule and return its label.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::EmptyLabel`] or [`RuleError::DuplicateLabel`] for
    /// an unusable explicit label; the store is left untouched.
    pub fn insert(&mut self, builder: RuleBuilder) -> Result<String, RuleError> {
        let label = match &builder.label {
            Some(label) if label.is_empty() => return Err(RuleError::EmptyLabel),
            Some(label) if self.contains(label) => {
                return Err(RuleError::DuplicateLabel {
                    label: label.clone(),
                })
            }
            Some(label) => label.clone(),
            None => self.generate_label(),
        };

        let prepend = builder.prepend;
        let rule = builder.build(label.clone());
        debug!(label = %label, once = rule.once, prepend, "rule registered");
        if prepend {
            self.rules.insert(0, rule);
        } else {
            self.rules.push(rule);
        }
        Ok(label)
    }

    /// Append a rule built from its parts.
    ///
    /// # Errors
    ///
    /// Same as [`insert()`](Self::insert).
    pub fn add(
        &mut self,
        label: Option<String>,
        once: bool,
        conditions: Vec<Condition>,
        consequences: Vec<Consequence>,
    ) -> Result<String, RuleError> {
        self.insert(RuleBuilder {
            label,
            once,
            prepend: false,
            conditions,
            consequences,
        })
    }

    /// Remove the selected rules, returning how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::LabelNotFound`] if a label or index selects nothing.
    pub fn remove(&mut self, selector: &RuleSelector) -> Result<usize, RuleError> {
        let position = match selector {
            RuleSelector::All => {
                let removed = self.rules.len();
                self.rules.clear();
                debug!(count = removed, "all rules removed");
                return Ok(removed);
            }
            RuleSelector::Label(label) => self.rules.iter().position(|r| r.label == *label),
            RuleSelector::Index(idx) => (*idx < self.rules.len()).then_some(*idx),
        };

        let idx = position.ok_or_else(|| RuleError::LabelNotFound {
            selector: selector.to_string(),
        })?;
        let rule = self.rules.remove(idx);
        debug!(label = %rule.label, "rule removed");
        Ok(1)
    }

    /// Rules in evaluation order.
    #[must_use]
    pub fn list(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.label == label)
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The value the label generator will try next.
    #[must_use]
    pub fn next_label(&self) -> u64 {
        self.next_label
    }

    /// Completion candidates for `unrule`: every label, then the bulk flags.
    #[must_use]
    pub fn complete_labels(&self) -> Vec<String> {
        self.rules
            .iter()
            .map(|r| r.label.clone())
            .chain(REMOVE_ALL_FLAGS.iter().map(|&f| f.to_owned()))
            .collect()
    }

    /// Run a match pass for a new window and return the consequences to apply.
    ///
    /// Matching single-use rules are removed.
    pub fn match_window(&mut self, window: &WindowProperties) -> Vec<Consequence> {
        self.match_window_detailed(window).into_consequences()
    }

    /// Run a match pass and report which rules matched and expired.
    pub fn match_window_detailed(&mut self, window: &WindowProperties) -> MatchReport {
        crate::evaluate::evaluate(&mut self.rules, window)
    }

    fn generate_label(&mut self) -> String {
        loop {
            let candidate = self.next_label.to_string();
            self.next_label += 1;
            if !self.contains(&candidate) {
                return candidate;
            }
        }
    }
}

impl fmt::Display for RuleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            write!(f, "{rule}")?;
        }
        Ok(())
    }
}
