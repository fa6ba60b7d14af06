use crate::{RuleBuilder, RuleError};

/// A `name OP value` argument whose name has not been resolved yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTerm {
    /// The negation flag (`not` or `!`) written before the term, if any.
    pub negation: Option<String>,
    pub name: String,
    pub op: char,
    pub value: String,
}

/// The arguments of a `rule` request, split into flags, label and terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleRequest {
    pub label: Option<String>,
    pub once: bool,
    pub prepend: bool,
    pub print_label: bool,
    pub terms: Vec<RawTerm>,
}

impl RuleRequest {
    /// Resolve names, check operators and compile regular expressions.
    ///
    /// # Errors
    ///
    /// Returns the first [`RuleError`] found, in argument order.
    pub fn compile(self) -> Result<RuleBuilder, RuleError> {
        crate::compile::compile(self)
    }
}

/// One non-empty line of a rules file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleLine {
    /// 1-based line number.
    pub line: usize,
    pub args: Vec<String>,
}
