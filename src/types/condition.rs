use std::fmt;

use regex::Regex;
use regex_syntax::ast::ErrorKind;

use super::error::RuleError;
use super::property::Property;
use super::value::{Value, ValueKind};
use super::window::WindowProperties;

/// Operators a condition term can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOp {
    /// `=`: exact string equality or numeric equality.
    Equals,
    /// `~`: unanchored regular-expression search, string properties only.
    Matches,
}

impl MatchOp {
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            MatchOp::Equals => '=',
            MatchOp::Matches => '~',
        }
    }

    #[must_use]
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '=' => Some(MatchOp::Equals),
            '~' => Some(MatchOp::Matches),
            _ => None,
        }
    }
}

impl fmt::Display for MatchOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone)]
enum Test {
    Equals(Value),
    Matches(Regex),
}

/// A predicate over one window property.
///
/// Conditions are validated when built: the operand kind matches the
/// property kind and regular expressions are already compiled, so
/// [`holds()`](Self::holds) cannot fail.
#[derive(Debug, Clone)]
pub struct Condition {
    property: Property,
    test: Test,
    /// Operand as written, echoed by the listing.
    operand: String,
    negated: bool,
}

impl Condition {
    /// Build an equality condition.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::TypeMismatch`] if the value kind does not fit the property.
    pub fn equals(property: Property, value: impl Into<Value>) -> Result<Self, RuleError> {
        let value = value.into();
        if value.kind() != property.kind() {
            return Err(RuleError::TypeMismatch {
                property: property.name().to_owned(),
                value: value.to_string(),
                expected: property.kind(),
            });
        }
        Ok(Self {
            property,
            operand: value.to_string(),
            test: Test::Equals(value),
            negated: false,
        })
    }

    /// Build a regular-expression condition. The pattern is compiled here.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidOperatorForProperty`] for numeric properties
    /// and [`RuleError::InvalidRegex`] if the pattern does not compile.
    pub fn matches(property: Property, pattern: &str) -> Result<Self, RuleError> {
        if property.kind() == ValueKind::Numeric {
            return Err(RuleError::InvalidOperatorForProperty {
                property: property.name().to_owned(),
                op: MatchOp::Matches.symbol(),
            });
        }
        let regex = Regex::new(pattern).map_err(|err| RuleError::InvalidRegex {
            property: property.name().to_owned(),
            value: pattern.to_owned(),
            diagnostic: regex_diagnostic(pattern, &err),
        })?;
        Ok(Self {
            property,
            test: Test::Matches(regex),
            operand: pattern.to_owned(),
            negated: false,
        })
    }

    /// Build a condition from the raw operand text of a rule term.
    ///
    /// # Errors
    ///
    /// Fails if the operand cannot be interpreted for the property.
    pub fn parse(property: Property, op: MatchOp, raw: &str) -> Result<Self, RuleError> {
        match (op, property.kind()) {
            (MatchOp::Matches, _) => Self::matches(property, raw),
            (MatchOp::Equals, ValueKind::String) => Self::equals(property, raw),
            (MatchOp::Equals, ValueKind::Numeric) => {
                let n: i64 = raw.parse().map_err(|_| RuleError::TypeMismatch {
                    property: property.name().to_owned(),
                    value: raw.to_owned(),
                    expected: ValueKind::Numeric,
                })?;
                let mut condition = Self::equals(property, n)?;
                condition.operand = raw.to_owned();
                Ok(condition)
            }
        }
    }

    /// Invert the outcome of this condition.
    #[must_use]
    pub fn negate(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    #[must_use]
    pub fn property(&self) -> Property {
        self.property
    }

    #[must_use]
    pub fn op(&self) -> MatchOp {
        match self.test {
            Test::Equals(_) => MatchOp::Equals,
            Test::Matches(_) => MatchOp::Matches,
        }
    }

    #[must_use]
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// The operand as written in the rule term.
    #[must_use]
    pub fn operand(&self) -> &str {
        &self.operand
    }

    /// Evaluate against a window. A property the window lacks never satisfies
    /// the test.
    #[must_use]
    pub fn holds(&self, window: &WindowProperties) -> bool {
        let outcome = match (&self.test, window.get(self.property)) {
            (Test::Equals(expected), Some(actual)) => expected == actual,
            (Test::Matches(re), Some(Value::String(actual))) => re.is_match(actual),
            _ => false,
        };
        outcome != self.negated
    }
}

impl PartialEq for Condition {
    fn eq(&self, other: &Self) -> bool {
        self.property == other.property
            && self.negated == other.negated
            && match (&self.test, &other.test) {
                (Test::Equals(a), Test::Equals(b)) => a == b,
                (Test::Matches(a), Test::Matches(b)) => a.as_str() == b.as_str(),
                _ => false,
            }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            f.write_str("not\t")?;
        }
        write!(f, "{}{}{}", self.property, self.op(), self.operand)
    }
}

/// Describe why `pattern` failed to compile as a single sentence.
fn regex_diagnostic(pattern: &str, err: &regex::Error) -> String {
    match regex_syntax::Parser::new().parse(pattern) {
        Err(regex_syntax::Error::Parse(ast)) => ast_diagnostic(ast.kind()),
        Err(other) => sentence(&other.to_string()),
        Ok(_) => match err {
            regex::Error::CompiledTooBig(_) => "Regular expression too big.".to_owned(),
            other => sentence(&other.to_string()),
        },
    }
}

fn ast_diagnostic(kind: &ErrorKind) -> String {
    let msg = match kind {
        ErrorKind::ClassRangeInvalid | ErrorKind::ClassRangeLiteral => {
            "Invalid range in bracket expression."
        }
        ErrorKind::ClassUnclosed => "Unexpected end of regex when in bracket expression.",
        ErrorKind::GroupUnclosed | ErrorKind::GroupUnopened => {
            "Mismatched '(' and ')' in regular expression."
        }
        ErrorKind::RepetitionMissing => "Nothing to repeat before a quantifier.",
        ErrorKind::RepetitionCountInvalid => "Invalid range in brace expression.",
        ErrorKind::RepetitionCountUnclosed | ErrorKind::RepetitionCountDecimalEmpty => {
            "Unexpected end of regex when in brace expression."
        }
        ErrorKind::DecimalInvalid | ErrorKind::DecimalEmpty => {
            "Unexpected token in brace expression."
        }
        ErrorKind::EscapeUnexpectedEof => "Unexpected end of regex when escaping.",
        ErrorKind::EscapeUnrecognized | ErrorKind::ClassEscapeInvalid => {
            "Unexpected escape character."
        }
        ErrorKind::UnsupportedBackreference => "Invalid back reference.",
        other => return sentence(&other.to_string()),
    };
    msg.to_owned()
}

/// Capitalize the first letter and make sure the message ends with a period.
fn sentence(msg: &str) -> String {
    let msg = msg.lines().last().unwrap_or_default().trim();
    let msg = msg.strip_prefix("error: ").unwrap_or(msg);
    let mut chars = msg.chars();
    let mut out: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    if !out.ends_with('.') {
        out.push('.');
    }
    out
}
