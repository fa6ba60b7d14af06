mod changes;
mod command;
mod compile;
mod engine;
mod error;
mod evaluate;
pub mod parse;
mod serialize;
mod store;
mod types;

pub use changes::{ClientChanges, ConsequenceError};
pub use command::{CommandOutput, COMMANDS};
pub use engine::{Engine, EngineBuilder, RuleAdded};
pub use error::WinruleError;
pub use serialize::{list_rules, rule_completions, serialize_rule};
pub use store::{RuleSelector, RuleStore, REMOVE_ALL_FLAGS};
pub use types::{
    Condition, Consequence, ConsequenceName, MatchOp, MatchReport, Property, Rule, RuleBuilder,
    RuleError, Value, ValueKind, WindowProperties,
};
