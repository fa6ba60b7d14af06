mod condition;
mod consequence;
mod error;
mod match_report;
mod property;
mod rule;
mod value;
mod window;

pub use condition::{Condition, MatchOp};
pub use consequence::Consequence;
pub use error::RuleError;
pub use match_report::MatchReport;
pub use property::{ConsequenceName, Property};
pub use rule::{Rule, RuleBuilder};
pub use value::{Value, ValueKind};
pub use window::WindowProperties;
