use thiserror::Error;

use crate::parse::ParseError;
use crate::RuleError;

/// Unified error type covering rules files, rule registration and I/O.
///
/// Returned by [`Engine::load_rules_str()`](crate::Engine::load_rules_str),
/// [`Engine::load_rules_file()`](crate::Engine::load_rules_file) and
/// [`EngineBuilder::build()`](crate::EngineBuilder::build).
#[derive(Debug, Error)]
pub enum WinruleError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Rule(#[from] RuleError),

    #[error("line {line}: {source}")]
    RuleAt {
        line: usize,
        #[source]
        source: RuleError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
