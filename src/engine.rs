use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use crate::parse::{parse_rule_args, parse_rules_file};
use crate::{
    ClientChanges, Consequence, MatchReport, RuleBuilder, RuleError, RuleSelector, RuleStore,
    WindowProperties, WinruleError,
};

/// Outcome of a successful `rule` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleAdded {
    pub label: String,
    /// The request asked for the label to be echoed back.
    pub print_label: bool,
}

/// The rule engine of one window manager instance.
///
/// Owns the [`RuleStore`] behind a single lock; every request and every
/// window-creation event goes through it. Thread-safe and designed to live
/// behind `Arc`.
#[derive(Debug, Default)]
pub struct Engine {
    store: Mutex<RuleStore>,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Every operation is a single call on the store, so a panic elsewhere
    /// cannot leave it half-updated.
    fn lock(&self) -> MutexGuard<'_, RuleStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Parse and register a rule from `rule` arguments.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError`] if any argument is malformed or the label is
    /// unusable. Nothing is registered in that case.
    pub fn add_rule<S: AsRef<str>>(&self, args: &[S]) -> Result<RuleAdded, RuleError> {
        let request = parse_rule_args(args)?;
        let print_label = request.print_label;
        let builder = request.compile()?;
        let label = self.lock().insert(builder)?;
        Ok(RuleAdded { label, print_label })
    }

    /// Register an already built rule.
    ///
    /// # Errors
    ///
    /// See [`RuleStore::insert()`].
    pub fn insert(&self, builder: RuleBuilder) -> Result<String, RuleError> {
        self.lock().insert(builder)
    }

    /// # Errors
    ///
    /// See [`RuleStore::remove()`].
    pub fn remove(&self, selector: &RuleSelector) -> Result<usize, RuleError> {
        self.lock().remove(selector)
    }

    /// The listing of every rule, as printed by `list_rules`.
    #[must_use]
    pub fn list_rules(&self) -> String {
        crate::serialize::list_rules(&self.lock())
    }

    #[must_use]
    pub fn complete_labels(&self) -> Vec<String> {
        self.lock().complete_labels()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Run `f` with shared access to the store.
    pub fn with_store<R>(&self, f: impl FnOnce(&RuleStore) -> R) -> R {
        f(&self.lock())
    }

    /// Match a new window and return the consequences to apply.
    pub fn window_created(&self, window: &WindowProperties) -> Vec<Consequence> {
        self.lock().match_window(window)
    }

    pub fn window_created_detailed(&self, window: &WindowProperties) -> MatchReport {
        self.lock().match_window_detailed(window)
    }

    /// Match a new window and fold the consequences into its settings.
    ///
    /// The store lock is released before folding. Consequences that cannot be
    /// applied are logged and skipped.
    pub fn place(&self, window: &WindowProperties) -> ClientChanges {
        let consequences = self.window_created(window);
        let mut changes = ClientChanges::new();
        changes.apply_all(&consequences);
        changes
    }

    /// Register every rule of a rules file's contents, in order.
    ///
    /// Rules on lines before a failing line stay registered.
    ///
    /// # Errors
    ///
    /// Returns [`WinruleError::Parse`] if the text cannot be tokenized (nothing
    /// is registered) or [`WinruleError::RuleAt`] for the first rejected rule.
    pub fn load_rules_str(&self, input: &str) -> Result<usize, WinruleError> {
        let lines = parse_rules_file(input)?;
        let mut added = 0;
        for line in lines {
            self.add_rule(&line.args)
                .map_err(|source| WinruleError::RuleAt {
                    line: line.line,
                    source,
                })?;
            added += 1;
        }
        debug!(count = added, "rules loaded");
        Ok(added)
    }

    /// Read a rules file and register its rules.
    ///
    /// # Errors
    ///
    /// Returns [`WinruleError::Io`] if the file cannot be read, otherwise as
    /// [`load_rules_str()`](Self::load_rules_str).
    pub fn load_rules_file(&self, path: impl AsRef<Path>) -> Result<usize, WinruleError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path)?;
        let added = self.load_rules_str(&input)?;
        info!(path = %path.display(), count = added, "rules file loaded");
        Ok(added)
    }
}

#[derive(Debug)]
enum RuleSource {
    Args(Vec<String>),
    Text(String),
    File(PathBuf),
}

/// Builder for an [`Engine`] preloaded with rules.
///
/// # Example
///
/// ```
/// use winrule::Engine;
///
/// let engine = Engine::builder()
///     .rule(["class=Firefox", "tag=www"])
///     .rules_str("# terminals\nclass~[Tt]erm tag=shell\n")
///     .build()
///     .unwrap();
/// assert_eq!(engine.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct EngineBuilder {
    sources: Vec<RuleSource>,
}

impl EngineBuilder {
    /// Preload a rule given as `rule` arguments.
    #[must_use]
    pub fn rule<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sources
            .push(RuleSource::Args(args.into_iter().map(Into::into).collect()));
        self
    }

    /// Preload the rules of a rules-file text.
    #[must_use]
    pub fn rules_str(mut self, input: impl Into<String>) -> Self {
        self.sources.push(RuleSource::Text(input.into()));
        self
    }

    /// Preload the rules of a rules file, read at [`build()`](Self::build).
    #[must_use]
    pub fn rules_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.push(RuleSource::File(path.into()));
        self
    }

    /// Create the engine, registering preloaded rules in the order given.
    ///
    /// # Errors
    ///
    /// Returns the first [`WinruleError`] hit while registering.
    pub fn build(self) -> Result<Engine, WinruleError> {
        let engine = Engine::new();
        for source in self.sources {
            match source {
                RuleSource::Args(args) => {
                    engine.add_rule(&args)?;
                }
                RuleSource::Text(text) => {
                    engine.load_rules_str(&text)?;
                }
                RuleSource::File(path) => {
                    engine.load_rules_file(path)?;
                }
            }
        }
        Ok(engine)
    }
}
