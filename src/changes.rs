use thiserror::Error;
use tracing::warn;

use crate::{Consequence, ConsequenceName};

/// A consequence whose value the window manager cannot interpret.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsequenceError {
    #[error("Invalid boolean value \"{value}\" for consequence \"{name}\"")]
    InvalidBool {
        name: ConsequenceName,
        value: String,
    },
}

/// Settings for a new window, folded from the consequences of every
/// matching rule.
///
/// Later consequences override earlier ones; hooks accumulate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientChanges {
    pub tag_name: Option<String>,
    pub monitor_name: Option<String>,
    pub index: Option<String>,
    pub keymask: Option<String>,
    pub hooks: Vec<String>,
    pub focus: bool,
    pub switchtag: bool,
    pub manage: bool,
    pub pseudotile: bool,
    pub ewmh_requests: bool,
    pub ewmh_notify: bool,
    pub fullscreen: bool,
}

impl Default for ClientChanges {
    fn default() -> Self {
        Self {
            tag_name: None,
            monitor_name: None,
            index: None,
            keymask: None,
            hooks: Vec::new(),
            focus: false,
            switchtag: false,
            manage: true,
            pseudotile: false,
            ewmh_requests: true,
            ewmh_notify: true,
            fullscreen: false,
        }
    }
}

impl ClientChanges {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one consequence.
    ///
    /// # Errors
    ///
    /// Returns [`ConsequenceError`] if a boolean consequence carries a value
    /// other than `on`, `off`, `true`, `false`, `1`, `0` or `toggle`. The
    /// settings are left unchanged in that case.
    pub fn apply(&mut self, consequence: &Consequence) -> Result<(), ConsequenceError> {
        let value = consequence.value();
        let flag = match consequence.name() {
            ConsequenceName::Tag => {
                self.tag_name = Some(value.to_owned());
                return Ok(());
            }
            ConsequenceName::Monitor => {
                self.monitor_name = Some(value.to_owned());
                return Ok(());
            }
            ConsequenceName::Index => {
                self.index = Some(value.to_owned());
                return Ok(());
            }
            ConsequenceName::Keymask => {
                self.keymask = Some(value.to_owned());
                return Ok(());
            }
            ConsequenceName::Hook => {
                self.hooks.push(value.to_owned());
                return Ok(());
            }
            ConsequenceName::Focus => &mut self.focus,
            ConsequenceName::SwitchTag => &mut self.switchtag,
            ConsequenceName::Manage => &mut self.manage,
            ConsequenceName::Pseudotile => &mut self.pseudotile,
            ConsequenceName::EwmhRequests => &mut self.ewmh_requests,
            ConsequenceName::EwmhNotify => &mut self.ewmh_notify,
            ConsequenceName::Fullscreen => &mut self.fullscreen,
        };
        *flag = parse_bool(value, *flag).ok_or_else(|| ConsequenceError::InvalidBool {
            name: consequence.name(),
            value: value.to_owned(),
        })?;
        Ok(())
    }

    /// Apply consequences in order, skipping (and logging) any that fail.
    ///
    /// Returns the failures.
    pub fn apply_all<'a>(
        &mut self,
        consequences: impl IntoIterator<Item = &'a Consequence>,
    ) -> Vec<ConsequenceError> {
        let mut errors = Vec::new();
        for consequence in consequences {
            if let Err(err) = self.apply(consequence) {
                warn!(consequence = %consequence, error = %err, "consequence not applied");
                errors.push(err);
            }
        }
        errors
    }
}

fn parse_bool(value: &str, current: bool) -> Option<bool> {
    match value {
        "on" | "true" | "1" => Some(true),
        "off" | "false" | "0" => Some(false),
        "toggle" => Some(!current),
        _ => None,
    }
}
