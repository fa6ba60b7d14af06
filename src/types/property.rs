use std::fmt;
use std::str::FromStr;

use super::error::RuleError;
use super::value::ValueKind;

/// A window property a condition can test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Instance,
    Class,
    Title,
    WindowType,
    WindowRole,
    Pid,
    MaxAge,
}

impl Property {
    pub const ALL: [Property; 7] = [
        Property::Instance,
        Property::Class,
        Property::Title,
        Property::WindowType,
        Property::WindowRole,
        Property::Pid,
        Property::MaxAge,
    ];

    /// The name used in rule terms.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Property::Instance => "instance",
            Property::Class => "class",
            Property::Title => "title",
            Property::WindowType => "windowtype",
            Property::WindowRole => "windowrole",
            Property::Pid => "pid",
            Property::MaxAge => "maxage",
        }
    }

    /// The kind of value this property holds.
    #[must_use]
    pub fn kind(self) -> ValueKind {
        match self {
            Property::Pid | Property::MaxAge => ValueKind::Numeric,
            _ => ValueKind::String,
        }
    }
}

impl FromStr for Property {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Property::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| RuleError::UnknownProperty { name: s.to_owned() })
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A placement directive a rule can assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsequenceName {
    Tag,
    Monitor,
    Focus,
    SwitchTag,
    Manage,
    Index,
    Pseudotile,
    EwmhRequests,
    EwmhNotify,
    Fullscreen,
    Hook,
    Keymask,
}

impl ConsequenceName {
    pub const ALL: [ConsequenceName; 12] = [
        ConsequenceName::Tag,
        ConsequenceName::Monitor,
        ConsequenceName::Focus,
        ConsequenceName::SwitchTag,
        ConsequenceName::Manage,
        ConsequenceName::Index,
        ConsequenceName::Pseudotile,
        ConsequenceName::EwmhRequests,
        ConsequenceName::EwmhNotify,
        ConsequenceName::Fullscreen,
        ConsequenceName::Hook,
        ConsequenceName::Keymask,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ConsequenceName::Tag => "tag",
            ConsequenceName::Monitor => "monitor",
            ConsequenceName::Focus => "focus",
            ConsequenceName::SwitchTag => "switchtag",
            ConsequenceName::Manage => "manage",
            ConsequenceName::Index => "index",
            ConsequenceName::Pseudotile => "pseudotile",
            ConsequenceName::EwmhRequests => "ewmhrequests",
            ConsequenceName::EwmhNotify => "ewmhnotify",
            ConsequenceName::Fullscreen => "fullscreen",
            ConsequenceName::Hook => "hook",
            ConsequenceName::Keymask => "keymask",
        }
    }
}

impl FromStr for ConsequenceName {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConsequenceName::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| RuleError::UnknownConsequence { name: s.to_owned() })
    }
}

impl fmt::Display for ConsequenceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
