use crate::parse::RULE_FLAGS;
use crate::{ConsequenceName, Property, Rule, RuleStore, ValueKind};

/// Render one rule in the listing format:
/// `label=<label>\t<cond>\t...\t<cons>\t...\t\n`.
#[must_use]
pub fn serialize_rule(rule: &Rule) -> String {
    rule.to_string()
}

/// Every rule in registration order, concatenated. Empty for an empty store.
#[must_use]
pub fn list_rules(store: &RuleStore) -> String {
    store.to_string()
}

/// Completion candidates for the arguments of `rule`.
#[must_use]
pub fn rule_completions() -> Vec<String> {
    let mut out: Vec<String> = RULE_FLAGS.iter().map(|&f| f.to_owned()).collect();
    out.push("label=".to_owned());
    for property in Property::ALL {
        out.push(format!("{property}="));
        if property.kind() == ValueKind::String {
            out.push(format!("{property}~"));
        }
    }
    out.extend(ConsequenceName::ALL.iter().map(|c| format!("{c}=")));
    out
}
