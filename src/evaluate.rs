use std::time::Instant;

use tracing::{debug, info};

use crate::{MatchReport, Rule, WindowProperties};

/// Single pass over `rules` in order. Every rule is tested exactly once;
/// matching single-use rules are dropped after the pass has captured their
/// consequences.
pub(crate) fn evaluate(rules: &mut Vec<Rule>, window: &WindowProperties) -> MatchReport {
    let start = Instant::now();
    let mut consequences = Vec::new();
    let mut matched = Vec::new();
    let mut expired = Vec::new();

    for rule in rules.iter() {
        if !rule.conditions.iter().all(|cond| cond.holds(window)) {
            continue;
        }
        consequences.extend(rule.consequences.iter().cloned());
        matched.push(rule.label.clone());
        if rule.once {
            expired.push(rule.label.clone());
        }
    }

    if !expired.is_empty() {
        rules.retain(|rule| !expired.contains(&rule.label));
        info!(labels = ?expired, "single-use rules expired");
    }

    debug!(
        matched = ?matched,
        consequences = consequences.len(),
        "window matched against rules"
    );

    MatchReport::new(consequences, matched, expired, start.elapsed())
}

#[cfg(test)]
mod tests {
    use crate::{
        Condition, Consequence, ConsequenceName, Property, RuleBuilder, RuleStore,
        WindowProperties,
    };

    fn tag(value: &str) -> Consequence {
        Consequence::new(ConsequenceName::Tag, value)
    }

    fn class_is(value: &str) -> Condition {
        Condition::equals(Property::Class, value).unwrap()
    }

    fn store_with(builders: Vec<RuleBuilder>) -> RuleStore {
        let mut store = RuleStore::new();
        for b in builders {
            store.insert(b).unwrap();
        }
        store
    }

    #[test]
    fn eval_simple_match() {
        let mut store = store_with(vec![RuleBuilder::new().when(class_is("Foo")).then(tag("bar"))]);
        let window = WindowProperties::new().set(Property::Class, "Foo");
        assert_eq!(store.match_window(&window), vec![tag("bar")]);
    }

    #[test]
    fn eval_no_match() {
        let mut store = store_with(vec![RuleBuilder::new().when(class_is("Foo")).then(tag("bar"))]);
        let window = WindowProperties::new().set(Property::Class, "Bar");
        assert!(store.match_window(&window).is_empty());
    }

    #[test]
    fn eval_empty_conditions_always_match() {
        let mut store = store_with(vec![RuleBuilder::new().then(tag("any"))]);
        assert_eq!(store.match_window(&WindowProperties::new()), vec![tag("any")]);
    }

    #[test]
    fn eval_conditions_are_conjunctive() {
        let mut store = store_with(vec![RuleBuilder::new()
            .when(class_is("URxvt"))
            .when(Condition::equals(Property::Pid, 10_i64).unwrap())
            .then(tag("term"))]);

        let both = WindowProperties::new()
            .set(Property::Class, "URxvt")
            .set(Property::Pid, 10_i64);
        assert_eq!(store.match_window(&both), vec![tag("term")]);

        let one = WindowProperties::new()
            .set(Property::Class, "URxvt")
            .set(Property::Pid, 11_i64);
        assert!(store.match_window(&one).is_empty());
    }

    #[test]
    fn eval_missing_property_fails_condition() {
        let mut store = store_with(vec![RuleBuilder::new()
            .when(Condition::matches(Property::Title, ".*").unwrap())
            .then(tag("t"))]);
        let window = WindowProperties::new().set(Property::Class, "x");
        assert!(store.match_window(&window).is_empty());
    }

    #[test]
    fn eval_consequences_in_rule_then_term_order() {
        let mut store = store_with(vec![
            RuleBuilder::new()
                .then(tag("first"))
                .then(Consequence::new(ConsequenceName::Focus, "on")),
            RuleBuilder::new().when(class_is("nope")).then(tag("skipped")),
            RuleBuilder::new().then(tag("last")),
        ]);
        let out = store.match_window(&WindowProperties::new().set(Property::Class, "x"));
        assert_eq!(
            out,
            vec![
                tag("first"),
                Consequence::new(ConsequenceName::Focus, "on"),
                tag("last"),
            ]
        );
    }

    #[test]
    fn eval_single_use_rule_expires() {
        let mut store = store_with(vec![
            RuleBuilder::new().once().then(Consequence::new(ConsequenceName::Hook, "dummy")),
            RuleBuilder::new().then(tag("stays")),
        ]);

        let report = store.match_window_detailed(&WindowProperties::new());
        assert_eq!(report.matched(), &["0", "1"]);
        assert_eq!(report.expired(), &["0"]);
        assert_eq!(report.consequences().len(), 2);
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].label(), "1");

        let out = store.match_window(&WindowProperties::new());
        assert_eq!(out, vec![tag("stays")]);
    }

    #[test]
    fn eval_single_use_rule_kept_until_matched() {
        let mut store = store_with(vec![RuleBuilder::new().once().when(class_is("Foo")).then(tag("x"))]);
        store.match_window(&WindowProperties::new().set(Property::Class, "Bar"));
        assert_eq!(store.len(), 1);
        store.match_window(&WindowProperties::new().set(Property::Class, "Foo"));
        assert!(store.is_empty());
    }

    #[test]
    fn eval_expiry_does_not_skip_following_rules() {
        let mut store = store_with(vec![
            RuleBuilder::new().once().then(tag("a")),
            RuleBuilder::new().once().then(tag("b")),
            RuleBuilder::new().then(tag("c")),
        ]);
        let out = store.match_window(&WindowProperties::new());
        assert_eq!(out, vec![tag("a"), tag("b"), tag("c")]);
        assert_eq!(store.len(), 1);
    }
}
