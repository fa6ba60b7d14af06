use winrule::{CommandOutput, Engine, Property, WindowProperties};

/// Run a space-separated command line; the command must succeed.
fn call(engine: &Engine, line: &str) -> CommandOutput {
    let out = call_raw(engine, line);
    assert!(out.success(), "`{line}` failed: {:?}", out.stderr);
    out
}

/// Run a space-separated command line; the command must fail.
fn call_xfail(engine: &Engine, line: &str) -> CommandOutput {
    let out = call_raw(engine, line);
    assert!(!out.success(), "`{line}` unexpectedly succeeded");
    out
}

fn call_raw(engine: &Engine, line: &str) -> CommandOutput {
    let argv: Vec<&str> = line.split(' ').collect();
    engine.call(&argv)
}

fn list(engine: &Engine) -> String {
    call(engine, "list_rules").stdout
}

#[test]
fn list_rules_empty_by_default() {
    let engine = Engine::new();
    assert_eq!(list(&engine), "");
}

#[test]
fn add_simple_rule() {
    let engine = Engine::new();
    call(&engine, "rule class=Foo tag=bar");
    assert_eq!(list(&engine), "label=0\tclass=Foo\ttag=bar\t\n");
}

#[test]
fn add_many_labeled_rules() {
    let string_props = ["instance", "class", "instance", "title", "windowtype", "windowrole"];
    let numeric_props = ["pid", "maxage"];
    let consequences = [
        "tag",
        "monitor",
        "focus",
        "switchtag",
        "manage",
        "index",
        "pseudotile",
        "ewmhrequests",
        "ewmhnotify",
        "fullscreen",
        "hook",
        "keymask",
    ];

    let consequences: Vec<String> = consequences
        .iter()
        .zip(4117..)
        .map(|(c, idx)| format!("{c}=a{idx}b"))
        .collect();
    let consequences = consequences.join(" ");

    let conds_sets = [
        numeric_props
            .iter()
            .zip(9001..)
            .map(|(p, idx)| format!("{p}={idx}"))
            .collect::<Vec<_>>()
            .join(" "),
        string_props
            .iter()
            .zip(9101..)
            .map(|(p, idx)| format!("{p}=x{idx}y"))
            .collect::<Vec<_>>()
            .join(" "),
        string_props
            .iter()
            .zip(9201..)
            .map(|(p, idx)| format!("{p}~z{idx}z"))
            .collect::<Vec<_>>()
            .join(" "),
    ];

    let rules: Vec<String> = conds_sets
        .iter()
        .enumerate()
        .map(|(idx, conds)| format!("label=l{idx} {conds} {consequences}"))
        .collect();

    let engine = Engine::new();
    for rule in &rules {
        call(&engine, &format!("rule {rule}"));
    }

    let expected: String = rules
        .iter()
        .map(|r| format!("{}\t\n", r.replace(' ', "\t")))
        .collect();
    assert_eq!(list(&engine), expected);
}

#[test]
fn cannot_add_rule_with_empty_label() {
    let engine = Engine::new();
    let out = call_xfail(&engine, "rule label= class=Foo tag=bar");
    assert_eq!(out.stderr, "rule: Rule label cannot be empty");
    assert_eq!(list(&engine), "");
}

#[test]
fn cannot_use_tilde_operator_for_rule_label() {
    let engine = Engine::new();
    let out = call_xfail(&engine, "rule label~bla class=Foo tag=bar");
    assert_eq!(out.stderr, "rule: Unknown rule label operation \"~\"\n");
    assert_eq!(list(&engine), "");
}

#[test]
fn cannot_use_invalid_operator_for_consequence() {
    let engine = Engine::new();
    let out = call_xfail(&engine, "rule class=Foo tag~bar");
    assert_eq!(out.stderr, "rule: Unknown rule consequence operation \"~\"\n");
    assert_eq!(list(&engine), "");
}

#[test]
fn invalid_regex_in_condition() {
    let engine = Engine::new();
    let out = call_xfail(&engine, "rule class~[b-a]");
    assert_eq!(
        out.stderr,
        "rule: Can not parse value \"[b-a]\" from condition \"class\": \"Invalid range in bracket expression.\"\n"
    );
    assert_eq!(list(&engine), "");
}

#[test]
fn duplicate_label_rejected() {
    let engine = Engine::new();
    call(&engine, "rule label=web class=Firefox tag=www");
    let out = call_xfail(&engine, "rule label=web class=Chromium tag=www");
    assert_eq!(out.stderr, "rule: Rule label \"web\" is already in use");
    assert_eq!(list(&engine), "label=web\tclass=Firefox\ttag=www\t\n");
}

#[test]
fn remove_all_rules() {
    for method in ["-F", "--all"] {
        let engine = Engine::new();
        call(&engine, "rule class=Foo tag=bar");
        call(&engine, "rule label=labeled class=Bork tag=baz");

        call(&engine, &format!("unrule {method}"));

        assert_eq!(list(&engine), "");
        call(&engine, &format!("unrule {method}"));
        assert_eq!(list(&engine), "");
    }
}

#[test]
fn remove_simple_rule() {
    let engine = Engine::new();
    call(&engine, "rule class=Foo tag=bar");
    call(&engine, "unrule 0");
    assert_eq!(list(&engine), "");
}

#[test]
fn remove_labeled_rule() {
    let engine = Engine::new();
    call(&engine, "rule label=blah class=Foo tag=bar");
    call(&engine, "unrule blah");
    assert_eq!(list(&engine), "");
}

#[test]
fn remove_nonexistent_rule() {
    let engine = Engine::new();
    let out = call_xfail(&engine, "unrule nope");
    assert_eq!(out.stderr, "Couldn't find any rules with label \"nope\"");
}

#[test]
fn singleuse_rule_disappears_after_matching() {
    let engine = Engine::new();
    call(&engine, "rule once hook=dummy_hook");

    engine.window_created(&WindowProperties::new().set(Property::Class, "xterm"));

    assert_eq!(list(&engine), "");
}

#[test]
fn regular_rule_persists_after_matching() {
    let engine = Engine::new();
    call(&engine, "rule hook=dummy_hook");

    engine.window_created(&WindowProperties::new());
    engine.window_created(&WindowProperties::new());

    assert_eq!(list(&engine), "label=0\thook=dummy_hook\t\n");
}

#[test]
fn rule_labels_are_not_reused() {
    for rules_count in [1, 2, 10] {
        let engine = Engine::new();
        for i in 0..rules_count {
            call(&engine, &format!("rule class=Foo{i} tag=bar{i}"));
        }
        for i in 0..rules_count {
            call(&engine, &format!("unrule {i}"));
        }

        call(&engine, "rule class=meh tag=moo");

        assert_eq!(
            list(&engine),
            format!("label={rules_count}\tclass=meh\ttag=moo\t\n")
        );
    }
}

#[test]
fn complete_unrule_offers_all_rules() {
    for rules_count in [1, 2, 10] {
        let engine = Engine::new();
        let labels: Vec<String> = (0..rules_count).map(|i| i.to_string()).collect();
        for i in &labels {
            call(&engine, &format!("rule class=Foo{i} tag=bar{i}"));
        }

        let out = call(&engine, "complete 1 unrule");

        let mut expected = labels.clone();
        expected.push("-F".into());
        expected.push("--all".into());
        assert_eq!(out.stdout, expected.join("\n") + "\n");
    }
}

#[test]
fn monitor_consequence_reaches_placement() {
    for monitor_spec in ["monitor2", "1"] {
        let engine = Engine::new();
        call(&engine, &format!("rule monitor={monitor_spec}"));

        let changes = engine.place(&WindowProperties::new());

        assert_eq!(changes.monitor_name.as_deref(), Some(monitor_spec));
    }
}

#[test]
fn negated_rule_round_trip() {
    let engine = Engine::new();
    call(&engine, "rule not class=Foo tag=other");
    assert_eq!(list(&engine), "label=0\tnot\tclass=Foo\ttag=other\t\n");

    let foo = engine.window_created(&WindowProperties::new().set(Property::Class, "Foo"));
    assert!(foo.is_empty());
    let bar = engine.window_created(&WindowProperties::new().set(Property::Class, "Bar"));
    assert_eq!(bar.len(), 1);
}

#[test]
fn prepend_changes_evaluation_order() {
    let engine = Engine::new();
    call(&engine, "rule tag=first");
    call(&engine, "rule prepend tag=second");
    let changes = engine.place(&WindowProperties::new());
    // the back rule is applied last and wins
    assert_eq!(changes.tag_name.as_deref(), Some("first"));
    assert_eq!(
        list(&engine),
        "label=1\ttag=second\t\nlabel=0\ttag=first\t\n"
    );
}

#[test]
fn printlabel_prints_generated_and_explicit_labels() {
    let engine = Engine::new();
    assert_eq!(call(&engine, "rule printlabel tag=a").stdout, "0\n");
    assert_eq!(call(&engine, "rule printlabel label=x tag=a").stdout, "x\n");
    assert_eq!(call(&engine, "rule tag=a").stdout, "");
}

#[test]
fn unknown_names_rejected() {
    let engine = Engine::new();
    let out = call_xfail(&engine, "rule colour=red tag=bar");
    assert_eq!(out.stderr, "rule: Unknown rule consequence \"colour\"\n");
    let out = call_xfail(&engine, "rule colour~red tag=bar");
    assert_eq!(out.stderr, "rule: Unknown rule condition \"colour\"\n");
    let out = call_xfail(&engine, "rule sometimes tag=bar");
    assert_eq!(out.stderr, "rule: Unknown rule flag \"sometimes\"\n");
    assert_eq!(list(&engine), "");
}

#[test]
fn numeric_condition_type_mismatch() {
    let engine = Engine::new();
    let out = call_xfail(&engine, "rule pid=abc tag=bar");
    assert_eq!(
        out.stderr,
        "rule: Can not parse value \"abc\" from condition \"pid\": \"expected integer\"\n"
    );
    let out = call_xfail(&engine, "rule pid~1 tag=bar");
    assert_eq!(
        out.stderr,
        "rule: Condition \"pid\" does not support operation \"~\"\n"
    );
}

#[test]
fn rule_and_unrule_argument_counts() {
    let engine = Engine::new();
    assert_eq!(call_xfail(&engine, "rule").stderr, "rule: Not enough arguments\n");
    call(&engine, "rule label=a tag=x");
    let out = call_xfail(&engine, "unrule a b");
    assert_eq!(out.stderr, "unrule: Too many arguments\n");
    assert_eq!(list(&engine), "label=a\ttag=x\t\n");
}

#[test]
fn hooks_from_every_matching_rule_fire() {
    let engine = Engine::new();
    call(&engine, "rule hook=a");
    call(&engine, "rule hook=b");
    call(&engine, "rule tag=one");
    call(&engine, "rule tag=two");

    let changes = engine.place(&WindowProperties::new());

    assert_eq!(changes.hooks, ["a", "b"]);
    assert_eq!(changes.tag_name.as_deref(), Some("two"));
}

#[test]
fn numeric_operands_listed_as_written() {
    let engine = Engine::new();
    call(&engine, "rule pid=007 maxage=+5 tag=x");
    assert_eq!(list(&engine), "label=0\tpid=007\tmaxage=+5\ttag=x\t\n");

    let w = WindowProperties::new()
        .set(Property::Pid, 7_i64)
        .set(Property::MaxAge, 5_i64);
    assert_eq!(engine.window_created(&w).len(), 1);
}

#[test]
fn tabs_and_newlines_rejected() {
    let engine = Engine::new();
    let out = engine.call(&["rule", "label=a\tb", "tag=x"]);
    assert_eq!(
        out.stderr,
        "rule: Argument \"label=a\\tb\" must not contain tabs or newlines\n"
    );
    let out = engine.call(&["rule", "hook=x\ny"]);
    assert!(!out.success());
    assert_eq!(list(&engine), "");
}
