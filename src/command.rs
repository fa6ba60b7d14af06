//! Text command surface: `rule`, `unrule`, `list_rules` and `complete`.
//!
//! Output and error text are part of the interface; scripts and tests compare
//! them byte for byte.

use tracing::debug;

use crate::{Engine, RuleSelector};

/// Commands understood by [`Engine::call()`], in completion order.
pub const COMMANDS: [&str; 4] = ["complete", "list_rules", "rule", "unrule"];

/// Result of one command invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// 0 on success, 1 on failure.
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    fn ok(stdout: impl Into<String>) -> Self {
        Self {
            status: 0,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    fn fail(stderr: impl Into<String>) -> Self {
        Self {
            status: 1,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    #[must_use]
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

impl Engine {
    /// Run one command given as its argument vector, command name first.
    pub fn call<S: AsRef<str>>(&self, argv: &[S]) -> CommandOutput {
        let Some((name, args)) = argv.split_first() else {
            return CommandOutput::fail("Empty command\n");
        };
        let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        let output = match name.as_ref() {
            "rule" => self.cmd_rule(&args),
            "unrule" => self.cmd_unrule(&args),
            "list_rules" => CommandOutput::ok(self.list_rules()),
            "complete" => self.cmd_complete(&args),
            other => CommandOutput::fail(format!("Command \"{other}\" not found\n")),
        };
        debug!(command = name.as_ref(), status = output.status, "command finished");
        output
    }

    fn cmd_rule(&self, args: &[&str]) -> CommandOutput {
        match self.add_rule(args) {
            Ok(added) if added.print_label => CommandOutput::ok(format!("{}\n", added.label)),
            Ok(_) => CommandOutput::ok(""),
            Err(err) => {
                let mut msg = format!("rule: {err}");
                if err.is_line_terminated() {
                    msg.push('\n');
                }
                CommandOutput::fail(msg)
            }
        }
    }

    fn cmd_unrule(&self, args: &[&str]) -> CommandOutput {
        let arg = match args {
            [] => return CommandOutput::fail("unrule: Not enough arguments\n"),
            [arg] => arg,
            _ => return CommandOutput::fail("unrule: Too many arguments\n"),
        };
        match self.remove(&RuleSelector::from_arg(arg)) {
            Ok(_) => CommandOutput::ok(""),
            Err(err) => CommandOutput::fail(err.to_string()),
        }
    }

    /// `complete <argpos> [<command> <args>...]`: candidates for the argument
    /// at `argpos`, filtered by the partial word there if one is given.
    fn cmd_complete(&self, args: &[&str]) -> CommandOutput {
        let Some((pos, words)) = args.split_first() else {
            return CommandOutput::fail("complete: Not enough arguments\n");
        };
        let Ok(pos) = pos.parse::<usize>() else {
            return CommandOutput::fail(format!("complete: Invalid argument position \"{pos}\"\n"));
        };

        let candidates: Vec<String> = if pos == 0 {
            COMMANDS.iter().map(|&c| c.to_owned()).collect()
        } else {
            match words.first().copied() {
                Some("unrule") if pos == 1 => self.complete_labels(),
                Some("rule") => crate::serialize::rule_completions(),
                _ => Vec::new(),
            }
        };

        let prefix = words.get(pos).copied().unwrap_or_default();
        let mut out = String::new();
        for candidate in candidates.iter().filter(|c| c.starts_with(prefix)) {
            out.push_str(candidate);
            out.push('\n');
        }
        CommandOutput::ok(out)
    }
}
