mod error;
mod grammar;
mod parser;

use winnow::Parser;

pub use error::ParseError;
pub use parser::{RawTerm, RuleLine, RuleRequest};

use crate::RuleError;
use grammar::Token;

/// Negation flag spellings.
pub const NEGATION_FLAGS: [&str; 2] = ["not", "!"];

/// Rule flags that take no value.
pub const RULE_FLAGS: [&str; 5] = ["once", "not", "!", "prepend", "printlabel"];

/// Split the arguments of a `rule` request into flags, label and terms.
///
/// Only the syntax is checked here: operators on `label`, unknown flags, a
/// trailing negation and tabs or newlines, which the tab-separated listing
/// cannot represent. Names and values are checked by
/// [`RuleRequest::compile()`].
///
/// # Errors
///
/// Returns [`RuleError::NotEnoughArguments`] for an empty argument list,
/// otherwise the [`RuleError`] of the first malformed argument.
pub fn parse_rule_args<S: AsRef<str>>(args: &[S]) -> Result<RuleRequest, RuleError> {
    if args.is_empty() {
        return Err(RuleError::NotEnoughArguments);
    }
    let mut request = RuleRequest::default();
    let mut negation: Option<String> = None;

    for arg in args {
        let arg = arg.as_ref();
        if arg.contains(['\t', '\n']) {
            return Err(RuleError::ControlCharacter {
                arg: arg.to_owned(),
            });
        }
        let token = grammar::token
            .parse(arg)
            .map_err(|_| RuleError::UnknownFlag {
                flag: arg.to_owned(),
            })?;
        match token {
            Token::Flag("once") => request.once = true,
            Token::Flag("prepend") => request.prepend = true,
            Token::Flag("printlabel") => request.print_label = true,
            Token::Flag(flag) if NEGATION_FLAGS.contains(&flag) => {
                // a second negation cancels the first
                negation = match negation {
                    Some(_) => None,
                    None => Some(flag.to_owned()),
                };
            }
            Token::Flag(flag) => {
                return Err(RuleError::UnknownFlag {
                    flag: flag.to_owned(),
                })
            }
            Token::Term {
                name: "label",
                op,
                value,
            } => {
                if op != '=' {
                    return Err(RuleError::InvalidOperatorForLabel { op });
                }
                request.label = Some(value.to_owned());
            }
            Token::Term { name, op, value } => request.terms.push(RawTerm {
                negation: negation.take(),
                name: name.to_owned(),
                op,
                value: value.to_owned(),
            }),
        }
    }

    if let Some(flag) = negation {
        return Err(RuleError::DanglingNegation { flag });
    }
    Ok(request)
}

/// Split a rules file into argument lists, one per non-empty line.
///
/// A leading `rule` word is dropped, so files can be written either as bare
/// argument lists or as `rule ...` invocations.
///
/// # Errors
///
/// Returns [`ParseError`] for the first line that cannot be tokenized.
pub fn parse_rules_file(input: &str) -> Result<Vec<RuleLine>, ParseError> {
    let mut lines = Vec::new();
    for (idx, text) in input.lines().enumerate() {
        let line = idx + 1;
        let mut args = grammar::line_words
            .parse(text)
            .map_err(|e| ParseError::new(line, e.to_string()))?;
        if args.is_empty() {
            continue;
        }
        if args[0] == "rule" {
            args.remove(0);
        }
        lines.push(RuleLine { line, args });
    }
    Ok(lines)
}
