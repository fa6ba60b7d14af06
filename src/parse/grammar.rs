use winnow::combinator::{alt, cut_err, opt, preceded, repeat};
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{any, none_of, one_of, rest, take_till, take_while};

/// Operator characters, in the order the splitter looks for them.
pub(crate) const OPERATORS: [char; 2] = ['=', '~'];

/// One `rule` argument: a bare flag or a `name OP value` term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'i> {
    Flag(&'i str),
    Term {
        name: &'i str,
        op: char,
        value: &'i str,
    },
}

// -- Rule arguments ---------------------------------------------------------

/// Split at the first operator character. Everything after it, further
/// operators included, is the value.
pub(crate) fn token<'i>(input: &mut &'i str) -> ModalResult<Token<'i>> {
    let name = take_till(0.., OPERATORS).parse_next(input)?;
    match opt(one_of(OPERATORS)).parse_next(input)? {
        Some(op) => {
            let value = rest.parse_next(input)?;
            Ok(Token::Term { name, op, value })
        }
        None => Ok(Token::Flag(name)),
    }
}

// -- Rules files ------------------------------------------------------------

fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., char::is_whitespace)
        .void()
        .parse_next(input)
}

fn quoted_body(input: &mut &str) -> ModalResult<String> {
    let mut s = String::new();
    loop {
        let ch = any.parse_next(input)?;
        match ch {
            '"' => return Ok(s),
            '\\' => {
                let esc = any.parse_next(input)?;
                match esc {
                    '"' => s.push('"'),
                    '\\' => s.push('\\'),
                    'n' => s.push('\n'),
                    't' => s.push('\t'),
                    other => {
                        s.push('\\');
                        s.push(other);
                    }
                }
            }
            c => s.push(c),
        }
    }
}

fn string_literal(input: &mut &str) -> ModalResult<String> {
    '"'.parse_next(input)?;
    cut_err(quoted_body)
        .context(StrContext::Expected(StrContextValue::CharLiteral('"')))
        .parse_next(input)
}

fn bare_word(input: &mut &str) -> ModalResult<String> {
    (
        none_of(['"', '#']),
        take_till(0.., char::is_whitespace),
    )
        .take()
        .map(str::to_owned)
        .parse_next(input)
}

/// Words of one rules-file line, with a trailing `#` comment dropped.
pub(crate) fn line_words(input: &mut &str) -> ModalResult<Vec<String>> {
    let words: Vec<String> =
        repeat(0.., preceded(ws, alt((string_literal, bare_word)))).parse_next(input)?;
    ws.parse_next(input)?;
    opt(('#', rest)).parse_next(input)?;
    Ok(words)
}
