use crate::parse::{RawTerm, RuleRequest};
use crate::{Condition, Consequence, ConsequenceName, MatchOp, Property, RuleBuilder, RuleError};

/// Turn a syntactically valid request into a rule ready for registration.
///
/// Nothing is registered here, so a failing term leaves every store untouched.
pub(crate) fn compile(request: RuleRequest) -> Result<RuleBuilder, RuleError> {
    let mut builder = RuleBuilder {
        label: request.label,
        once: request.once,
        prepend: request.prepend,
        ..RuleBuilder::default()
    };
    for term in request.terms {
        compile_term(term, &mut builder)?;
    }
    Ok(builder)
}

fn compile_term(term: RawTerm, builder: &mut RuleBuilder) -> Result<(), RuleError> {
    if let Ok(property) = term.name.parse::<Property>() {
        let op = MatchOp::from_symbol(term.op).ok_or_else(|| {
            RuleError::InvalidOperatorForProperty {
                property: term.name.clone(),
                op: term.op,
            }
        })?;
        let mut condition = Condition::parse(property, op, &term.value)?;
        if term.negation.is_some() {
            condition = condition.negate();
        }
        builder.conditions.push(condition);
        return Ok(());
    }

    let name = match term.name.parse::<ConsequenceName>() {
        Ok(name) => name,
        // only conditions take `~`
        Err(_) if term.op == MatchOp::Matches.symbol() => {
            return Err(RuleError::UnknownProperty { name: term.name })
        }
        Err(err) => return Err(err),
    };
    if let Some(flag) = term.negation {
        return Err(RuleError::DanglingNegation { flag });
    }
    if term.op != '=' {
        return Err(RuleError::InvalidOperatorForConsequence { op: term.op });
    }
    builder.consequences.push(Consequence::new(name, term.value));
    Ok(())
}
