use crate::{error::ResolveError, prelude::*};
use std::collections::BTreeSet;

/// Interpret a comma-delimited cascade specification into a normalized,
/// deduplicated action set.
///
/// Tokens are trimmed; empty tokens are skipped; `all` expands to the full
/// known action set at interpretation time; `none` contributes nothing.
/// Context-registered aliases are consulted after the built-in vocabulary.
/// An unrecognized token fails with the offending attribute path attached.
pub fn interpret_cascades(
    spec: Option<&str>,
    ctx: &BindingContext,
    path: &AttributePath,
) -> Result<BTreeSet<CascadeAction>, ResolveError> {
    let mut actions = BTreeSet::new();

    let Some(spec) = spec else {
        return Ok(actions);
    };

    for token in spec.split(',') {
        let token = token.trim();

        if token.is_empty() {
            continue;
        }
        if token.eq_ignore_ascii_case("all") {
            actions.extend(CascadeAction::ALL);
            continue;
        }
        if token.eq_ignore_ascii_case("none") {
            continue;
        }
        if let Ok(action) = token.parse::<CascadeAction>() {
            actions.insert(action);
            continue;
        }
        if let Some(extension) = ctx.cascade_alias(token) {
            actions.extend(extension.iter().copied());
            continue;
        }

        return Err(ResolveError::invalid_cascade_token(path.clone(), token));
    }

    Ok(actions)
}
