//! `${VAR}` references in configuration strings.

use crate::ConfigError;

/// Replace every `${VAR}` and `${VAR:-default}` reference in `value`.
///
/// Only braced references are expanded; a bare `$` (prices, `$HOME`) is
/// literal text, and so is an unclosed `${`. References do not nest.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let mut expanded = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        let Some(close) = rest[start..].find('}') else {
            break;
        };
        let end = start + close + 1;

        expanded.push_str(&rest[..start]);
        expanded.push_str(&expand_reference(&rest[start..end], field)?);
        rest = &rest[end..];
    }
    expanded.push_str(rest);

    Ok(expanded)
}

/// Expand a single `${...}` reference through shellexpand.
fn expand_reference(reference: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env_with_context(reference, |name: &str| {
        std::env::var(name)
            .map(Some)
            .map_err(|_| name.to_owned())
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause),
    })
}
