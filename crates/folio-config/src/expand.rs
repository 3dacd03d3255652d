//! `${VAR}` and `${VAR:-default}` expansion for config string fields.

use std::env::VarError;

use crate::LoadError;

/// Expand environment variable references in `value`.
///
/// Bare `$VAR` is left untouched; only the braced form is recognized, and an
/// unterminated `${` is kept literally. An unset variable without a default is
/// an error naming both the variable and the config `field` it appeared in.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, LoadError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let mut expanded = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let end = start + len + 1;
        expanded.push_str(&rest[..start]);
        expanded.push_str(&expand_braced(&rest[start..end], field)?);
        rest = &rest[end..];
    }
    expanded.push_str(rest);
    Ok(expanded)
}

/// Expand a single `${...}` span.
fn expand_braced(span: &str, field: &str) -> Result<String, LoadError> {
    shellexpand::env_with_context(span, |var| std::env::var(var).map(Some))
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| LoadError::EnvVar {
            field: field.to_owned(),
            message: match e.cause {
                VarError::NotPresent => format!("${{{}}} not set", e.var_name),
                VarError::NotUnicode(_) => format!("${{{}}} is not valid unicode", e.var_name),
            },
        })
}

/// Expand an optional field in place.
pub(crate) fn expand_env_opt(value: &mut Option<String>, field: &str) -> Result<(), LoadError> {
    if let Some(inner) = value.as_deref() {
        *value = Some(expand_env(inner, field)?);
    }
    Ok(())
}
