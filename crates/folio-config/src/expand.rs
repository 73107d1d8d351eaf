//! Environment lookups in site text fields.
//!
//! Runs on `title`, `description` and `theme.logo` before paths are
//! resolved, so one site file can serve several deployments:
//!
//! ```toml
//! title = "${SITE_TITLE:-Portfolio}"
//! ```

use crate::ConfigError;

/// Substitute `${VAR}` references in the value of `field`.
///
/// An unset VAR fails with [`ConfigError::EnvVar`] naming `field`, unless a
/// `:-default` is given. Text without `${` is returned untouched, so `$5`
/// in a description stays literal.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, UnsetVar> {
        std::env::var(var).map(Some).map_err(|_| UnsetVar {
            name: var.to_owned(),
        })
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.name),
    })
}

/// Substitute in place; absent fields (no logo) are skipped.
pub(crate) fn expand_opt(value: &mut Option<String>, field: &str) -> Result<(), ConfigError> {
    if let Some(v) = value.as_mut() {
        *v = expand_env(v, field)?;
    }
    Ok(())
}

/// Name of the variable that had no value.
struct UnsetVar {
    name: String,
}
