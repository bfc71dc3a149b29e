//! Environment variable parsing with warn-level logging for invalid values.

use std::fmt;

use crate::constants::{APP_ENV_VAR, DATABASE_URL_VARS};

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + fmt::Display>(var: &str, default: T) -> T {
    parse_or_default(var, std::env::var(var).ok(), default)
}

fn parse_or_default<T: std::str::FromStr + fmt::Display>(
    var: &str,
    raw: Option<String>,
    default: T,
) -> T {
    match raw {
        Some(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        None => default,
    }
}

/// A database connection string and the variable it was read from.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseUrl {
    pub source: &'static str,
    pub url: String,
}

impl fmt::Debug for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseUrl").field("source", &self.source).field("url", &"***").finish()
    }
}

/// Resolve the database URL from the process environment.
#[must_use]
pub fn resolve_database_url() -> Option<DatabaseUrl> {
    resolve_database_url_with(|var| std::env::var(var).ok())
}

/// Resolve the database URL through `lookup`, walking [`DATABASE_URL_VARS`]
/// in order. Unset and blank values are skipped.
pub fn resolve_database_url_with<F>(lookup: F) -> Option<DatabaseUrl>
where
    F: Fn(&str) -> Option<String>,
{
    DATABASE_URL_VARS.iter().find_map(|&source| {
        lookup(source)
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .map(|url| DatabaseUrl { source, url })
    })
}

/// Deployment environment name, `unknown` when unset.
#[must_use]
pub fn app_environment() -> String {
    std::env::var(APP_ENV_VAR)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "unknown".to_owned())
}

/// Whether `environment` names a production deployment.
#[must_use]
pub fn is_production(environment: &str) -> bool {
    environment.eq_ignore_ascii_case("production")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_parse_valid_value() {
        let result: u32 = parse_or_default("X", Some("42".to_owned()), 10);
        assert_eq!(result, 42);
    }

    #[test]
    fn test_parse_invalid_value() {
        let result: u32 = parse_or_default("X", Some("banana".to_owned()), 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_parse_missing_and_empty() {
        let missing: u32 = parse_or_default("X", None, 10);
        assert_eq!(missing, 10);
        let empty: u32 = parse_or_default("X", Some(String::new()), 10);
        assert_eq!(empty, 10);
    }

    #[test]
    fn test_env_parse_unset_var_uses_default() {
        let result: u32 = env_parse_with_default("DISHPICK_TEST_UNSET_VAR_51723", 7);
        assert_eq!(result, 7);
    }

    #[test]
    fn test_first_non_empty_url_wins() {
        let lookup = lookup_from(&[
            ("NEON_URL", "   "),
            ("DATABASE_URL", "postgres://a/db"),
            ("POSTGRES_URL", "postgres://b/db"),
        ]);
        let resolved = resolve_database_url_with(lookup).unwrap();
        assert_eq!(resolved.source, "DATABASE_URL");
        assert_eq!(resolved.url, "postgres://a/db");
    }

    #[test]
    fn test_neon_url_takes_priority() {
        let lookup =
            lookup_from(&[("DATABASE_URL", "postgres://a/db"), ("NEON_URL", "postgres://n/db")]);
        assert_eq!(resolve_database_url_with(lookup).unwrap().source, "NEON_URL");
    }

    #[test]
    fn test_no_url_configured() {
        assert!(resolve_database_url_with(lookup_from(&[])).is_none());
        assert!(resolve_database_url_with(lookup_from(&[("DATABASE_URL", "")])).is_none());
    }

    #[test]
    fn test_debug_hides_url() {
        let url = DatabaseUrl { source: "DATABASE_URL", url: "postgres://u:secret@h/db".to_owned() };
        assert!(!format!("{url:?}").contains("secret"));
    }

    #[test]
    fn test_is_production() {
        assert!(is_production("production"));
        assert!(is_production("Production"));
        assert!(!is_production("development"));
        assert!(!is_production("unknown"));
    }
}
