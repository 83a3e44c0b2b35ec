use std::env;

use anyhow::{Context as _, bail};
use tracing::debug;

use pagerange_utils::pagination::DEFAULT_SIBLING_COUNT;

/// Environment variable holding the default page size.
pub const PAGE_SIZE_VAR: &str = "PAGERANGE_PAGE_SIZE";
/// Environment variable holding the default sibling count.
pub const SIBLING_COUNT_VAR: &str = "PAGERANGE_SIBLING_COUNT";
/// Page size used when the environment does not set one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Pagination defaults shared by every front end.
///
/// Cheap to clone; command-line flags override individual fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub page_size: usize,
    pub sibling_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            sibling_count: DEFAULT_SIBLING_COUNT,
        }
    }
}

impl Settings {
    /// Load settings from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let page_size = read_usize(&lookup, PAGE_SIZE_VAR)?.unwrap_or(defaults.page_size);
        if page_size == 0 {
            bail!("{PAGE_SIZE_VAR} must be at least 1");
        }

        let sibling_count =
            read_usize(&lookup, SIBLING_COUNT_VAR)?.unwrap_or(defaults.sibling_count);

        let settings = Self {
            page_size,
            sibling_count,
        };
        debug!(?settings, "loaded pagination settings");

        Ok(settings)
    }
}

fn read_usize(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> anyhow::Result<Option<usize>> {
    let Some(raw) = lookup(key).filter(|value| !value.trim().is_empty()) else {
        return Ok(None);
    };

    let value = raw
        .trim()
        .parse::<usize>()
        .with_context(|| format!("{key} must be a non-negative integer, got {raw:?}"))?;

    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_variables_use_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn variables_override_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[
            (PAGE_SIZE_VAR, "25"),
            (SIBLING_COUNT_VAR, " 2 "),
        ]))
        .unwrap();

        assert_eq!(settings.page_size, 25);
        assert_eq!(settings.sibling_count, 2);
    }

    #[test]
    fn blank_variable_counts_as_unset() {
        let settings = Settings::from_lookup(lookup_from(&[(PAGE_SIZE_VAR, "  ")])).unwrap();
        assert_eq!(settings.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = Settings::from_lookup(lookup_from(&[(PAGE_SIZE_VAR, "0")])).unwrap_err();
        assert!(err.to_string().contains(PAGE_SIZE_VAR));
    }

    #[test]
    fn garbage_value_is_rejected() {
        let err = Settings::from_lookup(lookup_from(&[(SIBLING_COUNT_VAR, "-1")])).unwrap_err();
        assert!(err.to_string().contains(SIBLING_COUNT_VAR));
    }
}
