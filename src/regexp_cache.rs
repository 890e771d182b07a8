use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct InvalidRegexError(#[from] regex::Error);

/// Compiled patterns keyed by their source. Prefix matching is up to the
/// caller, see [`RegexConsume`](crate::regex_util::RegexConsume).
pub struct RegexCache {
    cache: DashMap<String, Arc<regex::Regex>>,
}

impl RegexCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_regex(&self, pattern: &str) -> Result<Arc<regex::Regex>, InvalidRegexError> {
        if let Some(regex) = self.cache.get(pattern) {
            return Ok(regex.value().clone());
        }
        let entry = self.cache.entry(pattern.to_string()).or_try_insert_with(|| {
            regex::Regex::new(pattern).map(Arc::new)
        })?;
        Ok(entry.value().clone())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.cache.len()
    }
}
