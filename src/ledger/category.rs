use std::collections::HashSet;

use strsim::levenshtein;

use crate::errors::ConfigError;

/// Categories available when no configuration overrides them.
pub const PREDEFINED_CATEGORIES: [&str; 5] =
    ["food", "transport", "shopping", "salary", "entertainment"];

const MAX_SUGGESTION_DISTANCE: usize = 3;

/// The fixed list of categories a ledger accepts.
///
/// Built once at construction and never changed afterwards. Membership is an
/// exact, case-sensitive match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySet {
    names: Vec<String>,
}

impl CategorySet {
    /// Builds a custom set, rejecting empty lists, blank names and duplicates.
    pub fn new<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one category is required".into(),
            ));
        }

        let mut seen = HashSet::new();
        for name in &names {
            if name.trim().is_empty() {
                return Err(ConfigError::Invalid("category names cannot be blank".into()));
            }
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "category `{}` is listed more than once",
                    name
                )));
            }
        }

        Ok(Self { names })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|candidate| candidate == name)
    }

    /// Resolves the 1-based number shown in the category menu.
    pub fn by_number(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|index| self.names.get(index))
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Closest known category to a mistyped name, if any is near enough.
    pub fn suggest(&self, name: &str) -> Option<&str> {
        let needle = name.to_lowercase();
        self.names
            .iter()
            .filter(|candidate| candidate.as_str() != name)
            .map(|candidate| (levenshtein(&needle, &candidate.to_lowercase()), candidate))
            .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, candidate)| candidate.as_str())
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self {
            names: PREDEFINED_CATEGORIES.iter().map(|name| name.to_string()).collect(),
        }
    }
}
