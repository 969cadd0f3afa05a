//! Name and alias lookup.
//!
//! A [`Registry`] is an immutable table built once by [`Registry::new`] and
//! passed around by reference. Lookups are case-insensitive.

use rustc_hash::FxHashMap;

use crate::Language;

/// Failure to resolve a language name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("unknown language `{name}` (known: {})", .known.join(", "))]
    UnknownLanguage {
        name: String,
        /// Canonical names, sorted.
        known: Vec<&'static str>,
    },
}

/// Maps canonical names and aliases to languages.
#[derive(Clone, Debug)]
pub struct Registry {
    by_name: FxHashMap<&'static str, Language>,
}

impl Registry {
    pub fn new() -> Self {
        let mut by_name = FxHashMap::default();
        for &language in Language::ALL {
            let info = language.info();
            by_name.insert(info.name, language);
            for &alias in info.aliases {
                by_name.insert(alias, language);
            }
        }
        tracing::debug!(
            languages = Language::ALL.len(),
            entries = by_name.len(),
            "language registry built"
        );
        Self { by_name }
    }

    /// Resolve a canonical name or alias, ignoring ASCII case and
    /// surrounding whitespace.
    pub fn get(&self, name: &str) -> Result<Language, LookupError> {
        self.lookup(name).ok_or_else(|| LookupError::UnknownLanguage {
            name: name.to_owned(),
            known: self.names(),
        })
    }

    pub fn supports(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    pub fn languages(&self) -> &'static [Language] {
        Language::ALL
    }

    /// Canonical names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = Language::ALL.iter().map(|l| l.name()).collect();
        names.sort_unstable();
        names
    }

    fn lookup(&self, name: &str) -> Option<Language> {
        let name = name.trim();
        if let Some(&language) = self.by_name.get(name) {
            return Some(language);
        }
        self.by_name.get(name.to_ascii_lowercase().as_str()).copied()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
