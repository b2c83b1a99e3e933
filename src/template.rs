//! Placeholder substitution for unit templates
//!
//! Tokens are literal substrings, not a templating syntax. Substitution is a
//! single left-to-right pass over the original text: at each position the
//! longest matching token is replaced once and scanning resumes after it, so
//! replacement text is never re-scanned.
//!
//! | Token      | Replaced with                          |
//! |------------|----------------------------------------|
//! | `NAME`     | display name, verbatim                 |
//! | `HOSTNAME` | unit id, verbatim                      |
//! | `HANAME`   | display name slug (`Living Room` → `living_room`) |

use regex::{Captures, Regex};

use crate::units::Unit;

/// A recognised placeholder token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Name,
    Hostname,
    HaName,
}

impl Placeholder {
    /// Literal token text as it appears in templates
    pub fn token(self) -> &'static str {
        match self {
            Placeholder::Name => "NAME",
            Placeholder::Hostname => "HOSTNAME",
            Placeholder::HaName => "HANAME",
        }
    }

    /// Value this placeholder takes for `unit`
    pub fn value_for(self, unit: &Unit) -> String {
        match self {
            Placeholder::Name => unit.name.clone(),
            Placeholder::Hostname => unit.id.clone(),
            Placeholder::HaName => unit.slug(),
        }
    }
}

/// The set of placeholders a template is expanded with
#[derive(Debug, Clone)]
pub struct PlaceholderSet {
    /// Sorted longest token first
    placeholders: Vec<Placeholder>,
    /// Alternation of the tokens in the same order, `None` for an empty set
    pattern: Option<Regex>,
}

impl PlaceholderSet {
    pub fn new(placeholders: impl IntoIterator<Item = Placeholder>) -> Self {
        let mut placeholders: Vec<Placeholder> = placeholders.into_iter().collect();
        placeholders.sort_by_key(|p| std::cmp::Reverse(p.token().len()));
        placeholders.dedup();
        let pattern = Self::compile(&placeholders);
        Self {
            placeholders,
            pattern,
        }
    }

    /// Leftmost-first alternation, so the longest token wins at each position
    fn compile(placeholders: &[Placeholder]) -> Option<Regex> {
        if placeholders.is_empty() {
            return None;
        }
        let escaped: Vec<String> = placeholders
            .iter()
            .map(|p| regex::escape(p.token()))
            .collect();
        Regex::new(&escaped.join("|")).ok()
    }

    /// `NAME`, `HOSTNAME` and `HANAME`
    pub fn standard() -> Self {
        Self::new([Placeholder::Name, Placeholder::Hostname, Placeholder::HaName])
    }

    /// `NAME` and `HOSTNAME` only, as used by `generate`
    pub fn basic() -> Self {
        Self::new([Placeholder::Name, Placeholder::Hostname])
    }

    pub fn iter(&self) -> impl Iterator<Item = Placeholder> + '_ {
        self.placeholders.iter().copied()
    }

    /// Comma-separated token list for help and log output
    pub fn describe(&self) -> String {
        let mut tokens: Vec<&str> = self.iter().map(Placeholder::token).collect();
        tokens.sort_unstable();
        tokens.join(", ")
    }

    /// Substitute every placeholder in `template` with the values for `unit`
    pub fn substitute(&self, template: &str, unit: &Unit) -> String {
        let Some(pattern) = &self.pattern else {
            return template.to_string();
        };
        let values: Vec<(&str, String)> = self
            .placeholders
            .iter()
            .map(|p| (p.token(), p.value_for(unit)))
            .collect();

        pattern
            .replace_all(template, |caps: &Captures| {
                let token = &caps[0];
                values
                    .iter()
                    .find(|(t, _)| *t == token)
                    .map_or_else(|| token.to_string(), |(_, value)| value.clone())
            })
            .into_owned()
    }
}
