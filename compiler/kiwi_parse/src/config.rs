//! Keyword configuration.
//!
//! Hard keywords can never be identifiers. Soft keywords are matched by text
//! where the grammar asks for them and are ordinary names everywhere else.
//! A configuration is handed to each [`Parser`](crate::Parser) at construction,
//! so parsers with different keyword sets can coexist.

use kiwi_diagnostic::{Diagnostic, ErrorCode};

/// Errors from [`GrammarConfig::new`].
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("keyword list contains an empty entry")]
    EmptyKeyword,

    #[error("keyword `{0}` is not a valid identifier")]
    NotIdentifier(String),

    #[error("keyword `{0}` is listed more than once")]
    Duplicate(String),

    #[error("keyword `{0}` is listed as both hard and soft")]
    HardAndSoft(String),
}

impl ConfigError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(ErrorCode::E9001).with_message(self.to_string())
    }
}

const KIWI_HARD_KEYWORDS: &[&str] = &[
    "private",
    "false",
    "namespace",
    "pass",
    "function",
    "public",
    "promise",
    "true",
    "continue",
    "if",
    "while",
    "else",
    "break",
    "none",
    "return",
];

const KIWI_SOFT_KEYWORDS: &[&str] = &["import", "from", "to", "as", "lambda", "match", "case", "default"];

/// Hard and soft keyword sets.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct GrammarConfig {
    hard_keywords: Vec<String>,
    soft_keywords: Vec<String>,
}

impl GrammarConfig {
    /// The Kiwi language's keyword sets.
    pub fn kiwi() -> Self {
        GrammarConfig {
            hard_keywords: KIWI_HARD_KEYWORDS.iter().map(|kw| (*kw).to_string()).collect(),
            soft_keywords: KIWI_SOFT_KEYWORDS.iter().map(|kw| (*kw).to_string()).collect(),
        }
    }

    /// Build a custom configuration.
    ///
    /// Every keyword must be a non-empty identifier, listed once, and the two
    /// sets must be disjoint.
    pub fn new<H, S>(hard: H, soft: S) -> Result<Self, ConfigError>
    where
        H: IntoIterator,
        H::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        let hard_keywords: Vec<String> = hard.into_iter().map(Into::into).collect();
        let soft_keywords: Vec<String> = soft.into_iter().map(Into::into).collect();

        let mut seen = rustc_hash::FxHashSet::default();
        for kw in hard_keywords.iter().chain(&soft_keywords) {
            validate_keyword(kw)?;
            if !seen.insert(kw.as_str()) {
                return Err(if hard_keywords.contains(kw) && soft_keywords.contains(kw) {
                    ConfigError::HardAndSoft(kw.clone())
                } else {
                    ConfigError::Duplicate(kw.clone())
                });
            }
        }

        Ok(GrammarConfig {
            hard_keywords,
            soft_keywords,
        })
    }

    pub fn hard_keywords(&self) -> impl Iterator<Item = &str> {
        self.hard_keywords.iter().map(String::as_str)
    }

    pub fn soft_keywords(&self) -> impl Iterator<Item = &str> {
        self.soft_keywords.iter().map(String::as_str)
    }

    pub fn is_hard_keyword(&self, word: &str) -> bool {
        self.hard_keywords.iter().any(|kw| kw == word)
    }

    pub fn is_soft_keyword(&self, word: &str) -> bool {
        self.soft_keywords.iter().any(|kw| kw == word)
    }
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self::kiwi()
    }
}

fn validate_keyword(kw: &str) -> Result<(), ConfigError> {
    let mut chars = kw.chars();
    let Some(first) = chars.next() else {
        return Err(ConfigError::EmptyKeyword);
    };
    if !(first.is_alphabetic() || first == '_') || !chars.all(|c| c.is_alphanumeric() || c == '_') {
        return Err(ConfigError::NotIdentifier(kw.to_string()));
    }
    Ok(())
}
