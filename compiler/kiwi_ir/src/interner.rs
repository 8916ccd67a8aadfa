//! String interner for identifiers and token text.
//!
//! Interned strings are leaked so lookups can hand out `&'static str`; the
//! interner lives for the whole compilation anyway.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::Name;

struct InternTable {
    map: FxHashMap<&'static str, u32>,
    strings: Vec<&'static str>,
}

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// More than `u32::MAX` distinct strings.
    Overflow { count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::Overflow { count } => {
                write!(f, "interner exceeded capacity: {count} strings, max is {}", u32::MAX)
            }
        }
    }
}

impl std::error::Error for InternError {}

/// Thread-safe string interner.
///
/// Token sources and the parser share one interner; the parser only reads
/// from it except when it joins adjacent string or word tokens.
pub struct StringInterner {
    table: RwLock<InternTable>,
}

impl StringInterner {
    /// Create an interner with the empty string and Kiwi's keywords
    /// pre-interned.
    pub fn new() -> Self {
        let mut map = FxHashMap::default();
        map.insert("", 0);
        let interner = StringInterner {
            table: RwLock::new(InternTable {
                map,
                strings: vec![""],
            }),
        };
        interner.pre_intern_keywords();
        interner
    }

    /// Intern `s`, returning an error if the table is full.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        if let Some(&idx) = self.table.read().map.get(s) {
            return Ok(Name::from_raw(idx));
        }

        let mut guard = self.table.write();
        // Another writer may have interned it between the two locks.
        if let Some(&idx) = guard.map.get(s) {
            return Ok(Name::from_raw(idx));
        }

        let idx = u32::try_from(guard.strings.len()).map_err(|_| InternError::Overflow {
            count: guard.strings.len(),
        })?;
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.strings.push(leaked);
        guard.map.insert(leaked, idx);
        Ok(Name::from_raw(idx))
    }

    /// Intern `s`.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` distinct strings are interned.
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Look up an already interned string without inserting it.
    pub fn get(&self, s: &str) -> Option<Name> {
        self.table.read().map.get(s).map(|&idx| Name::from_raw(idx))
    }

    /// Text of `name`.
    ///
    /// # Panics
    /// Panics if `name` did not come from this interner.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.table.read().strings[name.index()]
    }

    fn pre_intern_keywords(&self) {
        const KEYWORDS: &[&str] = &[
            // Hard keywords
            "private", "false", "namespace", "pass", "function", "public", "promise", "true",
            "continue", "if", "while", "else", "break", "none", "return",
            // Soft keywords
            "import", "from", "to", "as", "lambda", "match", "case", "default",
        ];

        for kw in KEYWORDS {
            self.intern(kw);
        }
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// True if only the empty string is interned.
    pub fn is_empty(&self) -> bool {
        self.len() == 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn intern_is_idempotent() {
        let interner = StringInterner::new();
        let a = interner.intern("speed");
        let b = interner.intern("speed");
        let c = interner.intern("velocity");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(interner.lookup(a), "speed");
        assert_eq!(interner.lookup(c), "velocity");
    }

    #[test]
    fn empty_string_is_preinterned() {
        let interner = StringInterner::new();
        assert_eq!(interner.intern(""), Name::EMPTY);
        assert_eq!(interner.lookup(Name::EMPTY), "");
    }

    #[test]
    fn keywords_are_preinterned() {
        let interner = StringInterner::new();
        assert!(interner.get("namespace").is_some());
        assert!(interner.get("lambda").is_some());
        assert!(interner.get("not_a_keyword").is_none());
        assert!(!interner.is_empty());
    }

    #[test]
    fn shared_across_threads() {
        let interner = std::sync::Arc::new(StringInterner::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let interner = std::sync::Arc::clone(&interner);
                std::thread::spawn(move || interner.intern(&format!("t{}", i % 2)))
            })
            .collect();
        let names: Vec<Name> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(names[0], names[2]);
        assert_eq!(names[1], names[3]);
    }
}
