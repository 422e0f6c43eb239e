pub mod data;

use phf::Map;
use std::{fmt, hash, str::FromStr};
use thiserror::Error;

pub use data::{ALPHABET_TABLE, RUS, UKR, all_alphabets, from_code};

/// Alphabet used when a caller does not pick one explicitly.
pub const DEFAULT_ALPHABET: Alphabet = RUS;

/// Label language fed to [`DEFAULT_ALPHABET`] when the caller picks neither.
/// The Russian table also covers the Ukrainian labels it is paired with.
pub const DEFAULT_FALLBACK_LANGUAGE: LanguageCode = LanguageCode::UKRAINIAN;

/// Numeric language identifier attached to localized labels (an LCID, e.g. 1033 for English).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguageCode(pub u32);

impl LanguageCode {
    pub const ENGLISH: Self = Self(1033);
    pub const RUSSIAN: Self = Self(1049);
    pub const UKRAINIAN: Self = Self(1058);

    #[inline(always)]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for LanguageCode {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("unknown alphabet `{0}`")]
    Unknown(String),
}

/// A static source-script → Latin mapping plus the language its labels are written in.
///
/// Every alphabet is generated by `define_alphabets!` in [`data`]; the backing
/// `phf` map rejects duplicate source characters at compile time, so a lookup
/// is always deterministic.
#[derive(Clone, Copy)]
pub struct Alphabet {
    code: &'static str,
    name: &'static str,
    language: LanguageCode,
    map: &'static Map<char, &'static str>,
}

impl Alphabet {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Language whose labels this alphabet is meant to transliterate.
    #[inline(always)]
    pub const fn language(&self) -> LanguageCode {
        self.language
    }

    #[inline(always)]
    pub fn lookup(&self, c: char) -> Option<&'static str> {
        self.map.get(&c).copied()
    }

    #[inline(always)]
    pub fn contains(&self, c: char) -> bool {
        self.map.contains_key(&c)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// All `(source, fragment)` pairs, in table order.
    pub fn mappings(&self) -> impl Iterator<Item = (char, &'static str)> + '_ {
        self.map.entries().map(|(&from, &to)| (from, to))
    }

    /// Returns `(replaced_chars, extra_bytes)` for sizing an output buffer.
    /// `extra_bytes` only counts growth; shrinking replacements contribute zero.
    pub fn count_transliterate_bytes(&self, text: &str) -> (usize, usize) {
        let mut count = 0;
        let mut extra = 0;
        for c in text.chars() {
            if let Some(to) = self.lookup(c) {
                count += 1;
                extra += to.len().saturating_sub(c.len_utf8());
            }
        }
        (count, extra)
    }

    /// First registered alphabet whose native language is `language`.
    pub fn by_language(language: LanguageCode) -> Option<Alphabet> {
        all_alphabets()
            .iter()
            .copied()
            .find(|a| a.language == language)
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alphabet")
            .field("code", &self.code)
            .field("name", &self.name)
            .field("language", &self.language)
            .field("entries", &self.map.len())
            .finish()
    }
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Alphabet {}

impl hash::Hash for Alphabet {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl FromStr for Alphabet {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_code(s).ok_or_else(|| AlphabetError::Unknown(s.to_string()))
    }
}
