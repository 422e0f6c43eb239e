//! transliterator.rs – **Script → Latin, one character at a time**
//! * Every mapped char is replaced by its fragment (zero, one, or many chars)
//! * Unmapped chars pass through untouched: no case mapping, no normalization
//! * Zero-copy when nothing in the input is mapped
use crate::alphabet::{Alphabet, DEFAULT_ALPHABET, DEFAULT_FALLBACK_LANGUAGE, LanguageCode};
use std::borrow::Cow;

/// An [`Alphabet`] bound to the language whose labels it is fed.
///
/// The fallback language selects which localized label gets transliterated when
/// no usable default name exists. It normally equals the alphabet's own
/// language, but may point elsewhere (e.g. Ukrainian labels through the Russian
/// table). The binding is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transliterator {
    alphabet: Alphabet,
    fallback_language: LanguageCode,
}

impl Default for Transliterator {
    #[inline(always)]
    fn default() -> Self {
        Self::new(DEFAULT_ALPHABET, DEFAULT_FALLBACK_LANGUAGE)
    }
}

impl Transliterator {
    #[inline(always)]
    pub const fn new(alphabet: Alphabet, fallback_language: LanguageCode) -> Self {
        Self {
            alphabet,
            fallback_language,
        }
    }

    /// Bind an alphabet to its own native language.
    #[inline(always)]
    pub const fn for_alphabet(alphabet: Alphabet) -> Self {
        Self::new(alphabet, alphabet.language())
    }

    #[inline(always)]
    pub const fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    #[inline(always)]
    pub const fn fallback_language(&self) -> LanguageCode {
        self.fallback_language
    }

    /// Fast pre-check: does any character of `text` have a table entry?
    #[inline(always)]
    pub fn needs_transliteration(&self, text: &str) -> bool {
        text.chars().any(|c| self.alphabet.contains(c))
    }

    /// Transliterate `text`. Never fails; empty input yields empty output.
    pub fn transliterate<'a>(&self, text: impl Into<Cow<'a, str>>) -> Cow<'a, str> {
        let text = text.into();
        let (count, extra_bytes) = self.alphabet.count_transliterate_bytes(&text);
        if count == 0 {
            return text;
        }

        let mut out = String::with_capacity(text.len() + extra_bytes);
        for c in text.chars() {
            match self.alphabet.lookup(c) {
                Some(to) => out.push_str(to),
                None => out.push(c),
            }
        }
        Cow::Owned(out)
    }
}
