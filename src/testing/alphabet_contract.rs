use crate::{alphabet::Alphabet, transliterator::Transliterator};

/// Samples that no alphabet may touch.
const PASS_THROUGH: &[&str] = &["hello", "World_42", "abc_def", ""];

/// Assert that an alphabet satisfies every universal contract.
///
/// 1. `fragments_are_identifier_safe` → every fragment is ASCII letters/digits/underscore
/// 2. `latin_passes_through` → ASCII letters and digits are never remapped
/// 3. `case_pairs_agree` → an uppercase letter maps to the capitalized lowercase fragment
/// 4. `single_chars_match_table` → transliterating one mapped char yields exactly its fragment
/// 5. `transliteration_is_deterministic` → same input, same output
pub fn assert_alphabet_contract(alphabet: Alphabet) {
    fragments_are_identifier_safe(alphabet);
    latin_passes_through(alphabet);
    case_pairs_agree(alphabet);
    single_chars_match_table(alphabet);
    transliteration_is_deterministic(alphabet);
}

pub fn fragments_are_identifier_safe(alphabet: Alphabet) {
    for (from, to) in alphabet.mappings() {
        assert!(
            to.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
            "{}: '{from}' maps to non-identifier fragment {to:?}",
            alphabet.code()
        );
    }
}

pub fn latin_passes_through(alphabet: Alphabet) {
    for (from, _) in alphabet.mappings() {
        assert!(
            !from.is_ascii_alphanumeric(),
            "{}: ASCII '{from}' must not be remapped",
            alphabet.code()
        );
    }
    let t = Transliterator::for_alphabet(alphabet);
    for &input in PASS_THROUGH {
        assert_eq!(t.transliterate(input), input, "{}", alphabet.code());
    }
}

pub fn case_pairs_agree(alphabet: Alphabet) {
    for (from, to) in alphabet.mappings().filter(|(c, _)| c.is_uppercase()) {
        let Some(lower) = from.to_lowercase().next() else {
            continue;
        };
        if let Some(lower_to) = alphabet.lookup(lower) {
            assert_eq!(
                to.to_lowercase(),
                lower_to,
                "{}: '{from}' and '{lower}' disagree",
                alphabet.code()
            );
        }
    }
}

pub fn single_chars_match_table(alphabet: Alphabet) {
    let t = Transliterator::for_alphabet(alphabet);
    let mut buf = [0u8; 4];
    for (from, to) in alphabet.mappings() {
        let input: &str = from.encode_utf8(&mut buf);
        assert_eq!(t.transliterate(input), to, "{}: '{from}'", alphabet.code());
    }
}

pub fn transliteration_is_deterministic(alphabet: Alphabet) {
    let t = Transliterator::for_alphabet(alphabet);
    let all: String = alphabet.mappings().map(|(c, _)| c).collect();
    let once = t.transliterate(all.as_str()).into_owned();
    let twice = t.transliterate(all.as_str()).into_owned();
    assert_eq!(once, twice, "{}", alphabet.code());
}
