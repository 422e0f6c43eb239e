use crate::alphabet::{Alphabet, LanguageCode};

use paste::paste;
use phf::{Map, phf_map};

// ---------------------------------------------------------------------------
//    Macro – generates every alphabet from a single table
// ---------------------------------------------------------------------------
macro_rules! define_alphabets {
    ($(
        $code:ident, $code_str:literal, $name:literal, $lcid:literal,
        map: [ $($from:tt => $to:tt),* $(,)? ]
    ),* $(,)?) => {
        // Per-alphabet static data modules
        $(
            paste! {
                mod [<$code:lower _data>] {
                    use super::*;

                    pub static MAP: Map<char, &'static str> = phf_map! {
                        $($from => $to),*
                    };
                }
            }
        )*

        // Public `Alphabet` constants
        $(
            paste! {
                pub const $code: Alphabet = Alphabet {
                    code: $code_str,
                    name: $name,
                    language: LanguageCode($lcid),
                    map: &[<$code:lower _data>]::MAP,
                };
            }
        )*

        /// Global lookup table keyed by alphabet code.
        pub static ALPHABET_TABLE: Map<&'static str, Alphabet> = phf_map! {
            $( $code_str => $code ),*
        };

        static ALL_ALPHABETS: &[Alphabet] = &[$($code),*];

        /// Every alphabet known to the crate, in definition order.
        #[inline]
        pub fn all_alphabets() -> &'static [Alphabet] {
            ALL_ALPHABETS
        }

        /// Resolve an alphabet by its three-letter code (case-insensitive).
        pub fn from_code(code: &str) -> Option<Alphabet> {
            ALPHABET_TABLE.get(code.to_uppercase().as_str()).copied()
        }
    };
}

// ---------------------------------------------------------------------------
//    Alphabet definitions (single source of truth)
//    Punctuation rows are shared in spirit: separators become '_', grouping
//    and terminal marks vanish, and a few symbols get spelled out.
// ---------------------------------------------------------------------------
define_alphabets! {
    RUS, "RUS", "Russian", 1049,
        map: [
            'а' => "a",  'б' => "b",  'в' => "v",   'г' => "g",  'д' => "d",
            'е' => "e",  'ё' => "yo", 'ж' => "zh",  'з' => "z",  'и' => "i",
            'й' => "j",  'к' => "k",  'л' => "l",   'м' => "m",  'н' => "n",
            'о' => "o",  'п' => "p",  'р' => "r",   'с' => "s",  'т' => "t",
            'у' => "u",  'ф' => "f",  'х' => "h",   'ц' => "c",  'ч' => "ch",
            'ш' => "sh", 'щ' => "sch", 'ь' => "",   'ы' => "y",  'ъ' => "",
            'э' => "e",  'ю' => "yu", 'я' => "ya",

            'А' => "A",  'Б' => "B",  'В' => "V",   'Г' => "G",  'Д' => "D",
            'Е' => "E",  'Ё' => "Yo", 'Ж' => "Zh",  'З' => "Z",  'И' => "I",
            'Й' => "J",  'К' => "K",  'Л' => "L",   'М' => "M",  'Н' => "N",
            'О' => "O",  'П' => "P",  'Р' => "R",   'С' => "S",  'Т' => "T",
            'У' => "U",  'Ф' => "F",  'Х' => "H",   'Ц' => "C",  'Ч' => "Ch",
            'Ш' => "Sh", 'Щ' => "Sch", 'Ь' => "",   'Ы' => "Y",  'Ъ' => "",
            'Э' => "E",  'Ю' => "Yu", 'Я' => "Ya",

            // Cyrillic homoglyphs that show up in Russian-language labels
            'і' => "i",  'І' => "I",

            '/' => "_",  '-' => "_",  ' ' => "_",  '→' => "_",  ':' => "_",
            '"' => "_",  ';' => "_",  ',' => "",   '(' => "",   ')' => "",
            '.' => "",   '+' => "i",  '%' => "procentov",  '$' => "S",
        ],

    UKR, "UKR", "Ukrainian", 1058,
        map: [
            'а' => "a",  'б' => "b",  'в' => "v",   'г' => "h",  'ґ' => "g",
            'д' => "d",  'е' => "e",  'є' => "ye",  'ж' => "zh", 'з' => "z",
            'и' => "y",  'і' => "i",  'ї' => "yi",  'й' => "j",  'к' => "k",
            'л' => "l",  'м' => "m",  'н' => "n",   'о' => "o",  'п' => "p",
            'р' => "r",  'с' => "s",  'т' => "t",   'у' => "u",  'ф' => "f",
            'х' => "kh", 'ц' => "ts", 'ч' => "ch",  'ш' => "sh", 'щ' => "shch",
            'ь' => "",   'ю' => "yu", 'я' => "ya",

            'А' => "A",  'Б' => "B",  'В' => "V",   'Г' => "H",  'Ґ' => "G",
            'Д' => "D",  'Е' => "E",  'Є' => "Ye",  'Ж' => "Zh", 'З' => "Z",
            'И' => "Y",  'І' => "I",  'Ї' => "Yi",  'Й' => "J",  'К' => "K",
            'Л' => "L",  'М' => "M",  'Н' => "N",   'О' => "O",  'П' => "P",
            'Р' => "R",  'С' => "S",  'Т' => "T",   'У' => "U",  'Ф' => "F",
            'Х' => "Kh", 'Ц' => "Ts", 'Ч' => "Ch",  'Ш' => "Sh", 'Щ' => "Shch",
            'Ь' => "",   'Ю' => "Yu", 'Я' => "Ya",

            // Russian letters that leak into Ukrainian labels
            'ё' => "yo", 'ы' => "y",  'э' => "e",   'ъ' => "",
            'Ё' => "Yo", 'Ы' => "Y",  'Э' => "E",   'Ъ' => "",

            // apostrophe variants used in place of the hard sign
            '\'' => "",  '’' => "",   'ʼ' => "",

            '/' => "_",  '-' => "_",  ' ' => "_",  '→' => "_",  ':' => "_",
            '"' => "_",  ';' => "_",  ',' => "",   '(' => "",   ')' => "",
            '.' => "",   '+' => "i",  '%' => "vidsotkiv",  '$' => "S",
        ],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::alphabet_contract::assert_alphabet_contract;

    #[test]
    fn every_alphabet_satisfies_contract() {
        for &alphabet in all_alphabets() {
            assert_alphabet_contract(alphabet);
        }
    }

    #[test]
    fn table_and_constants_agree() {
        assert_eq!(ALPHABET_TABLE.len(), all_alphabets().len());
        for &alphabet in all_alphabets() {
            assert_eq!(ALPHABET_TABLE.get(alphabet.code()), Some(&alphabet));
        }
    }

    #[test]
    fn punctuation_rows_map_to_fixed_fragments() {
        let shared: &[(char, &str)] = &[
            ('/', "_"),
            ('-', "_"),
            (' ', "_"),
            ('→', "_"),
            (':', "_"),
            ('"', "_"),
            (';', "_"),
            (',', ""),
            ('(', ""),
            (')', ""),
            ('.', ""),
            ('+', "i"),
            ('$', "S"),
        ];
        for &alphabet in all_alphabets() {
            for &(from, to) in shared {
                assert_eq!(alphabet.lookup(from), Some(to), "{}: '{from}'", alphabet.code());
            }
        }
        assert_eq!(RUS.lookup('%'), Some("procentov"));
        assert_eq!(UKR.lookup('%'), Some("vidsotkiv"));
    }

    #[test]
    fn russian_keeps_legacy_spellings() {
        assert_eq!(RUS.lookup('щ'), Some("sch"));
        assert_eq!(RUS.lookup('ц'), Some("c"));
        assert_eq!(RUS.lookup('х'), Some("h"));
        assert_eq!(RUS.lookup('%'), Some("procentov"));
        assert_eq!(RUS.lookup('+'), Some("i"));
    }

    #[test]
    fn ukrainian_has_its_own_letters() {
        assert_eq!(UKR.lookup('ґ'), Some("g"));
        assert_eq!(UKR.lookup('г'), Some("h"));
        assert_eq!(UKR.lookup('Ї'), Some("Yi"));
        assert_eq!(UKR.lookup('’'), Some(""));
    }
}
