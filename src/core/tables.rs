//! Static Devanagari -> Kruti Dev 010 glyph tables.
//!
//! The raw tables are plain slices; `GlyphTables::new` indexes them once into
//! hash maps and a conjunct trie. Nothing here is mutated after construction.

use std::collections::HashMap;

use crate::core::trie::ConjunctTrie;

pub const VIRAMA: char = '\u{094D}';
pub const NUKTA: char = '\u{093C}';
pub const RA: char = 'र';
/// The dependent vowel sign drawn to the left of its consonant.
pub const PRE_BASE_SIGN: char = 'ि';
/// The dependent vowel sign that fuses with a few consonants.
pub const LIGATING_SIGN: char = 'ृ';

pub const KILLER_GLYPH: &str = "~";
pub const NUKTA_GLYPH: &str = "+";
pub const REPH_GLYPH: &str = "Z";
pub const SUBJOINED_R_GLYPH: &str = "z";

pub const DANDA: char = '।';
pub const DOUBLE_DANDA: char = '॥';

pub const SCRIPT_BLOCK: std::ops::RangeInclusive<char> = '\u{0900}'..='\u{097F}';
pub const SCRIPT_DIGITS: std::ops::RangeInclusive<char> = '\u{0966}'..='\u{096F}';

pub(crate) const INDEPENDENT_VOWELS: &[(char, &str)] = &[
    ('अ', "v"),
    ('आ', "vk"),
    ('इ', "b"),
    ('ई', "bZ"),
    ('उ', "m"),
    ('ऊ', "Å"),
    ('ऋ', "_"),
    // ए is a bare comma, ऐ adds the e-sign
    ('ए', ","),
    ('ऐ', ",s"),
    ('ओ', "vks"),
    ('औ', "vkS"),
    ('ऑ', "v\u{201A}"),
];

pub(crate) const CONSONANTS: &[(char, &str)] = &[
    // velar
    ('क', "d"),
    ('ख', "[k"),
    ('ग', "x"),
    ('घ', "?k"),
    ('ङ', "³"),
    // palatal
    ('च', "p"),
    ('छ', "N"),
    ('ज', "t"),
    ('झ', ">"),
    ('ञ', "¥"),
    // retroflex
    ('ट', "V"),
    ('ठ', "B"),
    ('ड', "M"),
    ('ढ', "<"),
    ('ण', ".k"),
    // dental
    ('त', "r"),
    ('थ', "Fk"),
    ('द', "n"),
    ('ध', "/k"),
    ('न', "u"),
    // labial
    ('प', "i"),
    ('फ', "Q"),
    ('ब', "c"),
    ('भ', "Hk"),
    ('म', "e"),
    // semivowels
    ('य', ";"),
    ('र', "j"),
    ('ल', "y"),
    ('व', "o"),
    // sibilants
    ('श', "'k"),
    ('ष', "\"k"),
    ('स', "l"),
    ('ह', "g"),
    ('ळ', "G"),
];

/// Consonants with a dedicated half glyph. The rest render as base + killer.
pub(crate) const HALF_FORMS: &[(char, &str)] = &[
    ('क', "D"),
    ('ख', "["),
    ('ग', "X"),
    ('घ', "?"),
    ('च', "P"),
    ('ज', "T"),
    ('झ', "÷"),
    ('ण', "."),
    ('त', "R"),
    ('थ', "F"),
    ('ध', "/"),
    ('न', "U"),
    ('प', "I"),
    ('फ', "¶"),
    ('ब', "C"),
    ('भ', "H"),
    ('म', "E"),
    ('य', "¸"),
    ('ल', "Y"),
    ('व', "O"),
    ('श', "'"),
    ('ष', "\""),
    ('स', "L"),
    ('ह', "º"),
];

pub(crate) const VOWEL_SIGNS: &[(char, &str)] = &[
    ('ा', "k"),
    ('ि', "f"),
    ('ी', "h"),
    ('ु', "q"),
    ('ू', "w"),
    ('ृ', "`"),
    ('े', "s"),
    ('ै', "S"),
    ('ो', "ks"),
    ('ौ', "kS"),
    ('ॉ', "\u{201A}"),
    ('ॅ', "W"),
];

pub(crate) const MODIFIERS: &[(char, &str)] = &[('ं', "a"), ('ँ', "¡"), ('ः', "%")];

/// Precomposed nukta consonant, its base consonant, and its glyph.
pub(crate) const NUKTA_CONSONANTS: &[(char, char, &str)] = &[
    ('\u{0958}', 'क', "d+"),
    ('\u{0959}', 'ख', "[k+"),
    ('\u{095A}', 'ग', "x+"),
    ('\u{095B}', 'ज', "t+"),
    ('\u{095C}', 'ड', "M+"),
    ('\u{095D}', 'ढ', "<+"),
    ('\u{095E}', 'फ', "Q+"),
    ('\u{095F}', 'य', ";+"),
];

/// Single glyphs for consonant + ृ.
pub(crate) const LIGATING_SIGN_GLYPHS: &[(char, &str)] =
    &[('क', "\u{2014}"), ('द', "\u{2013}"), ('ह', "\u{00E2}")];

pub(crate) const CONJUNCTS: &[(&str, &str)] = &[
    ("क्ष", "{k"),
    ("क्ष्", "{"),
    ("त्र", "="),
    ("त्र्", "«"),
    ("ज्ञ", "K"),
    ("श्र", "J"),
    ("क्क", "ô"),
    ("क्त", "Dr"),
    ("त्त", "Ùk"),
    ("त्त्", "Ù"),
    ("द्द", "í"),
    ("द्ध", ")"),
    ("द्व", "}"),
    ("द्य", "|"),
    ("ट्ट", "ê"),
    ("ट्ठ", "ë"),
    ("ड्ड", "ì"),
    ("ड्ढ", "ï"),
    ("न्न", "é"),
    ("ह्न", "à"),
    ("ह्य", "á"),
    ("ह्म", "ã"),
    ("ह्र", "ºz"),
    ("ह्ल", "ày"),
    // consonant + subjoined ra
    ("क्र", "Ø"),
    ("ग्र", "xz"),
    ("प्र", "ç"),
    ("फ्र", "Ý"),
    ("द्र", "æ"),
    ("ट्र", "Vª"),
    ("ड्र", "Mª"),
    ("ढ्र", "<ª"),
    ("छ्र", "Nª"),
    ("थ्र", "Fkz"),
    ("भ्र", "Hkz"),
    ("स्र", "lz"),
];

pub(crate) const NUMERALS: &[(char, &str)] = &[
    ('०', "0"),
    ('१', "1"),
    ('२', "2"),
    ('३', "3"),
    ('४', "4"),
    ('५', "5"),
    ('६', "6"),
    ('७', "7"),
    ('८', "8"),
    ('९', "9"),
];

pub(crate) const SCRIPT_PUNCTUATION: &[(char, &str)] =
    &[(DANDA, "A"), (DOUBLE_DANDA, "AA"), ('॰', "Œ")];

/// ASCII punctuation remapped when it sits next to script text.
pub(crate) const CONTEXT_PUNCTUATION: &[(char, &str)] = &[
    ('(', "¼"),
    (')', "½"),
    (',', "]"),
    ('.', "-"),
    ('?', "\\"),
    (':', "%"),
    (';', "^"),
    ('-', "&"),
];

/// Indexed, immutable view of every table. Built once per converter.
#[derive(Debug)]
pub struct GlyphTables {
    pub(crate) vowels: HashMap<char, &'static str>,
    pub(crate) consonants: HashMap<char, &'static str>,
    pub(crate) half_forms: HashMap<char, &'static str>,
    pub(crate) vowel_signs: HashMap<char, &'static str>,
    pub(crate) modifiers: HashMap<char, &'static str>,
    /// precomposed -> (base, glyph)
    pub(crate) nukta_consonants: HashMap<char, (char, &'static str)>,
    pub(crate) ligating_sign: HashMap<char, &'static str>,
    pub(crate) numerals: HashMap<char, &'static str>,
    pub(crate) script_punctuation: HashMap<char, &'static str>,
    pub(crate) context_punctuation: HashMap<char, &'static str>,
    pub(crate) conjuncts: ConjunctTrie,
}

fn index(pairs: &[(char, &'static str)]) -> HashMap<char, &'static str> {
    pairs.iter().copied().collect()
}

impl GlyphTables {
    pub fn new() -> Self {
        let mut conjuncts = ConjunctTrie::new();
        for &(key, glyph) in CONJUNCTS {
            conjuncts.insert(key, glyph);
        }
        Self {
            vowels: index(INDEPENDENT_VOWELS),
            consonants: index(CONSONANTS),
            half_forms: index(HALF_FORMS),
            vowel_signs: index(VOWEL_SIGNS),
            modifiers: index(MODIFIERS),
            nukta_consonants: NUKTA_CONSONANTS
                .iter()
                .map(|&(composed, base, glyph)| (composed, (base, glyph)))
                .collect(),
            ligating_sign: index(LIGATING_SIGN_GLYPHS),
            numerals: index(NUMERALS),
            script_punctuation: index(SCRIPT_PUNCTUATION),
            context_punctuation: index(CONTEXT_PUNCTUATION),
            conjuncts,
        }
    }

    /// Plain or precomposed-nukta consonant.
    pub fn is_consonant(&self, c: char) -> bool {
        self.consonants.contains_key(&c) || self.nukta_consonants.contains_key(&c)
    }

    pub fn is_independent_vowel(&self, c: char) -> bool {
        self.vowels.contains_key(&c)
    }

    pub fn is_vowel_sign(&self, c: char) -> bool {
        self.vowel_signs.contains_key(&c)
    }

    pub fn is_modifier(&self, c: char) -> bool {
        self.modifiers.contains_key(&c)
    }
}

impl Default for GlyphTables {
    fn default() -> Self {
        Self::new()
    }
}

/// Precomposed form of `base` + nukta, for the eight tabulated consonants.
pub fn compose_nukta(base: char) -> Option<char> {
    NUKTA_CONSONANTS
        .iter()
        .find(|&&(_, b, _)| b == base)
        .map(|&(composed, _, _)| composed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_have_no_duplicate_keys() {
        let t = GlyphTables::new();
        assert_eq!(t.consonants.len(), CONSONANTS.len());
        assert_eq!(t.vowels.len(), INDEPENDENT_VOWELS.len());
        assert_eq!(t.half_forms.len(), HALF_FORMS.len());
        assert_eq!(t.conjuncts.len(), CONJUNCTS.len());
    }

    #[test]
    fn every_half_form_has_a_full_consonant() {
        for (c, _) in HALF_FORMS {
            assert!(CONSONANTS.iter().any(|(k, _)| k == c), "orphan half form {c}");
        }
    }

    #[test]
    fn compose_covers_the_eight_nukta_pairs() {
        assert_eq!(compose_nukta('ड'), Some('\u{095C}'));
        assert_eq!(compose_nukta('य'), Some('\u{095F}'));
        assert_eq!(compose_nukta('म'), None);
        let t = GlyphTables::new();
        assert!(t.is_consonant('\u{0958}'));
        assert!(!t.is_consonant('ा'));
    }
}
