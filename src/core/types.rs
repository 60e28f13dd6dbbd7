// src/core/types.rs
use serde::{Deserialize, Serialize};

/// Lexical class of a single code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharClass {
    ScriptLetter,
    ScriptDigit,
    /// Danda and double danda.
    ScriptPunctuation,
    LatinLetter,
    Digit,
    Whitespace,
    /// `. , ; : ? ! ' "`
    Punctuation,
    /// `( ) -`
    Bracket,
    Other,
}

impl CharClass {
    /// ASCII punctuation whose rendering depends on the neighbouring tokens.
    pub fn is_context_sensitive(self) -> bool {
        matches!(self, CharClass::Punctuation | CharClass::Bracket)
    }
}

/// A maximal run of code points sharing one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub class: CharClass,
}

impl Token {
    pub fn new(text: impl Into<String>, class: CharClass) -> Self {
        Self { text: text.into(), class }
    }
}

/// A base consonant (or independent vowel) with the marks consumed after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsonantUnit {
    pub base: char,
    /// A separate combining nukta followed the base.
    pub nukta: bool,
    /// A virama followed the base (and its nukta, if any).
    pub killed: bool,
}

impl ConsonantUnit {
    pub fn new(base: char) -> Self {
        Self { base, nukta: false, killed: false }
    }

    /// Pushes the unit's characters exactly as they appeared in the input.
    pub fn push_source(&self, out: &mut String) {
        out.push(self.base);
        if self.nukta {
            out.push(crate::core::tables::NUKTA);
        }
        if self.killed {
            out.push(crate::core::tables::VIRAMA);
        }
    }
}

/// One parsed syllable of a script word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Syllable {
    pub consonants: Vec<ConsonantUnit>,
    pub vowel_sign: Option<char>,
    pub trailing_marks: Vec<char>,
    pub has_reph: bool,
    pub has_subjoined_r: bool,
    /// The exact slice of the word this syllable consumed.
    pub source_span: String,
}

impl Syllable {
    /// Single-character syllable for code points outside every known set.
    pub fn fallback(c: char) -> Self {
        Self {
            consonants: vec![ConsonantUnit::new(c)],
            source_span: c.to_string(),
            ..Self::default()
        }
    }

    /// The consonant cluster as it appeared in the input, without the reph
    /// and subjoined-R pairs.
    pub fn cluster_text(&self) -> String {
        let mut out = String::new();
        for unit in &self.consonants {
            unit.push_source(&mut out);
        }
        out
    }
}

/// A span of converted output and whether it must be shown in the legacy font.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub needs_legacy_font: bool,
}

impl Segment {
    pub fn new(text: impl Into<String>, needs_legacy_font: bool) -> Self {
        Self { text: text.into(), needs_legacy_font }
    }
}
