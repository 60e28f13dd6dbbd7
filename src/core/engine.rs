use crate::core::classifier::tokenize;
use crate::core::mapper::Mapper;
use crate::core::normalizer::normalize;
use crate::core::renderer::Renderer;
use crate::core::segments::SegmentAssembler;
use crate::core::syllable::SyllableParser;
use crate::core::tables::{GlyphTables, SCRIPT_DIGITS};
use crate::core::types::{CharClass, Segment, Token};
use crate::error::ConvertError;
use tracing::{debug, debug_span, warn};

/// Unicode Devanagari -> Kruti Dev 010 converter.
///
/// Owns the glyph tables; holds no per-call state, so one instance can be
/// shared across threads.
pub struct LegacyConverter {
    tables: GlyphTables,
}

impl LegacyConverter {
    pub fn new() -> Self {
        Self { tables: GlyphTables::new() }
    }

    /// Converts `text` and returns the concatenated output.
    pub fn convert(&self, text: &str) -> String {
        self.convert_with_segments(text)
            .into_iter()
            .map(|segment| segment.text)
            .collect()
    }

    /// Converts `text` into maximal segments tagged with whether they must be
    /// displayed in the legacy font.
    pub fn convert_with_segments(&self, text: &str) -> Vec<Segment> {
        if text.is_empty() {
            return Vec::new();
        }
        let _span = debug_span!("convert", input_len = text.len()).entered();

        let normalized = normalize(text);
        let tokens = tokenize(&normalized);
        let mut assembler = SegmentAssembler::new();

        for (index, token) in tokens.iter().enumerate() {
            match self.dispatch(&tokens, index) {
                Ok((converted, needs_legacy_font)) => {
                    assembler.push(&converted, needs_legacy_font)
                }
                Err(e) => {
                    warn!(token = %token.text, error = %e, "skipping token");
                    assembler.push(&token.text, false);
                }
            }
        }

        let segments = assembler.finish();
        debug!(tokens = tokens.len(), segments = segments.len());
        segments
    }

    fn dispatch(&self, tokens: &[Token], index: usize) -> Result<(String, bool), ConvertError> {
        let token = &tokens[index];
        let mapper = Mapper::new(&self.tables);
        let mut out = String::with_capacity(token.text.len());

        match token.class {
            CharClass::ScriptLetter => {
                self.convert_word(&token.text, &mut out)?;
                Ok((out, true))
            }
            CharClass::ScriptPunctuation => {
                token.text.chars().for_each(|c| mapper.map_script_punctuation(c, &mut out));
                Ok((out, true))
            }
            CharClass::ScriptDigit => {
                token.text.chars().for_each(|c| mapper.map_numeral(c, &mut out));
                Ok((out, has_native_digits(&token.text)))
            }
            class if class.is_context_sensitive() => {
                if in_script_context(tokens, index) {
                    token.text.chars().for_each(|c| mapper.map_context_punctuation(c, &mut out));
                    Ok((out, true))
                } else {
                    Ok((token.text.clone(), false))
                }
            }
            _ => Ok((token.text.clone(), false)),
        }
    }

    fn convert_word(&self, word: &str, out: &mut String) -> Result<(), ConvertError> {
        let syllables = SyllableParser::new(&self.tables).parse_word(word);
        if syllables.is_empty() {
            return Err(ConvertError::NoSyllables { token: word.to_string() });
        }

        let rebuilt: String = syllables.iter().map(|s| s.source_span.as_str()).collect();
        if rebuilt != word {
            return Err(ConvertError::LossyParse { token: word.to_string(), rebuilt });
        }

        let renderer = Renderer::new(&self.tables);
        for syllable in &syllables {
            renderer.render_into(syllable, out);
        }
        Ok(())
    }
}

impl Default for LegacyConverter {
    fn default() -> Self {
        Self::new()
    }
}

fn has_native_digits(text: &str) -> bool {
    text.chars().any(|c| SCRIPT_DIGITS.contains(&c))
}

/// Token that renders through the legacy font on its own.
fn uses_legacy_font(token: &Token) -> bool {
    match token.class {
        CharClass::ScriptLetter | CharClass::ScriptPunctuation => true,
        CharClass::ScriptDigit => has_native_digits(&token.text),
        _ => false,
    }
}

/// Nearest non-whitespace token on either side is script text.
fn in_script_context(tokens: &[Token], index: usize) -> bool {
    let prev = tokens[..index]
        .iter()
        .rev()
        .find(|t| t.class != CharClass::Whitespace);
    let next = tokens[index + 1..]
        .iter()
        .find(|t| t.class != CharClass::Whitespace);
    prev.is_some_and(uses_legacy_font) || next.is_some_and(uses_legacy_font)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn segments(text: &str) -> Vec<(String, bool)> {
        LegacyConverter::new()
            .convert_with_segments(text)
            .into_iter()
            .map(|s| (s.text, s.needs_legacy_font))
            .collect()
    }

    #[test]
    fn literal_scenarios() {
        let conv = LegacyConverter::new();
        assert_eq!(conv.convert("क"), "d");
        assert_eq!(conv.convert("कि"), "fd");
        assert_eq!(conv.convert("धर्म"), "/keZ");
        assert_eq!(conv.convert("राष्ट्र"), "jk\"Vª");
        assert_eq!(conv.convert(""), "");
        assert!(conv.convert_with_segments("").is_empty());
    }

    #[test]
    fn mixed_language_segments() {
        assert_eq!(
            segments("Hello हिंदी World"),
            vec![
                ("Hello ".to_string(), false),
                ("fganh".to_string(), true),
                (" World".to_string(), false),
            ]
        );
    }

    #[test]
    fn sentence_punctuation_is_flagged() {
        let conv = LegacyConverter::new();
        assert_eq!(conv.convert("राम।"), "jkeA");
        assert_eq!(
            segments("राम ॥"),
            vec![
                ("jke".to_string(), true),
                (" ".to_string(), false),
                ("AA".to_string(), true),
            ]
        );
    }

    #[test]
    fn punctuation_follows_context() {
        // next to script text: remapped and flagged
        assert_eq!(segments("(भारत)"), vec![("¼Hkkjr½".to_string(), true)]);
        assert_eq!(
            segments("राम, श्याम"),
            vec![
                ("jke]".to_string(), true),
                (" ".to_string(), false),
                ("';ke".to_string(), true),
            ]
        );
        // inside Latin text: untouched
        assert_eq!(segments("(hello), world."), vec![("(hello), world.".to_string(), false)]);
    }

    #[test]
    fn context_skips_whitespace_runs() {
        assert_eq!(
            segments("abc  ?  राम"),
            vec![
                ("abc  ".to_string(), false),
                ("\\".to_string(), true),
                ("  ".to_string(), false),
                ("jke".to_string(), true),
            ]
        );
    }

    #[test]
    fn native_digits_flagged_ascii_digits_not() {
        assert_eq!(segments("१९४७"), vec![("1947".to_string(), true)]);
        assert_eq!(segments("1947"), vec![("1947".to_string(), false)]);
    }

    #[test]
    fn normalization_runs_first() {
        let conv = LegacyConverter::new();
        assert_eq!(conv.convert("ड\u{093C}"), "M+");
        assert_eq!(conv.convert("क\u{200D}्\u{200C}ष"), "{k");
        assert_eq!(conv.convert("a\u{2014}b"), "a-b");
    }

    #[test]
    fn reference_words() {
        let conv = LegacyConverter::new();
        let cases = [
            ("भारत", "Hkkjr"),
            ("हिंदी", "fganh"),
            ("नमस्ते", "ueLrs"),
            ("कैसे", "dSls"),
            ("मैं", "eSa"),
            ("आप", "vki"),
            ("सरकार", "ljdkj"),
            ("स्कूल", "Ldwy"),
            ("शिक्षा", "f'k{kk"),
            ("प्रेम", "çse"),
            ("इस", "bl"),
            ("उस", "ml"),
            ("अब", "vc"),
            ("राम", "jke"),
            ("का", "dk"),
            ("की", "dh"),
        ];
        for (input, expected) in cases {
            assert_eq!(conv.convert(input), expected, "converting {input}");
        }
    }

    #[test]
    fn unknown_script_characters_pass_through() {
        let conv = LegacyConverter::new();
        assert_eq!(conv.convert("ॐ"), "ॐ");
        assert_eq!(conv.convert("्"), "~");
    }

    fn script_text() -> impl Strategy<Value = String> {
        let pieces = prop::sample::select(vec![
            "क", "ि", "र", "्", "ष", "ट", "ा", "ं", "ृ", "ड\u{093C}", "ए", " ", "a", ".", "(",
            "१", "7", "।", "\u{200D}", "\u{2014}", "\u{093C}", "ॐ",
        ]);
        prop::collection::vec(pieces, 0..24).prop_map(|v| v.concat())
    }

    proptest! {
        #[test]
        fn segments_reconstruct_convert(text in script_text()) {
            let conv = LegacyConverter::new();
            let joined: String = conv
                .convert_with_segments(&text)
                .into_iter()
                .map(|s| s.text)
                .collect();
            prop_assert_eq!(joined, conv.convert(&text));
        }

        #[test]
        fn segments_are_minimal(text in script_text()) {
            let segs = LegacyConverter::new().convert_with_segments(&text);
            for pair in segs.windows(2) {
                prop_assert_ne!(pair[0].needs_legacy_font, pair[1].needs_legacy_font);
            }
            prop_assert!(segs.iter().all(|s| !s.text.is_empty()));
        }

        #[test]
        fn unflagged_segments_are_input_slices(text in script_text()) {
            let conv = LegacyConverter::new();
            let normalized = normalize(&text);
            let tokens = tokenize(&normalized);

            // consecutive unflagged tokens, taken from the source text
            let mut expected: Vec<String> = Vec::new();
            let mut run = String::new();
            for (i, token) in tokens.iter().enumerate() {
                let flagged = conv.dispatch(&tokens, i).is_ok_and(|(_, f)| f);
                if flagged {
                    if !run.is_empty() {
                        expected.push(std::mem::take(&mut run));
                    }
                } else {
                    run.push_str(&token.text);
                }
            }
            if !run.is_empty() {
                expected.push(run);
            }

            let unflagged: Vec<String> = conv
                .convert_with_segments(&text)
                .into_iter()
                .filter(|s| !s.needs_legacy_font)
                .map(|s| s.text)
                .collect();
            prop_assert_eq!(unflagged, expected);
        }

        #[test]
        fn tokens_are_lossless(text in script_text()) {
            let normalized = normalize(&text);
            let joined: String = tokenize(&normalized).into_iter().map(|t| t.text).collect();
            prop_assert_eq!(joined, normalized);
        }

        #[test]
        fn pre_base_sign_renders_first(c in prop::sample::select(
            crate::core::tables::CONSONANTS.iter().map(|&(c, _)| c).collect::<Vec<_>>()
        )) {
            let out = LegacyConverter::new().convert(&format!("{c}ि"));
            prop_assert!(out.starts_with('f'));
        }
    }
}
