use crate::core::tables::{GlyphTables, NUKTA, RA, VIRAMA};
use crate::core::types::{ConsonantUnit, Syllable};

/// Splits a script word into syllables.
///
/// Total and lossless: the `source_span`s of the returned syllables
/// concatenate back to `word`, and every iteration advances the cursor.
pub struct SyllableParser<'t> {
    tables: &'t GlyphTables,
}

impl<'t> SyllableParser<'t> {
    pub fn new(tables: &'t GlyphTables) -> Self {
        Self { tables }
    }

    pub fn parse_word(&self, word: &str) -> Vec<Syllable> {
        let chars: Vec<char> = word.chars().collect();
        let mut syllables = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let start = i;
            let mut syllable = Syllable::default();

            // र् at the head of a cluster is drawn as a reph after the syllable.
            if self.is_reph_at(&chars, i) {
                syllable.has_reph = true;
                i += 2;
            }

            i = self.collect_cluster(&chars, i, &mut syllable);

            if syllable.consonants.is_empty() {
                if let Some(&c) = chars.get(i) {
                    if self.tables.is_independent_vowel(c) {
                        syllable.consonants.push(ConsonantUnit::new(c));
                        i += 1;
                    }
                }
            }

            if let Some(&c) = chars.get(i) {
                if self.tables.is_vowel_sign(c) {
                    syllable.vowel_sign = Some(c);
                    i += 1;
                }
            }

            while let Some(&c) = chars.get(i) {
                if !self.tables.is_modifier(c) {
                    break;
                }
                syllable.trailing_marks.push(c);
                i += 1;
            }

            if i == start {
                syllables.push(Syllable::fallback(chars[i]));
                i += 1;
                continue;
            }

            syllable.source_span = chars[start..i].iter().collect();
            syllables.push(syllable);
        }

        syllables
    }

    /// र + virama + consonant.
    fn is_reph_at(&self, chars: &[char], i: usize) -> bool {
        chars.get(i) == Some(&RA)
            && chars.get(i + 1) == Some(&VIRAMA)
            && chars.get(i + 2).is_some_and(|&c| self.tables.is_consonant(c))
    }

    /// Consumes consonant units starting at `i`; returns the new cursor.
    fn collect_cluster(&self, chars: &[char], mut i: usize, syllable: &mut Syllable) -> usize {
        while let Some(&c) = chars.get(i) {
            if !self.tables.is_consonant(c) {
                break;
            }
            let mut unit = ConsonantUnit::new(c);
            i += 1;

            if chars.get(i) == Some(&NUKTA) {
                unit.nukta = true;
                i += 1;
            }

            if chars.get(i) == Some(&VIRAMA) {
                let next = chars.get(i + 1).copied();
                let after_next = chars.get(i + 2).copied();
                let next_is_consonant = next.is_some_and(|n| self.tables.is_consonant(n));

                let ra_continues =
                    after_next.is_some_and(|a| a == VIRAMA || self.tables.is_consonant(a));
                if next == Some(RA) && !ra_continues {
                    // cluster-final ra: subjoined mark
                    syllable.consonants.push(unit);
                    syllable.has_subjoined_r = true;
                    return i + 2;
                }

                unit.killed = true;
                syllable.consonants.push(unit);
                i += 1;
                if next_is_consonant {
                    continue;
                }
                return i;
            }

            syllable.consonants.push(unit);

            // consonant + र् + consonant mid-word: reph joins this syllable
            if self.is_reph_at(chars, i) {
                syllable.has_reph = true;
                i += 2;
                continue;
            }
            return i;
        }
        i
    }
}
