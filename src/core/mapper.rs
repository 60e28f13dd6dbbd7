use crate::core::tables::{GlyphTables, KILLER_GLYPH, NUKTA, NUKTA_GLYPH, VIRAMA};
use crate::core::types::ConsonantUnit;

/// Table lookups from script characters to glyph codes.
/// Every lookup is total: a miss yields the input character unchanged.
pub struct Mapper<'t> {
    tables: &'t GlyphTables,
}

impl<'t> Mapper<'t> {
    pub fn new(tables: &'t GlyphTables) -> Self {
        Self { tables }
    }

    /// Full glyph for a consonant, precomposed nukta consonant or independent vowel.
    fn base_glyph(&self, c: char) -> Option<&'static str> {
        self.tables
            .consonants
            .get(&c)
            .or_else(|| self.tables.nukta_consonants.get(&c).map(|(_, glyph)| glyph))
            .or_else(|| self.tables.vowels.get(&c))
            .copied()
    }

    /// Half glyph, looking through a precomposed nukta consonant to its base.
    fn half_glyph(&self, c: char) -> Option<&'static str> {
        let base = self.tables.nukta_consonants.get(&c).map_or(c, |&(base, _)| base);
        self.tables.half_forms.get(&base).copied()
    }

    /// Renders one consonant unit.
    pub fn map_unit(&self, unit: &ConsonantUnit, out: &mut String) {
        let precomposed_nukta = self.tables.nukta_consonants.contains_key(&unit.base);
        let has_nukta = unit.nukta || precomposed_nukta;

        if unit.killed {
            match self.half_glyph(unit.base) {
                Some(half) => {
                    out.push_str(half);
                    if has_nukta {
                        out.push_str(NUKTA_GLYPH);
                    }
                }
                None => {
                    self.map_full(unit, out);
                    out.push_str(KILLER_GLYPH);
                }
            }
            return;
        }

        self.map_full(unit, out);
    }

    fn map_full(&self, unit: &ConsonantUnit, out: &mut String) {
        match self.base_glyph(unit.base) {
            Some(glyph) => out.push_str(glyph),
            None => self.map_sign(unit.base, out),
        }
        if unit.nukta {
            out.push_str(NUKTA_GLYPH);
        }
    }

    pub fn map_vowel_sign(&self, c: char, out: &mut String) {
        push_or(self.tables.vowel_signs.get(&c).copied(), c, out);
    }

    pub fn map_modifier(&self, c: char, out: &mut String) {
        push_or(self.tables.modifiers.get(&c).copied(), c, out);
    }

    pub fn map_numeral(&self, c: char, out: &mut String) {
        push_or(self.tables.numerals.get(&c).copied(), c, out);
    }

    pub fn map_script_punctuation(&self, c: char, out: &mut String) {
        push_or(self.tables.script_punctuation.get(&c).copied(), c, out);
    }

    pub fn map_context_punctuation(&self, c: char, out: &mut String) {
        push_or(self.tables.context_punctuation.get(&c).copied(), c, out);
    }

    /// Any stray mark or sign: killer, nukta, modifiers, vowel signs,
    /// script punctuation. Unknown characters pass through.
    pub fn map_sign(&self, c: char, out: &mut String) {
        let glyph = match c {
            VIRAMA => Some(KILLER_GLYPH),
            NUKTA => Some(NUKTA_GLYPH),
            _ => self
                .tables
                .modifiers
                .get(&c)
                .or_else(|| self.tables.vowel_signs.get(&c))
                .or_else(|| self.tables.script_punctuation.get(&c))
                .or_else(|| self.tables.numerals.get(&c))
                .copied(),
        };
        push_or(glyph, c, out);
    }
}

fn push_or(glyph: Option<&'static str>, c: char, out: &mut String) {
    match glyph {
        Some(glyph) => out.push_str(glyph),
        None => out.push(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(s: &str) -> String {
        let tables = GlyphTables::new();
        let chars: Vec<char> = s.chars().collect();
        let unit = ConsonantUnit {
            base: chars[0],
            nukta: chars.contains(&NUKTA),
            killed: chars.contains(&VIRAMA),
        };
        let mut out = String::new();
        Mapper::new(&tables).map_unit(&unit, &mut out);
        out
    }

    #[test]
    fn base_consonants_and_vowels() {
        assert_eq!(unit("क"), "d");
        assert_eq!(unit("भ"), "Hk");
        assert_eq!(unit("ए"), ",");
    }

    #[test]
    fn half_forms_or_killer() {
        assert_eq!(unit("क्"), "D");
        assert_eq!(unit("स्"), "L");
        assert_eq!(unit("ट्"), "V~");
        assert_eq!(unit("द्"), "n~");
    }

    #[test]
    fn nukta_forms() {
        assert_eq!(unit("\u{095C}"), "M+");
        assert_eq!(unit("\u{095B}"), "t+");
        assert_eq!(unit("ल\u{093C}"), "y+");
        assert_eq!(unit("\u{095B}्"), "T+");
        assert_eq!(unit("\u{095C}्"), "M+~");
    }

    #[test]
    fn misses_pass_through() {
        assert_eq!(unit("ॐ"), "ॐ");
        let tables = GlyphTables::new();
        let mapper = Mapper::new(&tables);
        let mut out = String::new();
        mapper.map_vowel_sign('x', &mut out);
        mapper.map_sign('्', &mut out);
        mapper.map_sign('॰', &mut out);
        mapper.map_numeral('७', &mut out);
        assert_eq!(out, "x~Œ7");
    }
}
