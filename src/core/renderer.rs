use crate::core::mapper::Mapper;
use crate::core::tables::{
    GlyphTables, KILLER_GLYPH, LIGATING_SIGN, NUKTA, PRE_BASE_SIGN, RA, REPH_GLYPH,
    SUBJOINED_R_GLYPH, VIRAMA,
};
use crate::core::types::{ConsonantUnit, Syllable};

/// Emits a syllable's glyphs in visual order:
/// pre-base sign, cluster or ligature, subjoined ra, post-base sign, reph,
/// trailing marks.
pub struct Renderer<'t> {
    tables: &'t GlyphTables,
    mapper: Mapper<'t>,
}

impl<'t> Renderer<'t> {
    pub fn new(tables: &'t GlyphTables) -> Self {
        Self { tables, mapper: Mapper::new(tables) }
    }

    pub fn render(&self, syllable: &Syllable) -> String {
        let mut out = String::new();
        self.render_into(syllable, &mut out);
        out
    }

    pub fn render_into(&self, syllable: &Syllable, out: &mut String) {
        let pre_base = syllable.vowel_sign == Some(PRE_BASE_SIGN);
        if pre_base {
            self.mapper.map_vowel_sign(PRE_BASE_SIGN, out);
        }

        if let Some(ligature) = self.ligating_sign_glyph(syllable) {
            out.push_str(ligature);
            if syllable.has_subjoined_r {
                out.push_str(SUBJOINED_R_GLYPH);
            }
            if syllable.has_reph {
                out.push_str(REPH_GLYPH);
            }
            self.render_marks(syllable, out);
            return;
        }

        let subjoined_absorbed = self.render_cluster(syllable, out);
        if syllable.has_subjoined_r && !subjoined_absorbed {
            out.push_str(SUBJOINED_R_GLYPH);
        }

        if let Some(sign) = syllable.vowel_sign {
            if !pre_base {
                self.mapper.map_vowel_sign(sign, out);
            }
        }

        if syllable.has_reph {
            out.push_str(REPH_GLYPH);
        }
        self.render_marks(syllable, out);
    }

    /// Single live consonant carrying ृ with a dedicated combined glyph.
    fn ligating_sign_glyph(&self, syllable: &Syllable) -> Option<&'static str> {
        if syllable.vowel_sign != Some(LIGATING_SIGN) {
            return None;
        }
        match syllable.consonants.as_slice() {
            [ConsonantUnit { base, nukta: false, killed: false }] => {
                self.tables.ligating_sign.get(base).copied()
            }
            _ => None,
        }
    }

    fn render_marks(&self, syllable: &Syllable, out: &mut String) {
        for &mark in &syllable.trailing_marks {
            self.mapper.map_modifier(mark, out);
        }
    }

    /// Renders the consonant cluster. Conjunct entries may extend over the
    /// subjoined ra; returns true when one did, so the caller skips the
    /// separate subjoined glyph.
    fn render_cluster(&self, syllable: &Syllable, out: &mut String) -> bool {
        let mut chars: Vec<char> = syllable.cluster_text().chars().collect();
        let cluster_len = chars.len();
        if syllable.has_subjoined_r {
            chars.push(VIRAMA);
            chars.push(RA);
        }
        let full_len = chars.len();
        let conjuncts = &self.tables.conjuncts;

        if let Some(glyph) = conjuncts.get(&chars) {
            out.push_str(glyph);
            return syllable.has_subjoined_r;
        }
        if !syllable.has_subjoined_r && chars.last() == Some(&VIRAMA) {
            if let Some(glyph) = conjuncts.get(&chars[..cluster_len - 1]) {
                out.push_str(glyph);
                out.push_str(KILLER_GLYPH);
                return false;
            }
        }

        // Maximal munch, left to right. A ligature may stop inside the
        // cluster or swallow the whole subjoined pair, never half of it.
        let mut pos = 0;
        while pos < cluster_len {
            let accept = |len: usize| pos + len <= cluster_len || pos + len == full_len;
            if let Some((len, glyph)) = conjuncts.longest_prefix_where(&chars[pos..], accept) {
                out.push_str(glyph);
                pos += len;
                continue;
            }

            let c = chars[pos];
            if c == VIRAMA || c == NUKTA {
                self.mapper.map_sign(c, out);
                pos += 1;
                continue;
            }

            let mut unit = ConsonantUnit::new(c);
            pos += 1;
            if pos < cluster_len && chars[pos] == NUKTA {
                unit.nukta = true;
                pos += 1;
            }
            if pos < cluster_len && chars[pos] == VIRAMA {
                unit.killed = true;
                pos += 1;
            }
            self.mapper.map_unit(&unit, out);
        }

        syllable.has_subjoined_r && pos == full_len
    }
}
