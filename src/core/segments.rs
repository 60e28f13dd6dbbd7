use crate::core::types::Segment;

/// Collects converted spans, merging neighbours that share a font flag.
#[derive(Debug, Default)]
pub struct SegmentAssembler {
    segments: Vec<Segment>,
}

impl SegmentAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty text is dropped; otherwise merged into the last segment when the
    /// flag matches.
    pub fn push(&mut self, text: &str, needs_legacy_font: bool) {
        if text.is_empty() {
            return;
        }
        match self.segments.last_mut() {
            Some(last) if last.needs_legacy_font == needs_legacy_font => last.text.push_str(text),
            _ => self.segments.push(Segment::new(text, needs_legacy_font)),
        }
    }

    pub fn finish(self) -> Vec<Segment> {
        self.segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_same_flag_neighbours() {
        let mut asm = SegmentAssembler::new();
        asm.push("Hello", false);
        asm.push(" ", false);
        asm.push("fga", true);
        asm.push("nh", true);
        asm.push(" World", false);
        assert_eq!(
            asm.finish(),
            vec![
                Segment::new("Hello ", false),
                Segment::new("fganh", true),
                Segment::new(" World", false),
            ]
        );
    }

    #[test]
    fn empty_text_is_never_a_segment() {
        let mut asm = SegmentAssembler::new();
        asm.push("", true);
        asm.push("a", false);
        asm.push("", true);
        asm.push("b", false);
        assert_eq!(asm.finish(), vec![Segment::new("ab", false)]);
    }
}
