use crate::core::tables::{compose_nukta, NUKTA};

/// Canonicalizes input before tokenization.
///
/// Folds typographic dashes and quotes to ASCII, composes the eight
/// tabulated consonant + nukta pairs, and drops zero-width marks. Every
/// other code point passes through untouched.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\u{2013}' | '\u{2014}' | '\u{2212}' | '\u{2010}' | '\u{2011}' => out.push('-'),
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{201C}' | '\u{201D}' => out.push('"'),
            '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{FEFF}' => {}
            _ => {
                if chars.peek() == Some(&NUKTA) {
                    if let Some(composed) = compose_nukta(c) {
                        out.push(composed);
                        chars.next();
                        continue;
                    }
                }
                out.push(c);
            }
        }
    }

    out
}
