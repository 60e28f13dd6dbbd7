//! Built-in reference samples with their known-good legacy renderings.

use serde::Serialize;

use crate::core::engine::LegacyConverter;

pub const REFERENCE_SAMPLES: &[(&str, &str)] = &[
    ("क", "d"),
    ("कि", "fd"),
    ("धर्म", "/keZ"),
    ("राष्ट्र", "jk\"Vª"),
    ("भारत", "Hkkjr"),
    ("हिंदी", "fganh"),
    ("नमस्ते", "ueLrs"),
    ("एक", ",d"),
    ("परीक्षण", "ijh{k.k"),
    ("वाक्य", "okD;"),
    ("प्रदेश", "çns'k"),
    ("विद्यार्थी", "fo|kFkhZ"),
    ("कृष्ण", "\u{2014}\".k"),
    ("निर्माण", "fuekZ.k"),
    ("क्या", "D;k"),
    ("ड़", "M+"),
    ("शिक्षा", "f'k{kk"),
    ("प्रेम", "çse"),
    ("स्कूल", "Ldwy"),
    ("राम।", "jkeA"),
    ("१९४७", "1947"),
];

#[derive(Debug, Clone, Serialize)]
pub struct SampleOutcome {
    pub input: &'static str,
    pub expected: &'static str,
    pub actual: String,
}

impl SampleOutcome {
    pub fn passed(&self) -> bool {
        self.actual == self.expected
    }
}

pub fn run_reference_corpus(converter: &LegacyConverter) -> Vec<SampleOutcome> {
    REFERENCE_SAMPLES
        .iter()
        .map(|&(input, expected)| SampleOutcome {
            input,
            expected,
            actual: converter.convert(input),
        })
        .collect()
}
