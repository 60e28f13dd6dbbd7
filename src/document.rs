//! Applies conversion to formatted document runs.
//!
//! A run whose output mixes legacy and plain segments is split into one run
//! per segment, each keeping the original formatting, and only the legacy
//! pieces get the legacy font family.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::classifier::contains_script;
use crate::core::engine::LegacyConverter;

/// A formatted span of text inside some document model.
pub trait FormattedRun: Sized {
    fn text(&self) -> &str;
    fn set_text(&mut self, text: String);
    fn apply_font(&mut self, family: &str);
    /// Only plain-text runs may be split; runs with embedded objects may not.
    fn is_splittable(&self) -> bool;
    /// Same formatting, new text.
    fn clone_with_text(&self, text: &str) -> Self;
}

#[derive(Debug, PartialEq)]
pub enum RunOutcome<R> {
    Untouched(R),
    /// Text replaced in place, font applied to the whole run.
    Replaced(R),
    Split(Vec<R>),
}

impl<R> RunOutcome<R> {
    pub fn into_runs(self) -> Vec<R> {
        match self {
            RunOutcome::Untouched(run) | RunOutcome::Replaced(run) => vec![run],
            RunOutcome::Split(runs) => runs,
        }
    }
}

pub fn convert_run<R: FormattedRun>(
    converter: &LegacyConverter,
    mut run: R,
    family: &str,
) -> RunOutcome<R> {
    let text = run.text();
    if text.trim().is_empty() || !contains_script(text) {
        return RunOutcome::Untouched(run);
    }

    let segments = converter.convert_with_segments(text);
    if !segments.iter().any(|s| s.needs_legacy_font) {
        return RunOutcome::Untouched(run);
    }

    if let [only] = segments.as_slice() {
        run.set_text(only.text.clone());
        run.apply_font(family);
        return RunOutcome::Replaced(run);
    }

    if run.is_splittable() {
        let pieces = segments
            .iter()
            .map(|segment| {
                let mut piece = run.clone_with_text(&segment.text);
                if segment.needs_legacy_font {
                    piece.apply_font(family);
                }
                piece
            })
            .collect::<Vec<_>>();
        debug!(pieces = pieces.len(), "split run");
        return RunOutcome::Split(pieces);
    }

    run.set_text(segments.into_iter().map(|s| s.text).collect());
    run.apply_font(family);
    RunOutcome::Replaced(run)
}

/// Minimal concrete run: text, optional font family, embedded-object flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledRun {
    pub text: String,
    pub font: Option<String>,
    #[serde(default)]
    pub embedded: bool,
}

impl StyledRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), font: None, embedded: false }
    }
}

impl FormattedRun for StyledRun {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }

    fn apply_font(&mut self, family: &str) {
        self.font = Some(family.to_string());
    }

    fn is_splittable(&self) -> bool {
        !self.embedded
    }

    fn clone_with_text(&self, text: &str) -> Self {
        Self { text: text.to_string(), ..self.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAMILY: &str = "Kruti Dev 010";

    fn run(text: &str, font: Option<&str>) -> StyledRun {
        StyledRun { text: text.to_string(), font: font.map(str::to_string), embedded: false }
    }

    #[test]
    fn mixed_run_splits_with_selective_font() {
        let conv = LegacyConverter::new();
        let outcome = convert_run(&conv, run("Hello हिंदी World", Some("Arial")), FAMILY);
        assert_eq!(
            outcome,
            RunOutcome::Split(vec![
                run("Hello ", Some("Arial")),
                run("fganh", Some(FAMILY)),
                run(" World", Some("Arial")),
            ])
        );
    }

    #[test]
    fn pure_script_run_is_replaced() {
        let conv = LegacyConverter::new();
        let outcome = convert_run(&conv, StyledRun::plain("धर्म"), FAMILY);
        assert_eq!(outcome, RunOutcome::Replaced(run("/keZ", Some(FAMILY))));
    }

    #[test]
    fn latin_whitespace_and_empty_runs_untouched() {
        let conv = LegacyConverter::new();
        for text in ["", "   ", "Hello, world."] {
            let outcome = convert_run(&conv, StyledRun::plain(text), FAMILY);
            assert_eq!(outcome, RunOutcome::Untouched(StyledRun::plain(text)));
        }
    }

    #[test]
    fn unsplittable_run_falls_back_to_wholesale_font() {
        let conv = LegacyConverter::new();
        let mut input = StyledRun::plain("Hi राम");
        input.embedded = true;
        let outcome = convert_run(&conv, input, FAMILY);
        let runs = outcome.into_runs();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "Hi jke");
        assert_eq!(runs[0].font.as_deref(), Some(FAMILY));
    }
}
