use serde::Serialize;

use super::{
    StepContext, get_valid_action, get_valid_feature, get_valid_outcome, get_valid_scenario,
    get_valid_state,
};

/// Classified content of one or more feature files.
///
/// Every bucket keeps the order in which its lines appeared in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GherkinReport {
    /// All non-blank lines, classified or not, exactly as they were read.
    pub files: Vec<String>,
    pub features: Vec<String>,
    pub scenarios: Vec<String>,
    pub states: Vec<String>,
    pub actions: Vec<String>,
    pub outcomes: Vec<String>,
}

impl GherkinReport {
    /// Appends every bucket of `other` after the matching bucket of `self`.
    pub fn extend(&mut self, other: GherkinReport) {
        self.files.extend(other.files);
        self.features.extend(other.features);
        self.scenarios.extend(other.scenarios);
        self.states.extend(other.states);
        self.actions.extend(other.actions);
        self.outcomes.extend(other.outcomes);
    }

    /// Number of lines that landed in one of the five keyword buckets.
    pub fn classified_count(&self) -> usize {
        self.features.len()
            + self.scenarios.len()
            + self.states.len()
            + self.actions.len()
            + self.outcomes.len()
    }
}

/// Classifies `lines` into a fresh [`GherkinReport`].
///
/// Lines are matched with leading whitespace trimmed, so indented steps are
/// recognized; the extracted text is everything after the keyword. Blank lines are dropped entirely; any other line is kept
/// in `files` even when no keyword matches it. The continuation context
/// starts at [`StepContext::None`] on every call.
///
/// # Examples
///
/// ```
/// use gherkin_report::analyzer::get_gherkins;
///
/// let report = get_gherkins(["Given a cart", "And an item", "When I pay", "But fail"]);
/// assert_eq!(report.states, vec!["a cart", "an item"]);
/// assert_eq!(report.actions, vec!["I pay", "fail"]);
/// assert_eq!(report.files.len(), 4);
/// ```
pub fn get_gherkins<I, S>(lines: I) -> GherkinReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = GherkinReport::default();
    let mut context = StepContext::None;

    for line in lines {
        let raw = line.as_ref();
        if raw.trim().is_empty() {
            continue;
        }
        let text = raw.trim_start();

        if let Some(feature) = get_valid_feature(text) {
            report.features.push(feature.to_string());
        } else if let Some(scenario) = get_valid_scenario(text) {
            report.scenarios.push(scenario.to_string());
        } else if let Some(state) = get_valid_state(text, context) {
            report.states.push(state.to_string());
            context = StepContext::State;
        } else if let Some(action) = get_valid_action(text, context) {
            report.actions.push(action.to_string());
            context = StepContext::Action;
        } else if let Some(outcome) = get_valid_outcome(text, context) {
            report.outcomes.push(outcome.to_string());
            context = StepContext::Outcome;
        }

        report.files.push(raw.to_string());
    }

    report
}
