//! Keyword extractors.
//!
//! Each extractor returns the text following its keyword prefix, or `None`
//! when the line does not start with it. Prefixes are case-sensitive and
//! include the separator, so `"Given"` alone never matches.

use super::StepContext;

const FEATURE_PREFIX: &str = "Feature: ";
const SCENARIO_PREFIX: &str = "Scenario: ";
const STATE_PREFIX: &str = "Given ";
const ACTION_PREFIX: &str = "When ";
const OUTCOME_PREFIX: &str = "Then ";
const CONTINUATION_PREFIXES: &[&str] = &["And ", "But "];

/// Extracts the feature name from a `Feature: ` line.
///
/// # Examples
///
/// ```
/// use gherkin_report::analyzer::get_valid_feature;
///
/// assert_eq!(get_valid_feature("Feature: Create menu"), Some("Create menu"));
/// assert_eq!(get_valid_feature("Random line"), None);
/// ```
pub fn get_valid_feature(line: &str) -> Option<&str> {
    line.strip_prefix(FEATURE_PREFIX)
}

/// Extracts the scenario name from a `Scenario: ` line.
pub fn get_valid_scenario(line: &str) -> Option<&str> {
    line.strip_prefix(SCENARIO_PREFIX)
}

/// Extracts a state from a `Given ` line, or from an `And ` / `But ` line
/// when `context` is [`StepContext::State`].
///
/// # Examples
///
/// ```
/// use gherkin_report::analyzer::{StepContext, get_valid_state};
///
/// assert_eq!(get_valid_state("Given a cat", StepContext::None), Some("a cat"));
/// assert_eq!(get_valid_state("And a dog", StepContext::State), Some("a dog"));
/// assert_eq!(get_valid_state("And a dog", StepContext::Action), None);
/// ```
pub fn get_valid_state(line: &str, context: StepContext) -> Option<&str> {
    line.strip_prefix(STATE_PREFIX)
        .or_else(|| continuation(line, context, StepContext::State))
}

/// Extracts an action from a `When ` line, or from an `And ` / `But ` line
/// when `context` is [`StepContext::Action`].
pub fn get_valid_action(line: &str, context: StepContext) -> Option<&str> {
    line.strip_prefix(ACTION_PREFIX)
        .or_else(|| continuation(line, context, StepContext::Action))
}

/// Extracts an outcome from a `Then ` line, or from an `And ` / `But ` line
/// when `context` is [`StepContext::Outcome`].
pub fn get_valid_outcome(line: &str, context: StepContext) -> Option<&str> {
    line.strip_prefix(OUTCOME_PREFIX)
        .or_else(|| continuation(line, context, StepContext::Outcome))
}

fn continuation(line: &str, context: StepContext, expected: StepContext) -> Option<&str> {
    if context != expected {
        return None;
    }
    CONTINUATION_PREFIXES
        .iter()
        .find_map(|prefix| line.strip_prefix(prefix))
}
