//! Gherkin line classification.
//!
//! The analyzer turns an ordered sequence of feature-file lines into a
//! [`GherkinReport`]. Each line is matched against the step keywords in a
//! fixed priority:
//!
//! - `Feature: ` and `Scenario: ` headers
//! - `Given ` (state), `When ` (action), `Then ` (outcome)
//! - `And ` / `But ` continuations, which join whichever of state, action
//!   or outcome was classified last (see [`StepContext`])
//!
//! Every extractor is a pure function of the line and the context it is
//! given, so the analyzer holds no state between calls and can run on many
//! files at once.

mod context;
mod extract;
mod gherkins;

pub use context::StepContext;
pub use extract::{
    get_valid_action, get_valid_feature, get_valid_outcome, get_valid_scenario, get_valid_state,
};
pub use gherkins::{GherkinReport, get_gherkins};
