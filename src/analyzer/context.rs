/// Which bucket an `And` / `But` continuation line joins.
///
/// Set by the most recently classified `Given`, `When` or `Then` line (or a
/// continuation of one). Feature and scenario headers leave it untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StepContext {
    /// No step has been classified yet; continuations are dropped.
    #[default]
    None,
    State,
    Action,
    Outcome,
}
