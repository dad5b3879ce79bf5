//! gherkin-report - test reports from Gherkin feature files
//!
//! gherkin-report is a CLI tool and library that walks a directory of
//! Gherkin feature files and extracts their features, scenarios and
//! `Given`/`When`/`Then` steps into one aggregated report.
//!
//! ## Module Structure
//!
//! - `analyzer`: Line classification into features, scenarios, states, actions and outcomes
//! - `reader`: Recursive feature file discovery and loading
//! - `report`: Aggregation of per-file analyses and text/JSON rendering
//! - `config`: Configuration file loading and parsing
//! - `cli`: Command-line interface layer

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod reader;
pub mod report;
