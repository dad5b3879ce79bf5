use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;

use crate::{
    cli::args::ScanCommand,
    config::{Config, load_config},
    reader::{ScanOptions, read_feature_files_from_folder},
    report::{ScanReport, print_report},
};

pub fn scan(cmd: ScanCommand) -> Result<()> {
    let verbose = cmd.verbose;
    let start_dir = cmd.path.clone().unwrap_or_else(|| PathBuf::from("."));

    let config_result = load_config(&start_dir)?;
    if verbose && !config_result.from_file {
        eprintln!("Note: No .gherkinrc.json found, using default configuration");
    }

    // CLI > config file > defaults
    let config = apply_overrides(config_result.config, &cmd);
    config.validate()?;

    let root = cmd
        .path
        .unwrap_or_else(|| Path::new(&config.root).to_path_buf());

    let options = ScanOptions::from_config(&config, verbose);
    let report = ScanReport::assemble(&root, read_feature_files_from_folder(&root, &options));

    if report.skipped_paths > 0 {
        eprintln!(
            "{} {} path(s) skipped due to access errors{}",
            "warning:".bold().yellow(),
            report.skipped_paths,
            if verbose { "" } else { " (use -v for details)" }
        );
    }

    print_report(&report, config.format)
}

fn apply_overrides(mut config: Config, cmd: &ScanCommand) -> Config {
    if let Some(format) = cmd.format {
        config.format = format;
    }
    if !cmd.extensions.is_empty() {
        config.extensions = cmd.extensions.clone();
    }
    config.ignores.extend(cmd.ignores.iter().cloned());
    config
}
