//! Command handlers. Each returns the process exit code.

use super::commands::{CheckArgs, GetArgs};
use super::output::{format_check, ClassifierStatus, OutputFormatter, TechStack};
use crate::config::StackradarConfig;
use crate::detection::{DetectionError, Detector};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, error, info, warn};

pub fn handle_get(args: &GetArgs, quiet: bool) -> i32 {
    let config = StackradarConfig::default();
    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        eprintln!("\nPlease check your STACKRADAR_* environment variables.");
        return 1;
    }

    if !quiet {
        eprintln!("\u{1F50D} TechStack Detector\n");
    }

    let detector = Detector::new(&config);
    let target = args.target();
    debug!("Repository path: {}", target.display());

    let result = match detector.detect(target) {
        Ok(result) => result,
        Err(e) => {
            report_detection_error(&e);
            return 1;
        }
    };

    let stack = TechStack::from(result);
    match write_output(args, &stack) {
        Ok(Some(path)) => {
            info!("Output written to: {}", path.display());
            if !quiet {
                eprintln!("\u{2705} Output written to: {}", path.display());
            }
            0
        }
        Ok(None) => 0,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

fn report_detection_error(e: &DetectionError) {
    error!("Detection failed: {}", e);
    eprintln!("{}", e.help_message());
}

/// Writes the formatted stack to `--output` or stdout. Returns the file written, if any.
fn write_output<'a>(args: &'a GetArgs, stack: &TechStack) -> Result<Option<&'a Path>> {
    let rendered = OutputFormatter::new(args.format.into()).format(stack)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            Ok(Some(path.as_path()))
        }
        None => {
            print!("{}", rendered);
            Ok(None)
        }
    }
}

pub fn handle_check(args: &CheckArgs) -> i32 {
    let config = StackradarConfig::default();
    if let Err(e) = config.validate() {
        warn!("Configuration error: {}", e);
    }

    let detector = Detector::new(&config);
    let status = ClassifierStatus::new(&config, detector.classifier_available());
    if !status.available {
        warn!("{}", status.message);
    }

    match format_check(args.format.into(), &status, &config) {
        Ok(report) => print!("{}", report),
        Err(e) => error!("Failed to format check report: {:#}", e),
    }
    0
}
