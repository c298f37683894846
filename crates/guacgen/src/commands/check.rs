//! Check command - preflight artifact rendering
//!
//! Resolves each artifact's template, scans it, and reports undeclared
//! placeholders and unset variables without rendering anything. Warnings do
//! not change the exit status; only an unreadable or malformed template
//! fails the command.

use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use colored::Colorize;
use guacgen_core::preflight::{self, PreflightReport, TemplateSource};
use guacgen_core::{artifact, EnvSnapshot};
use serde::Serialize;

use crate::output;

/// Check command JSON output schema
#[derive(Debug, Serialize)]
struct CheckOutput {
    schema_version: String,
    timestamp: String,
    reports: Vec<PreflightReport>,
}

/// Preflight one artifact, or all of them
pub fn run(
    artifact_name: Option<&str>,
    json: bool,
    template_dir: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let artifacts: Vec<&artifact::Artifact> = match artifact_name {
        Some(name) => vec![artifact::find(name)?],
        None => artifact::ARTIFACTS.iter().collect(),
    };

    let env = EnvSnapshot::from_process();

    let mut reports = Vec::new();
    for art in &artifacts {
        if verbose {
            eprintln!("{} Checking artifact '{}'", "→".cyan(), art.name());
        }
        reports.push(preflight::check(art, &env, template_dir)?);
    }

    let out = CheckOutput {
        schema_version: "1.0".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        reports,
    };

    if json {
        output::print_json(&serde_json::to_string_pretty(&out)?)?;
    } else {
        print_human_readable(&out);
    }

    Ok(())
}

fn print_human_readable(out: &CheckOutput) {
    for report in &out.reports {
        let source = match &report.template {
            TemplateSource::Builtin => "builtin template".to_string(),
            TemplateSource::Override(path) => format!("override {}", path),
        };

        if report.is_clean() {
            println!("{} {}: ok ({})", "✓".green().bold(), report.artifact.bold(), source);
            continue;
        }

        println!("{} {} ({})", "⚠".yellow(), report.artifact.bold(), source);
        for name in &report.undeclared_placeholders {
            println!("    undeclared placeholder '{}' renders empty", name);
        }
        for name in &report.unset_variables {
            println!("    variable '{}' is unset and has no default", name);
        }
    }
}
