//! Vars command - document the variable mapping
//!
//! Prints, per artifact, the canonical variable names, their legacy
//! aliases, declared defaults, and whether the environment currently
//! provides a value. Values themselves are never printed: several of the
//! variables are credentials.

use anyhow::Result;
use chrono::Utc;
use colored::Colorize;
use guacgen_core::vars::VarSpec;
use guacgen_core::{artifact, EnvSnapshot};
use serde::{Deserialize, Serialize};

use crate::output;

/// Vars command JSON output schema
#[derive(Debug, Serialize, Deserialize)]
struct VarsOutput {
    schema_version: String,
    timestamp: String,
    artifacts: Vec<ArtifactVars>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ArtifactVars {
    artifact: String,
    variables: Vec<VarInfo>,
}

#[derive(Debug, Serialize, Deserialize)]
struct VarInfo {
    name: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    aliases: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<String>,
    set: bool,
}

fn var_info(spec: &VarSpec, env: &EnvSnapshot) -> VarInfo {
    let set = env.is_set(spec.name()) || spec.aliases().iter().any(|alias| env.is_set(alias));
    VarInfo {
        name: spec.name().to_string(),
        aliases: spec.aliases().iter().map(|a| a.to_string()).collect(),
        default: spec.default_value().map(str::to_string),
        set,
    }
}

/// Document the variables of one artifact, or of all of them
pub fn run(artifact_name: Option<&str>, json: bool) -> Result<()> {
    let artifacts: Vec<&artifact::Artifact> = match artifact_name {
        Some(name) => vec![artifact::find(name)?],
        None => artifact::ARTIFACTS.iter().collect(),
    };

    let env = EnvSnapshot::from_process();

    let out = VarsOutput {
        schema_version: "1.0".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        artifacts: artifacts
            .iter()
            .map(|art| ArtifactVars {
                artifact: art.name().to_string(),
                variables: art.specs().iter().map(|s| var_info(s, &env)).collect(),
            })
            .collect(),
    };

    if json {
        output::print_json(&serde_json::to_string_pretty(&out)?)?;
    } else {
        print_human_readable(&out);
    }

    Ok(())
}

fn print_human_readable(out: &VarsOutput) {
    for artifact in &out.artifacts {
        println!("{}", artifact.artifact.bold());

        for var in &artifact.variables {
            let status = if var.set {
                "✓".green()
            } else if var.default.is_some() {
                "·".yellow()
            } else {
                "✗".red()
            };

            let mut line = format!("  {} {}", status, var.name);
            if !var.aliases.is_empty() {
                line.push_str(&format!(" (alias: {})", var.aliases.join(", ")));
            }
            match (&var.default, var.set) {
                (_, true) => line.push_str(" [set]"),
                (Some(default), false) => line.push_str(&format!(" [default: {}]", default)),
                (None, false) => line.push_str(" [unset, renders empty]"),
            }
            println!("{}", line);
        }
        println!();
    }
}
