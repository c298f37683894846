//! Render command - expand an arbitrary template file
//!
//! Unlike the builtin artifacts, the generic renderer exposes the whole
//! environment snapshot to the template; `--set` pairs overlay it.

use std::path::Path;

use anyhow::{bail, Result};
use colored::Colorize;
use guacgen_core::{template, EnvSnapshot};

use crate::output;

/// Render a template file against the environment plus `--set` overrides
pub fn run(template_path: &Path, sets: &[String], verbose: bool) -> Result<()> {
    let env = EnvSnapshot::from_process();
    let mut vars = env.to_var_map();

    for pair in sets {
        let Some((name, value)) = pair.split_once('=') else {
            bail!("invalid --set '{}': expected NAME=VALUE", pair);
        };
        vars.set(name, value);
    }

    if verbose {
        eprintln!(
            "{} Rendering template {} ({} variables)",
            "→".cyan(),
            template_path.display(),
            vars.len()
        );
    }

    let rendered = template::render_file(template_path, &vars)?;
    output::emit_rendered(&rendered)?;

    Ok(())
}
