//! Artifact commands - render a builtin artifact from the environment

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use guacgen_core::{artifact, EnvSnapshot};

use crate::output;

/// Render a builtin artifact to stdout
///
/// # Arguments
///
/// * `name` - Artifact name from the catalog
/// * `template_dir` - Optional template override directory
/// * `verbose` - Enable progress diagnostics on stderr if true
pub fn run(name: &str, template_dir: Option<&Path>, verbose: bool) -> Result<()> {
    let art = artifact::find(name)?;

    if verbose {
        eprintln!("{} Rendering artifact '{}'", "→".cyan(), art.name());
        if let Some(dir) = template_dir {
            eprintln!("{} Template directory: {}", "→".cyan(), dir.display());
        }
    }

    let env = EnvSnapshot::from_process();
    let rendered = art.render(&env, template_dir)?;
    output::emit_rendered(&rendered)?;

    if verbose {
        eprintln!(
            "{} Rendered '{}' ({} bytes)",
            "✓".green().bold(),
            art.name(),
            rendered.len()
        );
    }

    Ok(())
}
