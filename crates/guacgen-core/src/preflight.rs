//! Preflight checks for artifact rendering
//!
//! Answers "what would happen if I rendered this now?" without producing the
//! artifact: which placeholders the template uses that the artifact never
//! declared, and which declared variables would render empty because they
//! are unset with no default. Both are warnings, not errors — rendering
//! would still succeed. Only a malformed template fails the check.

use std::path::Path;

use serde::Serialize;

use crate::artifact::Artifact;
use crate::error::Result;
use crate::template;
use crate::vars::EnvSnapshot;

/// Where the checked template text came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "path")]
pub enum TemplateSource {
    /// The embedded builtin template
    Builtin,
    /// An override file from the template directory
    Override(String),
}

/// Result of a preflight check for one artifact
#[derive(Debug, Clone, Serialize)]
pub struct PreflightReport {
    /// Artifact name
    pub artifact: String,
    /// Template that was scanned
    pub template: TemplateSource,
    /// Placeholders the template uses but the artifact does not declare;
    /// these render as the empty string
    pub undeclared_placeholders: Vec<String>,
    /// Declared variables that are unset with no default; these render as
    /// the empty string
    pub unset_variables: Vec<String>,
}

impl PreflightReport {
    /// True when the check produced no warnings
    pub fn is_clean(&self) -> bool {
        self.undeclared_placeholders.is_empty() && self.unset_variables.is_empty()
    }
}

/// Check one artifact against the current environment
///
/// # Errors
///
/// Returns [`GuacgenError::Template`](crate::GuacgenError::Template) when
/// the override template cannot be read or the template text is malformed.
pub fn check(
    artifact: &Artifact,
    env: &EnvSnapshot,
    template_dir: Option<&Path>,
) -> Result<PreflightReport> {
    let source = match template_dir {
        Some(dir) if dir.join(artifact.template_file()).exists() => {
            TemplateSource::Override(dir.join(artifact.template_file()).display().to_string())
        }
        _ => TemplateSource::Builtin,
    };

    let text = artifact.template_text(template_dir)?;
    let placeholders = template::scan(&text)?;

    let undeclared_placeholders = placeholders
        .into_iter()
        .filter(|name| !artifact.declares(name))
        .collect();

    let unset_variables = artifact
        .specs()
        .iter()
        .filter(|spec| spec.resolve(env).is_none())
        .map(|spec| spec.name().to_string())
        .collect();

    Ok(PreflightReport {
        artifact: artifact.name().to_string(),
        template: source,
        undeclared_placeholders,
        unset_variables,
    })
}
