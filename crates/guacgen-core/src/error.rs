use thiserror::Error;

use crate::template::TemplateError;

#[derive(Error, Debug)]
pub enum GuacgenError {
    // Artifact errors
    #[error("ARTIFACT_NOT_FOUND: artifact '{0}' not found")]
    ArtifactNotFound(String),

    // Template errors
    #[error(transparent)]
    Template(#[from] TemplateError),
}

pub type Result<T> = std::result::Result<T, GuacgenError>;
