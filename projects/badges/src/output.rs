use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub const DEFAULT_OUTPUT_DIR: &str = "generated";

#[derive(Debug, Error)]
pub enum WriteSvgError {
    #[error("CreateParentDir {path}: {source}")]
    CreateParentDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("WriteFile {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// `generated/<login>-<kind>.svg`
pub fn default_output_path(login: &str, kind: &str) -> PathBuf {
    Path::new(DEFAULT_OUTPUT_DIR).join(format!("{login}-{kind}.svg"))
}

/// Writes the document, creating missing parent directories first.
pub async fn write_svg(path: &Path, svg: &str) -> Result<(), WriteSvgError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| WriteSvgError::CreateParentDir { path: parent.to_path_buf(), source })?;
    }

    tokio::fs::write(path, svg)
        .await
        .map_err(|source| WriteSvgError::WriteFile { path: path.to_path_buf(), source })?;

    info!(path = %path.display(), bytes = svg.len(), "badge written");
    Ok(())
}
