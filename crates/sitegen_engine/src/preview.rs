//! Local static file server for looking at a generated page in a browser.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use axum::Router;
use engine_logging::engine_info;
use sitegen_core::SanitizedDocument;
use tempfile::{NamedTempFile, TempDir};
use thiserror::Error;
use tower_http::services::ServeDir;

pub const PREVIEW_FILENAME: &str = "index.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewSettings {
    pub host: String,
    pub port: u16,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8888,
        }
    }
}

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// A document written as `index.html` into a directory that is removed on drop.
pub struct StagedPreview {
    dir: TempDir,
    index_path: PathBuf,
}

impl StagedPreview {
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn index_path(&self) -> &Path {
        &self.index_path
    }
}

/// Writes through a temp file and a rename, so the server never sees a half-written page.
pub fn stage_document(document: &SanitizedDocument) -> Result<StagedPreview, PreviewError> {
    let dir = tempfile::Builder::new().prefix("sitegen-").tempdir()?;
    let index_path = dir.path().join(PREVIEW_FILENAME);

    let mut tmp = NamedTempFile::new_in(dir.path())?;
    tmp.write_all(document.as_str().as_bytes())?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(&index_path).map_err(|e| e.error)?;

    Ok(StagedPreview { dir, index_path })
}

/// Serves the staged directory; `/` resolves to `index.html`.
pub fn preview_router(staged: &StagedPreview) -> Router {
    Router::new().fallback_service(ServeDir::new(staged.dir()))
}

/// Serve until Ctrl-C.
pub async fn serve_preview(
    staged: &StagedPreview,
    settings: &PreviewSettings,
) -> Result<(), PreviewError> {
    let listener = tokio::net::TcpListener::bind((settings.host.as_str(), settings.port)).await?;
    engine_info!(
        "Serving {} at http://{}",
        staged.index_path().display(),
        listener.local_addr()?
    );

    axum::serve(listener, preview_router(staged))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        engine_info!("Shutdown signal received, stopping preview server...");
    }
}
