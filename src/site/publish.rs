// src/site/publish.rs
// =============================================================================
// Writes generated pages to disk.
//
// The output directory is recreated from scratch on every run:
// 1. Delete it if it exists
// 2. Optionally wait a moment (some filesystems finish deletes lazily)
// 3. Create it empty and write one file per page
//
// With `atomic` set, the pages go to a sibling "<dir>.staging" directory
// first, which then replaces the output directory with a single rename.
// Without it, a failed write leaves the directory half populated.
// =============================================================================

use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::fs;
use tracing::debug;

use super::generate::GeneratedPage;
use crate::error::{ExamError, Result};

/// How the output directory gets replaced
#[derive(Debug, Clone, Default)]
pub struct PublishOptions {
    /// Pause after deleting an existing directory, before recreating it
    pub settle: Duration,
    /// Write into a staging directory and rename it into place
    pub atomic: bool,
}

// Replaces `out_dir` with a directory holding exactly `pages`
//
// Parameters:
//   pages: the pages from build_pages
//   out_dir: the exam's output directory
//   options: settle pause / atomic publish
pub async fn publish(pages: &[GeneratedPage], out_dir: &Path, options: &PublishOptions) -> Result<()> {
    if !options.atomic {
        recreate_dir(out_dir, options.settle).await?;
        return write_pages(pages, out_dir).await;
    }

    let staging = staging_dir(out_dir);
    recreate_dir(&staging, options.settle).await?;
    write_pages(pages, &staging).await?;

    remove_if_exists(out_dir, options.settle).await?;
    debug!(from = %staging.display(), to = %out_dir.display(), "moving staging directory into place");
    fs::rename(&staging, out_dir)
        .await
        .map_err(ExamError::io(out_dir))?;

    Ok(())
}

/// `<parent>/<name>.staging` next to the output directory
pub fn staging_dir(out_dir: &Path) -> PathBuf {
    let mut name = out_dir
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".staging");
    out_dir.with_file_name(name)
}

async fn write_pages(pages: &[GeneratedPage], dir: &Path) -> Result<()> {
    for page in pages {
        let path = dir.join(page.file_name());
        fs::write(&path, &page.content)
            .await
            .map_err(ExamError::io(&path))?;
        debug!(path = %path.display(), bytes = page.content.len(), "wrote page");
    }
    Ok(())
}

async fn recreate_dir(dir: &Path, settle: Duration) -> Result<()> {
    remove_if_exists(dir, settle).await?;
    fs::create_dir_all(dir).await.map_err(ExamError::io(dir))?;
    debug!(dir = %dir.display(), "created output directory");
    Ok(())
}

async fn remove_if_exists(dir: &Path, settle: Duration) -> Result<()> {
    if !fs::try_exists(dir).await.map_err(ExamError::io(dir))? {
        return Ok(());
    }

    fs::remove_dir_all(dir).await.map_err(ExamError::io(dir))?;
    debug!(dir = %dir.display(), "removed old output directory");

    if !settle.is_zero() {
        tokio::time::sleep(settle).await;
    }
    Ok(())
}
