// src/site/mod.rs
// =============================================================================
// This module generates the static question pages.
//
// Submodules:
// - template: the HTML template and its [Placeholder] tokens
// - navigation: previous / current / next ids per page
// - generate: builds every page in memory
// - publish: recreates the output directory and writes the pages
// =============================================================================

mod generate;
mod navigation;
mod publish;
mod template;

use std::path::{Component, Path, PathBuf};

use generate::build_pages;
use publish::publish;
use template::Template;

pub use publish::PublishOptions;

use crate::error::{ExamError, Result};
use crate::github::Issue;

/// Where the pages of one exam come from and go to
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub template: PathBuf,
    /// Parent of the per-exam output directories
    pub output_root: PathBuf,
    pub label: String,
    pub publish: PublishOptions,
}

impl SiteConfig {
    /// `<output_root>/<label>`
    ///
    /// This directory gets deleted and recreated, so the label must be one
    /// plain directory name: not empty, no separators, no `.` or `..`.
    pub fn output_dir(&self) -> Result<PathBuf> {
        let mut components = Path::new(&self.label).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.output_root.join(&self.label)),
            _ => Err(ExamError::InvalidLabel(self.label.clone())),
        }
    }
}

/// What a generation run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSummary {
    pub output_dir: PathBuf,
    pub pages: Vec<PathBuf>,
}

/// Loads the template, builds every page, then publishes them
///
/// Template and body errors surface before the output directory is touched.
pub async fn generate_site(issues: &[Issue], config: &SiteConfig) -> Result<SiteSummary> {
    let output_dir = config.output_dir()?;
    let template = Template::load(&config.template).await?;

    let pages = build_pages(issues, &template, &config.label, &output_dir)?;
    publish(&pages, &output_dir, &config.publish).await?;

    Ok(SiteSummary {
        pages: pages.into_iter().map(|p| p.path).collect(),
        output_dir,
    })
}
