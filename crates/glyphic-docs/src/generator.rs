//! Doc-page generation with per-file error isolation.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::markdown::{first_heading, render_markdown, strip_frontmatter};
use crate::templates::{PageContext, TemplateEngine};

/// A single page to convert.
#[derive(Debug, Clone)]
pub struct PageSpec {
    /// Markdown source file
    pub source: PathBuf,

    /// Page title; derived from the content when `None`
    pub title: Option<String>,
}

impl PageSpec {
    /// A page whose title derives from its content.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            title: None,
        }
    }

    /// A page with an explicit title.
    pub fn titled(source: impl Into<PathBuf>, title: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            title: Some(title.into()),
        }
    }
}

/// Configuration for a generation run.
#[derive(Debug, Clone)]
pub struct DocsConfig {
    /// Explicitly listed pages; missing sources are skipped with a log line
    pub pages: Vec<PageSpec>,

    /// Directory of guide files; every `.md`/`.mdc` inside becomes a page
    pub guides_dir: Option<PathBuf>,

    /// Output directory
    pub output_dir: PathBuf,

    /// Site title
    pub site_title: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            pages: vec![],
            guides_dir: None,
            output_dir: PathBuf::from("docs"),
            site_title: "Documentation".to_string(),
        }
    }
}

/// Result of a generation run.
#[derive(Debug)]
pub struct GenerateResult {
    /// Number of pages written
    pub pages: usize,

    /// Number of pages that failed and were skipped
    pub failed: usize,

    /// Total generation time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur while generating pages.
#[derive(Debug, thiserror::Error)]
pub enum DocsError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to render template: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

/// A resolved conversion job.
#[derive(Debug)]
struct PageJob {
    source: PathBuf,
    title: Option<String>,
    output: PathBuf,
}

/// Doc-page generator.
pub struct DocsGenerator {
    config: DocsConfig,
    templates: TemplateEngine,
}

impl DocsGenerator {
    /// Create a generator.
    pub fn new(config: DocsConfig) -> Self {
        Self {
            config,
            templates: TemplateEngine::new(),
        }
    }

    /// Generate all configured pages.
    ///
    /// Pages are converted in parallel and independently: a page that fails
    /// to read, render, or write is logged and counted, and the remaining
    /// pages still build.
    pub fn generate(&self) -> Result<GenerateResult, DocsError> {
        let start = Instant::now();

        fs::create_dir_all(&self.config.output_dir).map_err(|source| DocsError::Write {
            path: self.config.output_dir.display().to_string(),
            source,
        })?;

        let jobs = self.collect_jobs();

        let outcomes: Vec<bool> = jobs
            .par_iter()
            .map(|job| match self.build_page(job) {
                Ok(()) => {
                    tracing::info!("Generated {}", job.output.display());
                    true
                }
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", job.source.display(), e);
                    false
                }
            })
            .collect();

        let pages = outcomes.iter().filter(|ok| **ok).count();
        let failed = outcomes.len() - pages;
        let duration = start.elapsed();

        Ok(GenerateResult {
            pages,
            failed,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Resolve the configured pages and guide files into jobs.
    fn collect_jobs(&self) -> Vec<PageJob> {
        let mut jobs = Vec::new();

        for spec in &self.config.pages {
            if !spec.source.exists() {
                tracing::warn!("Source not found, skipping: {}", spec.source.display());
                continue;
            }
            jobs.push(PageJob {
                source: spec.source.clone(),
                title: spec.title.clone(),
                output: self.output_path(&spec.source),
            });
        }

        if let Some(guides_dir) = &self.config.guides_dir {
            if guides_dir.exists() {
                for entry in WalkDir::new(guides_dir)
                    .follow_links(true)
                    .into_iter()
                    .filter_map(|e| e.ok())
                {
                    let path = entry.path();
                    if !path.is_file() {
                        continue;
                    }

                    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
                    if ext != "md" && ext != "mdc" {
                        continue;
                    }

                    jobs.push(PageJob {
                        source: path.to_path_buf(),
                        title: None,
                        output: self.output_path(path),
                    });
                }
            } else {
                tracing::warn!("Guides directory not found: {}", guides_dir.display());
            }
        }

        jobs
    }

    /// Output path for a source file: `<output_dir>/<stem>.html`.
    fn output_path(&self, source: &Path) -> PathBuf {
        let stem = source
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("index");

        self.config.output_dir.join(format!("{stem}.html"))
    }

    /// Convert one page.
    fn build_page(&self, job: &PageJob) -> Result<(), DocsError> {
        let raw = fs::read_to_string(&job.source).map_err(|source| DocsError::Read {
            path: job.source.display().to_string(),
            source,
        })?;

        let content = strip_frontmatter(&raw);

        let title = job
            .title
            .clone()
            .or_else(|| first_heading(content))
            .unwrap_or_else(|| title_from_stem(&job.source));

        let source_file = job
            .source
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        let context = PageContext {
            title,
            site_title: self.config.site_title.clone(),
            content: render_markdown(content),
            source_file,
            updated: chrono::Local::now().format("%Y-%m-%d").to_string(),
        };

        let html = self.templates.render_page(&context)?;

        fs::write(&job.output, html).map_err(|source| DocsError::Write {
            path: job.output.display().to_string(),
            source,
        })?;

        Ok(())
    }
}

/// Title-case a file stem, so `development-workflow.mdc` becomes
/// "Development Workflow".
fn title_from_stem(source: &Path) -> String {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Untitled");

    stem.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn generates_explicit_pages() {
        let temp = tempdir().unwrap();
        let readme = temp.path().join("README.md");
        fs::write(&readme, "# Glyphic\n\nAn icon toolkit.").unwrap();

        let out = temp.path().join("docs");
        let generator = DocsGenerator::new(DocsConfig {
            pages: vec![PageSpec::titled(&readme, "README")],
            output_dir: out.clone(),
            ..Default::default()
        });

        let result = generator.generate().unwrap();

        assert_eq!(result.pages, 1);
        assert_eq!(result.failed, 0);

        let html = fs::read_to_string(out.join("README.html")).unwrap();
        assert!(html.contains("<h1>Glyphic</h1>"));
        assert!(html.contains("<title>README - Documentation</title>"));
    }

    #[test]
    fn converts_guide_files_and_strips_frontmatter() {
        let temp = tempdir().unwrap();
        let guides = temp.path().join("guides");
        fs::create_dir_all(&guides).unwrap();
        fs::write(
            guides.join("development-workflow.mdc"),
            "---\nscope: all\n---\n\n## Workflow\n\nSteps.",
        )
        .unwrap();
        fs::write(guides.join("notes.txt"), "not a guide").unwrap();

        let out = temp.path().join("docs");
        let generator = DocsGenerator::new(DocsConfig {
            guides_dir: Some(guides),
            output_dir: out.clone(),
            ..Default::default()
        });

        let result = generator.generate().unwrap();

        assert_eq!(result.pages, 1);

        let html = fs::read_to_string(out.join("development-workflow.html")).unwrap();
        assert!(html.contains("<h2>Workflow</h2>"));
        assert!(!html.contains("scope: all"));
        // Title falls back to the first heading.
        assert!(html.contains("<title>Workflow - Documentation</title>"));
    }

    #[test]
    fn missing_sources_are_skipped() {
        let temp = tempdir().unwrap();

        let generator = DocsGenerator::new(DocsConfig {
            pages: vec![PageSpec::new(temp.path().join("MISSING.md"))],
            output_dir: temp.path().join("docs"),
            ..Default::default()
        });

        let result = generator.generate().unwrap();

        assert_eq!(result.pages, 0);
        assert_eq!(result.failed, 0);
    }

    #[test]
    fn one_failing_page_does_not_abort_the_rest() {
        let temp = tempdir().unwrap();
        let good = temp.path().join("good.md");
        fs::write(&good, "# Good Page").unwrap();

        // A directory passes the existence check but fails to read as a file.
        let bad = temp.path().join("bad.md");
        fs::create_dir_all(&bad).unwrap();

        let out = temp.path().join("docs");
        let generator = DocsGenerator::new(DocsConfig {
            pages: vec![PageSpec::new(&bad), PageSpec::new(&good)],
            output_dir: out.clone(),
            ..Default::default()
        });

        let result = generator.generate().unwrap();

        assert_eq!(result.pages, 1);
        assert_eq!(result.failed, 1);
        assert!(out.join("good.html").exists());
    }

    #[test]
    fn titles_fall_back_to_the_file_stem() {
        let temp = tempdir().unwrap();
        let page = temp.path().join("release-notes.md");
        fs::write(&page, "No headings, just text.").unwrap();

        let out = temp.path().join("docs");
        let generator = DocsGenerator::new(DocsConfig {
            pages: vec![PageSpec::new(&page)],
            output_dir: out.clone(),
            ..Default::default()
        });

        generator.generate().unwrap();

        let html = fs::read_to_string(out.join("release-notes.html")).unwrap();
        assert!(html.contains("<title>Release Notes - Documentation</title>"));
    }
}
