//! SVG mirror refresh from the remote icon source.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use glyphic_icons::{parse_svg, HttpSource, SvgSource};

use crate::config::ConfigFile;

/// Run the sync command.
pub async fn run(config: &ConfigFile, dir: Option<PathBuf>) -> Result<()> {
    let dir = dir.unwrap_or_else(|| PathBuf::from(&config.icons.dir));

    if !dir.exists() {
        anyhow::bail!("Mirror directory not found: {}", dir.display());
    }

    let names = existing_icons(&dir)?;
    if names.is_empty() {
        tracing::warn!("No SVG files found in {}", dir.display());
        return Ok(());
    }

    tracing::info!(
        "Refreshing {} icons from {}",
        names.len(),
        config.icons.base_url
    );

    let source = HttpSource::new(config.icons.base_url.as_str());
    let mut updated = 0usize;
    let mut failed = 0usize;

    for name in &names {
        match source.fetch(name).await {
            Ok(body) if parse_svg(&body).is_some() => {
                let path = dir.join(format!("{name}.svg"));
                match fs::write(&path, &body) {
                    Ok(()) => {
                        tracing::debug!("Updated {}", path.display());
                        updated += 1;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to write {}: {}", path.display(), e);
                        failed += 1;
                    }
                }
            }
            Ok(_) => {
                tracing::warn!("Skipping {}: response is not an SVG document", name);
                failed += 1;
            }
            Err(e) => {
                tracing::warn!("{}", e);
                failed += 1;
            }
        }
    }

    tracing::info!("Updated {} icons, {} failed", updated, failed);

    Ok(())
}

/// Names of the SVG files already present in the mirror directory.
fn existing_icons(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();

        if path.extension().and_then(|e| e.to_str()) != Some("svg") {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            names.push(stem.to_string());
        }
    }

    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_svg_stems_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("star.svg"), "<svg/>").unwrap();
        fs::write(dir.path().join("arrow-up.svg"), "<svg/>").unwrap();
        fs::write(dir.path().join("notes.txt"), "skip me").unwrap();

        let names = existing_icons(dir.path()).unwrap();

        assert_eq!(names, vec!["arrow-up".to_string(), "star".to_string()]);
    }
}
