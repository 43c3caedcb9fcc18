//! Content discovery and page output around the conversion engine.
//!
//! The engine itself never touches the filesystem; this module walks the
//! content tree, feeds each document through the converter, and writes the
//! resulting `.mu` pages plus a generated index.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use log::{debug, warn};
use thiserror::Error;

use crate::config::{Config, IndexConfig};
use crate::micron;

/// Errors raised while scanning content or writing pages.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to scan {}: {source}", .path.display())]
    ScanContent {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read {}: {source}", .path.display())]
    ReadPage {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    WritePage {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A source document picked up from the content directory.
#[derive(Debug)]
pub struct SourcePage {
    /// Relative path without the `.md` extension, `/`-joined.
    pub slug: String,
    /// Raw markdown text.
    pub markdown: String,
    /// Filesystem modification time, used to order the index.
    pub modified: SystemTime,
}

/// Outcome of a site build.
#[derive(Debug)]
pub struct BuildSummary {
    pub pages_written: usize,
}

/// Recursively collect `*.md` documents under `content_dir`.
pub fn load_pages(content_dir: &Path) -> Result<Vec<SourcePage>, SiteError> {
    let mut pages = Vec::new();
    walk(content_dir, content_dir, &mut pages)?;
    pages.sort_by(|a, b| a.slug.cmp(&b.slug));
    Ok(pages)
}

fn walk(root: &Path, dir: &Path, pages: &mut Vec<SourcePage>) -> Result<(), SiteError> {
    let entries = fs::read_dir(dir).map_err(|source| SiteError::ScanContent {
        path: dir.to_path_buf(),
        source,
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| SiteError::ScanContent {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_dir() {
            walk(root, &path, pages)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            pages.push(load_page(root, &path)?);
        }
    }
    Ok(())
}

fn load_page(root: &Path, path: &Path) -> Result<SourcePage, SiteError> {
    let markdown = fs::read_to_string(path).map_err(|source| SiteError::ReadPage {
        path: path.to_path_buf(),
        source,
    })?;
    let modified = fs::metadata(path)
        .and_then(|meta| meta.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH);
    Ok(SourcePage {
        slug: slug_for(root, path),
        markdown,
        modified,
    })
}

fn slug_for(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path).with_extension("");
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Convert every content page and write the output tree.
///
/// Each page lands at `<output>/<slug>.mu`, with the configured cache
/// directive prefixed when one is set. Unless disabled, an `index.mu`
/// listing every page is generated alongside them.
pub fn build_site(config: &Config) -> Result<BuildSummary, SiteError> {
    let pages = load_pages(&config.paths.content)?;
    let mut written = 0;

    for page in &pages {
        let body = micron::render(&page.markdown);
        let target = config.paths.output.join(format!("{}.mu", page.slug));
        write_page(&target, &body, config.cache.seconds)?;
        debug!("converted {} -> {}", page.slug, target.display());
        written += 1;
    }

    if config.index.enabled {
        if pages.iter().any(|p| p.slug == "index") {
            warn!("content provides its own index.md, skipping generated index");
        } else {
            let index = render_index(&pages, &config.index);
            let target = config.paths.output.join("index.mu");
            write_page(&target, &index, config.cache.seconds)?;
            written += 1;
        }
    }

    Ok(BuildSummary {
        pages_written: written,
    })
}

fn write_page(path: &Path, body: &str, cache_seconds: Option<u64>) -> Result<(), SiteError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| SiteError::WritePage {
            path: path.to_path_buf(),
            source,
        })?;
    }
    let mut content = String::new();
    if let Some(seconds) = cache_seconds {
        content.push_str(&micron::cache_directive(seconds));
        content.push('\n');
    }
    content.push_str(body);
    content.push('\n');
    fs::write(path, content).map_err(|source| SiteError::WritePage {
        path: path.to_path_buf(),
        source,
    })
}

/// Render the Micron index page listing every page, newest first.
///
/// Ties on modification time fall back to slug order so the listing is
/// deterministic.
pub fn render_index(pages: &[SourcePage], index: &IndexConfig) -> String {
    let mut ordered: Vec<&SourcePage> = pages.iter().collect();
    ordered.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| a.slug.cmp(&b.slug)));

    let mut lines = Vec::new();
    lines.push(format!("> `!{}`!", index.title));
    lines.push("-".to_string());
    if ordered.is_empty() {
        lines.push("  No pages yet.".to_string());
    }
    for page in ordered {
        lines.push(format!(
            "  `_`[{slug}`{prefix}/{slug}.mu]`_",
            slug = page.slug,
            prefix = index.link_prefix
        ));
    }
    lines.push("-".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime};

    use pretty_assertions::assert_eq;

    use super::{SourcePage, render_index};
    use crate::config::IndexConfig;

    fn page(slug: &str, age_seconds: u64) -> SourcePage {
        SourcePage {
            slug: slug.to_string(),
            markdown: String::new(),
            modified: SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000 - age_seconds),
        }
    }

    #[test]
    fn index_lists_newest_first() {
        let pages = vec![page("older", 60), page("newest", 0)];
        let index = render_index(&pages, &IndexConfig::default());
        assert_eq!(
            index,
            "> `!Pages`!\n\
             -\n  \
             `_`[newest`/page/newest.mu]`_\n  \
             `_`[older`/page/older.mu]`_\n\
             -"
        );
    }

    #[test]
    fn empty_index_still_renders() {
        let index = render_index(&[], &IndexConfig::default());
        assert_eq!(index, "> `!Pages`!\n-\n  No pages yet.\n-");
    }

    #[test]
    fn nested_slugs_keep_their_path_in_links() {
        let pages = vec![page("guides/setup", 0)];
        let index = render_index(&pages, &IndexConfig::default());
        assert!(index.contains("`_`[guides/setup`/page/guides/setup.mu]`_"));
    }
}
