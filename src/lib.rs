mod classify;
mod config;
mod inline;
mod line;
mod micron;
mod site;

pub use config::{CacheConfig, Config, IndexConfig, PathsConfig};
pub use line::{EngineState, LineKind};
pub use site::{BuildSummary, SiteError, SourcePage, build_site, load_pages, render_index};

/// Convert a Markdown document to Micron markup.
///
/// A pure function over the input text: no I/O, no clock, no shared state.
/// Independent documents can be converted concurrently without coordination.
pub fn convert(markdown: &str) -> String {
    micron::render(markdown)
}

/// Convert a Markdown document and prefix the cache-lifetime directive line.
pub fn convert_with_directive(markdown: &str, cache_seconds: u64) -> String {
    format!(
        "{}\n{}",
        micron::cache_directive(cache_seconds),
        micron::render(markdown)
    )
}
