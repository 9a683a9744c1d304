use std::path::PathBuf;

use handlebars::Handlebars;

pub(crate) const DEFAULT_BLOG_NAME: &str = "blog";
pub(crate) const DEFAULT_DESCRIPTION: &str =
    "Artisanal, hand-crafted blog posts imbued with delayed regrets";

/// Read-only state for one build run. Built once in `main` and shared by
/// reference with the walker, the index and every render task.
#[derive(Debug)]
pub(crate) struct Context {
    pub src_dir: PathBuf,
    pub dst_dir: PathBuf,
    pub stylesheet: PathBuf,

    pub blog_name: String,
    /// Absolute base for canonical links, e.g. `https://blog.example.com`.
    pub blog_url: Option<String>,
    pub description: String,

    pub handlebars: Handlebars<'static>,
}

impl Context {
    pub fn new(
        src_dir: PathBuf,
        dst_dir: PathBuf,
        stylesheet: PathBuf,
        handlebars: Handlebars<'static>,
    ) -> Self {
        Self {
            src_dir,
            dst_dir,
            stylesheet,
            blog_name: std::env::var("BLOG_NAME").unwrap_or(DEFAULT_BLOG_NAME.to_string()),
            blog_url: std::env::var("BLOG_URL")
                .ok()
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
            description: std::env::var("BLOG_DESCRIPTION")
                .unwrap_or(DEFAULT_DESCRIPTION.to_string()),
            handlebars,
        }
    }
}
