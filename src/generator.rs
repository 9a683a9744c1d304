//! Turns a tree of header-plus-markdown documents into static pages.
//!
//! The walker runs on its own thread and feeds parsed posts through a small
//! bounded queue into [`Index::build`], which sorts them newest first.
//! [`Index::write`] then renders `index.html` and every post page
//! concurrently and waits for all of them before returning.

use anyhow::Context as _;
use fs_extra::file::CopyOptions;
use log::info;

use crate::context::Context;

mod data;
mod index;
mod parser;
mod utils;
mod walker;

use index::Index;

pub(crate) const STYLESHEET_NAME: &str = "base.css";

/// Builds the whole site and returns the number of pages written.
pub(crate) fn generate(ctx: &Context) -> anyhow::Result<usize> {
    let index = Index::build(&ctx.src_dir);
    let written = index.write(&ctx.dst_dir, ctx)?;

    copy_stylesheet(ctx)?;
    Ok(written)
}

fn copy_stylesheet(ctx: &Context) -> anyhow::Result<()> {
    let dest = ctx.dst_dir.join(STYLESHEET_NAME);
    let mut cp_opts = CopyOptions::new();
    cp_opts.overwrite = true;
    fs_extra::file::copy(&ctx.stylesheet, &dest, &cp_opts)
        .with_context(|| format!("while copying {:?} to {dest:?}", ctx.stylesheet))?;

    info!("copied {:?} to {dest:?}", ctx.stylesheet);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::renderer::generate_renderer;

    fn context(root: &std::path::Path) -> Context {
        Context {
            src_dir: root.join("src"),
            dst_dir: root.join("dst"),
            stylesheet: root.join("base.css"),
            blog_name: "blog".to_string(),
            blog_url: None,
            description: "test blog".to_string(),
            handlebars: generate_renderer(None).unwrap(),
        }
    }

    #[test]
    fn generates_pages_and_copies_stylesheet() {
        let root = tempfile::tempdir().unwrap();
        let ctx = context(root.path());
        fs::create_dir(&ctx.src_dir).unwrap();
        fs::write(ctx.src_dir.join("A.md"), "title = A\ndate = 2021-01-01\ndesc = a\n---\nhi").unwrap();
        fs::write(&ctx.stylesheet, "body { margin: 0 }\n").unwrap();

        assert_eq!(generate(&ctx).unwrap(), 2);

        assert!(ctx.dst_dir.join("index.html").is_file());
        assert!(ctx.dst_dir.join("a.html").is_file());
        assert_eq!(
            fs::read(ctx.dst_dir.join(STYLESHEET_NAME)).unwrap(),
            b"body { margin: 0 }\n"
        );
    }

    #[test]
    fn missing_stylesheet_is_fatal() {
        let root = tempfile::tempdir().unwrap();
        let ctx = context(root.path());
        fs::create_dir(&ctx.src_dir).unwrap();

        assert!(generate(&ctx).is_err());
        // pages were still published before the copy failed
        assert!(ctx.dst_dir.join("index.html").is_file());
    }
}
