use std::{
    fs::{DirBuilder, File},
    io::{BufWriter, Write},
    path::Path,
    sync::mpsc::sync_channel,
    thread,
};

use anyhow::Context as _;
use handlebars::Handlebars;
use log::{debug, error, info};
use serde::Serialize;

use super::{
    data::{IndexPageData, Post, PostPageData},
    utils::sort_post,
    walker::{walk, QUEUE_CAPACITY},
};
use crate::{
    context::Context,
    renderer::{INDEX_TEMPLATE, POST_TEMPLATE},
};

/// All posts of one run, newest first once [`Index::build`] returns.
#[derive(Debug, Default)]
pub(crate) struct Index {
    pub posts: Vec<Post>,
}

impl Index {
    /// Walks `root` on a separate thread and drains its queue, then sorts.
    /// Posts with equal dates keep the order the filesystem yielded them in,
    /// which is not guaranteed to be the same across runs.
    pub fn build(root: &Path) -> Self {
        let (tx, rx) = sync_channel(QUEUE_CAPACITY);
        let mut posts: Vec<Post> = thread::scope(|s| {
            s.spawn(|| walk(root, tx));
            rx.into_iter().collect()
        });
        posts.sort_by(sort_post);

        info!("collected {} posts from {root:?}", posts.len());
        Self { posts }
    }

    /// Renders `index.html` and one page per post into `out_dir`, one thread
    /// per page, and waits for all of them. Only failing to create `out_dir`
    /// is an error; a page that fails is logged and left out. Returns the
    /// number of pages written.
    pub fn write(&self, out_dir: &Path, ctx: &Context) -> anyhow::Result<usize> {
        create_output_dir(out_dir)
            .with_context(|| format!("while creating output directory {out_dir:?}"))?;

        let blog_url = ctx.blog_url.as_deref();
        let index_data = IndexPageData {
            blog_name: &ctx.blog_name,
            blog_url,
            description: &ctx.description,
            posts: &self.posts,
        };
        let hbs = &ctx.handlebars;

        // One OS thread per page. At blog scale this stays well under the
        // process thread limit; a thread the OS refuses is logged as a failed
        // page instead of panicking the scope.
        let written = thread::scope(|s| {
            let mut tasks = Vec::with_capacity(self.posts.len() + 1);
            let index_path = out_dir.join("index.html");
            tasks.push((
                index_path.clone(),
                thread::Builder::new().spawn_scoped(s, move || {
                    render_one(hbs, INDEX_TEMPLATE, &index_path, &index_data)
                }),
            ));

            for post in &self.posts {
                let path = out_dir.join(format!("{}.html", post.url));
                let data = PostPageData::new(&ctx.blog_name, blog_url, post);
                tasks.push((
                    path.clone(),
                    thread::Builder::new().spawn_scoped(s, move || {
                        render_one(hbs, POST_TEMPLATE, &path, &data)
                    }),
                ));
            }

            // barrier: every task is joined, including ones that failed or panicked
            tasks
                .into_iter()
                .map(|(path, task)| match task.map(|task| task.join()) {
                    Ok(Ok(written)) => written,
                    Ok(Err(_)) => {
                        error!("render task for {path:?} panicked");
                        false
                    }
                    Err(e) => {
                        error!("error spawning render task for {path:?}: {e}");
                        false
                    }
                })
                .filter(|written| *written)
                .count()
        });

        info!("wrote {written} of {} pages to {out_dir:?}", self.posts.len() + 1);
        Ok(written)
    }
}

fn create_output_dir(out_dir: &Path) -> std::io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder.create(out_dir)
}

/// Executes `template` against `data`, streaming into a freshly created (or
/// truncated) `dest`. Failures are logged; returns whether the page was
/// written.
pub(super) fn render_one<T: Serialize>(
    hbs: &Handlebars<'_>,
    template: &str,
    dest: &Path,
    data: &T,
) -> bool {
    if let Some(parent) = dest.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            error!("error creating directory {parent:?}: {e}");
            return false;
        }
    }
    let fd = match File::create(dest) {
        Ok(fd) => fd,
        Err(e) => {
            error!("error creating file {dest:?}: {e}");
            return false;
        }
    };
    let mut out = BufWriter::new(fd);
    if let Err(e) = hbs.render_to_write(template, data, &mut out) {
        error!("error executing template {template} for {dest:?}: {e}");
        return false;
    }
    if let Err(e) = out.flush() {
        error!("error writing file {dest:?}: {e}");
        return false;
    }

    debug!("wrote {dest:?}");
    true
}
