use std::path::Path;

use anyhow::Context;
use handlebars::Handlebars;

pub(crate) const INDEX_TEMPLATE: &str = "index";
pub(crate) const POST_TEMPLATE: &str = "post";

const BUILTIN_INDEX: &str = include_str!("../templates/index.hbs");
const BUILTIN_POST: &str = include_str!("../templates/post.hbs");

/// Compiles the `index` and `post` templates once. With `template_dir` the
/// templates are read from `index.hbs` and `post.hbs` in that directory,
/// otherwise the built-in ones are used.
pub(crate) fn generate_renderer(template_dir: Option<&Path>) -> anyhow::Result<Handlebars<'static>> {
    let mut handlebars = Handlebars::new();
    match template_dir {
        Some(dir) => {
            handlebars
                .register_template_file(INDEX_TEMPLATE, dir.join("index.hbs"))
                .context("index.hbs")?;
            handlebars
                .register_template_file(POST_TEMPLATE, dir.join("post.hbs"))
                .context("post.hbs")?;
        }
        None => {
            handlebars
                .register_template_string(INDEX_TEMPLATE, BUILTIN_INDEX)
                .context("built-in index template")?;
            handlebars
                .register_template_string(POST_TEMPLATE, BUILTIN_POST)
                .context("built-in post template")?;
        }
    }

    Ok(handlebars)
}
