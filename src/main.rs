use std::path::PathBuf;

use anyhow::bail;
use clap::{command, Arg};
use context::Context;
use generator::generate;
use log::info;
use renderer::generate_renderer;

mod context;
mod generator;
mod renderer;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = command!()
        .args(&[
            Arg::new("src_dir")
                .help("Directory path of source documents")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("src"),
            Arg::new("dst_dir")
                .help("Directory path of output. Existing pages will be overwritten.")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("dst"),
            Arg::new("stylesheet")
                .help("Stylesheet copied as it is to base.css in the output directory")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("base.css"),
            Arg::new("template_dir")
                .long("template-dir")
                .help("Directory holding index.hbs and post.hbs to use instead of the built-in templates")
                .value_parser(clap::value_parser!(PathBuf)),
        ])
        .get_matches();

    let src_dir: &PathBuf = matches.get_one("src_dir").unwrap();
    if !src_dir.is_dir() {
        bail!("src_dir must be a directory.");
    }
    let dst_dir: &PathBuf = matches.get_one("dst_dir").unwrap();
    if dst_dir.exists() && !dst_dir.is_dir() {
        bail!("if dst_dir exists, it must be a directory.");
    }
    let stylesheet: &PathBuf = matches.get_one("stylesheet").unwrap();

    let template_dir: Option<&PathBuf> = matches.get_one("template_dir");
    if let Some(dir) = template_dir {
        if !dir.is_dir() {
            bail!("template_dir must be a directory.");
        }
    }
    let handlebars = generate_renderer(template_dir.map(PathBuf::as_path))?;

    let ctx = Context::new(
        src_dir.to_owned(),
        dst_dir.to_owned(),
        stylesheet.to_owned(),
        handlebars,
    );
    let written = generate(&ctx)?;

    info!("built {:?} into {:?}, {written} pages written", ctx.src_dir, ctx.dst_dir);
    Ok(())
}
