use std::path::{Component, Path};

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use super::{data::Post, utils::to_html};

const MARKDOWN_EXTENSION: &str = ".md";
const EXPECTED_HEADERS: usize = 3;

// header, then a line holding only `---`, then the body
static HEADER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"\A(.*?)\n---\r?\n(.*)\z")
        .dot_matches_new_line(true)
        .build()
        .unwrap()
});

/// Lower-cases `url` and replaces every space with a hyphen. Nothing else is
/// touched.
pub(crate) fn normalize_url(url: &str) -> String {
    url.to_lowercase().replace(' ', "-")
}

/// Derives the output URL from a path relative to the source root:
/// `Notes/My Post.md` becomes `notes/my-post`.
pub(crate) fn derive_url(relative_path: &Path) -> String {
    let joined = relative_path
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/");
    normalize_url(joined.strip_suffix(MARKDOWN_EXTENSION).unwrap_or(&joined))
}

/// Splits `text` into its header block and markdown body and builds a
/// [`Post`]. Malformed input is logged and parsing carries on with whatever
/// could be recovered; this never fails.
pub(crate) fn parse_post(relative_path: &Path, text: &str) -> Post {
    let mut post = Post {
        url: derive_url(relative_path),
        ..Default::default()
    };

    let body = match HEADER_PATTERN.captures(text) {
        Some(caps) => {
            let header = caps.get(1).map_or("", |m| m.as_str());
            parse_header(relative_path, header, &mut post);
            caps.get(2).map_or("", |m| m.as_str())
        }
        None => {
            warn!("{relative_path:?}: header delimiter `---` not found, treating whole file as body");
            text
        }
    };
    post.content = to_html(body);

    debug!("parsed {relative_path:?} as {:?}", post.url);
    post
}

fn parse_header(relative_path: &Path, header: &str, post: &mut Post) {
    let lines: Vec<&str> = header
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() < EXPECTED_HEADERS {
        warn!(
            "{relative_path:?}: expected {EXPECTED_HEADERS} header lines, found {}",
            lines.len()
        );
    }

    for line in lines {
        let Some((name, value)) = line.split_once('=') else {
            warn!("{relative_path:?}: header line without `=`: {line:?}");
            continue;
        };
        let value = value.trim().to_string();
        match name.trim() {
            "title" => post.title = value,
            "date" => post.date = value,
            "description" | "desc" => post.description = value,
            _ => {}
        }
    }
}
