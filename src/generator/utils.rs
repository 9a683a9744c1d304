use std::{borrow::Borrow, cmp::Ordering};

use pulldown_cmark::{html, Options, Parser};

use super::data::Post;

/// Converts a markdown body into HTML.
pub(super) fn to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let mut body_html = String::new();
    html::push_html(&mut body_html, Parser::new_ext(markdown, options));
    body_html
}

// newer first. plain string comparison, so dates must be zero-padded.
pub(super) fn sort_post<T: Borrow<Post>>(a: &T, b: &T) -> Ordering {
    b.borrow().date.cmp(&a.borrow().date)
}
