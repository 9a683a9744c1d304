use serde::Serialize;

/// One parsed source document. Immutable once the parser returns it.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Post {
    pub title: String,
    /// Output file stem and link target, e.g. `my-post` for `My Post.md`.
    pub url: String,
    pub description: String,
    /// Sort key, compared as a string.
    pub date: String,
    /// Rendered HTML of the body.
    pub content: String,
}

#[derive(Serialize, Debug)]
pub(super) struct PostPageData<'a> {
    pub blog_name: &'a str,
    /// Absolute site URL without a trailing slash, when configured.
    pub blog_url: Option<&'a str>,
    /// Relative path from the page back to the output root.
    pub root: String,
    pub post: &'a Post,
}

impl<'a> PostPageData<'a> {
    pub fn new(blog_name: &'a str, blog_url: Option<&'a str>, post: &'a Post) -> Self {
        Self {
            blog_name,
            blog_url,
            root: root_prefix(&post.url),
            post,
        }
    }
}

/// `./` for top-level pages, one `../` per directory level otherwise.
pub(super) fn root_prefix(url: &str) -> String {
    match url.matches('/').count() {
        0 => "./".to_string(),
        depth => "../".repeat(depth),
    }
}

#[derive(Serialize, Debug)]
pub(super) struct IndexPageData<'a> {
    pub blog_name: &'a str,
    pub blog_url: Option<&'a str>,
    pub description: &'a str,
    pub posts: &'a [Post],
}
