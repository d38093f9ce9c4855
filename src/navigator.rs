//! Page-transition helper.
//!
//! Path computation is pure ([`target_for`]); the side-effecting act of
//! navigating lives behind the [`Navigate`] trait, so embedders plug in
//! whatever actually moves the browsing context.

/// Where the current page is served from, as far as navigation is concerned.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    /// True when the page is served straight off the local filesystem, where
    /// there is no host and root-relative paths do not resolve.
    pub file_based: bool,
    /// Base path override for hosted deployments not served from `/` (project
    /// pages under a subpath, for instance).
    pub base_path: Option<String>,
}

/// Compute the navigation target for `page` in the given context.
///
/// `"index"` maps to `index.html` in a file-based context and to the base
/// path (default `/`) otherwise; every other page maps to `<page>.html`.
pub fn target_for(page: &str, context: &PageContext) -> String {
    if page == "index" {
        if context.file_based {
            "index.html".to_string()
        } else {
            context.base_path.clone().unwrap_or_else(|| "/".to_string())
        }
    } else {
        format!("{page}.html")
    }
}

/// The side-effecting navigation capability.
pub trait Navigate {
    /// Redirect the current browsing context to `target`. No history
    /// management, no validation that the target exists.
    fn goto(&mut self, target: &str);
}

/// Couples a [`PageContext`] with a [`Navigate`] backend.
pub struct Navigator<N: Navigate> {
    context: PageContext,
    backend: N,
}

impl<N: Navigate> Navigator<N> {
    pub fn new(context: PageContext, backend: N) -> Self {
        Self { context, backend }
    }

    /// Navigate to `page`, computing the target with [`target_for`].
    pub fn navigate_to(&mut self, page: &str) {
        let target = target_for(page, &self.context);
        self.backend.goto(&target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recording(Vec<String>);

    impl Navigate for Recording {
        fn goto(&mut self, target: &str) {
            self.0.push(target.to_string());
        }
    }

    #[test]
    fn index_in_file_context_uses_filename() {
        let context = PageContext {
            file_based: true,
            base_path: None,
        };
        assert_eq!(target_for("index", &context), "index.html");
    }

    #[test]
    fn index_in_hosted_context_uses_root() {
        assert_eq!(target_for("index", &PageContext::default()), "/");
    }

    #[test]
    fn index_respects_base_path_override() {
        let context = PageContext {
            file_based: false,
            base_path: Some("/votes/".to_string()),
        };
        assert_eq!(target_for("index", &context), "/votes/");
    }

    #[test]
    fn other_pages_get_html_suffix() {
        assert_eq!(target_for("results", &PageContext::default()), "results.html");
    }

    #[test]
    fn navigator_drives_the_backend() {
        let mut navigator = Navigator::new(
            PageContext {
                file_based: true,
                base_path: None,
            },
            Recording::default(),
        );
        navigator.navigate_to("index");
        navigator.navigate_to("results");
        assert_eq!(navigator.backend.0, vec!["index.html", "results.html"]);
    }
}
