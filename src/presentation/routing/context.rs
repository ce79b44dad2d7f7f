use crate::domain::article::{ArticleCategory, Language};

/// UI state threaded explicitly through one render pass. Built per request
/// by the dispatcher and never stored on the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub selected_category: ArticleCategory,
    pub selected_language: Language,
    /// Public base URL without trailing slash, for absolute links.
    pub base_url: String,
}

impl RenderContext {
    #[must_use]
    pub fn absolute(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
