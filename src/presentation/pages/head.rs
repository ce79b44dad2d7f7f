use maud::{Markup, html};

/// Document-level metadata a page contributes to `<head>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHead {
    pub title: String,
    pub description: String,
    /// Absolute canonical URL of the page.
    pub url: String,
    /// Absolute URL of the share image, when the page has one.
    pub image: Option<String>,
    /// Text offered to social previews in place of the description.
    pub share_text: Option<String>,
}

impl DocumentHead {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: url.into(),
            image: None,
            share_text: None,
        }
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn with_share_text(mut self, text: impl Into<String>) -> Self {
        self.share_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn render(&self) -> Markup {
        let share = self.share_text.as_deref().unwrap_or(&self.description);
        html! {
            title { (self.title) }
            meta name="description" content=(self.description);
            meta property="og:title" content=(self.title);
            meta property="og:description" content=(share);
            meta property="og:url" content=(self.url);
            meta name="twitter:description" content=(share);
            @if let Some(image) = &self.image {
                meta property="og:image" content=(image);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_open_graph_tags() {
        let head = DocumentHead::new("Blog", "Entries", "https://example.org/blog")
            .with_image("https://example.org/images/x.png");
        let html = head.render().into_string();
        assert!(html.starts_with("<title>Blog</title>"));
        assert!(html.contains(r#"<meta property="og:url" content="https://example.org/blog">"#));
        assert!(html.contains(r#"<meta property="og:image" content="https://example.org/images/x.png">"#));
    }

    #[test]
    fn escapes_text_and_attributes() {
        let head = DocumentHead::new("A <b> & \"c\"", "x\"y", "https://example.org/");
        let html = head.render().into_string();
        assert!(html.contains("<title>A &lt;b&gt; &amp; &quot;c&quot;</title>"));
        assert!(html.contains(r#"content="x&quot;y""#));
        assert!(!html.contains("og:image"));
    }

    #[test]
    fn share_text_replaces_the_social_description() {
        let html = DocumentHead::new("Post", "Plain summary", "https://example.org/post")
            .with_share_text("Read this 🚀")
            .render()
            .into_string();
        assert!(html.contains(r#"<meta name="description" content="Plain summary">"#));
        assert!(html.contains(r#"<meta property="og:description" content="Read this 🚀">"#));
        assert!(html.contains(r#"<meta name="twitter:description" content="Read this 🚀">"#));

        let html = DocumentHead::new("Post", "Plain summary", "https://example.org/post")
            .render()
            .into_string();
        assert!(html.contains(r#"<meta property="og:description" content="Plain summary">"#));
    }
}
