use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::Language;

/// Every declared language of an article resolves to content with a title.
pub struct ContentCompletenessSpec<'a> {
    article: &'a Article,
}

impl<'a> ContentCompletenessSpec<'a> {
    #[must_use]
    pub const fn new(article: &'a Article) -> Self {
        Self { article }
    }

    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        !self.article.metadata.languages.is_empty() && self.missing_languages().is_empty()
    }

    #[must_use]
    pub fn missing_languages(&self) -> Vec<Language> {
        self.article
            .metadata
            .languages
            .iter()
            .copied()
            .filter(|language| {
                self.article
                    .content(*language)
                    .is_none_or(|content| content.title.trim().is_empty())
            })
            .collect()
    }
}
