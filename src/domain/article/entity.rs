// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleCategory, ArticleId, Language};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleMetadata {
    pub id: ArticleId,
    pub category: ArticleCategory,
    /// ISO `YYYY-MM-DD` publication date.
    pub date: &'static str,
    /// Estimated reading minutes.
    pub duration: u32,
    pub languages: &'static [Language],
    pub share_image: Option<&'static str>,
}

impl ArticleMetadata {
    /// # Errors
    ///
    /// `DomainError::Validation` when `date` is not `YYYY-MM-DD`.
    pub fn published_on(&self) -> DomainResult<NaiveDate> {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").map_err(|err| {
            DomainError::Validation(format!("{}: invalid date {:?}: {err}", self.id, self.date))
        })
    }

    #[must_use]
    pub fn supports(&self, language: Language) -> bool {
        self.languages.contains(&language)
    }
}

/// One localized variant of an article. `introduction` and `body` are trusted
/// HTML fragments authored alongside the metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleContent {
    pub title: &'static str,
    pub description: &'static str,
    pub share_sentence: Option<&'static str>,
    pub introduction: &'static str,
    pub body: &'static str,
}

pub type ContentResolver = fn(Language) -> Option<ArticleContent>;

#[derive(Debug, Clone, Copy)]
pub struct Article {
    pub metadata: ArticleMetadata,
    content: ContentResolver,
}

impl Article {
    #[must_use]
    pub const fn new(metadata: ArticleMetadata, content: ContentResolver) -> Self {
        Self { metadata, content }
    }

    #[must_use]
    pub const fn id(&self) -> ArticleId {
        self.metadata.id
    }

    /// The requested language when the article declares it, its first
    /// declared language otherwise.
    #[must_use]
    pub fn resolve_language(&self, requested: Language) -> Language {
        if self.metadata.supports(requested) {
            requested
        } else {
            self.metadata.languages.first().copied().unwrap_or(requested)
        }
    }

    #[must_use]
    pub fn content(&self, language: Language) -> Option<ArticleContent> {
        (self.content)(language)
    }

    /// Content in [`Self::resolve_language`] of `requested`.
    ///
    /// # Errors
    ///
    /// `DomainError::IncompleteContent` when the resolved language has no
    /// content.
    pub fn localized(&self, requested: Language) -> DomainResult<(Language, ArticleContent)> {
        let language = self.resolve_language(requested);
        self.content(language)
            .map(|content| (language, content))
            .ok_or_else(|| {
                DomainError::IncompleteContent(format!("{} has no {language} content", self.id()))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EN_INTRO: ArticleContent = ArticleContent {
        title: "Title",
        description: "Description",
        share_sentence: None,
        introduction: "<p>intro</p>",
        body: "<p>body</p>",
    };

    fn english_only(language: Language) -> Option<ArticleContent> {
        (language == Language::En).then_some(EN_INTRO)
    }

    fn sample(languages: &'static [Language], date: &'static str) -> Article {
        Article::new(
            ArticleMetadata {
                id: ArticleId::ReactSsr,
                category: ArticleCategory::Tech,
                date,
                duration: 7,
                languages,
                share_image: None,
            },
            english_only,
        )
    }

    #[test]
    fn resolves_requested_language_when_declared() {
        let article = sample(&[Language::En, Language::Ca], "2025-03-18");
        assert_eq!(article.resolve_language(Language::Ca), Language::Ca);
    }

    #[test]
    fn falls_back_to_first_declared_language() {
        let article = sample(&[Language::En], "2025-03-18");
        assert_eq!(article.resolve_language(Language::Ca), Language::En);
        let (language, content) = article.localized(Language::Ca).unwrap();
        assert_eq!(language, Language::En);
        assert_eq!(content.title, "Title");
    }

    #[test]
    fn declared_language_without_content_is_reported() {
        let article = sample(&[Language::Ca], "2025-03-18");
        assert!(matches!(
            article.localized(Language::Ca),
            Err(DomainError::IncompleteContent(_))
        ));
    }

    #[test]
    fn parses_publication_date() {
        let article = sample(&[Language::En], "2025-03-18");
        assert_eq!(
            article.metadata.published_on().unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 18).unwrap()
        );
        assert!(sample(&[Language::En], "18/03/2025").metadata.published_on().is_err());
    }
}
