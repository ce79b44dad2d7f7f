use crate::domain::article::{
    Article, ArticleCategory, ArticleContent, ArticleId, ArticleMetadata, Language,
};

/// Listing entry: metadata plus the introduction in the resolved language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSummaryDto {
    pub id: ArticleId,
    pub category: ArticleCategory,
    pub date: &'static str,
    pub duration: u32,
    pub languages: Vec<Language>,
    pub language: Language,
    pub title: &'static str,
    pub description: &'static str,
    pub introduction: &'static str,
}

impl ArticleSummaryDto {
    pub(crate) fn new(metadata: &ArticleMetadata, language: Language, content: ArticleContent) -> Self {
        Self {
            id: metadata.id,
            category: metadata.category,
            date: metadata.date,
            duration: metadata.duration,
            languages: metadata.languages.to_vec(),
            language,
            title: content.title,
            description: content.description,
            introduction: content.introduction,
        }
    }
}

/// Title of a neighbouring article, for timeline links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleLinkDto {
    pub id: ArticleId,
    pub title: &'static str,
}

impl ArticleLinkDto {
    pub(crate) fn resolve(article: &Article, requested: Language) -> Option<Self> {
        let (_, content) = article.localized(requested).ok()?;
        Some(Self {
            id: article.id(),
            title: content.title,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDetailDto {
    pub summary: ArticleSummaryDto,
    pub share_sentence: Option<&'static str>,
    pub share_image: Option<&'static str>,
    pub body: &'static str,
    pub previous: Option<ArticleLinkDto>,
    pub next: Option<ArticleLinkDto>,
}
