use std::collections::HashSet;

use crate::domain::{
    article::{Article, ArticleReadRepository, ContentCompletenessSpec},
    errors::{DomainError, DomainResult},
};

use super::articles::DECLARED;

/// In-memory Article Registry, built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct StaticArticleRegistry {
    articles: Vec<Article>,
}

impl StaticArticleRegistry {
    /// Builds a registry from articles listed oldest first.
    ///
    /// # Errors
    ///
    /// Rejects duplicate ids, unparsable dates and declared languages
    /// without content.
    pub fn new(declared: &[Article]) -> DomainResult<Self> {
        let mut seen = HashSet::new();
        for article in declared {
            if !seen.insert(article.id()) {
                return Err(DomainError::Validation(format!(
                    "article {} is declared twice",
                    article.id()
                )));
            }
            article.metadata.published_on()?;

            let spec = ContentCompletenessSpec::new(article);
            if !spec.is_satisfied() {
                let missing: Vec<_> = spec
                    .missing_languages()
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                return Err(DomainError::IncompleteContent(format!(
                    "article {} declares languages without content: [{}]",
                    article.id(),
                    missing.join(", ")
                )));
            }
        }

        Ok(Self {
            articles: declared.iter().rev().copied().collect(),
        })
    }

    /// The site's published articles.
    ///
    /// # Errors
    ///
    /// Fails when the declared articles do not pass [`Self::new`].
    pub fn site() -> DomainResult<Self> {
        Self::new(&DECLARED)
    }
}

impl ArticleReadRepository for StaticArticleRegistry {
    fn get_all(&self) -> &[Article] {
        &self.articles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{
        ArticleCategory, ArticleContent, ArticleId, ArticleMetadata, Language,
    };

    fn content(_: Language) -> Option<ArticleContent> {
        Some(ArticleContent {
            title: "t",
            description: "d",
            share_sentence: None,
            introduction: "",
            body: "",
        })
    }

    fn no_content(_: Language) -> Option<ArticleContent> {
        None
    }

    fn metadata(id: ArticleId, category: ArticleCategory) -> ArticleMetadata {
        ArticleMetadata {
            id,
            category,
            date: "2021-01-01",
            duration: 1,
            languages: &[Language::En],
            share_image: None,
        }
    }

    #[test]
    fn site_registry_is_valid() {
        let registry = StaticArticleRegistry::site().expect("declared articles are complete");
        assert_eq!(registry.get_all().len(), DECLARED.len());
    }

    #[test]
    fn display_order_is_reverse_declaration_order() {
        let registry = StaticArticleRegistry::site().unwrap();
        let ids: Vec<_> = registry.get_all().iter().map(Article::id).collect();
        let mut declared: Vec<_> = DECLARED.iter().map(Article::id).collect();
        declared.reverse();
        assert_eq!(ids, declared);
        assert_eq!(ids.first(), Some(&ArticleId::DynamicSitemap));
        assert_eq!(ids.last(), Some(&ArticleId::ProvinencaDesconeguda));
    }

    #[test]
    fn every_registered_id_is_found() {
        let registry = StaticArticleRegistry::site().unwrap();
        for article in registry.get_all() {
            assert_eq!(registry.find_by_id(article.id()).map(Article::id), Some(article.id()));
        }
    }

    #[test]
    fn every_article_id_is_declared() {
        let registry = StaticArticleRegistry::site().unwrap();
        assert_eq!(DECLARED.len(), ArticleId::ALL.len());
        for id in ArticleId::ALL {
            assert!(DECLARED.iter().any(|a| a.id() == id), "{id} is not declared");
            assert_eq!(registry.find_by_id(id).map(Article::id), Some(id));
        }
    }

    #[test]
    fn category_filter_keeps_relative_order() {
        let registry = StaticArticleRegistry::site().unwrap();
        for category in ArticleCategory::ALL {
            let filtered: Vec<_> = registry
                .filter_by_category(category)
                .into_iter()
                .map(Article::id)
                .collect();
            let expected: Vec<_> = registry
                .get_all()
                .iter()
                .filter(|a| a.metadata.category == category)
                .map(Article::id)
                .collect();
            assert_eq!(filtered, expected);
        }
        assert_eq!(
            registry
                .filter_by_category(ArticleCategory::OffTopic)
                .iter()
                .map(|a| a.id())
                .collect::<Vec<_>>(),
            vec![ArticleId::ProvinencaDesconeguda]
        );
    }

    #[test]
    fn neighbours_follow_display_order() {
        let registry = StaticArticleRegistry::new(&[
            Article::new(metadata(ArticleId::WebRtc, ArticleCategory::Tech), content),
            Article::new(metadata(ArticleId::TypedWebApi, ArticleCategory::Tech), content),
            Article::new(metadata(ArticleId::ReactSsr, ArticleCategory::Tech), content),
        ])
        .unwrap();

        let middle = registry.find_neighbours(ArticleId::TypedWebApi);
        assert_eq!(middle.previous.map(Article::id), Some(ArticleId::WebRtc));
        assert_eq!(middle.next.map(Article::id), Some(ArticleId::ReactSsr));

        let newest = registry.find_neighbours(ArticleId::ReactSsr);
        assert!(newest.next.is_none());

        let missing = registry.find_neighbours(ArticleId::SudokuGeneration);
        assert!(missing.previous.is_none() && missing.next.is_none());
    }

    #[test]
    fn rejects_declared_language_without_content() {
        let err = StaticArticleRegistry::new(&[Article::new(
            metadata(ArticleId::WebRtc, ArticleCategory::Tech),
            no_content,
        )])
        .unwrap_err();
        assert!(matches!(err, DomainError::IncompleteContent(_)));
    }

    #[test]
    fn rejects_duplicate_ids_and_bad_dates() {
        let duplicated = StaticArticleRegistry::new(&[
            Article::new(metadata(ArticleId::WebRtc, ArticleCategory::Tech), content),
            Article::new(metadata(ArticleId::WebRtc, ArticleCategory::Tech), content),
        ]);
        assert!(matches!(duplicated, Err(DomainError::Validation(_))));

        let mut bad_date = metadata(ArticleId::WebRtc, ArticleCategory::Tech);
        bad_date.date = "2021-13-01";
        assert!(StaticArticleRegistry::new(&[Article::new(bad_date, content)]).is_err());
    }
}
