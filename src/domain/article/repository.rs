use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::{ArticleCategory, ArticleId};

/// Articles adjacent to one article in display order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArticleNeighbours<'a> {
    /// Published before the article (further down the listing).
    pub previous: Option<&'a Article>,
    /// Published after the article (further up the listing).
    pub next: Option<&'a Article>,
}

pub trait ArticleReadRepository: Send + Sync {
    /// Every article in display order, most recently added first.
    fn get_all(&self) -> &[Article];

    fn find_by_id(&self, id: ArticleId) -> Option<&Article> {
        self.get_all().iter().find(|article| article.id() == id)
    }

    fn filter_by_category(&self, category: ArticleCategory) -> Vec<&Article> {
        self.get_all()
            .iter()
            .filter(|article| article.metadata.category == category)
            .collect()
    }

    fn find_neighbours(&self, id: ArticleId) -> ArticleNeighbours<'_> {
        let all = self.get_all();
        let Some(index) = all.iter().position(|article| article.id() == id) else {
            return ArticleNeighbours::default();
        };
        ArticleNeighbours {
            previous: all.get(index + 1),
            next: index.checked_sub(1).and_then(|i| all.get(i)),
        }
    }
}
