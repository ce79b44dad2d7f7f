use std::sync::Arc;

use crate::domain::article::ArticleReadRepository;

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
}

impl ArticleQueryService {
    #[must_use]
    pub const fn new(read_repo: Arc<dyn ArticleReadRepository>) -> Self {
        Self { read_repo }
    }

    #[must_use]
    pub fn article_count(&self) -> usize {
        self.read_repo.get_all().len()
    }
}
