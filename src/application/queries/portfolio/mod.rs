use std::sync::Arc;

use crate::{
    application::dto::ProjectDto,
    domain::portfolio::{ProjectRepository, ProjectSection},
};

pub struct PortfolioQueryService {
    repo: Arc<dyn ProjectRepository>,
}

impl PortfolioQueryService {
    #[must_use]
    pub const fn new(repo: Arc<dyn ProjectRepository>) -> Self {
        Self { repo }
    }

    /// Projects of one section in catalogue order, with links resolved
    /// against `base_url`.
    #[must_use]
    pub fn list_projects(&self, section: ProjectSection, base_url: &str) -> Vec<ProjectDto> {
        self.repo
            .list_section(section)
            .into_iter()
            .map(|project| ProjectDto::new(project, base_url))
            .collect()
    }
}
