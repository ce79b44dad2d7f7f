use crate::domain::portfolio::{ImageOrientation, Project};

const REPOSITORY_BASE: &str = "https://github.com/capelski";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDto {
    pub title: &'static str,
    pub date: Option<&'static str>,
    pub image_url: String,
    pub image_orientation: ImageOrientation,
    pub repository_url: Option<String>,
    pub demo_url: Option<String>,
    pub description: &'static [&'static str],
}

impl ProjectDto {
    pub(crate) fn new(project: &Project, base_url: &str) -> Self {
        Self {
            title: project.title,
            date: project.date,
            image_url: format!("/images/portfolio/{}", project.image),
            image_orientation: project.image_orientation,
            repository_url: project
                .repository
                .map(|name| format!("{REPOSITORY_BASE}/{name}")),
            demo_url: project.demo.map(|demo| demo.url(base_url)),
            description: project.description,
        }
    }
}
