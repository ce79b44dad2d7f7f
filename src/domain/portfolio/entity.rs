// src/domain/portfolio/entity.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageOrientation {
    #[default]
    Landscape,
    Portrait,
}

impl ImageOrientation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
        }
    }
}

/// Where a project demo lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoLink {
    /// Absolute URL on a third-party host.
    External(&'static str),
    /// Path hosted under the site's public base URL, e.g. `/jokify/`.
    Hosted(&'static str),
}

impl DemoLink {
    #[must_use]
    pub fn url(self, base_url: &str) -> String {
        match self {
            Self::External(url) => url.to_string(),
            Self::Hosted(path) => format!("{base_url}{path}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectSection {
    Projects,
    PersonalPageEvolution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub date: Option<&'static str>,
    /// File name under `/images/portfolio/`.
    pub image: &'static str,
    pub image_orientation: ImageOrientation,
    /// Repository name under the author's GitHub account.
    pub repository: Option<&'static str>,
    pub demo: Option<DemoLink>,
    /// HTML paragraphs.
    pub description: &'static [&'static str],
    pub section: ProjectSection,
}
