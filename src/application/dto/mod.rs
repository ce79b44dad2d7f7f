pub mod articles;
pub mod portfolio;

pub use articles::{ArticleDetailDto, ArticleLinkDto, ArticleSummaryDto};
pub use portfolio::ProjectDto;
